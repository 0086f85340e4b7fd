use thiserror::Error;

/// Errors raised while checking run inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// A required input was absent or empty.
  #[error("Input required and not supplied: {name}")]
  MissingInput { name: &'static str },

  /// An input was supplied but could not be interpreted.
  #[error("Invalid value for input '{name}': {value}")]
  InvalidInput { name: &'static str, value: String },
}
