use thiserror::Error;

/// Errors that can occur while parsing variables or rendering a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
  /// The `vars` document is not valid YAML.
  #[error("Invalid YAML in vars parameter: {message}")]
  InvalidYaml { message: String },

  /// The `vars` document parsed, but its root is not a mapping.
  #[error("Variables must be a YAML object")]
  NotAnObject,

  /// Template syntax error or undefined variable.
  #[error("Template rendering error: {message}")]
  Render { message: String },
}
