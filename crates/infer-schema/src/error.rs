use thiserror::Error;

/// Errors that can occur while preparing a response schema.
#[derive(Debug, Error)]
pub enum SchemaError {
  /// The schema file path does not exist.
  #[error("Schema file not found: {path}")]
  FileNotFound { path: String },

  /// The schema file exists but could not be read.
  #[error("Failed to read schema file {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  /// The schema file is not valid JSON.
  #[error("Invalid JSON in schema file {path}: {message}")]
  InvalidFileJson { path: String, message: String },

  /// The inline schema text is not valid JSON.
  #[error("Invalid JSON in inline schema: {message}")]
  InvalidInlineJson { message: String },

  /// The document parsed as JSON but does not compile as a schema.
  #[error("Invalid JSON schema: {}", .errors.join(", "))]
  InvalidSchema { errors: Vec<String> },
}
