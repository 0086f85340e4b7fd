use thiserror::Error;

use crate::resolver::PromptField;

/// Errors that can occur while resolving prompt inputs.
#[derive(Debug, Error)]
pub enum ResolveError {
  /// Neither `prompt` nor `prompt-file` was supplied.
  #[error("Either 'prompt' or 'prompt-file' input must be provided")]
  MissingPrompt,

  /// The configured file path does not exist.
  #[error("{field} file not found: {path}")]
  FileNotFound { field: PromptField, path: String },

  /// The file exists but could not be read as text.
  #[error("Failed to read {} file {path}: {source}", .field.lowercase())]
  Read {
    field: PromptField,
    path: String,
    #[source]
    source: std::io::Error,
  },
}
