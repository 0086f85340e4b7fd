use thiserror::Error;

/// Errors that can occur while asking the model for a completion.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// Transport failure (connect, TLS, timeout, body read).
  #[error("{0}")]
  Http(#[from] reqwest::Error),

  /// The service answered with a non-success status.
  #[error("{message}")]
  Api { status: u16, message: String },

  /// The service answered 2xx with a body that is not a completion.
  #[error("Invalid response from model API: {message}")]
  InvalidResponse { message: String },

  /// The completion carried no content.
  #[error("No response content received from the model")]
  EmptyResponse,
}
