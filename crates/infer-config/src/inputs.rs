//! Recognized named inputs for a run.
//!
//! | Key                    | Status                                          |
//! |------------------------|-------------------------------------------------|
//! | `prompt`               | optional, one of `prompt`/`prompt-file` needed  |
//! | `prompt-file`          | optional, wins over `prompt`                    |
//! | `system-prompt`        | optional                                        |
//! | `system-prompt-file`   | optional, wins over `system-prompt`             |
//! | `model`                | required                                        |
//! | `token`                | required                                        |
//! | `response-schema`      | optional                                        |
//! | `response-schema-file` | optional, wins over `response-schema`           |
//! | `vars`                 | optional                                        |
//! | `endpoint`             | defaults to [`DEFAULT_ENDPOINT`]                |
//! | `max-tokens`           | defaults to [`DEFAULT_MAX_TOKENS`]              |
//!
//! Empty strings are treated the same as absent values everywhere.

use crate::error::ConfigError;

/// System prompt used when neither `system-prompt` nor `system-prompt-file` is set.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Base URL of the chat-completions service.
pub const DEFAULT_ENDPOINT: &str = "https://models.github.ai/inference";

/// Completion token limit sent with each request.
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// All named inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInputs {
  pub prompt: Option<String>,
  pub prompt_file: Option<String>,
  pub system_prompt: Option<String>,
  pub system_prompt_file: Option<String>,
  pub model: String,
  pub token: String,
  pub response_schema: Option<String>,
  pub response_schema_file: Option<String>,
  /// YAML document with template variables.
  pub vars: Option<String>,
  pub endpoint: String,
  pub max_tokens: u32,
}

impl Default for RunInputs {
  fn default() -> Self {
    Self {
      prompt: None,
      prompt_file: None,
      system_prompt: None,
      system_prompt_file: None,
      model: String::new(),
      token: String::new(),
      response_schema: None,
      response_schema_file: None,
      vars: None,
      endpoint: DEFAULT_ENDPOINT.to_string(),
      max_tokens: DEFAULT_MAX_TOKENS,
    }
  }
}

impl RunInputs {
  /// Check that every required input carries a value.
  ///
  /// `model` is checked before `token`, so a run missing both reports `model`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.model.is_empty() {
      return Err(ConfigError::MissingInput { name: "model" });
    }
    if self.token.is_empty() {
      return Err(ConfigError::MissingInput { name: "token" });
    }
    Ok(())
  }
}

/// Parse the `max-tokens` input, falling back to [`DEFAULT_MAX_TOKENS`] when empty.
pub fn parse_max_tokens(value: Option<&str>) -> Result<u32, ConfigError> {
  match value.map(str::trim).filter(|v| !v.is_empty()) {
    None => Ok(DEFAULT_MAX_TOKENS),
    Some(v) => v.parse().map_err(|_| ConfigError::InvalidInput {
      name: "max-tokens",
      value: v.to_string(),
    }),
  }
}

/// View an optional input as `Some` only when it holds a non-empty string.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}
