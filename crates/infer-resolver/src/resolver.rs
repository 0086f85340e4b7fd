//! File-or-text resolution for the prompt fields.
//!
//! Each field is resolved in a fixed priority order:
//! 1. a non-empty file path (the file must exist)
//! 2. non-empty literal text
//! 3. the field's fallback (an error for the prompt, a default for the system prompt)

use std::fmt;
use std::path::Path;

use infer_config::{DEFAULT_SYSTEM_PROMPT, RunInputs, non_empty};
use tracing::debug;

use crate::error::ResolveError;

/// The logical field being resolved. Used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
  Prompt,
  SystemPrompt,
}

impl PromptField {
  pub(crate) fn lowercase(&self) -> &'static str {
    match self {
      PromptField::Prompt => "prompt",
      PromptField::SystemPrompt => "system prompt",
    }
  }
}

impl fmt::Display for PromptField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PromptField::Prompt => write!(f, "Prompt"),
      PromptField::SystemPrompt => write!(f, "System prompt"),
    }
  }
}

/// Prompt strings before template rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompts {
  pub prompt: String,
  pub system_prompt: String,
}

/// Resolve both prompt fields from the run inputs.
///
/// The prompt is resolved first, so a run with a missing prompt and a missing
/// system prompt file reports the prompt error.
pub fn resolve_prompts(inputs: &RunInputs) -> Result<ResolvedPrompts, ResolveError> {
  let prompt = resolve_field(
    PromptField::Prompt,
    non_empty(&inputs.prompt_file),
    non_empty(&inputs.prompt),
  )?;
  let system_prompt = resolve_field(
    PromptField::SystemPrompt,
    non_empty(&inputs.system_prompt_file),
    non_empty(&inputs.system_prompt),
  )?;

  Ok(ResolvedPrompts {
    prompt,
    system_prompt,
  })
}

/// Resolve a single field from its file path and literal text inputs.
///
/// File contents are returned exactly as stored, without trimming.
pub fn resolve_field(
  field: PromptField,
  file: Option<&str>,
  text: Option<&str>,
) -> Result<String, ResolveError> {
  if let Some(path) = file.filter(|p| !p.is_empty()) {
    if !Path::new(path).exists() {
      return Err(ResolveError::FileNotFound {
        field,
        path: path.to_string(),
      });
    }
    debug!(field = %field, path, "reading from file");
    return std::fs::read_to_string(path).map_err(|source| ResolveError::Read {
      field,
      path: path.to_string(),
      source,
    });
  }

  if let Some(text) = text.filter(|t| !t.is_empty()) {
    return Ok(text.to_string());
  }

  match field {
    PromptField::Prompt => Err(ResolveError::MissingPrompt),
    PromptField::SystemPrompt => Ok(DEFAULT_SYSTEM_PROMPT.to_string()),
  }
}
