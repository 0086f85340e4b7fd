use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
  Idle,
  ResolvingInputs,
  Templating,
  SchemaPreparing,
  Generating,
  ResponseValidating,
  Succeeded,
  Failed,
}

impl fmt::Display for RunState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      RunState::Idle => "idle",
      RunState::ResolvingInputs => "resolving_inputs",
      RunState::Templating => "templating",
      RunState::SchemaPreparing => "schema_preparing",
      RunState::Generating => "generating",
      RunState::ResponseValidating => "response_validating",
      RunState::Succeeded => "succeeded",
      RunState::Failed => "failed",
    };
    f.write_str(name)
  }
}
