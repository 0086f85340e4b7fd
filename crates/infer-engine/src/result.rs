use serde::{Deserialize, Serialize};

/// Terminal outcome of a run: the reply text or one failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunResult {
  /// The raw model reply, exactly as returned.
  Succeeded { text: String },
  Failed { message: String },
}

impl RunResult {
  pub fn is_success(&self) -> bool {
    matches!(self, RunResult::Succeeded { .. })
  }

  /// The reply text on success.
  pub fn text(&self) -> Option<&str> {
    match self {
      RunResult::Succeeded { text } => Some(text),
      RunResult::Failed { .. } => None,
    }
  }

  /// The failure message on failure.
  pub fn failure(&self) -> Option<&str> {
    match self {
      RunResult::Succeeded { .. } => None,
      RunResult::Failed { message } => Some(message),
    }
  }
}
