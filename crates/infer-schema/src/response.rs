use serde_json::Value;
use tracing::debug;

use crate::validate::validate_data_against_schema;

/// How a model reply measured up against the response schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseCheck {
  /// The reply is JSON and satisfies the schema.
  Valid,
  /// The reply could not be parsed as JSON.
  NotJson { message: String },
  /// The reply is JSON but violates the schema.
  Mismatch { errors: Vec<String> },
}

impl ResponseCheck {
  /// The non-fatal warning to surface, if any.
  pub fn warning(&self) -> Option<String> {
    match self {
      ResponseCheck::Valid => None,
      ResponseCheck::NotJson { message } => {
        Some(format!("AI response is not valid JSON: {}", message))
      }
      ResponseCheck::Mismatch { errors } => Some(format!(
        "AI response does not match schema: {}",
        errors.join(", ")
      )),
    }
  }
}

/// Check a raw model reply against the response schema.
pub fn check_response(text: &str, schema: &Value) -> ResponseCheck {
  let data: Value = match serde_json::from_str(text) {
    Ok(data) => data,
    Err(e) => {
      return ResponseCheck::NotJson {
        message: e.to_string(),
      };
    }
  };

  let outcome = validate_data_against_schema(&data, schema);
  debug!(valid = outcome.valid, "checked response against schema");

  match outcome.errors {
    None => ResponseCheck::Valid,
    Some(errors) => ResponseCheck::Mismatch { errors },
  }
}
