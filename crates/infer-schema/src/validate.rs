//! Schema compilation and data validation.
//!
//! Both operations report through [`ValidationOutcome`] instead of failing, so
//! callers decide whether a bad result is fatal.

use jsonschema::{Draft, ValidationError, Validator};
use serde_json::Value;

/// Result of validating a schema, or data against a schema.
///
/// `errors` is `None` exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
  pub valid: bool,
  pub errors: Option<Vec<String>>,
}

impl ValidationOutcome {
  pub fn valid() -> Self {
    Self {
      valid: true,
      errors: None,
    }
  }

  /// A failed outcome. An empty error list is replaced with a generic entry.
  pub fn invalid(errors: Vec<String>) -> Self {
    let errors = if errors.is_empty() {
      vec!["Unknown validation error".to_string()]
    } else {
      errors
    };
    Self {
      valid: false,
      errors: Some(errors),
    }
  }

  /// Error messages, empty when valid.
  pub fn errors(&self) -> &[String] {
    self.errors.as_deref().unwrap_or_default()
  }
}

/// Draft 7 unless the schema names another one through `$schema`.
fn compile(schema: &Value) -> Result<Validator, ValidationError<'static>> {
  let mut options = jsonschema::options().should_validate_formats(true);
  if schema.get("$schema").is_none() {
    options = options.with_draft(Draft::Draft7);
  }
  options.build(schema)
}

/// Check that `schema` compiles as a JSON Schema.
pub fn validate_schema(schema: &Value) -> ValidationOutcome {
  match compile(schema) {
    Ok(_) => ValidationOutcome::valid(),
    Err(e) => ValidationOutcome::invalid(vec![e.to_string()]),
  }
}

/// Validate `data` against `schema`.
///
/// Each violation is reported as `"<instance path>: <message>"`, where the
/// path is a JSON pointer such as `/age`, or `root` for the document itself.
/// A schema that does not compile is reported the same way.
pub fn validate_data_against_schema(data: &Value, schema: &Value) -> ValidationOutcome {
  let validator = match compile(schema) {
    Ok(validator) => validator,
    Err(e) => return ValidationOutcome::invalid(vec![e.to_string()]),
  };

  let errors: Vec<String> = validator
    .iter_errors(data)
    .map(|error| {
      let path = error.instance_path.to_string();
      let path = if path.is_empty() { "root" } else { path.as_str() };
      format!("{}: {}", path, error)
    })
    .collect();

  if errors.is_empty() {
    ValidationOutcome::valid()
  } else {
    ValidationOutcome::invalid(errors)
  }
}
