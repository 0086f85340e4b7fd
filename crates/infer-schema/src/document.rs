use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::validate::validate_schema;

/// Load a schema document from a JSON file.
pub fn load_schema_from_file(path: &str) -> Result<Value, SchemaError> {
  if !Path::new(path).exists() {
    return Err(SchemaError::FileNotFound {
      path: path.to_string(),
    });
  }

  let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
    path: path.to_string(),
    source,
  })?;

  serde_json::from_str(&content).map_err(|e| SchemaError::InvalidFileJson {
    path: path.to_string(),
    message: e.to_string(),
  })
}

/// Parse a schema document from inline JSON text.
pub fn parse_inline_schema(text: &str) -> Result<Value, SchemaError> {
  serde_json::from_str(text).map_err(|e| SchemaError::InvalidInlineJson {
    message: e.to_string(),
  })
}

/// Pick the schema for a run.
///
/// A non-empty file path always wins. The inline text is then ignored
/// entirely and never parsed, so a broken inline value cannot fail the run.
pub fn resolve_schema(
  file: Option<&str>,
  inline: Option<&str>,
) -> Result<Option<Value>, SchemaError> {
  if let Some(path) = file.filter(|p| !p.is_empty()) {
    debug!(path, "loading response schema from file");
    return load_schema_from_file(path).map(Some);
  }

  match inline.filter(|s| !s.is_empty()) {
    Some(text) => parse_inline_schema(text).map(Some),
    None => Ok(None),
  }
}

/// Pick the schema for a run and check that it compiles.
///
/// A schema that parses but does not compile fails with
/// [`SchemaError::InvalidSchema`] so it never reaches the model.
pub fn load_validated_schema(
  file: Option<&str>,
  inline: Option<&str>,
) -> Result<Option<Value>, SchemaError> {
  let Some(schema) = resolve_schema(file, inline)? else {
    return Ok(None);
  };

  let outcome = validate_schema(&schema);
  match outcome.errors {
    None => Ok(Some(schema)),
    Some(errors) => Err(SchemaError::InvalidSchema { errors }),
  }
}
