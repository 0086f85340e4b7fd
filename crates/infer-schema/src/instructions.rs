use serde_json::Value;

/// Build the instruction block that asks the model for schema-shaped JSON.
///
/// The schema is pretty printed with two-space indentation, keys in the
/// order they were written.
pub fn generate_schema_instructions(schema: &Value) -> String {
  format!(
    "Please respond with valid JSON that matches the following schema:

{:#}

Important:
- Return only valid JSON, no additional text
- Ensure all required fields are included
- Follow the exact property names and types specified
- Use null for optional fields that cannot be determined",
    schema
  )
}

/// Append the schema instructions to a rendered prompt, separated by a blank line.
pub fn append_schema_instructions(prompt: &str, schema: &Value) -> String {
  format!("{}\n\n{}", prompt, generate_schema_instructions(schema))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_instructions_contain_schema() {
    let schema = json!({
      "type": "object",
      "properties": { "name": { "type": "string" } },
      "required": ["name"]
    });

    let instructions = generate_schema_instructions(&schema);

    assert!(instructions.starts_with(
      "Please respond with valid JSON that matches the following schema:\n\n"
    ));
    assert!(instructions.contains("- Return only valid JSON, no additional text"));
    assert!(instructions.contains("- Ensure all required fields are included"));
    assert!(instructions.contains("- Follow the exact property names and types specified"));
    assert!(instructions.ends_with("- Use null for optional fields that cannot be determined"));
    assert!(instructions.contains(&serde_json::to_string_pretty(&schema).unwrap()));
  }

  #[test]
  fn test_instructions_keep_key_order() {
    let schema: Value =
      serde_json::from_str(r#"{"type":"object","required":["z"],"properties":{"z":{}}}"#).unwrap();

    let instructions = generate_schema_instructions(&schema);

    let type_at = instructions.find("\"type\"").unwrap();
    let required_at = instructions.find("\"required\"").unwrap();
    let properties_at = instructions.find("\"properties\"").unwrap();
    assert!(type_at < required_at && required_at < properties_at);
  }

  #[test]
  fn test_empty_schema() {
    let instructions = generate_schema_instructions(&json!({}));
    assert!(instructions.contains("\n\n{}\n\n"));
  }

  #[test]
  fn test_nested_schema_indentation() {
    let schema = json!({ "properties": { "user": { "type": "object" } } });
    let instructions = generate_schema_instructions(&schema);
    assert!(instructions.contains("{\n  \"properties\": {\n    \"user\": {\n      \"type\": \"object\"\n    }\n  }\n}"));
  }

  #[test]
  fn test_append() {
    let prompt = append_schema_instructions("Describe a cat", &json!({ "type": "object" }));
    assert!(prompt.starts_with("Describe a cat\n\nPlease respond with valid JSON"));
  }
}
