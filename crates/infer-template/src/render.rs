use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::Value;
use tracing::debug;

use crate::error::TemplateError;

/// Template variables keyed by name.
///
/// Values are the JSON data model: null, bool, number, string, array, or a
/// nested map.
pub type Variables = serde_json::Map<String, Value>;

/// Parse a YAML `vars` document into a variable map.
///
/// Returns `Ok(None)` when the document is empty or whitespace, which tells the
/// caller to skip rendering entirely. A document that is YAML `null` yields an
/// empty map.
pub fn parse_variables(document: &str) -> Result<Option<Variables>, TemplateError> {
  if document.trim().is_empty() {
    return Ok(None);
  }

  let invalid = |e: serde_yaml::Error| TemplateError::InvalidYaml {
    message: e.to_string(),
  };
  let mut parsed: serde_yaml::Value = serde_yaml::from_str(document).map_err(invalid)?;
  parsed.apply_merge().map_err(invalid)?;

  match parsed {
    serde_yaml::Value::Null => Ok(Some(Variables::new())),
    mapping @ serde_yaml::Value::Mapping(_) => {
      serde_yaml::from_value(mapping).map(Some).map_err(invalid)
    }
    _ => Err(TemplateError::NotAnObject),
  }
}

/// Renders templates against one shared set of variables.
///
/// Built once per run from the `vars` input and used for both the prompt and
/// the system prompt.
pub struct TemplateRenderer {
  env: Environment<'static>,
  variables: Option<Variables>,
}

impl TemplateRenderer {
  /// Create a renderer from a YAML `vars` document.
  pub fn new(vars_document: &str) -> Result<Self, TemplateError> {
    let variables = parse_variables(vars_document)?;
    Ok(Self::with_variables(variables))
  }

  /// Create a renderer from already parsed variables.
  ///
  /// `None` means no variables were supplied and templates pass through untouched.
  pub fn with_variables(variables: Option<Variables>) -> Self {
    let mut env = Environment::new();
    // undefined values fail when printed or iterated, but test falsy in `if`
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    // prompts are plain text
    env.set_auto_escape_callback(|_| AutoEscape::None);
    // file-sourced prompts usually end in a newline, keep it
    env.set_keep_trailing_newline(true);

    Self { env, variables }
  }

  /// Render `template` against the variables.
  pub fn render(&self, template: &str) -> Result<String, TemplateError> {
    let Some(variables) = &self.variables else {
      return Ok(template.to_string());
    };

    debug!(variables = variables.len(), "rendering template");

    self
      .env
      .render_str(template, variables)
      .map_err(|e| TemplateError::Render {
        message: e.to_string(),
      })
  }
}

/// Render a single template against a YAML `vars` document.
pub fn render(template: &str, vars_document: &str) -> Result<String, TemplateError> {
  TemplateRenderer::new(vars_document)?.render(template)
}
