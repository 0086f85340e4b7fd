//! Run error types.

use infer_client::GenerateError;
use infer_config::ConfigError;
use infer_resolver::ResolveError;
use infer_schema::SchemaError;
use infer_template::TemplateError;

/// A failure at any step of a run.
///
/// Every variant displays its source's message unchanged, so the text a user
/// sees is exactly what the failing step reported.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Resolve(#[from] ResolveError),

  #[error(transparent)]
  Template(#[from] TemplateError),

  #[error(transparent)]
  Schema(#[from] SchemaError),

  #[error(transparent)]
  Generation(#[from] GenerateError),
}
