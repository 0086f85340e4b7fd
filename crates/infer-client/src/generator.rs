use async_trait::async_trait;

use crate::error::GenerateError;

/// Everything needed for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
  pub prompt: String,
  pub system_prompt: String,
  pub model: String,
  pub token: String,
  /// When present, the model is asked for output matching this JSON schema.
  pub response_schema: Option<serde_json::Value>,
  pub max_tokens: u32,
}

/// Produces text from a model.
#[async_trait]
pub trait Generator: Send + Sync {
  /// Run a single completion and return the raw reply text.
  async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError>;
}
