//! Chat-completions client.
//!
//! Speaks the OpenAI-compatible `POST {endpoint}/chat/completions` protocol
//! used by GitHub Models and most hosted inference services.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::GenerateError;
use crate::generator::{GenerationRequest, Generator};

#[derive(Debug, Deserialize)]
struct ChatResponse {
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
  content: Option<String>,
}

/// [`Generator`] backed by an HTTP chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
  client: Client,
  endpoint: String,
}

impl ChatClient {
  /// Create a client for the given base URL, e.g. `https://models.github.ai/inference`.
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      endpoint: endpoint.into(),
    }
  }

  fn completions_url(&self) -> String {
    format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
  }
}

#[async_trait]
impl Generator for ChatClient {
  async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
    let url = self.completions_url();
    debug!(url = %url, model = %request.model, "sending completion request");

    let response = self
      .client
      .post(&url)
      .bearer_auth(&request.token)
      .json(&request_body(request))
      .send()
      .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      return Err(GenerateError::Api {
        status: status.as_u16(),
        message: api_error_message(status.as_u16(), &body),
      });
    }

    parse_completion(&body)
  }
}

/// Build the JSON request body for a completion call.
fn request_body(request: &GenerationRequest) -> Value {
  let mut body = json!({
    "model": request.model,
    "messages": [
      { "role": "system", "content": request.system_prompt },
      { "role": "user", "content": request.prompt },
    ],
    "max_tokens": request.max_tokens,
  });

  if let Some(schema) = &request.response_schema {
    body["response_format"] = json!({
      "type": "json_schema",
      "json_schema": {
        "name": "response",
        "schema": schema,
      },
    });
  }

  body
}

/// Extract the first choice's content from a completion body.
fn parse_completion(body: &str) -> Result<String, GenerateError> {
  let parsed: ChatResponse =
    serde_json::from_str(body).map_err(|e| GenerateError::InvalidResponse {
      message: e.to_string(),
    })?;

  parsed
    .choices
    .into_iter()
    .next()
    .and_then(|choice| choice.message.content)
    .filter(|content| !content.is_empty())
    .ok_or(GenerateError::EmptyResponse)
}

/// Pull a readable message out of an error body.
///
/// Prefers `error.message` from a JSON body, then the raw body, then the status.
fn api_error_message(status: u16, body: &str) -> String {
  let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
    v.pointer("/error/message")
      .and_then(Value::as_str)
      .map(str::to_string)
  });

  match from_json {
    Some(message) => message,
    None if !body.trim().is_empty() => body.trim().to_string(),
    None => format!("request failed with status {}", status),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request() -> GenerationRequest {
    GenerationRequest {
      prompt: "test prompt".to_string(),
      system_prompt: "test system prompt".to_string(),
      model: "openai/gpt-4o".to_string(),
      token: "test-token".to_string(),
      response_schema: None,
      max_tokens: 200,
    }
  }

  #[test]
  fn test_completions_url() {
    let client = ChatClient::new("https://models.github.ai/inference/");
    assert_eq!(
      client.completions_url(),
      "https://models.github.ai/inference/chat/completions"
    );
  }

  #[test]
  fn test_request_body() {
    let body = request_body(&request());

    assert_eq!(body["model"], "openai/gpt-4o");
    assert_eq!(body["max_tokens"], 200);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "test system prompt");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "test prompt");
    assert!(body.get("response_format").is_none());
  }

  #[test]
  fn test_request_body_with_schema() {
    let schema = json!({ "type": "object" });
    let body = request_body(&GenerationRequest {
      response_schema: Some(schema.clone()),
      ..request()
    });

    assert_eq!(body["response_format"]["type"], "json_schema");
    assert_eq!(body["response_format"]["json_schema"]["name"], "response");
    assert_eq!(body["response_format"]["json_schema"]["schema"], schema);
  }

  #[test]
  fn test_parse_completion() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
    assert_eq!(parse_completion(body).unwrap(), "hello");
  }

  #[test]
  fn test_parse_completion_without_choices() {
    let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyResponse));
  }

  #[test]
  fn test_parse_completion_null_content() {
    let body = r#"{"choices":[{"message":{"content":null}}]}"#;
    assert!(matches!(
      parse_completion(body).unwrap_err(),
      GenerateError::EmptyResponse
    ));
  }

  #[test]
  fn test_parse_completion_not_json() {
    let err = parse_completion("<html>").unwrap_err();
    assert!(err.to_string().starts_with("Invalid response from model API: "));
  }

  #[test]
  fn test_api_error_message() {
    let body = r#"{"error":{"code":"unauthorized","message":"Bad credentials"}}"#;
    assert_eq!(api_error_message(401, body), "Bad credentials");
    assert_eq!(api_error_message(500, " upstream timeout \n"), "upstream timeout");
    assert_eq!(api_error_message(502, ""), "request failed with status 502");
  }
}
