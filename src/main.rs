use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use infer_client::ChatClient;
use infer_config::{DEFAULT_ENDPOINT, RunInputs, non_empty, parse_max_tokens};
use infer_engine::{RunResult, Runner};

mod host;

use host::ActionNotifier;

/// Infer - render a prompt, ask a model, check the reply against a JSON schema
///
/// Every option can also be supplied the way a GitHub Actions step passes
/// inputs, through `INPUT_<NAME>` environment variables.
#[derive(Parser)]
#[command(name = "infer")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Prompt text (template)
  #[arg(long, env = "INPUT_PROMPT")]
  prompt: Option<String>,

  /// File containing the prompt; takes precedence over --prompt
  #[arg(long, env = "INPUT_PROMPT-FILE")]
  prompt_file: Option<String>,

  /// System prompt text (template)
  #[arg(long, env = "INPUT_SYSTEM-PROMPT")]
  system_prompt: Option<String>,

  /// File containing the system prompt; takes precedence over --system-prompt
  #[arg(long, env = "INPUT_SYSTEM-PROMPT-FILE")]
  system_prompt_file: Option<String>,

  /// Model to run, e.g. openai/gpt-4o
  #[arg(long, env = "INPUT_MODEL")]
  model: Option<String>,

  /// Credential for the inference endpoint
  #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
  token: Option<String>,

  /// Inline JSON schema the reply should match
  #[arg(long, env = "INPUT_RESPONSE-SCHEMA")]
  response_schema: Option<String>,

  /// File containing the JSON schema; takes precedence over --response-schema
  #[arg(long, env = "INPUT_RESPONSE-SCHEMA-FILE")]
  response_schema_file: Option<String>,

  /// YAML document with template variables
  #[arg(long, env = "INPUT_VARS")]
  vars: Option<String>,

  /// Base URL of the chat-completions endpoint
  #[arg(long, env = "INPUT_ENDPOINT")]
  endpoint: Option<String>,

  /// Completion token limit
  #[arg(long, env = "INPUT_MAX-TOKENS")]
  max_tokens: Option<String>,
}

impl Cli {
  fn into_inputs(self) -> Result<RunInputs, infer_config::ConfigError> {
    let max_tokens = parse_max_tokens(self.max_tokens.as_deref())?;
    let endpoint = non_empty(&self.endpoint)
      .unwrap_or(DEFAULT_ENDPOINT)
      .to_string();

    Ok(RunInputs {
      prompt: self.prompt,
      prompt_file: self.prompt_file,
      system_prompt: self.system_prompt,
      system_prompt_file: self.system_prompt_file,
      model: self.model.unwrap_or_default(),
      token: self.token.unwrap_or_default(),
      response_schema: self.response_schema,
      response_schema_file: self.response_schema_file,
      vars: self.vars,
      endpoint,
      max_tokens,
    })
  }
}

fn main() -> Result<ExitCode> {
  init_tracing();
  let cli = Cli::parse();

  let inputs = match cli.into_inputs() {
    Ok(inputs) => inputs,
    Err(e) => {
      host::set_failed(&e.to_string());
      return Ok(ExitCode::FAILURE);
    }
  };

  let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
  let result = rt.block_on(run(inputs));

  match result {
    RunResult::Succeeded { text } => {
      host::set_output("text", &text).context("failed to write step output")?;
      Ok(ExitCode::SUCCESS)
    }
    RunResult::Failed { message } => {
      host::set_failed(&message);
      Ok(ExitCode::FAILURE)
    }
  }
}

async fn run(inputs: RunInputs) -> RunResult {
  tracing::debug!(endpoint = %inputs.endpoint, max_tokens = inputs.max_tokens, "starting run");
  let client = ChatClient::new(inputs.endpoint.clone());
  let runner = Runner::with_notifier(inputs, client, Arc::new(ActionNotifier));
  runner.run().await
}

/// Log to stderr; stdout is reserved for workflow commands.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}
