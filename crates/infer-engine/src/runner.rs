//! Single-run orchestration.

use std::sync::{Arc, Mutex};

use infer_client::{GenerationRequest, Generator};
use infer_config::{RunInputs, non_empty};
use infer_resolver::resolve_prompts;
use infer_schema::{append_schema_instructions, check_response, load_validated_schema};
use infer_template::TemplateRenderer;
use tracing::{debug, error, info, warn};

use crate::error::RunError;
use crate::events::{NoopNotifier, RunEvent, RunNotifier};
use crate::result::RunResult;
use crate::state::RunState;

/// Runs one prompt through resolution, templating, generation and schema checks.
///
/// A runner owns its inputs; build a new one for every run.
pub struct Runner<G: Generator> {
  inputs: RunInputs,
  generator: G,
  notifier: Arc<dyn RunNotifier>,
  state: Mutex<RunState>,
}

impl<G: Generator> Runner<G> {
  /// Create a runner that discards events.
  pub fn new(inputs: RunInputs, generator: G) -> Self {
    Self::with_notifier(inputs, generator, Arc::new(NoopNotifier))
  }

  /// Create a runner that reports events to `notifier`.
  pub fn with_notifier(inputs: RunInputs, generator: G, notifier: Arc<dyn RunNotifier>) -> Self {
    Self {
      inputs,
      generator,
      notifier,
      state: Mutex::new(RunState::Idle),
    }
  }

  /// The generator used for the model call.
  pub fn generator(&self) -> &G {
    &self.generator
  }

  /// Current state of the run.
  pub fn state(&self) -> RunState {
    *self.state.lock().unwrap_or_else(|e| e.into_inner())
  }

  /// Execute the run.
  ///
  /// Never returns an error: every failure is folded into [`RunResult::Failed`].
  pub async fn run(&self) -> RunResult {
    match self.execute().await {
      Ok(text) => {
        self.transition(RunState::Succeeded);
        self.notifier.notify(RunEvent::Completed { text: text.clone() });
        RunResult::Succeeded { text }
      }
      Err(e) => {
        let message = e.to_string();
        error!(error = %message, "run failed");
        self.transition(RunState::Failed);
        self.notifier.notify(RunEvent::Failed {
          error: message.clone(),
        });
        RunResult::Failed { message }
      }
    }
  }

  async fn execute(&self) -> Result<String, RunError> {
    let inputs = &self.inputs;

    self.transition(RunState::ResolvingInputs);
    inputs.validate()?;
    let resolved = resolve_prompts(inputs)?;

    self.transition(RunState::Templating);
    let renderer = TemplateRenderer::new(inputs.vars.as_deref().unwrap_or_default())?;
    let prompt = renderer.render(&resolved.prompt)?;
    let system_prompt = renderer.render(&resolved.system_prompt)?;

    self.transition(RunState::SchemaPreparing);
    let schema = load_validated_schema(
      non_empty(&inputs.response_schema_file),
      non_empty(&inputs.response_schema),
    )?;
    let prompt = match &schema {
      Some(schema) => append_schema_instructions(&prompt, schema),
      None => prompt,
    };

    self.transition(RunState::Generating);
    info!(model = %inputs.model, schema = schema.is_some(), "prompting model");
    self.notifier.notify(RunEvent::GenerationStarted {
      model: inputs.model.clone(),
    });

    let request = GenerationRequest {
      prompt,
      system_prompt,
      model: inputs.model.clone(),
      token: inputs.token.clone(),
      response_schema: schema,
      max_tokens: inputs.max_tokens,
    };
    let text = self.generator.generate(&request).await?;

    self.transition(RunState::ResponseValidating);
    if let Some(schema) = &request.response_schema {
      if let Some(message) = check_response(&text, schema).warning() {
        warn!(warning = %message, "response failed schema check");
        self.notifier.notify(RunEvent::Warning { message });
      }
    }

    Ok(text)
  }

  fn transition(&self, to: RunState) {
    let from = {
      let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
      std::mem::replace(&mut *state, to)
    };
    debug!(from = %from, to = %to, "run state changed");
    self.notifier.notify(RunEvent::StateChanged { from, to });
  }
}
