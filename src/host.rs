//! GitHub Actions host integration.
//!
//! Translates run events and results into workflow commands on stdout and
//! step outputs in the `GITHUB_OUTPUT` file.

use std::fs::OpenOptions;
use std::io::Write;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use infer_engine::{RunEvent, RunNotifier};

/// Prints run events as workflow commands.
pub struct ActionNotifier;

impl RunNotifier for ActionNotifier {
  fn notify(&self, event: RunEvent) {
    match event {
      RunEvent::GenerationStarted { model } => println!("Prompting {} AI model", model),
      RunEvent::Warning { message } => println!("{}", command("warning", &message)),
      RunEvent::Completed { text } => {
        println!("::group::AI Response");
        println!("{}", text);
        println!("::endgroup::");
      }
      RunEvent::StateChanged { .. } | RunEvent::Failed { .. } => {}
    }
  }
}

/// Report a failed run.
pub fn set_failed(message: &str) {
  println!("{}", command("error", message));
}

/// Set a step output.
///
/// Appends to the `GITHUB_OUTPUT` file when running inside Actions. Outside
/// Actions there is no output file and the value is left on stdout, where the
/// `AI Response` group already printed it.
pub fn set_output(name: &str, value: &str) -> Result<()> {
  match output_file(std::env::var_os("GITHUB_OUTPUT")) {
    Some(path) => append_output(&path, name, value),
    None => {
      tracing::debug!(name, "GITHUB_OUTPUT not set, skipping step output");
      Ok(())
    }
  }
}

fn output_file(var: Option<OsString>) -> Option<PathBuf> {
  var.filter(|path| !path.is_empty()).map(PathBuf::from)
}

fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
  let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("failed to open output file: {}", path.display()))?;

  file
    .write_all(format_output(name, value, &delimiter).as_bytes())
    .with_context(|| format!("failed to write output file: {}", path.display()))
}

/// Heredoc-style entry for a multi-line output value.
fn format_output(name: &str, value: &str, delimiter: &str) -> String {
  format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn command(kind: &str, message: &str) -> String {
  format!("::{}::{}", kind, escape_data(message))
}

/// Escape a workflow command message so it stays on one line.
fn escape_data(value: &str) -> String {
  value
    .replace('%', "%25")
    .replace('\r', "%0D")
    .replace('\n', "%0A")
}
