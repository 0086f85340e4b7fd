//! Infer Engine
//!
//! Runs one prompt end to end. Each run walks a fixed sequence of states and
//! ends in exactly one [`RunResult`].
//!
//! ```text
//! Idle
//!  │
//!  ▼
//! ResolvingInputs     required inputs, prompt / system prompt (file > text > default)
//!  │
//!  ▼
//! Templating          render both prompts with the shared `vars`
//!  │
//!  ▼
//! SchemaPreparing     load + compile the response schema, append instructions
//!  │
//!  ▼
//! Generating          single call to the Generator, no retries
//!  │
//!  ▼
//! ResponseValidating  check reply against the schema, warnings only
//!  │
//!  ▼
//! Succeeded
//! ```
//!
//! Any failure before `ResponseValidating` moves the run straight to `Failed`.
//!
//! # Usage
//!
//! ```ignore
//! use infer_client::ChatClient;
//! use infer_engine::{RunResult, Runner};
//!
//! let runner = Runner::new(inputs, ChatClient::new(endpoint));
//! match runner.run().await {
//!     RunResult::Succeeded { text } => println!("{}", text),
//!     RunResult::Failed { message } => eprintln!("{}", message),
//! }
//! ```

mod error;
mod events;
mod result;
mod runner;
mod state;

pub use error::RunError;
pub use events::{ChannelNotifier, NoopNotifier, RunEvent, RunNotifier};
pub use result::RunResult;
pub use runner::Runner;
pub use state::RunState;
