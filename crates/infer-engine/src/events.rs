//! Run events and notifiers.
//!
//! Events let the host observe a run without the engine knowing how output is
//! presented. Non-fatal warnings travel only through this channel.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::state::RunState;

/// Events emitted during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
  /// The run moved from one state to the next.
  StateChanged { from: RunState, to: RunState },

  /// The model is about to be called.
  GenerationStarted { model: String },

  /// Something is off but the run continues.
  Warning { message: String },

  /// The run succeeded with this reply text.
  Completed { text: String },

  /// The run failed.
  Failed { error: String },
}

/// Receives events during a run.
pub trait RunNotifier: Send + Sync {
  fn notify(&self, event: RunEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl RunNotifier for NoopNotifier {
  fn notify(&self, _event: RunEvent) {}
}

/// Forwards events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<RunEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<RunEvent>) -> Self {
    Self { sender }
  }
}

impl RunNotifier for ChannelNotifier {
  fn notify(&self, event: RunEvent) {
    // receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
