//! Infer Config
//!
//! This crate contains the configuration types for a single infer run.
//! A run is driven by a fixed set of named string inputs supplied by the host
//! (CLI flags or `INPUT_*` environment variables in a GitHub Actions step).
//!
//! The host collects those inputs into a [`RunInputs`] value once, up front,
//! and hands it to the engine. Nothing downstream reads ambient environment.

mod error;
mod inputs;

pub use error::ConfigError;
pub use inputs::{
  DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_SYSTEM_PROMPT, RunInputs, non_empty, parse_max_tokens,
};
