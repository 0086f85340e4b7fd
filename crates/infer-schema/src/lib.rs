//! Infer Schema
//!
//! Everything a run does with a response schema:
//!
//! - load it from a file or inline text ([`resolve_schema`]), the file winning
//! - check that it compiles as a JSON Schema ([`validate_schema`], [`load_validated_schema`])
//! - append compliance instructions to the prompt ([`append_schema_instructions`])
//! - check the model's reply against it ([`check_response`])
//!
//! A reply that fails the check is never an error. It produces a warning
//! message and the raw reply is still used as the run output.

mod document;
mod error;
mod instructions;
mod response;
mod validate;

pub use document::{
  load_schema_from_file, load_validated_schema, parse_inline_schema, resolve_schema,
};
pub use error::SchemaError;
pub use instructions::{append_schema_instructions, generate_schema_instructions};
pub use response::{ResponseCheck, check_response};
pub use validate::{ValidationOutcome, validate_data_against_schema, validate_schema};
