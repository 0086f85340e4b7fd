mod error;
mod resolver;

pub use error::ResolveError;
pub use resolver::{PromptField, ResolvedPrompts, resolve_field, resolve_prompts};
