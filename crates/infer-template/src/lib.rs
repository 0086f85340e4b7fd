//! Infer Template
//!
//! Renders prompt templates against variables parsed from a YAML document.
//!
//! ```text
//! vars:      user: { name: Bob }
//!            items: [apple, banana]
//! template:  Hi {{ user.name | upper }}: {{ items | join(", ") }}
//! output:    Hi BOB: apple, banana
//! ```
//!
//! Rendering is strict: referencing a variable that is not defined is an error
//! rather than an empty string.

mod error;
mod render;

pub use error::TemplateError;
pub use render::{TemplateRenderer, Variables, parse_variables, render};
