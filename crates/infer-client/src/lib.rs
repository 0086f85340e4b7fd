mod chat;
mod error;
mod generator;

pub use chat::ChatClient;
pub use error::GenerateError;
pub use generator::{GenerationRequest, Generator};
