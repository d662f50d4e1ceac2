pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod hash;
pub mod prompt;

pub use error::{CliError, PromptError};
