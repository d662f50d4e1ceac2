use std::io;
use thiserror::Error;

/// Failure of an interactive prompt.
///
/// Blank-input validation never surfaces here: the prompter re-asks until it
/// gets an acceptable answer. What does surface is unrecoverable.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input stream failure")]
    Io(#[from] io::Error),

    #[error("selection {0} is not one of the offered options")]
    InvalidSelection(usize),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => PromptError::Io(e),
        }
    }
}

/// Errors raised while turning command-line input into a hash
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cost must be between 4 and 17 - not {0}")]
    InvalidCost(i64),

    #[error("batch-mode requires an input argument")]
    BatchRequiresInput,

    #[error("interactive-mode does not accept an input argument")]
    InteractiveRejectsInput,

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to hash input")]
    Hash(#[from] bcrypt::BcryptError),
}
