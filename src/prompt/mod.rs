pub mod overwrite;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use tracing::debug;

use crate::error::PromptError;

pub use overwrite::{
    overwrite_bool, overwrite_choice, overwrite_secret, overwrite_text, resolve_field,
    select_policy, OverwritePolicy,
};

const BLANK_NOT_ALLOWED: &str = "a non-blank value is required";

/// One selectable item in a choice prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    pub label: &'a str,
    pub description: &'a str,
}

impl<'a> Choice<'a> {
    pub const fn new(label: &'a str, description: &'a str) -> Self {
        Self { label, description }
    }

    fn render(&self, hide_help: bool) -> String {
        if hide_help || self.description.is_empty() {
            self.label.to_string()
        } else {
            format!("{} - {}", self.label, self.description)
        }
    }
}

/// Obtains single values from an operator.
///
/// Implementations own rendering, masking and blank-input validation. When
/// `allow_blank` is false a blank answer must be re-asked rather than
/// returned. Any other failure is reported as [`PromptError`].
pub trait Prompter {
    fn ask_bool(&self, question: &str) -> Result<bool, PromptError>;

    fn ask_text(&self, question: &str, prefill: &str, allow_blank: bool)
        -> Result<String, PromptError>;

    /// Like [`Prompter::ask_text`] but the answer is masked while typed.
    fn ask_secret(&self, question: &str, allow_blank: bool) -> Result<String, PromptError>;

    /// Returns the index into `choices` the operator picked.
    fn ask_choice(
        &self,
        question: &str,
        choices: &[Choice<'_>],
        hide_help: bool,
    ) -> Result<usize, PromptError>;
}

/// [`Prompter`] backed by the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask_bool(&self, question: &str) -> Result<bool, PromptError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .interact()?;
        Ok(answer)
    }

    fn ask_text(
        &self,
        question: &str,
        prefill: &str,
        allow_blank: bool,
    ) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(allow_blank);

        if !prefill.is_empty() {
            input = input.with_initial_text(prefill);
        }
        if !allow_blank {
            input = input.validate_with(|value: &String| -> Result<(), &'static str> {
                if value.is_empty() {
                    Err(BLANK_NOT_ALLOWED)
                } else {
                    Ok(())
                }
            });
        }

        Ok(input.interact_text()?)
    }

    fn ask_secret(&self, question: &str, allow_blank: bool) -> Result<String, PromptError> {
        let mut password = Password::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty_password(allow_blank);

        if !allow_blank {
            password = password.validate_with(|value: &String| -> Result<(), &'static str> {
                if value.is_empty() {
                    Err(BLANK_NOT_ALLOWED)
                } else {
                    Ok(())
                }
            });
        }

        Ok(password.interact()?)
    }

    fn ask_choice(
        &self,
        question: &str,
        choices: &[Choice<'_>],
        hide_help: bool,
    ) -> Result<usize, PromptError> {
        let items: Vec<String> = choices.iter().map(|c| c.render(hide_help)).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(&items)
            .default(0)
            .interact()?;

        debug!("'{}' answered with option {}", question, selection);
        Ok(selection)
    }
}
