//! Deciding whether a previously known value is kept or asked for again.
//!
//! A session picks one [`OverwritePolicy`] up front with [`select_policy`]
//! and then passes it to [`resolve_field`] (or one of the typed
//! `overwrite_*` helpers) for every field it collects.
//!
//! The engine has no concept of a field being "new". A caller that wants
//! `None` to mean "only ask for new fields" passes the empty value of the
//! field's type as `original` for fields that have never been set, and
//! treats that empty value as absent afterwards.

use std::fmt;

use tracing::debug;

use super::{Choice, Prompter};
use crate::error::PromptError;

/// How existing values are treated for the rest of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwritePolicy {
    /// Ask for a new value for every field, discarding what was there.
    All,
    /// Keep every existing value without asking.
    None,
    /// Ask field by field whether to overwrite.
    Prompt,
}

impl OverwritePolicy {
    /// Offered in this order by [`select_policy`]
    pub const OPTIONS: [(OverwritePolicy, Choice<'static>); 3] = [
        (
            OverwritePolicy::All,
            Choice::new(
                "All",
                "Ignore all existing values and ask for new values for all fields",
            ),
        ),
        (
            OverwritePolicy::None,
            Choice::new("None", "Only ask for values for new fields"),
        ),
        (
            OverwritePolicy::Prompt,
            Choice::new(
                "Prompt",
                "Ask if fields should be overwritten on a field by field basis",
            ),
        ),
    ];
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OverwritePolicy::All => "All",
            OverwritePolicy::None => "None",
            OverwritePolicy::Prompt => "Prompt",
        };
        write!(f, "{}", label)
    }
}

const CONFIRM_OVERWRITE: [Choice<'static>; 2] = [
    Choice::new("Yes", "Enter a new value, overwriting the existing value"),
    Choice::new("No", "Keep the existing value"),
];

/// Ask the operator which overwrite policy applies to the fields that follow
pub fn select_policy<P>(
    prompter: &P,
    question: &str,
    hide_help: bool,
) -> Result<OverwritePolicy, PromptError>
where
    P: Prompter + ?Sized,
{
    let choices = OverwritePolicy::OPTIONS.map(|(_, choice)| choice);
    let index = prompter.ask_choice(question, &choices, hide_help)?;

    let (policy, _) = OverwritePolicy::OPTIONS
        .get(index)
        .ok_or(PromptError::InvalidSelection(index))?;

    debug!("overwrite policy selected: {}", policy);
    Ok(*policy)
}

/// Produce the value of one field under `policy`.
///
/// `original` is returned untouched unless the policy (or, under
/// [`OverwritePolicy::Prompt`], the operator) asks for a new value, in which
/// case `acquire` is called exactly once and its result is returned as is.
/// Errors from the confirmation prompt or from `acquire` are passed through.
pub fn resolve_field<P, T, F>(
    prompter: &P,
    question: &str,
    policy: OverwritePolicy,
    hide_help: bool,
    original: T,
    acquire: F,
) -> Result<T, PromptError>
where
    P: Prompter + ?Sized,
    F: FnOnce() -> Result<T, PromptError>,
{
    match policy {
        OverwritePolicy::None => {
            debug!("keeping existing value for '{}'", question);
            Ok(original)
        }
        OverwritePolicy::All => acquire(),
        OverwritePolicy::Prompt => {
            let answer = prompter.ask_choice(question, &CONFIRM_OVERWRITE, hide_help)?;
            if answer == 0 {
                acquire()
            } else {
                debug!("operator kept existing value for '{}'", question);
                Ok(original)
            }
        }
    }
}

pub fn overwrite_bool<P>(
    prompter: &P,
    question: &str,
    policy: OverwritePolicy,
    hide_help: bool,
    original: bool,
) -> Result<bool, PromptError>
where
    P: Prompter + ?Sized,
{
    resolve_field(prompter, question, policy, hide_help, original, || {
        prompter.ask_bool(question)
    })
}

/// The existing value is offered as editable prefill when a new one is asked for.
pub fn overwrite_text<P>(
    prompter: &P,
    question: &str,
    policy: OverwritePolicy,
    hide_help: bool,
    original: String,
    allow_blank: bool,
) -> Result<String, PromptError>
where
    P: Prompter + ?Sized,
{
    let prefill = original.clone();
    resolve_field(prompter, question, policy, hide_help, original, || {
        prompter.ask_text(question, &prefill, allow_blank)
    })
}

pub fn overwrite_secret<P>(
    prompter: &P,
    question: &str,
    policy: OverwritePolicy,
    hide_help: bool,
    original: String,
    allow_blank: bool,
) -> Result<String, PromptError>
where
    P: Prompter + ?Sized,
{
    resolve_field(prompter, question, policy, hide_help, original, || {
        prompter.ask_secret(question, allow_blank)
    })
}

/// `original` and the result are indices into `choices`.
pub fn overwrite_choice<P>(
    prompter: &P,
    question: &str,
    policy: OverwritePolicy,
    hide_help: bool,
    original: usize,
    choices: &[Choice<'_>],
) -> Result<usize, PromptError>
where
    P: Prompter + ?Sized,
{
    resolve_field(prompter, question, policy, hide_help, original, || {
        prompter.ask_choice(question, choices, hide_help)
    })
}
