use std::env;
use std::fmt;

use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;
use crate::feedback::{FeedbackConfig, Level};
use crate::hash::Cost;

/// Where the secret to hash comes from
#[derive(Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Ask for it on the terminal, masked.
    Interactive,
    /// Taken verbatim from the command line.
    Batch(String),
}

impl InputMode {
    pub fn resolve(batch: bool, argument: Option<String>) -> Result<Self, CliError> {
        match (batch, argument) {
            (true, Some(secret)) => Ok(InputMode::Batch(secret)),
            (true, None) => Err(CliError::BatchRequiresInput),
            (false, Some(_)) => Err(CliError::InteractiveRejectsInput),
            (false, None) => Ok(InputMode::Interactive),
        }
    }
}

impl fmt::Debug for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Interactive => write!(f, "Interactive"),
            InputMode::Batch(_) => write!(f, "Batch(<redacted>)"),
        }
    }
}

/// Run configuration, validated once and read-only afterwards.
///
/// Feedback settings are built separately with [`feedback_config`] because
/// they are needed to report a failure to build this.
#[derive(Debug, Clone)]
pub struct Config {
    pub cost: Cost,
    pub mode: InputMode,
}

impl Config {
    /// Build the run configuration from parsed flags.
    ///
    /// The cost is checked before the input mode so a bad cost is reported
    /// first regardless of how the secret was supplied.
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        let cost = Cost::new(cli.cost)?;
        let mode = InputMode::resolve(cli.batch, cli.password)?;

        if matches!(mode, InputMode::Batch(_)) {
            debug!("password taken from the command line");
        }

        Ok(Self { cost, mode })
    }
}

/// Feedback settings for a run with `quietness` uses of `-q`
pub fn feedback_config(quietness: u8) -> FeedbackConfig {
    FeedbackConfig::new(
        Level::from_quietness(quietness),
        show_caller(env!("CARGO_PKG_VERSION")),
    )
}

/// Call-site reporting is on for pre-release builds or when `BCRYPT_SHOW_CALLER` is set.
fn show_caller(version: &str) -> bool {
    is_development_version(version) || env::var_os("BCRYPT_SHOW_CALLER").is_some()
}

pub fn is_development_version(version: &str) -> bool {
    ["dev", "alpha", "test"]
        .iter()
        .any(|marker| version.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bcrypt").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(
            InputMode::resolve(true, Some("secret".to_string())).unwrap(),
            InputMode::Batch("secret".to_string())
        );
        assert_eq!(InputMode::resolve(false, None).unwrap(), InputMode::Interactive);
        assert!(matches!(
            InputMode::resolve(true, None),
            Err(CliError::BatchRequiresInput)
        ));
        assert!(matches!(
            InputMode::resolve(false, Some("secret".to_string())),
            Err(CliError::InteractiveRejectsInput)
        ));
    }

    #[test]
    fn test_batch_secret_is_redacted_in_debug() {
        let mode = InputMode::Batch("hunter2".to_string());
        assert!(!format!("{:?}", mode).contains("hunter2"));
    }

    #[test]
    fn test_development_version_detection() {
        assert!(is_development_version("0.0.1-alpha"));
        assert!(is_development_version("1.2.0-dev.3"));
        assert!(is_development_version("0.1.0-test"));
        assert!(!is_development_version("1.0.0"));
        assert!(!is_development_version("2.3.1-rc.1"));
    }

    #[test]
    #[serial]
    fn test_config_from_batch_flags() {
        env::remove_var("BCRYPT_COST");
        let config = Config::from_cli(parse(&["-b", "-C", "7", "-qq", "secret"])).unwrap();

        assert_eq!(config.cost.get(), 7);
        assert_eq!(config.mode, InputMode::Batch("secret".to_string()));
        assert_eq!(feedback_config(2).max_level, Level::Warning);
    }

    #[test]
    #[serial]
    fn test_feedback_config() {
        env::remove_var("BCRYPT_SHOW_CALLER");
        let config = feedback_config(0);
        assert_eq!(config.max_level, Level::Debug);
        assert_eq!(
            config.include_caller,
            is_development_version(env!("CARGO_PKG_VERSION"))
        );

        env::set_var("BCRYPT_SHOW_CALLER", "1");
        assert!(feedback_config(4).include_caller);
        env::remove_var("BCRYPT_SHOW_CALLER");
    }

    #[test]
    #[serial]
    fn test_cost_checked_before_mode() {
        env::remove_var("BCRYPT_COST");
        let err = Config::from_cli(parse(&["-C", "18", "secret"])).unwrap_err();
        assert!(matches!(err, CliError::InvalidCost(18)));
    }

    #[test]
    #[serial]
    fn test_cost_from_environment() {
        env::set_var("BCRYPT_COST", "9");
        let config = Config::from_cli(parse(&[])).unwrap();
        env::remove_var("BCRYPT_COST");

        assert_eq!(config.cost.get(), 9);
        assert_eq!(config.mode, InputMode::Interactive);
    }
}
