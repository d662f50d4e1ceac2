use std::io::{Stderr, Stdout};

use anyhow::{Context, Result};
use bcrypt_cli::cli::{self, Cli};
use bcrypt_cli::config::{self, Config};
use bcrypt_cli::feedback::{Feedback, Level};
use bcrypt_cli::prompt::TerminalPrompter;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // A .env file may supply BCRYPT_COST
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging();

    let mut feedback = Feedback::stdio(config::feedback_config(cli.quiet));
    if let Err(e) = execute(cli, &mut feedback) {
        feedback.fatal(&format!("{:#}", e));
    }
}

fn execute(cli: Cli, feedback: &mut Feedback<Stdout, Stderr>) -> Result<()> {
    let config = Config::from_cli(cli)?;
    let hash = cli::run(config, &TerminalPrompter::new())?;

    feedback
        .print(Level::Required, hash)
        .context("Failed to write hash to stdout")?;
    Ok(())
}

/// Logs go to stderr so stdout only ever carries the hash.
/// JSON format if LOG_FORMAT=json; RUST_LOG raises the level above warnings.
fn init_logging() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bcrypt_cli=warn".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
