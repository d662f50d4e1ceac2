use clap::{ArgAction, Parser};
use tracing::debug;

use crate::config::{Config, InputMode};
use crate::error::CliError;
use crate::hash::{hash_secret, DEFAULT_COST};
use crate::prompt::Prompter;

const PASSWORD_QUESTION: &str = "Password";

/// bcrypt is a command to produce a bcrypt hash of the input string
#[derive(Debug, Parser)]
#[command(name = "bcrypt", version)]
#[command(
    long_about = "bcrypt is a simple command that ports the `htpasswd -nB` command and can be installed without the other apache-utils"
)]
pub struct Cli {
    /// Use batch mode; i.e., get the password from the command line rather than prompting for it.
    /// This option should be used with extreme care, since the password is clearly visible on the
    /// command line
    #[arg(short = 'b', long)]
    pub batch: bool,

    /// Set the computing time used for the bcrypt algorithm (higher is more secure but slower,
    /// valid: 4 to 17)
    #[arg(
        short = 'C',
        long,
        env = "BCRYPT_COST",
        default_value_t = i64::from(DEFAULT_COST),
        allow_negative_numbers = true
    )]
    pub cost: i64,

    /// Suppress output; repeat to hide more (-q hides debug, -qqqq leaves only the hash)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,

    /// The password to hash (batch mode only)
    pub password: Option<String>,
}

/// Obtain the secret and hash it, returning the hash for the caller to print
pub fn run<P>(config: Config, prompter: &P) -> Result<String, CliError>
where
    P: Prompter + ?Sized,
{
    let secret = match config.mode {
        InputMode::Batch(secret) => secret,
        InputMode::Interactive => prompter.ask_secret(PASSWORD_QUESTION, false)?,
    };

    debug!("hashing input with cost {}", config.cost.get());
    hash_secret(&secret, config.cost)
}
