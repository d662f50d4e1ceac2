use std::fmt::{self, Display};
use std::io::{self, Stderr, Stdout, Write};
use std::panic::Location;

/// Verbosity of a feedback message, ordered from always-shown to chattiest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Required = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Required,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
    ];

    /// Highest level still shown after `quietness` uses of `-q`.
    ///
    /// No `-q` shows everything; four or more leave only `Required`.
    pub fn from_quietness(quietness: u8) -> Self {
        let cap = Level::Debug as u8;
        Self::from_index(cap.saturating_sub(quietness))
    }

    fn from_index(index: u8) -> Self {
        match index {
            0 => Level::Required,
            1 => Level::Error,
            2 => Level::Warning,
            3 => Level::Info,
            _ => Level::Debug,
        }
    }
}

/// Run-wide feedback settings, fixed once at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub max_level: Level,
    pub include_caller: bool,
}

impl FeedbackConfig {
    pub fn new(max_level: Level, include_caller: bool) -> Self {
        Self {
            max_level,
            include_caller,
        }
    }

    /// `Required` is never suppressed since it sits at the bottom of the ordering.
    pub fn exceeds_limit(&self, level: Level) -> bool {
        level > self.max_level
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self::new(Level::Info, false)
    }
}

/// Leveled output for the operator.
///
/// Regular messages go to the standard stream, error reports to the error
/// stream. The sink never terminates the process on its own except through
/// [`Feedback::fatal`], which is reserved for the binary's entry point.
pub struct Feedback<O: Write, E: Write> {
    config: FeedbackConfig,
    out: O,
    err: E,
}

impl Feedback<Stdout, Stderr> {
    pub fn stdio(config: FeedbackConfig) -> Self {
        Self::with_writers(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Feedback<O, E> {
    pub fn with_writers(config: FeedbackConfig, out: O, err: E) -> Self {
        Self { config, out, err }
    }

    /// Write `msg` followed by a newline unless it already ends with one
    pub fn print(&mut self, level: Level, msg: impl Display) -> io::Result<()> {
        if self.config.exceeds_limit(level) {
            return Ok(());
        }
        let msg = msg.to_string();
        if msg.ends_with('\n') {
            write!(self.out, "{msg}")
        } else {
            writeln!(self.out, "{msg}")
        }
    }

    /// Write formatted output verbatim
    pub fn printf(&mut self, level: Level, args: fmt::Arguments<'_>) -> io::Result<()> {
        if self.config.exceeds_limit(level) {
            return Ok(());
        }
        self.out.write_fmt(args)
    }

    /// Report `err` on the error stream, prefixed with the caller's location
    /// when call-site reporting is enabled.
    #[track_caller]
    pub fn report_error(&mut self, err: &dyn Display) {
        let location = Location::caller();
        self.write_error(location, err);
    }

    /// Report `err` and terminate with status 1
    #[track_caller]
    pub fn fatal(mut self, err: &dyn Display) -> ! {
        let location = Location::caller();
        self.write_error(location, err);
        let _ = self.out.flush();
        std::process::exit(1)
    }

    #[cfg(test)]
    pub(crate) fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_error(&mut self, location: &Location<'_>, err: &dyn Display) {
        // Nothing sensible is left to do if stderr itself is gone.
        let _ = if self.config.include_caller {
            writeln!(
                self.err,
                "{}:{} - Error: {}",
                location.file(),
                location.line(),
                err
            )
        } else {
            writeln!(self.err, "Error: {}", err)
        };
        let _ = self.err.flush();
    }
}
