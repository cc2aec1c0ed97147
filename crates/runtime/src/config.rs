use log::Level;

pub const PROGRAM_NAME: &str = "fstimeline";

/// Timestamp layout used for log lines (local time).
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// How chatty the process logger is. Never affects record content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn level(self) -> Level {
        match self {
            Verbosity::Normal => Level::Info,
            Verbosity::Verbose => Level::Debug,
        }
    }
}
