use std::sync::OnceLock;

use chrono::Local;
use log::{Level, Log, Metadata, Record, SetLoggerError};

use crate::config::{LOG_TIMESTAMP_FORMAT, Verbosity};

enum LogTarget {
    Stderr,
}

pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Logger {
    fn format_line(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
        format!("{} - {} - {}", timestamp, record.level(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let msg = self.format_line(record);

            match &self.target {
                LogTarget::Stderr => {
                    eprintln!("{msg}")
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger at the level implied by `verbosity`.
///
/// Only the first call installs a logger; later calls keep the original
/// level and return `Ok(())`.
pub fn init(verbosity: Verbosity) -> Result<(), SetLoggerError> {
    install(verbosity.level())
}

fn install(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // log::set_max_level takes the pass-in `level`, so only the call that
    // actually creates the logger may set it; otherwise the two disagree.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
