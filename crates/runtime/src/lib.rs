mod config;
pub mod logging;

pub use config::{LOG_TIMESTAMP_FORMAT, PROGRAM_NAME, Verbosity};

pub use logging::init;
