use std::path::PathBuf;

use clap::Parser;
use fstimeline_fs::WalkMode;
use fstimeline_runtime::{PROGRAM_NAME, Verbosity};

use crate::run::RunOptions;

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Creates a timeline of file modifications, access times, and metadata changes for forensic investigations."
)]
pub struct Cli {
    /// The path to the file or directory to analyze.
    pub path: PathBuf,

    /// Recursively process all files in the directory.
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// The output file to write the timeline to. Defaults to stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            path: self.path,
            mode: WalkMode::from_flag(self.recursive),
            output: self.output,
            verbosity: Verbosity::from_flag(self.verbose),
        }
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
