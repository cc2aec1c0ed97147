use std::{
    fmt, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Result;
use fstimeline_fs::{WalkMode, inspect_file, walk_files};
use fstimeline_runtime::Verbosity;
use log::{debug, error, info, warn};
use thiserror::Error;

use crate::sink::{self, RecordSink};

/// Everything a run needs, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub path: PathBuf,
    pub mode: WalkMode,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub verbosity: Verbosity,
}

/// Conditions that end a run before any record is processed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Path does not exist: {}", path.display())]
    PathMissing { path: PathBuf },

    #[error("Error opening output file {}: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid path type for {}. Must be a file or directory.", path.display())]
    UnsupportedPathType { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    SingleFile,
    DirectoryWalk,
    Draining,
    Done,
}

impl Phase {
    fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::Validating)
                | (Phase::Validating, Phase::SingleFile)
                | (Phase::Validating, Phase::DirectoryWalk)
                | (Phase::SingleFile, Phase::Draining)
                | (Phase::DirectoryWalk, Phase::Draining)
                | (Phase::Draining, Phase::Done)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal transition {} -> {}",
            self.phase,
            next
        );
        debug!("[run] {} -> {}", self.phase, next);
        self.phase = next;
    }
}

/// Counters for a completed run. Per-item failures only show up here and
/// in the log, never in the record stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub emitted: usize,
    pub skipped: usize,
    pub write_failures: usize,
    pub directory_errors: usize,
}

enum Target {
    SingleFile(PathBuf),
    DirectoryWalk(PathBuf),
}

impl Target {
    fn classify(path: &Path) -> Result<Self, RunError> {
        if path.is_file() {
            Ok(Target::SingleFile(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Target::DirectoryWalk(path.to_path_buf()))
        } else {
            Err(RunError::UnsupportedPathType {
                path: path.to_path_buf(),
            })
        }
    }

    fn phase(&self) -> Phase {
        match self {
            Target::SingleFile(_) => Phase::SingleFile,
            Target::DirectoryWalk(_) => Phase::DirectoryWalk,
        }
    }
}

pub fn run(options: RunOptions) -> ExitCode {
    match execute(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Validate, open the sink, then stream every reachable file into it.
pub fn execute(options: &RunOptions) -> Result<RunSummary> {
    let mut lifecycle = Lifecycle::new();
    lifecycle.advance(Phase::Validating);

    if !options.path.exists() {
        return Err(RunError::PathMissing {
            path: options.path.clone(),
        }
        .into());
    }

    let mut sink = sink::open(options.output.as_deref()).map_err(|source| RunError::OutputOpen {
        path: options.output.clone().unwrap_or_default(),
        source,
    })?;

    let target = Target::classify(&options.path)?;
    lifecycle.advance(target.phase());

    let summary = drive(&target, options.mode, sink.as_mut());

    lifecycle.advance(Phase::Draining);
    if let Err(e) = sink.flush() {
        error!("Error writing to output file: {e}");
    }
    info!(
        "Processed {} file(s): {} skipped, {} write failure(s), {} unreadable director(ies)",
        summary.emitted, summary.skipped, summary.write_failures, summary.directory_errors
    );

    lifecycle.advance(Phase::Done);
    Ok(summary)
}

fn drive(target: &Target, mode: WalkMode, sink: &mut dyn RecordSink) -> RunSummary {
    let mut summary = RunSummary::default();

    match target {
        Target::SingleFile(path) => emit(path, sink, &mut summary),
        Target::DirectoryWalk(root) => {
            for item in walk_files(root, mode) {
                match item {
                    Ok(path) => emit(&path, sink, &mut summary),
                    Err(e) => {
                        error!("{e}");
                        summary.directory_errors += 1;
                    }
                }
            }
        }
    }

    summary
}

fn emit(path: &Path, sink: &mut dyn RecordSink, summary: &mut RunSummary) {
    let record = match inspect_file(path) {
        Ok(record) => record,
        Err(e) => {
            error!("{e}");
            warn!("Could not process file: {}", path.display());
            summary.skipped += 1;
            return;
        }
    };

    match sink.write_record(&record) {
        Ok(()) => summary.emitted += 1,
        Err(e) => {
            error!("Error writing to output file: {e}");
            summary.write_failures += 1;
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
