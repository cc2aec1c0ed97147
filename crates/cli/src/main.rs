use std::process::ExitCode;

use clap::Parser;

mod args;
mod run;
mod sink;

use args::Cli;
use fstimeline_runtime::logging;

fn main() -> ExitCode {
    let options = Cli::parse().into_options();
    logging::init(options.verbosity).ok();

    run::run(options)
}
