use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use log::error;

use frank2::cli::Cli;
use frank2::driver;
use frank2::error::FilterError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // -v (and -p, which implies it) raises the log level programmatically,
    // independent of RUST_LOG, matching the original's own verbose flag.
    let default_level = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = driver::run(stdin.lock(), BufWriter::new(stdout.lock()), &options);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(FilterError::Usage(message)) => {
            error!("{message}");
            ExitCode::FAILURE
        }
        Err(FilterError::Internal(message)) => {
            error!("internal invariant violated: {message}");
            ExitCode::from(2)
        }
    }
}
