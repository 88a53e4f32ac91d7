use std::io;
use std::process::ExitCode;

use clap::Parser;
use tabular_cli::cli::Cli;
use tabular_cli::logging::{init_logging, LogConfig};
use tabular_cli::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log = LogConfig::from_verbosity(cli.verbose, cli.quiet).with_format(cli.log_format.into());
    if let Err(err) = init_logging(&log) {
        eprintln!("warning: logging disabled: {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
