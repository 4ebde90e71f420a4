use std::process::ExitCode;
use tracing::error;

mod cli;
mod config;
mod report;

fn main() -> ExitCode {
    match cli::cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("graphmetrics: {err}");
            ExitCode::FAILURE
        }
    }
}
