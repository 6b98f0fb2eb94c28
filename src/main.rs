use std::process::ExitCode;

use bank_sim::common::error::AppError;

fn main() -> ExitCode {
    match bank_sim::app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        // prints help/version or the usage error and exits with clap's code
        Err(AppError::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
