//! hdrstamp: build-time header generator.
//!
//! Invoked by a build before dependent sources are compiled. Writes a small
//! header binding build metadata (the build date, or the `git describe`
//! version) to a macro, then exits with a code the build can act on.

mod cli;
pub mod clock;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod git;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
