#![allow(clippy::uninlined_format_args)]

mod args;
mod byteable;
mod commands;
mod constants;
mod error;
mod fs;
mod hashing;
mod object;
mod utils;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

pub use constants::*;
pub use error::{Error, Result};

fn main() -> ExitCode {
    // a missing .env file is fine
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = args::Args::parse_from(wild::args_os());

    match commands::execute_command(&args) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(error) = stdout.write_all(&output).and_then(|_| stdout.flush()) {
                eprintln!("{} {:?}", "error:".red().bold(), error);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{} {:?}", "error:".red().bold(), error);
            ExitCode::FAILURE
        }
    }
}
