//! Binary entry point for bookbind.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use bookbind::cli::output::{OutputFormat, format_error};
use bookbind::cli::{Cli, execute};
use bookbind::logging::init_tracing;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);
    let format = OutputFormat::parse(&cli.format);

    match execute(&cli) {
        Ok(output) => {
            // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
            if let Err(e) = write!(io::stdout(), "{output}")
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                // JSON errors go to stdout for programmatic parsing
                OutputFormat::Json => println!("{error_output}"),
                OutputFormat::Text => eprintln!("Error: {error_output}"),
            }
            ExitCode::FAILURE
        }
    }
}
