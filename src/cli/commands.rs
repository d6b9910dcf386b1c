//! CLI command implementation.

use crate::cli::output::{OutputFormat, format_report};
use crate::cli::parser::Cli;
use crate::core::bind_book;
use crate::error::{CommandError, Result};

/// Executes the CLI command.
///
/// Binds the book rooted at `cli.root` and returns the formatted report.
///
/// # Errors
///
/// Returns an error if the root is not a directory or binding fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    if !cli.root.is_dir() {
        return Err(CommandError::InvalidArgument(format!(
            "root is not a directory: {}",
            cli.root.display()
        ))
        .into());
    }

    let report = bind_book(&cli.root)?;
    Ok(format_report(&report, format))
}
