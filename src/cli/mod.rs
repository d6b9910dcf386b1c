//! CLI layer for bookbind.
//!
//! Provides the command-line interface using clap, the run itself, and
//! text/JSON formatting of its result.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, LogFormat};
