//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Every argument is
//! optional and no environment variable is consulted; a bare `bookbind`
//! binds the book in the current directory.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// bookbind: binds the chapters of the book into `all.md`.
///
/// Reads the fixed chapter list in order and writes each chapter, followed
/// by a newline, into a single document.
#[derive(Parser, Debug)]
#[command(name = "bookbind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory the chapter and output paths are resolved against.
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Report format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Formatter used for log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}
