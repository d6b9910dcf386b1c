//! # bookbind
//!
//! Binds the chapters of a book into a single document.
//!
//! The chapter list is fixed in [`core::CHAPTERS`]. Each chapter is read
//! verbatim and written to [`core::OUTPUT_PATH`] followed by a newline, in
//! list order. Nothing in the chapters is parsed or rewritten.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = bookbind::bind_book(Path::new(".")).unwrap();
//! assert_eq!(report.inputs, bookbind::CHAPTERS.len());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use core::{CHAPTERS, ConcatReport, Concatenator, Manifest, OUTPUT_PATH, bind_book};

pub use cli::{Cli, LogFormat, OutputFormat};
