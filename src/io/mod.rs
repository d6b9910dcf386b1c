//! I/O utilities for bookbind.
//!
//! Provides whole-file reads of chapters, with memory mapping for large
//! files, and the buffered output document.

pub mod reader;
pub mod writer;

pub use reader::{FileReader, read_file_bytes};
pub use writer::OutputDocument;
