//! Core of bookbind: the chapter list and the concatenation run.

pub mod concat;
pub mod manifest;

pub use concat::{ConcatReport, Concatenator, bind_book};
pub use manifest::{CHAPTERS, Manifest, OUTPUT_PATH};
