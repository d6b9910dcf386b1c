//! Binding input documents into the output document.

use crate::core::manifest::Manifest;
use crate::error::Result;
use crate::io::{OutputDocument, read_file_bytes};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcatReport {
    /// Path of the document that was written.
    pub output: PathBuf,
    /// Number of input documents appended.
    pub inputs: usize,
    /// Total bytes written, appended line terminators included.
    pub bytes: u64,
}

/// Concatenates the inputs of a [`Manifest`] into its output.
///
/// # Examples
///
/// ```no_run
/// use bookbind::core::{Concatenator, Manifest};
///
/// let report = Concatenator::new(Manifest::book()).run().unwrap();
/// println!("{} chapters", report.inputs);
/// ```
#[derive(Debug, Clone)]
pub struct Concatenator {
    manifest: Manifest,
}

impl Concatenator {
    /// Creates a concatenator for the given manifest.
    #[must_use]
    pub const fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// Writes every input, each followed by one newline, into the output.
    ///
    /// The output is truncated first. On failure the run stops at the
    /// failing input and the output keeps whatever was written before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be opened, an input is missing
    /// or unreadable, or a write fails.
    #[instrument(skip_all, fields(output = %self.manifest.output().display(), inputs = self.manifest.len()))]
    pub fn run(&self) -> Result<ConcatReport> {
        info!("binding documents");

        let mut document = OutputDocument::create(self.manifest.output())?;

        for (index, input) in self.manifest.inputs().iter().enumerate() {
            let content = read_file_bytes(input)?;
            let appended = document.append_document(&content)?;
            debug!(index, path = %input.display(), bytes = appended, "appended document");
        }

        let bytes = document.finish()?;

        info!(bytes, "binding complete");

        Ok(ConcatReport {
            output: self.manifest.output().to_path_buf(),
            inputs: self.manifest.len(),
            bytes,
        })
    }
}

/// Binds the book's fixed chapter list, resolved against `base`.
///
/// # Errors
///
/// See [`Concatenator::run`].
pub fn bind_book(base: &Path) -> Result<ConcatReport> {
    Concatenator::new(Manifest::book().rooted_at(base)).run()
}
