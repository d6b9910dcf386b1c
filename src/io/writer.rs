//! The combined output document.

use crate::error::{IoError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Line terminator appended after every document.
const LINE_TERMINATOR: &[u8] = b"\n";

/// Write handle on the output document.
///
/// Opening truncates any previous content. The handle is flushed and closed
/// when the value is dropped, so an early return still releases it; call
/// [`OutputDocument::finish`] on the success path to observe flush errors.
#[derive(Debug)]
pub struct OutputDocument {
    writer: BufWriter<File>,
    path: String,
    bytes_written: u64,
}

impl OutputDocument {
    /// Creates the output document, truncating it if it already exists.
    ///
    /// Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputOpenFailed`] if the file cannot be opened.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path_ref)
            .map_err(|e| IoError::OutputOpenFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path_str,
            bytes_written: 0,
        })
    }

    /// Appends one document followed by a single line terminator.
    ///
    /// No check is made for a terminator already present at the end of
    /// `content`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if the write fails.
    pub fn append_document(&mut self, content: &[u8]) -> Result<u64> {
        self.write_all(content)?;
        self.write_all(LINE_TERMINATOR)?;

        let appended = (content.len() + LINE_TERMINATOR.len()) as u64;
        self.bytes_written += appended;
        Ok(appended)
    }

    /// Flushes and closes the document, returning the total bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if flushing fails.
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush().map_err(|e| IoError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(self.bytes_written)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(|e| {
            IoError::WriteFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
