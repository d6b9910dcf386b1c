//! The book's chapter list.
//!
//! The chapters and their order are fixed here; nothing at runtime adds,
//! removes or reorders them.

use std::path::{Component, Path, PathBuf};

/// Chapters of the book, in reading order.
pub const CHAPTERS: &[&str] = &[
    "./src/SUMMARY.md",
    "./src/ch00-00-preface.md",
    "./src/ch01-00.md",
    "./src/ch01-01-what_is_async_processing.md",
    "./src/ch01-02-why_async_processing_is_requeired.md",
    "./src/ch01-03-concurrency_parallelism.md",
    "./src/ch02-00.md",
    "./src/ch02-01-async-std-code-example.md",
    "./src/ch02-02-reading-runtime.md",
    "./src/ch03-00.md",
    "./src/ch04-00-conclusion.md",
];

/// Where the combined document is written.
pub const OUTPUT_PATH: &str = "./all.md";

/// An ordered list of input documents and the document they are bound into.
///
/// Inputs are not checked for duplicates; a repeated path is simply
/// concatenated again.
///
/// # Examples
///
/// ```
/// use bookbind::core::Manifest;
///
/// let manifest = Manifest::new(["a.md", "b.md"], "out.md");
/// assert_eq!(manifest.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    inputs: Vec<PathBuf>,
    output: PathBuf,
}

impl Manifest {
    /// Creates a manifest from an ordered list of inputs and an output path.
    pub fn new<I, P, O>(inputs: I, output: O) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: output.into(),
        }
    }

    /// The manifest of the book: [`CHAPTERS`] bound into [`OUTPUT_PATH`].
    #[must_use]
    pub fn book() -> Self {
        Self::new(CHAPTERS.iter().copied(), OUTPUT_PATH)
    }

    /// Resolves every relative path against `base`.
    ///
    /// `.` components are dropped, so `./all.md` under `/book` becomes
    /// `/book/all.md`. Absolute paths are left as they are.
    #[must_use]
    pub fn rooted_at(&self, base: &Path) -> Self {
        Self {
            inputs: self.inputs.iter().map(|p| join_clean(base, p)).collect(),
            output: join_clean(base, &self.output),
        }
    }

    /// Input documents, in output order.
    #[must_use]
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// The output document path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Number of input documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if there are no input documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

fn join_clean(base: &Path, path: &Path) -> PathBuf {
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    base.join(relative)
}

impl Default for Manifest {
    fn default() -> Self {
        Self::book()
    }
}
