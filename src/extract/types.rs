//! Types for the extract module

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an extraction.
///
/// Per-file read failures are not errors; they end up in [`Extraction::skipped`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The marker could not be turned into a matching rule
    #[error("Invalid marker '{marker}': {source}")]
    InvalidMarker {
        marker: String,
        #[source]
        source: regex::Error,
    },
    /// The source root does not exist or is not a directory
    #[error("Source root not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// A file left out of the scan, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Distinct translation keys, sorted.
    pub keys: BTreeSet<String>,
    /// Number of files read successfully.
    pub scanned_files: usize,
    pub skipped: Vec<SkippedFile>,
}
