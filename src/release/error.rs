use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the release helpers.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest has no `version: <name>+<code>` line
    #[error("No version information found in {}", path.display())]
    VersionNotFound { path: PathBuf },

    #[error("Invalid version name '{0}': expected digits separated by dots, e.g. 1.4.2")]
    InvalidVersionName(String),

    #[error("Build number {0} in the manifest is too large to increment")]
    BuildNumberOverflow(String),
}
