use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing dictionary files.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dictionary {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is valid JSON but its root is not an object
    #[error("Dictionary {} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to edit dictionary {}: the file could not be parsed for editing", path.display())]
    Edit { path: PathBuf },

    #[error("Failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write dictionary {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
