//! Top-level error type for the command line tool.

use thiserror::Error;

use crate::config::ConfigError;
use crate::release::ReleaseError;
use crate::sync::SyncError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// Failure writing the report to stdout
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
