//! Error types for the todo binary.
//!
//! Task operations never fail; these cover the terminal, logging and output
//! plumbing around them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Logging(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
