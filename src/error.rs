// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::net::FetchError;

/// Run-level failure. Anything surfacing here ends the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("target '{target}' could not be downloaded: {source}")]
    Fetch {
        target: String,
        #[source]
        source: FetchError,
    },
    #[error("failed writing {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
