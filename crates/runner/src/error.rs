//! Error types for a watchlist run

use std::path::PathBuf;

use thiserror::Error;
use watchlist_ports::FetchError;

use crate::config::ConfigError;

/// Fatal errors: any of these ends the run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
