//! Error types for line sources

use thiserror::Error;

/// Line source errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for line source operations
pub type Result<T> = std::result::Result<T, Error>;
