//! Error types for dictionary loading and phoneme sequencing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the wordplay engine.
#[derive(Error, Debug)]
pub enum WordplayError {
    /// A dictionary or class table could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A normalized input word has no pronunciation in the dictionary.
    #[error("unknown word: {0:?}")]
    UnknownWord(String),
}

impl WordplayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WordplayError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordplayError>;
