//! Error types
//!
//! `TreeError` covers Newick parsing and structural validation. `ExtractError` is the
//! top-level error surfaced by every fallible operation in the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Newick parse and validation failures. Offsets are byte positions into the input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TreeError {
    #[error("empty newick string")]
    Empty,

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unterminated quoted label starting at offset {offset}")]
    UnterminatedQuote { offset: usize },

    #[error("invalid branch length {text:?} at offset {offset}")]
    InvalidDistance { text: String, offset: usize },

    #[error("leaf without identifier at offset {offset}")]
    UnnamedLeaf { offset: usize },

    #[error("empty child list at offset {offset}")]
    EmptyChildren { offset: usize },

    #[error("trailing input after tree at offset {offset}")]
    TrailingInput { offset: usize },
}

/// Errors surfaced by the extractor.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tree error: {0}")]
    TreeError(#[from] TreeError),

    #[error("{program} exited with {status}: {stderr}")]
    ConverterFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run {program}: {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ExtractError {
    fn from(err: config::ConfigError) -> Self {
        ExtractError::ConfigError(err.to_string())
    }
}
