//! Error types returned at the crate boundary.
//!
//! Decoding problems and configuration problems are kept apart so callers can
//! tell "bad input bytes" from "bad ranking setup".

use thiserror::Error;

/// Result type alias for operations that may fail with either error kind.
pub type Result<T> = std::result::Result<T, Error>;

/// Input bytes were not well-formed UTF-8.
///
/// `valid_up_to` is the byte offset of the first invalid sequence and
/// `error_len` its length, or `None` when the input ended in the middle of a
/// multi-byte sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid utf-8 sequence at byte offset {valid_up_to}")]
pub struct EncodingError {
    pub valid_up_to: usize,
    pub error_len: Option<usize>,
}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(err: std::str::Utf8Error) -> Self {
        EncodingError {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}

/// The ranking configuration does not resolve to a usable scorer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidScorerError {
    #[error("unknown scorer: {0}")]
    UnknownScorer(String),

    #[error("unknown mode: {0} (expected \"full\" or \"partial\")")]
    UnknownMode(String),

    #[error("invalid weight {weight} for scorer {name}")]
    InvalidWeight { name: String, weight: f64 },

    #[error("scorer weights sum to zero")]
    ZeroWeights,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    InvalidScorer(#[from] InvalidScorerError),
}
