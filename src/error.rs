//! Error types for share decoding, loading, and reconstruction.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors from decoding a base-N numeral string into an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("base {0} is outside the supported range 2..=16")]
    UnsupportedBase(u32),

    #[error("numeral is empty")]
    EmptyNumeral,

    #[error("digit {digit:?} is not valid in base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

/// Errors from a share document that does not satisfy the expected shape.
#[derive(Error, Debug)]
pub enum InputFormatError {
    #[error("share file is not a valid share document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("share index {0:?} is not a positive integer")]
    InvalidIndex(String),

    #[error("share {index} declares a non-numeric base {base:?}")]
    InvalidBase { index: u64, base: String },

    #[error("share {index} could not be decoded")]
    UndecodableShare {
        index: u64,
        #[source]
        source: DecodeError,
    },

    #[error("threshold k must be at least 1")]
    ZeroThreshold,

    #[error("not enough shares to reconstruct (need {needed}, got {available})")]
    NotEnoughShares { needed: usize, available: usize },
}

/// Errors from interpolating over an invalid point set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructionError {
    #[error("point set is empty; at least one point is required")]
    EmptyPointSet,

    #[error("duplicate x-coordinate {x} in point set")]
    DuplicateX { x: BigInt },
}
