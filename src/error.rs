//! # Errors
//!
//! Input validation failures surfaced by the library. All of them are
//! deterministic: retrying with the same input fails the same way.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use crate::constants::SUPPORTED_SYMBOL_COUNTS;

/// Error type for alphabet construction and string encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Symbol sequence length is not a supported power of two
    #[error("invalid symbol count {count}: must be one of {SUPPORTED_SYMBOL_COUNTS:?}")]
    InvalidSymbolCount { count: usize },

    /// A symbol appears more than once
    #[error("symbols not unique: {symbol:?} repeats")]
    DuplicateSymbols { symbol: char },

    /// The byte buffer cannot cover the requested bits
    #[error("too few bytes: need {needed}, got {actual}")]
    TooFewBytes { needed: usize, actual: usize },

    /// Requested entropy is below zero
    #[error("negative entropy: {bits} bits requested")]
    NegativeEntropy { bits: f64 },

    /// Requested entropy is NaN, infinite or above what generation will draw
    #[error("entropy out of range: {bits} bits requested, limit is {max}")]
    EntropyOutOfRange { bits: f64, max: f64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
