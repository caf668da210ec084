//! # entropy-string
//!
//! Generate random strings carrying a chosen amount of entropy, for session
//! tokens and short IDs with a known risk of repeat.
//!
//! Instead of picking a string length, pick how many strings you will make
//! and how unlikely a repeat must be:
//!
//! ```
//! use entropy_string::{bits_required, CharSet, Encoder};
//!
//! // One in a trillion chance of a repeat in a million strings
//! let bits = bits_required(1.0e6, 1.0e12);
//!
//! let mut encoder = Encoder::with_alphabet(CharSet::Base32);
//! let id = encoder.generate(bits).unwrap();
//! assert_eq!(id.value.len(), 16);
//! ```
//!
//! ## Features
//!
//! - **Six Built-in Alphabets**: 64, 32, 16, 8, 4 and 2 symbols, or your own
//! - **Minimal Length**: `ceil(bits / bits_per_symbol)` characters, never more
//! - **Deterministic Mode**: supply your own bytes for reproducible output
//! - **Pluggable Randomness**: any [`RandomSource`], OS CSPRNG by default
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod commands;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod entropy;
pub mod error;
pub mod random;
pub mod ui;

pub use alphabet::{Alphabet, CharSet};
pub use config::{set_home_override, Config};
pub use encoder::{encode, generate, Encoder, Generated, Preset};
pub use entropy::{bits_required, bits_required_powers, bits_required_with_power, Power};
pub use error::{Error, Result};
pub use random::{RandomSource, Strength, SystemRandom};
