//! # String Encoding
//!
//! Turns a requested amount of entropy into the shortest string over an
//! alphabet that carries at least that many bits.
//!
//! - [`encode`] is deterministic: the caller supplies the bytes.
//! - [`generate`] draws exactly enough bytes from a [`RandomSource`].
//! - [`Encoder`] holds a current alphabet and a source for repeated use.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    alphabet::{slice::Slicer, Alphabet, CharSet},
    constants::{
        LARGE_ID_BITS, MAX_GENERATED_BITS, MEDIUM_ID_BITS, SESSION_ID_BITS, SMALL_ID_BITS,
        TOKEN_BITS,
    },
    error::{Error, Result},
    random::{RandomSource, Strength, SystemRandom},
};

// =============================================================================
// Stateless Encoding
// =============================================================================

/// Encodes `bits` of entropy from `bytes` using `alphabet`.
///
/// Produces `ceil(bits / bits_per_symbol)` characters. Zero bits or an empty
/// buffer yield an empty string.
///
/// # Errors
/// - [`Error::NegativeEntropy`] if `bits < 0`
/// - [`Error::TooFewBytes`] if `bytes` cannot cover every output character
///
/// ```
/// use entropy_string::{encode, CharSet};
///
/// let hex = CharSet::Base16.alphabet();
/// assert_eq!(encode(16.0, &hex, &[0xc7, 0xc9]).unwrap(), "c7c9");
/// ```
pub fn encode(bits: f64, alphabet: &Alphabet, bytes: &[u8]) -> Result<String> {
    if bits < 0.0 {
        return Err(Error::NegativeEntropy { bits });
    }
    if bytes.is_empty() {
        return Ok(String::new());
    }

    let count = alphabet.symbols_needed(bits);
    if count == 0 {
        return Ok(String::new());
    }

    let needed = alphabet.bytes_for_symbols(count);
    if bytes.len() < needed {
        return Err(Error::TooFewBytes {
            needed,
            actual: bytes.len(),
        });
    }

    Ok(Slicer::new(alphabet, bytes, count).collect())
}

/// A randomly generated string and the strength of the bytes behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub value: String,
    pub strength: Strength,
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Generates a random string of `bits` entropy, drawing bytes from `source`.
///
/// # Errors
/// - [`Error::NegativeEntropy`] if `bits < 0`
/// - [`Error::EntropyOutOfRange`] if `bits` is NaN, infinite or above
///   [`MAX_GENERATED_BITS`]
///
/// The buffer is sized from the alphabet, so there are never too few bytes.
pub fn generate(
    bits: f64,
    alphabet: &Alphabet,
    source: &mut impl RandomSource,
) -> Result<Generated> {
    if bits < 0.0 {
        return Err(Error::NegativeEntropy { bits });
    }
    if bits.is_nan() || bits > MAX_GENERATED_BITS {
        return Err(Error::EntropyOutOfRange {
            bits,
            max: MAX_GENERATED_BITS,
        });
    }
    Ok(generate_symbols(alphabet.symbols_needed(bits), alphabet, source))
}

/// Fills exactly the bytes `count` symbols need and slices them.
fn generate_symbols(
    count: usize,
    alphabet: &Alphabet,
    source: &mut impl RandomSource,
) -> Generated {
    if count == 0 {
        return Generated {
            value: String::new(),
            strength: Strength::Secure,
        };
    }

    let mut bytes = vec![0u8; alphabet.bytes_for_symbols(count)];
    let strength = source.fill(&mut bytes);

    Generated {
        value: Slicer::new(alphabet, &bytes, count).collect(),
        strength,
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Common entropy levels for identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 29 bits: one in a million chance of repeat in 30 strings
    Small,
    /// 69 bits: one in a billion chance of repeat in a million strings
    Medium,
    /// 99 bits: one in a trillion chance of repeat in a billion strings
    Large,
    /// 128 bits: OWASP session ID
    #[default]
    Session,
    /// 256 bits
    Token,
}

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Session,
        Self::Token,
    ];

    /// Entropy bits for this preset.
    pub const fn bits(self) -> f64 {
        match self {
            Self::Small => SMALL_ID_BITS,
            Self::Medium => MEDIUM_ID_BITS,
            Self::Large => LARGE_ID_BITS,
            Self::Session => SESSION_ID_BITS,
            Self::Token => TOKEN_BITS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Session => "session",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == lower)
            .ok_or_else(|| {
                format!("unknown preset '{s}' (expected small, medium, large, session or token)")
            })
    }
}

// =============================================================================
// Encoder
// =============================================================================

/// Holds a current alphabet and a random source.
///
/// The alphabet is only ever replaced wholesale through [`Encoder::use_alphabet`]
/// or [`Encoder::use_symbols`]. The encoder has no internal locking; share it
/// across threads behind a `Mutex` if the alphabet may change.
#[derive(Debug, Clone)]
pub struct Encoder<R = SystemRandom> {
    alphabet: Alphabet,
    source: R,
}

impl Encoder<SystemRandom> {
    /// Encoder over the default 32-symbol alphabet and OS randomness.
    pub fn new() -> Self {
        Self::with_source(Alphabet::default(), SystemRandom::new())
    }

    /// Encoder over `alphabet` and OS randomness.
    pub fn with_alphabet(alphabet: impl Into<Alphabet>) -> Self {
        Self::with_source(alphabet, SystemRandom::new())
    }
}

impl Default for Encoder<SystemRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Encoder<R> {
    /// Encoder over `alphabet` drawing bytes from `source`.
    pub fn with_source(alphabet: impl Into<Alphabet>, source: R) -> Self {
        Self {
            alphabet: alphabet.into(),
            source,
        }
    }

    /// The current alphabet.
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The random source.
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Replaces the current alphabet.
    pub fn use_alphabet(&mut self, alphabet: impl Into<Alphabet>) {
        self.alphabet = alphabet.into();
    }

    /// Validates `symbols` and makes them the current alphabet.
    ///
    /// On error the current alphabet is left unchanged.
    pub fn use_symbols(&mut self, symbols: &str, force: bool) -> Result<()> {
        self.alphabet = Alphabet::build(symbols, force)?;
        Ok(())
    }

    /// Symbols bound to the `charset` slot: the current alphabet when it has
    /// that size, otherwise the built-in default.
    pub fn characters(&self, charset: CharSet) -> String {
        if self.alphabet.size() == charset.size() {
            self.alphabet.to_string()
        } else {
            charset.default_symbols().to_string()
        }
    }

    /// Random string of `bits` entropy over the current alphabet.
    pub fn generate(&mut self, bits: f64) -> Result<Generated> {
        generate(bits, &self.alphabet, &mut self.source)
    }

    /// Random string of `bits` entropy over `alphabet`.
    pub fn generate_with(&mut self, bits: f64, alphabet: &Alphabet) -> Result<Generated> {
        generate(bits, alphabet, &mut self.source)
    }

    /// Deterministic string of `bits` entropy from `bytes` over the current alphabet.
    pub fn encode(&self, bits: f64, bytes: &[u8]) -> Result<String> {
        encode(bits, &self.alphabet, bytes)
    }

    /// Random string at a preset entropy level over the current alphabet.
    pub fn preset(&mut self, preset: Preset) -> Generated {
        let count = self.alphabet.symbols_needed(preset.bits());
        generate_symbols(count, &self.alphabet, &mut self.source)
    }

    /// Random string at a preset entropy level over `alphabet`.
    pub fn preset_with(&mut self, preset: Preset, alphabet: &Alphabet) -> Generated {
        let count = alphabet.symbols_needed(preset.bits());
        generate_symbols(count, alphabet, &mut self.source)
    }

    pub fn small_id(&mut self) -> String {
        self.preset(Preset::Small).value
    }

    pub fn medium_id(&mut self) -> String {
        self.preset(Preset::Medium).value
    }

    pub fn large_id(&mut self) -> String {
        self.preset(Preset::Large).value
    }

    pub fn session_id(&mut self) -> String {
        self.preset(Preset::Session).value
    }

    pub fn token(&mut self) -> String {
        self.preset(Preset::Token).value
    }
}
