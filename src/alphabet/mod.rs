//! # Alphabets
//!
//! An [`Alphabet`] is an ordered set of 2, 4, 8, 16, 32 or 64 unique symbols.
//! Its size fixes how many entropy bits each output character carries and how
//! the byte buffer is carved up during encoding.
//!
//! ## Geometry
//! - `bits_per_symbol`: `log2(size)`, 1 through 6
//! - `symbols_per_chunk`: `lcm(bits_per_symbol, 8) / bits_per_symbol`, the
//!   number of symbols after which slicing lands back on a byte boundary
//! - `bytes_per_chunk`: whole bytes consumed by one chunk
//!
//! | size | bits | symbols/chunk | bytes/chunk |
//! |------|------|---------------|-------------|
//! | 64   | 6    | 4             | 3           |
//! | 32   | 5    | 8             | 5           |
//! | 16   | 4    | 2             | 1           |
//! | 8    | 3    | 8             | 3           |
//! | 4    | 2    | 4             | 1           |
//! | 2    | 1    | 8             | 1           |
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod slice;

use std::{collections::HashSet, fmt, str::FromStr};

use crate::{
    constants::{
        BITS_PER_BYTE, DEFAULT_CHARSET_SIZE, DEFAULT_SYMBOLS_16, DEFAULT_SYMBOLS_2,
        DEFAULT_SYMBOLS_32, DEFAULT_SYMBOLS_4, DEFAULT_SYMBOLS_64, DEFAULT_SYMBOLS_8,
        SUPPORTED_SYMBOL_COUNTS,
    },
    error::{Error, Result},
};

pub use self::slice::SliceStrategy;

// =============================================================================
// Built-in Character Sets
// =============================================================================

/// Selector for the six built-in alphabets, one per supported size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharSet {
    Base64,
    Base32,
    Base16,
    Base8,
    Base4,
    Base2,
}

impl CharSet {
    /// All built-ins, largest first.
    pub const ALL: [Self; 6] = [
        Self::Base64,
        Self::Base32,
        Self::Base16,
        Self::Base8,
        Self::Base4,
        Self::Base2,
    ];

    /// Number of symbols in this character set.
    pub const fn size(self) -> usize {
        match self {
            Self::Base64 => 64,
            Self::Base32 => 32,
            Self::Base16 => 16,
            Self::Base8 => 8,
            Self::Base4 => 4,
            Self::Base2 => 2,
        }
    }

    /// Entropy bits carried by one character.
    pub const fn bits_per_symbol(self) -> usize {
        self.size().trailing_zeros() as usize
    }

    /// The default symbols for this size.
    pub const fn default_symbols(self) -> &'static str {
        match self {
            Self::Base64 => DEFAULT_SYMBOLS_64,
            Self::Base32 => DEFAULT_SYMBOLS_32,
            Self::Base16 => DEFAULT_SYMBOLS_16,
            Self::Base8 => DEFAULT_SYMBOLS_8,
            Self::Base4 => DEFAULT_SYMBOLS_4,
            Self::Base2 => DEFAULT_SYMBOLS_2,
        }
    }

    /// Looks up the character set with the given number of symbols.
    pub fn from_size(size: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|charset| charset.size() == size)
    }

    /// Builds the built-in alphabet for this character set.
    pub fn alphabet(self) -> Alphabet {
        Alphabet::from_symbols(self.default_symbols().chars().collect())
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::from_size(DEFAULT_CHARSET_SIZE).unwrap_or(Self::Base32)
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base{}", self.size())
    }
}

impl FromStr for CharSet {
    type Err = String;

    /// Accepts `32`, `base32` or `charset32` (case-insensitive).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("base")
            .or_else(|| lower.strip_prefix("charset"))
            .unwrap_or(&lower);

        digits
            .parse::<usize>()
            .ok()
            .and_then(Self::from_size)
            .ok_or_else(|| {
                format!("unknown character set '{s}' (expected one of 64, 32, 16, 8, 4, 2)")
            })
    }
}

// =============================================================================
// Alphabet
// =============================================================================

/// Validated, immutable set of output symbols with its slicing geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    bits_per_symbol: usize,
    symbols_per_chunk: usize,
}

impl Alphabet {
    /// Builds an alphabet from a string of unique symbols.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::build(symbols, false)
    }

    /// Builds an alphabet, optionally skipping the uniqueness check.
    ///
    /// With `force` set, repeated symbols are accepted. Each output character
    /// then carries less entropy than `bits_per_symbol` claims, because the
    /// repeated symbols are drawn more often than the others.
    pub fn build(symbols: &str, force: bool) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        let count = symbols.len();

        if !SUPPORTED_SYMBOL_COUNTS.contains(&count) {
            return Err(Error::InvalidSymbolCount { count });
        }

        if !force {
            if let Some(symbol) = first_duplicate(&symbols) {
                return Err(Error::DuplicateSymbols { symbol });
            }
        }

        Ok(Self::from_symbols(symbols))
    }

    /// Computes geometry for a symbol list whose length is already known to be
    /// a supported size.
    fn from_symbols(symbols: Vec<char>) -> Self {
        debug_assert!(SUPPORTED_SYMBOL_COUNTS.contains(&symbols.len()));

        let bits_per_symbol = symbols.len().trailing_zeros() as usize;
        let symbols_per_chunk = lcm(bits_per_symbol, BITS_PER_BYTE) / bits_per_symbol;

        Self {
            symbols,
            bits_per_symbol,
            symbols_per_chunk,
        }
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Entropy bits carried by each output character.
    pub const fn bits_per_symbol(&self) -> usize {
        self.bits_per_symbol
    }

    /// Symbols produced per byte-aligned chunk.
    pub const fn symbols_per_chunk(&self) -> usize {
        self.symbols_per_chunk
    }

    /// Whole bytes consumed by one chunk.
    pub const fn bytes_per_chunk(&self) -> usize {
        self.bits_per_symbol * self.symbols_per_chunk / BITS_PER_BYTE
    }

    /// The character set of the same size.
    pub fn charset(&self) -> CharSet {
        CharSet::from_size(self.size()).unwrap_or_default()
    }

    /// Whether every symbol is distinct (only false for forced alphabets).
    pub fn is_unique(&self) -> bool {
        first_duplicate(&self.symbols).is_none()
    }

    /// Number of characters needed to carry at least `bits` of entropy.
    ///
    /// Zero, negative and NaN inputs need no characters.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn symbols_needed(&self, bits: f64) -> usize {
        if bits.is_nan() || bits <= 0.0 {
            return 0;
        }
        // Saturates at usize::MAX for infinite or absurd requests.
        (bits / self.bits_per_symbol as f64).ceil() as usize
    }

    /// Smallest byte count covering `bits`, rounded up to whole symbols.
    pub fn bytes_needed(&self, bits: f64) -> usize {
        self.bytes_for_symbols(self.symbols_needed(bits))
    }

    /// Bytes needed to slice `count` symbols.
    pub fn bytes_for_symbols(&self, count: usize) -> usize {
        count
            .saturating_mul(self.bits_per_symbol)
            .div_ceil(BITS_PER_BYTE)
    }

    /// Maps a slice index to its symbol.
    ///
    /// Indices come from `bits_per_symbol`-wide slices, so they are always
    /// below `size()`. Anything else is an arithmetic bug and panics.
    pub(crate) fn symbol(&self, index: usize) -> char {
        assert!(
            index < self.symbols.len(),
            "slice index {index} out of range for {} symbols",
            self.symbols.len()
        );
        self.symbols[index]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        CharSet::default().alphabet()
    }
}

impl From<CharSet> for Alphabet {
    fn from(charset: CharSet) -> Self {
        charset.alphabet()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Returns the first symbol seen twice, if any.
fn first_duplicate(symbols: &[char]) -> Option<char> {
    let mut seen = HashSet::with_capacity(symbols.len());
    symbols.iter().copied().find(|c| !seen.insert(*c))
}

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

const fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_geometry() {
        let expected = [
            (CharSet::Base64, 6, 4, 3),
            (CharSet::Base32, 5, 8, 5),
            (CharSet::Base16, 4, 2, 1),
            (CharSet::Base8, 3, 8, 3),
            (CharSet::Base4, 2, 4, 1),
            (CharSet::Base2, 1, 8, 1),
        ];

        for (charset, bits, per_chunk, bytes) in expected {
            let alphabet = charset.alphabet();
            assert_eq!(alphabet.size(), charset.size());
            assert_eq!(alphabet.bits_per_symbol(), bits, "{charset}");
            assert_eq!(alphabet.symbols_per_chunk(), per_chunk, "{charset}");
            assert_eq!(alphabet.bytes_per_chunk(), bytes, "{charset}");
            assert_eq!(
                alphabet.bits_per_symbol() * alphabet.symbols_per_chunk() % BITS_PER_BYTE,
                0
            );
        }
    }

    #[test]
    fn test_builtins_are_unique() {
        for charset in CharSet::ALL {
            let alphabet = charset.alphabet();
            assert!(alphabet.is_unique(), "{charset}");
            assert_eq!(Alphabet::new(charset.default_symbols()).unwrap(), alphabet);
        }
    }

    #[test]
    fn test_invalid_symbol_count() {
        for len in [0, 1, 3, 5, 7, 9, 15, 17, 31, 33, 63, 65] {
            let symbols: String = (0..len)
                .map(|i| char::from_u32(0x100 + i).unwrap())
                .collect();
            assert_eq!(
                Alphabet::new(&symbols),
                Err(Error::InvalidSymbolCount { count: len as usize })
            );
        }
    }

    #[test]
    fn test_duplicate_symbols() {
        assert_eq!(
            Alphabet::new("0123456789abcdee"),
            Err(Error::DuplicateSymbols { symbol: 'e' })
        );
        assert_eq!(
            Alphabet::new("aa"),
            Err(Error::DuplicateSymbols { symbol: 'a' })
        );
    }

    #[test]
    fn test_force_accepts_duplicates() {
        let alphabet = Alphabet::build("01233456", true).unwrap();
        assert_eq!(alphabet.bits_per_symbol(), 3);
        assert!(!alphabet.is_unique());
    }

    #[test]
    fn test_force_still_checks_count() {
        assert_eq!(
            Alphabet::build("aaa", true),
            Err(Error::InvalidSymbolCount { count: 3 })
        );
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let alphabet = Alphabet::new("äöüß").unwrap();
        assert_eq!(alphabet.size(), 4);
        assert_eq!(alphabet.to_string(), "äöüß");
    }

    #[test]
    fn test_bytes_needed() {
        let base32 = CharSet::Base32.alphabet();
        assert_eq!(base32.bytes_needed(0.0), 0);
        assert_eq!(base32.bytes_needed(5.0), 1);
        assert_eq!(base32.bytes_needed(6.0), 2);
        assert_eq!(base32.bytes_needed(40.0), 5);
        assert_eq!(base32.bytes_needed(41.0), 6);

        let base64 = CharSet::Base64.alphabet();
        assert_eq!(base64.bytes_needed(7.0), 2);
        assert_eq!(base64.bytes_needed(24.0), 3);
        assert_eq!(base64.bytes_needed(128.0), 17);
    }

    #[test]
    fn test_symbols_needed_edge_inputs() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.symbols_needed(-3.0), 0);
        assert_eq!(alphabet.symbols_needed(f64::NAN), 0);
        assert_eq!(alphabet.symbols_needed(f64::INFINITY), usize::MAX);
        assert_eq!(alphabet.bytes_needed(f64::INFINITY), usize::MAX / BITS_PER_BYTE + 1);
    }

    #[test]
    fn test_charset_parsing() {
        assert_eq!("32".parse::<CharSet>(), Ok(CharSet::Base32));
        assert_eq!("base64".parse::<CharSet>(), Ok(CharSet::Base64));
        assert_eq!("CharSet16".parse::<CharSet>(), Ok(CharSet::Base16));
        assert!("12".parse::<CharSet>().is_err());
        assert!("hex".parse::<CharSet>().is_err());
    }

    #[test]
    fn test_default_is_base32() {
        assert_eq!(CharSet::default(), CharSet::Base32);
        assert_eq!(Alphabet::default().to_string(), DEFAULT_SYMBOLS_32);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(6, 8), 24);
        assert_eq!(lcm(5, 8), 40);
        assert_eq!(lcm(4, 8), 8);
    }
}
