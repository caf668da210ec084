//! # Constants
//!
//! Centralized constants for magic values used throughout entropy-string.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Alphabets
// =============================================================================

/// Symbol counts an alphabet may have (powers of two from 2 to 64).
pub const SUPPORTED_SYMBOL_COUNTS: [usize; 6] = [64, 32, 16, 8, 4, 2];

/// URL and file system safe characters (RFC 4648 base64url).
pub const DEFAULT_SYMBOLS_64: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Human-distinguishable characters: no vowels (avoids words), no look-alikes
/// such as `0`/`O`, `1`/`l`/`I`, `5`/`S`.
pub const DEFAULT_SYMBOLS_32: &str = "2346789bdfghjmnpqrtBDFGHJLMNPQRT";

/// Lowercase hexadecimal.
pub const DEFAULT_SYMBOLS_16: &str = "0123456789abcdef";

/// Octal.
pub const DEFAULT_SYMBOLS_8: &str = "01234567";

/// DNA alphabet.
pub const DEFAULT_SYMBOLS_4: &str = "ATCG";

/// Binary.
pub const DEFAULT_SYMBOLS_2: &str = "01";

pub const BITS_PER_BYTE: usize = 8;

// =============================================================================
// Entropy
// =============================================================================

/// Below this many strings the exact `log2(n) + log2(n - 1)` term is used;
/// above it `2 * log2(n)` is indistinguishable at the precision that matters.
pub const EXACT_TOTAL_THRESHOLD: f64 = 10_001.0;

/// Totals expressed as powers of ten below this exponent go through the
/// numeric formula; larger ones use the closed form.
pub const POWER_CLOSED_FORM_MIN: u32 = 5;

/// One in a million chance of repeat in 30 strings.
pub const SMALL_ID_BITS: f64 = 29.0;

/// One in a billion chance of repeat in a million strings.
pub const MEDIUM_ID_BITS: f64 = 69.0;

/// One in a trillion chance of repeat in a billion strings.
pub const LARGE_ID_BITS: f64 = 99.0;

/// OWASP recommended session ID entropy.
pub const SESSION_ID_BITS: f64 = 128.0;

pub const TOKEN_BITS: f64 = 256.0;

/// Largest entropy random generation accepts (128 KiB of random bytes).
pub const MAX_GENERATED_BITS: f64 = 1_048_576.0;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "entropy-string";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Alphabet size used when nothing is configured.
pub const DEFAULT_CHARSET_SIZE: usize = 32;
