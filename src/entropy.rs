//! # Entropy Bits
//!
//! How many bits of entropy are needed so that generating `total` strings has
//! at most a 1 in `risk` chance of any repeat.
//!
//! Derived from the birthday problem: with `n` strings drawn from a space of
//! `2^N`, the chance of a repeat is about `n(n-1) / 2^(N+1)`. Setting that to
//! `1/r` and solving for `N` gives
//!
//! ```text
//! N = log2(n) + log2(n - 1) + log2(r) - 1
//! ```
//!
//! Beyond 10001 strings `log2(n - 1)` is replaced by `log2(n)`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::f64::consts::LOG2_10;

use crate::constants::{EXACT_TOTAL_THRESHOLD, POWER_CLOSED_FORM_MIN};

/// Bits of entropy needed for `total` strings with a 1 in `risk` chance of repeat.
///
/// Returns 0 when fewer than two strings are generated, since nothing can
/// repeat. A `risk` of 1 or less accepts a certain repeat and contributes
/// nothing. The result is never negative.
///
/// ```
/// let bits = entropy_string::bits_required(10_000.0, 1.0e6);
/// assert!((bits - 45.51).abs() < 0.01);
/// ```
pub fn bits_required(total: f64, risk: f64) -> f64 {
    bits_for_log2_risk(total, log2_risk(risk))
}

/// Like [`bits_required`] with the total given as a count and the risk as a
/// power of ten.
pub fn bits_required_with_power(total: f64, risk: Power) -> f64 {
    bits_for_log2_risk(total, risk.log2())
}

/// Like [`bits_required`] with both values given as powers of ten.
///
/// Small totals are converted to counts so the exact small-`n` term applies;
/// larger ones use `(2p + q) * log2(10) - 1`, which never materialises the
/// (possibly astronomical) counts.
pub fn bits_required_powers(total: Power, risk: Power) -> f64 {
    if total.exponent() < POWER_CLOSED_FORM_MIN {
        return bits_required_with_power(total.value(), risk);
    }
    let exponent = 2.0 * f64::from(total.exponent()) + f64::from(risk.exponent());
    (exponent * LOG2_10 - 1.0).max(0.0)
}

fn bits_for_log2_risk(total: f64, log2_risk: f64) -> f64 {
    if total.is_nan() || total < 2.0 {
        return 0.0;
    }

    let n = if total <= EXACT_TOTAL_THRESHOLD {
        total.log2() + (total - 1.0).log2()
    } else {
        2.0 * total.log2()
    };

    (n + log2_risk - 1.0).max(0.0)
}

fn log2_risk(risk: f64) -> f64 {
    if risk.is_nan() || risk <= 1.0 {
        0.0
    } else {
        risk.log2()
    }
}

// =============================================================================
// Powers of Ten
// =============================================================================

/// A count expressed as `10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Power(u32);

impl Power {
    pub const TEN_01: Self = Self(1);
    pub const TEN_03: Self = Self(3);
    pub const TEN_06: Self = Self(6);
    pub const TEN_09: Self = Self(9);
    pub const TEN_12: Self = Self(12);
    pub const TEN_15: Self = Self(15);

    /// `10^exponent`.
    pub const fn of(exponent: u32) -> Self {
        Self(exponent)
    }

    pub const fn exponent(self) -> u32 {
        self.0
    }

    /// The count as a float (`inf` past `f64` range).
    pub fn value(self) -> f64 {
        10f64.powf(f64::from(self.0))
    }

    /// `log2(10^exponent)`, exact even when the count itself overflows.
    pub fn log2(self) -> f64 {
        f64::from(self.0) * LOG2_10
    }
}

impl From<u32> for Power {
    fn from(exponent: u32) -> Self {
        Self(exponent)
    }
}
