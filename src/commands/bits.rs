//! # Bits Command
//!
//! Prints the entropy bits needed for a number of strings at a given risk of
//! repeat, and optionally the string length that carries them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr};

use anyhow::Result;

use crate::{
    alphabet::CharSet,
    encoder::Preset,
    entropy::{bits_required, bits_required_powers, bits_required_with_power, Power},
};

// =============================================================================
// Entropy Sources
// =============================================================================

/// A count given either directly (`1000`, `1e6`) or as a power of ten (`10^6`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Count(f64),
    Power(Power),
}

impl Quantity {
    /// The count as a float.
    pub fn value(self) -> f64 {
        match self {
            Self::Count(count) => count,
            Self::Power(power) => power.value(),
        }
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");

        if let Some(exponent) = s.strip_prefix("10^") {
            return exponent
                .parse::<u32>()
                .map(|e| Self::Power(Power::of(e)))
                .map_err(|_| format!("invalid power of ten '{s}'"));
        }

        match s.parse::<f64>() {
            Ok(count) if count.is_finite() => Ok(Self::Count(count)),
            _ => Err(format!("invalid count '{s}' (e.g. 1000, 1e6 or 10^6)")),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Power(power) => write!(f, "10^{}", power.exponent()),
        }
    }
}

/// Parses a `--bits` value; NaN and infinities are rejected.
pub fn parse_bits(s: &str) -> std::result::Result<f64, String> {
    match s.trim().replace('_', "").parse::<f64>() {
        Ok(bits) if bits.is_finite() => Ok(bits),
        _ => Err(format!("invalid bits '{s}' (expected a finite number, e.g. 128)")),
    }
}

/// Where the entropy of a generated string comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntropySpec {
    /// Explicit bits
    Bits(f64),
    /// `total` strings with a 1 in `risk` chance of repeat
    Risk { total: Quantity, risk: Quantity },
    /// Named preset
    Preset(Preset),
}

impl EntropySpec {
    /// Resolves to bits of entropy.
    pub fn bits(self) -> f64 {
        match self {
            Self::Bits(bits) => bits,
            Self::Risk { total, risk } => risk_bits(total, risk),
            Self::Preset(preset) => preset.bits(),
        }
    }
}

fn risk_bits(total: Quantity, risk: Quantity) -> f64 {
    match (total, risk) {
        (Quantity::Power(total), Quantity::Power(risk)) => bits_required_powers(total, risk),
        (Quantity::Count(total), Quantity::Power(risk)) => bits_required_with_power(total, risk),
        (total, risk) => bits_required(total.value(), risk.value()),
    }
}

// =============================================================================
// Command
// =============================================================================

/// Arguments for the bits command
pub struct BitsArgs {
    pub total: Quantity,
    pub risk: Quantity,
    pub charset: Option<CharSet>,
}

/// Lines printed by the bits command: the bits, then the length if a
/// character set was given.
pub fn render(args: &BitsArgs) -> Vec<String> {
    let bits = risk_bits(args.total, args.risk);
    let mut lines = vec![format!("{bits:.2}")];

    if let Some(charset) = args.charset {
        lines.push(charset.alphabet().symbols_needed(bits).to_string());
    }

    lines
}

/// Executes the bits command.
pub fn execute(args: &BitsArgs) -> Result<()> {
    for line in render(args) {
        println!("{line}");
    }
    Ok(())
}
