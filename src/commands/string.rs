//! # String Command
//!
//! Generates entropy strings, or encodes caller-supplied bytes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use super::bits::EntropySpec;
use crate::{
    alphabet::{Alphabet, CharSet},
    config::Config,
    encoder::{encode, Encoder},
    random::{Strength, SystemRandom},
    ui,
};

/// Arguments for the string command
#[derive(Debug, Clone, Default)]
pub struct StringArgs {
    /// Entropy to carry (configured preset if `None`)
    pub entropy: Option<EntropySpec>,
    /// Built-in character set
    pub charset: Option<CharSet>,
    /// Custom symbols (override `charset`)
    pub symbols: Option<String>,
    /// Accept repeated custom symbols
    pub force: bool,
    /// Hex bytes to encode instead of drawing random ones
    pub bytes: Option<String>,
    /// Number of strings to generate
    pub count: usize,
    /// Skip the OS CSPRNG
    pub insecure: bool,
}

/// Strings produced by the command, plus warnings for stderr.
#[derive(Debug, Default)]
pub struct Output {
    pub strings: Vec<String>,
    pub warnings: Vec<String>,
}

/// Executes the string command.
pub fn execute(args: &StringArgs) -> Result<()> {
    let config = Config::load()?;
    let output = render(args, &config)?;

    ui::print_warnings(&output.warnings);
    for string in &output.strings {
        println!("{string}");
    }

    Ok(())
}

/// Produces the strings for `args` under `config` without printing them.
pub fn render(args: &StringArgs, config: &Config) -> Result<Output> {
    let bits = args
        .entropy
        .map_or_else(|| config.preset().bits(), EntropySpec::bits);
    let alphabet = resolve_alphabet(args, config)?;

    let mut output = Output::default();
    if let Some(warning) = ui::alphabet_warning(&alphabet) {
        output.warnings.push(warning);
    }

    if let Some(hex) = &args.bytes {
        if args.count > 1 {
            anyhow::bail!("--count cannot be combined with --bytes");
        }
        let bytes = parse_hex(hex)?;
        let value = encode(bits, &alphabet, &bytes)
            .with_context(|| format!("Failed to encode {} bytes", bytes.len()))?;
        output.strings.push(value);
        return Ok(output);
    }

    let source = if args.insecure {
        SystemRandom::insecure()
    } else {
        config.random_source()
    };
    let mut encoder = Encoder::with_source(alphabet, source);

    let mut strength = Strength::Secure;
    for _ in 0..args.count.max(1) {
        let generated = encoder.generate(bits)?;
        if !generated.strength.is_secure() {
            strength = generated.strength;
        }
        output.strings.push(generated.value);
    }

    // Only an unrequested fallback is worth a warning
    if encoder.source().prefers_secure() {
        if let Some(warning) = ui::strength_warning(strength) {
            output.warnings.push(warning.to_string());
        }
    }

    Ok(output)
}

/// Command-line symbols win over a command-line charset, which wins over config.
fn resolve_alphabet(args: &StringArgs, config: &Config) -> Result<Alphabet> {
    if let Some(symbols) = &args.symbols {
        return Alphabet::build(symbols, args.force)
            .with_context(|| format!("Invalid symbols '{symbols}'"));
    }
    match args.charset {
        Some(charset) => Ok(charset.alphabet()),
        None => config.alphabet(),
    }
}

/// Parses hex bytes, ignoring whitespace and an optional `0x` prefix.
fn parse_hex(hex: &str) -> Result<Vec<u8>> {
    let trimmed = hex.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        anyhow::bail!("Invalid hex digit '{c}' in '{hex}'");
    }
    if digits.len() % 2 != 0 {
        anyhow::bail!("Hex bytes must have an even number of digits: '{hex}'");
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("Invalid hex byte '{}'", &digits[i..i + 2]))
        })
        .collect()
}
