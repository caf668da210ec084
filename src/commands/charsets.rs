//! # Charsets Command
//!
//! Lists the alphabet bound to each character set size, with its geometry.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{alphabet::CharSet, config::Config, encoder::Encoder};

/// One line per character set: name, bits per character, chunk geometry and
/// symbols. A configured custom alphabet replaces the default of its size.
pub fn render(config: &Config) -> Result<Vec<String>> {
    let encoder = Encoder::with_alphabet(config.alphabet()?);

    Ok(CharSet::ALL
        .into_iter()
        .map(|charset| {
            let alphabet = charset.alphabet();
            format!(
                "{:<7} {} bits  {:>2} chars / {} bytes  {}",
                charset.to_string(),
                alphabet.bits_per_symbol(),
                alphabet.symbols_per_chunk(),
                alphabet.bytes_per_chunk(),
                encoder.characters(charset)
            )
        })
        .collect())
}

/// Executes the charsets command.
pub fn execute() -> Result<()> {
    for line in render(&Config::load()?)? {
        println!("{line}");
    }
    Ok(())
}
