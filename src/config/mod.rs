//! # Configuration
//!
//! Effective settings: the global config file (`~/.config/entropy-string/config`)
//! resolved into the library's types.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use anyhow::{Context, Result};

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig};
use crate::{
    alphabet::{Alphabet, CharSet},
    encoder::Preset,
    random::SystemRandom,
};

/// Resolved configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
}

impl Config {
    /// Loads configuration from the global config file (defaults if absent)
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
        })
    }

    /// Returns the configured built-in character set
    pub fn charset(&self) -> Result<CharSet> {
        CharSet::from_size(self.global.charset).with_context(|| {
            format!(
                "Invalid charset {} in config (expected 64, 32, 16, 8, 4 or 2)",
                self.global.charset
            )
        })
    }

    /// Returns the effective alphabet (custom symbols override charset)
    pub fn alphabet(&self) -> Result<Alphabet> {
        match &self.global.symbols {
            Some(symbols) => Alphabet::build(symbols, self.global.force)
                .context("Invalid symbols in config"),
            None => Ok(self.charset()?.alphabet()),
        }
    }

    /// Returns the default entropy preset
    pub const fn preset(&self) -> Preset {
        self.global.preset
    }

    /// Whether the OS CSPRNG should be used
    pub const fn secure(&self) -> bool {
        self.global.secure
    }

    /// Returns the random source matching the `secure` setting
    pub const fn random_source(&self) -> SystemRandom {
        if self.global.secure {
            SystemRandom::new()
        } else {
            SystemRandom::insecure()
        }
    }
}
