//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/entropy-string/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_CHARSET_SIZE, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME},
    encoder::Preset,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["charset", "symbols", "force", "secure", "preset"];

/// Fields that should be present with actual values (have meaningful defaults).
/// `symbols` is optional and stays commented when not set.
const REQUIRED_FIELDS: &[&str] = &["charset", "force", "secure", "preset"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/entropy-string/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Built-in alphabet size used when no custom symbols are set
    #[serde(default = "default_charset")]
    pub charset: usize,

    /// Custom alphabet symbols (overrides `charset`)
    #[serde(default)]
    pub symbols: Option<String>,

    /// Accept custom symbols that repeat
    #[serde(default)]
    pub force: bool,

    /// Prefer the OS CSPRNG (false always uses the fallback generator)
    #[serde(default = "default_true")]
    pub secure: bool,

    /// Entropy preset used when no bits are requested
    #[serde(default)]
    pub preset: Preset,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET_SIZE,
            symbols: None,
            force: false,
            secure: true,
            preset: Preset::default(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_charset() -> usize {
    DEFAULT_CHARSET_SIZE
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/entropy-string/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/entropy-string)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `es setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    ///
    /// `symbols` is shown as a commented example when not set.
    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        let symbols_line = config.symbols.as_ref().map_or_else(
            || "# symbols = \"0123456789ABCDEF\"".to_string(),
            |s| format!("symbols = {}", toml::Value::String(s.clone())),
        );

        let content = format!(
            r#"# entropy-string Global Configuration
# Location: ~/.config/entropy-string/config

# Built-in alphabet used for generated strings, by number of symbols.
#   64  ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_
#   32  2346789bdfghjmnpqrtBDFGHJLMNPQRT
#   16  0123456789abcdef
#    8  01234567
#    4  ATCG
#    2  01
# Default: 32
charset = {charset}

# Custom alphabet. Overrides charset when set.
# Must contain 2, 4, 8, 16, 32 or 64 unique characters.
{symbols_line}

# Accept custom symbols that repeat. Repeated symbols show up more often,
# so each character carries less entropy than its alphabet size suggests.
# Default: false
force = {force}

# Use the operating system's secure random generator. When false, or when
# it is unavailable, a fast non-cryptographic generator is used instead.
# Default: true
secure = {secure}

# Entropy used when none is requested on the command line.
#   small    29 bits   1 in a million chance of repeat in 30 strings
#   medium   69 bits   1 in a billion chance of repeat in a million strings
#   large    99 bits   1 in a trillion chance of repeat in a billion strings
#   session 128 bits   OWASP session ID
#   token   256 bits
# Default: "session"
preset = "{preset}"
"#,
            charset = config.charset,
            symbols_line = symbols_line,
            force = config.force,
            secure = config.secure,
            preset = config.preset,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// This parses the raw TOML to detect unknown fields that should be
    /// removed and required fields that are missing.
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Global config not found");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in REQUIRED_FIELDS {
            if !table.contains_key(field) {
                validation.missing.push(field.to_string());
            }
        }

        Ok(validation)
    }

    /// Validates and rewrites the global config file if needed.
    ///
    /// Loading fills in defaults for missing fields and drops unknown ones;
    /// re-saving writes every valid field with its comment block.
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let validation = Self::validate()?;

        if !validation.has_changes() {
            return Ok(validation);
        }

        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        let config = Self::load()?;
        Self::save_with_comments(&path, &config)?;

        Ok(validation)
    }
}
