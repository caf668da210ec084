//! # Config Tests
//!
//! Tests for loading, validating and applying the global config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{GlobalConfigBuilder, TestEnv};
use entropy_string::{
    commands::string::{render, StringArgs},
    config::GlobalConfig,
    CharSet, Config, Preset,
};

fn args() -> StringArgs {
    StringArgs {
        count: 1,
        ..StringArgs::default()
    }
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_missing_config_uses_defaults() {
    let _env = TestEnv::new();
    let config = Config::load().expect("load should succeed");
    assert_eq!(config.charset().unwrap(), CharSet::Base32);
    assert_eq!(config.preset(), Preset::Session);
    assert!(config.secure());
}

#[test]
fn test_partial_config() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().charset(64).build());

    let config = Config::load().unwrap();
    assert_eq!(config.charset().unwrap(), CharSet::Base64);
    assert_eq!(config.preset(), Preset::Session);
}

#[test]
fn test_malformed_config_is_an_error() {
    let env = TestEnv::new();
    env.write_global_config("charset = \"lots\"");

    let err = Config::load().unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse global config"));
}

#[test]
fn test_unsupported_charset_is_an_error() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().charset(10).build());

    let config = Config::load().unwrap();
    assert!(config.alphabet().is_err());
}

// =============================================================================
// Applying
// =============================================================================

#[test]
fn test_config_drives_generation() {
    let env = TestEnv::new();
    env.write_global_config(
        &GlobalConfigBuilder::new()
            .charset(4)
            .preset("small")
            .secure(false)
            .build(),
    );

    let config = Config::load().unwrap();
    let output = render(&args(), &config).unwrap();
    assert_eq!(output.strings[0].len(), 15);
    assert!(output.strings[0].chars().all(|c| "ATCG".contains(c)));
    // The insecure generator was asked for, so nothing to warn about
    assert!(output.warnings.is_empty());
}

#[test]
fn test_config_symbols() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().symbols("0123456789ABCDEF").build());

    let config = Config::load().unwrap();
    let args = StringArgs {
        bytes: Some("c7c9".to_string()),
        entropy: Some(entropy_string::commands::EntropySpec::Bits(16.0)),
        ..args()
    };
    assert_eq!(render(&args, &config).unwrap().strings, vec!["C7C9"]);
}

#[test]
fn test_config_forced_symbols() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().symbols("abab").build());
    assert!(Config::load().unwrap().alphabet().is_err());

    env.write_global_config(&GlobalConfigBuilder::new().symbols("abab").force(true).build());
    let output = render(&args(), &Config::load().unwrap()).unwrap();
    assert_eq!(output.warnings.len(), 1);
}

#[test]
fn test_command_line_overrides_config() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().charset(2).preset("token").build());

    let args = StringArgs {
        charset: Some(CharSet::Base16),
        entropy: Some(entropy_string::commands::EntropySpec::Preset(Preset::Small)),
        ..args()
    };
    let output = render(&args, &Config::load().unwrap()).unwrap();
    assert_eq!(output.strings[0].len(), 8);
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_create_default_config() {
    let env = TestEnv::new();

    assert!(GlobalConfig::create_default_if_missing().unwrap());
    let content = env.read_global_config();
    assert!(content.contains("charset = 32"));
    assert!(content.contains("# symbols = "));
    assert!(content.contains("preset = \"session\""));

    assert!(!GlobalConfig::create_default_if_missing().unwrap());
}

#[test]
fn test_update_adds_missing_and_removes_unknown() {
    let env = TestEnv::new();
    env.write_global_config("charset = 16\nlength = 12\n");

    let validation = GlobalConfig::update_if_needed().unwrap();
    assert_eq!(validation.invalid, vec!["length"]);
    assert_eq!(validation.missing, vec!["force", "secure", "preset"]);

    let content = env.read_global_config();
    assert!(content.contains("charset = 16"));
    assert!(!content.contains("length"));
    assert!(!GlobalConfig::validate().unwrap().has_changes());
}

#[test]
fn test_update_keeps_custom_symbols() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().symbols("HT").build());

    GlobalConfig::update_if_needed().unwrap();
    let config = Config::load().unwrap();
    assert_eq!(config.global.symbols.as_deref(), Some("HT"));
    assert_eq!(config.alphabet().unwrap().to_string(), "HT");
}
