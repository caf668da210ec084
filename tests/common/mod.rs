//! # Test Harness
//!
//! Provides utilities for integration testing entropy-string without affecting user
//! configuration. Uses thread-local storage instead of environment variables to avoid
//! any interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use entropy_string::set_home_override;

/// Global lock to ensure tests run sequentially.
/// This prevents races on the home override and the config file.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary "home" directory for the global config.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/entropy-string/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("entropy-string")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Creates an `es` command whose HOME is the test home directory.
    pub fn es(&self) -> Command {
        let mut cmd = Command::cargo_bin("es").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Helper to build TOML config lines from optional values.
struct ConfigLines(Vec<String>);

impl ConfigLines {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn add_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = \"{v}\""));
        }
    }

    fn add_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn add_int(&mut self, key: &str, value: Option<usize>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn build(self) -> String {
        self.0.join("\n")
    }
}

/// Builder for creating test configurations.
///
/// Unset fields are left out of the file so their defaults apply.
#[derive(Default)]
pub struct GlobalConfigBuilder {
    charset: Option<usize>,
    symbols: Option<String>,
    force: Option<bool>,
    secure: Option<bool>,
    preset: Option<String>,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charset(mut self, size: usize) -> Self {
        self.charset = Some(size);
        self
    }

    pub fn symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = Some(symbols.into());
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_int("charset", self.charset);
        lines.add_string("symbols", self.symbols.as_deref());
        lines.add_bool("force", self.force);
        lines.add_bool("secure", self.secure);
        lines.add_string("preset", self.preset.as_deref());
        lines.build()
    }
}
