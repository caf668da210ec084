//! # Setup Command
//!
//! Creates the global config, or brings an existing one up to date.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    eprintln!("{}\n", "Setting up entropy-string...".bold());

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success("Created global config", &path);
    } else {
        let validation = GlobalConfig::update_if_needed()?;
        if validation.has_changes() {
            let warnings: Vec<String> = validation
                .invalid
                .iter()
                .map(|field| format!("removed unknown field '{field}'"))
                .chain(
                    validation
                        .missing
                        .iter()
                        .map(|field| format!("added missing field '{field}'")),
                )
                .collect();
            ui::print_warnings(&warnings);
            ui::print_success("Updated global config", &path);
        } else {
            ui::print_success("Global config already exists", &path);
        }
    }

    eprintln!("\n{} Setup complete!", "✓".green().bold());

    Ok(())
}
