//! # UI Utilities
//!
//! Shared terminal output helpers. Results go to stdout undecorated so they
//! can be piped; everything else goes to stderr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::{alphabet::Alphabet, random::Strength};

// =============================================================================
// Status Messages
// =============================================================================

/// Prints a success message with a path.
///
/// Format: `✓ {message}: {path}`
pub fn print_success(message: &str, path: &Path) {
    eprintln!("{} {}: {}", "✓".green(), message, path.display());
}

/// Prints a warning with yellow prefix.
pub fn print_warning(warning: &str) {
    eprintln!("{} {}", "warning:".yellow(), warning);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        print_warning(warning);
    }
}

// =============================================================================
// Entropy Diagnostics
// =============================================================================

/// Warning text when random bytes did not come from the OS CSPRNG.
pub fn strength_warning(strength: Strength) -> Option<&'static str> {
    match strength {
        Strength::Secure => None,
        Strength::Fallback => {
            Some("random bytes came from the non-cryptographic fallback generator")
        }
    }
}

/// Warning text for alphabets with repeated symbols.
pub fn alphabet_warning(alphabet: &Alphabet) -> Option<String> {
    if alphabet.is_unique() {
        None
    } else {
        Some(format!(
            "alphabet repeats symbols; characters carry less than {} bits each",
            alphabet.bits_per_symbol()
        ))
    }
}
