//! # Commands
//!
//! CLI command implementations for `es`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod bits;
pub mod charsets;
pub mod completions;
pub mod setup;
pub mod string;

pub use self::{
    bits::{execute as bits, BitsArgs, EntropySpec, Quantity},
    charsets::execute as charsets,
    completions::execute as completions,
    setup::execute as setup,
    string::{execute as string, StringArgs},
};
