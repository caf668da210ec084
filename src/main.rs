//! # es CLI
//!
//! Command-line interface for generating entropy strings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use entropy_string::{
    commands::{self, BitsArgs, EntropySpec, Quantity, StringArgs},
    CharSet, Preset,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/entropy-string/config   Default charset, symbols, preset, secure

Counts:
  Totals and risks accept plain counts (1000, 1e6) or powers of ten (10^6).

Getting Started:
  es string                          A session ID (128 bits) in base32
  es string --total 1e6 --risk 1e9   ID for a million strings, 1 in a billion repeat
  es bits --total 1e6 --risk 1e9     Just the bits for the same

Learn more:
  es <COMMAND> --help                Show detailed help for a command";

#[derive(Parser)]
#[command(name = "es")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Generate random strings with a chosen amount of entropy")]
#[command(
    long_about = "es generates random strings that carry a chosen amount of entropy, for \
session tokens and identifiers with a known risk of repeat.\n\n\
Instead of guessing a string length, state how many strings you will generate and how \
unlikely a repeat must be. es computes the bits needed and emits the shortest string over \
the chosen alphabet that carries them."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate entropy strings
    #[command(
        long_about = "Generate entropy strings.\n\n\
The entropy comes from (first match wins):\n  \
1. --bits\n  \
2. --total and --risk\n  \
3. --preset\n  \
4. preset in the global config\n\n\
The alphabet comes from --symbols, then --charset, then the global config. With \
--bytes the given hex bytes are encoded instead of random ones, which makes the \
output reproducible.",
        after_help = "Examples:\n  \
es string                                Session ID from the configured preset\n  \
es string --bits 48 --charset 16         48 bits of hex\n  \
es string --total 10^6 --risk 10^9       A million IDs, 1 in a billion repeat\n  \
es string --preset small --count 5       Five small IDs\n  \
es string --symbols ATCG --bits 16       Custom alphabet\n  \
es string --bits 16 --charset 16 --bytes c7c9\n\n\
Output: One string per line."
    )]
    String {
        /// Bits of entropy
        #[arg(
            long,
            value_parser = commands::bits::parse_bits,
            allow_negative_numbers = true,
            conflicts_with_all = ["total", "preset"]
        )]
        bits: Option<f64>,

        /// Number of strings that will be generated
        #[arg(long, requires = "risk", conflicts_with = "preset")]
        total: Option<Quantity>,

        /// Accept a 1 in RISK chance of any repeat
        #[arg(long, requires = "total")]
        risk: Option<Quantity>,

        /// Named entropy level: small, medium, large, session or token
        #[arg(long)]
        preset: Option<Preset>,

        /// Built-in alphabet size: 64, 32, 16, 8, 4 or 2
        #[arg(short, long)]
        charset: Option<CharSet>,

        /// Custom alphabet (overrides --charset)
        #[arg(short, long)]
        symbols: Option<String>,

        /// Accept custom symbols that repeat
        #[arg(long, requires = "symbols")]
        force: bool,

        /// Hex bytes to encode instead of random ones
        #[arg(long, conflicts_with_all = ["count", "insecure"])]
        bytes: Option<String>,

        /// Number of strings to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Use the fast non-cryptographic generator
        #[arg(long)]
        insecure: bool,
    },

    /// Compute the bits needed for a total and risk
    #[command(
        long_about = "Compute the bits of entropy needed so that generating TOTAL strings has \
at most a 1 in RISK chance of any repeat.\n\n\
Prints the bits with two decimals. With --charset, also prints the string length \
that carries them.",
        after_help = "Examples:\n  \
es bits --total 10000 --risk 1e6             45.51\n  \
es bits --total 10^5 --risk 10^12 -c 64      Bits and base64 length"
    )]
    Bits {
        /// Number of strings that will be generated
        #[arg(long)]
        total: Quantity,

        /// Accept a 1 in RISK chance of any repeat
        #[arg(long)]
        risk: Quantity,

        /// Also print the length in this built-in alphabet
        #[arg(short, long)]
        charset: Option<CharSet>,
    },

    /// List the built-in character sets
    #[command(
        long_about = "List the built-in character sets with bits per character, chunk geometry \
and symbols. A custom alphabet from the global config replaces the default of its size."
    )]
    Charsets,

    /// Create or update the global config
    #[command(
        long_about = "Create the global config at ~/.config/entropy-string/config with every \
option and its default, commented.\n\n\
If the config exists, unknown fields are removed and missing ones added."
    )]
    Setup,

    /// Generate shell completions
    #[command(
        after_help = "Examples:\n  \
es completions zsh > ~/.zfunc/_es\n  \
es completions bash > ~/.local/share/bash-completion/completions/es\n  \
es completions fish > ~/.config/fish/completions/es.fish"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::String {
            bits,
            total,
            risk,
            preset,
            charset,
            symbols,
            force,
            bytes,
            count,
            insecure,
        } => commands::string(&StringArgs {
            entropy: entropy_spec(bits, total.zip(risk), preset),
            charset,
            symbols,
            force,
            bytes,
            count,
            insecure,
        }),

        Commands::Bits {
            total,
            risk,
            charset,
        } => commands::bits(&BitsArgs {
            total,
            risk,
            charset,
        }),

        Commands::Charsets => commands::charsets(),

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

fn entropy_spec(
    bits: Option<f64>,
    risk: Option<(Quantity, Quantity)>,
    preset: Option<Preset>,
) -> Option<EntropySpec> {
    bits.map(EntropySpec::Bits)
        .or_else(|| risk.map(|(total, risk)| EntropySpec::Risk { total, risk }))
        .or_else(|| preset.map(EntropySpec::Preset))
}
