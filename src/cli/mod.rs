//! Command-line interface for freq-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **decode**: Decode a substitution ciphertext by frequency proximity
//! - **table**: Show or export the reference frequency table
//!
//! ## Usage
//!
//! ```text
//! # Prompt for one line of ciphertext
//! freq-solver decode
//!
//! # Decode a file, or stdin
//! freq-solver decode message.txt
//! cat message.txt | freq-solver decode -
//!
//! # Inline text, JSON output for scripting
//! freq-solver --format json decode --text "Wkh txlfn eurzq ira"
//!
//! # Inspect the reference table
//! freq-solver table
//! ```

use clap::{Parser, Subcommand};

pub mod decode;
pub mod table;

#[derive(Parser)]
#[command(name = "freq-solver")]
#[command(version)]
#[command(about = "Decode substitution ciphers by letter-frequency proximity")]
#[command(
    long_about = "freq-solver proposes a plaintext for a monoalphabetic substitution cipher.\n\nIt measures how often each letter occurs in the ciphertext and pairs every cipher letter, most frequent first, with the unused Spanish letter whose expected frequency is closest. Short texts usually need manual touch-ups afterwards."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a ciphertext
    Decode(decode::DecodeArgs),

    /// Show the reference frequency table
    Table(table::TableArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
