//! Defines the command-line arguments for the tristate CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, ValueEnum};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tristate",
    version,
    about = "Classify yes/no tokens as true, false, or unknown."
)]
pub struct TriStateArgs {
    /// Tokens to classify.
    #[arg(required = true, num_args = 1..)]
    pub tokens: Vec<String>,

    /// Interpret each token as a JSON literal (e.g. `1`, `null`, `"yes"`).
    /// Tokens that are not valid JSON are taken as bare strings.
    #[arg(long)]
    pub json: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// How classifications are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `<input>\t<result>` line per token.
    Text,
    /// A JSON array of `{"input", "result"}` objects.
    Json,
}
