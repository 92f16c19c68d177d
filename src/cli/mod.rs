//! The tristate Command-Line Interface.
//!
//! Turns command-line tokens into input values, classifies them with the
//! library parser, and renders either the results or a `miette` report.

use std::process;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Format, TriStateArgs};
use crate::cli::output::{write_json, write_text, Classification};
use crate::{parse, TriStateError, Value};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    init_tracing();
    let args = TriStateArgs::parse();

    if let Err(e) = execute(&args) {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Classifies every token, then writes the results.
///
/// Stops at the first non-text token; nothing is written in that case.
pub fn execute(args: &TriStateArgs) -> Result<(), TriStateError> {
    let rows = classify_all(&args.tokens, args.json)?;
    match args.format {
        Format::Text => {
            let mut stdout = StandardStream::stdout(color_choice());
            write_text(&mut stdout, &rows)?;
        }
        Format::Json => {
            let mut stdout = std::io::stdout().lock();
            write_json(&mut stdout, &rows)?;
        }
    }
    Ok(())
}

// termcolor's Auto honors NO_COLOR and TERM but not redirection.
fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Builds the input value for one command-line token.
pub fn to_value(token: &str, json: bool) -> Value {
    if !json {
        return Value::from(token);
    }
    match serde_json::from_str::<serde_json::Value>(token) {
        Ok(parsed) => Value::from(parsed),
        Err(_) => Value::from(token),
    }
}

/// Classifies tokens in order, failing fast on the first non-text value.
pub fn classify_all(tokens: &[String], json: bool) -> Result<Vec<Classification>, TriStateError> {
    tokens
        .iter()
        .map(|token| -> Result<Classification, TriStateError> {
            let value = to_value(token, json);
            let result = parse(&value)?;
            Ok(Classification {
                input: value.to_string(),
                result,
            })
        })
        .collect()
}
