//! Handles all user-facing output for the CLI.
//!
//! Writers are generic so tests can capture output in a `termcolor::Buffer`
//! instead of the real terminal.

use std::io::Write;

use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::TriState;

/// One classified input, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub input: String,
    pub result: TriState,
}

/// Writes `<input>\t<result>` lines, coloring the result.
pub fn write_text<W: WriteColor>(out: &mut W, rows: &[Classification]) -> std::io::Result<()> {
    for row in rows {
        write!(out, "{}\t", row.input)?;
        out.set_color(ColorSpec::new().set_fg(Some(result_color(row.result))).set_bold(true))?;
        write!(out, "{}", row.result)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes all rows as a single pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, rows: &[Classification]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)
}

fn result_color(result: TriState) -> Color {
    match result {
        TriState::True => Color::Green,
        TriState::False => Color::Red,
        TriState::Unknown => Color::Yellow,
    }
}
