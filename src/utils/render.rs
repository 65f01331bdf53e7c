//! Console rendering for analysis reports.
//!
//! Findings carry a severity tag; rendering maps the tag to an ANSI
//! color when color is enabled. The text content is identical either
//! way, so piped or redirected output stays reproducible plain text.

use crate::enrollment::analyze::{Report, Severity};
use std::io::{IsTerminal, Write};

const GREEN: &str = "32";
const RED: &str = "31";

/// Decides whether report output should carry ANSI color codes.
///
/// Color is off when the caller passed `--no-color`, when the `NO_COLOR`
/// environment variable is set, or when stdout is not a terminal.
pub fn color_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Writes the full report to `out`: three titled sections separated by
/// one blank line, one finding per line.
pub fn write_report<W: Write>(out: &mut W, report: &Report, color: bool) -> std::io::Result<()> {
    for (idx, section) in report.sections.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", section.title)?;
        for finding in &section.findings {
            let code = match finding.severity {
                Severity::Ok => GREEN,
                Severity::Alert => RED,
            };
            writeln!(out, "{}", paint(&finding.text, code, color))?;
        }
    }
    Ok(())
}
