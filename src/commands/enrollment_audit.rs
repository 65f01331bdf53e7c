//! End-to-end enrollment dump audit.
//!
//! Reads a dump of mobile-auth enrollment records and reports three
//! alert classes: devices whose security token changed, tokens
//! confirmed as stable pairings, and devices running inconsistent app
//! versions under the same token.
//!
//! # Usage
//!
//! ```bash
//! # Default dump file (data.txt)
//! mfa-audit
//!
//! # Explicit dump file, compressed dumps work directly
//! mfa-audit enrollments.txt
//! mfa-audit enrollments.txt.gz
//! ```
//!
//! # Output
//!
//! Three titled sections on stdout (token changes, stable pairings,
//! version drift), one finding per line. Alerts render red and
//! affirmative findings green when color is enabled. Read progress and
//! record counts go to stderr.

use crate::enrollment::aggregate::aggregate;
use crate::enrollment::analyze::analyze;
use crate::enrollment::extract::extract_records;
use crate::utils::format::format_number;
use crate::utils::progress::ProgressBar;
use crate::utils::reader::open_file;
use crate::utils::render::write_report;
use anyhow::{Context, Result};
use std::io::{BufRead, BufReader};

pub fn run(dump_file: &str, color: bool) -> Result<()> {
    eprintln!("Processing: {}", dump_file);

    // Get file size for progress tracking
    let file_size = std::fs::metadata(dump_file).ok().map(|m| m.len() as usize);
    let progress = if let Some(size) = file_size {
        ProgressBar::new(size, "Reading")
    } else {
        ProgressBar::new_spinner("Reading")
    };

    let file = open_file(dump_file)?;
    let reader = BufReader::new(file);

    let mut text = String::new();
    let mut lines = 0;
    let mut bytes_read = 0;

    for line in reader.lines() {
        lines += 1;
        let line = line
            .with_context(|| format!("Failed to read line {} from {}", lines, dump_file))?;
        bytes_read += line.len() + 1; // +1 for newline

        if lines % 10_000 == 0 {
            if let Some(size) = file_size {
                progress.update(bytes_read.min(size)); // decompressed can exceed file size
            } else {
                progress.update(lines);
            }
        }

        text.push_str(&line);
        text.push('\n');
    }

    if let Some(size) = file_size {
        progress.update(size);
    }
    progress.finish_with_message(&format!("Read {} lines", format_number(lines)));

    let records = extract_records(&text)
        .with_context(|| format!("Malformed enrollment dump: {}", dump_file))?;
    eprintln!(
        "Extracted {} enrollment records\n",
        format_number(records.len())
    );

    let aggregates = aggregate(&records);
    let report = analyze(&aggregates);

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &report, color)?;

    Ok(())
}
