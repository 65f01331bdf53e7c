//! Core enrollment-dump analysis pipeline.
//!
//! Three stages in dependency order:
//!
//! 1. [`extract`] - normalize raw dump text and pull out records
//! 2. [`aggregate`] - fold records into per-token and per-device groupings
//! 3. [`analyze`] - derive the three alert views as a structured report

pub mod aggregate;
pub mod analyze;
pub mod extract;
pub mod types;
