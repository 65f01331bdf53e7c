//! # MFA Audit Tools
//!
//! Command-line tool for auditing dumps of mobile-auth (MFA) device
//! enrollment records.
//!
//! ## Overview
//!
//! An enrollment dump is loosely structured text captured from an
//! escaped serialization of the enrollment store. Each record ties a
//! device name to the security token it presented and the authenticator
//! app version it was running. This crate extracts those records and
//! reports three anomaly classes:
//!
//! - **Token changes** - devices that have presented more than one token
//! - **Stable pairings** - tokens seen exactly twice, always for the
//!   same device at the same app version (validated enrollments)
//! - **Version drift** - the same (token, device) pair observed at more
//!   than one app version
//!
//! ## Example Usage
//!
//! ```bash
//! # Audit the default dump file (data.txt)
//! mfa-audit
//!
//! # Audit a specific dump; .gz and .zst files are decompressed directly
//! mfa-audit enrollments.txt
//! mfa-audit enrollments-2026-08.txt.gz
//!
//! # Plain output for logs or CI
//! mfa-audit enrollments.txt --no-color
//! ```
//!
//! ## Architecture
//!
//! - [`enrollment`] - the core pipeline: extraction, aggregation, and
//!   alert derivation
//! - [`commands`] - the audit command wiring the pipeline together
//! - [`utils`] - shared helpers (file reading, progress, formatting,
//!   report rendering)
//!
//! The pipeline is fully synchronous and single-threaded: one linear
//! pass per stage over a single dump file. A dump whose extracted field
//! counts disagree aborts the run before any aggregation happens.

pub mod commands;
pub mod enrollment;
pub mod utils;
