//! Command implementations.
//!
//! - [`enrollment_audit`] - the audit pipeline: read a dump, extract
//!   records, aggregate, and report the three alert classes

pub mod enrollment_audit;
