//! Grouping pass over extracted enrollment records.
//!
//! One linear pass folds the flat record sequence into the structures
//! the analyzer works from: per-token groupings and per-device token
//! histories. Aggregation is total; an empty record sequence yields
//! empty maps and the analyzer reports "no findings" downstream.

use super::types::{Record, TokenGroup};
use std::collections::{BTreeMap, BTreeSet};

/// All groupings derived from one pass over the records.
///
/// Built once per run and handed to the analyzer as-is; nothing here is
/// mutated after the pass completes.
#[derive(Debug, Default)]
pub struct Aggregates {
    /// Occurrence counts and device/version groupings per token
    pub token_groups: BTreeMap<String, TokenGroup>,
    /// Every token each device has ever presented
    pub device_tokens: BTreeMap<String, BTreeSet<String>>,
}

/// Folds records into per-token and per-device groupings.
pub fn aggregate(records: &[Record]) -> Aggregates {
    let mut aggregates = Aggregates::default();

    for record in records {
        let group = aggregates
            .token_groups
            .entry(record.device_token.clone())
            .or_default();
        group.occurrences += 1;
        group.devices.insert(record.device_name.clone());
        group.versions.insert(record.app_version.clone());
        group
            .device_versions
            .entry(record.device_name.clone())
            .or_default()
            .insert(record.app_version.clone());

        aggregates
            .device_tokens
            .entry(record.device_name.clone())
            .or_default()
            .insert(record.device_token.clone());
    }

    aggregates
}
