//! Data structures for MFA enrollment records and their derived groupings.
//!
//! A dump is reduced to a flat sequence of [`Record`]s by the extractor,
//! then folded into per-token [`TokenGroup`]s by the aggregation pass.

use std::collections::{BTreeMap, BTreeSet};

/// A single enrollment event extracted from a dump.
///
/// Ties a device name to the security token it presented and the
/// authenticator app version it was running at the time. Records carry
/// no timestamp; only their order of appearance in the dump is known,
/// and that order is not tracked past extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub device_name: String,
    pub device_token: String,
    pub app_version: String,
}

impl Record {
    pub fn new(
        device_name: impl Into<String>,
        device_token: impl Into<String>,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            device_name: device_name.into(),
            device_token: device_token.into(),
            app_version: app_version.into(),
        }
    }
}

/// Everything observed for one token across the whole dump.
///
/// Ordered sets keep report output deterministic without a separate
/// sort step at print time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenGroup {
    /// Number of enrollment events seen for this token
    pub occurrences: usize,
    /// Distinct device names seen with this token
    pub devices: BTreeSet<String>,
    /// Distinct app versions seen with this token
    pub versions: BTreeSet<String>,
    /// App versions broken down per device
    pub device_versions: BTreeMap<String, BTreeSet<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Phone1", "T1", "1.0");
        assert_eq!(record.device_name, "Phone1");
        assert_eq!(record.device_token, "T1");
        assert_eq!(record.app_version, "1.0");
    }

    #[test]
    fn test_token_group_default_is_empty() {
        let group = TokenGroup::default();
        assert_eq!(group.occurrences, 0);
        assert!(group.devices.is_empty());
        assert!(group.versions.is_empty());
        assert!(group.device_versions.is_empty());
    }
}
