//! Alert derivation over aggregated enrollment data.
//!
//! Three independent views are computed from the same [`Aggregates`]:
//!
//! - **Token changes** - devices that have presented more than one token
//! - **Stable pairings** - tokens confirmed as steady-state enrollments
//! - **Version drift** - (token, device) pairs seen at multiple app versions
//!
//! Each view becomes a titled [`Section`] of severity-tagged findings.
//! The analyzer performs no I/O and cannot fail; rendering is a
//! separate concern (see `utils::render`).

use super::aggregate::Aggregates;

/// Occurrence count treated as a confirmed steady-state enrollment.
/// Fixed domain rule, not a tunable.
const STABLE_OCCURRENCES: usize = 2;

/// Severity tag attached to each finding line.
///
/// `Ok` lines are affirmative ("nothing wrong here"); `Alert` lines
/// flag an anomaly. The tag only drives presentation; the finding text
/// is complete without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Alert,
}

/// One report line with its severity tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub text: String,
}

impl Finding {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            text: text.into(),
        }
    }

    fn alert(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Alert,
            text: text.into(),
        }
    }
}

/// One titled view of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub findings: Vec<Finding>,
}

/// The full analysis result: the three sections in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

/// Runs all three derivations over the aggregates.
pub fn analyze(aggregates: &Aggregates) -> Report {
    Report {
        sections: vec![
            token_change_alerts(aggregates),
            stable_pairings(aggregates),
            version_drift_alerts(aggregates),
        ],
    }
}

/// Devices that have presented more than one token.
///
/// A device's tokens are ordered lexicographically and reported as
/// adjacent-pair transitions, so a history of {a, b, c} reads "from a
/// to b, from b to c". Arrival order is not tracked through
/// aggregation; the pairs describe the sorted set, not chronology.
pub fn token_change_alerts(aggregates: &Aggregates) -> Section {
    let mut findings = Vec::new();

    for (device, tokens) in &aggregates.device_tokens {
        if tokens.len() < 2 {
            continue;
        }
        let ordered: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let changes: Vec<String> = ordered
            .windows(2)
            .map(|pair| format!("from {} to {}", pair[0], pair[1]))
            .collect();
        findings.push(Finding::alert(format!(
            "DeviceName: {} has had a token change {}",
            device,
            changes.join(", ")
        )));
    }

    if findings.is_empty() {
        findings.push(Finding::ok("No token changes detected for devices"));
    }

    Section {
        title: "Alert: Devices with token changes:",
        findings,
    }
}

/// Tokens confirmed as steady-state enrollments.
///
/// A token seen exactly twice, always for the same device at the same
/// app version, is a validated pairing. Any other occurrence count, or
/// inconsistent device/version sets, excludes the token from this view.
pub fn stable_pairings(aggregates: &Aggregates) -> Section {
    let mut findings = Vec::new();

    for (token, group) in &aggregates.token_groups {
        if group.occurrences != STABLE_OCCURRENCES
            || group.devices.len() != 1
            || group.versions.len() != 1
        {
            continue;
        }
        let (Some(device), Some(version)) =
            (group.devices.iter().next(), group.versions.iter().next())
        else {
            continue;
        };
        findings.push(Finding::ok(format!(
            "DeviceName: {}, Token: {}, App Version: {}",
            device, token, version
        )));
    }

    Section {
        title: "Tokens with exactly 2 occurrences and matching DeviceNames and App Versions:",
        findings,
    }
}

/// (token, device) pairs observed at more than one app version.
pub fn version_drift_alerts(aggregates: &Aggregates) -> Section {
    let mut findings = Vec::new();

    for (token, group) in &aggregates.token_groups {
        for (device, versions) in &group.device_versions {
            if versions.len() < 2 {
                continue;
            }
            let listed: Vec<&str> = versions.iter().map(String::as_str).collect();
            findings.push(Finding::alert(format!(
                "DeviceName: {}, Token: {} has versions: {}",
                device,
                token,
                listed.join(", ")
            )));
        }
    }

    if findings.is_empty() {
        findings.push(Finding::ok("No changes in device app versions"));
    }

    Section {
        title: "Alert: Devices with different app versions for the same token:",
        findings,
    }
}
