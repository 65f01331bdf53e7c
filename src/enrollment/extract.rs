//! Field extraction from raw enrollment dumps.
//!
//! Dumps are captured from an escaped serialization of the enrollment
//! store and arrive as loosely structured text: quoted key/value pairs
//! buried in backslash escapes and arbitrary line wrapping. Extraction
//! normalizes the text, scans for the three field patterns
//! independently, and zips the matches positionally into records.
//!
//! The three match sequences must have the same length. A disagreement
//! means the dump was truncated or mangled, and there is no safe way to
//! re-pair the remaining fields, so extraction aborts rather than
//! zipping short.

use super::types::Record;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Key strings as they appear in the upstream serialization.
const DEVICE_NAME_KEY: &str = "DeviceName";
const DEVICE_TOKEN_KEY: &str = "DeviceToken";
const APP_VERSION_KEY: &str = "PhoneAppVersion";

/// The three field match counts disagree.
///
/// Raised before any aggregation happens; the run aborts with the
/// counts so the operator can see which field fell short.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "mismatched field counts in enrollment dump: \
     {device_names} DeviceName, {device_tokens} DeviceToken, {app_versions} PhoneAppVersion"
)]
pub struct LengthMismatchError {
    pub device_names: usize,
    pub device_tokens: usize,
    pub app_versions: usize,
}

fn field_pattern(key: &str) -> Regex {
    // "<Key>":"<value>" with the value being any run of non-quote characters
    Regex::new(&format!("\"{}\":\"([^\"]+)\"", key)).expect("field pattern compiles")
}

fn patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            field_pattern(DEVICE_NAME_KEY),
            field_pattern(DEVICE_TOKEN_KEY),
            field_pattern(APP_VERSION_KEY),
        ]
    })
}

/// Strips serialization artifacts so the field patterns can match.
///
/// Every backslash is removed (escape artifacts of the capture format),
/// as is every newline, so a key/value pair split across lines or
/// wrapped in `\"` escapes becomes a plain `"Key":"value"` run.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| *c != '\\' && *c != '\n').collect()
}

/// Extracts enrollment records from raw dump text.
///
/// Normalizes, matches the three field patterns independently in order
/// of appearance, verifies the match counts agree, and zips the i-th
/// matches of each field into one [`Record`].
pub fn extract_records(raw: &str) -> Result<Vec<Record>, LengthMismatchError> {
    let text = normalize(raw);
    let [names_re, tokens_re, versions_re] = patterns();

    let capture = |re: &Regex| -> Vec<String> {
        re.captures_iter(&text).map(|c| c[1].to_string()).collect()
    };

    let names = capture(names_re);
    let tokens = capture(tokens_re);
    let versions = capture(versions_re);

    if names.len() != tokens.len() || names.len() != versions.len() {
        return Err(LengthMismatchError {
            device_names: names.len(),
            device_tokens: tokens.len(),
            app_versions: versions.len(),
        });
    }

    Ok(names
        .into_iter()
        .zip(tokens)
        .zip(versions)
        .map(|((device_name, device_token), app_version)| Record {
            device_name,
            device_token,
            app_version,
        })
        .collect())
}
