//! Extraction tests over realistic dump shapes.

use mfa_audit_tools::enrollment::extract::extract_records;
use mfa_audit_tools::enrollment::types::Record;

#[test]
fn test_extract_escaped_dump() {
    // Dump captured as an escaped JSON blob
    let raw = r#"{\"DeviceName\":\"Alice iPhone\",\"DeviceToken\":\"tok-aaa111\",\"PhoneAppVersion\":\"4.12.0\"}"#;
    let records = extract_records(raw).unwrap();

    assert_eq!(
        records,
        vec![Record::new("Alice iPhone", "tok-aaa111", "4.12.0")]
    );
}

#[test]
fn test_extract_record_split_across_lines() {
    let raw = "\"DeviceName\":\"Alice iPhone\",\n\"DeviceToken\":\"tok-aaa111\",\n\"PhoneAppVersion\":\"4.12.0\"";
    let records = extract_records(raw).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].device_name, "Alice iPhone");
}

#[test]
fn test_extract_multiple_records() {
    let raw = concat!(
        r#"{\"DeviceName\":\"Alice iPhone\",\"DeviceToken\":\"tok-aaa111\",\"PhoneAppVersion\":\"4.12.0\"},"#,
        "\n",
        r#"{\"DeviceName\":\"Bob Pixel\",\"DeviceToken\":\"tok-bbb222\",\"PhoneAppVersion\":\"4.11.9\"}"#,
    );
    let records = extract_records(raw).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], Record::new("Alice iPhone", "tok-aaa111", "4.12.0"));
    assert_eq!(records[1], Record::new("Bob Pixel", "tok-bbb222", "4.11.9"));
}

#[test]
fn test_extract_count_matches_each_field() {
    let raw = (0..5)
        .map(|i| {
            format!(
                r#"{{"DeviceName":"Phone{}","DeviceToken":"tok-{}","PhoneAppVersion":"1.0"}}"#,
                i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let records = extract_records(&raw).unwrap();

    assert_eq!(records.len(), 5);
}

#[test]
fn test_extract_mismatch_aborts() {
    // 5 DeviceName matches, 4 DeviceToken matches
    let mut raw = (0..4)
        .map(|i| {
            format!(
                r#"{{"DeviceName":"Phone{}","DeviceToken":"tok-{}","PhoneAppVersion":"1.0"}}"#,
                i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    raw.push_str(r#"{"DeviceName":"Phone4","PhoneAppVersion":"1.0"}"#);

    let err = extract_records(&raw).unwrap_err();
    assert_eq!(err.device_names, 5);
    assert_eq!(err.device_tokens, 4);
    assert_eq!(err.app_versions, 5);
}

#[test]
fn test_extract_is_idempotent() {
    let raw = r#"{"DeviceName":"Phone1","DeviceToken":"T1","PhoneAppVersion":"1.0"}"#;
    assert_eq!(extract_records(raw).unwrap(), extract_records(raw).unwrap());
}
