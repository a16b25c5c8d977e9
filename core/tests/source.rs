use staffdir_core::FetchError;
use staffdir_core::source::roster_from_json;

#[test]
fn test_parse_roster_payload() {
    let payload = br#"[
        {"id": "1001", "name": "Ana Ray", "profile": {"title": "Engineer"}},
        {"id": "00123", "name": "Bo Lin"}
    ]"#;

    let roster = roster_from_json(payload).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].id.as_str(), "1001");
    assert_eq!(roster[0].profile.title.as_deref(), Some("Engineer"));
    assert_eq!(roster[1].id.as_str(), "00123");
    assert_eq!(roster[1].profile.department, None);
}

#[test]
fn test_parse_rejects_malformed_payload() {
    let err = roster_from_json(b"not json").unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[test]
fn test_parse_rejects_empty_id() {
    // EmployeeId validation runs during deserialization.
    let payload = br#"[{"id": "  ", "name": "Nameless"}]"#;
    roster_from_json(payload).unwrap_err();
}
