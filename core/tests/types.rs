use staffdir_core::types::EmployeeId;
use staffdir_core::types::id::MAX_ID_LENGTH;

#[test]
fn test_id_normal_usage() {
    let id = EmployeeId::try_from("1001").unwrap();
    assert_eq!(id.as_str(), "1001");
}

#[test]
fn test_id_trims_whitespace() {
    let id = EmployeeId::try_from("  1001  ").unwrap();
    assert_eq!(id.as_str(), "1001");
}

#[test]
fn test_id_preserves_leading_zeros() {
    let id = EmployeeId::try_from("00123").unwrap();
    assert_eq!(id.as_str(), "00123");
}

#[test]
fn test_id_rejects_empty_string() {
    EmployeeId::try_from("").unwrap_err();
}

#[test]
fn test_id_rejects_whitespace_string() {
    EmployeeId::try_from("   ").unwrap_err();
}

#[test]
fn test_id_rejects_too_long_string() {
    let long = "9".repeat(MAX_ID_LENGTH + 1);
    EmployeeId::try_from(long.as_str()).unwrap_err();
}
