use staffdir_core::ValidationError;
use staffdir_core::model::EmployeeRecord;
use staffdir_core::roster::RosterStore;
use staffdir_core::types::EmployeeId;

fn record(id: &str, name: &str) -> EmployeeRecord {
    EmployeeRecord::new(EmployeeId::try_from(id).unwrap(), name)
}

#[test]
fn test_store_starts_empty_at_version_zero() {
    let store = RosterStore::new();
    let snapshot = store.snapshot();

    assert_eq!(snapshot.version(), 0);
    assert!(snapshot.is_empty());
}

#[test]
fn test_replace_bumps_version() {
    let mut store = RosterStore::new();

    store.replace(vec![record("1001", "Ana Ray")]).unwrap();
    assert_eq!(store.snapshot().version(), 1);

    store.replace(vec![record("1001", "Ana Ray")]).unwrap();
    assert_eq!(store.snapshot().version(), 2);
}

#[test]
fn test_replace_rejects_duplicate_id() {
    let mut store = RosterStore::new();
    store.replace(vec![record("1001", "Ana Ray")]).unwrap();

    let err = store
        .replace(vec![record("2002", "Bo Lin"), record("2002", "Bo Lin Jr")])
        .unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateId(_)));

    // Failed replace leaves the previous snapshot intact.
    let snapshot = store.snapshot();
    assert_eq!(snapshot.version(), 1);
    assert_eq!(snapshot.records()[0].name, "Ana Ray");
}

#[test]
fn test_snapshot_is_stable_across_replace() {
    let mut store = RosterStore::new();
    store.replace(vec![record("1001", "Ana Ray")]).unwrap();

    let before = store.snapshot();
    store.replace(vec![record("2002", "Bo Lin")]).unwrap();

    // Readers holding the old snapshot keep seeing the old roster.
    assert_eq!(before.records()[0].name, "Ana Ray");
    assert_eq!(store.snapshot().records()[0].name, "Bo Lin");
}
