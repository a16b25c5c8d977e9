//! Seam to the backend data-fetch collaborator.

use crate::error::FetchError;
use crate::model::EmployeeRecord;

/// Supplier of employee data.
///
/// Fetch failures surface as `FetchError` values; they must never turn
/// into panics inside the matching logic. A missing record is `Ok(None)`,
/// not an error.
pub trait RosterSource {
    /// Fetches the full roster.
    fn fetch_roster(&self) -> Result<Vec<EmployeeRecord>, FetchError>;

    /// Looks up a single record by identifier.
    fn fetch_record(&self, id: &str) -> Result<Option<EmployeeRecord>, FetchError>;
}

/// Parses a backend roster payload (JSON array of records).
pub fn roster_from_json(payload: &[u8]) -> Result<Vec<EmployeeRecord>, FetchError> {
    Ok(serde_json::from_slice(payload)?)
}
