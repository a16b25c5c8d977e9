//! Versioned roster snapshot and store.
//!
//! The store has exactly one writer (the fetch collaborator) and many
//! readers (index, suggestion engine), so snapshots are shared via `Arc`
//! with no locking. Consumers decide staleness by comparing `version`,
//! never by deep equality.

use crate::error::ValidationError;
use crate::model::EmployeeRecord;
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable roster state at a point in time.
#[derive(Debug)]
pub struct RosterSnapshot {
    version: u64,
    records: Vec<EmployeeRecord>,
}

impl RosterSnapshot {
    fn empty() -> Self {
        Self {
            version: 0,
            records: Vec::new(),
        }
    }

    /// Monotonically increasing; bumped on every store replace.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Holds the current roster snapshot.
///
/// Starts empty at version 0 ("roster not yet loaded"). A failed refresh
/// leaves the current snapshot untouched.
#[derive(Debug)]
pub struct RosterStore {
    current: Arc<RosterSnapshot>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RosterSnapshot::empty()),
        }
    }

    /// Replaces the roster wholesale, enforcing identifier uniqueness.
    ///
    /// On success the snapshot version is bumped; on a duplicate id the
    /// store is left unchanged.
    pub fn replace(&mut self, records: Vec<EmployeeRecord>) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.clone()) {
                return Err(ValidationError::DuplicateId(record.id.to_string()));
            }
        }

        let version = self.current.version + 1;
        log::debug!("roster replaced: {} records, version {}", records.len(), version);
        self.current = Arc::new(RosterSnapshot { version, records });
        Ok(())
    }

    /// Returns the current snapshot for lock-free reading.
    pub fn snapshot(&self) -> Arc<RosterSnapshot> {
        Arc::clone(&self.current)
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
