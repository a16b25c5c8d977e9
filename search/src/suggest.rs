//! Live suggestion computation.

use crate::config::SearchConfig;
use crate::index::MatchIndex;
use staffdir_core::model::EmployeeRecord;
use staffdir_core::types::EmployeeId;

/// A live suggestion shown while typing.
///
/// Always a projection of an indexed record, never constructed
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: EmployeeId,
    pub name: String,
}

impl From<&EmployeeRecord> for Suggestion {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}

/// Projects index matches for `live_text` into a bounded suggestion list.
///
/// Empty or whitespace-only input returns an empty list without issuing a
/// query. Otherwise rank order is the index's rank order, truncated to
/// `suggestion_limit`.
pub(crate) fn compute(
    index: &MatchIndex,
    live_text: &str,
    config: &SearchConfig,
) -> Vec<Suggestion> {
    let trimmed = live_text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    index
        .query(trimmed)
        .into_iter()
        .take(config.suggestion_limit)
        .map(|hit| Suggestion::from(hit.record))
        .collect()
}
