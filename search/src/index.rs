//! Fuzzy match index over a roster snapshot.

use crate::config::{CaseMatching, SearchConfig};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32String};
use staffdir_core::model::EmployeeRecord;
use staffdir_core::roster::RosterSnapshot;
use std::sync::Arc;

/// A single ranked match from a query.
#[derive(Debug)]
pub struct MatchHit<'a> {
    pub record: &'a EmployeeRecord,
    pub score: u32,
}

/// Approximate-text index over a roster snapshot.
///
/// A pure function of the snapshot it was built from: build precomputes
/// UTF-32 haystacks for the name and identifier columns, queries never
/// mutate. Whether a rebuild is due is decided by snapshot version
/// (`is_current`), never by comparing roster contents.
pub struct MatchIndex {
    snapshot: Arc<RosterSnapshot>,
    /// Per-record haystack columns, parallel to `snapshot.records()`.
    columns: Vec<HaystackColumns>,
    case_matching: CaseMatching,
    unicode_normalization: bool,
}

struct HaystackColumns {
    name: Utf32String,
    id: Utf32String,
}

impl MatchIndex {
    /// Builds an index over `snapshot`. An empty roster yields an empty,
    /// valid index; there is no failure mode.
    pub fn build(snapshot: Arc<RosterSnapshot>, config: &SearchConfig) -> Self {
        let columns = snapshot
            .records()
            .iter()
            .map(|record| HaystackColumns {
                name: Utf32String::from(record.name.as_str()),
                id: Utf32String::from(record.id.as_str()),
            })
            .collect();

        log::debug!(
            "match index built: {} records, roster version {}",
            snapshot.len(),
            snapshot.version()
        );

        Self {
            snapshot,
            columns,
            case_matching: config.case_matching,
            unicode_normalization: config.unicode_normalization,
        }
    }

    /// Version of the roster snapshot this index was built from.
    pub fn version(&self) -> u64 {
        self.snapshot.version()
    }

    /// Whether this index is still derived from the given snapshot.
    pub fn is_current(&self, snapshot: &RosterSnapshot) -> bool {
        self.snapshot.version() == snapshot.version()
    }

    /// Queries the index, best matches first.
    ///
    /// A record matches if the pattern matches its name or its identifier
    /// anywhere within the field; the record's rank uses the better of the
    /// two column scores. Ties break by roster position, so re-running the
    /// same query against the same index is deterministic.
    ///
    /// Callers are expected to short-circuit empty/whitespace input
    /// upstream rather than issuing it here.
    pub fn query(&self, text: &str) -> Vec<MatchHit<'_>> {
        let case_matching = match self.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if self.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let pattern = Pattern::parse(text, case_matching, normalization);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);

        let mut scored: Vec<(usize, u32)> = Vec::new();
        for (pos, columns) in self.columns.iter().enumerate() {
            let name_score = pattern.score(columns.name.slice(..), &mut matcher);
            let id_score = pattern.score(columns.id.slice(..), &mut matcher);

            if let Some(score) = name_score.max(id_score) {
                scored.push((pos, score));
            }
        }

        scored.sort_by(|(a_pos, a_score), (b_pos, b_score)| {
            b_score.cmp(a_score).then(a_pos.cmp(b_pos))
        });

        scored
            .into_iter()
            .map(|(pos, score)| MatchHit {
                record: &self.snapshot.records()[pos],
                score,
            })
            .collect()
    }
}
