//! Directory engine tying the roster store, match index, and resolver
//! together behind one synchronous facade.

use crate::config::SearchConfig;
use crate::index::MatchIndex;
use crate::resolve::{self, Destination};
use crate::suggest::{self, Suggestion};
use staffdir_core::Result;
use staffdir_core::model::EmployeeRecord;
use staffdir_core::roster::RosterStore;
use staffdir_core::source::RosterSource;

/// Employee-directory lookup engine.
///
/// Owns the roster store and a cached match index. The index is lazily
/// rebuilt whenever the roster snapshot version has moved on, so every
/// suggestion or commit computation reflects the most recently completed
/// roster replace; results from a stale index are never surfaced.
pub struct DirectoryEngine {
    store: RosterStore,
    index: MatchIndex,
    config: SearchConfig,
}

/// Create operations.
impl DirectoryEngine {
    /// Creates an engine with an empty roster ("not yet loaded").
    pub fn new(config: SearchConfig) -> Self {
        let store = RosterStore::new();
        let index = MatchIndex::build(store.snapshot(), &config);

        Self {
            store,
            index,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Roster operations.
impl DirectoryEngine {
    /// Replaces the roster wholesale; the index rebuilds on the next query.
    pub fn set_roster(&mut self, records: Vec<EmployeeRecord>) -> Result<()> {
        self.store.replace(records)?;
        Ok(())
    }

    /// Pulls a fresh roster from the data-fetch seam.
    ///
    /// On failure the current snapshot (and therefore suggestions) stays
    /// as-is and the error is returned for the caller to surface.
    pub fn refresh_from(&mut self, source: &dyn RosterSource) -> Result<()> {
        let records = source.fetch_roster()?;
        self.set_roster(records)
    }

    /// Version of the current roster snapshot.
    pub fn roster_version(&self) -> u64 {
        self.store.snapshot().version()
    }

    /// Rebuilds the cached index if the roster has changed since it was
    /// built. Compares snapshot versions only; an unchanged roster
    /// reference never triggers a rebuild.
    fn sync_index(&mut self) {
        let snapshot = self.store.snapshot();
        if !self.index.is_current(&snapshot) {
            self.index = MatchIndex::build(snapshot, &self.config);
        }
    }
}

/// Search operations.
impl DirectoryEngine {
    /// Computes the live suggestion list for the current input.
    ///
    /// Call on every keystroke. Empty or whitespace-only input yields an
    /// empty list without querying the index.
    pub fn suggestions(&mut self, live_text: &str) -> Vec<Suggestion> {
        self.sync_index();
        suggest::compute(&self.index, live_text, &self.config)
    }

    /// Resolves a committed search to its single routing decision, using
    /// suggestions computed against the current roster.
    pub fn commit(&mut self, committed: &str) -> Destination {
        let suggestions = self.suggestions(committed);
        resolve::resolve(committed, &suggestions, self.config.policy)
    }

    /// Optional auto-navigation probe, for callers that route as soon as
    /// typing narrows the roster to one employee.
    ///
    /// Returns a destination only when `auto_navigate_on_single_match` is
    /// set and exactly one suggestion remains; otherwise `None`, and the
    /// caller waits for an explicit commit.
    pub fn auto_destination(&mut self, live_text: &str) -> Option<Destination> {
        if !self.config.auto_navigate_on_single_match {
            return None;
        }

        match self.suggestions(live_text).as_slice() {
            [only] => Some(Destination::DetailView(only.id.to_string())),
            _ => None,
        }
    }
}
