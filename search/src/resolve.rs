//! Commit-time navigation resolution.
//!
//! Pure decision logic over already-available in-memory data: it cannot
//! fail and always yields exactly one `Destination`. Whether the
//! destination resolves to a real record is the detail view's problem.

use crate::suggest::Suggestion;
use serde::{Deserialize, Serialize};

/// The single routing decision produced for a committed search.
///
/// Identifiers are routed as opaque strings; rule 3 may emit one that no
/// record carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Committed text was empty after trimming; no navigation occurs.
    NoOp,
    /// Confident single-employee hit.
    DetailView(String),
    /// Ambiguous or multi-match input; the listing view re-filters by the
    /// same text.
    FilteredListing(String),
}

/// Routing policy variants.
///
/// Two historical forms of this logic diverged; both are kept as an
/// explicit deployment choice. `Strict` is the standardized default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePolicy {
    /// A lone suggestion routes to its detail view only when the input is
    /// also an exact textual match (identifier case-sensitive, name
    /// case-insensitive).
    #[default]
    Strict,
    /// Any suggestion whose identifier equals the input, or a lone
    /// suggestion of any kind, routes straight to its detail view.
    Loose,
}

/// Resolves a committed search string against the current suggestions.
///
/// Rules are evaluated in order; the first that applies wins:
/// 1. Empty after trim: `NoOp`.
/// 2. Policy-dependent exact/single-suggestion detail routing.
/// 3. Digits-only input: `DetailView(input)`, regardless of suggestions.
///    Numeric identifier lookup beats ambiguity, and the identifier may
///    exist even when fuzzy matching never surfaced it.
/// 4. Everything else: `FilteredListing(input)`; zero suggestions is a
///    valid, displayable listing state, not an error.
pub fn resolve(committed: &str, suggestions: &[Suggestion], policy: RoutePolicy) -> Destination {
    let trimmed = committed.trim();
    if trimmed.is_empty() {
        return Destination::NoOp;
    }

    match policy {
        RoutePolicy::Strict => {
            if let [only] = suggestions
                && is_exact_match(trimmed, only)
            {
                return Destination::DetailView(only.id.to_string());
            }
        }
        RoutePolicy::Loose => {
            if let Some(hit) = suggestions.iter().find(|s| s.id.as_str() == trimmed) {
                return Destination::DetailView(hit.id.to_string());
            }
            if let [only] = suggestions {
                return Destination::DetailView(only.id.to_string());
            }
        }
    }

    if is_digits_only(trimmed) {
        return Destination::DetailView(trimmed.to_string());
    }

    Destination::FilteredListing(trimmed.to_string())
}

/// A single fuzzy hit that is also an exact textual match is unambiguous
/// even though it arrived via approximate matching.
fn is_exact_match(trimmed: &str, suggestion: &Suggestion) -> bool {
    trimmed == suggestion.id.as_str()
        || trimmed.to_lowercase() == suggestion.name.to_lowercase()
}

fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
