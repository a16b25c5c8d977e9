//! Staffdir fuzzy lookup library.
//!
//! Turns free-text input over an employee roster into ranked live
//! suggestions and a single deterministic routing decision on commit.
//!
//! # Design
//!
//! - The match index is a pure function of a roster snapshot: build takes
//!   a snapshot, queries never mutate. Rebuild is decided by comparing
//!   snapshot versions, not roster contents.
//! - Suggestion computation short-circuits empty/whitespace input without
//!   touching the index, so "no query performed" stays distinct from
//!   "query performed, zero results".
//! - Navigation is an explicit, pure decision at commit time
//!   (`resolve`), never a side effect of suggestions changing. The
//!   opt-in auto-navigate hook is a separate, explicit call.
//!
//! # Synchronous API
//!
//! - `DirectoryEngine::suggestions()`: recompute on every keystroke
//! - `DirectoryEngine::commit()`: resolve a submitted search to a `Destination`
//! - `DirectoryEngine::refresh_from()`: pull a new roster from the backend seam

mod config;
mod engine;
mod index;
mod resolve;
mod suggest;

pub use config::{CaseMatching, ConfigError, SearchConfig};
pub use engine::DirectoryEngine;
pub use index::{MatchHit, MatchIndex};
pub use resolve::{Destination, RoutePolicy, resolve};
pub use suggest::Suggestion;
