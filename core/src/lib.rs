//! Staffdir core: employee data model and roster state.
//!
//! Holds the validated employee record types, the versioned roster
//! snapshot/store, and the seam to the backend roster fetch. All matching
//! and routing logic lives in `staffdir_search`.

pub mod error;
pub mod model;
pub mod roster;
pub mod source;
pub mod types;

pub use error::{Error, FetchError, Result, ValidationError};
