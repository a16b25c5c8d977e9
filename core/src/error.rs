use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid employee id: {0}")]
    InvalidId(String),

    #[error("duplicate employee id: {0}")]
    DuplicateId(String),
}

/// Errors surfaced by the data-fetch collaborator.
///
/// "Record not found" is not an error; single-record lookups return
/// `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("roster unavailable: {0}")]
    Unavailable(String),

    #[error("malformed roster payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
