//! Error types for running the querying checks.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// At least one check did not hold
    #[error("{failed} of {total} checks failed")]
    ChecksFailed { failed : usize, total : usize },

    /// A group name that the suite does not define
    #[error("Unknown check group: {0}")]
    UnknownGroup(String),
}
