//! Catalog error types

use thiserror::Error;

/// Errors raised while building a [`CandidateList`](super::candidate::CandidateList).
///
/// Widget transitions never fail; these only surface when a catalog is
/// assembled from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two candidates share the same id
    #[error("Duplicate candidate id '{id}' at indices {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// Candidate id is empty
    #[error("Candidate at index {index} has an empty id")]
    EmptyId { index: usize },

    /// Candidate label is empty or whitespace
    #[error("Candidate '{id}' has an empty label")]
    EmptyLabel { id: String },
}
