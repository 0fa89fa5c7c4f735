//! Error types for the `compliance-rag` crate.

use thiserror::Error;

/// Errors that can occur during retrieval.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RagError {
    /// A configuration value was rejected before any processing happened.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The document produced no chunks.
    #[error("Document is empty: nothing to retrieve")]
    EmptyDocument,

    /// The ranker was given no candidate vectors.
    #[error("No candidate vectors to rank")]
    EmptyCandidateSet,

    /// The vector space could not be built.
    #[error("Embedding failure ({strategy}): {message}")]
    EmbeddingFailure {
        /// The strategy that produced the error.
        strategy: String,
        /// A description of the failure.
        message: String,
    },

    /// Two vectors from different vector spaces were compared.
    #[error("Dimension mismatch: query has {expected} dimensions, candidate has {actual}")]
    DimensionMismatch {
        /// Dimensionality of the query vector.
        expected: usize,
        /// Dimensionality of the offending candidate vector.
        actual: usize,
    },
}

impl RagError {
    /// Returns `true` for conditions that mean "no relevant content" rather
    /// than a failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyDocument | Self::EmptyCandidateSet)
    }
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RagError>;
