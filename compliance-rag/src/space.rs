//! The vector space a query and its candidate chunks are embedded into.
//!
//! [`VectorSpace`] is the closed set of embedding strategies. Each variant
//! turns one batch of texts into vectors that share a single coordinate
//! system; callers embed the query and the chunks in the same batch.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::EmbeddingStrategy;
use crate::embedding::TextEncoder;
use crate::error::{RagError, Result};
use crate::vectorizer::TfIdfVectorizer;

/// An embedding strategy, ready to embed batches of texts.
#[derive(Clone)]
pub enum VectorSpace {
    /// TF-IDF fitted jointly over every text in the batch.
    Statistical(TfIdfVectorizer),
    /// A pretrained encoder with a fixed output dimensionality.
    Dense(Arc<dyn TextEncoder>),
}

impl fmt::Debug for VectorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statistical(_) => f.write_str("VectorSpace::Statistical"),
            Self::Dense(encoder) => write!(f, "VectorSpace::Dense({})", encoder.name()),
        }
    }
}

impl VectorSpace {
    /// Build the vector space for `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmbeddingFailure`] if the dense strategy is selected
    /// but no encoder is supplied.
    pub fn for_strategy(
        strategy: EmbeddingStrategy,
        encoder: Option<Arc<dyn TextEncoder>>,
    ) -> Result<Self> {
        match (strategy, encoder) {
            (EmbeddingStrategy::Statistical, _) => Ok(Self::Statistical(TfIdfVectorizer::new())),
            (EmbeddingStrategy::Dense, Some(encoder)) => Ok(Self::Dense(encoder)),
            (EmbeddingStrategy::Dense, None) => Err(RagError::EmbeddingFailure {
                strategy: EmbeddingStrategy::Dense.to_string(),
                message: "no text encoder was provided".to_string(),
            }),
        }
    }

    /// The strategy this space implements.
    pub fn strategy(&self) -> EmbeddingStrategy {
        match self {
            Self::Statistical(_) => EmbeddingStrategy::Statistical,
            Self::Dense(_) => EmbeddingStrategy::Dense,
        }
    }

    /// Embed `texts` into one shared coordinate system.
    ///
    /// Returns one vector per text in input order; every vector has the same
    /// dimensionality. An empty batch yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmbeddingFailure`] if the encoder fails or returns
    /// the wrong number of vectors. Dense vectors must also match
    /// [`TextEncoder::dimensions`].
    pub fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = match self {
            Self::Statistical(vectorizer) => vectorizer.fit_transform(texts),
            Self::Dense(encoder) => encoder.encode(texts).map_err(|e| {
                error!(encoder = encoder.name(), error = %e, "encoding failed");
                match e {
                    failure @ RagError::EmbeddingFailure { .. } => failure,
                    other => self.failure(other.to_string()),
                }
            })?,
        };

        if vectors.len() != texts.len() {
            return Err(self.failure(format!(
                "expected {} vectors, got {}",
                texts.len(),
                vectors.len()
            )));
        }

        // A fitted vocabulary has no width until it sees the texts.
        let dimensions = match self {
            Self::Statistical(_) => vectors[0].len(),
            Self::Dense(encoder) => encoder.dimensions(),
        };
        if let Some(bad) = vectors.iter().position(|v| v.len() != dimensions) {
            return Err(self.failure(format!(
                "vector {bad} has {} dimensions, expected {dimensions}",
                vectors[bad].len()
            )));
        }

        debug!(
            strategy = %self.strategy(),
            count = vectors.len(),
            dimensions,
            "embedded texts"
        );
        Ok(vectors)
    }

    fn failure(&self, message: String) -> RagError {
        RagError::EmbeddingFailure { strategy: self.strategy().to_string(), message }
    }
}
