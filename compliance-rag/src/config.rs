//! Configuration for the retriever.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RagError, Result};

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// How texts are turned into vectors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingStrategy {
    /// TF-IDF weighting fitted jointly over the query and the chunks.
    #[default]
    Statistical,
    /// A pretrained text encoder with a fixed output dimensionality.
    Dense,
}

impl EmbeddingStrategy {
    /// The lowercase name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statistical => "statistical",
            Self::Dense => "dense",
        }
    }
}

impl fmt::Display for EmbeddingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbeddingStrategy {
    type Err = RagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "statistical" | "tfidf" | "tf-idf" => Ok(Self::Statistical),
            "dense" => Ok(Self::Dense),
            other => Err(RagError::InvalidConfiguration(format!(
                "unknown embedding strategy '{other}' (expected 'statistical' or 'dense')"
            ))),
        }
    }
}

/// Configuration parameters for a [`Retriever`](crate::Retriever).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum chunk size in characters.
    pub max_chunk_size: usize,
    /// Vector space strategy.
    pub strategy: EmbeddingStrategy,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { max_chunk_size: DEFAULT_MAX_CHUNK_SIZE, strategy: EmbeddingStrategy::default() }
    }
}

impl RetrievalConfig {
    /// Create a new builder for constructing a [`RetrievalConfig`].
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }

    /// Check that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfiguration`] if `max_chunk_size == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(RagError::InvalidConfiguration(
                "max_chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for constructing a validated [`RetrievalConfig`].
#[derive(Debug, Clone, Default)]
pub struct RetrievalConfigBuilder {
    config: RetrievalConfig,
}

impl RetrievalConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn max_chunk_size(mut self, size: usize) -> Self {
        self.config.max_chunk_size = size;
        self
    }

    /// Set the vector space strategy.
    pub fn strategy(mut self, strategy: EmbeddingStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Build the [`RetrievalConfig`], validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfiguration`] if `max_chunk_size == 0`.
    pub fn build(self) -> Result<RetrievalConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
