//! Retrieval orchestrator.
//!
//! The [`Retriever`] finds the single chunk of a document that best matches a
//! query by composing a [`ParagraphChunker`], a [`VectorSpace`] and the
//! cosine [`rank`]er. The query and the chunks are always embedded in one
//! batch, so they share a vector space.
//!
//! # Example
//!
//! ```rust,ignore
//! use compliance_rag::{Document, RetrievalConfig, Retriever};
//!
//! let retriever = Retriever::builder()
//!     .config(RetrievalConfig::default())
//!     .build()?;
//!
//! let guide = Document::new("guide", guideline_text);
//! if let Some(hit) = retriever.retrieve("Can we promise returns?", &guide)? {
//!     println!("{:.3}: {}", hit.score, hit.chunk.text);
//! }
//! ```

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::chunking::{Chunker, ParagraphChunker};
use crate::config::RetrievalConfig;
use crate::document::{Chunk, Document, RelevantChunk};
use crate::embedding::TextEncoder;
use crate::error::{RagError, Result};
use crate::ranker::rank;
use crate::space::VectorSpace;

/// Retrieves the most relevant chunk of a document for a query.
///
/// Holds no mutable state; one instance can serve concurrent calls from
/// several threads. Construct one via [`Retriever::builder()`].
#[derive(Debug, Clone)]
pub struct Retriever {
    config: RetrievalConfig,
    chunker: ParagraphChunker,
    space: VectorSpace,
}

impl Retriever {
    /// Create a new [`RetrieverBuilder`].
    pub fn builder() -> RetrieverBuilder {
        RetrieverBuilder::default()
    }

    /// Return a reference to the retriever configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Return a reference to the vector space.
    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    /// Split `document` into the chunks that [`retrieve`](Self::retrieve)
    /// ranks.
    pub fn chunk(&self, document: &Document) -> Vec<Chunk> {
        self.chunker.chunk(document)
    }

    /// Find the chunk of `document` most similar to `query`.
    ///
    /// Returns `Ok(None)` when there is nothing to retrieve (empty document).
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmbeddingFailure`] if the vector space cannot be
    /// built and [`RagError::DimensionMismatch`] if the embedded vectors do not
    /// share one space. Neither is retried.
    pub fn retrieve(&self, query: &str, document: &Document) -> Result<Option<RelevantChunk>> {
        match self.try_retrieve(query, document) {
            Ok(hit) => Ok(Some(hit)),
            Err(e) if e.is_recoverable() => {
                info!(document.id = %document.id, reason = %e, "no relevant content");
                Ok(None)
            }
            Err(e) => {
                error!(document.id = %document.id, error = %e, "retrieval failed");
                Err(e)
            }
        }
    }

    fn try_retrieve(&self, query: &str, document: &Document) -> Result<RelevantChunk> {
        // 1. Chunk the document
        let mut chunks = self.chunker.chunk(document);
        if chunks.is_empty() {
            return Err(RagError::EmptyDocument);
        }
        debug!(document.id = %document.id, chunk_count = chunks.len(), "chunked document");

        // 2. Embed the query (index 0) together with every chunk
        let texts: Vec<&str> =
            std::iter::once(query).chain(chunks.iter().map(|c| c.text.as_str())).collect();
        let vectors = self.space.embed(&texts)?;
        let (query_vector, chunk_vectors) =
            vectors.split_first().ok_or(RagError::EmptyCandidateSet)?;

        // 3. Rank
        let best = rank(query_vector, chunk_vectors)?;

        info!(
            document.id = %document.id,
            strategy = %self.space.strategy(),
            chunk_index = best.index,
            score = best.score,
            "retrieved relevant chunk"
        );

        let chunk = chunks.swap_remove(best.index);
        Ok(RelevantChunk { chunk, score: best.score })
    }
}

/// Builder for constructing a [`Retriever`].
///
/// The encoder is required only for the dense strategy.
///
/// # Example
///
/// ```rust,ignore
/// let retriever = Retriever::builder()
///     .config(RetrievalConfig::builder().strategy(EmbeddingStrategy::Dense).build()?)
///     .encoder(FastEmbedEncoder::shared()?)
///     .build()?;
/// ```
#[derive(Default)]
pub struct RetrieverBuilder {
    config: Option<RetrievalConfig>,
    encoder: Option<Arc<dyn TextEncoder>>,
}

impl RetrieverBuilder {
    /// Set the retriever configuration. Defaults to [`RetrievalConfig::default()`].
    pub fn config(mut self, config: RetrievalConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the pretrained encoder used by the dense strategy.
    pub fn encoder(mut self, encoder: Arc<dyn TextEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Build the [`Retriever`].
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfiguration`] if the configuration is
    /// invalid, and [`RagError::EmbeddingFailure`] if the dense strategy is
    /// selected without an encoder.
    pub fn build(self) -> Result<Retriever> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        let chunker = ParagraphChunker::new(config.max_chunk_size)?;
        let space = VectorSpace::for_strategy(config.strategy, self.encoder)?;
        Ok(Retriever { config, chunker, space })
    }
}
