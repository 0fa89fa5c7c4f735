//! Data types for documents, chunks, and retrieval results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Plain text already extracted from its source (PDF, HTML, email, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Identifier carried into chunk IDs.
    pub id: String,
    /// The text content of the document.
    pub text: String,
    /// Key-value metadata associated with the document.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// Create a document with no metadata.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), metadata: HashMap::new() }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the document has no text besides whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A contiguous run of paragraphs from a [`Document`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// `{document_id}_{index}`.
    pub id: String,
    /// Ordinal position in the chunk sequence, starting at 0.
    pub index: usize,
    /// The text content of the chunk.
    pub text: String,
    /// The ID of the parent [`Document`].
    pub document_id: String,
}

impl Chunk {
    /// Length of the chunk text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// The best-matching [`Chunk`] for a query, with its cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelevantChunk {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Cosine similarity in `[-1, 1]` (higher is more relevant).
    pub score: f32,
}
