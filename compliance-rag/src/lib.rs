//! # compliance-rag
//!
//! Finds the one excerpt of a compliance guideline document that is most
//! relevant to a question or a piece of marketing copy, so that an external
//! language model can reason over it.
//!
//! ## Overview
//!
//! - [`ParagraphChunker`] splits plain text into bounded chunks on line breaks.
//! - [`VectorSpace`] embeds texts with either TF-IDF ([`TfIdfVectorizer`]) or
//!   a pretrained [`TextEncoder`].
//! - [`rank`] picks the chunk with the highest cosine similarity.
//! - [`Retriever`] ties them together, embedding the query and the chunks in
//!   a single shared vector space.
//!
//! ## Features
//!
//! - `fastembed` — [`FastEmbedEncoder`](fastembed::FastEmbedEncoder), a local
//!   `all-MiniLM-L6-v2` encoder for the dense strategy.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use compliance_rag::{Document, Retriever};
//!
//! let retriever = Retriever::builder().build()?;
//! let guide = Document::new("guide", "Mutual funds carry risk.\nInvest wisely.");
//! let hit = retriever.retrieve("risk", &guide)?;
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod ranker;
pub mod retriever;
pub mod space;
pub mod vectorizer;

#[cfg(feature = "fastembed")]
pub mod fastembed;

pub use chunking::{Chunker, ParagraphChunker};
pub use config::{
    DEFAULT_MAX_CHUNK_SIZE, EmbeddingStrategy, RetrievalConfig, RetrievalConfigBuilder,
};
pub use document::{Chunk, Document, RelevantChunk};
pub use embedding::TextEncoder;
pub use error::{RagError, Result};
pub use ranker::{Ranked, cosine_similarity, rank};
pub use retriever::{Retriever, RetrieverBuilder};
pub use space::VectorSpace;
pub use vectorizer::{FittedTfIdf, TfIdfVectorizer, tokenize};
