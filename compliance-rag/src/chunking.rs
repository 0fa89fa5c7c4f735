//! Document chunking.
//!
//! This module provides the [`Chunker`] trait and [`ParagraphChunker`], which
//! packs whole lines into chunks bounded by a character budget.

use crate::document::{Chunk, Document};
use crate::error::{RagError, Result};

/// A strategy for splitting documents into chunks.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// Returns an empty `Vec` if the document has no text besides whitespace.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Packs newline-separated paragraphs into chunks of at most `max_chunk_size`
/// characters.
///
/// Boundaries only fall on line breaks, so joining the chunks with `"\n"`
/// gives back the original text. A single paragraph longer than the budget
/// becomes a chunk on its own and is never split or truncated. Blank lines
/// never form a chunk of their own; they travel with the paragraph that
/// follows them, or with the last chunk when they end the document.
///
/// Chunk IDs are generated as `{document_id}_{chunk_index}`.
///
/// # Example
///
/// ```rust,ignore
/// use compliance_rag::{Chunker, Document, ParagraphChunker};
///
/// let chunker = ParagraphChunker::new(1000)?;
/// let chunks = chunker.chunk(&Document::new("guide", text));
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphChunker {
    max_chunk_size: usize,
}

impl ParagraphChunker {
    /// Create a new `ParagraphChunker`.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidConfiguration`] if `max_chunk_size` is zero.
    pub fn new(max_chunk_size: usize) -> Result<Self> {
        if max_chunk_size == 0 {
            return Err(RagError::InvalidConfiguration(
                "max_chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(Self { max_chunk_size })
    }

    /// The character budget per chunk.
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }
}

/// Paragraphs accumulated for the chunk being built.
struct Buffer {
    text: String,
    len: usize,
    /// At least one paragraph is not blank.
    has_content: bool,
}

impl Buffer {
    fn new(paragraph: &str, len: usize, is_content: bool) -> Self {
        Self { text: paragraph.to_string(), len, has_content: is_content }
    }
}

/// Pack paragraphs into buffers, closing a buffer when the next paragraph
/// (plus its joining newline) would overflow `max_chunk_size`.
///
/// A buffer holding only blank lines is never closed: it grows into the next
/// paragraph, or is appended to the last chunk at the end of the text.
fn pack_paragraphs(text: &str, max_chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer: Option<Buffer> = None;

    for paragraph in text.split('\n') {
        let paragraph_len = paragraph.chars().count();
        let is_content = !paragraph.trim().is_empty();

        if let Some(current) = buffer.as_mut() {
            if current.has_content && current.len + 1 + paragraph_len > max_chunk_size {
                let full =
                    std::mem::replace(current, Buffer::new(paragraph, paragraph_len, is_content));
                chunks.push(full.text);
            } else {
                current.text.push('\n');
                current.text.push_str(paragraph);
                current.len += 1 + paragraph_len;
                current.has_content |= is_content;
            }
        } else {
            buffer = Some(Buffer::new(paragraph, paragraph_len, is_content));
        }
    }

    if let Some(rest) = buffer {
        if rest.has_content || chunks.is_empty() {
            chunks.push(rest.text);
        } else if let Some(last) = chunks.last_mut() {
            last.push('\n');
            last.push_str(&rest.text);
        }
    }

    chunks
}

impl Chunker for ParagraphChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        if document.is_empty() {
            return Vec::new();
        }

        pack_paragraphs(&document.text, self.max_chunk_size)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chunk {
                id: format!("{}_{index}", document.id),
                index,
                text,
                document_id: document.id.clone(),
            })
            .collect()
    }
}
