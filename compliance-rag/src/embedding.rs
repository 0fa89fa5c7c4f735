//! Pretrained text encoder trait for the dense strategy.

use crate::error::Result;

/// A pretrained encoder that maps text to vectors of a fixed dimensionality.
///
/// The output space does not depend on which other texts are encoded, so a
/// query and a set of chunks encoded by the same encoder are always
/// comparable. Implementations are loaded once and shared read-only, usually
/// as an `Arc<dyn TextEncoder>`.
///
/// # Example
///
/// ```rust,ignore
/// use compliance_rag::TextEncoder;
///
/// let encoder = MyEncoder::load()?;
/// let vectors = encoder.encode(&["hello world"])?;
/// assert_eq!(vectors[0].len(), encoder.dimensions());
/// ```
pub trait TextEncoder: Send + Sync {
    /// Encode a batch of texts, returning one vector per text in input order.
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Return the dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;

    /// A short human-readable name used in logs and errors.
    fn name(&self) -> &str {
        "encoder"
    }
}
