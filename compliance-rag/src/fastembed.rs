//! Local pretrained encoder backed by `fastembed` (ONNX Runtime).
//!
//! This module is only available when the `fastembed` feature is enabled.

use std::sync::{Arc, Mutex, OnceLock};

use ::fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::{debug, error, info};

use crate::embedding::TextEncoder;
use crate::error::{RagError, Result};

/// Output dimensionality of `all-MiniLM-L6-v2`.
const DEFAULT_DIMENSIONS: usize = 384;

static SHARED: OnceLock<Arc<FastEmbedEncoder>> = OnceLock::new();

/// A [`TextEncoder`] running `all-MiniLM-L6-v2` locally.
///
/// The model is downloaded on first use and cached by `fastembed`. The
/// inference session needs exclusive access, so calls are serialized behind
/// a `Mutex`.
///
/// # Example
///
/// ```rust,ignore
/// use compliance_rag::fastembed::FastEmbedEncoder;
///
/// let encoder = FastEmbedEncoder::shared()?;
/// let vectors = encoder.encode(&["hello world"])?;
/// ```
pub struct FastEmbedEncoder {
    model: Mutex<TextEmbedding>,
    dimensions: usize,
}

impl FastEmbedEncoder {
    /// Load the model.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmbeddingFailure`] if the model cannot be downloaded
    /// or initialized.
    pub fn load() -> Result<Self> {
        let options =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false);
        let model = TextEmbedding::try_new(options).map_err(|e| {
            error!(encoder = "fastembed", error = %e, "failed to load model");
            RagError::EmbeddingFailure {
                strategy: "dense".into(),
                message: format!("failed to load all-MiniLM-L6-v2: {e}"),
            }
        })?;
        info!(encoder = "fastembed", dimensions = DEFAULT_DIMENSIONS, "loaded all-MiniLM-L6-v2");
        Ok(Self { model: Mutex::new(model), dimensions: DEFAULT_DIMENSIONS })
    }

    /// The process-wide encoder, loaded on first call and shared afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmbeddingFailure`] if the first load fails. A later
    /// call tries again.
    pub fn shared() -> Result<Arc<Self>> {
        if let Some(encoder) = SHARED.get() {
            return Ok(Arc::clone(encoder));
        }
        let loaded = Arc::new(Self::load()?);
        Ok(Arc::clone(SHARED.get_or_init(|| loaded)))
    }
}

impl TextEncoder for FastEmbedEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(encoder = "fastembed", batch_size = texts.len(), "encoding batch");

        let mut model = self.model.lock().map_err(|_| RagError::EmbeddingFailure {
            strategy: "dense".into(),
            message: "encoder lock poisoned".into(),
        })?;
        model.embed(texts.to_vec(), None).map_err(|e| {
            error!(encoder = "fastembed", error = %e, "inference failed");
            RagError::EmbeddingFailure {
                strategy: "dense".into(),
                message: format!("inference failed: {e}"),
            }
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "fastembed/all-MiniLM-L6-v2"
    }
}
