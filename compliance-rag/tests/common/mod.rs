//! Shared test fixtures.

#![allow(dead_code)]

use compliance_rag::{RagError, Result, TextEncoder, tokenize};

/// Deterministic stand-in for a pretrained encoder: hashed bag of words,
/// L2-normalised, fixed dimensionality.
pub struct MockEncoder {
    dimensions: usize,
}

impl MockEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn encode_one(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; self.dimensions];
        for token in tokenize(text) {
            let hash = token.bytes().fold(0xcbf29ce484222325u64, |acc, b| {
                (acc ^ b as u64).wrapping_mul(0x100000001b3)
            });
            v[(hash % self.dimensions as u64) as usize] += 1.0;
        }
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            v.iter_mut().for_each(|x| *x /= norm);
        }
        v
    }
}

impl TextEncoder for MockEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.encode_one(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// An encoder whose model never loaded.
pub struct FailingEncoder;

impl TextEncoder for FailingEncoder {
    fn encode(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Err(RagError::EmbeddingFailure {
            strategy: "dense".into(),
            message: "model file missing".into(),
        })
    }

    fn dimensions(&self) -> usize {
        384
    }
}

/// An encoder that drops the last text of every batch.
pub struct ShortEncoder;

impl TextEncoder for ShortEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
    }

    fn dimensions(&self) -> usize {
        2
    }
}

/// An encoder whose output width depends on the input, like a vectorizer
/// fitted per call.
pub struct RaggedEncoder;

impl TextEncoder for RaggedEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| vec![1.0; tokenize(t).len().max(1)]).collect())
    }

    fn dimensions(&self) -> usize {
        1
    }
}

/// An encoder that declares the all-MiniLM-L6-v2 width but returns
/// three-wide vectors.
pub struct MisreportingEncoder;

impl TextEncoder for MisreportingEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![1.0; 3]).collect())
    }

    fn dimensions(&self) -> usize {
        384
    }
}

pub const SCENARIO_A: &str = "Mutual funds carry risk.\n\
                              Past performance does not guarantee future results.\n\
                              Invest wisely.";
