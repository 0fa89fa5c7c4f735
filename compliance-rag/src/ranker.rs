//! Cosine similarity ranking of candidate vectors against a query.

use crate::error::{RagError, Result};

/// The best candidate found by [`rank`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    /// Position of the winning candidate.
    pub index: usize,
    /// Its cosine similarity to the query.
    pub score: f32,
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Find the candidate most similar to `query`.
///
/// Ties go to the lowest index.
///
/// # Errors
///
/// Returns [`RagError::EmptyCandidateSet`] if `candidates` is empty, and
/// [`RagError::DimensionMismatch`] if any candidate's length differs from the
/// query's.
pub fn rank(query: &[f32], candidates: &[Vec<f32>]) -> Result<Ranked> {
    let mut best: Option<Ranked> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.len() != query.len() {
            return Err(RagError::DimensionMismatch {
                expected: query.len(),
                actual: candidate.len(),
            });
        }

        let score = cosine_similarity(query, candidate);
        match best {
            Some(current) if score <= current.score => {}
            _ => best = Some(Ranked { index, score }),
        }
    }

    best.ok_or(RagError::EmptyCandidateSet)
}
