//! TF-IDF vectorizer for the statistical strategy.
//!
//! Weighting follows the conventional smoothed TF-IDF scheme:
//!
//! - tokens are lowercased runs of two or more word characters;
//! - term frequency is the raw token count within a text;
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, with `n` fitted texts;
//! - every row is L2-normalized.
//!
//! The vocabulary is kept in sorted order so that axis `i` means the same
//! term on every run.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w\w+\b").expect("unreachable error: failed to compile token pattern")
});

/// Split text into lowercase tokens of at least two word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

/// Fits TF-IDF weights over a set of texts.
///
/// # Example
///
/// ```rust,ignore
/// use compliance_rag::TfIdfVectorizer;
///
/// let vectors = TfIdfVectorizer::new().fit_transform(&["risk", "funds carry risk"]);
/// assert_eq!(vectors[0].len(), vectors[1].len());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfVectorizer;

impl TfIdfVectorizer {
    /// Create a new vectorizer.
    pub fn new() -> Self {
        Self
    }

    /// Learn a vocabulary and IDF weights from `texts`.
    pub fn fit(&self, texts: &[&str]) -> FittedTfIdf {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();
        FittedTfIdf::from_tokens(&tokenized)
    }

    /// Fit over `texts` and return one vector per text, all in the fitted space.
    pub fn fit_transform(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();
        let fitted = FittedTfIdf::from_tokens(&tokenized);
        tokenized.iter().map(|tokens| fitted.vectorize(tokens)).collect()
    }
}

/// A vocabulary with IDF weights, learned by [`TfIdfVectorizer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct FittedTfIdf {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f32>,
}

impl FittedTfIdf {
    fn from_tokens(tokenized: &[Vec<String>]) -> Self {
        let terms: Vec<String> =
            tokenized.iter().flatten().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        let vocabulary: HashMap<String, usize> =
            terms.iter().enumerate().map(|(i, term)| (term.clone(), i)).collect();

        let mut document_frequency = vec![0usize; terms.len()];
        for tokens in tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                document_frequency[vocabulary[token]] += 1;
            }
        }

        let n = tokenized.len() as f32;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, terms, idf }
    }

    /// Number of axes in the fitted space.
    pub fn dimensions(&self) -> usize {
        self.terms.len()
    }

    /// The vocabulary in axis order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// The IDF weight of `term`, if it was seen during fitting.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }

    /// Project `texts` into the fitted space. Terms unseen during fitting are
    /// ignored.
    pub fn transform(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        texts.iter().map(|text| self.vectorize(&tokenize(text))).collect()
    }

    fn vectorize(&self, tokens: &[String]) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.terms.len()];
        for token in tokens {
            if let Some(&i) = self.vocabulary.get(token) {
                vector[i] += 1.0;
            }
        }
        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}
