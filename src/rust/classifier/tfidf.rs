use std::collections::{BTreeMap, HashSet};

use lazy_static::lazy_static;
use log::info;
use ndarray::Array1;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use super::error::ClassifierError;
use super::utils::{normalize_row, SparseRow};
use crate::config::TfidfConfig;

lazy_static! {
    static ref WORD_TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Word n-gram TF-IDF vectorizer with smoothed IDF and L2-normalized rows.
///
/// Terms are indexed in lexicographic order after pruning by document
/// frequency, so the same corpus always yields the same column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    config: TfidfConfig,
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f64>,
}

impl TfidfVectorizer {
    /// Learns the vocabulary and IDF weights from `documents`.
    ///
    /// # Errors
    /// - `Validation` if the n-gram range or document-frequency bounds are invalid
    /// - `Build` if no terms survive tokenization or pruning
    pub fn fit<S: AsRef<str>>(config: &TfidfConfig, documents: &[S]) -> Result<Self, ClassifierError> {
        let (min_n, max_n) = config.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ClassifierError::Validation(format!(
                "Invalid n-gram range ({}, {})",
                min_n, max_n
            )));
        }
        if !(0.0..=1.0).contains(&config.max_df) {
            return Err(ClassifierError::Validation(format!(
                "max_df must lie in [0, 1], got {}",
                config.max_df
            )));
        }

        let n_docs = documents.len();
        let max_doc_count = config.max_df * n_docs as f64;
        if max_doc_count < config.min_df as f64 {
            return Err(ClassifierError::Validation(
                "max_df corresponds to fewer documents than min_df".into(),
            ));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = analyze(config, doc.as_ref()).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(ClassifierError::Build(
                "Empty vocabulary; the documents contain no tokens".into(),
            ));
        }

        let kept: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= config.min_df && df as f64 <= max_doc_count)
            .collect();
        if kept.is_empty() {
            return Err(ClassifierError::Build(
                "After pruning, no terms remain. Try a lower min_df or a higher max_df".into(),
            ));
        }

        let n = n_docs as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Array1::zeros(kept.len());
        for (idx, (term, df)) in kept.into_iter().enumerate() {
            idf[idx] = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
            vocabulary.insert(term, idx);
        }
        info!("Fitted TF-IDF vocabulary with {} terms over {} documents", vocabulary.len(), n_docs);

        Ok(Self {
            config: config.clone(),
            vocabulary,
            idf,
        })
    }

    /// Maps a document to its unit-length TF-IDF row; unknown terms are ignored.
    pub fn transform(&self, document: &str) -> SparseRow {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(&self.config, document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        normalize_row(&mut row);
        row
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }
}

/// Preprocesses, tokenizes and expands a document into its n-gram terms.
pub(crate) fn analyze(config: &TfidfConfig, document: &str) -> Vec<String> {
    let mut text = if config.lowercase {
        document.to_lowercase()
    } else {
        document.to_string()
    };
    if config.strip_accents {
        text = strip_accents(&text);
    }

    let tokens: Vec<&str> = WORD_TOKEN.find_iter(&text).map(|m| m.as_str()).collect();
    let (min_n, max_n) = config.ngram_range;

    let mut terms = Vec::new();
    for n in min_n..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

/// Decomposes to NFKD and drops combining characters.
pub(crate) fn strip_accents(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfkd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}
