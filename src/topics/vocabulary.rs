// Vocabulary: the corpus-wide term space, built once and then frozen.
//
// Terms are filtered by document frequency: too rare (fewer than min_df
// documents) carries no shared signal, too common (more than max_df of the
// documents) carries no distinguishing signal. Of the survivors, the
// max_features most frequent across the corpus are kept. Column order is
// alphabetical so indices are stable for a given corpus.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::error::PipelineError;

/// Document-frequency filtering thresholds.
#[derive(Debug, Clone)]
pub struct VocabularyParams {
    /// Minimum number of documents a term must appear in
    pub min_df: usize,
    /// Maximum share of documents a term may appear in, in (0, 1]
    pub max_df: f64,
    /// Keep at most this many terms (most frequent first)
    pub max_features: usize,
}

impl Default for VocabularyParams {
    fn default() -> Self {
        Self {
            min_df: 2,
            max_df: 0.95,
            max_features: 1000,
        }
    }
}

/// Frozen term index. There is no way to add or remove terms after
/// `build` returns.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    document_frequencies: Vec<usize>,
    n_documents: usize,
}

impl Vocabulary {
    /// Build the vocabulary from every document's filtered term stream.
    ///
    /// Fails with `EmptyVocabulary` when filtering leaves nothing.
    pub fn build(documents: &[&[String]], params: &VocabularyParams) -> Result<Self, PipelineError> {
        let n_documents = documents.len();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<&str, usize> = HashMap::new();

        for terms in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms.iter() {
                *corpus_frequency.entry(term.as_str()).or_insert(0) += 1;
                if seen.insert(term.as_str()) {
                    *document_frequency.entry(term.as_str()).or_insert(0) += 1;
                }
            }
        }

        let max_doc_count = params.max_df * n_documents as f64;
        let mut kept: Vec<(&str, usize)> = document_frequency
            .iter()
            .filter(|(_, &df)| df >= params.min_df && df as f64 <= max_doc_count)
            .map(|(&term, _)| (term, corpus_frequency[term]))
            .collect();

        if kept.is_empty() {
            return Err(PipelineError::EmptyVocabulary {
                documents: n_documents,
                min_df: params.min_df,
                max_df: params.max_df,
            });
        }

        // Most frequent first, ties by term, then cap and restore alphabetical order
        kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        kept.truncate(params.max_features);
        let mut terms: Vec<String> = kept.into_iter().map(|(t, _)| t.to_string()).collect();
        terms.sort();

        let index: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        let document_frequencies = terms
            .iter()
            .map(|t| document_frequency[t.as_str()])
            .collect();

        info!(
            candidates = document_frequency.len(),
            kept = terms.len(),
            documents = n_documents,
            "Built corpus vocabulary"
        );

        Ok(Self {
            terms,
            index,
            document_frequencies,
            n_documents,
        })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn document_frequency(&self, column: usize) -> usize {
        self.document_frequencies[column]
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1.
    ///
    /// Always positive, and lower for terms that appear in more documents.
    pub fn idf(&self, column: usize) -> f64 {
        let n = self.n_documents as f64;
        let df = self.document_frequencies[column] as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    }
}
