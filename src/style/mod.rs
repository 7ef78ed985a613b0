// Style metrics: readability and lexical statistics for one document.
//
// All counts are taken over the full lowercase token stream (stopwords
// included). A document with no words or no sentences gets zero for every
// ratio and readability score instead of a division by zero; the counts
// themselves stay truthful.

pub mod readability;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::Document;

/// Per-document style and readability statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    /// Mean tokens per sentence
    pub avg_sentence_length: f64,
    /// Mean characters per token
    pub avg_word_length: f64,
    /// unique_words / total_words, in [0, 1]
    pub lexical_diversity: f64,
    pub total_words: usize,
    pub unique_words: usize,
    pub total_sentences: usize,
}

impl StyleMetrics {
    /// Compute metrics for a normalized document.
    pub fn compute(doc: &Document) -> Self {
        Self::from_parts(doc.tokens(), doc.sentences().len())
    }

    /// Compute metrics from a token stream and a sentence count.
    pub fn from_parts(tokens: &[String], total_sentences: usize) -> Self {
        let total_words = tokens.len();
        let unique_words = tokens.iter().collect::<HashSet<_>>().len();

        if total_words == 0 || total_sentences == 0 {
            return Self {
                total_words,
                unique_words,
                total_sentences,
                ..Self::sentinel()
            };
        }

        let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let syllables = readability::total_syllables(tokens);

        Self {
            flesch_reading_ease: readability::flesch_reading_ease(
                total_words,
                total_sentences,
                syllables,
            ),
            flesch_kincaid_grade: readability::flesch_kincaid_grade(
                total_words,
                total_sentences,
                syllables,
            ),
            avg_sentence_length: total_words as f64 / total_sentences as f64,
            avg_word_length: total_chars as f64 / total_words as f64,
            lexical_diversity: unique_words as f64 / total_words as f64,
            total_words,
            unique_words,
            total_sentences,
        }
    }

    /// The all-zero record used for empty documents.
    pub fn sentinel() -> Self {
        Self {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            avg_sentence_length: 0.0,
            avg_word_length: 0.0,
            lexical_diversity: 0.0,
            total_words: 0,
            unique_words: 0,
            total_sentences: 0,
        }
    }
}
