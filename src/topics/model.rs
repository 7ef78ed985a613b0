// Topic model outputs: ranked topics and per-document mixtures.
//
// These are the shapes the aggregator reads. A `Topic` carries its top
// terms alongside the matching probabilities, and a `TopicMixture` carries a
// document's normalized distribution with the arg-max already resolved.

use serde::{Deserialize, Serialize};

use super::lda::LdaFit;
use super::vocabulary::Vocabulary;

/// One discovered topic: its top terms, most probable first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic_id: usize,
    /// Top-N terms by topic-term probability, descending
    pub words: Vec<String>,
    /// Probabilities parallel to `words`
    pub weights: Vec<f64>,
}

/// A document's topic distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicMixture {
    /// K probabilities summing to one
    pub probabilities: Vec<f64>,
    /// Index of the largest probability (lowest index on ties)
    pub dominant: usize,
}

impl TopicMixture {
    pub fn from_probabilities(probabilities: Vec<f64>) -> Self {
        let mut dominant = 0;
        for (i, &p) in probabilities.iter().enumerate() {
            if p > probabilities[dominant] {
                dominant = i;
            }
        }
        Self {
            probabilities,
            dominant,
        }
    }
}

/// Everything a topic extractor produces for one corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicFit {
    pub topics: Vec<Topic>,
    /// One mixture per document, in matrix row order
    pub mixtures: Vec<TopicMixture>,
    /// Passes the factorization actually ran
    pub iterations: usize,
}

impl TopicFit {
    /// Rank each topic's terms and resolve each document's dominant topic.
    pub fn from_lda(fit: LdaFit, vocabulary: &Vocabulary, n_top_words: usize) -> Self {
        let topics = fit
            .topic_term
            .iter()
            .enumerate()
            .map(|(topic_id, row)| {
                let ranked = top_columns(row, n_top_words);
                Topic {
                    topic_id,
                    words: ranked
                        .iter()
                        .filter_map(|&col| vocabulary.term(col).map(String::from))
                        .collect(),
                    weights: ranked.iter().map(|&col| row[col]).collect(),
                }
            })
            .collect();

        let mixtures = fit
            .doc_topic
            .into_iter()
            .map(TopicMixture::from_probabilities)
            .collect();

        Self {
            topics,
            mixtures,
            iterations: fit.iterations,
        }
    }
}

/// Column indices of the `n` largest values, descending; ties by column.
fn top_columns(row: &[f64], n: usize) -> Vec<usize> {
    let mut columns: Vec<usize> = (0..row.len()).collect();
    columns.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then_with(|| a.cmp(&b)));
    columns.truncate(n);
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_is_argmax() {
        let m = TopicMixture::from_probabilities(vec![0.1, 0.6, 0.3]);
        assert_eq!(m.dominant, 1);
    }

    #[test]
    fn test_dominant_tie_takes_lowest_index() {
        let m = TopicMixture::from_probabilities(vec![0.2, 0.4, 0.4]);
        assert_eq!(m.dominant, 1);
        let uniform = TopicMixture::from_probabilities(vec![0.25; 4]);
        assert_eq!(uniform.dominant, 0);
    }

    #[test]
    fn test_top_columns_ranked_with_stable_ties() {
        assert_eq!(top_columns(&[0.1, 0.3, 0.3, 0.2], 3), vec![1, 2, 3]);
        assert_eq!(top_columns(&[0.5, 0.5], 10), vec![0, 1]);
    }
}
