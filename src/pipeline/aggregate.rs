// Aggregator: merges per-document and corpus-wide results into the
// structures the dashboard reads.
//
// Nothing here computes new analysis. It lines up results that were produced
// separately and checks that they agree on the document count: a mismatch
// means a stage dropped or duplicated a document, and the run stops rather
// than writing misaligned arrays.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::sentiment::SentimentScore;
use crate::style::StyleMetrics;
use crate::text::Document;
use crate::topics::{Topic, TopicFit};

/// The persisted per-document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub title: String,
    pub sentiment: SentimentScore,
    pub style_metrics: StyleMetrics,
    /// Top terms by count, most frequent first
    pub word_frequencies: IndexMap<String, usize>,
}

/// Cross-document comparison: `books[i]` owns index `i` of every metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeReport {
    pub books: Vec<String>,
    pub metrics: ComparativeMetrics,
}

/// Index-aligned metric arrays, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeMetrics {
    pub flesch_reading_ease: Vec<f64>,
    pub flesch_kincaid_grade: Vec<f64>,
    pub avg_sentence_length: Vec<f64>,
    pub avg_word_length: Vec<f64>,
    pub lexical_diversity: Vec<f64>,
    pub total_words: Vec<usize>,
    pub sentiment_compound: Vec<f64>,
}

impl ComparativeMetrics {
    /// Length of every array, or None if any two disagree.
    pub fn aligned_len(&self) -> Option<usize> {
        let lens = [
            self.flesch_reading_ease.len(),
            self.flesch_kincaid_grade.len(),
            self.avg_sentence_length.len(),
            self.avg_word_length.len(),
            self.lexical_diversity.len(),
            self.total_words.len(),
            self.sentiment_compound.len(),
        ];
        lens.iter().all(|&l| l == lens[0]).then_some(lens[0])
    }
}

/// The corpus topics plus every document's mixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicsReport {
    pub topics: Vec<Topic>,
    pub document_topics: Vec<DocumentTopics>,
    pub n_topics: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTopics {
    pub book: String,
    pub dominant_topic: usize,
    pub topic_distribution: Vec<f64>,
}

/// Provenance for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub n_topics: usize,
    pub vocabulary_size: usize,
    pub iterations: usize,
    pub documents: Vec<String>,
    /// Titles processed whole because their boilerplate markers were missing
    pub missing_markers: Vec<String>,
}

/// Everything a run persists.
#[derive(Debug, Clone, PartialEq)]
pub struct Reports {
    pub records: Vec<AnalysisRecord>,
    pub comparative: ComparativeReport,
    pub topics: TopicsReport,
    pub manifest: RunManifest,
}

/// Build the per-document records.
pub fn analysis_records(
    documents: &[Document],
    styles: &[StyleMetrics],
    sentiments: &[SentimentScore],
    top_frequencies: usize,
) -> Result<Vec<AnalysisRecord>, PipelineError> {
    check_len("style metrics", documents.len(), styles.len())?;
    check_len("sentiment scores", documents.len(), sentiments.len())?;

    Ok(documents
        .iter()
        .zip(styles)
        .zip(sentiments)
        .map(|((doc, style), sentiment)| AnalysisRecord {
            title: doc.title().to_string(),
            sentiment: *sentiment,
            style_metrics: style.clone(),
            word_frequencies: doc.top_frequencies(top_frequencies),
        })
        .collect())
}

/// Line up the records' metrics into parallel arrays.
pub fn comparative_report(records: &[AnalysisRecord]) -> ComparativeReport {
    let metric = |f: fn(&StyleMetrics) -> f64| -> Vec<f64> {
        records.iter().map(|r| round_to(f(&r.style_metrics), 2)).collect()
    };

    ComparativeReport {
        books: records.iter().map(|r| r.title.clone()).collect(),
        metrics: ComparativeMetrics {
            flesch_reading_ease: metric(|s| s.flesch_reading_ease),
            flesch_kincaid_grade: metric(|s| s.flesch_kincaid_grade),
            avg_sentence_length: metric(|s| s.avg_sentence_length),
            avg_word_length: metric(|s| s.avg_word_length),
            lexical_diversity: metric(|s| s.lexical_diversity),
            total_words: records.iter().map(|r| r.style_metrics.total_words).collect(),
            sentiment_compound: records
                .iter()
                .map(|r| round_to(r.sentiment.compound, 3))
                .collect(),
        },
    }
}

/// Attach titles to the topic model's per-document mixtures.
pub fn topics_report(titles: &[String], fit: &TopicFit) -> Result<TopicsReport, PipelineError> {
    check_len("topic distributions", titles.len(), fit.mixtures.len())?;

    let document_topics = titles
        .iter()
        .zip(&fit.mixtures)
        .map(|(title, mixture)| DocumentTopics {
            book: title.clone(),
            dominant_topic: mixture.dominant,
            topic_distribution: mixture.probabilities.clone(),
        })
        .collect();

    Ok(TopicsReport {
        n_topics: fit.topics.len(),
        topics: fit.topics.clone(),
        document_topics,
    })
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), PipelineError> {
    if expected == found {
        Ok(())
    } else {
        Err(PipelineError::AssemblyMismatch {
            what,
            expected,
            found,
        })
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::TopicMixture;

    fn record(title: &str, compound: f64, total_words: usize) -> AnalysisRecord {
        AnalysisRecord {
            title: title.to_string(),
            sentiment: SentimentScore {
                compound,
                ..SentimentScore::neutral()
            },
            style_metrics: StyleMetrics {
                flesch_reading_ease: 65.4321,
                total_words,
                ..StyleMetrics::sentinel()
            },
            word_frequencies: IndexMap::new(),
        }
    }

    #[test]
    fn test_comparative_is_index_aligned_and_rounded() {
        let report = comparative_report(&[record("a", 0.12345, 10), record("b", -0.5, 20)]);
        assert_eq!(report.books, vec!["a", "b"]);
        assert_eq!(report.metrics.aligned_len(), Some(2));
        assert_eq!(report.metrics.flesch_reading_ease, vec![65.43, 65.43]);
        assert_eq!(report.metrics.sentiment_compound, vec![0.123, -0.5]);
        assert_eq!(report.metrics.total_words, vec![10, 20]);
    }

    #[test]
    fn test_topics_report_mismatch_is_fatal() {
        let fit = TopicFit {
            topics: vec![],
            mixtures: vec![TopicMixture::from_probabilities(vec![1.0])],
            iterations: 1,
        };
        let titles = vec!["a".to_string(), "b".to_string()];
        let err = topics_report(&titles, &fit).unwrap_err();
        assert_eq!(
            err,
            PipelineError::AssemblyMismatch {
                what: "topic distributions",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(-0.1236, 3), -0.124);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
