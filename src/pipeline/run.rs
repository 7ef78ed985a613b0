// Analysis pipeline: raw texts -> per-document features -> corpus topics.
//
// The run has two explicit phases separated by a barrier:
// 1. Per document, in parallel on a rayon pool: normalize, style metrics,
//    sentiment. Results are collected in input order.
// 2. Corpus-wide, sequential: build the vocabulary once, vectorize, fit the
//    topic model, then aggregate.
// Phase two never starts until every phase-one result exists. Nothing is
// written here; the caller hands the returned Reports to a ReportSink, so a
// fatal error anywhere in the run leaves previous outputs alone.

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::corpus::RawText;
use crate::error::PipelineError;
use crate::sentiment::{LexiconScorer, SentimentScore, SentimentScorer};
use crate::style::StyleMetrics;
use crate::text::{Document, Normalizer};
use crate::topics::lda::LdaParams;
use crate::topics::vectorizer;
use crate::topics::{LdaExtractor, TopicExtractor, VocabularyParams};

use super::aggregate::{self, Reports, RunManifest};

/// Phase-one output for one document.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub document: Document,
    pub style: StyleMetrics,
    pub sentiment: SentimentScore,
}

/// Run the full pipeline with the default scorer and extractor.
pub fn run(texts: &[RawText], config: &Config) -> Result<Reports> {
    let scorer = LexiconScorer::default();
    let extractor = lda_extractor(config);
    run_with(texts, config, &scorer, &extractor)
}

/// The LDA extractor configured from `config`.
pub fn lda_extractor(config: &Config) -> LdaExtractor {
    LdaExtractor {
        params: LdaParams {
            n_topics: config.n_topics,
            max_iter: config.max_iter,
            seed: config.seed,
            ..LdaParams::default()
        },
        n_top_words: config.n_top_words,
    }
}

/// Run the full pipeline with explicit scorer and extractor.
pub fn run_with(
    texts: &[RawText],
    config: &Config,
    scorer: &dyn SentimentScorer,
    extractor: &dyn TopicExtractor,
) -> Result<Reports> {
    // Everything that can be rejected up front is, before any work starts
    config.validate()?;
    if texts.is_empty() {
        return Err(PipelineError::EmptyCorpus(config.texts_dir.clone()).into());
    }
    if config.n_topics > texts.len() {
        return Err(PipelineError::TooManyTopics {
            requested: config.n_topics,
            documents: texts.len(),
        }
        .into());
    }

    info!(
        documents = texts.len(),
        topics = config.n_topics,
        concurrency = config.concurrency,
        "Starting analysis"
    );

    // Phase one
    let normalizer = Normalizer::gutenberg(config.min_term_length)?;
    let analyses = analyze_documents(texts, &normalizer, scorer, config.concurrency)?;

    // Phase two
    let term_streams: Vec<&[String]> = analyses.iter().map(|a| a.document.terms()).collect();
    let params = VocabularyParams {
        min_df: config.min_df,
        max_df: config.max_df,
        max_features: config.max_features,
    };
    let (vocabulary, matrix) = vectorizer::fit_transform(&term_streams, &params)?;
    let fit = extractor.extract(&vocabulary, &matrix)?;

    let documents: Vec<Document> = analyses.iter().map(|a| a.document.clone()).collect();
    let styles: Vec<StyleMetrics> = analyses.iter().map(|a| a.style.clone()).collect();
    let sentiments: Vec<SentimentScore> = analyses.iter().map(|a| a.sentiment).collect();

    let records =
        aggregate::analysis_records(&documents, &styles, &sentiments, config.top_frequencies)?;
    let comparative = aggregate::comparative_report(&records);
    let titles: Vec<String> = records.iter().map(|r| r.title.clone()).collect();
    let topics = aggregate::topics_report(&titles, &fit)?;

    let manifest = RunManifest {
        generated_at: Utc::now(),
        seed: config.seed,
        n_topics: topics.n_topics,
        vocabulary_size: vocabulary.len(),
        iterations: fit.iterations,
        missing_markers: documents
            .iter()
            .filter(|d| !d.markers_found())
            .map(|d| d.title().to_string())
            .collect(),
        documents: titles,
    };

    info!(
        documents = records.len(),
        vocabulary = manifest.vocabulary_size,
        iterations = manifest.iterations,
        "Analysis complete"
    );

    Ok(Reports {
        records,
        comparative,
        topics,
        manifest,
    })
}

/// Phase one: normalize and score every text on a pool of `concurrency`
/// threads. The result is in input order regardless of thread count.
pub fn analyze_documents(
    texts: &[RawText],
    normalizer: &Normalizer,
    scorer: &dyn SentimentScorer,
    concurrency: usize,
) -> Result<Vec<DocumentAnalysis>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrency)
        .build()
        .context("Failed to build the analysis thread pool")?;

    let pb = ProgressBar::new(texts.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")
            .context("Invalid progress bar template")?,
    );

    let analyses = pool.install(|| {
        texts
            .par_iter()
            .map(|raw| {
                let analysis = analyze_document(raw, normalizer, scorer);
                pb.inc(1);
                analysis
            })
            .collect::<Vec<_>>()
    });

    pb.finish_and_clear();
    Ok(analyses)
}

/// Normalize one text and compute its style and sentiment.
pub fn analyze_document(
    raw: &RawText,
    normalizer: &Normalizer,
    scorer: &dyn SentimentScorer,
) -> DocumentAnalysis {
    let document = normalizer.normalize(&raw.title, &raw.text);
    let style = StyleMetrics::compute(&document);
    let sentiment = scorer.score_document(document.sentences());

    if document.tokens().is_empty() {
        warn!(title = %raw.title, "Document has no words after normalization");
    }

    DocumentAnalysis {
        document,
        style,
        sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_topics_fails_before_work() {
        let texts = vec![RawText::new("a", "Stone."), RawText::new("b", "Arch.")];
        let config = Config {
            n_topics: 3,
            ..Config::default()
        };
        let err = run(&texts, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::TooManyTopics {
                requested: 3,
                documents: 2
            })
        ));
    }

    #[test]
    fn test_analysis_keeps_input_order() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let scorer = LexiconScorer::default();
        let texts: Vec<RawText> = (0..8)
            .map(|i| RawText::new(format!("book{i}"), "A good hall."))
            .collect();
        let analyses = analyze_documents(&texts, &normalizer, &scorer, 4).unwrap();
        let titles: Vec<&str> = analyses.iter().map(|a| a.document.title()).collect();
        assert_eq!(
            titles,
            vec!["book0", "book1", "book2", "book3", "book4", "book5", "book6", "book7"]
        );
    }

    #[test]
    fn test_empty_text_gets_sentinels() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let analysis = analyze_document(
            &RawText::new("blank", "   "),
            &normalizer,
            &LexiconScorer::default(),
        );
        assert_eq!(analysis.style, StyleMetrics::sentinel());
        assert_eq!(analysis.sentiment, SentimentScore::neutral());
    }
}
