// Composition tests: verifying that the stages chain together correctly.
//
// These tests exercise the full data flow:
//   texts dir -> load_corpus -> Normalizer -> {Style, Sentiment}
//     -> Vocabulary -> TF-IDF -> LDA -> Aggregator -> JsonDirectory
// on a small architecture-flavoured corpus written to a temp directory.

use std::fs;
use std::path::Path;

use distant_reading::config::Config;
use distant_reading::corpus::{load_corpus, RawText};
use distant_reading::error::PipelineError;
use distant_reading::output::{JsonDirectory, ReportSink};
use distant_reading::pipeline::{self, Reports};
use distant_reading::style::StyleMetrics;

fn gutenberg(title: &str, body: &str) -> String {
    format!(
        "The Project Gutenberg eBook of {title}\n\n\
         *** START OF THE PROJECT GUTENBERG EBOOK {title} ***\n\n{body}\n\n\
         *** END OF THE PROJECT GUTENBERG EBOOK {title} ***\n\nLicence."
    )
}

/// Five texts; the content words are shared by two to four of them.
fn architecture_corpus() -> Vec<RawText> {
    vec![
        RawText::new(
            "bridge",
            gutenberg(
                "BRIDGE",
                "The bridge crosses the river. Stone arches carry the heavy road. \
                 Engineers measured the river current with care. Iron cables hold the deck.",
            ),
        ),
        RawText::new(
            "cathedral",
            gutenberg(
                "CATHEDRAL",
                "The cathedral rises over the town. Stone arches carry the vaulted nave. \
                 Light falls through glass windows onto the stone floor. \
                 The masons were patient and the result is beautiful.",
            ),
        ),
        RawText::new(
            "factory",
            gutenberg(
                "FACTORY",
                "The factory is loud and terrible. Iron machines grind all day. \
                 Engineers repair the machines at night. Workers hate the heavy noise.",
            ),
        ),
        RawText::new(
            "garden",
            gutenberg(
                "GARDEN",
                "The garden is lovely in spring. Flowers bloom along the stone paths. \
                 The gardener waters the roses every morning. Light falls on the flowers.",
            ),
        ),
        RawText::new(
            "river",
            "The river flows past the garden. Workers fish in the river at dawn. \
             The water carries light and flowers downstream. Morning comes slowly.",
        ),
    ]
}

fn config(output: &Path) -> Config {
    Config {
        output_dir: output.to_path_buf(),
        n_topics: 5,
        concurrency: 2,
        ..Config::default()
    }
}

/// Everything except the run timestamp.
fn assert_same_results(a: &Reports, b: &Reports) {
    assert_eq!(a.records, b.records);
    assert_eq!(a.comparative, b.comparative);
    assert_eq!(a.topics, b.topics);
    assert_eq!(a.manifest.iterations, b.manifest.iterations);
    assert_eq!(a.manifest.vocabulary_size, b.manifest.vocabulary_size);
}

// ============================================================
// Chain: corpus -> reports
// ============================================================

#[test]
fn five_documents_five_topics() {
    let dir = tempfile::tempdir().unwrap();
    let reports = pipeline::run(&architecture_corpus(), &config(dir.path())).unwrap();

    assert_eq!(reports.topics.n_topics, 5);
    assert_eq!(reports.topics.topics.len(), 5);
    for topic in &reports.topics.topics {
        assert!(!topic.words.is_empty());
        assert!(topic.words.len() <= 10);
    }

    assert_eq!(reports.topics.document_topics.len(), 5);
    for doc in &reports.topics.document_topics {
        assert_eq!(doc.topic_distribution.len(), 5);
        let sum: f64 = doc.topic_distribution.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(doc.dominant_topic < 5);
    }
}

#[test]
fn records_and_comparative_line_up() {
    let dir = tempfile::tempdir().unwrap();
    let reports = pipeline::run(&architecture_corpus(), &config(dir.path())).unwrap();

    let titles: Vec<&str> = reports.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["bridge", "cathedral", "factory", "garden", "river"]);
    assert_eq!(reports.comparative.books, titles);
    assert_eq!(reports.comparative.metrics.aligned_len(), Some(5));

    let books: Vec<&str> = reports
        .topics
        .document_topics
        .iter()
        .map(|d| d.book.as_str())
        .collect();
    assert_eq!(books, titles);

    for (i, record) in reports.records.iter().enumerate() {
        assert_eq!(
            reports.comparative.metrics.total_words[i],
            record.style_metrics.total_words
        );
        let s = &record.sentiment;
        assert!((s.positive + s.negative + s.neutral - 1.0).abs() < 1e-9);
        assert!(record.word_frequencies.len() <= 50);
    }
}

#[test]
fn sentiment_differs_between_lovely_and_terrible_texts() {
    let dir = tempfile::tempdir().unwrap();
    let reports = pipeline::run(&architecture_corpus(), &config(dir.path())).unwrap();
    let compound = |title: &str| {
        reports
            .records
            .iter()
            .find(|r| r.title == title)
            .map(|r| r.sentiment.compound)
            .unwrap()
    };
    assert!(compound("garden") > compound("factory"));
}

#[test]
fn missing_markers_are_recorded_in_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let reports = pipeline::run(&architecture_corpus(), &config(dir.path())).unwrap();

    assert_eq!(reports.manifest.missing_markers, vec!["river"]);
    assert_eq!(reports.manifest.seed, 42);
    assert_eq!(reports.manifest.documents.len(), 5);
    assert!(reports.manifest.vocabulary_size >= 2);
}

#[test]
fn zero_sentence_document_still_gets_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut corpus = architecture_corpus();
    corpus.push(RawText::new("blank", gutenberg("BLANK", "* * *")));

    let reports = pipeline::run(&corpus, &config(dir.path())).unwrap();
    let blank = reports
        .records
        .iter()
        .find(|r| r.title == "blank")
        .unwrap();

    assert_eq!(blank.style_metrics, StyleMetrics::sentinel());
    assert!(blank.word_frequencies.is_empty());
    assert_eq!(blank.sentiment.neutral, 1.0);
    assert_eq!(reports.comparative.metrics.aligned_len(), Some(6));

    let mixture = reports.topics.document_topics.last().unwrap();
    assert_eq!(mixture.book, "blank");
    let sum: f64 = mixture.topic_distribution.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn wordless_sentence_keeps_truthful_counts() {
    let dir = tempfile::tempdir().unwrap();
    let mut corpus = architecture_corpus();
    corpus.push(RawText::new("dates", gutenberg("DATES", "1849.")));

    let reports = pipeline::run(&corpus, &config(dir.path())).unwrap();
    let dates = reports.records.iter().find(|r| r.title == "dates").unwrap();
    assert_eq!(dates.style_metrics.total_sentences, 1);
    assert_eq!(dates.style_metrics.total_words, 0);
    assert_eq!(dates.style_metrics.flesch_reading_ease, 0.0);
    assert_eq!(dates.sentiment.neutral, 1.0);
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn pinned_seed_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let a = pipeline::run(&architecture_corpus(), &config(dir.path())).unwrap();
    let b = pipeline::run(&architecture_corpus(), &config(dir.path())).unwrap();
    assert_same_results(&a, &b);
}

#[test]
fn thread_count_does_not_change_results() {
    let dir = tempfile::tempdir().unwrap();
    let single = Config {
        concurrency: 1,
        ..config(dir.path())
    };
    let parallel = Config {
        concurrency: 4,
        ..config(dir.path())
    };
    let a = pipeline::run(&architecture_corpus(), &single).unwrap();
    let b = pipeline::run(&architecture_corpus(), &parallel).unwrap();
    assert_same_results(&a, &b);
}

// ============================================================
// Chain: texts dir -> run -> JsonDirectory
// ============================================================

fn write_corpus(dir: &Path) {
    for raw in architecture_corpus() {
        fs::write(dir.join(format!("{}.txt", raw.title)), raw.text).unwrap();
    }
}

#[test]
fn end_to_end_writes_dashboard_files() {
    let texts = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_corpus(texts.path());

    let corpus = load_corpus(texts.path()).unwrap();
    let config = config(out.path());
    let reports = pipeline::run(&corpus, &config).unwrap();
    JsonDirectory::new(&config.output_dir)
        .write(&reports)
        .unwrap();

    for name in ["all_books.json", "comparative.json", "topics.json", "manifest.json"] {
        assert!(out.path().join(name).exists(), "{name} missing");
    }
    for raw in architecture_corpus() {
        assert!(out.path().join(format!("{}.json", raw.title)).exists());
    }

    let topics = JsonDirectory::new(out.path()).load_topics().unwrap();
    assert_eq!(topics, reports.topics);
}

#[test]
fn too_many_topics_fails_before_any_output() {
    let texts = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("data");
    write_corpus(texts.path());

    let corpus = load_corpus(texts.path()).unwrap();
    let config = Config {
        n_topics: 10,
        ..config(&out)
    };

    let err = pipeline::run(&corpus, &config).unwrap_err();
    let kind = err.downcast_ref::<PipelineError>().unwrap();
    assert_eq!(
        kind,
        &PipelineError::TooManyTopics {
            requested: 10,
            documents: 5
        }
    );
    assert!(kind.is_configuration());
    assert!(!out.exists());
}

#[test]
fn rerun_replaces_previous_outputs() {
    let texts = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_corpus(texts.path());
    let sink = JsonDirectory::new(out.path());

    let first = Config {
        n_topics: 2,
        ..config(out.path())
    };
    sink.write(&pipeline::run(&load_corpus(texts.path()).unwrap(), &first).unwrap())
        .unwrap();
    assert_eq!(sink.load_topics().unwrap().n_topics, 2);

    let second = config(out.path());
    sink.write(&pipeline::run(&load_corpus(texts.path()).unwrap(), &second).unwrap())
        .unwrap();
    assert_eq!(sink.load_topics().unwrap().n_topics, 5);
    assert_eq!(sink.load_manifest().unwrap().n_topics, 5);
}
