// Colored terminal output for analysis reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// bars. The `analyze` and `show` commands delegate here.

use std::path::PathBuf;

use colored::Colorize;

use crate::pipeline::{AnalysisRecord, ComparativeReport, Reports, TopicsReport};
use crate::sentiment::SentimentLabel;

const BAR_WIDTH: usize = 20;

/// Short summary printed after `analyze` finishes.
pub fn display_run_summary(reports: &Reports, written: &[PathBuf]) {
    let manifest = &reports.manifest;
    println!(
        "\n{}",
        format!("=== Analysis complete ({} documents) ===", manifest.documents.len()).bold()
    );
    println!(
        "  Vocabulary: {} terms  |  Topics: {}  |  LDA passes: {}  |  Seed: {}",
        manifest.vocabulary_size, manifest.n_topics, manifest.iterations, manifest.seed
    );
    if !manifest.missing_markers.is_empty() {
        println!(
            "  {} boilerplate markers missing in: {}",
            "!".yellow(),
            manifest.missing_markers.join(", ")
        );
    }
    if let Some(dir) = written.first().and_then(|p| p.parent()) {
        println!("  Wrote {} files to {}", written.len(), dir.display());
    }
}

/// Display the cross-document comparison as a table.
pub fn display_comparative(report: &ComparativeReport) {
    if report.books.is_empty() {
        println!("No documents in the comparative report.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Comparative Metrics ({} documents) ===", report.books.len()).bold()
    );
    println!();

    println!(
        "  {:<28} {:>8} {:>7} {:>8} {:>8} {:>7} {:>9}",
        "Book".dimmed(),
        "Flesch".dimmed(),
        "Grade".dimmed(),
        "Sent.len".dimmed(),
        "Word.len".dimmed(),
        "Lex.div".dimmed(),
        "Compound".dimmed(),
    );
    println!("  {}", "-".repeat(82).dimmed());

    let m = &report.metrics;
    for (i, book) in report.books.iter().enumerate() {
        let compound = m.sentiment_compound[i];
        println!(
            "  {:<28} {:>8.2} {:>7.2} {:>8.2} {:>8.2} {:>7.2} {:>9}",
            super::truncate_chars(book, 25),
            m.flesch_reading_ease[i],
            m.flesch_kincaid_grade[i],
            m.avg_sentence_length[i],
            m.avg_word_length[i],
            m.lexical_diversity[i],
            colorize_compound(compound),
        );
    }
    println!();
}

/// Display topics with their top words and each document's mixture.
pub fn display_topics(report: &TopicsReport) {
    println!(
        "\n{}",
        format!("=== Topics (K = {}) ===", report.n_topics).bold()
    );
    println!();

    for topic in &report.topics {
        let members = report
            .document_topics
            .iter()
            .filter(|d| d.dominant_topic == topic.topic_id)
            .count();
        println!(
            "  {} {}",
            format!("Topic {}", topic.topic_id).bold(),
            format!("({members} dominant)").dimmed()
        );
        println!("      {}", topic.words.join(", "));
    }

    println!("\n{}", "Document mixtures:".bold());
    for doc in &report.document_topics {
        let share = doc
            .topic_distribution
            .get(doc.dominant_topic)
            .copied()
            .unwrap_or(0.0);
        println!(
            "  {:<28} topic {:>2} {} {:.2}",
            super::truncate_chars(&doc.book, 25),
            doc.dominant_topic,
            share_bar(share),
            share
        );
    }
    println!();
}

/// Display one document's full record.
pub fn display_record(record: &AnalysisRecord) {
    println!("\n{}", format!("=== {} ===", record.title).bold());

    let s = &record.sentiment;
    println!(
        "  Sentiment: {} (compound {:.3})",
        colorize_label(s.label()),
        s.compound
    );
    println!(
        "    positive {:.3}  |  negative {:.3}  |  neutral {:.3}",
        s.positive, s.negative, s.neutral
    );

    let st = &record.style_metrics;
    println!("  Style:");
    println!(
        "    Flesch reading ease {:.2}  |  Flesch-Kincaid grade {:.2}",
        st.flesch_reading_ease, st.flesch_kincaid_grade
    );
    println!(
        "    {} words ({} unique)  |  {} sentences  |  lexical diversity {:.3}",
        st.total_words, st.unique_words, st.total_sentences, st.lexical_diversity
    );
    println!(
        "    avg sentence length {:.2}  |  avg word length {:.2}",
        st.avg_sentence_length, st.avg_word_length
    );

    if !record.word_frequencies.is_empty() {
        println!("  Most frequent terms:");
        let top: Vec<String> = record
            .word_frequencies
            .iter()
            .take(15)
            .map(|(term, count)| format!("{term} ({count})"))
            .collect();
        println!("    {}", top.join(", ").dimmed());
    }
    println!();
}

/// Horizontal bar for a share in [0, 1].
fn share_bar(share: f64) -> colored::ColoredString {
    let filled = (share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );
    if share >= 0.5 {
        bar.bright_green()
    } else if share >= 0.25 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

fn colorize_compound(compound: f64) -> colored::ColoredString {
    let text = format!("{compound:.3}");
    match SentimentLabel::from_compound(compound) {
        SentimentLabel::Positive => text.green(),
        SentimentLabel::Negative => text.red(),
        SentimentLabel::Neutral => text.normal(),
    }
}

fn colorize_label(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green().bold(),
        SentimentLabel::Negative => label.as_str().red().bold(),
        SentimentLabel::Neutral => label.as_str().dimmed(),
    }
}
