// Normalizer: turns raw Gutenberg text into a Document.
//
// Project Gutenberg files wrap the work in a licence header and footer,
// delimited by "*** START OF THE PROJECT GUTENBERG EBOOK ... ***" and
// "*** END OF THE PROJECT GUTENBERG EBOOK ... ***". We keep only what sits
// between them. A text without markers is processed whole and flagged; that
// is a logged degradation, never a failure.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::warn;

use super::document::Document;
use super::tokenize;

/// Regex patterns delimiting the body of a text.
#[derive(Debug, Clone)]
pub struct BoilerplateMarkers {
    pub start: String,
    pub end: String,
}

impl Default for BoilerplateMarkers {
    /// The Project Gutenberg header/footer delimiters.
    fn default() -> Self {
        Self {
            start: r"(?i)\*\*\*\s*START OF (?:THE|THIS) PROJECT GUTENBERG E-?BOOK[^*]*\*\*\*"
                .to_string(),
            end: r"(?i)\*\*\*\s*END OF (?:THE|THIS) PROJECT GUTENBERG E-?BOOK[^*]*\*\*\*"
                .to_string(),
        }
    }
}

/// The body of a text after marker stripping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stripped<'a> {
    pub body: &'a str,
    /// Both the start and end markers were present
    pub markers_found: bool,
}

/// Shared, read-only text normalizer. Safe to use from many threads.
pub struct Normalizer {
    start: Regex,
    end: Regex,
    /// Any leftover `*** ... ***` banner on a single line
    banner: Regex,
    whitespace: Regex,
    stopwords: HashSet<String>,
    min_term_length: usize,
}

impl Normalizer {
    /// Build a normalizer with custom markers.
    pub fn new(markers: &BoilerplateMarkers, min_term_length: usize) -> Result<Self> {
        let start = Regex::new(&markers.start)
            .with_context(|| format!("Invalid start marker pattern: {}", markers.start))?;
        let end = Regex::new(&markers.end)
            .with_context(|| format!("Invalid end marker pattern: {}", markers.end))?;

        Ok(Self {
            start,
            end,
            banner: Regex::new(r"\*\*\*[^\n*]*\*\*\*")?,
            whitespace: Regex::new(r"\s+")?,
            stopwords: get(LANGUAGE::English).into_iter().collect(),
            min_term_length,
        })
    }

    /// Normalizer using the Project Gutenberg markers.
    pub fn gutenberg(min_term_length: usize) -> Result<Self> {
        Self::new(&BoilerplateMarkers::default(), min_term_length)
    }

    /// Cut the text down to what lies between the start and end markers.
    ///
    /// Whatever marker is present is still honoured; `markers_found` is only
    /// true when both are.
    pub fn strip_boilerplate<'a>(&self, text: &'a str) -> Stripped<'a> {
        let start_match = self.start.find(text);
        let body_start = start_match.map(|m| m.end()).unwrap_or(0);

        let end_match = self.end.find(&text[body_start..]);
        let body_end = end_match
            .map(|m| body_start + m.start())
            .unwrap_or(text.len());

        Stripped {
            body: &text[body_start..body_end],
            markers_found: start_match.is_some() && end_match.is_some(),
        }
    }

    /// Remove leftover banners and collapse whitespace runs.
    pub fn clean(&self, body: &str) -> String {
        let without_banners = self.banner.replace_all(body, " ");
        self.whitespace
            .replace_all(&without_banners, " ")
            .trim()
            .to_string()
    }

    /// Whether a lowercase word belongs in the filtered term stream.
    pub fn is_term(&self, word: &str) -> bool {
        word.chars().count() >= self.min_term_length && !self.stopwords.contains(word)
    }

    /// Normalize one raw text into a Document.
    pub fn normalize(&self, title: &str, raw: &str) -> Document {
        let stripped = self.strip_boilerplate(raw);
        if !stripped.markers_found {
            warn!(
                title = %title,
                "Boilerplate markers not found, processing the full text"
            );
        }

        let text = self.clean(stripped.body);
        let sentences = tokenize::sentences(&text);
        let tokens = tokenize::words(&text);
        let terms: Vec<String> = tokens.iter().filter(|w| self.is_term(w)).cloned().collect();

        Document::new(
            title.to_string(),
            text,
            sentences,
            tokens,
            terms,
            stripped.markers_found,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUTENBERG: &str = "The Project Gutenberg eBook of Something\n\
        Licence text here.\n\
        *** START OF THE PROJECT GUTENBERG EBOOK THE SEVEN LAMPS ***\n\
        The lamp of sacrifice.\n\n   The lamp of truth.\n\
        *** END OF THE PROJECT GUTENBERG EBOOK THE SEVEN LAMPS ***\n\
        More licence text.";

    #[test]
    fn test_strip_between_markers() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let stripped = normalizer.strip_boilerplate(GUTENBERG);
        assert!(stripped.markers_found);
        assert!(stripped.body.contains("lamp of sacrifice"));
        assert!(!stripped.body.contains("Licence"));
        assert!(!stripped.body.contains("More licence"));
    }

    #[test]
    fn test_missing_markers_keeps_full_text() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let raw = "No markers at all. Just prose.";
        let stripped = normalizer.strip_boilerplate(raw);
        assert!(!stripped.markers_found);
        assert_eq!(stripped.body, raw);
    }

    #[test]
    fn test_only_start_marker_is_partial() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let raw = "Header\n*** START OF THIS PROJECT GUTENBERG EBOOK X ***\nBody text.";
        let stripped = normalizer.strip_boilerplate(raw);
        assert!(!stripped.markers_found);
        assert_eq!(stripped.body.trim(), "Body text.");
    }

    #[test]
    fn test_clean_collapses_whitespace_and_banners() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let cleaned = normalizer.clean("  One\n\n two\t*** a banner *** three  ");
        assert_eq!(cleaned, "One two three");
    }

    #[test]
    fn test_scene_breaks_keep_the_text_between_them() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let raw = "*** START OF THE PROJECT GUTENBERG EBOOK NAVE ***\n\
            Chapter one ends here.\n\n***\n\n\
            The whole second chapter about cathedrals lives here.\n\n***\n\n\
            Chapter three.\n\
            *** END OF THE PROJECT GUTENBERG EBOOK NAVE ***";
        let doc = normalizer.normalize("nave", raw);
        assert!(doc.text().contains("second chapter about cathedrals"));
        assert!(doc.text().starts_with("Chapter one ends here."));
        assert!(doc.text().ends_with("Chapter three."));
        assert_eq!(doc.word_frequencies()["cathedrals"], 1);
    }

    #[test]
    fn test_normalize_filters_terms_but_keeps_tokens() {
        let normalizer = Normalizer::gutenberg(4).unwrap();
        let doc = normalizer.normalize("lamps", GUTENBERG);
        assert_eq!(doc.sentences().len(), 2);
        assert_eq!(doc.tokens().len(), 8);
        // "the" and "of" are stopwords, "lamp" is kept
        assert!(doc.terms().iter().all(|t| t != "the" && t != "of"));
        assert_eq!(doc.word_frequencies()["lamp"], 2);
        assert!(doc.markers_found());
    }
}
