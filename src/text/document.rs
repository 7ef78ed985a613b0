// Document: one normalized text, immutable once built.

use std::collections::HashMap;

use indexmap::IndexMap;

/// A normalized document. Fields are private so nothing downstream can
/// change a document after normalization.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    text: String,
    sentences: Vec<String>,
    tokens: Vec<String>,
    terms: Vec<String>,
    word_frequencies: HashMap<String, usize>,
    markers_found: bool,
}

impl Document {
    pub(crate) fn new(
        title: String,
        text: String,
        sentences: Vec<String>,
        tokens: Vec<String>,
        terms: Vec<String>,
        markers_found: bool,
    ) -> Self {
        let mut word_frequencies = HashMap::new();
        for term in &terms {
            *word_frequencies.entry(term.clone()).or_insert(0) += 1;
        }

        Self {
            title,
            text,
            sentences,
            tokens,
            terms,
            word_frequencies,
            markers_found,
        }
    }

    /// Stable identity of the document (the file stem).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Boilerplate-stripped, whitespace-collapsed text in its original case.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sentences in their original case.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Every lowercase alphabetic word, stopwords included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Lowercase words with stopwords and short words removed.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Term counts over the filtered term stream.
    pub fn word_frequencies(&self) -> &HashMap<String, usize> {
        &self.word_frequencies
    }

    pub fn markers_found(&self) -> bool {
        self.markers_found
    }

    /// The `n` most frequent terms, by count descending then term ascending.
    pub fn top_frequencies(&self, n: usize) -> IndexMap<String, usize> {
        let mut ranked: Vec<(&String, &usize)> = self.word_frequencies.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .take(n)
            .map(|(term, count)| (term.clone(), *count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_terms(terms: &[&str]) -> Document {
        let terms: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        Document::new(
            "test".to_string(),
            String::new(),
            vec![],
            terms.clone(),
            terms,
            true,
        )
    }

    #[test]
    fn test_top_frequencies_ranked_with_ties_by_term() {
        let doc = doc_with_terms(&["stone", "arch", "stone", "wall", "arch", "column"]);
        let top = doc.top_frequencies(3);
        let keys: Vec<&str> = top.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["arch", "stone", "column"]);
        assert_eq!(top["arch"], 2);
    }

    #[test]
    fn test_top_frequencies_larger_than_vocabulary() {
        let doc = doc_with_terms(&["stone"]);
        assert_eq!(doc.top_frequencies(50).len(), 1);
    }
}
