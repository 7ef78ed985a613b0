// Corpus vectorizer: builds the TF-IDF weighted document-term matrix.
//
// Each cell is the raw term count in the document times the term's
// smoothed IDF, so terms shared by most of the corpus weigh less than
// terms distinctive to a few documents. The topic model only ever reads
// the matrix.

use crate::error::PipelineError;

use super::vocabulary::{Vocabulary, VocabularyParams};

/// Dense row-major matrix: one row per document, one column per term.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTermMatrix {
    n_documents: usize,
    n_terms: usize,
    data: Vec<f64>,
}

impl DocumentTermMatrix {
    /// Build from row-major data. Every row must have as many columns as
    /// the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, PipelineError> {
        let n_documents = rows.len();
        let n_terms = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(ragged) = rows.iter().find(|r| r.len() != n_terms) {
            return Err(PipelineError::AssemblyMismatch {
                what: "matrix row",
                expected: n_terms,
                found: ragged.len(),
            });
        }
        Ok(Self {
            n_documents,
            n_terms,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    pub fn get(&self, document: usize, term: usize) -> f64 {
        self.data[document * self.n_terms + term]
    }

    pub fn row(&self, document: usize) -> &[f64] {
        let start = document * self.n_terms;
        &self.data[start..start + self.n_terms]
    }

    /// Non-zero (column, weight) pairs of one row.
    pub fn nonzero(&self, document: usize) -> Vec<(usize, f64)> {
        self.row(document)
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0.0)
            .map(|(col, &w)| (col, w))
            .collect()
    }
}

/// Weight every document against a frozen vocabulary.
pub fn vectorize(documents: &[&[String]], vocabulary: &Vocabulary) -> DocumentTermMatrix {
    let n_terms = vocabulary.len();
    let mut data = vec![0.0; documents.len() * n_terms];

    for (row, terms) in documents.iter().enumerate() {
        for term in terms.iter() {
            if let Some(col) = vocabulary.column(term) {
                data[row * n_terms + col] += 1.0;
            }
        }
        for col in 0..n_terms {
            data[row * n_terms + col] *= vocabulary.idf(col);
        }
    }

    DocumentTermMatrix {
        n_documents: documents.len(),
        n_terms,
        data,
    }
}

/// Build the vocabulary and the weighted matrix in one step.
pub fn fit_transform(
    documents: &[&[String]],
    params: &VocabularyParams,
) -> Result<(Vocabulary, DocumentTermMatrix), PipelineError> {
    let vocabulary = Vocabulary::build(documents, params)?;
    let matrix = vectorize(documents, &vocabulary);
    Ok((vocabulary, matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_weights_are_count_times_idf() {
        let docs = [terms("arch arch stone"), terms("arch"), terms("stone wall")];
        let refs: Vec<&[String]> = docs.iter().map(|d| d.as_slice()).collect();
        let params = VocabularyParams {
            min_df: 1,
            max_df: 1.0,
            max_features: 10,
        };
        let (vocab, dtm) = fit_transform(&refs, &params).unwrap();

        assert_eq!(dtm.n_documents(), 3);
        assert_eq!(dtm.n_terms(), 3);
        let arch = vocab.column("arch").unwrap();
        let wall = vocab.column("wall").unwrap();
        assert!((dtm.get(0, arch) - 2.0 * vocab.idf(arch)).abs() < 1e-12);
        assert_eq!(dtm.get(1, wall), 0.0);
        assert_eq!(dtm.nonzero(1), vec![(arch, vocab.idf(arch))]);
    }

    #[test]
    fn test_out_of_vocabulary_terms_ignored() {
        let docs = [terms("arch stone"), terms("arch stone"), terms("lonely")];
        let refs: Vec<&[String]> = docs.iter().map(|d| d.as_slice()).collect();
        let (_, dtm) = fit_transform(&refs, &VocabularyParams::default()).unwrap();
        assert!(dtm.row(2).iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_from_rows_shape() {
        let dtm = DocumentTermMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap();
        assert_eq!(dtm.n_documents(), 2);
        assert_eq!(dtm.get(1, 1), 2.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = DocumentTermMatrix::from_rows(vec![vec![1.0, 0.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::AssemblyMismatch {
                what: "matrix row",
                expected: 2,
                found: 1
            }
        );
    }
}
