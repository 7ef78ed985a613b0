// Domain errors for the analysis pipeline.
//
// Everything here is fatal for a run: per-document problems (missing
// boilerplate markers, empty texts) are logged and degraded instead, and
// never surface as a PipelineError. Application plumbing (IO, JSON, CLI)
// stays on anyhow; these variants travel through anyhow::Error and callers
// recover the kind with `downcast_ref::<PipelineError>()`.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal, corpus-wide failures. Any of these aborts the run before output
/// is written.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// A configuration value is out of range (zero topics, max_df > 1, ...).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No `*.txt` files were found in the texts directory.
    #[error("No texts found in {}", .0.display())]
    EmptyCorpus(PathBuf),

    /// Document-frequency filtering removed every term.
    #[error(
        "Vocabulary is empty after filtering {documents} documents \
         (min_df={min_df}, max_df={max_df})"
    )]
    EmptyVocabulary {
        documents: usize,
        min_df: usize,
        max_df: f64,
    },

    /// The vocabulary is too small to separate topics.
    #[error("Vocabulary of {size} term(s) is too small for topic modeling")]
    DegenerateVocabulary { size: usize },

    /// More topics were requested than there are documents.
    #[error("Requested {requested} topics but the corpus has only {documents} documents")]
    TooManyTopics { requested: usize, documents: usize },

    /// Sub-results disagree on the number of documents.
    #[error("Assembly mismatch: {what} has {found} entries, expected {expected}")]
    AssemblyMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl PipelineError {
    /// True for the configuration class of errors (as opposed to assembly
    /// contract breaches).
    pub fn is_configuration(&self) -> bool {
        !matches!(self, PipelineError::AssemblyMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_mismatch_is_not_configuration() {
        let err = PipelineError::AssemblyMismatch {
            what: "sentiment scores",
            expected: 5,
            found: 4,
        };
        assert!(!err.is_configuration());
        assert!(PipelineError::DegenerateVocabulary { size: 1 }.is_configuration());
    }

    #[test]
    fn test_error_messages_name_the_numbers() {
        let err = PipelineError::TooManyTopics {
            requested: 10,
            documents: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains('5'));
    }
}
