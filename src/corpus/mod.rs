// Corpus loader: reads the raw texts the pipeline runs over.
//
// Every `*.txt` file directly inside the texts directory is one document,
// keyed by its file stem. Bytes that are not valid UTF-8 are replaced rather
// than rejected, since older Gutenberg transcriptions are not always clean.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::error::PipelineError;

/// One unprocessed text and its title key.
#[derive(Debug, Clone, PartialEq)]
pub struct RawText {
    pub title: String,
    pub text: String,
}

impl RawText {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Read every `*.txt` file in `dir` (non-recursive), sorted by title.
///
/// A directory with no texts is a `PipelineError::EmptyCorpus`.
pub fn load_corpus(dir: &Path) -> Result<Vec<RawText>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read texts directory {}", dir.display()))?;

    let mut texts = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(title) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(title, bytes = bytes.len(), "Loaded text");
        texts.push(RawText::new(title, String::from_utf8_lossy(&bytes)));
    }

    if texts.is_empty() {
        return Err(PipelineError::EmptyCorpus(dir.to_path_buf()).into());
    }

    texts.sort_by(|a, b| a.title.cmp(&b.title));
    info!(documents = texts.len(), dir = %dir.display(), "Loaded corpus");
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_txt_files_sorted_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("walden.txt"), "Woods.").unwrap();
        fs::write(dir.path().join("emma.txt"), "Highbury.").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let texts = load_corpus(dir.path()).unwrap();
        let titles: Vec<&str> = texts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["emma", "walden"]);
        assert_eq!(texts[1].text, "Woods.");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("odd.txt"), b"caf\xff stone").unwrap();
        let texts = load_corpus(dir.path()).unwrap();
        assert!(texts[0].text.starts_with("caf"));
        assert!(texts[0].text.ends_with(" stone"));
    }

    #[test]
    fn test_empty_directory_is_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptyCorpus(_))
        ));
    }
}
