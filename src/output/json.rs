// JSON report directory: the files the dashboard reads.
//
// Layout of the output directory:
//   all_books.json     every AnalysisRecord
//   <title>.json       one AnalysisRecord per document
//   comparative.json   ComparativeReport
//   topics.json        TopicsReport
//   manifest.json      RunManifest
//
// Writes are staged: every file is serialized into `.staging/` inside the
// output directory first, and only once all of them succeeded are they
// renamed over the live files. A failure while staging leaves the previous
// run's outputs exactly as they were. Once the new files are in place,
// per-book files from documents no longer in the corpus are removed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::pipeline::{AnalysisRecord, ComparativeReport, Reports, RunManifest, TopicsReport};

use super::ReportSink;

pub const ALL_BOOKS_FILE: &str = "all_books.json";
pub const COMPARATIVE_FILE: &str = "comparative.json";
pub const TOPICS_FILE: &str = "topics.json";
pub const MANIFEST_FILE: &str = "manifest.json";

const STAGING_DIR: &str = ".staging";

/// Corpus-level files; a document title may not shadow one of these.
const RESERVED_STEMS: [&str; 4] = ["all_books", "comparative", "topics", "manifest"];

/// Writes reports as pretty-printed JSON into one directory.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    root: PathBuf,
}

impl JsonDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load_records(&self) -> Result<Vec<AnalysisRecord>> {
        read_json(&self.root.join(ALL_BOOKS_FILE))
    }

    /// Load one per-book record. The title must be a bare file stem.
    pub fn load_record(&self, title: &str) -> Result<AnalysisRecord> {
        if title.is_empty() || title == ".." || title.contains(['/', '\\']) {
            bail!("Invalid book title {title:?}: titles cannot contain path separators");
        }
        read_json(&self.root.join(format!("{title}.json")))
    }

    pub fn load_comparative(&self) -> Result<ComparativeReport> {
        read_json(&self.root.join(COMPARATIVE_FILE))
    }

    pub fn load_topics(&self) -> Result<TopicsReport> {
        read_json(&self.root.join(TOPICS_FILE))
    }

    pub fn load_manifest(&self) -> Result<RunManifest> {
        read_json(&self.root.join(MANIFEST_FILE))
    }

    /// Serialize everything into the staging directory. Returns the file
    /// names written, relative to the staging directory.
    fn stage(&self, staging: &Path, reports: &Reports) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for record in &reports.records {
            if RESERVED_STEMS.contains(&record.title.as_str()) {
                warn!(
                    title = %record.title,
                    "Title clashes with a corpus report file, record kept only in all_books.json"
                );
                continue;
            }
            let name = format!("{}.json", record.title);
            write_json(&staging.join(&name), record)?;
            names.push(name);
        }

        write_json(&staging.join(ALL_BOOKS_FILE), &reports.records)?;
        write_json(&staging.join(COMPARATIVE_FILE), &reports.comparative)?;
        write_json(&staging.join(TOPICS_FILE), &reports.topics)?;
        write_json(&staging.join(MANIFEST_FILE), &reports.manifest)?;
        names.extend(
            [ALL_BOOKS_FILE, COMPARATIVE_FILE, TOPICS_FILE, MANIFEST_FILE]
                .iter()
                .map(|s| s.to_string()),
        );

        Ok(names)
    }

    /// Delete `*.json` files left over from an earlier run whose corpus
    /// had documents this one does not.
    fn remove_stale(&self, current: &[String]) -> Result<()> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read {}", self.root.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to read {}", self.root.display()))?
                .path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if current.iter().any(|c| c == name) {
                continue;
            }
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stale {}", path.display()))?;
            debug!(file = %name, "Removed report from a previous run");
        }
        Ok(())
    }
}

impl ReportSink for JsonDirectory {
    fn write(&self, reports: &Reports) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;

        let staging = self.root.join(STAGING_DIR);
        if staging.exists() {
            fs::remove_dir_all(&staging).with_context(|| {
                format!("Failed to clear stale staging directory {}", staging.display())
            })?;
        }
        fs::create_dir(&staging)
            .with_context(|| format!("Failed to create {}", staging.display()))?;

        let names = match self.stage(&staging, reports) {
            Ok(names) => names,
            Err(e) => {
                let _ = fs::remove_dir_all(&staging);
                return Err(e);
            }
        };

        let mut written = Vec::with_capacity(names.len());
        for name in &names {
            let target = self.root.join(name);
            fs::rename(staging.join(name), &target)
                .with_context(|| format!("Failed to move {} into place", target.display()))?;
            written.push(target);
        }
        fs::remove_dir(&staging)
            .with_context(|| format!("Failed to remove {}", staging.display()))?;
        self.remove_stale(&names)?;

        info!(
            files = written.len(),
            dir = %self.root.display(),
            "Reports written"
        );
        Ok(written)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
