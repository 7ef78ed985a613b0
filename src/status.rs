// System status display: shows the output files and the last run.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::output::json::{
    JsonDirectory, ALL_BOOKS_FILE, COMPARATIVE_FILE, MANIFEST_FILE, TOPICS_FILE,
};

/// Display system status to the terminal.
pub fn show(texts_dir: &Path, output_dir: &Path) -> Result<()> {
    let text_count = fs::read_dir(texts_dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("txt"))
                .count()
        })
        .ok();
    match text_count {
        Some(n) => println!("Texts: {} ({} .txt files)", texts_dir.display(), n),
        None => println!("Texts: {} (not found)", texts_dir.display()),
    }

    if !output_dir.exists() {
        println!("Output: not generated yet");
        println!("\nRun `distant-reading analyze` to produce the reports.");
        return Ok(());
    }
    println!("Output: {}", output_dir.display());

    for name in [ALL_BOOKS_FILE, COMPARATIVE_FILE, TOPICS_FILE, MANIFEST_FILE] {
        let path = output_dir.join(name);
        match fs::metadata(&path) {
            Ok(meta) => {
                let modified = meta
                    .modified()
                    .map(|t| {
                        DateTime::<Local>::from(t)
                            .format("%Y-%m-%d %H:%M:%S")
                            .to_string()
                    })
                    .unwrap_or_else(|_| "unknown".to_string());
                println!(
                    "  {:<18} {:>10}  {}",
                    name,
                    format_bytes(meta.len()),
                    modified
                );
            }
            Err(_) => println!("  {:<18} {:>10}", name, "missing"),
        }
    }

    match JsonDirectory::new(output_dir).load_manifest() {
        Ok(manifest) => {
            println!(
                "Last run: {} ({} documents, {} topics, seed {})",
                manifest.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                manifest.documents.len(),
                manifest.n_topics,
                manifest.seed
            );
            println!(
                "  Vocabulary: {} terms, {} LDA passes",
                manifest.vocabulary_size, manifest.iterations
            );
            if !manifest.missing_markers.is_empty() {
                println!(
                    "  Missing boilerplate markers: {}",
                    manifest.missing_markers.join(", ")
                );
            }
        }
        Err(_) => println!("Last run: no manifest found"),
    }

    Ok(())
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
