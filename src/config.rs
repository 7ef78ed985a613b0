use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::error::PipelineError;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default, so a bare `distant-reading analyze` works against
/// `./texts` and writes to `./data`. CLI flags override what is loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the raw `*.txt` files
    pub texts_dir: PathBuf,
    /// Directory the JSON reports are written to
    pub output_dir: PathBuf,
    /// Number of latent topics (K)
    pub n_topics: usize,
    /// Terms listed per topic (N)
    pub n_top_words: usize,
    /// Word-frequency entries kept per document record
    pub top_frequencies: usize,
    /// Shortest word kept in the filtered term stream
    pub min_term_length: usize,
    /// Minimum number of documents a term must occur in
    pub min_df: usize,
    /// Maximum share of documents a term may occur in (0.0 - 1.0]
    pub max_df: f64,
    /// Cap on the vocabulary size
    pub max_features: usize,
    /// Outer variational iterations for the topic model
    pub max_iter: usize,
    /// Seed for the topic model initialization
    pub seed: u64,
    /// Worker threads for the per-document phase
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            texts_dir: PathBuf::from("texts"),
            output_dir: PathBuf::from("data"),
            n_topics: 5,
            n_top_words: 10,
            top_frequencies: 50,
            min_term_length: 4,
            min_df: 2,
            max_df: 0.95,
            max_features: 1000,
            max_iter: 20,
            seed: 42,
            concurrency: default_concurrency(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            texts_dir: env::var("DISTANT_TEXTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.texts_dir),
            output_dir: env::var("DISTANT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            n_topics: parse_var("DISTANT_TOPICS", defaults.n_topics)?,
            n_top_words: parse_var("DISTANT_TOP_WORDS", defaults.n_top_words)?,
            top_frequencies: parse_var("DISTANT_TOP_FREQUENCIES", defaults.top_frequencies)?,
            min_term_length: parse_var("DISTANT_MIN_TERM_LENGTH", defaults.min_term_length)?,
            min_df: parse_var("DISTANT_MIN_DF", defaults.min_df)?,
            max_df: parse_var("DISTANT_MAX_DF", defaults.max_df)?,
            max_features: parse_var("DISTANT_MAX_FEATURES", defaults.max_features)?,
            max_iter: parse_var("DISTANT_MAX_ITER", defaults.max_iter)?,
            seed: parse_var("DISTANT_SEED", defaults.seed)?,
            concurrency: parse_var("DISTANT_CONCURRENCY", defaults.concurrency)?,
        })
    }

    /// Reject values that would make the run meaningless.
    ///
    /// Corpus-dependent checks (topics vs. document count, vocabulary size)
    /// happen later, once the corpus is known.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let invalid = |msg: String| Err(PipelineError::InvalidConfig(msg));

        if self.n_topics == 0 {
            return invalid("topic count must be at least 1".to_string());
        }
        if self.n_top_words == 0 {
            return invalid("top words per topic must be at least 1".to_string());
        }
        if self.min_df == 0 {
            return invalid("min_df must be at least 1".to_string());
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return invalid(format!("max_df must be in (0, 1], got {}", self.max_df));
        }
        if self.max_features == 0 {
            return invalid("max_features must be at least 1".to_string());
        }
        if self.max_iter == 0 {
            return invalid("max_iter must be at least 1".to_string());
        }
        if self.concurrency == 0 {
            return invalid("concurrency must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Parse an optional env var, keeping the default when it is unset.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_topics_rejected() {
        let config = Config {
            n_topics: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_max_df_out_of_range_rejected() {
        for max_df in [0.0, 1.5, f64::NAN] {
            let config = Config {
                max_df,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "max_df={max_df} should fail");
        }
    }
}
