use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use distant_reading::config::Config;
use distant_reading::output::{terminal, JsonDirectory, ReportSink};

/// Distant reading: sentiment, style and topic metrics across a small corpus.
///
/// Reads every `.txt` file in the texts directory, analyzes the corpus as a
/// whole, and writes JSON reports for the dashboard.
#[derive(Parser)]
#[command(name = "distant-reading", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the corpus and write the JSON reports
    Analyze {
        /// Directory holding the `.txt` files (default: DISTANT_TEXTS_DIR or ./texts)
        #[arg(long)]
        texts: Option<PathBuf>,

        /// Directory to write reports into (default: DISTANT_OUTPUT_DIR or ./data)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of topics to discover (default: 5)
        #[arg(long)]
        topics: Option<usize>,

        /// Words listed per topic (default: 10)
        #[arg(long)]
        top_words: Option<usize>,

        /// Seed for the topic model (default: 42)
        #[arg(long)]
        seed: Option<u64>,

        /// Topic model passes over the corpus (default: 20)
        #[arg(long)]
        max_iter: Option<usize>,

        /// Number of documents analyzed in parallel (default: all cores)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Show the persisted reports
    Show {
        /// Show one book's full record instead of the corpus overview
        #[arg(long)]
        book: Option<String>,
    },

    /// Show output files and the last run
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("distant_reading=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            texts,
            output,
            topics,
            top_words,
            seed,
            max_iter,
            concurrency,
        } => {
            let mut config = Config::load()?;
            if let Some(texts) = texts {
                config.texts_dir = texts;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(topics) = topics {
                config.n_topics = topics;
            }
            if let Some(top_words) = top_words {
                config.n_top_words = top_words;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(max_iter) = max_iter {
                config.max_iter = max_iter;
            }
            if let Some(concurrency) = concurrency {
                config.concurrency = concurrency;
            }
            config.validate()?;

            println!("Loading texts from {}...", config.texts_dir.display());
            let corpus = distant_reading::corpus::load_corpus(&config.texts_dir)?;
            println!("Analyzing {} texts...", corpus.len());

            let reports = distant_reading::pipeline::run(&corpus, &config)?;

            let sink = JsonDirectory::new(&config.output_dir);
            let written = sink.write(&reports)?;

            terminal::display_run_summary(&reports, &written);
            terminal::display_comparative(&reports.comparative);
            terminal::display_topics(&reports.topics);
            println!(
                "{}",
                "Run `distant-reading show --book <title>` for a single book.".dimmed()
            );
        }

        Commands::Show { book } => {
            let config = Config::load()?;
            let dir = JsonDirectory::new(&config.output_dir);

            match book {
                Some(title) => {
                    let record = dir
                        .load_record(&title)
                        .with_context(|| format!("No record for \"{title}\""))?;
                    terminal::display_record(&record);
                }
                None => {
                    let comparative = dir
                        .load_comparative()
                        .context("No reports yet. Run `distant-reading analyze` first")?;
                    let topics = dir.load_topics()?;
                    terminal::display_comparative(&comparative);
                    terminal::display_topics(&topics);
                }
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            info!(output = %config.output_dir.display(), "Checking status");
            distant_reading::status::show(&config.texts_dir, &config.output_dir)?;
        }
    }

    Ok(())
}
