// Sentiment scoring: trait-based abstraction over a polarity scorer.
//
// The SentimentScorer trait defines the interface; LexiconScorer is the
// rule-based default. Scoring operates on original-case full sentences,
// never on the stopword-filtered term stream.

pub mod lexicon;
pub mod rules;
pub mod traits;

pub use rules::LexiconScorer;
pub use traits::{SentimentLabel, SentimentScore, SentimentScorer};
