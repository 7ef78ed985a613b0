// Sentiment scorer trait and the score it produces.
//
// The default implementation is the lexicon/rule-based LexiconScorer. The
// trait keeps the pipeline independent of it, so a different polarity
// model can be dropped in without touching aggregation or output.

use serde::{Deserialize, Serialize};

/// Compound score at or above which a text reads as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a text reads as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Polarity proportions plus a normalized compound score.
///
/// `positive + negative + neutral` is 1 (within float tolerance) and
/// `compound` lies in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classify a compound score.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SentimentScore {
    /// A fully neutral score, used for texts with nothing to score.
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_compound(self.compound)
    }

    /// Mean of several scores. Proportions that each sum to one still sum
    /// to one after averaging. Returns the neutral score for an empty slice.
    pub fn mean(scores: &[SentimentScore]) -> Self {
        if scores.is_empty() {
            return Self::neutral();
        }
        let n = scores.len() as f64;
        Self {
            positive: scores.iter().map(|s| s.positive).sum::<f64>() / n,
            negative: scores.iter().map(|s| s.negative).sum::<f64>() / n,
            neutral: scores.iter().map(|s| s.neutral).sum::<f64>() / n,
            compound: scores.iter().map(|s| s.compound).sum::<f64>() / n,
        }
    }
}

/// Trait for polarity scoring. Implementations must be deterministic: the
/// same text always yields the same score.
pub trait SentimentScorer: Send + Sync {
    /// Score one sentence. Returns None when the sentence holds nothing
    /// scorable (no words).
    fn score_sentence(&self, sentence: &str) -> Option<SentimentScore>;

    /// Score a document as the mean of its scorable sentences.
    fn score_document(&self, sentences: &[String]) -> SentimentScore {
        let scores: Vec<SentimentScore> = sentences
            .iter()
            .filter_map(|s| self.score_sentence(s))
            .collect();
        SentimentScore::mean(&scores)
    }
}
