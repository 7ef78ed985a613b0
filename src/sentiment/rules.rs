// Lexicon/rule-based sentence scorer (VADER-style).
//
// Per sentence:
// 1. look up each word's valence in the lexicon;
// 2. adjust for booster words up to three places before it (with distance
//    decay), negations in the same window, and ALL-CAPS emphasis;
// 3. weight words before "but" by 0.5 and after it by 1.5;
// 4. add exclamation / question-mark emphasis;
// 5. compound = s / sqrt(s^2 + 15), which is bounded in [-1, 1] however
//    many words contribute.
// The positive / negative / neutral proportions come from the per-word
// valence mass, so they always sum to one.

use std::collections::{HashMap, HashSet};

use super::lexicon::{
    BOOSTERS, CAPS_INCREMENT, NEGATIONS, NEGATION_SCALAR, NORMALIZATION_ALPHA, VALENCES,
};
use super::traits::{SentimentScore, SentimentScorer};

/// Lookback window for boosters and negations.
const WINDOW: usize = 3;

/// Stateless lexicon scorer. Build once and share across threads.
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score_sentence(&self, sentence: &str) -> Option<SentimentScore> {
        let words = split_words(sentence);
        if words.is_empty() {
            return None;
        }

        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let caps_differential = has_caps_differential(&words);

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(i, &words, &lower, caps_differential))
            .collect();

        apply_but_contrast(&lower, &mut sentiments);

        Some(summarize(&sentiments, punctuation_emphasis(sentence)))
    }
}

impl LexiconScorer {
    /// Valence of the word at `i`, after boosters, negation and caps.
    fn word_valence(
        &self,
        i: usize,
        words: &[&str],
        lower: &[String],
        caps_differential: bool,
    ) -> f64 {
        let word = lower[i].as_str();

        if self.boosters.contains_key(word) {
            return 0.0;
        }
        // "kind of" is a hedge, not kindness
        if word == "kind" && lower.get(i + 1).map(String::as_str) == Some("of") {
            return 0.0;
        }

        let Some(&base) = self.valences.get(word) else {
            return 0.0;
        };

        let mut valence = base;
        if caps_differential && is_all_caps(words[i]) {
            valence += CAPS_INCREMENT * valence.signum();
        }

        for distance in 1..=WINDOW.min(i) {
            let prev = lower[i - distance].as_str();
            if !self.valences.contains_key(prev) {
                let decay = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += decay
                    * self.booster_scalar(prev, words[i - distance], valence, caps_differential);
            }
            if self.is_negation(prev) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    /// Booster contribution of `word` toward a valence of the given sign.
    fn booster_scalar(&self, word: &str, original: &str, valence: f64, caps: bool) -> f64 {
        let Some(&scalar) = self.boosters.get(word) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -scalar } else { scalar };
        if caps && is_all_caps(original) {
            scalar += CAPS_INCREMENT * valence.signum();
        }
        scalar
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't") || word.contains("n\u{2019}t")
    }
}

/// Whitespace-separated words with surrounding punctuation removed.
fn split_words(sentence: &str) -> Vec<&str> {
    sentence
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '\u{2019}'))
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '\u{2019}'))
        .filter(|w| w.chars().any(char::is_alphabetic))
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

/// Emphasis only counts when some, but not all, words are shouted.
fn has_caps_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

fn apply_but_contrast(lower: &[String], sentiments: &mut [f64]) {
    let Some(but) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < but {
            *s *= 0.5;
        } else if i > but {
            *s *= 1.5;
        }
    }
}

/// Extra intensity from "!" (up to four) and repeated "?".
fn punctuation_emphasis(sentence: &str) -> f64 {
    let exclamations = sentence.chars().filter(|&c| c == '!').count().min(4) as f64 * 0.292;
    let questions = sentence.chars().filter(|&c| c == '?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + question_emphasis
}

/// Map an unbounded valence sum into [-1, 1].
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn summarize(sentiments: &[f64], emphasis: f64) -> SentimentScore {
    let sum: f64 = sentiments.iter().sum();
    let compound = if sum == 0.0 {
        0.0
    } else {
        normalize(sum + emphasis * sum.signum())
    };

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            positive_sum += s + 1.0;
        } else if s < 0.0 {
            negative_sum += s - 1.0;
        } else {
            neutral_count += 1.0;
        }
    }

    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count;
    SentimentScore {
        positive: (positive_sum / total).abs(),
        negative: (negative_sum / total).abs(),
        neutral: (neutral_count / total).abs(),
        compound,
    }
}
