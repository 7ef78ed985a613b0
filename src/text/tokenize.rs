// Word and sentence tokenization.
//
// Words are maximal runs of alphabetic characters. Sentences end at a run
// of `.`, `!` or `?` (plus any closing quotes or brackets) that is followed
// by whitespace or the end of the text, unless the next word starts
// lowercase or the period closes a known abbreviation or initial.

/// Abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "hon", "gen", "col", "capt", "lt",
    "sgt", "vol", "vols", "no", "fig", "figs", "pl", "ch", "chap", "p", "pp", "ed", "eds", "etc",
    "viz", "cf", "vs", "ibid", "e.g", "i.e", "ft", "yd", "sq", "co", "bros", "mt",
];

/// Characters that may trail sentence punctuation and still belong to the
/// sentence (closing quotes and brackets).
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into lowercase alphabetic words.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Split text into sentences, preserving the original case and punctuation.
///
/// Fragments without any alphanumeric character (a stray "..." or "*")
/// are dropped.
pub fn sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut result = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        // Consume the whole terminator run and any closers after it.
        let run_start = i;
        while i < chars.len() && is_terminator(chars[i].1) {
            i += 1;
        }
        let single_period = i - run_start == 1 && c == '.';
        while i < chars.len() && is_closer(chars[i].1) {
            i += 1;
        }

        let at_boundary = i >= chars.len() || chars[i].1.is_whitespace();
        if !at_boundary {
            continue;
        }

        // A sentence never starts lowercase ("marble!" he said).
        let next_is_lowercase = chars[i..]
            .iter()
            .map(|(_, c)| *c)
            .find(|c| !c.is_whitespace())
            .is_some_and(char::is_lowercase);
        if next_is_lowercase {
            continue;
        }

        let end = chars.get(i).map(|(idx, _)| *idx).unwrap_or(text.len());
        if single_period && ends_with_abbreviation(&text[start..chars[run_start].0]) {
            continue;
        }

        push_sentence(&mut result, &text[start..end]);
        start = end;
    }

    if start < text.len() {
        push_sentence(&mut result, &text[start..]);
    }

    result
}

fn push_sentence(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed.to_string());
    }
}

/// Whether the text immediately before a period is an abbreviation or a
/// single-letter initial ("J. Ruskin").
fn ends_with_abbreviation(before_period: &str) -> bool {
    let last = before_period
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if last.is_empty() {
        return false;
    }

    // "I." is the pronoun, never an initial
    let mut letters = last.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        return first.is_uppercase() && first != 'I';
    }

    let lower = last.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
