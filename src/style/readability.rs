// Readability formulas and the syllable counter they depend on.
//
// Flesch reading ease:   206.835 - 1.015 * (W / S) - 84.6 * (Syl / W)
// Flesch-Kincaid grade:  0.39 * (W / S) + 11.8 * (Syl / W) - 15.59
//
// Callers guarantee W > 0 and S > 0; the style engine handles empty
// documents before reaching these functions.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Heuristic English syllable count.
///
/// Counts vowel groups, then drops a silent final `e` (but not the `le` in
/// "table") and the silent `ed` in "loved" (but not in "wanted"). Every
/// word has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if chars.is_empty() {
        return 0;
    }
    if chars.len() <= 3 {
        return 1;
    }

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    let n = chars.len();
    let last = chars[n - 1];
    let second_last = chars[n - 2];
    let third_last = chars[n - 3];

    if groups > 1 {
        if last == 'e' && !is_vowel(second_last) {
            let consonant_le = second_last == 'l' && !is_vowel(third_last);
            if !consonant_le {
                groups -= 1;
            }
        } else if last == 'd' && second_last == 'e' && !matches!(third_last, 't' | 'd') {
            groups -= 1;
        }
    }

    groups.max(1)
}

/// Total syllables over a token stream.
pub fn total_syllables(tokens: &[String]) -> usize {
    tokens.iter().map(|t| count_syllables(t)).sum()
}

pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

pub fn flesch_kincaid_grade(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
}
