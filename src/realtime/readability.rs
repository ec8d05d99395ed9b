//! Coarse French-adapted Flesch reading ease. Stable and deterministic, not
//! linguistically accurate.

use super::types::ReadabilityReport;
use crate::text::words;

const VOWELS: &str = "aeiouyàâäéèêëîïôöùûüÿœæ";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Vowel groups, minus a trailing silent `e`, never below one.
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if word.is_empty() {
        return 0;
    }

    let mut groups = 0;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    if groups > 1 && word.ends_with('e') {
        groups -= 1;
    }
    groups.max(1)
}

pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| words(s).next().is_some())
        .count()
}

pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let tokens: Vec<&str> = words(text).collect();
    if tokens.is_empty() {
        return ReadabilityReport::default();
    }

    let word_count = tokens.len() as f64;
    let sentence_count = count_sentences(text).max(1);
    let syllables: usize = tokens.iter().map(|w| count_syllables(w).max(1)).sum();

    let avg_sentence_length = word_count / sentence_count as f64;
    let avg_syllables_per_word = syllables as f64 / word_count;
    let flesch = 207.0 - 1.015 * avg_sentence_length - 73.6 * avg_syllables_per_word;

    ReadabilityReport {
        flesch_score: flesch.clamp(0.0, 100.0),
        sentence_count,
        avg_sentence_length,
        avg_syllables_per_word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("chat", 1)]
    #[case("maison", 2)]
    #[case("table", 1)]
    #[case("le", 1)]
    #[case("élégant", 3)]
    #[case("oiseau", 2)]
    #[case("123", 0)]
    fn syllables(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[test]
    fn sentences_ignore_empty_segments() {
        assert_eq!(count_sentences("Bonjour. Ça va ?! Oui..."), 3);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(analyze_readability("").flesch_score, 0.0);
    }

    #[test]
    fn short_simple_sentences_read_easily() {
        let r = analyze_readability("Le chat dort. Le chien court. Il fait beau.");
        assert_eq!(r.sentence_count, 3);
        assert!(r.flesch_score > 80.0, "got {}", r.flesch_score);
    }

    #[test]
    fn score_is_clamped() {
        let long = "anticonstitutionnellement ".repeat(60);
        assert_eq!(analyze_readability(&long).flesch_score, 0.0);
    }
}
