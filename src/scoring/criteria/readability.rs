use crate::scoring::tables::ReadabilityTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX: u32 = 15;
pub const LABEL: &str = "Readability";

/// Words longer than this many characters count as "long" (syllable proxy).
const LONG_WORD_CHARS: usize = 6;

static SENTENCE_SPLIT: OnceLock<Regex> = OnceLock::new();

fn sentence_split() -> &'static Regex {
    SENTENCE_SPLIT.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"))
}

pub(crate) fn sentence_count(text: &str) -> usize {
    sentence_split()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn is_long_word(word: &str) -> bool {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .count()
        > LONG_WORD_CHARS
}

/// Flesch-style reading ease with syllables-per-word approximated as
/// `1 + long_word_ratio`, clamped to `[0, 100]`. Zero words estimate to 0.
pub(crate) fn readability_estimate(words: usize, sentences: usize, long_words: usize) -> f64 {
    if words == 0 {
        return 0.0;
    }
    let avg_sentence_len = words as f64 / sentences.max(1) as f64;
    let syllables_per_word = 1.0 + long_words as f64 / words as f64;
    (206.835 - 1.015 * avg_sentence_len - 84.6 * syllables_per_word).clamp(0.0, 100.0)
}

pub(crate) fn estimate_points(estimate: f64) -> u32 {
    if (60.0..=70.0).contains(&estimate) {
        6
    } else if (50.0..60.0).contains(&estimate) {
        4
    } else if estimate > 70.0 {
        3
    } else {
        1
    }
}

/// `1 - passive_markers / (words / 10)`; `None` when there are no words.
pub(crate) fn active_voice_ratio(text: &str, words: usize, markers: &[&str]) -> Option<f64> {
    if words == 0 {
        return None;
    }
    // markers carry surrounding spaces; pad so they also match at the edges
    let padded = format!(" {} ", text);
    let passive: usize = markers.iter().map(|m| padded.matches(m).count()).sum();
    Some(1.0 - passive as f64 / (words as f64 / 10.0))
}

pub fn evaluate(doc: &ParsedDocument, table: &ReadabilityTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let visible = doc.visible_text();

    let words: Vec<&str> = visible.split_whitespace().collect();
    let sentences = sentence_count(visible);
    let long_words = words.iter().filter(|w| is_long_word(w)).count();

    let estimate = readability_estimate(words.len(), sentences, long_words);
    let points = estimate_points(estimate);
    if points >= 4 {
        result.pass(points, format!("Readability score {:.0} is in the target range", estimate));
    } else {
        result.award(points);
        result.fail(format!("Readability score {:.0} is outside 50-70", estimate));
    }

    let avg_sentence_len = if sentences == 0 {
        0.0
    } else {
        words.len() as f64 / sentences as f64
    };
    if (10.0..=20.0).contains(&avg_sentence_len) {
        result.pass(3, format!("Average sentence length {:.1} words", avg_sentence_len));
    } else {
        result.award(1);
        result.fail(format!(
            "Average sentence length {:.1} words (10-20 recommended)",
            avg_sentence_len
        ));
    }

    let transitions = table.transition_words.count_in(doc.text());
    if transitions >= 3 {
        result.pass(3, format!("{} transition words connect ideas", transitions));
    } else if transitions >= 1 {
        result.award(1);
        result.fail(format!("Only {} transition words (3+ recommended)", transitions));
    } else {
        result.fail("No transition words");
    }

    match active_voice_ratio(doc.text(), words.len(), &table.passive_markers) {
        Some(ratio) if ratio > 0.7 => {
            result.pass(3, format!("Mostly active voice ({:.0}%)", ratio * 100.0))
        }
        Some(ratio) if ratio > 0.5 => {
            result.pass(2, format!("Moderate active voice ({:.0}%)", ratio * 100.0))
        }
        _ => result.fail("Heavy use of passive constructions"),
    }

    result
}
