use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// A fixed vocabulary compiled into a single Aho-Corasick automaton.
///
/// Word entries only count a match when it is not glued to surrounding
/// letters or digits ("ai" does not match inside "said"). Phrase entries are
/// plain substring matches, so entries such as `"by "` or `"[1]"` keep their
/// literal meaning. Input is expected to be lowercase already.
pub struct TermSet {
    terms: Vec<&'static str>,
    matcher: AhoCorasick,
    /// Per entry: whether a match must sit on word boundaries.
    bounded: Vec<bool>,
}

impl TermSet {
    pub fn words(terms: &[&'static str]) -> Self {
        Self::new(terms, &[])
    }

    pub fn phrases(terms: &[&'static str]) -> Self {
        Self::new(&[], terms)
    }

    /// Word entries first, then phrase entries, in one automaton.
    pub fn new(words: &[&'static str], phrases: &[&'static str]) -> Self {
        let terms: Vec<&'static str> = words.iter().chain(phrases).copied().collect();
        let bounded = words
            .iter()
            .map(|_| true)
            .chain(phrases.iter().map(|_| false))
            .collect();
        let matcher = AhoCorasick::new(&terms).expect("valid vocabulary patterns");
        Self {
            terms,
            matcher,
            bounded,
        }
    }

    fn accepts(&self, text: &str, m: &aho_corasick::Match) -> bool {
        !self.bounded[m.pattern().as_usize()] || is_word_bounded(text, m.start(), m.end())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Distinct vocabulary entries present in `text`, in vocabulary order.
    pub fn matched(&self, text: &str) -> Vec<&'static str> {
        let mut hits = BTreeSet::new();
        for m in self.matcher.find_overlapping_iter(text) {
            if self.accepts(text, &m) {
                hits.insert(m.pattern().as_usize());
            }
        }
        hits.into_iter().map(|i| self.terms[i]).collect()
    }

    /// Number of distinct entries present in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.matched(text).len()
    }

    pub fn any_in(&self, text: &str) -> bool {
        self.matcher
            .find_overlapping_iter(text)
            .any(|m| self.accepts(text, &m))
    }
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_respect_boundaries() {
        let set = TermSet::words(&["ai", "machine learning"]);
        assert_eq!(set.count_in("she said the rain was plain"), 0);
        assert_eq!(set.count_in("ai-powered machine learning tools"), 2);
        assert!(set.any_in("what is ai?"));
        assert!(!set.any_in("maintain"));
    }

    #[test]
    fn phrases_match_substrings() {
        let set = TermSet::phrases(&["by ", "[1]"]);
        assert!(set.any_in("standby mode"));
        assert_eq!(set.matched("see [1] and written by bob"), vec!["by ", "[1]"]);
    }

    #[test]
    fn repeated_terms_count_once() {
        let set = TermSet::words(&["data", "cloud"]);
        assert_eq!(set.count_in("data data data"), 1);
        assert_eq!(set.matched("cloud then data"), vec!["data", "cloud"]);
    }

    #[test]
    fn overlapping_entries_both_count() {
        let set = TermSet::phrases(&["table of contents", "contents"]);
        assert_eq!(set.count_in("table of contents"), 2);
    }

    #[test]
    fn mixed_sets_bound_only_word_entries() {
        let set = TermSet::new(&["doi", "cited"], &["doi:", "%"]);
        assert_eq!(set.count_in("we are doing this, excited"), 0);
        assert_eq!(set.matched("doi:10.1/x was cited by 40%"), vec!["doi", "cited", "doi:", "%"]);
        assert!(!set.any_in("antibiotic doings"));
    }

    #[test]
    fn unicode_text_does_not_panic_at_boundaries() {
        let set = TermSet::words(&["ai"]);
        assert!(set.any_in("é ai é"));
        assert!(!set.any_in("éaié"));
    }
}
