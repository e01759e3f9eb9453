use crate::candidate::Candidate;
use crate::trie::Trie;

/// All dictionary words tied at the minimum edit distance from the query.
#[derive(Debug)]
pub struct Matches {
    pub distance: usize,
    pub candidates: Vec<Candidate>,
}

/// Scans end-of-word nodes at increasing distance thresholds and stops at
/// the first threshold that yields any match, reporting every word tied at
/// that distance in trie-traversal order.
///
/// Thresholds only run up to `query_len - 1`: a word further away than that
/// produces no suggestion at all, and `None` is returned.
pub fn best_matches(trie: &Trie) -> Option<Matches> {
    let query_len = trie.query_len();
    if query_len == 0 {
        return None;
    }

    for threshold in 0..query_len {
        let candidates = matches_at(trie, threshold);
        if !candidates.is_empty() {
            return Some(Matches {
                distance: threshold,
                candidates,
            });
        }
    }

    None
}

fn matches_at(trie: &Trie, threshold: usize) -> Vec<Candidate> {
    let last = trie.query_len() - 1;
    let mut found = Vec::new();

    trie.walk(|index, node| {
        if node.eow && node.row[last] == threshold {
            found.push(Candidate::new(trie.word_of(index), threshold));
        }
    });

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::propagate;

    fn suggest(dict: &[&str], query: &str) -> Option<Matches> {
        let mut trie = Trie::with_query(query);
        for word in dict {
            trie.insert(word);
        }
        propagate(&mut trie);
        best_matches(&trie)
    }

    fn words(matches: &Matches) -> Vec<&str> {
        matches.candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn reports_all_words_tied_at_the_minimum() {
        let matches = suggest(&["cat", "cot", "dog"], "cog").unwrap();

        assert_eq!(matches.distance, 1);
        assert_eq!(words(&matches), vec!["cot", "dog"]);
    }

    #[test]
    fn exact_word_wins_at_distance_zero() {
        let matches = suggest(&["hello"], "hello").unwrap();

        assert_eq!(matches.distance, 0);
        assert_eq!(words(&matches), vec!["hello"]);
    }

    #[test]
    fn prefix_chain_prefers_the_closest_word() {
        let matches = suggest(&["a", "ab", "abc"], "abcd").unwrap();

        assert_eq!(matches.distance, 1);
        assert_eq!(words(&matches), vec!["abc"]);
    }

    #[test]
    fn stops_at_the_first_populated_threshold() {
        // "cab" is one edit away, but "cat" matches outright; a match at a
        // lower threshold must suppress everything above it.
        let matches = suggest(&["cab", "cat"], "cat").unwrap();

        assert_eq!(matches.distance, 0);
        assert_eq!(words(&matches), vec!["cat"]);
    }

    #[test]
    fn a_matched_prefix_does_not_hide_equal_descendants() {
        // Both "a" and "ab" sit at distance 1 from "b"; the second one lives
        // below the first in the trie and must still be reported.
        let matches = suggest(&["a", "ab"], "b").unwrap();

        assert_eq!(matches.distance, 1);
        assert_eq!(words(&matches), vec!["a", "ab"]);
    }

    #[test]
    fn no_match_beyond_the_threshold_bound() {
        // distance("zzzz", "abc") == 4, past the last threshold (2).
        assert!(suggest(&["zzzz"], "abc").is_none());
    }

    #[test]
    fn fully_substituted_word_is_past_the_last_threshold() {
        // Every character differs, so the distance equals the query length,
        // which the threshold loop never reaches.
        assert!(suggest(&["xyz"], "abc").is_none());

        // Sharing a single character brings the distance inside the bound.
        let matches = suggest(&["xyc"], "abc").unwrap();
        assert_eq!(matches.distance, 2);
        assert_eq!(words(&matches), vec!["xyc"]);
    }

    #[test]
    fn traversal_order_is_deterministic() {
        let dict = ["dog", "cot", "bog", "fog", "cog"];
        let first = suggest(&dict, "zog").unwrap();
        let second = suggest(&dict, "zog").unwrap();

        assert_eq!(words(&first), words(&second));
        assert_eq!(words(&first), vec!["bog", "cog", "dog", "fog"]);
    }
}
