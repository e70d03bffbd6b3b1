//! Letter cancellation between two names
//!
//! Greedy first-available pairing: walk the first name left to right and
//! pair each letter with the first equal, still-unused letter of the second
//! name. This is the pen-and-paper rule, not maximum matching, and the scan
//! order must stay exactly as it is.

use crate::game::normalize::NameSequence;

/// Result of pairing two names letter by letter.
///
/// Each index of either name appears in at most one pair. The matched flag
/// vectors run parallel to the letters of each name so the display can
/// strike letters out pair by pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchPairing {
    pairs: Vec<(usize, usize)>,
    matched_a: Vec<bool>,
    matched_b: Vec<bool>,
}

impl MatchPairing {
    /// Pair the letters of `a` against `b` with the greedy first-available scan.
    pub fn pair(a: &NameSequence, b: &NameSequence) -> Self {
        let a_letters = a.letters();
        let b_letters = b.letters();

        let mut matched_a = vec![false; a_letters.len()];
        let mut matched_b = vec![false; b_letters.len()];
        let mut pairs = Vec::new();

        for (i, &ch) in a_letters.iter().enumerate() {
            for (j, &other) in b_letters.iter().enumerate() {
                if !matched_b[j] && ch == other {
                    matched_a[i] = true;
                    matched_b[j] = true;
                    pairs.push((i, j));
                    break;
                }
            }
        }

        MatchPairing {
            pairs,
            matched_a,
            matched_b,
        }
    }

    /// Index pairs in the order they were found.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Per-letter matched flags for the first name.
    pub fn matched_first(&self) -> &[bool] {
        &self.matched_a
    }

    /// Per-letter matched flags for the second name.
    pub fn matched_second(&self) -> &[bool] {
        &self.matched_b
    }

    /// Unmatched letters left across both names.
    pub fn remaining_count(&self) -> usize {
        let unmatched = |flags: &[bool]| flags.iter().filter(|&&m| !m).count();
        unmatched(&self.matched_a) + unmatched(&self.matched_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> NameSequence {
        NameSequence::from_raw(s)
    }

    #[test]
    fn test_greedy_scan_order() {
        // a has no partner; b and c each take the first free equal letter
        let pairing = MatchPairing::pair(&seq("abc"), &seq("bcd"));
        assert_eq!(pairing.pairs(), &[(1, 0), (2, 1)]);
        assert_eq!(pairing.remaining_count(), 2);
    }

    #[test]
    fn test_duplicate_letters_pair_first_available() {
        // steve/eve: e->e, v->v, e->e, leaving s and t
        let pairing = MatchPairing::pair(&seq("steve"), &seq("eve"));
        assert_eq!(pairing.pairs(), &[(2, 0), (3, 1), (4, 2)]);
        assert_eq!(pairing.matched_first(), &[false, false, true, true, true]);
        assert_eq!(pairing.matched_second(), &[true, true, true]);
        assert_eq!(pairing.remaining_count(), 2);
    }

    #[test]
    fn test_no_common_letters() {
        let pairing = MatchPairing::pair(&seq("abc"), &seq("xyz"));
        assert!(pairing.pairs().is_empty());
        assert_eq!(pairing.remaining_count(), 6);
    }

    #[test]
    fn test_anagrams_cancel_completely() {
        let pairing = MatchPairing::pair(&seq("amy"), &seq("yam"));
        assert_eq!(pairing.pairs().len(), 3);
        assert_eq!(pairing.remaining_count(), 0);
    }

    #[test]
    fn test_empty_side_matches_nothing() {
        let pairing = MatchPairing::pair(&seq(""), &seq("abc"));
        assert!(pairing.pairs().is_empty());
        assert_eq!(pairing.remaining_count(), 3);
    }
}
