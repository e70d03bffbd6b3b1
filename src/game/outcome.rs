//! The single entry point the rest of the program calls
//!
//! `compute` takes two raw names and returns everything the presentation
//! layer needs to replay the game: the normalized sequences, the pairing,
//! the remaining count, the full elimination record, and the category.

use thiserror::Error;
use tracing::debug;

use crate::game::category::Category;
use crate::game::eliminator::{self, EliminationResult};
use crate::game::matcher::MatchPairing;
use crate::game::normalize::NameSequence;

/// Ways a pair of names can fail to produce a result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlamesError {
    /// The raw input contained no letters at all.
    #[error("\"{raw}\" contains no letters, try again with a name")]
    EmptyName { raw: String },

    /// Every letter cancelled out, so there is no count to play with.
    #[error("the names cancel out completely, there are no letters left to count")]
    NothingRemaining,
}

/// Everything one game produces.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// First name, normalized.
    pub first: NameSequence,
    /// Second name, normalized.
    pub second: NameSequence,
    /// Which letters cancelled against which.
    pub pairing: MatchPairing,
    /// Unmatched letters across both names; the elimination count.
    pub remaining: usize,
    /// The counting-out record, round by round.
    pub elimination: EliminationResult,
    /// Where the surviving letter points.
    pub category: Category,
}

/// Play a full game of FLAMES on two raw names.
///
/// Deterministic: the same two names always give the same outcome. Fails
/// when either name has no letters, or when the names cancel out completely
/// (perfect anagrams leave nothing to count).
pub fn compute(first_raw: &str, second_raw: &str) -> Result<Outcome, FlamesError> {
    let first = NameSequence::from_raw(first_raw);
    if first.is_empty() {
        return Err(FlamesError::EmptyName {
            raw: first_raw.trim().to_string(),
        });
    }

    let second = NameSequence::from_raw(second_raw);
    if second.is_empty() {
        return Err(FlamesError::EmptyName {
            raw: second_raw.trim().to_string(),
        });
    }

    let pairing = MatchPairing::pair(&first, &second);
    let remaining = pairing.remaining_count();

    let elimination = eliminator::eliminate(remaining)?;
    let category = elimination.survivor;

    debug!(
        first = %first,
        second = %second,
        remaining,
        result = category.label(),
        "game computed"
    );

    Ok(Outcome {
        first,
        second,
        pairing,
        remaining,
        elimination,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steve_and_eve() {
        // s,t,e,v,e vs e,v,e: e/v/e cancel, s and t remain, count 2 -> Enemies
        let outcome = compute("steve", "eve").unwrap();
        assert_eq!(outcome.first.to_string(), "steve");
        assert_eq!(outcome.second.to_string(), "eve");
        assert_eq!(outcome.pairing.pairs(), &[(2, 0), (3, 1), (4, 2)]);
        assert_eq!(outcome.remaining, 2);
        assert_eq!(outcome.elimination.survivor, Category::Enemies);
        assert_eq!(outcome.category.label(), "Enemies");
    }

    #[test]
    fn test_deterministic() {
        let a = compute("Romeo", "Juliet").unwrap();
        let b = compute("Romeo", "Juliet").unwrap();
        assert_eq!(a.remaining, b.remaining);
        assert_eq!(a.category, b.category);
        assert_eq!(a.elimination, b.elimination);
    }

    #[test]
    fn test_normalization_ignores_case_and_punctuation() {
        let plain = compute("steve", "eve").unwrap();
        let noisy = compute("  St-Eve 99!", "E.V.E.").unwrap();
        assert_eq!(plain.remaining, noisy.remaining);
        assert_eq!(plain.category, noisy.category);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = compute("", "eve").unwrap_err();
        assert!(matches!(err, FlamesError::EmptyName { .. }));

        let err = compute("steve", "123 !?").unwrap_err();
        assert_eq!(
            err,
            FlamesError::EmptyName {
                raw: "123 !?".to_string()
            }
        );
    }

    #[test]
    fn test_perfect_anagrams_rejected() {
        let err = compute("amy", "yam").unwrap_err();
        assert_eq!(err, FlamesError::NothingRemaining);
    }

    #[test]
    fn test_elimination_uses_remaining_count() {
        // abc/xyz: nothing cancels, count 6, first strike lands on 'S'
        let outcome = compute("abc", "xyz").unwrap();
        assert_eq!(outcome.remaining, 6);
        assert_eq!(outcome.elimination.eliminated[0], Category::Siblings);
        assert_eq!(outcome.category, Category::Marriage);
    }
}
