//! Counting-out elimination over the F L A M E S ring
//!
//! Starting from all six letters, repeatedly count `N` letters around the
//! ring (wrapping), strike the letter the count lands on, and resume
//! counting from the position right after it, until one letter survives.
//!
//! Every round records the ring as it looked before the strike so the
//! display can replay the counting later. No timing lives here.

use crate::game::category::Category;
use crate::game::outcome::FlamesError;

/// The fixed ring the game is played on, in F L A M E S order.
pub const RING: [Category; 6] = [
    Category::Friends,
    Category::Love,
    Category::Affection,
    Category::Marriage,
    Category::Enemies,
    Category::Siblings,
];

/// One round of the counting-out game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliminationStep {
    /// Ring contents before this round's strike, counting starts at index 0.
    pub ring: Vec<Category>,
    /// Index the count landed on.
    pub removed_index: usize,
    /// The letter struck this round.
    pub removed: Category,
}

/// Full record of an elimination run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliminationResult {
    /// The single letter left at the end.
    pub survivor: Category,
    /// Struck letters, in strike order.
    pub eliminated: Vec<Category>,
    /// One entry per round, for replay.
    pub steps: Vec<EliminationStep>,
}

/// Run the counting-out game with `count` letters counted per round.
///
/// Defined only for `count >= 1`; a count of 0 means the two names
/// cancelled out completely and there is nothing to count with.
pub fn eliminate(count: usize) -> Result<EliminationResult, FlamesError> {
    if count == 0 {
        return Err(FlamesError::NothingRemaining);
    }

    let mut ring: Vec<Category> = RING.to_vec();
    let mut eliminated = Vec::with_capacity(RING.len() - 1);
    let mut steps = Vec::with_capacity(RING.len() - 1);

    while ring.len() > 1 {
        let n = ring.len();
        // 1-based counting of `count` letters around a ring of n: the count
        // lands on (count - 1) % n. Exact multiples land on the last slot,
        // which `count % n` would wrongly map to 0.
        let index = (count - 1) % n;

        steps.push(EliminationStep {
            ring: ring.clone(),
            removed_index: index,
            removed: ring[index],
        });

        let removed = ring.remove(index);
        eliminated.push(removed);

        // Counting resumes right after the struck slot. After the removal
        // `index` can equal the new length, in which case this is a no-op.
        ring.rotate_left(index);
    }

    Ok(EliminationResult {
        survivor: ring[0],
        eliminated,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(ring: &[Category]) -> String {
        ring.iter().map(|c| c.letter()).collect()
    }

    #[test]
    fn test_count_two_full_trace() {
        let result = eliminate(2).unwrap();

        // Round by round: ring before the strike, struck index, struck letter.
        let expected = [
            ("FLAMES", 1, 'L'),
            ("AMESF", 1, 'M'),
            ("ESFA", 1, 'S'),
            ("FAE", 1, 'A'),
            ("EF", 1, 'F'),
        ];
        assert_eq!(result.steps.len(), expected.len());
        for (step, (ring, index, removed)) in result.steps.iter().zip(&expected) {
            assert_eq!(letters(&step.ring), *ring);
            assert_eq!(step.removed_index, *index);
            assert_eq!(step.removed.letter(), *removed);
        }

        assert_eq!(letters(&result.eliminated), "LMSAF");
        assert_eq!(result.survivor, Category::Enemies);
    }

    #[test]
    fn test_exact_multiple_strikes_last_slot() {
        // count 6 on a 6-letter ring must land on index 5 ('S'), never 0
        let result = eliminate(6).unwrap();
        assert_eq!(result.steps[0].removed_index, 5);
        assert_eq!(result.eliminated[0], Category::Siblings);
        assert_eq!(result.survivor, Category::Marriage);
    }

    #[test]
    fn test_count_one_strikes_ring_head() {
        let result = eliminate(1).unwrap();
        assert_eq!(letters(&result.eliminated), "FLAME");
        assert_eq!(result.survivor, Category::Siblings);
    }

    #[test]
    fn test_count_wraps_past_ring_length() {
        // (7 - 1) % 6 = 0: the first strike wraps back onto 'F'
        let result = eliminate(7).unwrap();
        assert_eq!(result.eliminated[0], Category::Friends);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert!(matches!(eliminate(0), Err(FlamesError::NothingRemaining)));
    }

    #[test]
    fn test_always_five_rounds() {
        for count in 1..=30 {
            let result = eliminate(count).unwrap();
            assert_eq!(result.steps.len(), 5);
            assert_eq!(result.eliminated.len(), 5);
            assert!(RING.contains(&result.survivor));
        }
    }
}
