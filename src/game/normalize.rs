//! Name normalization
//!
//! Handles:
//! - Discarding everything that is not an ASCII letter
//! - Lowercasing what remains
//!
//! An input with no letters normalizes to an empty sequence; rejecting that
//! is the caller's job (the interactive loop re-prompts).

use std::fmt;

/// Ordered sequence of lowercase letters derived from one raw name.
///
/// Invariant: every character is in `a..=z`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSequence {
    chars: Vec<char>,
}

impl NameSequence {
    /// Normalize a raw name: keep ASCII letters only, lowercased.
    pub fn from_raw(raw: &str) -> Self {
        let chars = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NameSequence { chars }
    }

    /// True when the raw input contained no letters at all.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of letters in the sequence.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The letters, in original order.
    pub fn letters(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for NameSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_letters_and_lowercases() {
        let seq = NameSequence::from_raw("John 123!");
        assert_eq!(seq.letters(), &['j', 'o', 'h', 'n']);
    }

    #[test]
    fn test_empty_input() {
        assert!(NameSequence::from_raw("").is_empty());
        assert!(NameSequence::from_raw("42 - ?!").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        let seq = NameSequence::from_raw("Zoë");
        assert_eq!(seq.letters(), &['z', 'o']);
    }

    #[test]
    fn test_display_joins_letters() {
        let seq = NameSequence::from_raw("Mary Ann");
        assert_eq!(seq.to_string(), "maryann");
    }
}
