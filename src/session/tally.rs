//! In-session counters for the exit summary
//!
//! Tracks how many games were played, how the results split across the six
//! categories, and how long the session ran.

use rustc_hash::FxHashMap;
use std::time::Instant;

use crate::game::Category;

/// Running counters for one sitting.
#[derive(Clone, Debug)]
pub struct SessionTally {
    /// Finished games this session.
    pub games_played: u32,
    /// Session start time.
    start_time: Option<Instant>,
    /// How often each category came up.
    category_counts: FxHashMap<Category, u32>,
}

impl SessionTally {
    pub fn new() -> Self {
        SessionTally {
            games_played: 0,
            start_time: None,
            category_counts: FxHashMap::default(),
        }
    }

    /// Start the session clock.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Record one finished game.
    pub fn record_game(&mut self, category: Category) {
        self.games_played += 1;
        *self.category_counts.entry(category).or_insert(0) += 1;
    }

    /// Seconds since `start`, 0 when never started.
    pub fn duration_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// The category that came up most, with its count.
    pub fn most_frequent(&self) -> Option<(Category, u32)> {
        self.category_counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&category, &count)| (category, count))
    }
}

impl Default for SessionTally {
    fn default() -> Self {
        Self::new()
    }
}
