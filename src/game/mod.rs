//! Game core: normalization, letter matching, and the counting-out game
//!
//! # Components
//! - `normalize.rs`: raw input to lowercase letter sequences
//! - `matcher.rs`: greedy letter cancellation between two names
//! - `eliminator.rs`: counting-out elimination over F L A M E S
//! - `category.rs`: survivor letter to relationship category
//! - `outcome.rs`: the single `compute` entry point
//!
//! Everything in this module is pure and synchronous. Animation pacing and
//! file output belong to the callers.

pub mod category;
pub mod eliminator;
pub mod matcher;
pub mod normalize;
pub mod outcome;

pub use category::Category;
pub use eliminator::{EliminationResult, EliminationStep};
pub use matcher::MatchPairing;
pub use normalize::NameSequence;
pub use outcome::{compute, FlamesError, Outcome};
