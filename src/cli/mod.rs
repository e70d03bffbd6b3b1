//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Terminal rendering and animation frames
//! - `taglines.rs`: Result flair (emoji and one-liners)

pub mod display;
pub mod input;
pub mod taglines;
