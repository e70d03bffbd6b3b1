//! Terminal display and animation frames
//!
//! Features:
//! - Name rows with matched letters struck out
//! - The F L A M E S ring with the counting highlight
//! - Result banner with emoji and one-liner
//!
//! The display only draws. Pacing between frames belongs to the caller.

use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

const TITLE_ROW: u16 = 0;
const FIRST_NAME_ROW: u16 = 2;
const SECOND_NAME_ROW: u16 = 3;
const CAPTION_ROW: u16 = 5;
const RING_ROW: u16 = 7;
const RING_CAPTION_ROW: u16 = 8;
const RESULT_ROW: u16 = 10;
const HELP_ROW: u16 = 13;

/// Terminal display manager
pub struct Display;

impl Display {
    /// Create a display drawing on the main screen.
    pub fn simple() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Display)
    }

    /// Clear the whole screen.
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Draw the banner line.
    pub fn show_title(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, TITLE_ROW),
            SetForegroundColor(Color::Magenta),
            Print("🎲 FLAMES"),
            ResetColor,
            Print("  Friends Love Affection Marriage Enemies Siblings\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Draw one name-entry field as currently typed.
    pub fn show_name_entry(
        &self,
        row: u16,
        label: &str,
        typed: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Cyan),
            Print(format!("{:<13}", label)),
            ResetColor,
            Print(typed),
            SetForegroundColor(Color::DarkGrey),
            Print("_"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Draw a name as spaced letters, striking out the matched ones.
    pub fn show_name_letters(
        &self,
        row: u16,
        label: &str,
        letters: &[char],
        struck: &[bool],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Cyan),
            Print(format!("{:<13}", label)),
            ResetColor
        )?;

        for (i, &ch) in letters.iter().enumerate() {
            let hit = struck.get(i).copied().unwrap_or(false);
            if hit {
                execute!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    SetAttribute(Attribute::CrossedOut),
                    Print(ch),
                    SetAttribute(Attribute::NotCrossedOut),
                    ResetColor,
                    Print(" ")
                )?;
            } else {
                execute!(stdout, Print(ch), Print(" "))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    /// Status line under the two names.
    pub fn show_caption(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.caption_at(CAPTION_ROW, text, Color::Yellow)
    }

    /// Error line under the two names.
    pub fn show_error(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.caption_at(CAPTION_ROW, text, Color::Red)
    }

    /// Draw the ring, highlighting the letter the count is on.
    pub fn show_ring(
        &self,
        letters: &[char],
        highlight: Option<usize>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, RING_ROW),
            terminal::Clear(ClearType::CurrentLine)
        )?;

        for (i, &ch) in letters.iter().enumerate() {
            if highlight == Some(i) {
                execute!(
                    stdout,
                    SetForegroundColor(Color::Red),
                    SetAttribute(Attribute::Bold),
                    Print(ch),
                    SetAttribute(Attribute::NormalIntensity),
                    ResetColor,
                    Print("   ")
                )?;
            } else {
                execute!(stdout, Print(ch), Print("   "))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    /// Status line under the ring (counting and strike announcements).
    pub fn show_ring_caption(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.caption_at(RING_CAPTION_ROW, text, Color::Yellow)
    }

    /// Final banner: category, surviving letter, and the one-liner.
    pub fn show_result(
        &self,
        emoji: &str,
        label: &str,
        letter: char,
        line: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, RESULT_ROW),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Green),
            SetAttribute(Attribute::Bold),
            Print(format!("{} {} {}", emoji, label, emoji)),
            SetAttribute(Attribute::NormalIntensity),
            ResetColor,
            Print(format!("  (final letter: {})", letter)),
            cursor::MoveTo(0, RESULT_ROW + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(line),
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show help text at the bottom of the frame.
    pub fn show_help(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.caption_at(HELP_ROW, text, Color::DarkGrey)
    }

    /// Park the cursor under the frame so plain println output lands below it.
    pub fn park_cursor(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, cursor::MoveTo(0, HELP_ROW + 2))?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup.
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, ResetColor, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn caption_at(
        &self,
        row: u16,
        text: &str,
        color: Color,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }
}

impl Display {
    /// Row of the first name, for entry and letter frames alike.
    pub fn first_name_row() -> u16 {
        FIRST_NAME_ROW
    }

    /// Row of the second name.
    pub fn second_name_row() -> u16 {
        SECOND_NAME_ROW
    }
}

impl Default for Display {
    fn default() -> Self {
        Display
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
