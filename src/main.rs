//! FLAMES - animated name-compatibility game
//!
//! Single-session, self-contained CLI application. Crosses out the common
//! letters of two names, counts out the F L A M E S ring with the leftover
//! count, and shows which category survives. The algorithm lives in `game`
//! and is pure; all pacing and rendering happens here and in `cli`.

mod cli;
mod game;
mod session;

use clap::Parser;
use cli::display::Display;
use cli::input::{InputHandler, KeyAction, MAX_NAME_LEN};
use cli::taglines::Taglines;
use game::{compute, NameSequence, Outcome};
use session::{SessionLog, SessionRecord, SessionTally};
use std::error::Error;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "FLAMES")]
#[command(about = "Animated FLAMES name-compatibility game")]
struct Args {
    /// First name (prompted for when omitted)
    name1: Option<String>,

    /// Second name (prompted for when omitted)
    name2: Option<String>,

    /// Base animation delay in milliseconds
    #[arg(short, long, default_value = "600")]
    delay: u64,

    /// Skip the step-by-step animation
    #[arg(long)]
    no_animation: bool,

    /// Path to the session log
    #[arg(short, long, default_value = "flames_sessions.csv")]
    log: String,

    /// Optional taglines override file
    #[arg(short, long, default_value = "data/taglines.json")]
    taglines: String,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

/// Animation pacing. The original waits 0.6s between strikes, half of that
/// per counting tick, and two thirds after announcements.
#[derive(Clone, Copy)]
struct Pacing {
    base: Duration,
    animate: bool,
}

impl Pacing {
    fn beat(&self) {
        self.pause(self.base);
    }

    fn tick(&self) {
        self.pause(self.base / 2);
    }

    fn strike(&self) {
        self.pause(self.base * 2 / 3);
    }

    fn pause(&self, duration: Duration) {
        if self.animate {
            thread::sleep(duration);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Silent unless RUST_LOG asks for events, so the animation stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_target(false)
        .init();

    let pacing = Pacing {
        base: Duration::from_millis(args.delay),
        animate: !args.no_animation,
    };

    let taglines = match Taglines::load(&args.taglines) {
        Ok(t) => t,
        Err(e) => {
            if args.debug {
                eprintln!(
                    "⚠ Could not parse {}: {} (using built-in taglines)",
                    args.taglines, e
                );
            }
            Taglines::builtin()
        }
    };

    let log = SessionLog::new(&args.log);
    if args.debug {
        println!("✓ Session log: {}", log.path().display());
    }

    let mut tally = SessionTally::new();
    tally.start();

    let display = Display::simple()?;

    if args.name1.is_some() != args.name2.is_some() {
        eprintln!("❌ Give both names on the command line, or neither.");
        std::process::exit(2);
    }

    // One-shot mode: both names on the command line
    if let (Some(name1), Some(name2)) = (&args.name1, &args.name2) {
        display.clear()?;
        display.show_title()?;
        match compute(name1, name2) {
            Ok(outcome) => {
                play_round(&display, &outcome, &taglines, pacing)?;
                save_session(&display, &log, name1, name2, &outcome)?;
                display.park_cursor()?;
            }
            Err(err) => {
                display.park_cursor()?;
                eprintln!("❌ {}", err);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Interactive mode
    InputHandler::enable_raw_mode()?;
    let input = InputHandler::new();

    'session: loop {
        display.clear()?;
        display.show_title()?;
        display.show_help("Type a name, ENTER to confirm  |  ESC or Ctrl+C to quit")?;

        let name1 = match read_name(&display, &input, Display::first_name_row(), "First name:")? {
            Some(name) => name,
            None => break 'session,
        };
        let name2 = match read_name(&display, &input, Display::second_name_row(), "Second name:")?
        {
            Some(name) => name,
            None => break 'session,
        };

        let outcome = match compute(&name1, &name2) {
            Ok(outcome) => outcome,
            Err(err) => {
                display.show_error(&err.to_string())?;
                display.show_help("Press any key to try again  |  ESC or Ctrl+C to quit")?;
                match input.wait_action()? {
                    KeyAction::Quit => break 'session,
                    _ => continue 'session,
                }
            }
        };

        play_round(&display, &outcome, &taglines, pacing)?;
        save_session(&display, &log, &name1, &name2, &outcome)?;
        tally.record_game(outcome.category);

        display.show_help("Press ENTER to play again  |  ESC or Ctrl+C to quit")?;
        match input.wait_action()? {
            KeyAction::Quit => break 'session,
            _ => continue 'session,
        }
    }

    InputHandler::disable_raw_mode()?;
    display.park_cursor()?;
    display.shutdown()?;

    // Summary
    println!("\n🎉 Thanks for playing!");
    if tally.games_played > 0 {
        println!(
            "📊 Session: {} game(s) in {:.1}s",
            tally.games_played,
            tally.duration_secs()
        );
        if let Some((category, count)) = tally.most_frequent() {
            println!("   Most frequent result: {} ({}x)", category.label(), count);
        }
    }

    Ok(())
}

/// Character-by-character name entry with backspace and a length cap.
/// Returns `None` when the user wants out.
fn read_name(
    display: &Display,
    input: &InputHandler,
    row: u16,
    label: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    let mut typed = String::new();
    loop {
        display.show_name_entry(row, label, &typed)?;
        match input.wait_action()? {
            KeyAction::Quit => return Ok(None),
            KeyAction::Erase => {
                typed.pop();
            }
            KeyAction::Submit => {
                if NameSequence::from_raw(&typed).is_empty() {
                    display.show_error("A name needs at least one letter, try again.")?;
                } else {
                    display.show_caption("")?;
                    return Ok(Some(typed));
                }
            }
            KeyAction::Insert(c) => {
                if typed.chars().count() < MAX_NAME_LEN {
                    typed.push(c);
                }
            }
        }
    }
}

/// Replay a computed game: crossing-out phase, counting-out phase, banner.
fn play_round(
    display: &Display,
    outcome: &Outcome,
    taglines: &Taglines,
    pacing: Pacing,
) -> Result<(), Box<dyn Error>> {
    animate_matching(display, outcome, pacing)?;
    animate_elimination(display, outcome, pacing)?;

    let (emoji, line) = match taglines.flair(outcome.category) {
        Some(flair) => (flair.emoji.as_str(), flair.line.as_str()),
        None => ("", ""),
    };
    display.show_result(
        emoji,
        outcome.category.label(),
        outcome.category.letter(),
        line,
    )?;
    Ok(())
}

/// Phase 1: strike out the matched letters pair by pair.
fn animate_matching(
    display: &Display,
    outcome: &Outcome,
    pacing: Pacing,
) -> Result<(), Box<dyn Error>> {
    let first = outcome.first.letters();
    let second = outcome.second.letters();
    let mut struck_first = vec![false; first.len()];
    let mut struck_second = vec![false; second.len()];

    display.show_caption("Step 1: crossing out common letters")?;
    display.show_name_letters(Display::first_name_row(), "First:", first, &struck_first)?;
    display.show_name_letters(Display::second_name_row(), "Second:", second, &struck_second)?;
    pacing.strike();

    if pacing.animate {
        for &(i, j) in outcome.pairing.pairs() {
            struck_first[i] = true;
            struck_second[j] = true;
            display.show_caption("Ouch! There goes a common letter!")?;
            display.show_name_letters(Display::first_name_row(), "First:", first, &struck_first)?;
            display.show_name_letters(
                Display::second_name_row(),
                "Second:",
                second,
                &struck_second,
            )?;
            pacing.strike();
        }
    } else {
        let pairing = &outcome.pairing;
        display.show_name_letters(
            Display::first_name_row(),
            "First:",
            first,
            pairing.matched_first(),
        )?;
        display.show_name_letters(
            Display::second_name_row(),
            "Second:",
            second,
            pairing.matched_second(),
        )?;
    }

    display.show_caption(&format!(
        "Remaining letters after crossing: {}",
        outcome.remaining
    ))?;
    pacing.beat();
    Ok(())
}

/// Phase 2: count around the ring, strike, rotate, repeat.
fn animate_elimination(
    display: &Display,
    outcome: &Outcome,
    pacing: Pacing,
) -> Result<(), Box<dyn Error>> {
    let count = outcome.remaining;

    for step in &outcome.elimination.steps {
        let letters: Vec<char> = step.ring.iter().map(|c| c.letter()).collect();

        if pacing.animate {
            for k in 1..=count {
                let highlight = (k - 1) % letters.len();
                display.show_ring(&letters, Some(highlight))?;
                display.show_ring_caption(&format!("Counting... {}", k))?;
                pacing.tick();
            }
        } else {
            display.show_ring(&letters, Some(step.removed_index))?;
        }

        display.show_ring_caption(&format!("Strike! Removed {}", step.removed.letter()))?;
        pacing.strike();
    }

    let survivor = outcome.elimination.survivor.letter();
    display.show_ring(&[survivor], None)?;
    display.show_ring_caption(&format!("One letter left: {}", survivor))?;
    pacing.beat();
    Ok(())
}

/// Best effort: a failed append shows a warning and the game goes on.
fn save_session(
    display: &Display,
    log: &SessionLog,
    name1: &str,
    name2: &str,
    outcome: &Outcome,
) -> Result<(), Box<dyn Error>> {
    let record = SessionRecord::from_outcome(name1, name2, outcome);
    if let Err(err) = log.append(&record) {
        tracing::warn!(%err, "session not saved");
        display.show_ring_caption(&format!("⚠ Couldn't save session: {}", err))?;
    }
    Ok(())
}
