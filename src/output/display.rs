//! Display functions for game messages
//!
//! Every function writes to the given output device so the game can be played
//! on stdout or captured in tests.

use super::formatters::{feedback_pegs, format_code, format_palette};
use crate::config::GameConfig;
use crate::core::{Code, Score};
use crate::game::GuessError;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner with the rules of this game
///
/// # Errors
/// Returns any error from the output device.
pub fn print_banner<W: Write>(out: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Welcome to Code Cracker! You have {} tries to guess the code...",
            config.max_tries()
        )
        .bright_cyan()
        .bold()
    )?;
    writeln!(out, "The valid colors are: {}", format_palette(config.palette()))?;
    writeln!(out, "The code is {} colors long.", config.code_length())?;

    let example = config
        .palette()
        .colors()
        .iter()
        .cycle()
        .take(config.code_length())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "Enter your guess as space-separated colors (e.g., '{example}')"
    )?;
    writeln!(out, "{}", "-".repeat(50))
}

/// Print the header for an attempt, e.g. `Attempt 3/10`
///
/// # Errors
/// Returns any error from the output device.
pub fn print_attempt_header<W: Write>(out: &mut W, attempt: u32, max_tries: u32) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("Attempt {attempt}/{max_tries}").bold())
}

/// Print the input prompt and flush so it shows before blocking on input
///
/// # Errors
/// Returns any error from the output device.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Guess: ")?;
    out.flush()
}

/// Explain why a line of input was rejected
///
/// # Errors
/// Returns any error from the output device.
pub fn print_rejection<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().yellow())
}

/// Print the exact/partial counts for a guess that did not end the game
///
/// # Errors
/// Returns any error from the output device.
pub fn print_feedback<W: Write>(out: &mut W, score: Score) -> io::Result<()> {
    writeln!(
        out,
        "Correct Positions: {} | Incorrect Positions: {}",
        score.exact.to_string().green().bold(),
        score.partial.to_string().yellow().bold()
    )
}

/// Print the victory message and reveal the code
///
/// # Errors
/// Returns any error from the output device.
pub fn print_win<W: Write>(
    out: &mut W,
    attempts: u32,
    secret: &Code,
    history: &[(Code, Score)],
) -> io::Result<()> {
    let tries = if attempts == 1 { "try" } else { "tries" };
    writeln!(
        out,
        "{}",
        format!("🎉 Congratulations! You guessed the code in {attempts} {tries}!")
            .bright_green()
            .bold()
    )?;
    writeln!(out, "The code was: {}", format_code(secret))?;
    print_history(out, secret.len(), history)
}

/// Print the game over message and reveal the code
///
/// # Errors
/// Returns any error from the output device.
pub fn print_loss<W: Write>(
    out: &mut W,
    secret: &Code,
    history: &[(Code, Score)],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "💀 Game Over! You ran out of tries.".bright_red().bold()
    )?;
    writeln!(out, "The code was: {}", format_code(secret))?;
    print_history(out, secret.len(), history)
}

fn print_history<W: Write>(
    out: &mut W,
    length: usize,
    history: &[(Code, Score)],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Guess history:")?;
    for (i, (guess, score)) in history.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {}  {}",
            (i + 1).to_string().bright_black(),
            format_code(guess),
            feedback_pegs(*score, length)
        )?;
    }
    Ok(())
}
