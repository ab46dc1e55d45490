//! Player guess input
//!
//! Reads lines from an input device until one parses as a valid guess.
//! Malformed lines are reported back to the player and never consume an
//! attempt.

use crate::core::{Code, Palette};
use crate::output::display;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Why a line of input is not a valid guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, got: usize },
    InvalidColor(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => write!(f, "You must guess {expected} colors."),
            Self::InvalidColor(token) => write!(f, "Invalid color: {token}. Try again"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Failure of the input device itself
#[derive(Debug)]
pub enum ReadError {
    /// The input reached end-of-file before a valid guess was entered
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputClosed => write!(f, "Input closed before a valid guess was entered"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InputClosed => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse one line of player input into a guess
///
/// Tokens are separated by any whitespace and matched case-insensitively.
/// The token count is checked before the colors, and the first invalid token
/// is the one reported.
///
/// # Errors
/// Returns `GuessError` if:
/// - The number of tokens is not `length`
/// - A token is not a color of `palette`
///
/// # Examples
/// ```
/// use code_cracker::core::Palette;
/// use code_cracker::game::{GuessError, parse_guess};
///
/// let palette = Palette::new(['R', 'G', 'B', 'Y']).unwrap();
///
/// let guess = parse_guess("r g b y", &palette, 4).unwrap();
/// assert_eq!(guess.to_string(), "R G B Y");
///
/// assert_eq!(
///     parse_guess("R G B X", &palette, 4),
///     Err(GuessError::InvalidColor("X".to_string()))
/// );
/// ```
pub fn parse_guess(line: &str, palette: &Palette, length: usize) -> Result<Code, GuessError> {
    let line = line.to_ascii_uppercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != length {
        return Err(GuessError::WrongLength {
            expected: length,
            got: tokens.len(),
        });
    }

    tokens
        .iter()
        .map(|&token| {
            palette
                .lookup(token)
                .ok_or_else(|| GuessError::InvalidColor(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Code::new)
}

/// Prompts for guesses on a line-based input/output device pair
pub struct GuessReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GuessReader<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output device, shared with the game loop for its own messages
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the reader, returning the underlying devices
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt until the player enters a valid guess
    ///
    /// There is no retry limit: every malformed line is explained and the
    /// prompt repeats.
    ///
    /// # Errors
    /// Returns `ReadError::InputClosed` if the input ends, or `ReadError::Io`
    /// if reading or writing fails.
    pub fn read_guess(&mut self, palette: &Palette, length: usize) -> Result<Code, ReadError> {
        loop {
            display::print_prompt(&mut self.output)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ReadError::InputClosed);
            }

            match parse_guess(&line, palette, length) {
                Ok(guess) => return Ok(guess),
                Err(e) => {
                    tracing::debug!(input = line.trim(), error = %e, "Rejected guess");
                    display::print_rejection(&mut self.output, &e)?;
                }
            }
        }
    }
}
