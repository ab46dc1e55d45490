//! Game loop
//!
//! A session owns one secret and walks the state machine
//! `Playing(1) -> ... -> Playing(max_tries)` until the player cracks the code
//! (`Won`) or runs out of attempts (`Lost`).

use super::generator::generate_code;
use super::reader::{GuessError, GuessReader, ReadError};
use crate::config::{ConfigError, GameConfig};
use crate::core::{Code, Score};
use crate::output::display;
use rand::Rng;
use std::fmt;
use std::io::{BufRead, Write};

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for guess number `attempt` (1-based)
    Playing { attempt: u32 },
    /// Cracked on guess number `attempt`
    Won { attempt: u32 },
    Lost,
}

impl State {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing { .. })
    }
}

/// Final result of a played session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: u32 },
    Lost,
}

/// Why a guess could not be applied to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The session already ended in a win or loss
    GameOver,
    InvalidGuess(GuessError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::InvalidGuess(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::GameOver => None,
        }
    }
}

/// One game: a secret, the attempts made against it, and the current state
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Code,
    state: State,
    history: Vec<(Code, Score)>,
}

impl Session {
    /// Start a session with a known secret
    ///
    /// # Errors
    /// Returns `ConfigError` if the secret does not fit `config`.
    pub fn new(config: GameConfig, secret: Code) -> Result<Self, ConfigError> {
        config.check_code(&secret)?;
        Ok(Self::start(config, secret))
    }

    /// Start a session with a freshly generated secret
    #[must_use]
    pub fn random<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let secret = generate_code(config.palette(), config.code_length(), rng);
        Self::start(config, secret)
    }

    fn start(config: GameConfig, secret: Code) -> Self {
        Self {
            config,
            secret,
            state: State::Playing { attempt: 1 },
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Every guess made so far with its score, in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    /// Apply one guess and advance the state machine
    ///
    /// # Errors
    /// Returns `StepError::GameOver` if the session already ended, or
    /// `StepError::InvalidGuess` if the guess has the wrong length or a color
    /// outside the palette. Either way the attempt is not consumed.
    pub fn step(&mut self, guess: Code) -> Result<Score, StepError> {
        let State::Playing { attempt } = self.state else {
            return Err(StepError::GameOver);
        };
        self.check_guess(&guess).map_err(StepError::InvalidGuess)?;

        let score = Score::calculate(&guess, &self.secret);
        tracing::debug!(
            attempt,
            exact = score.exact,
            partial = score.partial,
            "Scored guess"
        );
        self.history.push((guess, score));

        self.state = if score.is_solved(self.config.code_length()) {
            State::Won { attempt }
        } else if attempt >= self.config.max_tries() {
            State::Lost
        } else {
            State::Playing {
                attempt: attempt + 1,
            }
        };

        Ok(score)
    }

    fn check_guess(&self, guess: &Code) -> Result<(), GuessError> {
        let expected = self.config.code_length();
        if guess.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                got: guess.len(),
            });
        }
        match guess
            .colors()
            .iter()
            .find(|&&c| !self.config.palette().contains(c))
        {
            Some(color) => Err(GuessError::InvalidColor(color.to_string())),
            None => Ok(()),
        }
    }

    /// Play the session to completion on the reader's devices
    ///
    /// Prints the welcome banner, then prompts for one guess per attempt and
    /// reports feedback until the game is won or lost. The secret is revealed
    /// either way.
    ///
    /// # Errors
    /// Returns `ReadError` if the input closes or an I/O operation fails
    /// before the game ends.
    ///
    /// # Examples
    /// ```
    /// use code_cracker::config::GameConfig;
    /// use code_cracker::core::Code;
    /// use code_cracker::game::{GuessReader, Outcome, Session};
    /// use std::io::Cursor;
    ///
    /// let config = GameConfig::standard().unwrap();
    /// let mut session = Session::new(config, Code::from_symbols("RGBY").unwrap()).unwrap();
    ///
    /// let mut reader = GuessReader::new(Cursor::new("R R R R\nr g b y\n"), Vec::new());
    /// let outcome = session.play(&mut reader).unwrap();
    ///
    /// assert_eq!(outcome, Outcome::Won { attempts: 2 });
    /// ```
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        reader: &mut GuessReader<R, W>,
    ) -> Result<Outcome, ReadError> {
        tracing::info!(
            colors = self.config.palette().len(),
            length = self.config.code_length(),
            max_tries = self.config.max_tries(),
            "Session started"
        );
        display::print_banner(reader.output(), &self.config)?;

        loop {
            match self.state {
                State::Playing { attempt } => {
                    let max_tries = self.config.max_tries();
                    display::print_attempt_header(reader.output(), attempt, max_tries)?;
                    let guess =
                        reader.read_guess(self.config.palette(), self.config.code_length())?;

                    if let Ok(score) = self.step(guess)
                        && !self.state.is_over()
                    {
                        display::print_feedback(reader.output(), score)?;
                    }
                }
                State::Won { attempt } => {
                    tracing::info!(attempts = attempt, "Session won");
                    display::print_win(reader.output(), attempt, &self.secret, &self.history)?;
                    return Ok(Outcome::Won { attempts: attempt });
                }
                State::Lost => {
                    tracing::info!("Session lost");
                    display::print_loss(reader.output(), &self.secret, &self.history)?;
                    return Ok(Outcome::Lost);
                }
            }
        }
    }
}
