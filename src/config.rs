//! Game configuration
//!
//! The palette, code length and attempt budget are fixed at startup and passed
//! as one immutable `GameConfig` into every component.

use crate::core::{Code, Color, Palette, PaletteError};
use std::fmt;

/// Standard color symbols: Red, Green, Blue, Yellow, White, Orange
pub const DEFAULT_COLORS: [char; 6] = ['R', 'G', 'B', 'Y', 'W', 'O'];

/// Maximum number of attempts allowed
pub const MAX_TRIES: u32 = 10;

/// Length of the secret code
pub const CODE_LENGTH: usize = 4;

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Palette(PaletteError),
    ZeroLength,
    ZeroTries,
    SecretLength { expected: usize, got: usize },
    SecretColor(Color),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(e) => write!(f, "Invalid palette: {e}"),
            Self::ZeroLength => write!(f, "Code length must be at least 1"),
            Self::ZeroTries => write!(f, "Number of tries must be at least 1"),
            Self::SecretLength { expected, got } => {
                write!(f, "Secret must have {expected} colors, got {got}")
            }
            Self::SecretColor(color) => write!(f, "Secret uses color {color} outside the palette"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Palette(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PaletteError> for ConfigError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

/// Immutable settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    palette: Palette,
    code_length: usize,
    max_tries: u32,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the code length or the number of tries is zero.
    ///
    /// # Examples
    /// ```
    /// use code_cracker::config::GameConfig;
    /// use code_cracker::core::Palette;
    ///
    /// let palette = Palette::new(['R', 'G', 'B']).unwrap();
    /// let config = GameConfig::new(palette, 3, 5).unwrap();
    /// assert_eq!(config.code_length(), 3);
    /// ```
    pub fn new(palette: Palette, code_length: usize, max_tries: u32) -> Result<Self, ConfigError> {
        if code_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if max_tries == 0 {
            return Err(ConfigError::ZeroTries);
        }

        Ok(Self {
            palette,
            code_length,
            max_tries,
        })
    }

    /// The standard game: six colors, four pegs, ten tries
    ///
    /// # Errors
    /// Never fails for the built-in constants.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(Palette::new(DEFAULT_COLORS)?, CODE_LENGTH, MAX_TRIES)
    }

    /// Check that a code fits this configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the code has the wrong length or a color
    /// outside the palette.
    pub fn check_code(&self, code: &Code) -> Result<(), ConfigError> {
        if code.len() != self.code_length {
            return Err(ConfigError::SecretLength {
                expected: self.code_length,
                got: code.len(),
            });
        }
        match code.colors().iter().find(|&&c| !self.palette.contains(c)) {
            Some(&color) => Err(ConfigError::SecretColor(color)),
            None => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }
}
