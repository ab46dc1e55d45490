//! Colors and palettes
//!
//! A `Color` is a single uppercase ASCII symbol (e.g. `R` for red). A `Palette`
//! is the ordered, duplicate-free set of colors a game is played with.

use std::fmt;

/// A single peg color, identified by its uppercase symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(char);

impl Color {
    /// Create a color from a symbol
    ///
    /// The symbol is normalized to uppercase. Returns `None` for anything that
    /// is not a visible ASCII character.
    ///
    /// # Examples
    /// ```
    /// use code_cracker::core::Color;
    ///
    /// let red = Color::new('r').unwrap();
    /// assert_eq!(red.symbol(), 'R');
    /// assert!(Color::new(' ').is_none());
    /// ```
    #[must_use]
    pub const fn new(symbol: char) -> Option<Self> {
        if symbol.is_ascii_graphic() {
            Some(Self(symbol.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Get the color's symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Human-readable name for the standard color symbols
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            'R' => Some("Red"),
            'G' => Some("Green"),
            'B' => Some("Blue"),
            'Y' => Some("Yellow"),
            'W' => Some("White"),
            'O' => Some("Orange"),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
    DuplicateColor(Color),
    InvalidSymbol(char),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Palette must contain at least one color"),
            Self::DuplicateColor(color) => {
                write!(f, "Palette contains color {color} more than once")
            }
            Self::InvalidSymbol(symbol) => {
                write!(f, "Palette symbol {symbol:?} is not a visible ASCII character")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// Ordered set of distinct colors usable in secrets and guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from symbols, keeping their order
    ///
    /// # Errors
    /// Returns `PaletteError` if:
    /// - No symbols are given
    /// - A symbol is not a visible ASCII character
    /// - Two symbols normalize to the same color (`r` and `R` collide)
    ///
    /// # Examples
    /// ```
    /// use code_cracker::core::Palette;
    ///
    /// let palette = Palette::new(['R', 'G', 'B']).unwrap();
    /// assert_eq!(palette.len(), 3);
    ///
    /// assert!(Palette::new(['R', 'r']).is_err());
    /// ```
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, PaletteError> {
        let mut colors: Vec<Color> = Vec::new();

        for symbol in symbols {
            let color = Color::new(symbol).ok_or(PaletteError::InvalidSymbol(symbol))?;
            if colors.contains(&color) {
                return Err(PaletteError::DuplicateColor(color));
            }
            colors.push(color);
        }

        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colors })
    }

    /// All colors in palette order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Resolve a player token to a palette color
    ///
    /// Matching is case-insensitive and the token must be exactly one symbol.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<Color> {
        let mut chars = token.chars();
        let color = chars.next().and_then(Color::new)?;
        if chars.next().is_some() {
            return None;
        }
        self.contains(color).then_some(color)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
