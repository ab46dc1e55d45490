//! Color code representation
//!
//! A `Code` is an ordered sequence of colors. The same type is used for the
//! hidden secret and for each guess.

use super::Color;
use rustc_hash::FxHashMap;
use std::fmt;

/// An immutable sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    colors: Vec<Color>,
}

impl Code {
    /// Create a code from colors
    ///
    /// Membership in a palette is checked by whoever builds the code (the
    /// generator draws from the palette, the guess parser looks tokens up in it).
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a code from a string of symbols, ignoring whitespace
    ///
    /// Returns `None` if any symbol is not a valid color.
    ///
    /// # Examples
    /// ```
    /// use code_cracker::core::Code;
    ///
    /// let code = Code::from_symbols("RGBY").unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "R G B Y");
    /// ```
    #[must_use]
    pub fn from_symbols(symbols: &str) -> Option<Self> {
        symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Color::new)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Get the colors in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the count of each color in the code
    ///
    /// Used by scoring to consume each secret peg at most once.
    #[inline]
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.colors {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(symbol: char) -> Color {
        Color::new(symbol).unwrap()
    }

    #[test]
    fn code_from_symbols() {
        let code = Code::from_symbols("rg by").unwrap();
        assert_eq!(
            code.colors(),
            &[color('R'), color('G'), color('B'), color('Y')]
        );
    }

    #[test]
    fn code_from_symbols_invalid() {
        assert!(Code::from_symbols("RG\u{e9}").is_none());
    }

    #[test]
    fn code_color_counts() {
        let code = Code::from_symbols("RRGB").unwrap();
        let counts = code.color_counts();
        assert_eq!(counts.get(&color('R')), Some(&2));
        assert_eq!(counts.get(&color('G')), Some(&1));
        assert_eq!(counts.get(&color('B')), Some(&1));
        assert_eq!(counts.get(&color('Y')), None);
    }

    #[test]
    fn code_color_counts_all_same() {
        let code = Code::from_symbols("OOOO").unwrap();
        let counts = code.color_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&color('O')), Some(&4));
    }

    #[test]
    fn code_display() {
        let code = Code::from_symbols("WOBR").unwrap();
        assert_eq!(format!("{code}"), "W O B R");
    }
}
