//! Formatting utilities for terminal output

use crate::core::{Code, Color, Palette, Score};
use colored::{ColoredString, Colorize};

/// Render a color symbol in its terminal color
#[must_use]
pub fn colorize(color: Color) -> ColoredString {
    let symbol = color.symbol().to_string();
    let symbol = symbol.as_str();
    match color.symbol() {
        'R' => symbol.red().bold(),
        'G' => symbol.green().bold(),
        'B' => symbol.blue().bold(),
        'Y' => symbol.yellow().bold(),
        'W' => symbol.white().bold(),
        'O' => symbol.truecolor(255, 165, 0).bold(),
        _ => symbol.bold(),
    }
}

/// Format a code as space-separated colored symbols
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| colorize(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// List palette colors with their names, e.g. `R (Red), G (Green)`
#[must_use]
pub fn format_palette(palette: &Palette) -> String {
    palette
        .colors()
        .iter()
        .map(|&c| match c.name() {
            Some(name) => format!("{} ({name})", colorize(c)),
            None => colorize(c).to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a score as feedback pegs
///
/// One `●` per exact match, one `○` per partial match, `·` for the rest.
#[must_use]
pub fn feedback_pegs(score: Score, length: usize) -> String {
    let misses = length.saturating_sub(score.exact + score.partial);
    format!(
        "{}{}{}",
        "●".repeat(score.exact),
        "○".repeat(score.partial),
        "·".repeat(misses)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COLORS;

    #[test]
    fn format_code_plain() {
        colored::control::set_override(false);
        let code = Code::from_symbols("RGBY").unwrap();
        assert_eq!(format_code(&code), "R G B Y");
    }

    #[test]
    fn format_palette_with_names() {
        colored::control::set_override(false);
        let palette = Palette::new(DEFAULT_COLORS).unwrap();
        assert_eq!(
            format_palette(&palette),
            "R (Red), G (Green), B (Blue), Y (Yellow), W (White), O (Orange)"
        );
    }

    #[test]
    fn format_palette_unnamed_symbols() {
        colored::control::set_override(false);
        let palette = Palette::new(['R', '1', '2']).unwrap();
        assert_eq!(format_palette(&palette), "R (Red), 1, 2");
    }

    #[test]
    fn feedback_pegs_mixed() {
        assert_eq!(feedback_pegs(Score::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn feedback_pegs_solved() {
        assert_eq!(feedback_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn feedback_pegs_nothing() {
        assert_eq!(feedback_pegs(Score::default(), 4), "····");
    }
}
