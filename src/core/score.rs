//! Guess feedback calculation
//!
//! A score is the pair of counts reported after each guess:
//! - exact: right color in the right position
//! - partial: right color in the wrong position
//!
//! Each peg of the secret is matched at most once across both counts, which
//! is what makes duplicate colors behave correctly.

use super::Code;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub exact: usize,
    pub partial: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Check if every position of a code of `length` matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Count each color of the secret
    /// 2. First pass: count exact matches and remove them from the counts
    /// 3. Second pass: for every non-exact position, count a partial match if
    ///    the guessed color still has a remaining count, and consume it
    ///
    /// Both codes are expected to have the same length; extra positions in
    /// the longer one are ignored.
    ///
    /// # Examples
    /// ```
    /// use code_cracker::core::{Code, Score};
    ///
    /// let secret = Code::from_symbols("RGBY").unwrap();
    /// let guess = Code::from_symbols("GRYB").unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &secret), Score::new(0, 4));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut remaining = secret.color_counts();
        let pairs = || guess.colors().iter().zip(secret.colors());

        // First pass: exact matches
        let mut exact = 0;
        for (g, s) in pairs() {
            if g == s {
                exact += 1;
                if let Some(count) = remaining.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right color, wrong position
        let mut partial = 0;
        for (g, s) in pairs() {
            if g != s
                && let Some(count) = remaining.get_mut(g)
                && *count > 0
            {
                partial += 1;
                *count -= 1;
            }
        }

        Self { exact, partial }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str) -> Score {
        let guess = Code::from_symbols(guess).unwrap();
        let secret = Code::from_symbols(secret).unwrap();
        Score::calculate(&guess, &secret)
    }

    #[test]
    fn score_identical_codes() {
        assert_eq!(score("RGBY", "RGBY"), Score::new(4, 0));
        assert!(score("RGBY", "RGBY").is_solved(4));
    }

    #[test]
    fn score_no_common_colors() {
        assert_eq!(score("RRGG", "BBYY"), Score::new(0, 0));
    }

    #[test]
    fn score_derangement_is_all_partial() {
        assert_eq!(score("GRYB", "RGBY"), Score::new(0, 4));
    }

    #[test]
    fn score_exact_match_consumes_duplicate() {
        // Pos 0 and pos 3 are exact; remaining secret {R, G} holds no B
        assert_eq!(score("RBBB", "RRGB"), Score::new(2, 0));
    }

    #[test]
    fn score_more_guessed_duplicates_than_secret() {
        // Secret has two reds, guess has three: only two can ever match
        assert_eq!(score("RRRG", "BYRR"), Score::new(1, 1));
        assert_eq!(score("GRRR", "RRBY"), Score::new(1, 1));
    }

    #[test]
    fn score_partial_does_not_steal_exact() {
        // The R at guess pos 0 must not consume the R reserved by the exact pos 2
        assert_eq!(score("RGRB", "YYRY"), Score::new(1, 0));
    }

    #[test]
    fn score_mixed_feedback() {
        assert_eq!(score("RGBW", "RBGO"), Score::new(1, 2));
    }

    #[test]
    fn score_bounds_hold_for_all_pairs_over_small_palette() {
        let symbols = ['R', 'G', 'B'];
        let codes: Vec<String> = (0..27)
            .map(|n: usize| {
                [n % 3, (n / 3) % 3, n / 9]
                    .iter()
                    .map(|&i| symbols[i])
                    .collect()
            })
            .collect();

        for guess in &codes {
            for secret in &codes {
                let s = score(guess, secret);
                assert!(s.exact + s.partial <= 3, "{guess} vs {secret}: {s:?}");
                assert_eq!(s.exact == 3, guess == secret);
            }
        }
    }

    #[test]
    fn score_is_symmetric() {
        // Swapping guess and secret never changes the counts
        for (a, b) in [("RRGB", "RBBB"), ("GRRR", "RRBY"), ("RGBW", "RBGO")] {
            assert_eq!(score(a, b), score(b, a));
        }
    }
}
