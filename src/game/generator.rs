//! Secret code generation

use crate::core::{Code, Palette};
use rand::Rng;

/// Generate a secret of `length` colors drawn uniformly, with replacement,
/// from `palette`
///
/// # Examples
/// ```
/// use code_cracker::core::Palette;
/// use code_cracker::game::generate_code;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let palette = Palette::new(['R', 'G', 'B']).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate_code(&palette, 4, &mut rng);
///
/// assert_eq!(code.len(), 4);
/// assert!(code.colors().iter().all(|&c| palette.contains(c)));
/// ```
#[must_use]
pub fn generate_code<R: Rng + ?Sized>(palette: &Palette, length: usize, rng: &mut R) -> Code {
    let colors = palette.colors();
    let code = Code::new(
        (0..length)
            .map(|_| colors[rng.random_range(0..colors.len())])
            .collect(),
    );

    tracing::trace!(%code, "Generated secret code");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COLORS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashMap;

    fn palette() -> Palette {
        Palette::new(DEFAULT_COLORS).unwrap()
    }

    #[test]
    fn generated_codes_use_palette_colors() {
        let palette = palette();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let code = generate_code(&palette, 4, &mut rng);
            assert_eq!(code.len(), 4);
            assert!(code.colors().iter().all(|&c| palette.contains(c)));
        }
    }

    #[test]
    fn generated_colors_are_roughly_uniform() {
        let palette = palette();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts: FxHashMap<_, usize> = FxHashMap::default();

        for _ in 0..6000 {
            for &color in generate_code(&palette, 4, &mut rng).colors() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }

        // 24,000 draws over 6 colors: expect 4,000 each
        assert_eq!(counts.len(), 6);
        for (color, &count) in &counts {
            assert!(
                (3600..=4400).contains(&count),
                "{color} drawn {count} times"
            );
        }
    }

    #[test]
    fn single_color_palette() {
        let palette = Palette::new(['W']).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let code = generate_code(&palette, 5, &mut rng);
        assert_eq!(code.to_string(), "W W W W W");
    }

    #[test]
    fn same_seed_same_code() {
        let palette = palette();
        let a = generate_code(&palette, 4, &mut StdRng::seed_from_u64(99));
        let b = generate_code(&palette, 4, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
