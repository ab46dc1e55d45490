//! Core domain types for Code Cracker
//!
//! Colors, palettes, codes and scores. Everything here is pure: no I/O and no
//! randomness.

mod code;
mod color;
mod score;

pub use code::Code;
pub use color::{Color, Palette, PaletteError};
pub use score::Score;
