//! Terminal output formatting
//!
//! Message text and colors for everything the game prints.

pub mod display;
pub mod formatters;
