//! Code Cracker
//!
//! A terminal Mastermind game: guess a hidden sequence of colors, getting
//! exact and partial match counts after each attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use code_cracker::core::{Code, Score};
//!
//! let secret = Code::from_symbols("RRGB").unwrap();
//! let guess = Code::from_symbols("RBBB").unwrap();
//!
//! // R and the last B are exact; the other Bs have nothing left to match
//! assert_eq!(Score::calculate(&guess, &secret), Score::new(2, 0));
//! ```

// Core domain types
pub mod core;

// Palette, length and attempt budget
pub mod config;

// Generator, guess reader and game loop
pub mod game;

// Terminal output formatting
pub mod output;

// Tracing setup for the binary
pub mod logging;
