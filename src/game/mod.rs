//! Game components
//!
//! Secret generation, guess input and the session state machine.

pub mod generator;
pub mod reader;
pub mod session;

pub use generator::generate_code;
pub use reader::{GuessError, GuessReader, ReadError, parse_guess};
pub use session::{Outcome, Session, State, StepError};
