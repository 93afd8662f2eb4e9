//! # Dialogue Module
//!
//! The finite-state dialogue engine and its collaborators.
//!
//! ## Components
//! - `state`: the closed dialogue-state enum and transition function
//! - `intent`: name extraction and next-action keyword matching
//! - `turn_io`: the prompt/reply abstraction over the terminal
//! - `engine`: the state machine itself

pub mod engine;
pub mod intent;
pub mod state;
pub mod turn_io;

// Re-export main types for convenience
pub use engine::{DialogueEngine, Session};
pub use intent::{extract_name, match_next_action, NextAction};
pub use state::{transition, DialogueEvent, DialogueState};
pub use turn_io::{ConsoleIo, TurnIo};
#[cfg(test)]
pub use turn_io::ScriptedIo;
