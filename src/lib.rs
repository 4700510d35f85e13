//! Hit and Blow
//!
//! A terminal number-guessing game in the Mastermind/Bulls-and-Cows family.
//! The game picks a secret sequence of unique digits and the player keeps
//! guessing until every digit is in the right place.
//!
//! # Game Mechanics
//!
//! - **Hit**: a guessed digit that matches the secret at the same position
//! - **Blow**: a guessed digit present in the secret at a different position
//! - **Mode**: difficulty setting controlling secret length (normal=3, hard=4)
//!
//! # Architecture
//!
//! - `game` - Core game engine: mode selection, secret generation, play loop
//! - `console` - Line-oriented prompts over any reader/writer pair

pub mod console;
pub mod game;

pub use console::Console;
pub use game::{Game, Mode, Score};

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("unknown game mode: {0}")]
    UnknownMode(String),
}
