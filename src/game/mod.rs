//! Core game engine: mode selection, secret generation, play loop
//!
//! One [`Game`] value owns the whole session: the chosen mode, the secret, and
//! the attempt counter. It is created by the entry flow and passed down by
//! `&mut`; there is no shared or global state.

pub mod score;

pub use score::{score, validate, Score, DIGITS};

use crate::console::Console;
use crate::GameError;
use crate::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Difficulty mode, fixes the secret length for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Hard,
}

impl Mode {
    /// Labels offered at the mode prompt, in display order
    pub const LABELS: [&'static str; 2] = ["normal", "hard"];

    pub fn secret_length(self) -> usize {
        match self {
            Mode::Normal => 3,
            Mode::Hard => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = GameError;

    /// The mode prompt only ever hands back a listed label, so the error arm
    /// is a defensive invariant check rather than a reachable condition.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Mode::Normal),
            "hard" => Ok(Mode::Hard),
            other => Err(GameError::UnknownMode(other.to_string())),
        }
    }
}

/// One game session
#[derive(Debug)]
pub struct Game {
    mode: Mode,
    secret: Vec<&'static str>,
    try_count: u32,
}

impl Game {
    /// Interactive setup: ask for a mode, then generate the secret.
    pub fn setup<R, W>(console: &mut Console<R, W>, rng: &mut impl Rng) -> Result<Self>
    where
        R: BufRead,
        W: Write,
    {
        let choice = console.prompt_select("Select a game mode.", &Mode::LABELS)?;
        let mode = Mode::from_str(choice)?;
        Ok(Self::with_mode(mode, rng))
    }

    /// Start a session for an already-chosen mode.
    pub fn with_mode(mode: Mode, rng: &mut impl Rng) -> Self {
        Self {
            mode,
            secret: generate_secret(rng, mode.secret_length()),
            try_count: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn secret(&self) -> &[&'static str] {
        &self.secret
    }

    /// Number of guesses that passed validation and were scored
    pub fn try_count(&self) -> u32 {
        self.try_count
    }

    /// Prompt, validate, and score guesses until the secret is fully matched.
    ///
    /// Rejected guesses print `Invalid input.` and do not count as attempts.
    /// Scored but incorrect guesses print the Hit/Blow counts. The guess line
    /// is split on the literal comma with no per-element trimming, so spaces
    /// around the commas make a guess invalid.
    pub fn play<R, W>(&mut self, console: &mut Console<R, W>) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let prompt = format!("Enter {} digits separated by commas", self.secret.len());

        loop {
            let line = console.prompt_input(&prompt)?;
            let guess: Vec<&str> = line.split(',').collect();

            if !validate(&guess, self.secret.len()) {
                console.display("Invalid input.", true)?;
                continue;
            }

            let result = score(&self.secret, &guess);
            self.try_count += 1;

            if result.hit == self.secret.len() {
                return Ok(());
            }

            console.display(
                &format!("---\nHit: {}\nBlow: {}\n---", result.hit, result.blow),
                true,
            )?;
        }
    }

    /// Print the end-of-game summary with the final attempt count.
    pub fn end<R, W>(&self, console: &mut Console<R, W>) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        console.display(&format!("Correct!\nAttempts: {}", self.try_count), true)?;
        Ok(())
    }
}

/// Rejection sampling over the digit table: draw with replacement, keep a draw
/// only if the secret does not already contain it. Always terminates because
/// the table has more symbols than any secret length.
fn generate_secret(rng: &mut impl Rng, length: usize) -> Vec<&'static str> {
    let mut secret = Vec::with_capacity(length);

    while secret.len() < length {
        let draw = DIGITS[rng.gen_range(0..DIGITS.len())];
        if !secret.contains(&draw) {
            secret.push(draw);
        }
    }

    secret
}
