//! Hit and Blow
//!
//! A terminal number-guessing game: guess the secret digits, one
//! comma-separated line at a time, until every digit hits.

use hit_and_blow::{Console, Game};
use std::io::{stdin, stdout};

fn main() -> hit_and_blow::Result<()> {
    let stdin = stdin();
    let stdout = stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut rng = rand::thread_rng();

    let mut game = Game::setup(&mut console, &mut rng)?;
    game.play(&mut console)?;
    game.end(&mut console)?;

    Ok(())
}
