//! Guess validation and Hit/Blow scoring
//!
//! Pure functions over the fixed digit alphabet. The simple containment check
//! in [`score`] only counts correctly because secrets are generated without
//! duplicates and guesses are rejected if they contain any; neither duplicate
//! check may be relaxed without reworking this algorithm.

/// The fixed symbol alphabet: the ten single-character decimal digits
pub const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Hit/Blow counts for one scored guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Right digit, right position
    pub hit: usize,
    /// Right digit, wrong position
    pub blow: usize,
}

/// Check whether a guess is scorable: secret length, alphabet-only elements,
/// no element repeated. Elements are matched byte-for-byte, so `" 2"` from an
/// input with spaces around the commas is out of the alphabet and rejected.
pub fn validate(guess: &[&str], secret_len: usize) -> bool {
    let length_ok = guess.len() == secret_len;
    let alphabet_ok = guess.iter().all(|g| DIGITS.iter().any(|d| d == g));
    let distinct_ok = guess
        .iter()
        .enumerate()
        .all(|(i, g)| guess.iter().position(|x| x == g) == Some(i));

    length_ok && alphabet_ok && distinct_ok
}

/// Score a validated guess against the secret.
pub fn score(secret: &[&str], guess: &[&str]) -> Score {
    let mut result = Score::default();

    for (i, g) in guess.iter().enumerate() {
        if secret[i] == *g {
            result.hit += 1;
        } else if secret.iter().any(|s| s == g) {
            result.blow += 1;
        }
    }

    result
}
