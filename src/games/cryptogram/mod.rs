//! Cryptogram: recover a letter-substitution cipher one guess at a time.
//!
//! A sentence is picked with the seeded RNG and its letters are shuffled
//! among themselves. The player names an encrypted letter and what it maps
//! back to, until every letter is found.

mod cipher;
mod game;

pub use cipher::{apply, Cipher, LetterMap, ALPHABET};
pub use game::{play, Cryptogram, LetterCheck, SEED_PROMPT, SENTENCES};
