//! Cryptogram game loop.

use std::io::{BufRead, Write};

use super::cipher::{apply, Cipher, LetterMap};
use crate::core::{Console, GameRng, RandomSource, Result};

pub const SEED_PROMPT: &str = "Set the seed:";
const GUESS_PROMPT: &str = "Guess the letter in the shuffled text:";

/// Sentences a cryptogram is drawn from.
pub const SENTENCES: [&str; 10] = [
    "I am on my way to see you.",
    "You are in the big blue house.",
    "The sun is up, and I am happy.",
    "A cat is in the box with a toy.",
    "My dog is on the bed asleep.",
    "We go to the park for a walk.",
    "She is at home with her cat.",
    "The boy is by the tall tree.",
    "I have a pen and a pad for notes.",
    "You and I are on a fun trip.",
];

/// Whether an encrypted letter can still be guessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterCheck {
    /// Not a letter of this cryptogram.
    NotInCryptogram,
    /// Already solved.
    AlreadyFound,
    /// Open for a guess.
    Open(char),
}

/// Cryptogram state: the hidden sentence and the letters found so far.
#[derive(Clone, Debug)]
pub struct Cryptogram {
    original: String,
    cipher: Cipher,
    encrypted: String,
    /// Encrypted letter -> plain letter, for correct guesses only.
    found: LetterMap,
}

impl Cryptogram {
    /// Pick a sentence and a cipher from `rng`.
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let sentence = rng.choose(SENTENCES.as_slice()).copied().unwrap_or(SENTENCES[0]);
        Self::from_sentence(sentence, rng)
    }

    /// Encrypt a given sentence; the cipher is still drawn from `rng`.
    pub fn from_sentence(sentence: &str, rng: &mut impl RandomSource) -> Self {
        let original = sentence.to_uppercase();
        let cipher = Cipher::for_text(&original, rng);
        let encrypted = cipher.encrypt(&original);
        log::debug!("cryptogram over {} letters", cipher.len());

        Self {
            original,
            cipher,
            encrypted,
            found: LetterMap::default(),
        }
    }

    /// The upper-cased plain sentence.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn encrypted(&self) -> &str {
        &self.encrypted
    }

    #[must_use]
    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    /// The encrypted text decrypted with the letters found so far.
    #[must_use]
    pub fn progress(&self) -> String {
        apply(&self.encrypted, &self.found)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.found.len() == self.cipher.len()
    }

    /// Classify a player answer naming an encrypted letter.
    ///
    /// The answer must be exactly one letter (case-insensitive).
    #[must_use]
    pub fn check_letter(&self, answer: &str) -> LetterCheck {
        match single_upper(answer) {
            Some(letter) if self.cipher.decrypt_map().contains_key(&letter) => {
                if self.found.contains_key(&letter) {
                    LetterCheck::AlreadyFound
                } else {
                    LetterCheck::Open(letter)
                }
            }
            _ => LetterCheck::NotInCryptogram,
        }
    }

    /// Record a guess that `letter` decrypts to `answer`.
    ///
    /// Returns whether the guess was right.
    pub fn guess(&mut self, letter: char, answer: &str) -> bool {
        let plain = self.cipher.decrypt_map().get(&letter).copied();
        match (plain, single_upper(answer)) {
            (Some(plain), Some(guessed)) if plain == guessed => {
                self.found.insert(letter, plain);
                true
            }
            _ => false,
        }
    }

    fn print_progress<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.blank()?;
        console.say(format!("Shuffled: {}", self.encrypted))?;
        console.say(format!("Progress: {}", self.progress()))?;
        console.blank()
    }

    /// Ask until the player names an encrypted letter that is still open.
    fn ask_letter<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<char> {
        loop {
            let answer = console.prompt_line(GUESS_PROMPT)?.to_uppercase();
            match self.check_letter(&answer) {
                LetterCheck::Open(letter) => return Ok(letter),
                LetterCheck::AlreadyFound => {
                    console.say(format!("You already correctly guessed '{answer}'."))?;
                }
                LetterCheck::NotInCryptogram => {
                    console.say(format!("'{answer}' is not in the cryptogram."))?;
                }
            }
        }
    }

    /// Play until every letter is found. Returns the number of guesses.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<u32> {
        let mut guesses = 0;

        loop {
            self.print_progress(console)?;
            if self.is_solved() {
                return Ok(guesses);
            }

            let letter = self.ask_letter(console)?;
            let answer = console
                .prompt_line(&format!("What does '{letter}' map to:"))?
                .to_uppercase();
            guesses += 1;

            if self.guess(letter, &answer) {
                console.say(format!("Correct! '{letter}' is '{answer}'."))?;
                if self.is_solved() {
                    console.say("You solved the cryptogram!")?;
                }
            } else {
                console.say(format!("Incorrect. '{letter}' is not '{answer}'."))?;
            }
        }
    }
}

/// Play a whole cryptogram. Returns the number of guesses.
pub fn play<R: BufRead, W: Write>(console: &mut Console<R, W>, seed: Option<i64>) -> Result<u32> {
    let seed = match seed {
        Some(seed) => seed,
        None => console.prompt_int(SEED_PROMPT)?,
    };
    log::info!("cryptogram seeded with {seed}");

    let mut rng = GameRng::from_player_seed(seed);
    Cryptogram::new(&mut rng).run(console)
}

fn single_upper(answer: &str) -> Option<char> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
