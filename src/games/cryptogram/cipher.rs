//! Letter-substitution cipher over the letters a text actually uses.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::RandomSource;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One-letter-to-one-letter mapping.
pub type LetterMap = FxHashMap<char, char>;

/// A cipher and its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cipher {
    encrypt: LetterMap,
    decrypt: LetterMap,
}

impl Cipher {
    /// Build a cipher that permutes exactly the letters present in `text`.
    ///
    /// Letters are collected in alphabet order and shuffled; the i-th letter
    /// encrypts to the i-th shuffled letter. Letters absent from the text are
    /// not part of the cipher.
    pub fn for_text(text: &str, rng: &mut impl RandomSource) -> Self {
        let letters: SmallVec<[char; 26]> = ALPHABET.chars().filter(|&c| text.contains(c)).collect();
        let mut shuffled = letters.clone();
        rng.shuffle(shuffled.as_mut_slice());

        let mut encrypt = LetterMap::default();
        let mut decrypt = LetterMap::default();
        for (&plain, &secret) in letters.iter().zip(shuffled.iter()) {
            encrypt.insert(plain, secret);
            decrypt.insert(secret, plain);
        }

        Self { encrypt, decrypt }
    }

    #[must_use]
    pub fn encrypt_map(&self) -> &LetterMap {
        &self.encrypt
    }

    #[must_use]
    pub fn decrypt_map(&self) -> &LetterMap {
        &self.decrypt
    }

    /// Encrypt a text.
    #[must_use]
    pub fn encrypt(&self, text: &str) -> String {
        apply(text, &self.encrypt)
    }

    /// Number of distinct letters in the cipher.
    #[must_use]
    pub fn len(&self) -> usize {
        self.encrypt.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encrypt.is_empty()
    }
}

/// Substitute letters through `map`.
///
/// Mapped letters are replaced, unmapped capital letters become `_`, and
/// everything else (spaces, punctuation) is copied.
#[must_use]
pub fn apply(text: &str, map: &LetterMap) -> String {
    text.chars()
        .map(|c| match map.get(&c) {
            Some(&mapped) => mapped,
            None if ALPHABET.contains(c) => '_',
            None => c,
        })
        .collect()
}
