// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::str::FromStr;

use super::{ALPHABET_LEN, CipherError, parse_permutation};

/// A substitution key: `forward[i]` encrypts the i-th letter of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    forward: [u8; ALPHABET_LEN],
}

impl Key {
    /// The key that leaves every letter unchanged.
    pub fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = b'a' + i as u8;
        }
        Self { forward }
    }

    /// Parse a manually entered key: 26 distinct letters, any case.
    pub fn parse(s: &str) -> Result<Self, CipherError> {
        parse_permutation(s.trim()).map(|forward| Self { forward })
    }

    /// Keyword key: the keyword's letters without repeats, then the rest of
    /// the alphabet in order. Non-letters in the keyword are ignored.
    pub fn from_keyword(keyword: &str) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut used = [false; ALPHABET_LEN];
        let mut len = 0;

        let letters = keyword
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_lowercase())
            .chain(b'a'..=b'z');
        for letter in letters {
            let index = (letter - b'a') as usize;
            if !used[index] {
                used[index] = true;
                forward[len] = letter;
                len += 1;
            }
        }

        Self { forward }
    }

    pub(super) fn from_forward(forward: [u8; ALPHABET_LEN]) -> Self {
        Self { forward }
    }

    /// The key that undoes this one.
    pub fn inverse(&self) -> Self {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (i, &cipher) in self.forward.iter().enumerate() {
            inverse[(cipher - b'a') as usize] = b'a' + i as u8;
        }
        Self { forward: inverse }
    }

    /// Ciphertext letter for each plaintext letter.
    pub fn forward(&self) -> &[u8; ALPHABET_LEN] {
        &self.forward
    }
}

impl FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.forward {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
