// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frequency-analysis key recovery.

use std::str::FromStr;

use serde::Deserialize;

use super::{ALPHABET_LEN, CipherError, Key, decode, parse_permutation};

/// Letters of a language ordered from most to least frequent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct FrequencyTable {
    order: [u8; ALPHABET_LEN],
}

impl FrequencyTable {
    pub const ENGLISH: &'static str = "etaoinshrdlcumwfgypbvkjxqz";
    pub const PORTUGUESE: &'static str = "aeosridmntcupvlgqbfhzjxkwy";

    pub fn english() -> Self {
        Self::from_static(Self::ENGLISH)
    }

    pub fn portuguese() -> Self {
        Self::from_static(Self::PORTUGUESE)
    }

    /// Parse a 26-letter ordering, validated like a cipher key.
    pub fn parse(s: &str) -> Result<Self, CipherError> {
        parse_permutation(s.trim()).map(|order| Self { order })
    }

    fn from_static(s: &'static str) -> Self {
        let mut order = [0u8; ALPHABET_LEN];
        order.copy_from_slice(s.as_bytes());
        Self { order }
    }

    pub fn order(&self) -> &[u8; ALPHABET_LEN] {
        &self.order
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for FrequencyTable {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FrequencyTable {
    type Error = CipherError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// Result of a cracking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cracked {
    /// Best-guess encryption key.
    pub key: Key,
    /// Ciphertext decoded with `key`.
    pub plaintext: String,
}

/// Recovers substitution keys by matching letter frequencies.
#[derive(Debug, Clone, Default)]
pub struct Cracker {
    table: FrequencyTable,
}

impl Cracker {
    pub fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    /// Letter counts of `text`, case-insensitive.
    pub fn letter_counts(text: &str) -> [usize; ALPHABET_LEN] {
        let mut counts = [0; ALPHABET_LEN];
        for b in text.bytes().filter(u8::is_ascii_alphabetic) {
            counts[(b.to_ascii_lowercase() - b'a') as usize] += 1;
        }
        counts
    }

    /// Guess the key that produced `ciphertext`.
    ///
    /// The i-th most frequent ciphertext letter is assumed to encrypt the
    /// i-th letter of the frequency table. Ties rank alphabetically, and
    /// letters missing from the ciphertext take the leftover plaintext
    /// letters.
    pub fn crack(&self, ciphertext: &str) -> Cracked {
        let counts = Self::letter_counts(ciphertext);

        let mut ranked: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
        ranked.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]).then(a.cmp(&b)));

        let mut forward = [0u8; ALPHABET_LEN];
        for (&plain, &cipher) in self.table.order.iter().zip(&ranked) {
            forward[(plain - b'a') as usize] = b'a' + cipher;
        }

        let key = Key::from_forward(forward);
        tracing::debug!(key = %key, "cracked key");
        Cracked {
            plaintext: decode(ciphertext, &key),
            key,
        }
    }
}

#[cfg(test)]
#[path = "crack_tests.rs"]
mod tests;
