// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monoalphabetic substitution cipher.
//!
//! A [`Key`] maps each plaintext letter `a..=z` to a distinct ciphertext
//! letter. Case is preserved and non-letters pass through unchanged.
//! [`Cracker`] recovers a key by frequency analysis against an explicit
//! [`FrequencyTable`].

mod crack;
mod key;

pub use crack::{Cracked, Cracker, FrequencyTable};
pub use key::Key;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Error for malformed keys and frequency tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("key must have exactly 26 letters, got {len}")]
    InvalidLength { len: usize },

    #[error("key contains non-letter character {ch:?}")]
    NonAlphabetic { ch: char },

    #[error("key repeats letter '{letter}'")]
    DuplicateLetter { letter: char },

    #[error("no key given: pass --key or --keyword")]
    MissingKey,
}

/// Encrypt `text` with `key`.
pub fn encode(text: &str, key: &Key) -> String {
    substitute(text, key.forward())
}

/// Decrypt `text` that was encrypted with `key`.
pub fn decode(text: &str, key: &Key) -> String {
    substitute(text, key.inverse().forward())
}

/// Replace every ASCII letter through `table`, keeping its case.
fn substitute(text: &str, table: &[u8; ALPHABET_LEN]) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                table[(c as u8 - b'a') as usize] as char
            } else if c.is_ascii_uppercase() {
                table[(c as u8 - b'A') as usize].to_ascii_uppercase() as char
            } else {
                c
            }
        })
        .collect()
}

/// Parse 26 distinct letters, case-insensitively, into lowercase bytes.
fn parse_permutation(s: &str) -> Result<[u8; ALPHABET_LEN], CipherError> {
    let len = s.chars().count();
    if len != ALPHABET_LEN {
        return Err(CipherError::InvalidLength { len });
    }

    let mut letters = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, ch) in letters.iter_mut().zip(s.chars()) {
        if !ch.is_ascii_alphabetic() {
            return Err(CipherError::NonAlphabetic { ch });
        }
        let lower = ch.to_ascii_lowercase() as u8;
        let index = (lower - b'a') as usize;
        if seen[index] {
            return Err(CipherError::DuplicateLetter {
                letter: lower as char,
            });
        }
        seen[index] = true;
        *slot = lower;
    }

    Ok(letters)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
