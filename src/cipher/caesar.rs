use super::{CipherKind, CipherMode};
use crate::error::{CipherError, Result};

const ALPHABET_SIZE: u8 = 26;

/// Caesar shift, normalized into `0..26`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarKey {
    shift: u8,
}

impl CaesarKey {
    /// Parse a signed integer shift; any integer is accepted and reduced mod 26
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CipherError::invalid_key(CipherKind::Caesar, "key is empty"));
        }
        let value: i64 = raw.parse().map_err(|_| {
            CipherError::invalid_key(
                CipherKind::Caesar,
                format!("shift '{}' is not an integer", raw),
            )
        })?;
        Ok(Self::new(value))
    }

    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(ALPHABET_SIZE as i64) as u8,
        }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub(crate) fn apply(&self, text: &str, mode: CipherMode, start_offset: usize) -> Result<String> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                shift_letter(c, self.shift, mode).ok_or(CipherError::UnsupportedCharacter {
                    ch: c,
                    position: start_offset + i,
                })
            })
            .collect()
    }
}

/// Shift one ASCII letter by `shift` places, keeping its case.
/// Returns `None` for anything that is not an ASCII letter.
pub(crate) fn shift_letter(c: char, shift: u8, mode: CipherMode) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let index = c as u8 - base;
    let shifted = match mode {
        CipherMode::Encrypt => (index + shift) % ALPHABET_SIZE,
        CipherMode::Decrypt => (index + ALPHABET_SIZE - shift) % ALPHABET_SIZE,
    };
    Some((base + shifted) as char)
}
