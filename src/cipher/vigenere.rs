use super::caesar::shift_letter;
use super::{CipherKind, CipherMode};
use crate::error::{CipherError, Result};

/// Vigenere keyword stored as per-position shifts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CipherError::invalid_key(CipherKind::Vigenere, "key is empty"));
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(CipherError::invalid_key(
                CipherKind::Vigenere,
                format!("'{}' is not a letter", bad),
            ));
        }
        let shifts = raw
            .bytes()
            .map(|b| b.to_ascii_uppercase() - b'A')
            .collect();
        Ok(Self { shifts })
    }

    /// Key length, which is also the period of the key phase
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// The keyword, upper-cased
    pub fn keyword(&self) -> String {
        self.shifts.iter().map(|s| (b'A' + s) as char).collect()
    }

    /// The character at absolute position `p` uses key letter `p mod len`
    pub(crate) fn apply(&self, text: &str, mode: CipherMode, start_offset: usize) -> Result<String> {
        let period = self.shifts.len();
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let position = start_offset + i;
                let shift = self.shifts[position % period];
                shift_letter(c, shift, mode)
                    .ok_or(CipherError::UnsupportedCharacter { ch: c, position })
            })
            .collect()
    }
}
