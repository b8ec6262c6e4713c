//! The classical cipher family.
//!
//! Every cipher is a variant of the closed [`Cipher`] enum carrying its own
//! validated key material. Instances are built by [`create`] and never change
//! afterwards, so a single instance can be borrowed by any number of worker
//! threads at once.

pub mod caesar;
pub mod factory;
pub mod playfair;
pub mod vigenere;

pub use caesar::CaesarKey;
pub use factory::create;
pub use playfair::{prepare_digraphs, KeySquare};
pub use vigenere::VigenereKey;

use crate::error::{CipherError, Result};
use std::borrow::Cow;
use std::fmt;

/// Cipher family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherKind {
    #[default]
    Caesar,
    Vigenere,
    Playfair,
}

impl CipherKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::Playfair => "playfair",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CipherKind {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "playfair" => Ok(Self::Playfair),
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherMode {
    #[default]
    Encrypt,
    Decrypt,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// A ready-to-use cipher holding validated key material
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar(CaesarKey),
    Vigenere(VigenereKey),
    Playfair(KeySquare),
}

impl Cipher {
    pub fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar(_) => CipherKind::Caesar,
            Self::Vigenere(_) => CipherKind::Vigenere,
            Self::Playfair(_) => CipherKind::Playfair,
        }
    }

    /// Number of characters that must never be separated by a segment boundary
    pub fn unit(&self) -> usize {
        match self {
            Self::Playfair(_) => 2,
            Self::Caesar(_) | Self::Vigenere(_) => 1,
        }
    }

    /// Whole-text preparation that has to happen before partitioning.
    ///
    /// Only Playfair does anything here: it forms the digraphs (J/I merge,
    /// fillers between repeated letters, end padding) once over the full
    /// text so every segment receives complete pairs.
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Playfair(_) => Cow::Owned(prepare_digraphs(text)),
            Self::Caesar(_) | Self::Vigenere(_) => Cow::Borrowed(text),
        }
    }

    /// Apply the cipher to `text`, which starts at `start_offset` characters
    /// into the full prepared text.
    pub fn apply(&self, text: &str, mode: CipherMode, start_offset: usize) -> Result<String> {
        match self {
            Self::Caesar(key) => key.apply(text, mode, start_offset),
            Self::Vigenere(key) => key.apply(text, mode, start_offset),
            Self::Playfair(square) => square.apply(text, mode, start_offset),
        }
    }

    /// Sequential whole-text application
    pub fn transform(&self, text: &str, mode: CipherMode) -> Result<String> {
        let prepared = self.prepare(text);
        self.apply(&prepared, mode, 0)
    }
}
