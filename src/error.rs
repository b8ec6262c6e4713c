use crate::cipher::CipherKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {kind} key: {reason}")]
    KeyValidation { kind: CipherKind, reason: String },

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("Partition error: {0}")]
    Partition(String),

    #[error("Unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },

    #[error("Digraph misaligned: segment at offset {offset} with length {len}")]
    DigraphAlignment { offset: usize, len: usize },

    #[error("{failed} of {total} workers failed: {detail}")]
    WorkerFailure {
        failed: usize,
        total: usize,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, CipherError>;

impl CipherError {
    pub(crate) fn invalid_key(kind: CipherKind, reason: impl Into<String>) -> Self {
        Self::KeyValidation {
            kind,
            reason: reason.into(),
        }
    }
}
