//! mpags-cipher - classical ciphers over concurrently processed segments
//!
//! Encrypts or decrypts alphanumeric text with a Caesar, Vigenere or Playfair
//! cipher. The text is split into contiguous segments which are transformed
//! on separate threads and joined back in order; the result is identical to
//! transforming the whole text in one pass.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Sanitize → Create cipher → Prepare → Partition → Execute → Reassemble → Output
//! ```
//!
//! - **Sanitize**: upper-case letters, spell out digits, drop everything else
//! - **Create cipher**: validate the key for the requested kind
//! - **Prepare**: whole-text step; forms Playfair digraphs, no-op otherwise
//! - **Partition**: split into segments on digraph-safe boundaries, each
//!   segment carrying its absolute offset (Vigenere key phase)
//! - **Execute**: one scoped worker thread per segment, wait for all
//! - **Reassemble**: concatenate in segment order
//!
//! ## Example
//!
//! ```
//! use mpags_cipher::{run_job, CipherJob, CipherKind, CipherMode};
//!
//! let job = CipherJob {
//!     kind: CipherKind::Vigenere,
//!     key: "LEMON".into(),
//!     mode: CipherMode::Encrypt,
//!     workers: 4,
//! };
//! assert_eq!(run_job("ATTACKATDAWN", &job).unwrap(), "LXFOPVEFRNHR");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod job;
pub mod pipeline;
pub mod transform;

pub use cipher::{create, Cipher, CipherKind, CipherMode};
pub use error::{CipherError, Result};
pub use job::{run_job, run_sequential, CipherJob, DEFAULT_WORKERS};
pub use transform::sanitize;
