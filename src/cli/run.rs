use crate::error::Result;
use crate::job::{run_job, CipherJob};
use crate::transform::sanitize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for a single encrypt/decrypt run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input file; stdin when `None`
    pub input: Option<PathBuf>,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    pub job: CipherJob,
}

/// Read, sanitize, transform and write.
/// Returns the transformed text.
pub fn run_cipher(options: &RunOptions) -> Result<String> {
    let raw = read_input(options.input.as_deref())?;
    let text = sanitize(&raw);
    debug!(raw = raw.len(), sanitized = text.len(), "input sanitized");

    let output = run_job(&text, &options.job)?;

    write_output(options.output.as_deref(), &output)?;
    Ok(output)
}

/// Read all input from a file, or stdin when no path is given.
///
/// Input is raw bytes; invalid UTF-8 becomes U+FFFD, which the sanitizer
/// drops like any other non-alphanumeric character.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `text` plus a trailing newline to a file, or stdout
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            writeln!(file, "{}", text)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{CipherKind, CipherMode};
    use crate::error::CipherError;
    use tempfile::tempdir;

    #[test]
    fn test_run_file_to_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.txt");
        let output = dir.path().join("cipher.txt");
        std::fs::write(&input, "Attack at dawn!\n").unwrap();

        let options = RunOptions {
            input: Some(input),
            output: Some(output.clone()),
            job: CipherJob {
                kind: CipherKind::Vigenere,
                key: "lemon".into(),
                ..Default::default()
            },
        };
        let result = run_cipher(&options).unwrap();
        assert_eq!(result, "LXFOPVEFRNHR");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "LXFOPVEFRNHR\n");
    }

    #[test]
    fn test_run_roundtrip_through_files() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let encrypted = dir.path().join("encrypted.txt");
        let decrypted = dir.path().join("decrypted.txt");
        std::fs::write(&plain, "Meet me at 9, by the old oak tree.").unwrap();

        let encrypt = RunOptions {
            input: Some(plain),
            output: Some(encrypted.clone()),
            job: CipherJob {
                kind: CipherKind::Caesar,
                key: "13".into(),
                workers: 3,
                ..Default::default()
            },
        };
        run_cipher(&encrypt).unwrap();

        let decrypt = RunOptions {
            input: Some(encrypted),
            output: Some(decrypted.clone()),
            job: CipherJob {
                mode: CipherMode::Decrypt,
                ..encrypt.job.clone()
            },
        };
        run_cipher(&decrypt).unwrap();

        assert_eq!(
            std::fs::read_to_string(&decrypted).unwrap(),
            "MEETMEATNINEBYTHEOLDOAKTREE\n"
        );
    }

    #[test]
    fn test_non_utf8_input_is_sanitized_away() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("latin1.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, b"caf\xe9 abc").unwrap();

        let options = RunOptions {
            input: Some(input),
            output: Some(output.clone()),
            job: CipherJob {
                key: "3".into(),
                ..Default::default()
            },
        };
        assert_eq!(run_cipher(&options).unwrap(), "FDIDEF");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "FDIDEF\n");
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let options = RunOptions {
            input: Some(dir.path().join("missing.txt")),
            output: Some(dir.path().join("out.txt")),
            job: CipherJob {
                key: "3".into(),
                ..Default::default()
            },
        };
        assert!(matches!(run_cipher(&options), Err(CipherError::Io(_))));
    }

    #[test]
    fn test_bad_key_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "hello").unwrap();

        let options = RunOptions {
            input: Some(input),
            output: Some(output.clone()),
            job: CipherJob {
                kind: CipherKind::Playfair,
                key: "not a key".into(),
                ..Default::default()
            },
        };
        assert!(matches!(
            run_cipher(&options),
            Err(CipherError::KeyValidation { .. })
        ));
        assert!(!output.exists());
    }
}
