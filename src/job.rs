use crate::cipher::{create, Cipher, CipherKind, CipherMode};
use crate::error::Result;
use crate::pipeline::{execute, partition, reassemble};
use tracing::info;

/// Worker count used when none is requested
pub const DEFAULT_WORKERS: usize = 4;

/// Everything the core needs besides the text itself
#[derive(Debug, Clone)]
pub struct CipherJob {
    pub kind: CipherKind,
    pub key: String,
    pub mode: CipherMode,
    pub workers: usize,
}

impl Default for CipherJob {
    fn default() -> Self {
        Self {
            kind: CipherKind::default(),
            key: String::new(),
            mode: CipherMode::default(),
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Run a job over sanitized text using the concurrent segment engine
/// Pipeline: Create cipher → Prepare → Partition → Execute → Reassemble
pub fn run_job(text: &str, job: &CipherJob) -> Result<String> {
    // Step 1: Validate key and build the cipher
    let cipher = create(job.kind, &job.key)?;
    apply_parallel(&cipher, text, job.mode, job.workers)
}

/// Apply an already constructed cipher across `workers` segments
pub fn apply_parallel(
    cipher: &Cipher,
    text: &str,
    mode: CipherMode,
    workers: usize,
) -> Result<String> {
    // Step 2: Whole-text preparation (Playfair digraphs)
    let prepared = cipher.prepare(text);

    // Step 3: Partition on unit-aligned boundaries
    let segments = partition(&prepared, workers, cipher.unit())?;
    if segments.is_empty() {
        return Ok(String::new());
    }
    info!(
        cipher = %cipher.kind(),
        %mode,
        segments = segments.len(),
        chars = prepared.chars().count(),
        "applying cipher"
    );

    // Step 4: One worker per segment, wait for all
    let results = execute(cipher, mode, segments)?;

    // Step 5: Reassemble in segment order
    Ok(reassemble(results))
}

/// Single-threaded reference path over the whole text
pub fn run_sequential(text: &str, job: &CipherJob) -> Result<String> {
    let cipher = create(job.kind, &job.key)?;
    cipher.transform(text, job.mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    fn job(kind: CipherKind, key: &str, mode: CipherMode, workers: usize) -> CipherJob {
        CipherJob {
            kind,
            key: key.into(),
            mode,
            workers,
        }
    }

    #[test]
    fn test_caesar_vectors() {
        let enc = job(CipherKind::Caesar, "3", CipherMode::Encrypt, 2);
        assert_eq!(run_job("ABC", &enc).unwrap(), "DEF");
        let dec = job(CipherKind::Caesar, "3", CipherMode::Decrypt, 2);
        assert_eq!(run_job("DEF", &dec).unwrap(), "ABC");
    }

    #[test]
    fn test_vigenere_independent_of_workers() {
        for workers in 1..=8 {
            let enc = job(CipherKind::Vigenere, "LEMON", CipherMode::Encrypt, workers);
            assert_eq!(
                run_job("ATTACKATDAWN", &enc).unwrap(),
                "LXFOPVEFRNHR",
                "workers={workers}"
            );
        }
    }

    #[test]
    fn test_playfair_textbook_for_every_worker_count() {
        for workers in 1..=8 {
            let enc = job(
                CipherKind::Playfair,
                "PLAYFAIREXAMPLE",
                CipherMode::Encrypt,
                workers,
            );
            assert_eq!(
                run_job("HIDETHEGOLDINTHETREESTUMP", &enc).unwrap(),
                "BMODZBXDNABEKUDMUIXMMOUVIF",
                "workers={workers}"
            );
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGANDKEEPSRUNNING";
        for (kind, key) in [
            (CipherKind::Caesar, "11"),
            (CipherKind::Vigenere, "CIPHERTEXT"),
            (CipherKind::Playfair, "MONARCHY"),
        ] {
            for mode in [CipherMode::Encrypt, CipherMode::Decrypt] {
                let expected = run_sequential(text, &job(kind, key, mode, 1)).unwrap();
                for workers in 1..=8 {
                    let actual = run_job(text, &job(kind, key, mode, workers)).unwrap();
                    assert_eq!(actual, expected, "{kind} {mode} workers={workers}");
                }
            }
        }
    }

    #[test]
    fn test_empty_text() {
        for kind in [CipherKind::Caesar, CipherKind::Vigenere, CipherKind::Playfair] {
            let key = if kind == CipherKind::Caesar { "5" } else { "KEY" };
            assert_eq!(
                run_job("", &job(kind, key, CipherMode::Encrypt, 4)).unwrap(),
                ""
            );
        }
    }

    #[test]
    fn test_more_workers_than_text() {
        let enc = job(CipherKind::Caesar, "1", CipherMode::Encrypt, 64);
        assert_eq!(run_job("AZ", &enc).unwrap(), "BA");
    }

    #[test]
    fn test_invalid_key_fails_before_work() {
        let enc = job(CipherKind::Caesar, "x", CipherMode::Encrypt, 4);
        assert!(matches!(
            run_job("ABC", &enc),
            Err(CipherError::KeyValidation { .. })
        ));
    }

    #[test]
    fn test_zero_workers_is_partition_error() {
        let enc = job(CipherKind::Caesar, "1", CipherMode::Encrypt, 0);
        assert!(matches!(
            run_job("ABC", &enc),
            Err(CipherError::Partition(_))
        ));
    }

    #[test]
    fn test_unsanitized_text_is_worker_failure() {
        let enc = job(CipherKind::Vigenere, "KEY", CipherMode::Encrypt, 2);
        assert!(matches!(
            run_job("HELLO WORLD", &enc),
            Err(CipherError::WorkerFailure { failed: 1, total: 2, .. })
        ));
    }

    #[test]
    fn test_default_job() {
        let job = CipherJob::default();
        assert_eq!(job.workers, DEFAULT_WORKERS);
        assert_eq!(job.kind, CipherKind::Caesar);
        assert_eq!(job.mode, CipherMode::Encrypt);
    }
}
