use crate::cipher::{Cipher, CipherMode};
use crate::error::{CipherError, Result};
use crate::pipeline::partition::Segment;
use std::any::Any;
use tracing::debug;

type Outcome = (usize, std::result::Result<String, String>);

/// Output of one segment worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentResult {
    pub index: usize,
    pub text: String,
}

/// Apply `cipher` to every segment on its own scoped thread.
///
/// All workers share the cipher by reference and own their segment text.
/// Every worker is joined before anything is returned; if any of them fails
/// (an `apply` error, a panic, or a thread that could not be spawned) the
/// whole run fails with a single [`CipherError::WorkerFailure`] and no
/// partial output. Results come back in segment order.
pub fn execute(
    cipher: &Cipher,
    mode: CipherMode,
    segments: Vec<Segment>,
) -> Result<Vec<SegmentResult>> {
    let total = segments.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let outcomes: Vec<Outcome> =
        crossbeam::thread::scope(|s| {
            let mut handles = Vec::with_capacity(total);
            let mut spawn_failures: Vec<Outcome> = Vec::new();

            for segment in segments {
                let index = segment.index;
                let spawned = s
                    .builder()
                    .name(format!("segment-{}", index))
                    .spawn(move |_| run_segment(cipher, mode, segment));
                match spawned {
                    Ok(handle) => handles.push((index, handle)),
                    Err(e) => spawn_failures.push((index, Err(format!("spawn failed: {}", e)))),
                }
            }

            // Wait-all: join every handle, whatever order they finish in
            let mut outcomes: Vec<Outcome> = handles
                .into_iter()
                .map(|(index, handle)| (index, join_outcome(handle.join())))
                .collect();
            outcomes.extend(spawn_failures);
            outcomes
        })
        .map_err(|_| CipherError::WorkerFailure {
            failed: total,
            total,
            detail: "worker scope panicked".into(),
        })?;

    collect_outcomes(outcomes, total)
}

fn run_segment(cipher: &Cipher, mode: CipherMode, segment: Segment) -> Result<String> {
    debug!(
        segment = segment.index,
        offset = segment.offset,
        len = segment.text.len(),
        "segment worker started"
    );
    let text = cipher.apply(&segment.text, mode, segment.offset)?;
    debug!(segment = segment.index, "segment worker finished");
    Ok(text)
}

/// Flatten a joined worker into its text or a failure description
fn join_outcome(joined: std::thread::Result<Result<String>>) -> std::result::Result<String, String> {
    match joined {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(&*payload))),
    }
}

/// Order outcomes by segment index and fold every failure into one error
fn collect_outcomes(mut outcomes: Vec<Outcome>, total: usize) -> Result<Vec<SegmentResult>> {
    outcomes.sort_by_key(|(index, _)| *index);

    let failures: Vec<String> = outcomes
        .iter()
        .filter_map(|(index, outcome)| {
            outcome
                .as_ref()
                .err()
                .map(|e| format!("segment {}: {}", index, e))
        })
        .collect();

    if !failures.is_empty() {
        return Err(CipherError::WorkerFailure {
            failed: failures.len(),
            total,
            detail: failures.join("; "),
        });
    }

    Ok(outcomes
        .into_iter()
        .filter_map(|(index, outcome)| outcome.ok().map(|text| SegmentResult { index, text }))
        .collect())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
