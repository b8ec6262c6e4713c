use crate::error::{CipherError, Result};

/// A contiguous slice of the text handed to one worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Position in the original order
    pub index: usize,
    /// Absolute character offset of `text` within the full text
    pub offset: usize,
    pub text: String,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split `text` into at most `workers` contiguous segments.
///
/// Segment boundaries are placed at multiples of `unit`, so a group of
/// `unit` characters (a Playfair digraph, for example) never straddles two
/// segments. The last segment absorbs the remainder. An empty text yields
/// no segments.
pub fn partition(text: &str, workers: usize, unit: usize) -> Result<Vec<Segment>> {
    if workers == 0 {
        return Err(CipherError::Partition(
            "worker count must be at least 1".into(),
        ));
    }
    if unit == 0 {
        return Err(CipherError::Partition("unit size must be at least 1".into()));
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let count = effective_workers(len, workers, unit);
    let bounds = boundaries(len, count, unit);

    let segments = bounds
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Segment {
            index,
            offset: pair[0],
            text: chars[pair[0]..pair[1]].iter().collect(),
        })
        .collect();

    Ok(segments)
}

/// Clamp the worker count so every segment holds at least one full unit
pub fn effective_workers(len: usize, workers: usize, unit: usize) -> usize {
    workers.min((len / unit.max(1)).max(1))
}

/// Segment start offsets plus the final end offset.
///
/// Base boundaries sit at `i * (len / count)`; any boundary that is not a
/// multiple of `unit` is moved forward to the next one.
fn boundaries(len: usize, count: usize, unit: usize) -> Vec<usize> {
    let base = len / count;
    let mut bounds = Vec::with_capacity(count + 1);
    bounds.push(0);
    for i in 1..count {
        let raw = i * base;
        let aligned = raw.div_ceil(unit) * unit;
        bounds.push(aligned.min(len));
    }
    bounds.push(len);
    bounds
}
