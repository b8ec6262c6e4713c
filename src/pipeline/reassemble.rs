use crate::pipeline::engine::SegmentResult;

/// Concatenate segment outputs in ascending segment index order,
/// independent of the order the workers completed in
pub fn reassemble(mut results: Vec<SegmentResult>) -> String {
    results.sort_by_key(|r| r.index);
    let mut out = String::with_capacity(results.iter().map(|r| r.text.len()).sum());
    for result in &results {
        out.push_str(&result.text);
    }
    out
}
