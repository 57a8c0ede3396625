/// Signed change of each value relative to the one before it. The first value has no baseline
/// and so its delta is zero.
#[must_use]
pub fn deltas(counts: &[i64]) -> Vec<i64> {
    let mut baseline = counts.first().copied().unwrap_or_default();
    counts
        .iter()
        .map(|&count| {
            let delta = count - baseline;
            baseline = count;
            delta
        })
        .collect()
}
