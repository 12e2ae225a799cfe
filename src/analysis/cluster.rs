// =============================================================================
// Price-Level Clustering
// =============================================================================
//
// Merges nearby swing prices into representative levels. Prices are sorted
// ascending and walked left to right; a price joins the open cluster when its
// relative gap to the *most recently added member* is within the threshold,
// otherwise the cluster closes and a new one opens. Each cluster collapses to
// the arithmetic mean of its members.
//
// The gap test runs against the last member rather than the running mean, so
// a long run of marginally-spaced prices chains into one cluster whose total
// span can exceed the threshold relative to its mean. Downstream level
// selection depends on that exact chaining.
//
// Output is ranked by descending member count ("votes"), ties keeping the
// order in which clusters closed — callers needing price order must re-sort.
// =============================================================================

/// Cluster `prices` into representative levels with a relative `threshold`.
///
/// Empty input yields an empty output; a single price is its own level.
pub fn cluster_levels(prices: &[f64], threshold: f64) -> Vec<f64> {
    if prices.is_empty() {
        return Vec::new();
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut clusters: Vec<Vec<f64>> = Vec::new();
    let mut current: Vec<f64> = vec![sorted[0]];

    for &price in &sorted[1..] {
        let last = *current.last().unwrap_or(&price);
        if (price - last) / last <= threshold {
            current.push(price);
        } else {
            clusters.push(std::mem::replace(&mut current, vec![price]));
        }
    }
    clusters.push(current);

    // Largest cluster first; sort_by is stable, so equal-sized clusters keep
    // their close order.
    clusters.sort_by(|a, b| b.len().cmp(&a.len()));

    clusters
        .iter()
        .map(|c| c.iter().sum::<f64>() / c.len() as f64)
        .collect()
}
