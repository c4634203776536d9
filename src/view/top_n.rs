use crate::metrics::DistributionEntry;

/// Number of entries shown by the dashboard's distribution charts.
pub const TOP_N: usize = 10;

/// The `n` entries with the largest values, largest first.
///
/// Entries with equal values keep their relative input order.
#[must_use]
pub fn top_n(entries: &[DistributionEntry], n: usize) -> Vec<DistributionEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted.truncate(n);
    sorted
}
