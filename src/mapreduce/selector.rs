use super::types::{FrequencyTable, RankedEntry};
use crate::error::{AnalysisError, Result};
use std::cmp::Ordering;

/// Count descending, then token ascending. Tokens are unique within a table,
/// so this is a total order and the ranking never depends on map iteration.
fn rank_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token))
}

/// Returns the `n` highest-count entries of `table`, or all of them if there
/// are fewer than `n`.
pub fn top_n(table: &FrequencyTable, n: usize) -> Result<Vec<RankedEntry>> {
    if n == 0 {
        return Err(AnalysisError::invalid("top_n", n));
    }

    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(token, count)| RankedEntry::new(token, count))
        .collect();

    if entries.len() > n {
        entries.select_nth_unstable_by(n - 1, rank_order);
        entries.truncate(n);
    }
    entries.sort_unstable_by(rank_order);

    Ok(entries)
}
