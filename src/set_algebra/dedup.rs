use std::collections::HashSet;

use tracing::trace;

/// Remove repeated values in place, keeping the first occurrence of each
/// value and the relative order of the survivors.
pub fn deduplicate(values: &mut Vec<i64>) {
    let before = values.len();
    let mut seen = HashSet::with_capacity(before);
    values.retain(|v| seen.insert(*v));
    if values.len() != before {
        trace!(removed = before - values.len(), kept = values.len(), "deduplicated");
    }
}
