use crate::entry::Entry;

/// Filter entries by case-insensitive substring match against the path.
///
/// Returns indices into `entries` rather than copies, preserving original
/// order. The filtered view never owns entries, so selection toggles made
/// through the view are visible in the full set by construction.
pub fn filter_indices(entries: &[Entry], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..entries.len()).collect();
    }

    let term = term.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.path.to_string_lossy().to_lowercase().contains(&term))
        .map(|(i, _)| i)
        .collect()
}
