//! Run normalization
//!
//! Word splits text into runs for reasons invisible to the reader: spell
//! checking, revision ids, editing history. A document re-saved by another
//! editor can carry the same formatted text in a different number of runs.
//! Merging adjacent runs with equal [`RunStyle`](crate::model::RunStyle)
//! makes the representation independent of that splitting.

use crate::model::Run;

/// Drop runs with empty text and merge adjacent runs with identical style.
///
/// After this, no two neighbouring runs share a style and no run has empty
/// text. The output is fully determined by the input order and styles.
pub fn normalize_runs(runs: Vec<Run>) -> Vec<Run> {
    // Empty runs go first so they cannot keep equal neighbours apart
    let mut runs = runs.into_iter().filter(|run| !run.text.is_empty());
    let mut merged: Vec<Run> = Vec::new();

    let Some(mut current) = runs.next() else {
        return merged;
    };

    for run in runs {
        if run.style == current.style {
            current.text.push_str(&run.text);
        } else {
            merged.push(std::mem::replace(&mut current, run));
        }
    }
    merged.push(current);
    merged
}
