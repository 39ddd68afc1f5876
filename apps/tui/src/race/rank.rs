use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::series::Entry;

/// An entry placed on the board for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub label: String,
    pub magnitude: f64,
    pub rank: usize,
}

/// Ranks from the previous tick, used to order near-equal values.
pub type RankMemory = HashMap<String, usize>;

/// Orders entries by descending magnitude and keeps the top `cap`.
///
/// Values closer than `jitter_fraction` of the tick's largest value count as
/// tied and keep their order from `last_rank`; labels that were not on the
/// board rank as `cap`. The tolerance makes the comparison non-transitive, so
/// a stable insertion sort is used instead of `sort_by`, which may panic on
/// an inconsistent ordering.
pub fn rank_entries(
    entries: &[Entry],
    last_rank: &RankMemory,
    cap: usize,
    jitter_fraction: f64,
) -> Vec<RankedEntry> {
    let max = entries
        .iter()
        .map(|entry| entry.magnitude)
        .fold(0.0_f64, f64::max);
    let jitter = max * jitter_fraction;
    let previous = |label: &str| last_rank.get(label).copied().unwrap_or(cap);

    let compare = |a: &Entry, b: &Entry| -> Ordering {
        let diff = b.magnitude - a.magnitude;
        if diff.abs() < jitter {
            previous(&a.label).cmp(&previous(&b.label))
        } else if diff > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    };

    let mut ordered: Vec<&Entry> = entries.iter().collect();
    for i in 1..ordered.len() {
        let mut j = i;
        while j > 0 && compare(ordered[j - 1], ordered[j]) == Ordering::Greater {
            ordered.swap(j - 1, j);
            j -= 1;
        }
    }

    ordered
        .into_iter()
        .take(cap)
        .enumerate()
        .map(|(rank, entry)| RankedEntry {
            label: entry.label.clone(),
            magnitude: entry.magnitude,
            rank,
        })
        .collect()
}

pub fn remember_ranks(ranked: &[RankedEntry]) -> RankMemory {
    ranked
        .iter()
        .map(|entry| (entry.label.clone(), entry.rank))
        .collect()
}
