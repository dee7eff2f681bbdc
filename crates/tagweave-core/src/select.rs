//! Top-N word selection.
//!
//! Extracts the N highest-count entries from a frequency map under an
//! explicit total order: count descending, then word ascending. The order is
//! deterministic regardless of map iteration order, so equivalent maps always
//! yield the same selection.

use std::cmp::Ordering;
use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A word paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word, already lowercased by the frequency counter.
    pub word: String,
    /// Number of times the word occurred in the input.
    pub count: usize,
}

/// The selected top-N set, exposed in both orders consumers need.
///
/// Both views hold the same entries. `by_count` drives font scaling;
/// `alphabetical` drives display order in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Entries sorted by (count descending, word ascending).
    pub by_count: Vec<WordCount>,
    /// The same entries sorted by word ascending.
    pub alphabetical: Vec<WordCount>,
}

impl Selection {
    /// Number of selected words.
    pub const fn len(&self) -> usize {
        self.by_count.len()
    }

    /// Returns `true` if nothing was selected.
    pub const fn is_empty(&self) -> bool {
        self.by_count.is_empty()
    }
}

/// Total order for selection: count descending, then word ascending.
///
/// Words are lowercase, so byte-wise comparison is the case-insensitive
/// alphabetical tie-break.
fn by_count_desc(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Select the top `n` entries from a frequency map.
///
/// `n` is clamped to the number of distinct words; requesting more than
/// exist returns everything, never an error.
#[tracing::instrument(skip(frequencies), fields(distinct = frequencies.len()))]
pub fn select_top(n: usize, frequencies: &HashMap<String, usize>) -> Selection {
    let mut by_count: Vec<WordCount> = frequencies
        .iter()
        .map(|(word, &count)| WordCount {
            word: word.clone(),
            count,
        })
        .collect();

    by_count.sort_by(by_count_desc);
    by_count.truncate(n);

    let mut alphabetical = by_count.clone();
    alphabetical.sort_by(|a, b| a.word.cmp(&b.word));

    Selection {
        by_count,
        alphabetical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, usize)]) -> HashMap<String, usize> {
        entries
            .iter()
            .map(|&(w, c)| (w.to_string(), c))
            .collect()
    }

    #[test]
    fn orders_by_count_descending() {
        let selection = select_top(3, &map(&[("a", 1), ("b", 3), ("c", 2)]));
        let words: Vec<&str> = selection.by_count.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_break_alphabetically() {
        let selection = select_top(3, &map(&[("ran", 1), ("mat", 1), ("on", 1), ("sat", 1)]));
        let words: Vec<&str> = selection.by_count.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["mat", "on", "ran"]);
    }

    #[test]
    fn n_clamps_to_distinct_words() {
        let selection = select_top(10, &map(&[("a", 1), ("b", 2)]));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn zero_selects_nothing() {
        let selection = select_top(0, &map(&[("a", 1)]));
        assert!(selection.is_empty());
    }

    #[test]
    fn alphabetical_view_holds_same_entries() {
        let selection = select_top(3, &map(&[("the", 3), ("cat", 2), ("mat", 1), ("zzz", 0)]));
        let words: Vec<&str> = selection
            .alphabetical
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(words, vec!["cat", "mat", "the"]);
        assert_eq!(selection.by_count.len(), selection.alphabetical.len());
    }

    #[test]
    fn selection_is_insertion_order_independent() {
        let entries = [("delta", 2), ("alpha", 5), ("echo", 2), ("bravo", 1)];
        let forward = map(&entries);
        let mut reversed_entries = entries;
        reversed_entries.reverse();
        let reversed = map(&reversed_entries);

        assert_eq!(select_top(3, &forward), select_top(3, &reversed));
    }

    #[test]
    fn worked_example_top_three() {
        let freq = map(&[
            ("the", 3),
            ("cat", 2),
            ("sat", 1),
            ("on", 1),
            ("mat", 1),
            ("ran", 1),
        ]);
        let selection = select_top(3, &freq);
        let words: Vec<&str> = selection.by_count.iter().map(|w| w.word.as_str()).collect();
        // mat wins the count-1 tie: mat < on < ran < sat
        assert_eq!(words, vec!["the", "cat", "mat"]);
    }
}
