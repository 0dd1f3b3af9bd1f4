use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use itertools::Itertools;

use crate::entities::{Bin, Piece};
use crate::util::to_mm;

/// Canonical signature of a bar layout: the sorted multiset of (length in mm, label) of its pieces.
/// Two bars with the same key are cut identically, regardless of the order the pieces were placed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey(Vec<(i64, Arc<str>)>);

impl PatternKey {
    pub fn new(pieces: &[Piece]) -> Self {
        PatternKey(
            pieces
                .iter()
                .map(|p| (to_mm(p.length), p.label.clone()))
                .sorted()
                .collect(),
        )
    }
}

/// A deduplicated bar layout together with the number of physical bars cut this way.
#[derive(Debug, Clone)]
pub struct GroupedPattern {
    /// Human-readable bar mark (A, B, ..., Z, AA, AB, ...)
    pub tag: String,
    /// Pieces of the first bar with this layout, in placement order
    pub pieces: Vec<Piece>,
    /// Number of bars sharing this layout
    pub count: usize,
    /// Remaining length of each bar with this layout
    pub free_space: f64,
    /// Length consumed by pieces and blade loss on each bar with this layout
    pub used_length: f64,
}

impl GroupedPattern {
    /// Sum of the piece lengths on a single bar of this pattern
    pub fn piece_length(&self) -> f64 {
        self.pieces.iter().map(|p| p.length).sum()
    }
}

/// Collapses identical bins into [`GroupedPattern`]s.
/// Patterns are ordered by the first bin in which they were seen and tagged in that order.
pub fn group_bins(bins: &[Bin]) -> Vec<GroupedPattern> {
    let mut patterns: Vec<GroupedPattern> = vec![];
    let mut index: HashMap<PatternKey, usize> = HashMap::new();

    for bin in bins.iter().filter(|b| !b.is_empty()) {
        match index.entry(bin.signature()) {
            Entry::Occupied(e) => patterns[*e.get()].count += 1,
            Entry::Vacant(e) => {
                e.insert(patterns.len());
                patterns.push(GroupedPattern {
                    tag: bar_mark(patterns.len()),
                    pieces: bin.pieces.clone(),
                    count: 1,
                    free_space: bin.free_space(),
                    used_length: bin.used_length(),
                });
            }
        }
    }

    patterns
}

/// Bar mark for the `index`-th pattern, repeating the alphabet like spreadsheet columns: A..Z, AA..AZ, BA..
pub fn bar_mark(index: usize) -> String {
    let mut mark = vec![];
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        mark.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    mark.iter().rev().map(|&c| c as char).collect()
}
