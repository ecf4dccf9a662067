//! Per-symbol occurrence counting.

use std::collections::HashMap;

use log::debug;

/// A distinct symbol of the input and how many times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCount {
    pub symbol: char,
    pub count: u64,
}

/// Counts every distinct symbol in `text`.
///
/// Entries come back in order of first appearance, which keeps tree
/// construction reproducible for a given text.
pub fn count_symbols(text: &str) -> Vec<SymbolCount> {
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut counts: Vec<SymbolCount> = Vec::new();

    for symbol in text.chars() {
        match index.get(&symbol) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(symbol, counts.len());
                counts.push(SymbolCount { symbol, count: 1 });
            }
        }
    }

    debug!(
        "Counted {} distinct symbols over {} total",
        counts.len(),
        total_count(&counts)
    );
    counts
}

pub fn total_count(counts: &[SymbolCount]) -> u64 {
    counts.iter().map(|c| c.count).sum()
}
