//! Frequency counting for the symbol alphabet of an input stream.
//!
//! The counter is the first stage of the pipeline. It is fully populated
//! before tree construction starts, handed off by value, and never touched
//! again: the builder needs the complete distribution up front.

use std::collections::BTreeMap;

/// An ordered frequency table mapping each distinct symbol to its exact
/// occurrence count. Iteration order is symbol-lexicographic, which makes
/// everything downstream of it deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    counts: BTreeMap<char, u32>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Record one occurrence of `symbol`, inserting it with a count of 1 if
    /// it has not been seen before.
    pub fn increment(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Exact occurrence count for `symbol`, 0 if never counted.
    pub fn get(&self, symbol: char) -> u32 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All (symbol, count) pairs in symbol order. This ordered sequence is
    /// the input contract of the tree builder.
    pub fn items(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

impl FromIterator<char> for Counter {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for symbol in iter {
            counter.increment(symbol);
        }
        counter
    }
}

#[cfg(test)]
mod test {
    use super::Counter;

    #[test]
    fn counts_are_exact() {
        let counter: Counter = "aaabbc".chars().collect();
        assert_eq!(counter.get('a'), 3);
        assert_eq!(counter.get('b'), 2);
        assert_eq!(counter.get('c'), 1);
        assert_eq!(counter.get('z'), 0);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn empty_stream_yields_empty_table() {
        let counter: Counter = "".chars().collect();
        assert!(counter.is_empty());
        assert_eq!(counter.items().count(), 0);
    }

    #[test]
    fn items_are_in_symbol_order() {
        // Insertion order must not matter for iteration order.
        let counter: Counter = "cabacba".chars().collect();
        let items: Vec<(char, u32)> = counter.items().collect();
        assert_eq!(items, vec![('a', 3), ('b', 2), ('c', 2)]);
    }

    #[test]
    fn multibyte_symbols_count_like_any_other() {
        let counter: Counter = "héhé!".chars().collect();
        assert_eq!(counter.get('h'), 2);
        assert_eq!(counter.get('é'), 2);
        assert_eq!(counter.get('!'), 1);
    }
}
