//! Derives the symbol -> bit-path lookup table from a Huffman tree.
//!
//! The table is what the encoder actually consumes; the tree itself is only
//! walked again on the decode side.

use std::collections::{BTreeMap, VecDeque};

use super::tree::Node;

/// An ordered map from symbol to its bit-path, the sequence of '0'/'1'
/// characters naming the left/right edges from the root to that symbol's
/// leaf. Built once per tree and read-only afterward.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Bit-path for `symbol`, if it was a leaf of the tree.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols, which equals the leaf count of the tree the
    /// table was derived from.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, bit-path) pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&s, code)| (s, code.as_str()))
    }
}

/// Walk the tree breadth-first and record the bit-path of every leaf.
///
/// Left edges append '0', right edges append '1', so each path's length is
/// the leaf's depth. A lone-leaf root gets the empty path. An absent tree
/// yields an empty table.
pub fn derive_code_table(tree: Option<&Node>) -> CodeTable {
    let mut table = CodeTable::default();
    let root = match tree {
        Some(root) => root,
        None => return table,
    };

    // The queue grows with the frontier, so there is no ceiling on tree size.
    let mut queue: VecDeque<(&Node, String)> = VecDeque::new();
    queue.push_back((root, String::new()));

    while let Some((node, path)) = queue.pop_front() {
        match node {
            Node::Leaf { symbol, .. } => {
                table.codes.insert(*symbol, path);
            }
            Node::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push('0');
                queue.push_back((left, left_path));

                let mut right_path = path;
                right_path.push('1');
                queue.push_back((right, right_path));
            }
        }
    }

    table
}

#[cfg(test)]
mod test {
    use super::derive_code_table;
    use crate::counter::Counter;
    use crate::huffman::tree::{build_tree, Node};

    /// Depth of `symbol`'s leaf, if present under `node`.
    fn leaf_depth(node: &Node, symbol: char, depth: usize) -> Option<usize> {
        match node {
            Node::Leaf { symbol: s, .. } if *s == symbol => Some(depth),
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => {
                leaf_depth(left, symbol, depth + 1).or_else(|| leaf_depth(right, symbol, depth + 1))
            }
        }
    }

    #[test]
    fn absent_tree_yields_empty_table() {
        let table = derive_code_table(None);
        assert!(table.is_empty());
    }

    #[test]
    fn lone_leaf_gets_empty_path() {
        let tree = build_tree([('x', 3)]).unwrap();
        let table = derive_code_table(Some(&tree));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('x'), Some(""));
    }

    #[test]
    fn scenario_code_lengths() {
        // {a:3, b:2, c:1}: a gets a 1-bit code, b and c 2-bit codes.
        let tree = build_tree([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        let table = derive_code_table(Some(&tree));
        assert_eq!(table.len(), 3);
        assert_eq!(table.get('a').unwrap().len(), 1);
        assert_eq!(table.get('b').unwrap().len(), 2);
        assert_eq!(table.get('c').unwrap().len(), 2);
    }

    #[test]
    fn codes_are_binary_digits_only() {
        let counter: Counter = "mississippi river".chars().collect();
        let tree = build_tree(counter.items()).unwrap();
        let table = derive_code_table(Some(&tree));
        for (_, code) in table.iter() {
            assert!(code.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn one_entry_per_leaf_with_depth_lengths() {
        let counter: Counter = "abracadabra alakazam".chars().collect();
        let tree = build_tree(counter.items()).unwrap();
        let table = derive_code_table(Some(&tree));
        assert_eq!(table.len(), tree.leaf_count());
        for (symbol, code) in table.iter() {
            assert_eq!(leaf_depth(&tree, symbol, 0), Some(code.len()));
        }
    }

    #[test]
    fn no_code_is_a_prefix_of_another() {
        let counter: Counter = "how much wood would a woodchuck chuck".chars().collect();
        let tree = build_tree(counter.items()).unwrap();
        let table = derive_code_table(Some(&tree));
        let codes: Vec<&str> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }
}
