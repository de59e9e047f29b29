//! Huffman tree construction by repeated minimum-pair merging.
//!
//! The builder consumes an ordered (symbol, count) sequence and greedily
//! merges the two lowest-frequency nodes until one tree remains. Greedy
//! pairwise merging minimizes the weighted path length of the leaves, which
//! is what makes the resulting prefix code optimal.
//!
//! The selection step is a deliberate O(n) linear scan rather than a heap.
//! The scan's tie-break (first-seen-wins, ties never displace a running
//! minimum) is part of the output contract: two runs over the same ordered
//! item sequence must produce bit-identical trees, and a heap breaks ties
//! differently unless it carries insertion sequence numbers.

/// A node of the Huffman tree. Internal nodes exclusively own their two
/// children; all traversals are top-down, so there are no parent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        freq: u32,
    },
    Internal {
        freq: u32,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Frequency of this node: the occurrence count for a leaf, the sum of
    /// both children for an internal node.
    pub fn freq(&self) -> u32 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves under (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Build the Huffman tree for an ordered (symbol, count) sequence, normally
/// the output of [`Counter::items`](crate::counter::Counter::items).
///
/// Returns `None` for an empty sequence. A single entry yields that leaf as
/// the whole tree, root included, with no internal nodes.
pub fn build_tree<I>(items: I) -> Option<Node>
where
    I: IntoIterator<Item = (char, u32)>,
{
    // One active slot per distinct symbol, in the sequence's order. Merged
    // slots become None; the survivor is the root.
    let mut nodes: Vec<Option<Node>> = items
        .into_iter()
        .map(|(symbol, freq)| Some(Node::Leaf { symbol, freq }))
        .collect();

    if nodes.is_empty() {
        return None;
    }

    // n leaves need exactly n - 1 merges.
    for _ in 1..nodes.len() {
        let (min1, min2) = find_two_mins(&nodes);
        merge_two_mins(&mut nodes, min1, min2);
    }

    nodes.into_iter().flatten().next()
}

/// Scan the active slots once, left to right, returning the slot indices of
/// the minimum and second-minimum frequencies.
///
/// A slot only displaces a running minimum when its frequency is strictly
/// smaller, so on equal frequencies the earlier slot wins. Callers must pass
/// at least two occupied slots.
fn find_two_mins(nodes: &[Option<Node>]) -> (usize, usize) {
    let mut min1: Option<(usize, u32)> = None;
    let mut min2: Option<(usize, u32)> = None;

    for (i, slot) in nodes.iter().enumerate() {
        let freq = match slot {
            Some(node) => node.freq(),
            None => continue,
        };

        match min1 {
            None => min1 = Some((i, freq)),
            Some((_, f1)) if freq < f1 => {
                min2 = min1;
                min1 = Some((i, freq));
            }
            Some(_) => match min2 {
                None => min2 = Some((i, freq)),
                Some((_, f2)) if freq < f2 => min2 = Some((i, freq)),
                Some(_) => {}
            },
        }
    }

    debug_assert!(min1.is_some() && min2.is_some());
    (
        min1.map(|(i, _)| i).unwrap_or(0),
        min2.map(|(i, _)| i).unwrap_or(0),
    )
}

/// Merge the nodes at `min1` and `min2` into one internal node whose
/// frequency is their sum. The minimum becomes the left child and its slot
/// holds the merged node; the second-minimum becomes the right child and its
/// slot is cleared.
fn merge_two_mins(nodes: &mut [Option<Node>], min1: usize, min2: usize) {
    let left = nodes[min1].take();
    let right = nodes[min2].take();

    if let (Some(left), Some(right)) = (left, right) {
        nodes[min1] = Some(Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        });
    }
}
