//! Decoding a textual bit string back into symbols by tree traversal.

use log::trace;

use super::tree::Node;
use crate::error::{Error, Result};

/// Walk `tree` from the root, one bit at a time: '0' descends left, '1'
/// descends right. Reaching a leaf emits its symbol and resets the walk to
/// the root.
///
/// A transition attempted while standing on a leaf, or any character other
/// than '0'/'1', is corrupt input; a bit string that ends between the root
/// and a leaf is a truncated encoding. Both are fatal.
///
/// An empty bit string decodes to an empty output for every tree shape. For
/// the lone-leaf tree that means repeat counts are unrecoverable (the leaf's
/// code is the empty path); the encoder discards them, so this function can
/// do no better. See the lossy single-symbol tests pinning that behavior.
pub fn decode(tree: &Node, bits: &str) -> Result<Vec<char>> {
    let mut output = Vec::new();
    let mut current = tree;

    for (offset, bit) in bits.chars().enumerate() {
        let next = match (bit, current) {
            (_, Node::Leaf { .. }) => {
                return Err(Error::MalformedBitStream {
                    offset,
                    reason: "transition attempted from a leaf",
                })
            }
            ('0', Node::Internal { left, .. }) => left.as_ref(),
            ('1', Node::Internal { right, .. }) => right.as_ref(),
            _ => {
                return Err(Error::MalformedBitStream {
                    offset,
                    reason: "character is not a binary digit",
                })
            }
        };

        current = next;
        if let Node::Leaf { symbol, .. } = current {
            output.push(*symbol);
            current = tree;
        }
    }

    // A walk left hanging below the root means the encoding was cut short.
    if !std::ptr::eq(current, tree) {
        return Err(Error::TruncatedBitStream);
    }
    trace!("decoded {} bits into {} symbols", bits.len(), output.len());

    Ok(output)
}
