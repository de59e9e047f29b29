//! Huffman prefix coding: tree construction, code table derivation, and the
//! encode/decode transforms between symbol streams and textual bit strings.
//!
//! The pipeline is strictly sequential. A fully populated frequency table is
//! turned into a tree by repeated minimum-pair merging, the tree is walked
//! once to derive the code table, and only then does encoding or decoding
//! run. Each stage owns its output and hands it off by move; the tree is
//! shared read-only between table derivation and decoding.
//!
//! The bit strings here are deliberately textual, one '0' or '1' character
//! per bit. Packing them, and persisting the tree next to them, is the
//! caller's business.

pub mod code_table;
pub mod decode;
pub mod encode;
pub mod tree;

pub use code_table::{derive_code_table, CodeTable};
pub use decode::decode;
pub use encode::encode;
pub use tree::{build_tree, Node};
