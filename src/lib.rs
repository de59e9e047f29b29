//! huffzip: a symbol-frequency-driven prefix-code compressor.
//!
//! Builds a Huffman tree from the character distribution of an input
//! stream, derives a variable-length code table from the tree, and
//! transforms between character streams and textual '0'/'1' bit strings.
//!
//! Basic usage to compress a file:
//!
//! `$> huffzip -z test.txt`
//!
//! This writes test.txt.huf and deletes the original (keep it with -k).
//! Decompress with `huffzip -d test.txt.huf`.

pub mod compression;
pub mod counter;
pub mod error;
pub mod huffman;
pub mod tools;

pub use counter::Counter;
pub use error::{Error, Result};
pub use huffman::{build_tree, decode, derive_code_table, encode, CodeTable, Node};
