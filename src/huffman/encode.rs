//! Encoding a symbol stream into its textual bit string.

use log::trace;

use super::code_table::derive_code_table;
use super::tree::Node;
use crate::error::{Error, Result};

/// Encode a symbol stream against `tree`, concatenating each symbol's
/// bit-path into one growable string.
///
/// The code table is derived internally from the tree. An absent tree (the
/// source had no symbols) gives `Ok(None)`; the caller must branch on that
/// explicitly. A symbol missing from the table means the tree was built from
/// a different source than the stream being encoded, which is a caller
/// contract violation surfaced as [`Error::SymbolNotInTable`].
pub fn encode<I>(tree: Option<&Node>, symbols: I) -> Result<Option<String>>
where
    I: IntoIterator<Item = char>,
{
    let table = derive_code_table(tree);
    if table.is_empty() {
        return Ok(None);
    }

    let mut bits = String::new();
    for symbol in symbols {
        let code = table
            .get(symbol)
            .ok_or(Error::SymbolNotInTable(symbol))?;
        bits.push_str(code);
    }
    trace!("encoded stream into {} bits", bits.len());

    Ok(Some(bits))
}
