//! The on-disk container written by the compress driver.
//!
//! The coding core deliberately persists nothing, so the driver has to carry
//! enough alongside the bit string for a later run to rebuild the tree. It
//! stores the frequency header rather than the tree itself: the builder is
//! deterministic over an ordered item sequence, so replaying the header
//! reproduces the encoder's tree bit-for-bit.
//!
//! Everything is textual, matching the textual bit string:
//!
//! ```text
//! HUF1                    magic
//! n                       distinct symbol count, decimal
//! <codepoint> <count>     n lines, decimal, in symbol-lexicographic order
//! <bits>                  the '0'/'1' string, possibly empty
//! ```

use std::io::Write;

use crate::error::{Error, Result};

const MAGIC: &str = "HUF1";

/// Write the frequency header and bit string to `out`.
pub fn write_container<W, I>(out: &mut W, items: I, bits: &str) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (char, u32)>,
{
    let items: Vec<(char, u32)> = items.into_iter().collect();
    writeln!(out, "{}", MAGIC)?;
    writeln!(out, "{}", items.len())?;
    for (symbol, count) in items {
        writeln!(out, "{} {}", symbol as u32, count)?;
    }
    writeln!(out, "{}", bits)?;
    Ok(())
}

/// Parse a container back into its ordered frequency items and bit string.
pub fn parse_container(text: &str) -> Result<(Vec<(char, u32)>, String)> {
    let mut lines = text.lines();

    match lines.next() {
        Some(MAGIC) => {}
        _ => return Err(Error::InvalidContainer("bad magic".to_string())),
    }

    let count: usize = lines
        .next()
        .and_then(|line| line.trim().parse().ok())
        .ok_or_else(|| Error::InvalidContainer("bad symbol count".to_string()))?;

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let line = lines
            .next()
            .ok_or_else(|| Error::InvalidContainer("truncated header".to_string()))?;
        let mut fields = line.split_whitespace();
        let codepoint: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| Error::InvalidContainer("bad codepoint".to_string()))?;
        let freq: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| Error::InvalidContainer("bad count".to_string()))?;
        let symbol = char::from_u32(codepoint)
            .ok_or_else(|| Error::InvalidContainer("codepoint is not a symbol".to_string()))?;
        items.push((symbol, freq));
    }

    let bits = lines.next().unwrap_or("").to_string();
    Ok((items, bits))
}
