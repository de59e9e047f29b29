//! The file decompression driver.
//!
//! Reads a container, replays its frequency header through the same
//! deterministic tree builder the compressor used, and walks the rebuilt
//! tree over the stored bit string.

use std::fs;
use std::io::{self, BufWriter, Write};

use log::{debug, info};

use crate::compression::compress::open_output;
use crate::compression::container::parse_container;
use crate::error::{Error, Result};
use crate::huffman::{build_tree, decode};
use crate::tools::cli::HuffOpts;

/// Decompress one `.huf` container back into its original contents.
pub fn decompress(opts: &HuffOpts, fname: &str) -> Result<()> {
    // The container is textual throughout, so it reads as one string.
    let text = fs::read_to_string(fname)?;
    let (items, bits) = parse_container(&text)?;
    info!(
        "{}: {} distinct symbols, {} bits",
        fname,
        items.len(),
        bits.len()
    );

    let tree = build_tree(items);
    let symbols = match &tree {
        Some(tree) => decode(tree, &bits)?,
        None => {
            // An empty header can only accompany an empty encoding.
            if !bits.is_empty() {
                return Err(Error::InvalidContainer(
                    "bit string present but no symbols in header".to_string(),
                ));
            }
            Vec::new()
        }
    };
    debug!("{}: decoded {} symbols", fname, symbols.len());

    let output: String = symbols.into_iter().collect();
    if opts.stdout {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        let out_name = output_name(fname);
        let mut f_out = BufWriter::new(open_output(&out_name, opts.force_overwrite)?);
        f_out.write_all(output.as_bytes())?;
        f_out.flush()?;
        info!("wrote {}", out_name);
    }

    if !opts.keep_input_files && !opts.stdout {
        fs::remove_file(fname)?;
        debug!("removed input {}", fname);
    }
    Ok(())
}

/// Strip the `.huf` suffix, or append `.out` when the input is named
/// something else.
fn output_name(fname: &str) -> String {
    match fname.strip_suffix(".huf") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", fname),
    }
}
