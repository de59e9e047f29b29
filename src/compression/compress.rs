//! The file compression driver.
//!
//! Two passes over the input: the first streams symbols into the frequency
//! counter, the second re-reads the (restartable) source and encodes it
//! against the tree. The phases are strictly sequential because the builder
//! needs the complete distribution before the first merge.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};

use log::{debug, info, warn};

use crate::compression::container::write_container;
use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::huffman::{build_tree, encode};
use crate::tools::cli::HuffOpts;
use crate::tools::symbol_reader::SymbolReader;

/// Compress one input file into `<name>.huf`.
pub fn compress(opts: &HuffOpts, fname: &str) -> Result<()> {
    // Pass 1: count every symbol in the input.
    let mut counter = Counter::new();
    let mut reader = SymbolReader::new(File::open(fname)?);
    let mut total_symbols: u64 = 0;
    while let Some(symbol) = reader.next_symbol()? {
        counter.increment(symbol);
        total_symbols += 1;
    }
    info!(
        "{}: {} symbols, {} distinct",
        fname,
        total_symbols,
        counter.len()
    );
    if counter.is_empty() {
        warn!("{}: empty input, writing an empty container", fname);
    }
    if counter.len() == 1 {
        // The lone symbol gets the empty code, so its repeat count cannot be
        // recovered from the bit string. The header still records it.
        warn!(
            "{}: single distinct symbol, encoding discards the repeat count",
            fname
        );
    }

    let tree = build_tree(counter.items());

    // Pass 2: reopen the source and encode it.
    let symbols: Vec<char> = SymbolReader::new(File::open(fname)?).collect::<Result<_>>()?;
    let bits = encode(tree.as_ref(), symbols)?.unwrap_or_default();
    debug!("{}: encoded to {} bits", fname, bits.len());
    if total_symbols > 0 {
        // Textual bits occupy a byte each, so this "compression" trades
        // space for legibility. Report the expansion honestly.
        info!(
            "{}: {:.2} output bits per input symbol",
            fname,
            bits.len() as f64 / total_symbols as f64
        );
    }

    let out_name = format!("{}.huf", fname);
    if opts.stdout {
        let stdout = io::stdout();
        write_container(&mut stdout.lock(), counter.items(), &bits)?;
    } else {
        let mut f_out = BufWriter::new(open_output(&out_name, opts.force_overwrite)?);
        write_container(&mut f_out, counter.items(), &bits)?;
        f_out.flush()?;
        info!("wrote {}", out_name);
    }

    if !opts.keep_input_files && !opts.stdout {
        fs::remove_file(fname)?;
        debug!("removed input {}", fname);
    }
    Ok(())
}

/// Create the output file, refusing to clobber an existing one unless the
/// user passed --force.
pub(crate) fn open_output(name: &str, force: bool) -> Result<File> {
    let file = if force {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(name)
    } else {
        OpenOptions::new().write(true).create_new(true).open(name)
    };
    file.map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            Error::Io(io::Error::new(
                e.kind(),
                format!("{} exists, use --force to overwrite", name),
            ))
        } else {
            Error::Io(e)
        }
    })
}
