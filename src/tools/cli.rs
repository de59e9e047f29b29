//! Command line interpretation - uses the external CLAP crate.

use clap::Parser;
use log::LevelFilter;

/// Compress, decompress, or self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control program behavior.
#[derive(Debug)]
pub struct HuffOpts {
    /// Names of files to process
    pub files: Vec<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Send output to stdout instead of a file
    pub stdout: bool,
    /// Verbosity of user information
    pub log_level: LevelFilter,
}

#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "A frequency-driven prefix-code (Huffman) file compressor",
    long_about = "
    Counts the character frequencies of the input, builds a Huffman tree,
    and writes the input as a textual stream of '0'/'1' code bits together
    with the frequency header needed to rebuild the identical tree on
    decompression. Done in the spirit of learning compression techniques;
    the 'compressed' file is a teaching artifact, not a space saver."
)]
struct Args {
    /// Filenames of files to process
    #[clap()]
    files: Vec<String>,

    /// Perform compression on the input files
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress, then decode in memory and compare against the input
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Write output to standard out instead of a file
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Be verbose (repeat for more: -v info, -vv debug, -vvv trace)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: usize,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Put command line information from CLAP into our internal structure.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    let op_mode = if args.test {
        Mode::Test
    } else if args.decompress {
        Mode::Unzip
    } else {
        // Compressing is the default action, as with bzip2.
        Mode::Zip
    };

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    HuffOpts {
        files: args.files,
        op_mode,
        keep_input_files: args.keep,
        force_overwrite: args.force,
        stdout: args.stdout,
        log_level,
    }
}
