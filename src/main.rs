//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
mod compression;
mod counter;
mod error;
mod huffman;
mod tools;

use compression::compress::compress;
use compression::decompress::decompress;
use compression::self_test;
use tools::cli::{huffopts_init, Mode};

use log::{error, info};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() {
    let options = huffopts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    if options.files.is_empty() {
        error!("No input files given. Try --help.");
        std::process::exit(1);
    }

    //----- Figure out what we need to do and go do it, file by file
    let mut failed = false;
    for fname in &options.files {
        let result = match options.op_mode {
            Mode::Zip => compress(&options, fname),
            Mode::Unzip => decompress(&options, fname),
            Mode::Test => self_test(fname),
        };
        if let Err(e) = result {
            error!("{}: {}", fname, e);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
    info!("Done.\n");
}
