//! Support tools: command line parsing and the raw symbol reader.

pub mod cli;
pub mod symbol_reader;
