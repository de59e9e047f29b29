//! Error types shared across the crate.

use thiserror::Error;

/// Error variants for counting, coding and the file drivers.
///
/// Nothing here is retryable: every variant is either a caller contract
/// violation or corrupt/truncated input, and propagates straight up to the
/// caller. Expected absence, like an empty input, is modeled with `Option`
/// rather than an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The encoder was asked for a symbol that was never counted. The code
    /// table was built from a different source than the stream being encoded.
    #[error("symbol {0:?} is not in the code table")]
    SymbolNotInTable(char),

    /// The bit string requested a child transition from a leaf, or contained
    /// a character other than '0' or '1'.
    #[error("malformed bit string at offset {offset}: {reason}")]
    MalformedBitStream { offset: usize, reason: &'static str },

    /// The bit string ended partway between the root and a leaf.
    #[error("bit string ended mid-traversal (truncated encoding)")]
    TruncatedBitStream,

    /// The symbol reader hit a byte sequence that is not valid UTF-8.
    #[error("input is not a stream of valid UTF-8 symbols (offset {0})")]
    InvalidSymbol(u64),

    /// A compressed container failed magic or header validation.
    #[error("invalid container: {0}")]
    InvalidContainer(String),

    /// The -t self test decoded to something other than its input.
    #[error("self test failed: {0}")]
    SelfTestFailed(String),

    /// An I/O error from the underlying file operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for huffzip operations.
pub type Result<T> = std::result::Result<T, Error>;
