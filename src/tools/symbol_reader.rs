//! The raw input collaborator: yields one symbol (Unicode scalar) at a time.
//!
//! The core never sees the file. It consumes a sequence of atomic symbols,
//! and this reader is where the tokenization policy lives: one UTF-8 encoded
//! character per symbol, at most four bytes. The source is restartable by
//! constructing a fresh reader over a reopened file, which is how the
//! compress driver makes its second pass.

use std::io::{BufReader, Read};

use crate::error::{Error, Result};

/// Reads symbols one at a time from any byte source.
pub struct SymbolReader<R: Read> {
    reader: BufReader<R>,
    /// Byte offset of the next unread symbol, for error reporting.
    offset: u64,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            offset: 0,
        }
    }

    /// Read the next symbol, or `None` at end of input.
    ///
    /// The UTF-8 leading byte fixes the sequence length (1-4 bytes); the
    /// continuation bytes are then read and the whole sequence validated. A
    /// sequence that is truncated or not valid UTF-8 is an
    /// [`Error::InvalidSymbol`] at the reported byte offset.
    pub fn next_symbol(&mut self) -> Result<Option<char>> {
        let mut lead = [0_u8; 1];
        match self.reader.read(&mut lead)? {
            0 => return Ok(None),
            _ => {}
        }

        let len = match lead[0] {
            0x00..=0x7f => 1,
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Err(Error::InvalidSymbol(self.offset)),
        };

        let mut buf = [0_u8; 4];
        buf[0] = lead[0];
        if len > 1 {
            self.reader
                .read_exact(&mut buf[1..len])
                .map_err(|_| Error::InvalidSymbol(self.offset))?;
        }

        let symbol = std::str::from_utf8(&buf[..len])
            .map_err(|_| Error::InvalidSymbol(self.offset))?
            .chars()
            .next()
            .ok_or(Error::InvalidSymbol(self.offset))?;

        self.offset += len as u64;
        Ok(Some(symbol))
    }
}

impl<R: Read> Iterator for SymbolReader<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_symbol().transpose()
    }
}

#[cfg(test)]
mod test {
    use super::SymbolReader;
    use crate::error::Error;
    use std::io::Cursor;

    #[test]
    fn ascii_symbols() {
        let mut reader = SymbolReader::new(Cursor::new("abc"));
        assert_eq!(reader.next_symbol().unwrap(), Some('a'));
        assert_eq!(reader.next_symbol().unwrap(), Some('b'));
        assert_eq!(reader.next_symbol().unwrap(), Some('c'));
        assert_eq!(reader.next_symbol().unwrap(), None);
    }

    #[test]
    fn multibyte_boundaries_are_respected() {
        // 2-, 3- and 4-byte sequences each come back as one symbol.
        let mut reader = SymbolReader::new(Cursor::new("é€𝄞x"));
        assert_eq!(reader.next_symbol().unwrap(), Some('é'));
        assert_eq!(reader.next_symbol().unwrap(), Some('€'));
        assert_eq!(reader.next_symbol().unwrap(), Some('𝄞'));
        assert_eq!(reader.next_symbol().unwrap(), Some('x'));
        assert_eq!(reader.next_symbol().unwrap(), None);
    }

    #[test]
    fn stray_continuation_byte_is_invalid() {
        let mut reader = SymbolReader::new(Cursor::new(vec![b'a', 0x80]));
        assert_eq!(reader.next_symbol().unwrap(), Some('a'));
        let err = reader.next_symbol().unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(1)));
    }

    #[test]
    fn truncated_sequence_is_invalid() {
        // Leading byte promises three bytes, input ends after two.
        let mut reader = SymbolReader::new(Cursor::new(vec![0xe2, 0x82]));
        let err = reader.next_symbol().unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol(0)));
    }

    #[test]
    fn iterator_collects_the_stream() {
        let reader = SymbolReader::new(Cursor::new("héllo"));
        let symbols: Vec<char> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(symbols, vec!['h', 'é', 'l', 'l', 'o']);
    }
}
