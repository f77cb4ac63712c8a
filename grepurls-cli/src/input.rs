//! Splitting a byte stream into whitespace-separated tokens.

use std::io::{self, BufRead};

/// Token separators: ASCII space, tab, newline, vertical tab, form feed and
/// carriage return.
pub fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Reads maximal runs of non-separator bytes from a buffered reader.
///
/// Tokens may span any number of internal buffer refills. Bytes are passed
/// through untouched, so input need not be UTF-8.
pub struct Tokens<R> {
    reader: R,
    token: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<&[u8]>> {
        self.token.clear();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                return Ok((!self.token.is_empty()).then_some(self.token.as_slice()));
            }

            let mut consumed = 0;
            let mut complete = false;
            for &b in available {
                consumed += 1;
                if !is_separator(b) {
                    self.token.push(b);
                } else if !self.token.is_empty() {
                    complete = true;
                    break;
                }
            }
            self.reader.consume(consumed);

            if complete {
                return Ok(Some(self.token.as_slice()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn collect<R: BufRead>(reader: R) -> Vec<Vec<u8>> {
        let mut tokens = Tokens::new(reader);
        let mut out = Vec::new();
        while let Some(token) = tokens.next_token().unwrap() {
            out.push(token.to_vec());
        }
        out
    }

    #[test]
    fn splits_on_all_separators() {
        let input = b"a b\tc\nd\x0be\x0cf\rg";
        let tokens = collect(Cursor::new(&input[..]));
        let expected: Vec<Vec<u8>> = "abcdefg".bytes().map(|b| vec![b]).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn collapses_separator_runs() {
        let tokens = collect(Cursor::new(&b"  \n\n one \t\r\n two  "[..]));
        assert_eq!(tokens, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(collect(Cursor::new(&b""[..])).is_empty());
        assert!(collect(Cursor::new(&b" \n\t "[..])).is_empty());
    }

    #[test]
    fn token_spans_buffer_refills() {
        let input = b"http://example.com/long/path next";
        let reader = BufReader::with_capacity(3, &input[..]);
        let tokens = collect(reader);
        assert_eq!(
            tokens,
            vec![b"http://example.com/long/path".to_vec(), b"next".to_vec()]
        );
    }

    #[test]
    fn passes_non_utf8_through() {
        let tokens = collect(Cursor::new(&b"\xff\xfe x"[..]));
        assert_eq!(tokens, vec![vec![0xff, 0xfe], b"x".to_vec()]);
    }

    #[test]
    fn separator_set() {
        for b in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
            assert!(is_separator(b));
        }
        assert!(!is_separator(0));
        assert!(!is_separator(0xa0));
    }
}
