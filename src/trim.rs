//! Peeling enclosing punctuation off a token.
//!
//! Prose and logs wrap URIs in brackets and quotes: `(http://a.b)`,
//! `<http://a.b>`, `"http://a.b"`. The trimmer removes matching pairs from
//! the very outside of a token, one layer at a time, and stops at the first
//! layer that does not pair up. It never looks inside the token.

use crate::constants::BRACKET_PAIRS;
use crate::span::Span;

/// Returns true if `open` and `close` form one of the recognized pairs.
///
/// # Examples
///
/// ```
/// use grepurls::is_bracket_pair;
///
/// assert!(is_bracket_pair(b'(', b')'));
/// assert!(is_bracket_pair(b'"', b'"'));
/// assert!(!is_bracket_pair(b'{', b']'));
/// ```
#[must_use]
pub fn is_bracket_pair(open: u8, close: u8) -> bool {
    BRACKET_PAIRS
        .iter()
        .any(|&(o, c)| o == open && c == close)
}

/// Computes the region of `token` left after peeling symmetric bracket pairs.
///
/// A single byte is never trimmed; a token made only of nested pairs peels
/// down to an empty span.
///
/// # Examples
///
/// ```
/// use grepurls::{trim_brackets, Span};
///
/// assert_eq!(trim_brackets(b"(<http://a.b>)"), Span::new(2, 12));
/// assert_eq!(trim_brackets(b"(http://a.b]"), Span::new(0, 12));
/// assert!(trim_brackets(b"(())").is_empty());
/// ```
#[must_use]
pub fn trim_brackets(token: &[u8]) -> Span {
    let mut start = 0;
    let mut end = token.len();

    while end - start >= 2 && is_bracket_pair(token[start], token[end - 1]) {
        start += 1;
        end -= 1;
    }

    Span::new(start, end)
}
