//! Constants shared by the trimmer and the grammar.

/// Bracket pairs peeled off the outside of a token before matching.
///
/// Membership is exact-pair: `{` only pairs with `}`.
pub const BRACKET_PAIRS: [(u8, u8); 6] = [
    (b'{', b'}'),
    (b'[', b']'),
    (b'(', b')'),
    (b'<', b'>'),
    (b'"', b'"'),
    (b'\'', b'\''),
];

/// RFC 3986 `sub-delims` without the apostrophe, so a closing `'` never
/// joins a match.
pub const SUB_DELIMS: &[u8] = b"!$&()*+,;=";

/// Punctuation allowed in `unreserved` besides letters and digits.
pub const UNRESERVED_MARKS: &[u8] = b"-._~";

/// Punctuation allowed after the first letter of a generic scheme.
pub const SCHEME_MARKS: &[u8] = b"+-.";
