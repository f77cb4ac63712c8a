//! Error types for strict URI validation.
//!
//! Extraction never fails: a token without a URI simply yields `None`.
//! These errors only come from [`Extractor::parse_exact`](crate::Extractor::parse_exact),
//! which demands that the whole input is one URI.

use std::fmt;

/// Errors that can occur when validating a complete URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// No accepted scheme at the start of the input
    UnknownScheme {
        /// The text before the first ':', if there is one
        found: Option<String>,
    },
    /// The scheme is not followed by ':'
    MissingColon {
        /// Position where ':' was expected
        position: usize,
    },
    /// A committed construct (percent-encoding, IP literal) is incomplete
    Malformed {
        /// Position where the construct broke off
        position: usize,
    },
    /// A URI matched but did not cover the whole input
    TrailingInput {
        /// The first character not covered
        char: char,
        /// Position of that character
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::UnknownScheme { found } => match found {
                Some(s) => write!(f, "scheme '{s}' is not recognized"),
                None => write!(f, "missing scheme; expected '<scheme>:'"),
            },
            ParseErrorKind::MissingColon { position } => {
                write!(f, "expected ':' after scheme at position {position}")
            }
            ParseErrorKind::Malformed { position } => {
                write!(
                    f,
                    "malformed percent-encoding or IP literal at position {position}"
                )
            }
            ParseErrorKind::TrailingInput { char, position } => {
                write!(f, "unexpected character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
