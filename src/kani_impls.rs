//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{CharClass, Span, UriGrammar, is_bracket_pair, trim_brackets};

/// Bytes that show up around URIs in prose, plus a few that never pair.
const TOKEN_BYTES: &[u8] = b"{}[]()<>\"'a:/";

impl kani::Arbitrary for Span {
    fn any() -> Self {
        let start: usize = kani::any();
        let len: usize = kani::any();
        kani::assume(start <= 64 && len <= 64);
        Span::new(start, start + len)
    }
}

impl kani::Arbitrary for CharClass {
    fn any() -> Self {
        let a = CharClass::byte(kani::any::<u8>() & 0x7f);
        let b = CharClass::byte(kani::any::<u8>() & 0x7f);
        a.union(b)
    }
}

fn arbitrary_token<const N: usize>() -> [u8; N] {
    let mut token = [0u8; N];
    for b in &mut token {
        let idx: usize = kani::any();
        *b = TOKEN_BYTES[idx % TOKEN_BYTES.len()];
    }
    token
}

/// Proof: trimming removes the same number of bytes from both ends
#[kani::proof]
#[kani::unwind(8)]
fn proof_trim_is_symmetric() {
    let token: [u8; 6] = arbitrary_token();
    let span = trim_brackets(&token);
    assert!(span.start() <= span.end());
    assert!(span.end() <= token.len());
    assert_eq!(span.start(), token.len() - span.end());
}

/// Proof: every peeled layer was a recognized pair
#[kani::proof]
#[kani::unwind(8)]
fn proof_trim_only_peels_pairs() {
    let token: [u8; 6] = arbitrary_token();
    let span = trim_brackets(&token);
    for i in 0..span.start() {
        assert!(is_bracket_pair(token[i], token[token.len() - 1 - i]));
    }
}

/// Proof: trimming an already trimmed region is a no-op
#[kani::proof]
#[kani::unwind(8)]
fn proof_trim_is_idempotent() {
    let token: [u8; 6] = arbitrary_token();
    let span = trim_brackets(&token);
    let inner = span.slice_bytes(&token);
    assert_eq!(trim_brackets(inner), Span::new(0, inner.len()));
}

/// Proof: a character class never contains a non-ASCII byte
#[kani::proof]
fn proof_class_is_ascii_only() {
    let class: CharClass = kani::any();
    let b: u8 = kani::any();
    kani::assume(!b.is_ascii());
    assert!(!class.contains(b));
}

/// Proof: span length is end minus start
#[kani::proof]
fn proof_span_len() {
    let span: Span = kani::any();
    assert_eq!(span.len(), span.end() - span.start());
    assert_eq!(span.is_empty(), span.start() == span.end());
}

/// Proof: a match never ends before it starts or past the input
#[kani::proof]
#[kani::unwind(12)]
fn proof_match_stays_in_bounds() {
    let token: [u8; 8] = arbitrary_token();
    let at: usize = kani::any();
    kani::assume(at < token.len());
    if let Some(end) = UriGrammar::any_scheme().match_at(&token, at).end() {
        assert!(at <= end && end <= token.len());
    }
}
