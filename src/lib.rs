//! Find URIs inside whitespace-separated text.
//!
//! This crate pulls at most one URI out of each token of a text stream. A
//! token is peeled of enclosing bracket pairs, then scanned left to right for
//! the first offset where an RFC 3986 `URI` matches.
//!
//! # Overview
//!
//! ```text
//! token ──► trim_brackets ──► scan offsets ──► URI grammar ──► first match
//! ```
//!
//! By default only schemes from the IANA registry are recognized, so
//! `xyz://host` is ignored while `http://host` is not. Matching is greedy
//! and never backtracks into a shorter URI: the match simply stops at the
//! first byte the grammar rejects.
//!
//! # Quick Start
//!
//! ```rust
//! use grepurls::Extractor;
//!
//! let extractor = Extractor::default();
//!
//! assert_eq!(extractor.extract("(http://example.com)"), Some("http://example.com"));
//! assert_eq!(
//!     extractor.extract("Check<http://foo.bar/baz?q=1#frag>now"),
//!     Some("http://foo.bar/baz?q=1#frag")
//! );
//! assert_eq!(extractor.extract("notaurl"), None);
//! ```
//!
//! # Components
//!
//! ```rust
//! use grepurls::Extractor;
//!
//! let uri = Extractor::default()
//!     .extract_uri("<ldap://[2001:db8::7]/c=GB?objectClass?one>")
//!     .unwrap();
//! assert_eq!(uri.scheme(), "ldap");
//! assert_eq!(uri.host(), Some("[2001:db8::7]"));
//! assert_eq!(uri.path(), "/c=GB");
//! assert_eq!(uri.query(), Some("objectClass?one"));
//! ```
//!
//! # Grammar Engine
//!
//! The URI rule is built on a small PEG interpreter ([`GrammarBuilder`],
//! [`Grammar`]) with ordered choice, greedy repetition, and committed
//! branches that abort instead of backtracking. It is public so other
//! byte-level grammars can reuse it.
//!
//! # Logging
//!
//! The crate emits `tracing` events at `trace` level for every match. It
//! installs no subscriber.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod constants;
mod error;
mod extractor;
mod grammar;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod scheme;
mod span;
mod trim;
mod uri_grammar;

pub use config::ExtractorConfig;
pub use constants::BRACKET_PAIRS;
pub use error::{ParseError, ParseErrorKind};
pub use extractor::{ExtractedUri, Extractor, extract};
pub use grammar::{Capture, CharClass, Grammar, GrammarBuilder, Outcome, Rule, RuleId};
pub use scheme::{IANA_SCHEMES, SchemeTable};
pub use span::Span;
pub use trim::{is_bracket_pair, trim_brackets};
pub use uri_grammar::{Component, SchemePolicy, UriGrammar};
