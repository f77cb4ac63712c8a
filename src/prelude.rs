//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use grepurls::prelude::*;
//!
//! let extractor = Extractor::new(ExtractorConfig::new().with_scheme_policy(SchemePolicy::Any));
//! assert_eq!(extractor.extract("[xyz://host]"), Some("xyz://host"));
//! ```
//!
//! The grammar engine types are left out; import them from the crate root.

pub use crate::{
    // Extraction
    ExtractedUri, Extractor, ExtractorConfig, SchemePolicy, Span, extract, trim_brackets,
    // Grammar
    Component, SchemeTable, UriGrammar,
    // Errors
    ParseError, ParseErrorKind,
};
