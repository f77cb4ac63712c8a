//! Finding the first URI inside a token.

use std::fmt;

use tracing::trace;

use crate::config::ExtractorConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::{Capture, CharClass, Outcome};
use crate::span::Span;
use crate::trim::trim_brackets;
use crate::uri_grammar::{Component, UriGrammar};

/// Extracts the first URI from `token` with the default configuration.
///
/// # Examples
///
/// ```
/// assert_eq!(grepurls::extract("(http://example.com)"), Some("http://example.com"));
/// assert_eq!(grepurls::extract("xyz://host"), None);
/// ```
#[must_use]
pub fn extract(token: &str) -> Option<&str> {
    Extractor::default().extract(token)
}

/// Finds URIs inside whitespace-free tokens.
///
/// The extractor peels enclosing bracket pairs off the token, then tries
/// the `URI` rule at every offset from left to right. The first offset where
/// it matches wins, and the match runs as far as the grammar consumes. At
/// most one URI is reported per token.
///
/// An `Extractor` holds only its configuration and a reference to a shared,
/// immutable grammar, so it is cheap to create and safe to share between
/// threads.
///
/// # Examples
///
/// ```
/// use grepurls::{Extractor, ExtractorConfig, SchemePolicy};
///
/// let extractor = Extractor::default();
/// assert_eq!(
///     extractor.extract("Check<http://foo.bar/baz?q=1#frag>now"),
///     Some("http://foo.bar/baz?q=1#frag")
/// );
///
/// let any = Extractor::new(ExtractorConfig::new().with_scheme_policy(SchemePolicy::Any));
/// assert_eq!(any.extract("xyz://host"), Some("xyz://host"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    config: ExtractorConfig,
    grammar: &'static UriGrammar,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl Extractor {
    /// Creates an extractor with the given configuration.
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            grammar: UriGrammar::for_policy(config.scheme_policy),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Returns the span of the first URI in `token`.
    ///
    /// Works on raw bytes so callers can scan input that is not valid UTF-8;
    /// the returned span always covers ASCII only.
    #[must_use]
    pub fn find(&self, token: &[u8]) -> Option<Span> {
        let region = self.region(token);
        let input = &token[..region.end()];

        let span = region.range().find_map(|start| {
            // Every scheme, registered or generic, starts with a letter.
            if !CharClass::ALPHA.contains(input[start]) {
                return None;
            }
            match self.grammar.match_at(input, start) {
                Outcome::Matched(end) if end > start => Some(Span::new(start, end)),
                _ => None,
            }
        })?;

        trace!(start = span.start(), end = span.end(), "uri matched");
        Some(span)
    }

    /// Returns the first URI in `token` as a substring.
    #[must_use]
    pub fn extract<'a>(&self, token: &'a str) -> Option<&'a str> {
        self.find(token.as_bytes()).map(|span| span.slice(token))
    }

    /// Returns the first URI in `token` with its components.
    ///
    /// # Examples
    ///
    /// ```
    /// use grepurls::Extractor;
    ///
    /// let uri = Extractor::default()
    ///     .extract_uri("<https://user@example.com:8443/a/b?x=1#top>")
    ///     .unwrap();
    /// assert_eq!(uri.scheme(), "https");
    /// assert_eq!(uri.userinfo(), Some("user"));
    /// assert_eq!(uri.host(), Some("example.com"));
    /// assert_eq!(uri.port_number(), Some(8443));
    /// assert_eq!(uri.path(), "/a/b");
    /// assert_eq!(uri.query(), Some("x=1"));
    /// assert_eq!(uri.fragment(), Some("top"));
    /// ```
    #[must_use]
    pub fn extract_uri<'a>(&self, token: &'a str) -> Option<ExtractedUri<'a>> {
        let span = self.find(token.as_bytes())?;
        let mut captures = Vec::new();
        let input = &token.as_bytes()[..span.end()];
        match self.grammar.match_components(input, span.start(), &mut captures) {
            Outcome::Matched(end) if end == span.end() => {
                Some(ExtractedUri::from_captures(token, span, &captures))
            }
            _ => None,
        }
    }

    /// Parses `input` as exactly one URI, without trimming or scanning.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input does not start with an accepted scheme
    /// - The scheme is not followed by ':'
    /// - A percent-encoding or IP literal is malformed where the URI must
    ///   continue
    /// - The URI ends before the input does
    ///
    /// # Examples
    ///
    /// ```
    /// use grepurls::{Extractor, ParseErrorKind};
    ///
    /// let extractor = Extractor::default();
    /// assert!(extractor.parse_exact("http://example.com/").is_ok());
    ///
    /// let err = extractor.parse_exact("http://example.com/>").unwrap_err();
    /// assert_eq!(err.kind, ParseErrorKind::TrailingInput { char: '>', position: 19 });
    /// ```
    pub fn parse_exact<'a>(&self, input: &'a str) -> Result<ExtractedUri<'a>, ParseError> {
        self.parse_exact_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    fn parse_exact_inner<'a>(&self, input: &'a str) -> Result<ExtractedUri<'a>, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        let bytes = input.as_bytes();
        let mut captures = Vec::new();
        match self.grammar.match_components(bytes, 0, &mut captures) {
            Outcome::Matched(end) if end == input.len() => Ok(ExtractedUri::from_captures(
                input,
                Span::new(0, end),
                &captures,
            )),
            Outcome::Matched(end) => match malformed_escape(bytes, end) {
                Some(position) => Err(ParseErrorKind::Malformed { position }),
                None => Err(ParseErrorKind::TrailingInput {
                    char: input[end..].chars().next().unwrap_or_default(),
                    position: end,
                }),
            },
            Outcome::Aborted { at } => Err(ParseErrorKind::Malformed { position: at }),
            Outcome::Missed => match self.grammar.scheme_len(bytes) {
                Some(len) => Err(ParseErrorKind::MissingColon { position: len }),
                None => Err(ParseErrorKind::UnknownScheme {
                    found: input.split_once(':').map(|(scheme, _)| scheme.to_string()),
                }),
            },
        }
    }

    fn region(&self, token: &[u8]) -> Span {
        if self.config.trim_brackets {
            trim_brackets(token)
        } else {
            Span::new(0, token.len())
        }
    }
}

/// Position of the first bad hex digit when `at` starts a broken `%XX`.
///
/// A repetition stops cleanly in front of a broken escape, so the grammar
/// reports a short match rather than an abort.
fn malformed_escape(bytes: &[u8], at: usize) -> Option<usize> {
    if bytes.get(at) != Some(&b'%') {
        return None;
    }
    (at + 1..at + 3).find(|&i| !bytes.get(i).is_some_and(u8::is_ascii_hexdigit))
}

/// A URI found in a token, with its component spans.
///
/// Components borrow from the token the URI was found in. No normalization
/// is applied: every accessor returns the exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUri<'a> {
    source: &'a str,
    span: Span,
    scheme: Span,
    authority: Option<Span>,
    userinfo: Option<Span>,
    host: Option<Span>,
    port: Option<Span>,
    path: Span,
    query: Option<Span>,
    fragment: Option<Span>,
}

impl<'a> ExtractedUri<'a> {
    fn from_captures(source: &'a str, span: Span, captures: &[Capture<Component>]) -> Self {
        let find = |tag: Component| {
            captures
                .iter()
                .rev()
                .find(|c| c.tag == tag)
                .map(|c| c.span)
        };
        let empty = Span::empty(span.start());

        Self {
            source,
            span,
            scheme: find(Component::Scheme).unwrap_or(empty),
            authority: find(Component::Authority),
            userinfo: find(Component::UserInfo),
            host: find(Component::Host),
            port: find(Component::Port),
            path: find(Component::Path).unwrap_or(empty),
            query: find(Component::Query),
            fragment: find(Component::Fragment),
        }
    }

    /// Returns the URI text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.span.slice(self.source)
    }

    /// Returns the URI's position inside the token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the scheme as written (not lowercased).
    #[must_use]
    pub fn scheme(&self) -> &'a str {
        self.scheme.slice(self.source)
    }

    /// Returns the authority, if the URI has a `//` part.
    #[must_use]
    pub fn authority(&self) -> Option<&'a str> {
        self.authority.map(|s| s.slice(self.source))
    }

    /// Returns the user information before `@`, if present.
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo.map(|s| s.slice(self.source))
    }

    /// Returns the host, if the URI has an authority.
    ///
    /// IP literals keep their brackets.
    #[must_use]
    pub fn host(&self) -> Option<&'a str> {
        self.host.map(|s| s.slice(self.source))
    }

    /// Returns the port digits, if a `:` followed the host.
    ///
    /// The port may be empty (`http://host:/`).
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        self.port.map(|s| s.slice(self.source))
    }

    /// Returns the port as a number, if present and in range.
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        self.port().and_then(|p| p.parse().ok())
    }

    /// Returns the path, which may be empty.
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path.slice(self.source)
    }

    /// Returns the query without its leading `?`, if present.
    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.query.map(|s| s.slice(self.source))
    }

    /// Returns the fragment without its leading `#`, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment.map(|s| s.slice(self.source))
    }
}

impl fmt::Display for ExtractedUri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ExtractedUri<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExtractedUri<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri_grammar::SchemePolicy;

    #[test]
    fn extracts_bracketed_uri() {
        assert_eq!(extract("(http://example.com)"), Some("http://example.com"));
        assert_eq!(extract("<http://example.com>"), Some("http://example.com"));
        assert_eq!(extract("'http://example.com'"), Some("http://example.com"));
    }

    #[test]
    fn nothing_without_scheme() {
        assert_eq!(extract("notaurl"), None);
        assert_eq!(extract(""), None);
        assert_eq!(extract("xyz://host"), None);
    }

    #[test]
    fn finds_embedded_uri() {
        assert_eq!(
            extract("Check<http://foo.bar/baz?q=1#frag>now"),
            Some("http://foo.bar/baz?q=1#frag")
        );
        assert_eq!(extract("url=https://a.b/c"), Some("https://a.b/c"));
    }

    #[test]
    fn first_start_offset_wins() {
        // "data:" starts earlier than "http:" and is a valid URI on its own.
        assert_eq!(extract("metadata:http://x"), Some("data:http://x"));
    }

    #[test]
    fn only_one_match_per_token() {
        assert_eq!(extract("http://a.b\"http://c.d"), Some("http://a.b"));
    }

    #[test]
    fn empty_after_trim() {
        assert_eq!(extract("(())"), None);
        assert_eq!(extract("\"\""), None);
    }

    #[test]
    fn mismatched_brackets_are_not_trimmed() {
        // '(' and ']' don't pair; ']' is outside every URI character class.
        assert_eq!(extract("(http://a.b]"), Some("http://a.b"));
    }

    #[test]
    fn unpaired_trailing_paren_is_kept() {
        assert_eq!(extract("http://a.b/x)"), Some("http://a.b/x)"));
    }

    #[test]
    fn trimming_can_be_disabled() {
        let extractor = Extractor::new(ExtractorConfig::new().with_trim_brackets(false));
        assert_eq!(extractor.extract("(http://a.b/x)"), Some("http://a.b/x)"));
        assert_eq!(Extractor::default().extract("(http://a.b/x)"), Some("http://a.b/x"));
    }

    #[test]
    fn match_never_extends_past_trimmed_region() {
        assert_eq!(extract("(http://a.b/(x))"), Some("http://a.b/(x)"));
    }

    #[test]
    fn malformed_ip_literal_yields_nothing() {
        assert_eq!(extract("http://[zz]/"), None);
    }

    #[test]
    fn aborted_offset_lets_scan_continue() {
        // The first URI aborts inside its IP literal; later offsets are still tried.
        assert_eq!(extract("http://[zz]/,http://ok.com"), Some("http://ok.com"));
    }

    #[test]
    fn find_works_on_non_utf8_bytes() {
        let token = b"\xff\xfehttp://a.b/\xc3\xa9";
        let span = Extractor::default().find(token).unwrap();
        assert_eq!(span.slice_bytes(token), b"http://a.b/");
    }

    #[test]
    fn non_ascii_stops_match() {
        assert_eq!(extract("http://exämple.com"), Some("http://ex"));
    }

    #[test]
    fn extract_uri_components() {
        let uri = Extractor::default().extract_uri("(mailto:a@b.c)").unwrap();
        assert_eq!(uri.as_str(), "mailto:a@b.c");
        assert_eq!(uri.span(), Span::new(1, 13));
        assert_eq!(uri.scheme(), "mailto");
        assert_eq!(uri.authority(), None);
        assert_eq!(uri.host(), None);
        assert_eq!(uri.path(), "a@b.c");
        assert_eq!(uri.to_string(), "mailto:a@b.c");
    }

    #[test]
    fn extract_uri_with_empty_port() {
        let uri = Extractor::default().extract_uri("http://host:/p").unwrap();
        assert_eq!(uri.port(), Some(""));
        assert_eq!(uri.port_number(), None);
        assert_eq!(uri.authority(), Some("host:"));
    }

    #[test]
    fn parse_exact_accepts_whole_uri() {
        let uri = Extractor::default().parse_exact("ftp://[::1]:21/x").unwrap();
        assert_eq!(uri.host(), Some("[::1]"));
        assert_eq!(uri.port_number(), Some(21));
    }

    #[test]
    fn parse_exact_errors() {
        let extractor = Extractor::default();
        let kind = |input: &str| extractor.parse_exact(input).unwrap_err().kind;

        assert_eq!(kind(""), ParseErrorKind::Empty);
        assert_eq!(
            kind("xyz://host"),
            ParseErrorKind::UnknownScheme {
                found: Some("xyz".to_string())
            }
        );
        assert_eq!(kind("plain"), ParseErrorKind::UnknownScheme { found: None });
        assert_eq!(kind("http//x"), ParseErrorKind::MissingColon { position: 4 });
        assert_eq!(kind("http://[zz]"), ParseErrorKind::Malformed { position: 8 });
        assert_eq!(
            kind("(http://a.b)"),
            ParseErrorKind::UnknownScheme {
                found: Some("(http".to_string())
            }
        );
        assert_eq!(kind("http://a.b/%zz"), ParseErrorKind::Malformed { position: 12 });
        assert_eq!(kind("http://a.b/%4z"), ParseErrorKind::Malformed { position: 13 });
        assert_eq!(kind("http://a.b/%4"), ParseErrorKind::Malformed { position: 13 });
        assert_eq!(kind("mailto:%zz"), ParseErrorKind::Malformed { position: 8 });
        // A well-formed escape where the grammar allows none is trailing input.
        assert_eq!(
            kind("http://a:80%41"),
            ParseErrorKind::TrailingInput {
                char: '%',
                position: 11
            }
        );
    }

    #[test]
    fn parse_exact_any_scheme() {
        let extractor =
            Extractor::new(ExtractorConfig::new().with_scheme_policy(SchemePolicy::Any));
        assert!(extractor.parse_exact("xyz://host").is_ok());
        assert_eq!(
            extractor.parse_exact("xyz//host").unwrap_err().kind,
            ParseErrorKind::MissingColon { position: 3 }
        );
    }

    #[test]
    fn extractor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();
    }
}
