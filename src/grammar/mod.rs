//! A small interpreter for composable PEG-style rules.
//!
//! Rules live in an arena ([`Grammar`]) and refer to each other by
//! [`RuleId`]. A grammar is built once through a [`GrammarBuilder`] and is
//! read-only afterwards; every match call keeps its own cursor and capture
//! stack, so one grammar can serve any number of threads.
//!
//! # Semantics
//!
//! Evaluating a rule at a byte offset yields an [`Outcome`]:
//!
//! - [`Outcome::Matched`] with the offset just past the consumed input;
//! - [`Outcome::Missed`], an ordinary non-match (the caller may try
//!   something else);
//! - [`Outcome::Aborted`], raised when a [`Rule::Committed`] prefix matched
//!   but its continuation did not.
//!
//! An abort propagates through sequences and ordered choices (a choice does
//! not try later alternatives after one aborts) and is absorbed by the
//! nearest enclosing repetition, which simply stops repeating.

mod class;

pub use class::CharClass;

use crate::span::Span;

/// Index of a rule inside its [`Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u32);

impl RuleId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of a grammar.
///
/// `T` is the tag type used by [`Rule::Capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule<T> {
    /// A fixed byte string.
    Literal {
        /// Bytes to match
        text: Box<[u8]>,
        /// Whether ASCII letters match regardless of case
        case_insensitive: bool,
    },
    /// Any single byte from the class.
    Class(CharClass),
    /// All children in order, or nothing.
    Seq(Vec<RuleId>),
    /// The first child that matches.
    Choice(Vec<RuleId>),
    /// Greedy repetition without backtracking over the count.
    Repeat {
        /// Minimum number of repetitions
        min: u32,
        /// Maximum number of repetitions, `None` for unbounded
        max: Option<u32>,
        /// The repeated rule
        inner: RuleId,
    },
    /// Once `prefix` matches, every rule in `rest` must match.
    Committed {
        /// The distinguishing prefix
        prefix: RuleId,
        /// The mandatory continuation
        rest: Vec<RuleId>,
    },
    /// Succeeds without consuming iff `inner` does not match here.
    NotAt(RuleId),
    /// Records the span consumed by `inner` under `tag`.
    Capture {
        /// Component tag
        tag: T,
        /// The captured rule
        inner: RuleId,
    },
}

/// Result of evaluating a rule at an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The rule matched; the value is the offset after the match.
    Matched(usize),
    /// The rule did not match.
    Missed,
    /// A committed continuation failed.
    Aborted {
        /// Offset where the continuation failed
        at: usize,
    },
}

impl Outcome {
    /// Returns the end offset if the rule matched.
    #[must_use]
    pub const fn end(self) -> Option<usize> {
        match self {
            Self::Matched(end) => Some(end),
            Self::Missed | Self::Aborted { .. } => None,
        }
    }

    /// Returns true for [`Outcome::Matched`].
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// A span recorded by a [`Rule::Capture`] during a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<T> {
    /// The capture's tag
    pub tag: T,
    /// The consumed span
    pub span: Span,
}

/// An immutable arena of rules with a designated root.
#[derive(Debug, Clone)]
pub struct Grammar<T> {
    rules: Vec<Rule<T>>,
    root: RuleId,
}

impl<T: Copy> Grammar<T> {
    /// Returns the root rule.
    #[must_use]
    pub const fn root(&self) -> RuleId {
        self.root
    }

    /// Returns the rule with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different grammar and is out of range.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &Rule<T> {
        &self.rules[id.index()]
    }

    /// Returns the number of rules in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the arena holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates the root rule at `at`.
    #[must_use]
    pub fn match_at(&self, input: &[u8], at: usize) -> Outcome {
        Matcher {
            rules: &self.rules,
            input,
            captures: None,
        }
        .eval(self.root, at)
    }

    /// Evaluates the root rule at `at`, appending the captures of a
    /// successful match to `captures`.
    ///
    /// Captures recorded inside branches that later failed are discarded, so
    /// on anything but [`Outcome::Matched`] `captures` is left unchanged.
    pub fn match_with_captures(
        &self,
        input: &[u8],
        at: usize,
        captures: &mut Vec<Capture<T>>,
    ) -> Outcome {
        Matcher {
            rules: &self.rules,
            input,
            captures: Some(captures),
        }
        .eval(self.root, at)
    }
}

struct Matcher<'g, 'i, 'c, T> {
    rules: &'g [Rule<T>],
    input: &'i [u8],
    captures: Option<&'c mut Vec<Capture<T>>>,
}

impl<T: Copy> Matcher<'_, '_, '_, T> {
    fn eval(&mut self, id: RuleId, pos: usize) -> Outcome {
        let mark = self.captures.as_ref().map_or(0, |c| c.len());
        let outcome = self.eval_rule(id, pos);
        if !outcome.is_match() {
            if let Some(captures) = self.captures.as_mut() {
                captures.truncate(mark);
            }
        }
        outcome
    }

    fn eval_rule(&mut self, id: RuleId, pos: usize) -> Outcome {
        let rules = self.rules;
        match &rules[id.index()] {
            Rule::Literal {
                text,
                case_insensitive,
            } => {
                let Some(head) = self.input.get(pos..pos + text.len()) else {
                    return Outcome::Missed;
                };
                let equal = if *case_insensitive {
                    head.eq_ignore_ascii_case(text)
                } else {
                    head == &text[..]
                };
                if equal {
                    Outcome::Matched(pos + text.len())
                } else {
                    Outcome::Missed
                }
            }
            Rule::Class(class) => match self.input.get(pos) {
                Some(&b) if class.contains(b) => Outcome::Matched(pos + 1),
                _ => Outcome::Missed,
            },
            Rule::Seq(items) => self.eval_seq(items, pos).0,
            Rule::Choice(alternatives) => {
                for &alt in alternatives {
                    match self.eval(alt, pos) {
                        Outcome::Missed => {}
                        decided => return decided,
                    }
                }
                Outcome::Missed
            }
            Rule::Repeat { min, max, inner } => {
                let (min, max, inner) = (*min, *max, *inner);
                let mut count = 0u32;
                let mut cursor = pos;
                while max.is_none_or(|max| count < max) {
                    match self.eval(inner, cursor) {
                        Outcome::Matched(next) => {
                            count += 1;
                            if next == cursor {
                                break;
                            }
                            cursor = next;
                        }
                        Outcome::Missed | Outcome::Aborted { .. } => break,
                    }
                }
                if count >= min {
                    Outcome::Matched(cursor)
                } else {
                    Outcome::Missed
                }
            }
            Rule::Committed { prefix, rest } => match self.eval(*prefix, pos) {
                Outcome::Matched(next) => match self.eval_seq(rest, next) {
                    (Outcome::Missed, at) => Outcome::Aborted { at },
                    (decided, _) => decided,
                },
                undecided => undecided,
            },
            Rule::NotAt(inner) => {
                let mark = self.captures.as_ref().map_or(0, |c| c.len());
                let outcome = self.eval(*inner, pos);
                if let Some(captures) = self.captures.as_mut() {
                    captures.truncate(mark);
                }
                if outcome.is_match() {
                    Outcome::Missed
                } else {
                    Outcome::Matched(pos)
                }
            }
            Rule::Capture { tag, inner } => {
                let outcome = self.eval(*inner, pos);
                if let (Outcome::Matched(end), Some(captures)) = (outcome, self.captures.as_mut())
                {
                    captures.push(Capture {
                        tag: *tag,
                        span: Span::new(pos, end),
                    });
                }
                outcome
            }
        }
    }

    /// Returns the outcome together with the offset where evaluation stopped.
    fn eval_seq(&mut self, items: &[RuleId], pos: usize) -> (Outcome, usize) {
        let mut cursor = pos;
        for &item in items {
            match self.eval(item, cursor) {
                Outcome::Matched(next) => cursor = next,
                failed => return (failed, cursor),
            }
        }
        (Outcome::Matched(cursor), cursor)
    }
}

/// Builds a [`Grammar`] bottom-up.
///
/// Every constructor pushes one rule and returns its id. Rules can only
/// refer to ids handed out earlier, so a finished grammar is acyclic and
/// every match terminates.
///
/// # Examples
///
/// ```
/// use grepurls::{CharClass, GrammarBuilder, Outcome};
///
/// let mut g = GrammarBuilder::<()>::new();
/// let digit = g.class(CharClass::DIGIT);
/// let number = g.plus(digit);
/// let dot = g.byte(b'.');
/// let fraction = g.seq(&[dot, number]);
/// let fraction = g.opt(fraction);
/// let decimal = g.seq(&[number, fraction]);
/// let grammar = g.build(decimal);
///
/// assert_eq!(grammar.match_at(b"3.14!", 0), Outcome::Matched(4));
/// assert_eq!(grammar.match_at(b"42.", 0), Outcome::Matched(2));
/// assert_eq!(grammar.match_at(b"x", 0), Outcome::Missed);
/// ```
#[derive(Debug, Clone)]
pub struct GrammarBuilder<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for GrammarBuilder<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> GrammarBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the rule refers to an id that has not been handed out yet,
    /// or if the arena outgrows `u32`.
    pub fn push(&mut self, rule: Rule<T>) -> RuleId {
        let next = self.rules.len();
        let refs_ok = match &rule {
            Rule::Literal { .. } | Rule::Class(_) => true,
            Rule::Seq(items) | Rule::Choice(items) => items.iter().all(|id| id.index() < next),
            Rule::Repeat { inner, .. } | Rule::Capture { inner, .. } | Rule::NotAt(inner) => {
                inner.index() < next
            }
            Rule::Committed { prefix, rest } => {
                prefix.index() < next && rest.iter().all(|id| id.index() < next)
            }
        };
        assert!(refs_ok, "rule refers to an id not yet in the arena");
        let id = RuleId(u32::try_from(next).expect("grammar arena exceeds u32::MAX rules"));
        self.rules.push(rule);
        id
    }

    /// Case-sensitive literal.
    pub fn literal(&mut self, text: &str) -> RuleId {
        self.push(Rule::Literal {
            text: text.as_bytes().into(),
            case_insensitive: false,
        })
    }

    /// ASCII case-insensitive literal.
    pub fn literal_ci(&mut self, text: &str) -> RuleId {
        self.push(Rule::Literal {
            text: text.as_bytes().into(),
            case_insensitive: true,
        })
    }

    /// A single exact byte.
    pub fn byte(&mut self, b: u8) -> RuleId {
        self.push(Rule::Class(CharClass::byte(b)))
    }

    /// Any byte from `class`.
    pub fn class(&mut self, class: CharClass) -> RuleId {
        self.push(Rule::Class(class))
    }

    /// All of `items` in order.
    pub fn seq(&mut self, items: &[RuleId]) -> RuleId {
        self.push(Rule::Seq(items.to_vec()))
    }

    /// The first of `alternatives` that matches.
    pub fn choice(&mut self, alternatives: &[RuleId]) -> RuleId {
        self.push(Rule::Choice(alternatives.to_vec()))
    }

    /// `min` to `max` repetitions of `inner`.
    pub fn repeat(&mut self, min: u32, max: Option<u32>, inner: RuleId) -> RuleId {
        self.push(Rule::Repeat { min, max, inner })
    }

    /// Zero or more.
    pub fn star(&mut self, inner: RuleId) -> RuleId {
        self.repeat(0, None, inner)
    }

    /// One or more.
    pub fn plus(&mut self, inner: RuleId) -> RuleId {
        self.repeat(1, None, inner)
    }

    /// Zero or one.
    pub fn opt(&mut self, inner: RuleId) -> RuleId {
        self.repeat(0, Some(1), inner)
    }

    /// Exactly `n`.
    pub fn times(&mut self, n: u32, inner: RuleId) -> RuleId {
        self.repeat(n, Some(n), inner)
    }

    /// `prefix`, then all of `rest` or abort.
    pub fn committed(&mut self, prefix: RuleId, rest: &[RuleId]) -> RuleId {
        self.push(Rule::Committed {
            prefix,
            rest: rest.to_vec(),
        })
    }

    /// Zero-width negative lookahead.
    pub fn not_at(&mut self, inner: RuleId) -> RuleId {
        self.push(Rule::NotAt(inner))
    }

    /// Records the span of `inner` under `tag`.
    pub fn capture(&mut self, tag: T, inner: RuleId) -> RuleId {
        self.push(Rule::Capture { tag, inner })
    }

    /// Always matches, consuming nothing.
    pub fn success(&mut self) -> RuleId {
        self.push(Rule::Seq(Vec::new()))
    }

    /// Finishes the arena with `root` as the entry point.
    ///
    /// # Panics
    ///
    /// Panics if `root` was not handed out by this builder.
    #[must_use]
    pub fn build(self, root: RuleId) -> Grammar<T> {
        assert!(root.index() < self.rules.len(), "root is not in the arena");
        Grammar {
            rules: self.rules,
            root,
        }
    }
}
