//! ASCII character classes.

use std::fmt;

/// A set of ASCII bytes, tested in constant time.
///
/// Bytes at or above `0x80` are never members, so classes never split a
/// multi-byte UTF-8 sequence.
///
/// # Examples
///
/// ```
/// use grepurls::CharClass;
///
/// const HEX_UPPER: CharClass = CharClass::DIGIT.union(CharClass::range(b'A', b'F'));
/// assert!(HEX_UPPER.contains(b'C'));
/// assert!(!HEX_UPPER.contains(b'c'));
/// assert!(!HEX_UPPER.contains(0xC3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharClass(u128);

impl CharClass {
    /// The empty class.
    pub const EMPTY: Self = Self(0);

    /// `ALPHA`: ASCII letters.
    pub const ALPHA: Self = Self::range(b'a', b'z').union(Self::range(b'A', b'Z'));

    /// `DIGIT`: ASCII decimal digits.
    pub const DIGIT: Self = Self::range(b'0', b'9');

    /// `HEXDIG`: ASCII hex digits in either case.
    pub const HEXDIG: Self = Self::DIGIT
        .union(Self::range(b'a', b'f'))
        .union(Self::range(b'A', b'F'));

    /// A class containing exactly one byte.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if `b` is not ASCII.
    #[must_use]
    pub const fn byte(b: u8) -> Self {
        assert!(b.is_ascii(), "character classes are ASCII-only");
        Self(1 << b)
    }

    /// A class containing every byte in `set`.
    ///
    /// # Panics
    ///
    /// Panics if any byte is not ASCII.
    #[must_use]
    pub const fn bytes(set: &[u8]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < set.len() {
            bits |= Self::byte(set[i]).0;
            i += 1;
        }
        Self(bits)
    }

    /// A class containing the inclusive range `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if `hi` is not ASCII.
    #[must_use]
    pub const fn range(lo: u8, hi: u8) -> Self {
        let mut bits = 0u128;
        let mut b = lo;
        while b <= hi {
            bits |= Self::byte(b).0;
            if b == hi {
                break;
            }
            b += 1;
        }
        Self(bits)
    }

    /// Returns the union of two classes.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if `b` is in the class.
    #[must_use]
    pub const fn contains(self, b: u8) -> bool {
        b.is_ascii() && self.0 & (1 << b) != 0
    }

    /// Returns true if the class has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..0x80).filter(move |&b| self.contains(b))
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for b in self.iter() {
            write!(f, "{}", b.escape_ascii())?;
        }
        f.write_str("]")
    }
}
