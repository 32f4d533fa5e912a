//! Single-letter pattern flags.
//!
//! | Letter | Flag | Effect |
//! | --- | --- | --- |
//! | `i` | [`Flags::CASE_INSENSITIVE`] | Case insensitive matching. Unicode-aware (`é` matches `É`) with the `unicode` feature, not ASCII-only. |
//! | `m` | [`Flags::MULTI_LINE`] | `^` and `$` match at line boundaries. |
//! | `s` | [`Flags::DOT_MATCHES_NEW_LINE`] | `.` matches `\n`. |
//! | `x` | [`Flags::IGNORE_WHITESPACE`] | Extended syntax: whitespace is ignored and `#` starts a comment. |
//! | `u` | [`Flags::UNICODE_CASE`] | Unicode-aware case folding. `i` already folds Unicode, so this changes nothing. |
//! | `d` | [`Flags::UNIX_LINES`] | Only `\n` is a line terminator. |
//! | `E` | [`Flags::CANON_EQ`] | Canonical equivalence. Accepted but not applied, `regex` does not normalize. |
//! | `L` | [`Flags::LITERAL`] | The pattern is a literal string, metacharacters have no meaning. |
//!
//! ```
//! use rexp::Flags;
//!
//! let flags = Flags::parse(Some("im"))?;
//! assert_eq!(flags, Flags::CASE_INSENSITIVE | Flags::MULTI_LINE);
//! assert!(Flags::parse(Some("iq")).is_err());
//! # Ok::<(), rexp::Error>(())
//! ```
use std::borrow::Cow;

use bitflags::bitflags;
use regex::RegexBuilder;

use crate::Error;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        const CASE_INSENSITIVE = 1 << 0;
        const MULTI_LINE = 1 << 1;
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        const IGNORE_WHITESPACE = 1 << 3;
        /// Case folding is always Unicode-aware in `regex` (with the `unicode`
        /// feature), so this only asserts `unicode(true)` on the builder.
        const UNICODE_CASE = 1 << 4;
        const UNIX_LINES = 1 << 5;
        /// `regex` matches Unicode scalar values and does not normalize the
        /// haystack. The flag is accepted and kept in [`Rexp::flags`](crate::Rexp::flags),
        /// but composed and decomposed forms are still distinct.
        const CANON_EQ = 1 << 6;
        const LITERAL = 1 << 7;
    }
}

const LETTERS: [(char, Flags); 8] = [
    ('i', Flags::CASE_INSENSITIVE),
    ('m', Flags::MULTI_LINE),
    ('s', Flags::DOT_MATCHES_NEW_LINE),
    ('x', Flags::IGNORE_WHITESPACE),
    ('u', Flags::UNICODE_CASE),
    ('d', Flags::UNIX_LINES),
    ('E', Flags::CANON_EQ),
    ('L', Flags::LITERAL),
];

impl Flags {
    /// Translate a flag string into a flag set.
    ///
    /// `None` and `Some("")` both give [`Flags::empty()`]. Letters may repeat.
    pub fn parse(flags: Option<&str>) -> Result<Self, Error> {
        let Some(flags) = flags else {
            return Ok(Flags::empty());
        };
        flags.chars().try_fold(Flags::empty(), |acc, c| {
            LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, flag)| acc | *flag)
                .ok_or(Error::UnknownFlag(c))
        })
    }

    /// The canonical flag string, in `imsxudEL` order.
    pub fn letters(self) -> String {
        LETTERS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(letter, _)| *letter)
            .collect()
    }

    /// Apply the pattern-level part of the flags, i.e. [`Flags::LITERAL`].
    pub(crate) fn prepare<'p>(self, pattern: &'p str) -> Cow<'p, str> {
        if self.contains(Flags::LITERAL) {
            regex::escape(pattern).into()
        } else {
            pattern.into()
        }
    }

    pub(crate) fn configure(self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.contains(Flags::CASE_INSENSITIVE))
            .multi_line(self.contains(Flags::MULTI_LINE))
            .dot_matches_new_line(self.contains(Flags::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.contains(Flags::IGNORE_WHITESPACE));
        if self.contains(Flags::UNICODE_CASE) {
            builder.unicode(true);
        }
        if self.contains(Flags::UNIX_LINES) {
            builder.crlf(false).line_terminator(b'\n');
        }
    }
}
