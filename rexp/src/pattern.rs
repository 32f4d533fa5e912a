use bon::bon;
use itertools::Itertools;
use regex::{Regex, RegexBuilder};

use crate::{
    escape::{self, DEFAULT_ESCAPE},
    Error, Flags, MatchAll, Matched,
};

/// A compiled regular expression.
///
/// `Rexp` is immutable once built. [`Rexp::new`] and [`Rexp::builder`] always
/// compile a new instance; use [`rexp()`](crate::rexp()) or a
/// [`PatternCache`](crate::PatternCache) to reuse instances of patterns that
/// are written as constants.
///
/// # Example
/// ```
/// use rexp::Rexp;
///
/// let re = Rexp::new(r"(`d+)")?;
/// assert_eq!(re.gsub("2000-12-31", "<$1>")?, "<2000>-<12>-<31>");
///
/// let re = Rexp::builder().flags("i").build("[a-z]+")?;
/// assert_eq!(re.match_first("<ABC>").unwrap().as_str(), "ABC");
/// # Ok::<(), rexp::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Rexp {
    re: Regex,
    pattern: String,
    flags: Flags,
}

#[bon]
impl Rexp {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::builder().build(pattern)
    }

    /// Return a builder for configuring the construction of a `Rexp`.
    ///
    /// # Example
    /// ```
    /// use rexp::{Rexp, NO_ESCAPE};
    ///
    /// let re = Rexp::builder().escape(NO_ESCAPE).build(r"^\d+$")?;
    /// assert!(re.is_match("123"));
    ///
    /// let re = Rexp::builder().flags("L").build("1+1")?;
    /// assert!(re.is_match("1+1=2"));
    /// # Ok::<(), rexp::Error>(())
    /// ```
    #[builder(builder_type = Builder, finish_fn = build)]
    pub fn builder(
        #[builder(finish_fn)] pattern: &str,
        /// Flag letters, see [`Flags`].
        flags: Option<&str>,
        /// Escape character override, see [`escape`](crate::escape).
        /// [`NO_ESCAPE`](crate::NO_ESCAPE) disables it.
        #[builder(default = DEFAULT_ESCAPE)]
        escape: char,
    ) -> Result<Self, Error> {
        let flags = Flags::parse(flags)?;
        let pattern = escape::translate(pattern, escape);
        Self::compile(pattern.into_owned(), flags)
    }

    pub(crate) fn compile(pattern: String, flags: Flags) -> Result<Self, Error> {
        log::trace!("compile {pattern:?} ({})", flags.letters());
        let mut builder = RegexBuilder::new(&flags.prepare(&pattern));
        flags.configure(&mut builder);
        let re = builder.build()?;
        Ok(Self { re, pattern, flags })
    }
}

impl Rexp {
    /// The pattern text after escape character translation.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The underlying `regex` engine.
    pub fn as_regex(&self) -> &Regex {
        &self.re
    }

    /// The number of capture groups, not counting group `0`.
    pub fn group_count(&self) -> usize {
        self.re.captures_len() - 1
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.re.is_match(haystack)
    }

    /// Return the first match in `haystack`, or `None` if there is no match.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"^(`d{4})-(`d`d)-(`d`d)$")?;
    /// assert!(re.match_first("2000/12/31").is_none());
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn match_first<'h>(&self, haystack: &'h str) -> Option<Matched<'h>> {
        self.re.captures(haystack).map(Matched::new)
    }

    /// Return an iterator over successive non-overlapping matches in
    /// `haystack`.
    ///
    /// The iterator is empty rather than an error when nothing matches.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"(`d+)")?;
    /// let days: Vec<_> = re.match_all("2000-12-31").map(|m| m.get(1)).collect();
    /// assert_eq!(days, [Some("2000"), Some("12"), Some("31")]);
    /// assert_eq!(re.match_all("abc").count(), 0);
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn match_all<'r, 'h>(&'r self, haystack: &'h str) -> MatchAll<'r, 'h> {
        MatchAll::new(self.re.captures_iter(haystack))
    }

    /// Split `haystack` by matches into at most `limit` pieces.
    ///
    /// A `limit` of `0` does not split at all, the result is `[haystack]`.
    /// Otherwise the last piece holds the unsplit remainder.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"`s*,`s*")?;
    /// assert_eq!(re.split("a, b ,c", 0), ["a, b ,c"]);
    /// assert_eq!(re.split("a, b ,c", 2), ["a", "b ,c"]);
    /// assert_eq!(re.split("a, b ,c", 9), ["a", "b", "c"]);
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn split<'h>(&self, haystack: &'h str, limit: usize) -> Vec<&'h str> {
        if limit == 0 {
            return vec![haystack];
        }
        self.re.splitn(haystack, limit).collect_vec()
    }

    /// Split `haystack` by every match, dropping trailing empty pieces.
    ///
    /// Without any match the result is `[haystack]`, even if it is empty.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(",")?;
    /// assert_eq!(re.split_all("a,,b,,"), ["a", "", "b"]);
    /// assert!(re.split_all(",,").is_empty());
    /// assert_eq!(re.split_all(""), [""]);
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn split_all<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        let mut pieces = self.re.split(haystack).collect_vec();
        // A single piece means no match
        if pieces.len() == 1 {
            return pieces;
        }
        while pieces.last().is_some_and(|s| s.is_empty()) {
            pieces.pop();
        }
        pieces
    }
}
