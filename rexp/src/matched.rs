use std::{fmt, iter::FusedIterator, ops::Range, str::FromStr};

use regex::{CaptureMatches, Captures};

/// One match of a [`Rexp`](crate::Rexp) in a haystack.
///
/// Group `0` is always the whole match, groups `1..=group_count()` are the
/// capture groups in the order their opening parentheses appear in the
/// pattern. A group that did not participate in the match (e.g. `(a)?`) is
/// `None`.
///
/// All offsets are byte offsets into the haystack.
///
/// ```
/// use rexp::rexp;
///
/// let m = rexp(r"^(`d{4})-(`d`d)-(`d`d)$")?.match_first("2000-12-31").unwrap();
/// assert_eq!(m.group_count(), 3);
/// assert_eq!(m.get(1), Some("2000"));
/// assert_eq!(m.span(2), Some(5..7));
/// assert_eq!(m.parse::<u32>(3), Some(Ok(31)));
/// # Ok::<(), rexp::Error>(())
/// ```
pub struct Matched<'h> {
    caps: Captures<'h>,
}

impl<'h> Matched<'h> {
    pub(crate) fn new(caps: Captures<'h>) -> Self {
        Self { caps }
    }

    /// The underlying `regex` captures.
    pub fn captures(&self) -> &Captures<'h> {
        &self.caps
    }

    /// The text of group `n`.
    pub fn get(&self, n: usize) -> Option<&'h str> {
        self.caps.get(n).map(|m| m.as_str())
    }

    /// The text of the named group `name`.
    pub fn name(&self, name: &str) -> Option<&'h str> {
        self.caps.name(name).map(|m| m.as_str())
    }

    /// The whole match.
    pub fn as_str(&self) -> &'h str {
        // Group 0 always participates
        self.caps.get_match().as_str()
    }

    /// The number of capture groups, not counting group `0`.
    pub fn group_count(&self) -> usize {
        self.caps.len() - 1
    }

    pub fn start(&self, n: usize) -> Option<usize> {
        self.caps.get(n).map(|m| m.start())
    }

    pub fn end(&self, n: usize) -> Option<usize> {
        self.caps.get(n).map(|m| m.end())
    }

    pub fn span(&self, n: usize) -> Option<Range<usize>> {
        self.caps.get(n).map(|m| m.range())
    }

    /// Groups `1..=group_count()`.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = Option<&'h str>> + '_ {
        (1..self.caps.len()).map(|n| self.get(n))
    }

    /// Parse the text of group `n`.
    ///
    /// Returns `None` if the group did not participate in the match.
    pub fn parse<T: FromStr>(&self, n: usize) -> Option<Result<T, T::Err>> {
        self.get(n).map(str::parse)
    }

    /// Parse the text of group `n`, or return `default` if the group did not
    /// participate in the match.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"(`d+)(?:`.(`d+))?")?;
    /// let m = re.match_first("v12").unwrap();
    /// assert_eq!(m.parse_or(1, 0u32), Ok(12));
    /// assert_eq!(m.parse_or(2, 0u32), Ok(0));
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn parse_or<T: FromStr>(&self, n: usize, default: T) -> Result<T, T::Err> {
        self.parse(n).unwrap_or(Ok(default))
    }

    /// Expand a replacement template against this match.
    ///
    /// `$n`, `${n}`, `$name` and `${name}` are replaced with the group's text
    /// (or nothing if the group did not participate), `$$` with `$`.
    pub fn expand(&self, template: &str) -> String {
        let mut dst = String::new();
        self.caps.expand(template, &mut dst);
        dst
    }
}

impl fmt::Debug for Matched<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matched")
            .field("span", &self.caps.get_match().range())
            .field("groups", &self.groups().collect::<Vec<_>>())
            .finish()
    }
}

/// Successive non-overlapping matches of a [`Rexp`](crate::Rexp) in a haystack.
///
/// Created by [`Rexp::match_all`](crate::Rexp::match_all). Every call to
/// `next()` searches from where the previous match ended, so the sequence is
/// single-pass: call `match_all()` again to start over.
pub struct MatchAll<'r, 'h> {
    it: CaptureMatches<'r, 'h>,
    position: usize,
    done: bool,
}

impl<'r, 'h> MatchAll<'r, 'h> {
    pub(crate) fn new(it: CaptureMatches<'r, 'h>) -> Self {
        Self {
            it,
            position: 0,
            done: false,
        }
    }

    /// The end of the last yielded match, or `0` if none has been yielded.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'h> Iterator for MatchAll<'_, 'h> {
    type Item = Matched<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.it.next() {
            Some(caps) => {
                self.position = caps.get_match().end();
                Some(Matched::new(caps))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for MatchAll<'_, '_> {}

#[cfg(test)]
mod tests {
    use crate::Rexp;

    #[test]
    fn optional_group() {
        let re = Rexp::new(r"(a)|(b)").unwrap();
        let m = re.match_first("xb").unwrap();
        assert_eq!(m.group_count(), 2);
        assert_eq!(m.get(1), None);
        assert_eq!(m.start(1), None);
        assert_eq!(m.get(2), Some("b"));
        assert_eq!(m.span(0), Some(1..2));
        assert_eq!(m.groups().collect::<Vec<_>>(), vec![None, Some("b")]);
        assert_eq!(m.expand("[$1|$2]"), "[|b]");
    }

    #[test]
    fn named_group() {
        let re = Rexp::new(r"(?<year>`d{4})-(?<month>`d`d)").unwrap();
        let m = re.match_first("on 2000-12").unwrap();
        assert_eq!(m.name("year"), Some("2000"));
        assert_eq!(m.name("month"), Some("12"));
        assert_eq!(m.name("day"), None);
        assert_eq!(m.as_str(), "2000-12");
        assert_eq!(m.expand("${month}/$year"), "12/2000");
    }

    #[test]
    fn parse() {
        let re = Rexp::new(r"(`w+)").unwrap();
        let m = re.match_first("abc").unwrap();
        assert!(m.parse::<i32>(1).unwrap().is_err());
        assert_eq!(m.parse::<i32>(2), None);
    }

    #[test]
    fn fused() {
        let re = Rexp::new(r"`d").unwrap();
        let mut it = re.match_all("1a2");
        assert_eq!(it.position(), 0);
        assert_eq!(it.next().unwrap().as_str(), "1");
        assert_eq!(it.position(), 1);
        assert_eq!(it.next().unwrap().as_str(), "2");
        assert_eq!(it.position(), 3);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq!(it.position(), 3);
    }

    #[test]
    fn empty_matches() {
        let re = Rexp::new(r"`d*").unwrap();
        let spans: Vec<_> = re.match_all("a12").map(|m| m.span(0).unwrap()).collect();
        assert_eq!(spans, vec![0..0, 1..3]);
    }
}
