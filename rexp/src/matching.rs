//! Try one haystack against several patterns in turn.
//!
//! ```
//! use rexp::Matching;
//!
//! fn ymd(s: &str) -> Result<Option<(&str, &str, &str)>, rexp::Error> {
//!     let mut m = Matching::new(s);
//!     Ok(if m.anchored(r"^(`d{4})-(`d`d)-(`d`d)$").call()? {
//!         Some((m.get(1).unwrap(), m.get(2).unwrap(), m.get(3).unwrap()))
//!     } else if m.anchored(r"^(`d`d)/(`d`d)/(`d{4})$").call()? {
//!         Some((m.get(3).unwrap(), m.get(1).unwrap(), m.get(2).unwrap()))
//!     } else {
//!         None
//!     })
//! }
//!
//! assert_eq!(ymd("2014-12-31")?, Some(("2014", "12", "31")));
//! assert_eq!(ymd("12/31/2014")?, Some(("2014", "12", "31")));
//! assert_eq!(ymd("31.12.2014")?, None);
//! # Ok::<(), rexp::Error>(())
//! ```
use bon::bon;

use crate::{escape::DEFAULT_ESCAPE, Error, Matched, PatternCache};

/// A haystack plus the result of the last [`anchored`](Self::anchored) or
/// [`search`](Self::search) on it.
///
/// Patterns are looked up in a [`PatternCache`], the
/// [global](PatternCache::global) one by default.
pub struct Matching<'c, 'h> {
    haystack: &'h str,
    cache: &'c PatternCache,
    matched: Option<Matched<'h>>,
}

impl<'h> Matching<'static, 'h> {
    pub fn new(haystack: &'h str) -> Self {
        Self::with_cache(haystack, PatternCache::global())
    }
}

#[bon]
impl<'c, 'h> Matching<'c, 'h> {
    pub fn with_cache(haystack: &'h str, cache: &'c PatternCache) -> Self {
        Self {
            haystack,
            cache,
            matched: None,
        }
    }

    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// Match `pattern` at the start of the haystack.
    ///
    /// Returns whether it matched. The previous result is replaced either way.
    ///
    /// ```
    /// use rexp::Matching;
    ///
    /// let mut m = Matching::new("Image.PNG");
    /// assert!(!m.anchored(r"^`w+`.png$").call()?);
    /// assert!(m.anchored(r"^`w+`.png$").flags("i").call()?);
    /// # Ok::<(), rexp::Error>(())
    /// ```
    #[builder]
    pub fn anchored(
        &mut self,
        #[builder(start_fn)] pattern: &str,
        /// Flag letters, see [`Flags`](crate::Flags).
        flags: Option<&str>,
        #[builder(default = DEFAULT_ESCAPE)] escape: char,
    ) -> Result<bool, Error> {
        let re = self
            .cache
            .get(pattern)
            .maybe_flags(flags)
            .escape(escape)
            .call()?;
        // Leftmost-first: if any match starts at 0, the first match does
        self.matched = re
            .match_first(self.haystack)
            .filter(|m| m.start(0) == Some(0));
        Ok(self.matched.is_some())
    }

    /// Match `pattern` anywhere in the haystack.
    ///
    /// Returns whether it matched. The previous result is replaced either way.
    #[builder]
    pub fn search(
        &mut self,
        #[builder(start_fn)] pattern: &str,
        /// Flag letters, see [`Flags`](crate::Flags).
        flags: Option<&str>,
        #[builder(default = DEFAULT_ESCAPE)] escape: char,
    ) -> Result<bool, Error> {
        let re = self
            .cache
            .get(pattern)
            .maybe_flags(flags)
            .escape(escape)
            .call()?;
        self.matched = re.match_first(self.haystack);
        Ok(self.matched.is_some())
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    pub fn matched(&self) -> Option<&Matched<'h>> {
        self.matched.as_ref()
    }

    /// Text of group `n` of the last match.
    pub fn get(&self, n: usize) -> Option<&'h str> {
        self.matched.as_ref().and_then(|m| m.get(n))
    }

    /// Groups `1..` of the last match, empty if it failed.
    pub fn groups(&self) -> Vec<Option<&'h str>> {
        self.matched
            .as_ref()
            .map(|m| m.groups().collect())
            .unwrap_or_default()
    }
}
