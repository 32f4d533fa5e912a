//! Substitution.
//!
//! Every `sub`/`gsub` variant runs the same loop over [`Rexp::match_all`]:
//! copy the text between the previous match and the current one, append the
//! replacement, repeat until the matches or the count run out, then copy the
//! rest. Templates are just a replacement callback that calls
//! [`Matched::expand`].
//!
//! When nothing gets replaced the haystack is returned as
//! [`Cow::Borrowed`], without copying.
use std::{borrow::Cow, convert::Infallible};

use crate::{template, Error, Matched, Rexp};

impl Rexp {
    /// Replace the first match with a template.
    ///
    /// See [`template`](crate::template) for the syntax.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"(`d+)")?;
    /// assert_eq!(re.sub("2000-12-31", "X")?, "X-12-31");
    /// assert_eq!(re.sub("2000-12-31", "<$1>")?, "<2000>-12-31");
    /// assert!(re.sub("2000-12-31", "$2").is_err());
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn sub<'h>(&self, haystack: &'h str, template: &str) -> Result<Cow<'h, str>, Error> {
        self.sub_template(haystack, Some(1), template)
    }

    /// Replace every match with a template.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// assert_eq!(rexp(r"`d+")?.gsub("2000-12-31", "X")?, "X-X-X");
    /// assert_eq!(rexp(r"`d")?.gsub("2000-12-31", "X")?, "XXXX-XX-XX");
    /// assert_eq!(rexp(r"(`d+)")?.gsub("2000-12-31", "<$1>")?, "<2000>-<12>-<31>");
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn gsub<'h>(&self, haystack: &'h str, template: &str) -> Result<Cow<'h, str>, Error> {
        self.sub_template(haystack, None, template)
    }

    fn sub_template<'h>(
        &self,
        haystack: &'h str,
        limit: Option<usize>,
        template: &str,
    ) -> Result<Cow<'h, str>, Error> {
        template::check(self, template)?;
        let out = if template.contains('$') {
            self.sub_n_with_impl(haystack, limit, |m| Ok::<_, Infallible>(m.expand(template)))
        } else {
            self.sub_n_with_impl(haystack, limit, |_| Ok::<_, Infallible>(template))
        };
        Ok(out.unwrap_infallible())
    }

    /// Replace the first match with what `replacer` returns for it.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"(`d+)")?;
    /// let s = re.sub_with("2000-12-31", |m| (m.parse::<u32>(1).unwrap().unwrap() + 1).to_string());
    /// assert_eq!(s, "2001-12-31");
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn sub_with<'h, R>(
        &self,
        haystack: &'h str,
        replacer: impl FnMut(&Matched<'h>) -> R,
    ) -> Cow<'h, str>
    where
        R: AsRef<str>,
    {
        self.sub_n_with(haystack, 1, replacer)
    }

    /// Replace every match with what `replacer` returns for it.
    ///
    /// The returned text is used verbatim, `$` has no special meaning.
    pub fn gsub_with<'h, R>(
        &self,
        haystack: &'h str,
        mut replacer: impl FnMut(&Matched<'h>) -> R,
    ) -> Cow<'h, str>
    where
        R: AsRef<str>,
    {
        self.sub_n_with_impl(haystack, None, |m| Ok::<_, Infallible>(replacer(m)))
            .unwrap_infallible()
    }

    /// Replace the first `n` matches with what `replacer` returns for them.
    ///
    /// `n == 0` returns `haystack` without searching it.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"(`d+)")?;
    /// let inc = |m: &rexp::Matched| (m.parse::<u32>(1).unwrap().unwrap() + 1).to_string();
    /// assert_eq!(re.sub_n_with("2000-12-31", 0, inc), "2000-12-31");
    /// assert_eq!(re.sub_n_with("2000-12-31", 1, inc), "2001-12-31");
    /// assert_eq!(re.sub_n_with("2000-12-31", 2, inc), "2001-13-31");
    /// assert_eq!(re.sub_n_with("2000-12-31", 3, inc), "2001-13-32");
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn sub_n_with<'h, R>(
        &self,
        haystack: &'h str,
        n: usize,
        mut replacer: impl FnMut(&Matched<'h>) -> R,
    ) -> Cow<'h, str>
    where
        R: AsRef<str>,
    {
        self.sub_n_with_impl(haystack, Some(n), |m| Ok::<_, Infallible>(replacer(m)))
            .unwrap_infallible()
    }

    /// Fallible [`sub_with`](Self::sub_with).
    pub fn try_sub_with<'h, R, E>(
        &self,
        haystack: &'h str,
        replacer: impl FnMut(&Matched<'h>) -> Result<R, E>,
    ) -> Result<Cow<'h, str>, E>
    where
        R: AsRef<str>,
    {
        self.sub_n_with_impl(haystack, Some(1), replacer)
    }

    /// Fallible [`gsub_with`](Self::gsub_with).
    pub fn try_gsub_with<'h, R, E>(
        &self,
        haystack: &'h str,
        replacer: impl FnMut(&Matched<'h>) -> Result<R, E>,
    ) -> Result<Cow<'h, str>, E>
    where
        R: AsRef<str>,
    {
        self.sub_n_with_impl(haystack, None, replacer)
    }

    /// Fallible [`sub_n_with`](Self::sub_n_with).
    ///
    /// `n == 0` returns `haystack` without searching it, use
    /// [`try_gsub_with`](Self::try_gsub_with) to replace every match.
    ///
    /// The first error `replacer` returns aborts the substitution and is
    /// returned as is. No partial result is kept.
    ///
    /// ```
    /// use rexp::rexp;
    ///
    /// let re = rexp(r"`d+")?;
    /// let r = re.try_sub_n_with("2000-12-31", 3, |m| match m.as_str() {
    ///     "12" => Err("no december"),
    ///     s => Ok(s.len().to_string()),
    /// });
    /// assert_eq!(r, Err("no december"));
    /// assert_eq!(
    ///     re.try_sub_n_with("2000-12-31", 1, |_| Ok::<_, ()>("Y")),
    ///     Ok("Y-12-31".into())
    /// );
    /// # Ok::<(), rexp::Error>(())
    /// ```
    pub fn try_sub_n_with<'h, R, E>(
        &self,
        haystack: &'h str,
        n: usize,
        replacer: impl FnMut(&Matched<'h>) -> Result<R, E>,
    ) -> Result<Cow<'h, str>, E>
    where
        R: AsRef<str>,
    {
        self.sub_n_with_impl(haystack, Some(n), replacer)
    }

    fn sub_n_with_impl<'h, R, E>(
        &self,
        haystack: &'h str,
        limit: Option<usize>,
        mut replacer: impl FnMut(&Matched<'h>) -> Result<R, E>,
    ) -> Result<Cow<'h, str>, E>
    where
        R: AsRef<str>,
    {
        if limit == Some(0) {
            return Ok(Cow::Borrowed(haystack));
        }
        let mut out = String::new();
        let mut last = 0;
        let mut count = 0;
        for m in self.match_all(haystack) {
            // Group 0 always participates
            let span = m.captures().get_match().range();
            out.push_str(&haystack[last..span.start]);
            out.push_str(replacer(&m)?.as_ref());
            last = span.end;
            count += 1;
            if limit == Some(count) {
                break;
            }
        }
        if count == 0 {
            return Ok(Cow::Borrowed(haystack));
        }
        out.push_str(&haystack[last..]);
        Ok(Cow::Owned(out))
    }
}

trait UnwrapInfallible<T> {
    fn unwrap_infallible(self) -> T;
}

impl<T> UnwrapInfallible<T> for Result<T, Infallible> {
    fn unwrap_infallible(self) -> T {
        match self {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }
}
