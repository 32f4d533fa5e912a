//! Compiled pattern cache.
//!
//! Patterns in code are usually constants, so compiling them once and reusing
//! the result is enough. A [`PatternCache`] maps `(pattern, flags, escape)` to
//! a shared [`Rexp`] and never evicts.
//!
//! [`rexp()`] and [`rexp_with()`] use a process-wide cache:
//! ```
//! use std::sync::Arc;
//! use rexp::{rexp, rexp_with};
//!
//! assert!(Arc::ptr_eq(&rexp(r"`d")?, &rexp(r"`d")?));
//! assert!(!Arc::ptr_eq(&rexp(r"`d")?, &rexp_with(r"`d").flags("i").call()?));
//! # Ok::<(), rexp::Error>(())
//! ```
//! A [`PatternCache`] can also be owned separately, e.g. for isolation in
//! tests.
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use bon::{bon, builder};

use crate::{
    escape::{self, DEFAULT_ESCAPE},
    Error, Flags, Rexp,
};

/// Cache key. `pattern` is the pattern text after escape translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    pub pattern: String,
    pub flags: Option<String>,
    pub escape: char,
}

/// A thread safe map from [`PatternKey`] to compiled [`Rexp`]s.
///
/// Lookup and compilation happen under one lock, so concurrent first
/// requests for the same key still compile only one instance.
#[derive(Debug, Default)]
pub struct PatternCache {
    map: Mutex<HashMap<PatternKey, Arc<Rexp>>>,
}

#[bon]
impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`rexp()`] and [`rexp_with()`].
    pub fn global() -> &'static PatternCache {
        static GLOBAL: OnceLock<PatternCache> = OnceLock::new();
        GLOBAL.get_or_init(PatternCache::new)
    }

    /// Return the cached `Rexp` for the given parameters, compiling it on the
    /// first call.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rexp::PatternCache;
    ///
    /// let cache = PatternCache::new();
    /// let a = cache.get("[a-z]+").flags("i").call()?;
    /// let b = cache.get("[a-z]+").flags("i").call()?;
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert_eq!(cache.len(), 1);
    /// # Ok::<(), rexp::Error>(())
    /// ```
    #[builder]
    pub fn get(
        &self,
        #[builder(start_fn)] pattern: &str,
        /// Flag letters, see [`Flags`].
        flags: Option<&str>,
        #[builder(default = DEFAULT_ESCAPE)] escape: char,
    ) -> Result<Arc<Rexp>, Error> {
        self.get_or_compile(pattern, flags, escape)
    }

    /// Non-builder form of [`get`](Self::get).
    pub fn get_or_compile(
        &self,
        pattern: &str,
        flags: Option<&str>,
        escape: char,
    ) -> Result<Arc<Rexp>, Error> {
        let key = PatternKey {
            pattern: escape::translate(pattern, escape).into_owned(),
            flags: flags.map(str::to_owned),
            escape,
        };
        let mut map = self.lock();
        if let Some(re) = map.get(&key) {
            log::trace!("cache hit {:?}", key.pattern);
            return Ok(re.clone());
        }
        log::debug!("cache miss {:?} flags={:?}", key.pattern, key.flags);
        let re = Arc::new(Rexp::compile(key.pattern.clone(), Flags::parse(flags)?)?);
        map.insert(key, re.clone());
        Ok(re)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all entries. `Rexp`s still referenced elsewhere stay alive.
    pub fn clear(&self) {
        self.lock().clear()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PatternKey, Arc<Rexp>>> {
        // A panic can't leave the map half-updated
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Get a compiled pattern from the process-wide cache, with no flags and
/// `` ` `` as the escape character.
///
/// ```
/// use rexp::rexp;
///
/// let m = rexp("^`d+$")?.match_first("123").unwrap();
/// assert_eq!(m.as_str(), "123");
/// # Ok::<(), rexp::Error>(())
/// ```
pub fn rexp(pattern: &str) -> Result<Arc<Rexp>, Error> {
    PatternCache::global().get_or_compile(pattern, None, DEFAULT_ESCAPE)
}

/// [`rexp()`] with options.
///
/// ```
/// use rexp::{rexp_with, NO_ESCAPE};
///
/// let re = rexp_with(r"^\.(jpg|png|gif)$").flags("i").escape(NO_ESCAPE).call()?;
/// assert!(re.is_match(".PNG"));
/// # Ok::<(), rexp::Error>(())
/// ```
#[builder]
pub fn rexp_with(
    #[builder(start_fn)] pattern: &str,
    /// Flag letters, see [`Flags`].
    flags: Option<&str>,
    #[builder(default = DEFAULT_ESCAPE)] escape: char,
) -> Result<Arc<Rexp>, Error> {
    PatternCache::global().get_or_compile(pattern, flags, escape)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::NO_ESCAPE;

    use super::*;

    #[test]
    fn identity() {
        let cache = PatternCache::new();
        let a = cache.get(r"\d").call().unwrap();
        let b = cache.get(r"\d").call().unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let c = cache.get(r"\d").flags("i").call().unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        let d = cache.get(r"\d").escape(NO_ESCAPE).call().unwrap();
        assert!(!Arc::ptr_eq(&a, &d));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn key_after_translation() {
        let cache = PatternCache::new();
        let a = cache.get_or_compile("`d", None, '`').unwrap();
        let b = cache.get_or_compile("%d", None, '%').unwrap();
        assert_eq!(a.as_str(), b.as_str());
        // Escape characters differ
        assert!(!Arc::ptr_eq(&a, &b));
        // Absent and empty flags are different keys
        let c = cache.get_or_compile("`d", Some(""), '`').unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn errors_not_cached() {
        let cache = PatternCache::new();
        assert!(matches!(
            cache.get("a").flags("iQ").call(),
            Err(Error::UnknownFlag('Q'))
        ));
        assert!(matches!(cache.get("(").call(), Err(Error::InvalidPattern(_))));
        assert!(cache.is_empty());
    }

    #[test]
    fn separate_caches() {
        let c1 = PatternCache::new();
        let c2 = PatternCache::new();
        let a = c1.get("a").call().unwrap();
        let b = c2.get("a").call().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));

        c1.clear();
        assert!(c1.is_empty());
        assert!(a.is_match("a"));
        assert!(!Arc::ptr_eq(&a, &c1.get("a").call().unwrap()));
    }

    #[test]
    fn global() {
        let a = rexp(r"^cache-global-(\d+)$").unwrap();
        let b = rexp_with(r"^cache-global-(\d+)$").call().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(std::ptr::eq(PatternCache::global(), PatternCache::global()));
    }

    #[test]
    fn concurrent() {
        let cache = PatternCache::new();
        let res: Vec<Arc<Rexp>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| cache.get(r"(\w+)@(\w+)").call().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(res.iter().all(|re| Arc::ptr_eq(re, &res[0])));
        assert_eq!(cache.len(), 1);
    }
}
