/*!
Ruby-style ergonomics over the [`regex`] crate.

## Features
- [Cached](cache) compiled patterns: `rexp(r"...")` compiles a pattern the
  first time and returns the same instance afterwards.
- [Escape character override](escape): write `` `d `` instead of `\d`.
- [Single-letter flags](flags) like `"ims"`.
- [Match cursors](Matched) with typed group access and [match
  iteration](Rexp::match_all).
- [`sub`/`gsub`](sub) with either a `$n` template or a callback, optionally
  limited to the first `n` matches.

Compilation and matching are entirely done by `regex`.
*/
//! ## Usage
//! ```
//! use rexp::rexp;
//!
//! let m = rexp(r"^(`d{4})-(`d`d)-(`d`d)$")?.match_first("2000-12-31").unwrap();
//! assert_eq!(m.get(1), Some("2000"));
//!
//! let re = rexp(r"(`d+)")?;
//! assert_eq!(re.gsub("2000-12-31", "<$1>")?, "<2000>-<12>-<31>");
//! assert_eq!(
//!     re.sub_n_with("2000-12-31", 2, |m| (m.parse::<u32>(1).unwrap().unwrap() + 1).to_string()),
//!     "2001-13-31"
//! );
//! # Ok::<(), rexp::Error>(())
//! ```
//!
//! ## Logging
//! Cache misses are logged at `debug` level and cache hits at `trace` level
//! through the [`log`](https://docs.rs/log) facade.
//!
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod cache;
mod error;
pub mod escape;
pub mod flags;
mod matched;
mod matching;
mod pattern;
pub mod sub;
pub mod template;

pub use cache::{rexp, rexp_with, PatternCache, PatternKey};
pub use error::Error;
pub use escape::{DEFAULT_ESCAPE, NO_ESCAPE};
pub use flags::Flags;
pub use matched::{MatchAll, Matched};
pub use matching::Matching;
pub use pattern::Rexp;
