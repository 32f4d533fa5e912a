//! Escape character override.
//!
//! Pattern literals get noisy with doubled backslashes, and raw strings can't
//! always be used (e.g. when the pattern itself contains `"#`). So every
//! occurrence of the escape character (`` ` `` by default) is replaced with
//! `\` before compilation:
//! ```
//! use rexp::Rexp;
//!
//! let re = Rexp::new("^`d{4}-`d`d$")?;
//! assert!(re.is_match("2000-12"));
//!
//! let re = Rexp::builder().escape('%').build("^%d+$")?;
//! assert!(re.is_match("123"));
//! # Ok::<(), rexp::Error>(())
//! ```
//! Pass [`NO_ESCAPE`] to use the pattern as is.
use std::borrow::Cow;

/// The escape character used when none is given.
pub const DEFAULT_ESCAPE: char = '`';

/// Disables escape character translation.
pub const NO_ESCAPE: char = '\0';

/// Replace every `escape` in `pattern` with `\`.
///
/// Borrows when there is nothing to replace.
pub fn translate(pattern: &str, escape: char) -> Cow<'_, str> {
    if escape == NO_ESCAPE || escape == '\\' || !pattern.contains(escape) {
        return Cow::Borrowed(pattern);
    }
    Cow::Owned(pattern.replace(escape, "\\"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_escape() {
        assert_eq!(translate("^`d+$", DEFAULT_ESCAPE), r"^\d+$");
        assert_eq!(translate("``", DEFAULT_ESCAPE), r"\\");
        assert!(matches!(translate(r"^\d+$", DEFAULT_ESCAPE), Cow::Borrowed(_)));
    }

    #[test]
    fn no_escape() {
        assert_eq!(translate("^`d+$", NO_ESCAPE), "^`d+$");
        assert!(matches!(translate("^`d+$", NO_ESCAPE), Cow::Borrowed(_)));
    }

    #[test]
    fn custom_escape() {
        assert_eq!(translate("^%d+%.txt$", '%'), r"^\d+\.txt$");
        assert_eq!(translate("^`d+$", '%'), "^`d+$");
        assert_eq!(translate("a¥sb", '¥'), r"a\sb");
    }
}
