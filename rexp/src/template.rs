//! Replacement template checks.
//!
//! Templates use the `regex` crate's syntax: `$n` / `${n}` for numbered
//! groups, `$name` / `${name}` for named groups and `$$` for a literal `$`.
//! `$name` takes the longest run of `[_0-9A-Za-z]`, so `$1a` refers to a group
//! named `1a`; write `${1}a` instead.
//!
//! `regex` expands a reference to a missing group as an empty string. That
//! hides typos, so templates are checked against the pattern before any
//! substitution happens.
use crate::{Error, Rexp};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum GroupRef<'t> {
    Number(usize),
    Named(&'t str),
}

/// Group references in `template`, in order.
pub(crate) fn refs(template: &str) -> impl Iterator<Item = GroupRef<'_>> {
    let mut rest = template;
    std::iter::from_fn(move || loop {
        let i = rest.find('$')?;
        let after = &rest[i + 1..];
        if let Some(after) = after.strip_prefix('$') {
            rest = after;
            continue;
        }
        let (name, next) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], &braced[end + 1..]),
                // Unclosed brace is a literal `$`
                None => {
                    rest = after;
                    continue;
                }
            }
        } else {
            let end = after
                .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
                .unwrap_or(after.len());
            if end == 0 {
                rest = after;
                continue;
            }
            (&after[..end], &after[end..])
        };
        rest = next;
        return Some(match name.parse() {
            Ok(n) => GroupRef::Number(n),
            Err(_) => GroupRef::Named(name),
        });
    })
}

/// Check that every group `template` refers to exists in `re`.
pub(crate) fn check(re: &Rexp, template: &str) -> Result<(), Error> {
    let regex = re.as_regex();
    refs(template).try_for_each(|r| {
        let exists = match r {
            GroupRef::Number(n) => n < regex.captures_len(),
            GroupRef::Named(name) => regex.capture_names().flatten().any(|n| n == name),
        };
        if exists {
            Ok(())
        } else {
            Err(Error::UnknownGroup(match r {
                GroupRef::Number(n) => n.to_string(),
                GroupRef::Named(name) => name.to_owned(),
            }))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(template: &str) -> Vec<GroupRef<'_>> {
        refs(template).collect()
    }

    #[test]
    fn parse() {
        use GroupRef::*;

        assert_eq!(collect("X"), []);
        assert_eq!(collect("<$1>"), [Number(1)]);
        assert_eq!(collect("$0$12"), [Number(0), Number(12)]);
        assert_eq!(collect("${1}a$name"), [Number(1), Named("name")]);
        assert_eq!(collect("$1a"), [Named("1a")]);
        assert_eq!(collect("$$1 costs $"), []);
        assert_eq!(collect("${1"), []);
        assert_eq!(collect("$-${x}"), [Named("x")]);
    }

    #[test]
    fn check_groups() {
        let re = Rexp::new(r"(?<y>`d{4})-(`d`d)").unwrap();
        assert!(check(&re, "$0 $1 $2 ${y} $$3").is_ok());
        match check(&re, "$3") {
            Err(Error::UnknownGroup(g)) => assert_eq!(g, "3"),
            r => panic!("{r:?}"),
        }
        assert!(matches!(check(&re, "$1a"), Err(Error::UnknownGroup(g)) if g == "1a"));
        assert!(matches!(check(&re, "${m}"), Err(Error::UnknownGroup(g)) if g == "m"));
    }
}
