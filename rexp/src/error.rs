use thiserror::Error;

/// An error that can occur when compiling a [`Rexp`](crate::Rexp) or
/// preparing a substitution.
///
/// Errors raised by substitution callbacks are not represented here. They are
/// returned unmodified by the `try_*` substitution methods, see
/// [`Rexp::try_sub_n_with`](crate::Rexp::try_sub_n_with).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A letter in the flag string is not one of `imsxudEL`.
    #[error("'{0}': unknown pattern flag.")]
    UnknownFlag(char),
    /// The regex engine rejected the pattern.
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
    /// A replacement template refers to a capture group the pattern does not
    /// have.
    #[error("'{0}': unknown group in replacement template.")]
    UnknownGroup(String),
}
