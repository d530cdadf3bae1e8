//! Error type for standalone value parsing.
//!
//! The [`AttrList`](crate::AttrList) surface itself never returns errors:
//! a missing or malformed attribute decodes to `None`, and numeric overflow
//! past the exactly-representable range decodes to `f64::INFINITY`. Playlist
//! attribute lists are routinely sloppy in the wild, and callers probe for
//! attributes they only sometimes expect, so absence is a value rather than
//! a failure.
//!
//! The one place a typed error is worth having is parsing a value *outside*
//! an attribute list, where the caller handed over exactly one string and
//! deserves to know it was bad. [`Resolution`](crate::Resolution) implements
//! [`FromStr`](std::str::FromStr) with this error.
//!
//! ## Examples
//!
//! ```rust
//! use attrlist::Resolution;
//!
//! let err = "1920x".parse::<Resolution>().unwrap_err();
//! assert_eq!(err.input(), "1920x");
//! assert!(err.to_string().contains("<width>x<height>"));
//! ```

use thiserror::Error;

/// Error returned when a string is not a valid decimal resolution.
///
/// Produced by [`Resolution`](crate::Resolution)'s
/// [`FromStr`](std::str::FromStr) implementation. The grammar is strict:
/// decimal digits, a lowercase `x`, decimal digits, nothing else, and each
/// side must fit in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal resolution `{input}`: expected `<width>x<height>` in decimal digits")]
pub struct ParseResolutionError {
    input: String,
}

impl ParseResolutionError {
    pub(crate) fn new(input: &str) -> Self {
        ParseResolutionError {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::Resolution;
    ///
    /// let err = "4x2x1".parse::<Resolution>().unwrap_err();
    /// assert_eq!(err.input(), "4x2x1");
    /// ```
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
