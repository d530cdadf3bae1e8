//! Support types for typed attribute values.
//!
//! This module provides the types that the typed accessors on
//! [`AttrList`](crate::AttrList) trade in beyond the primitives:
//!
//! - [`Resolution`]: a decoded `<width>x<height>` pair
//! - [`ResolutionValue`]: encoder input for resolutions whose sides may be
//!   individually absent
//! - [`IntegerValue`]: encoder input for the arbitrary-precision integer
//!   setters, either raw big-endian bytes or a native number
//!
//! ## Usage Patterns
//!
//! ```rust
//! use attrlist::{AttrList, Resolution};
//!
//! let mut list = AttrList::new();
//!
//! // Setters take anything convertible to the input type.
//! list.set_decimal_resolution("RESOLUTION", (1920, 1080));
//! list.set_hexadecimal_integer("IV", &[0x01, 0x23]);
//! list.set_decimal_integer("BANDWIDTH", 1280000.0);
//!
//! // Decoding hands back the dedicated type.
//! let res = list.decimal_resolution("RESOLUTION").unwrap();
//! assert_eq!(res, Resolution::new(1920, 1080));
//! assert_eq!(res.to_string(), "1920x1080");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::ParseResolutionError;

/// A decoded `<width>x<height>` pair.
///
/// The textual form is strict: decimal digits on both sides of a lowercase
/// `x`, nothing else. `Display` writes that form back and [`FromStr`] parses
/// it, so the type also works on resolution strings outside an attribute
/// list.
///
/// # Examples
///
/// ```rust
/// use attrlist::Resolution;
///
/// let res: Resolution = "1280x720".parse().unwrap();
/// assert_eq!(res.width, 1280);
/// assert_eq!(res.height, 720);
/// assert_eq!(res.to_string(), "1280x720");
///
/// assert!("1280x720p".parse::<Resolution>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u64,
    pub height: u64,
}

impl Resolution {
    /// Creates a resolution from its two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::Resolution;
    ///
    /// let res = Resolution::new(640, 480);
    /// assert_eq!(res.to_string(), "640x480");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(width: u64, height: u64) -> Self {
        Resolution { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_resolution(s)
            .map(|(width, height)| Resolution { width, height })
            .ok_or_else(|| ParseResolutionError::new(s))
    }
}

impl From<(u64, u64)> for Resolution {
    fn from((width, height): (u64, u64)) -> Self {
        Resolution { width, height }
    }
}

/// Encoder input for [`set_decimal_resolution`](crate::AttrList::set_decimal_resolution).
///
/// Either side may be absent; an absent side serializes as the literal text
/// `NaN`, so an incomplete pair still produces well-formed-looking output.
/// The `Default` value has both sides absent and encodes as `NaNxNaN`.
///
/// Callers rarely name this type: the setter takes `impl Into<ResolutionValue>`
/// and conversions exist from [`Resolution`], `(u64, u64)`, and
/// `(Option<u64>, Option<u64>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionValue {
    pub width: Option<u64>,
    pub height: Option<u64>,
}

impl From<Resolution> for ResolutionValue {
    fn from(res: Resolution) -> Self {
        ResolutionValue {
            width: Some(res.width),
            height: Some(res.height),
        }
    }
}

impl From<(u64, u64)> for ResolutionValue {
    fn from((width, height): (u64, u64)) -> Self {
        ResolutionValue {
            width: Some(width),
            height: Some(height),
        }
    }
}

impl From<(Option<u64>, Option<u64>)> for ResolutionValue {
    fn from((width, height): (Option<u64>, Option<u64>)) -> Self {
        ResolutionValue { width, height }
    }
}

/// Encoder input for the arbitrary-precision integer setters.
///
/// The decimal and hexadecimal integer grammars carry values of any size, so
/// [`set_decimal_integer`](crate::AttrList::set_decimal_integer) and
/// [`set_hexadecimal_integer`](crate::AttrList::set_hexadecimal_integer)
/// accept either the big-endian bytes of an unsigned integer or a native
/// number for everyday magnitudes.
///
/// # Examples
///
/// ```rust
/// use attrlist::AttrList;
///
/// let mut list = AttrList::new();
/// list.set_decimal_integer("A", &[0x11, 0x22, 0x10, 0xF4, 0x7D, 0xE9, 0x81, 0x15]);
/// list.set_decimal_integer("B", 123.0);
///
/// assert_eq!(list.get("A"), Some("1234567890123456789"));
/// assert_eq!(list.get("B"), Some("123"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegerValue<'a> {
    /// Big-endian bytes of an unsigned integer of any size.
    Bytes(&'a [u8]),
    /// A native number, floored before encoding.
    Number(f64),
}

impl<'a> From<&'a [u8]> for IntegerValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        IntegerValue::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for IntegerValue<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        IntegerValue::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for IntegerValue<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        IntegerValue::Bytes(bytes)
    }
}

impl<'a> From<f64> for IntegerValue<'a> {
    fn from(value: f64) -> Self {
        IntegerValue::Number(value)
    }
}
