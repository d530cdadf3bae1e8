//! The attribute list container.
//!
//! This module provides [`AttrList`], an ordered mapping of attribute names
//! to raw textual values with typed accessors layered on top. Insertion
//! order matters because serialization must reproduce well-formed input
//! byte for byte, so the backing store is an [`IndexMap`] rather than a
//! `HashMap`.
//!
//! ## Names
//!
//! Attribute names are matched case-insensitively everywhere and stored
//! upper-cased, which is the canonical spelling of the format. Every other
//! character of a name (hyphens included) is preserved verbatim.
//!
//! ## Raw values
//!
//! The map stores the raw text of each value exactly as written, quotes
//! included. Typed decoders interpret that text on demand and typed setters
//! store canonical text, so a list can hold values of every grammar at once
//! and reserialize them untouched.
//!
//! ## Examples
//!
//! ```rust
//! use attrlist::AttrList;
//!
//! let line = r#"BANDWIDTH=1280000,CODECS="avc1.4d401f,mp4a.40.2",RESOLUTION=1280x720"#;
//! let list = AttrList::parse(line);
//!
//! assert_eq!(list.decimal_integer_as_number("BANDWIDTH"), Some(1280000.0));
//! assert_eq!(list.quoted_string("CODECS"), Some("avc1.4d401f,mp4a.40.2"));
//! assert_eq!(list.to_string(), line);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::parser;
use crate::value::{IntegerValue, Resolution, ResolutionValue};

/// An ordered, case-insensitive collection of `NAME=VALUE` attributes.
///
/// An `AttrList` holds the attributes of a single playlist tag line, in the
/// order they were written or assigned. Reading an attribute goes through a
/// typed decoder matching its grammar; a missing attribute or one whose
/// value does not fit the grammar reads as `None`. None of the accessors
/// panic or return errors, because attribute lists in the wild are sloppy
/// and readers probe for attributes that are only sometimes present.
///
/// # Examples
///
/// ```rust
/// use attrlist::AttrList;
///
/// let list = AttrList::parse(r#"INT=42,HEX=0x42,FLOAT=0.42,STRING="hi",ENUM=OK,RES=4x2"#);
///
/// assert_eq!(list.len(), 6);
/// assert_eq!(list.decimal_integer_as_number("INT"), Some(42.0));
/// assert_eq!(list.hexadecimal_integer_as_number("HEX"), Some(0x42 as f64));
/// assert_eq!(list.decimal_floating_point("FLOAT"), Some(0.42));
/// assert_eq!(list.quoted_string("STRING"), Some("hi"));
/// assert_eq!(list.enumerated_string("ENUM"), Some("OK"));
/// assert_eq!(list.decimal_resolution("RES").unwrap().width, 4);
///
/// // Well-formed input reserializes byte for byte.
/// assert_eq!(
///     list.to_string(),
///     r#"INT=42,HEX=0x42,FLOAT=0.42,STRING="hi",ENUM=OK,RES=4x2"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList {
    // A cleared attribute keeps its entry as `None` so that a later
    // re-assignment lands back in the original slot.
    entries: IndexMap<String, Option<String>>,
}

/// Attribute names are matched case-insensitively and stored upper-cased.
fn canonical_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(name.to_ascii_uppercase())
    } else {
        Cow::Borrowed(name)
    }
}

impl AttrList {
    /// Creates an empty `AttrList`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.to_string(), "");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        AttrList {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty `AttrList` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AttrList {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Parses an attribute-list string.
    ///
    /// Parsing is tolerant and never fails: entries without an `=` are
    /// silently dropped, a value beginning with `"` runs to its closing
    /// quote regardless of the commas and equals signs inside, and
    /// duplicate names keep the last value in the first slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("METHOD=AES-128,junk,URI=\"key.bin\"");
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.enumerated_string("METHOD"), Some("AES-128"));
    /// assert_eq!(list.quoted_string("URI"), Some("key.bin"));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut list = AttrList::new();
        for (name, value) in parser::entries(input) {
            list.insert(name, value);
        }
        list
    }

    /// Returns the raw stored value for `name`, quotes and all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse(r#"URI="key.bin""#);
    /// assert_eq!(list.get("uri"), Some(r#""key.bin""#));
    /// assert_eq!(list.get("OTHER"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(canonical_name(name).as_ref())?.as_deref()
    }

    /// Stores a raw value under `name`, returning the previous live value.
    ///
    /// The name is upper-cased; the value is stored verbatim, so the caller
    /// is responsible for it conforming to whatever grammar the attribute
    /// uses. The typed setters are usually the better tool.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::new();
    /// assert_eq!(list.insert("type", "EVENT"), None);
    /// assert_eq!(list.insert("TYPE", "VOD"), Some("EVENT".to_string()));
    /// assert_eq!(list.to_string(), "TYPE=VOD");
    /// ```
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.entries
            .insert(canonical_name(name).into_owned(), Some(value.into()))
            .flatten()
    }

    /// Clears the value of `name`, returning the previous live value.
    ///
    /// The entry itself stays in the map as a blank, invisible to `len`,
    /// `keys`, iteration, and serialization; assigning the name again puts
    /// the value back in its original position. Clearing a name that was
    /// never present does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::parse("A=1,B=2,C=3");
    /// assert_eq!(list.unset("B"), Some("2".to_string()));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.to_string(), "A=1,C=3");
    ///
    /// list.insert("B", "9");
    /// assert_eq!(list.to_string(), "A=1,B=9,C=3");
    /// ```
    pub fn unset(&mut self, name: &str) -> Option<String> {
        self.entries
            .get_mut(canonical_name(name).as_ref())
            .and_then(Option::take)
    }

    /// Returns `true` if `name` currently has a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::parse("A=1");
    /// assert!(list.contains("a"));
    /// list.unset("A");
    /// assert!(!list.contains("A"));
    /// ```
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of attributes that currently have a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().filter(|value| value.is_some()).count()
    }

    /// Returns `true` if no attribute currently has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the live attribute names, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("B=2,A=1");
    /// let names: Vec<_> = list.keys().collect();
    /// assert_eq!(names, ["B", "A"]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|_| name.as_str()))
    }

    /// Returns an iterator over live `(name, raw value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name.as_str(), value)))
    }

    /// Decodes `name` as an arbitrary-precision decimal integer, returning
    /// its minimal big-endian bytes.
    ///
    /// At least one byte comes back; zero decodes as `[0x00]`. Unlike
    /// [`decimal_integer_as_number`](Self::decimal_integer_as_number) this
    /// is exact at any magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("IV=1234567890123456789");
    /// assert_eq!(
    ///     list.decimal_integer("IV"),
    ///     Some(vec![0x11, 0x22, 0x10, 0xF4, 0x7D, 0xE9, 0x81, 0x15])
    /// );
    /// ```
    #[must_use]
    pub fn decimal_integer(&self, name: &str) -> Option<Vec<u8>> {
        codec::parse_decimal_bytes(self.get(name)?)
    }

    /// Decodes `name` as a decimal integer.
    ///
    /// Values past 2^53 − 1 cannot be held exactly in an `f64` and decode
    /// as `f64::INFINITY`; use [`decimal_integer`](Self::decimal_integer)
    /// when exactness matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("BANDWIDTH=1280000,SEQ=1234567890123456789");
    /// assert_eq!(list.decimal_integer_as_number("BANDWIDTH"), Some(1280000.0));
    /// assert_eq!(list.decimal_integer_as_number("SEQ"), Some(f64::INFINITY));
    /// assert_eq!(list.decimal_integer_as_number("MISSING"), None);
    /// ```
    #[must_use]
    pub fn decimal_integer_as_number(&self, name: &str) -> Option<f64> {
        codec::parse_decimal_number(self.get(name)?)
    }

    /// Decodes `name` as a `0x`-prefixed hexadecimal integer, returning its
    /// bytes with the digit-pair count preserved.
    ///
    /// Leading zero bytes survive: `0x0042` decodes as `[0x00, 0x42]`. An
    /// odd digit count gets an implied leading zero nibble.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("IV=0x123");
    /// assert_eq!(list.hexadecimal_integer("IV"), Some(vec![0x01, 0x23]));
    /// ```
    #[must_use]
    pub fn hexadecimal_integer(&self, name: &str) -> Option<Vec<u8>> {
        codec::parse_hex_bytes(self.get(name)?)
    }

    /// Decodes `name` as a `0x`-prefixed hexadecimal integer.
    ///
    /// Values past 2^53 − 1 decode as `f64::INFINITY`, like
    /// [`decimal_integer_as_number`](Self::decimal_integer_as_number).
    #[must_use]
    pub fn hexadecimal_integer_as_number(&self, name: &str) -> Option<f64> {
        codec::parse_hex_number(self.get(name)?)
    }

    /// Decodes `name` as an unsigned decimal float.
    ///
    /// The grammar has no sign, so a signed value reads as `None`.
    #[must_use]
    pub fn decimal_floating_point(&self, name: &str) -> Option<f64> {
        codec::parse_float(self.get(name)?, false)
    }

    /// Decodes `name` as a decimal float with an optional leading sign.
    ///
    /// Negative zero keeps its sign bit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("TIME-OFFSET=-25.5");
    /// assert_eq!(list.signed_decimal_floating_point("TIME-OFFSET"), Some(-25.5));
    /// ```
    #[must_use]
    pub fn signed_decimal_floating_point(&self, name: &str) -> Option<f64> {
        codec::parse_float(self.get(name)?, true)
    }

    /// Decodes `name` as a quoted string, returning the text between the
    /// quotes.
    ///
    /// The raw value must begin and end with `"`; anything else reads as
    /// `None`. The content may be empty and may contain commas and equals
    /// signs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse(r#"URI="key.bin",EMPTY="",BARE=word"#);
    /// assert_eq!(list.quoted_string("URI"), Some("key.bin"));
    /// assert_eq!(list.quoted_string("EMPTY"), Some(""));
    /// assert_eq!(list.quoted_string("BARE"), None);
    /// ```
    #[must_use]
    pub fn quoted_string(&self, name: &str) -> Option<&str> {
        self.get(name)?.strip_prefix('"')?.strip_suffix('"')
    }

    /// Decodes `name` as an enumerated string: the raw value exactly as
    /// stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let list = AttrList::parse("METHOD=AES-128");
    /// assert_eq!(list.enumerated_string("METHOD"), Some("AES-128"));
    /// ```
    #[must_use]
    pub fn enumerated_string(&self, name: &str) -> Option<&str> {
        self.get(name)
    }

    /// Decodes `name` as a `<width>x<height>` resolution.
    ///
    /// The grammar is strict; a missing side, a stray character, or a side
    /// too large for `u64` all read as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::{AttrList, Resolution};
    ///
    /// let list = AttrList::parse("RESOLUTION=1920x1080,BAD=1920x");
    /// assert_eq!(list.decimal_resolution("RESOLUTION"), Some(Resolution::new(1920, 1080)));
    /// assert_eq!(list.decimal_resolution("BAD"), None);
    /// ```
    #[must_use]
    pub fn decimal_resolution(&self, name: &str) -> Option<Resolution> {
        self.get(name)?.parse().ok()
    }

    /// Encodes an arbitrary-precision decimal integer under `name`.
    ///
    /// Accepts either big-endian bytes or a native number; see
    /// [`IntegerValue`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::new();
    /// list.set_decimal_integer("A", &[0x11, 0x22, 0x10, 0xF4, 0x7D, 0xE9, 0x81, 0x15]);
    /// list.set_decimal_integer("B", 123.0);
    /// assert_eq!(list.to_string(), "A=1234567890123456789,B=123");
    /// ```
    pub fn set_decimal_integer<'v, V>(&mut self, name: &str, value: V)
    where
        V: Into<IntegerValue<'v>>,
    {
        let text = match value.into() {
            IntegerValue::Bytes(bytes) => codec::encode_decimal_bytes(bytes),
            IntegerValue::Number(number) => codec::encode_integer(number),
        };
        self.insert(name, text);
    }

    /// Encodes a decimal integer under `name`, flooring the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::new();
    /// list.set_decimal_integer_as_number("BANDWIDTH", 1280000.0);
    /// assert_eq!(list.get("BANDWIDTH"), Some("1280000"));
    /// ```
    pub fn set_decimal_integer_as_number(&mut self, name: &str, value: f64) {
        self.insert(name, codec::encode_integer(value));
    }

    /// Encodes a hexadecimal integer under `name` as a lowercase `0x`
    /// literal.
    ///
    /// Byte input keeps its byte count recoverable: exactly one leading
    /// zero nibble is dropped, and decoding pads it back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::new();
    /// list.set_hexadecimal_integer("IV", &[0x01, 0x23]);
    /// assert_eq!(list.get("IV"), Some("0x123"));
    /// assert_eq!(list.hexadecimal_integer("IV"), Some(vec![0x01, 0x23]));
    /// ```
    pub fn set_hexadecimal_integer<'v, V>(&mut self, name: &str, value: V)
    where
        V: Into<IntegerValue<'v>>,
    {
        let text = match value.into() {
            IntegerValue::Bytes(bytes) => codec::encode_hex_bytes(bytes),
            IntegerValue::Number(number) => codec::encode_hex_integer(number),
        };
        self.insert(name, text);
    }

    /// Encodes a hexadecimal integer under `name`, flooring the value.
    pub fn set_hexadecimal_integer_as_number(&mut self, name: &str, value: f64) {
        self.insert(name, codec::encode_hex_integer(value));
    }

    /// Encodes an unsigned decimal float under `name`.
    ///
    /// Zero of either sign encodes as `0`.
    pub fn set_decimal_floating_point(&mut self, name: &str, value: f64) {
        self.insert(name, codec::encode_float(value));
    }

    /// Encodes a signed decimal float under `name`.
    ///
    /// Negative zero still encodes as `0`; the sign survives decoding but
    /// not encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::new();
    /// list.set_signed_decimal_floating_point("TIME-OFFSET", -25.5);
    /// assert_eq!(list.get("TIME-OFFSET"), Some("-25.5"));
    /// ```
    pub fn set_signed_decimal_floating_point(&mut self, name: &str, value: f64) {
        self.insert(name, codec::encode_float(value));
    }

    /// Encodes a quoted string under `name`, wrapping the value in quotes.
    ///
    /// The format has no escaping, so the value must not itself contain a
    /// double quote; what comes after one would no longer parse as part of
    /// this attribute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::AttrList;
    ///
    /// let mut list = AttrList::new();
    /// list.set_quoted_string("CODECS", "avc1.4d401f,mp4a.40.2");
    /// assert_eq!(list.to_string(), r#"CODECS="avc1.4d401f,mp4a.40.2""#);
    /// ```
    pub fn set_quoted_string(&mut self, name: &str, value: &str) {
        self.insert(name, format!("\"{value}\""));
    }

    /// Encodes an enumerated string under `name`, verbatim.
    pub fn set_enumerated_string(&mut self, name: &str, value: impl Into<String>) {
        self.insert(name, value);
    }

    /// Encodes a `<width>x<height>` resolution under `name`.
    ///
    /// Accepts a [`Resolution`], a `(width, height)` pair, or per-side
    /// options; an absent side encodes as the literal `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrlist::{AttrList, Resolution};
    ///
    /// let mut list = AttrList::new();
    /// list.set_decimal_resolution("RESOLUTION", Resolution::new(1920, 1080));
    /// assert_eq!(list.get("RESOLUTION"), Some("1920x1080"));
    ///
    /// list.set_decimal_resolution("PARTIAL", (Some(640), None));
    /// assert_eq!(list.get("PARTIAL"), Some("640xNaN"));
    /// ```
    pub fn set_decimal_resolution<V>(&mut self, name: &str, value: V)
    where
        V: Into<ResolutionValue>,
    {
        let value = value.into();
        self.insert(name, codec::encode_resolution(value.width, value.height));
    }
}

/// Serializes the list back to attribute-list text: live entries in
/// insertion order, `NAME=VALUE` joined by commas, values exactly as stored.
impl fmt::Display for AttrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<&str> for AttrList {
    fn from(input: &str) -> Self {
        AttrList::parse(input)
    }
}

impl From<HashMap<String, String>> for AttrList {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<AttrList> for HashMap<String, String> {
    fn from(list: AttrList) -> Self {
        list.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for AttrList
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut list = AttrList::new();
        for (name, value) in iter {
            list.insert(name.as_ref(), value);
        }
        list
    }
}

impl IntoIterator for AttrList {
    type Item = (String, String);
    type IntoIter = std::iter::FilterMap<
        indexmap::map::IntoIter<String, Option<String>>,
        fn((String, Option<String>)) -> Option<(String, String)>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let live: fn((String, Option<String>)) -> Option<(String, String)> =
            |(name, value)| value.map(|value| (name, value));
        self.entries.into_iter().filter_map(live)
    }
}

impl Serialize for AttrList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AttrList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttrListVisitor;

        impl Visitor<'_> for AttrListVisitor {
            type Value = AttrList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an attribute-list string")
            }

            fn visit_str<E>(self, value: &str) -> Result<AttrList, E>
            where
                E: de::Error,
            {
                Ok(AttrList::parse(value))
            }
        }

        deserializer.deserialize_str(AttrListVisitor)
    }
}
