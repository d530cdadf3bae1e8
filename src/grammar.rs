//! Attribute List Grammar Reference
//!
//! This module documents the attribute-list text format as implemented by
//! this library.
//!
//! # Overview
//!
//! M3U8/HLS-style playlist tags carry their parameters as a single line of
//! comma-separated `NAME=VALUE` pairs:
//!
//! ```text
//! BANDWIDTH=1280000,CODECS="avc1.4d401f,mp4a.40.2",RESOLUTION=1280x720
//! ```
//!
//! The list itself is untyped text; each attribute's value is interpreted
//! under one of a handful of scalar grammars chosen by the reader. The
//! library keeps the raw text in the list and applies a grammar only when a
//! typed accessor is called, which is why a parsed list reserializes byte
//! for byte.
//!
//! # List Syntax
//!
//! - Entries are separated by `,`.
//! - Within an entry, the **first** `=` separates name from value; later
//!   equals signs are value content (`ENUM=A=B` has the value `A=B`).
//! - A value whose first character is `"` is quoted: it extends to the next
//!   `"`, and commas or equals signs inside are plain content. The comma
//!   scan resumes after the closing quote.
//! - Names are upper-case letters, digits, and hyphens (`AVERAGE-BANDWIDTH`).
//!   Lookups in this library are case-insensitive and names are stored
//!   upper-cased; all other characters are preserved verbatim.
//! - There is no whitespace in the grammar and none is trimmed.
//!
//! ## Tolerance
//!
//! Parsing is total. An entry with no `=` (or an empty name) is dropped
//! silently; everything that does split into a name and a value is kept,
//! whether or not any grammar below accepts the value. A quote that never
//! closes extends to the end of the input.
//!
//! # Value Grammars
//!
//! | Grammar | Syntax | Decoded as |
//! |---------|--------|------------|
//! | decimal-integer | `[0-9]+`, any length | big-endian bytes, or `f64` with infinity past 2^53 − 1 |
//! | hexadecimal-integer | `0x`/`0X` then `[0-9A-Fa-f]+`, any length | bytes preserving digit-pair count, or `f64` with the same infinity rule |
//! | decimal-floating-point | `[0-9]+` with optional `.[0-9]*` part | `f64` |
//! | signed-decimal-floating-point | the same with optional leading `-`/`+` | `f64`; `-0` keeps its sign bit |
//! | quoted-string | `"` … `"`, no escapes | the text between the quotes |
//! | enumerated-string | anything unquoted | the raw text |
//! | decimal-resolution | `[0-9]+x[0-9]+`, nothing else | width and height as `u64` |
//!
//! ## Leniency
//!
//! The numeric decoders read the longest leading run matching their grammar
//! and ignore what follows, so `DURATION=42abc` decodes as 42. An empty run
//! is malformed and decodes as `None`, as does hexadecimal input without the
//! `0x` prefix. The resolution grammar is the strict exception: it must
//! match the entire value.
//!
//! ## Precision
//!
//! The integer grammars have no size limit; `IV` values, for instance, are
//! 128-bit. The byte-sequence decoders are exact at any length. The
//! `as_number` decoders return `f64` and substitute `f64::INFINITY` for any
//! value above 2^53 − 1 rather than rounding it, so a reader can tell
//! "too big" apart from a nearby representable value.
//!
//! # Canonical Encodings
//!
//! Encoders always write the canonical spelling:
//!
//! | Value | Encoded |
//! |-------|---------|
//! | decimal 42 | `42` |
//! | decimal bytes `[0x11, 0x22, 0x10, 0xF4, 0x7D, 0xE9, 0x81, 0x15]` | `1234567890123456789` |
//! | hex bytes `[0x01, 0x23]` | `0x123` |
//! | hex bytes `[0x00]` | `0x0` |
//! | float 0.42 | `0.42` |
//! | float −0.0 | `0` |
//! | quoted `hi` | `"hi"` |
//! | resolution 1920 × 1080 | `1920x1080` |
//! | resolution with absent sides | `NaNxNaN` |
//!
//! Two encoding rules are worth calling out:
//!
//! - **Hex byte counts survive round trips.** Encoding drops exactly one
//!   leading zero nibble (`[0x01, 0x23]` → `0x123`) and decoding pads an
//!   odd digit count back out, so the byte length is always recoverable.
//! - **Negative zero is asymmetric.** `-0` decodes with its sign bit set,
//!   but every numeric encoder writes zero as `0`. Re-encoding a decoded
//!   `-0` therefore normalizes it; playlist writers in the wild never emit
//!   a signed zero.
//!
//! # Worked Example
//!
//! ```rust
//! use attrlist::AttrList;
//!
//! let line = r#"INT=42,HEX=0x42,FLOAT=0.42,STRING="hi",ENUM=OK,RES=4x2"#;
//! let list = AttrList::parse(line);
//!
//! assert_eq!(list.decimal_integer("INT"), Some(vec![0x2a]));
//! assert_eq!(list.hexadecimal_integer("HEX"), Some(vec![0x42]));
//! assert_eq!(list.decimal_floating_point("FLOAT"), Some(0.42));
//! assert_eq!(list.quoted_string("STRING"), Some("hi"));
//! assert_eq!(list.enumerated_string("ENUM"), Some("OK"));
//! assert_eq!(list.decimal_resolution("RES").unwrap().height, 2);
//! assert_eq!(list.to_string(), line);
//! ```
//!
//! # Scope
//!
//! The library stops at the attribute-list layer. Splitting a playlist into
//! lines, recognizing tags, and knowing that `BANDWIDTH` ought to be a
//! decimal-integer are all the caller's business; this crate neither reads
//! manifests nor validates attribute names against any tag schema.

// This module is documentation only; there is no code here.
