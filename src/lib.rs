//! # attrlist
//!
//! A codec for the comma-separated `KEY=VALUE` attribute lists carried by
//! M3U8/HLS-style playlist tags.
//!
//! ## What is an attribute list?
//!
//! Playlist tags such as `#EXT-X-STREAM-INF` pack their parameters into a
//! single line of `NAME=VALUE` pairs:
//!
//! ```text
//! BANDWIDTH=1280000,CODECS="avc1.4d401f,mp4a.40.2",RESOLUTION=1280x720
//! ```
//!
//! The list is untyped text; every attribute's value is interpreted under
//! one of a handful of scalar grammars (decimal integers of any size, hex
//! integers, floats, quoted strings, enumerated strings, resolutions). This
//! crate parses a line into an ordered [`AttrList`], decodes values on
//! demand, encodes typed values back into canonical text, and reserializes
//! well-formed input byte for byte.
//!
//! ## Key Features
//!
//! - **Byte-exact round trips**: entries keep their order and their raw
//!   text, so `parse` then `to_string` reproduces well-formed input exactly
//! - **Tolerant parsing**: malformed entries are dropped, never fatal;
//!   attribute lists in the wild are sloppy and a reader still wants the
//!   good entries
//! - **Arbitrary precision**: the integer grammars decode to exact byte
//!   sequences at any magnitude, with an explicit `f64::INFINITY` sentinel
//!   when a convenience `f64` would lose digits
//! - **Absence is a value**: missing or malformed attributes read as
//!   `None`; no accessor panics or returns a `Result`
//! - **Case-insensitive names**: lookups fold case, storage is upper-cased
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! attrlist = "0.1"
//! ```
//!
//! ### Reading a playlist line
//!
//! ```rust
//! use attrlist::AttrList;
//!
//! let list = AttrList::parse(
//!     r#"BANDWIDTH=1280000,CODECS="avc1.4d401f,mp4a.40.2",RESOLUTION=1280x720"#,
//! );
//!
//! assert_eq!(list.decimal_integer_as_number("BANDWIDTH"), Some(1280000.0));
//! assert_eq!(list.quoted_string("CODECS"), Some("avc1.4d401f,mp4a.40.2"));
//!
//! let res = list.decimal_resolution("RESOLUTION").unwrap();
//! assert_eq!((res.width, res.height), (1280, 720));
//! ```
//!
//! ### Building a line
//!
//! ```rust
//! use attrlist::AttrList;
//!
//! let mut list = AttrList::new();
//! list.set_enumerated_string("METHOD", "AES-128");
//! list.set_quoted_string("URI", "https://example.com/key");
//! list.set_hexadecimal_integer("IV", &[0x9c, 0x7d, 0xb2, 0x44]);
//!
//! assert_eq!(
//!     list.to_string(),
//!     r#"METHOD=AES-128,URI="https://example.com/key",IV=0x9c7db244"#
//! );
//! ```
//!
//! ### Literal lists with the attrs! macro
//!
//! ```rust
//! use attrlist::attrs;
//!
//! let list = attrs! {
//!     "TYPE" => "AUDIO",
//!     "GROUP-ID" => "\"stereo\"",
//! };
//!
//! assert_eq!(list.enumerated_string("TYPE"), Some("AUDIO"));
//! assert_eq!(list.quoted_string("GROUP-ID"), Some("stereo"));
//! ```
//!
//! ## Round Trips
//!
//! Parsing keeps raw values verbatim (quotes included) and serialization
//! writes them back untouched, so the only normalization a round trip can
//! apply is upper-casing names:
//!
//! ```rust
//! use attrlist::AttrList;
//!
//! let line = r#"INT=42,HEX=0x42,FLOAT=0.42,STRING="hi",ENUM=OK,RES=4x2"#;
//! assert_eq!(AttrList::parse(line).to_string(), line);
//! ```
//!
//! ## Format Reference
//!
//! The [`grammar`] module documents the list syntax, the value grammars,
//! and every canonical encoding rule in one place.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable walkthroughs:
//!
//! - **`playlist_line.rs`** - Decoding a real `EXT-X-STREAM-INF` line
//! - **`builder.rs`** - Building and editing a list programmatically
//!
//! Run any of them with: `cargo run --example <name>`

pub mod error;
pub mod grammar;
pub mod list;
pub mod macros;
pub mod value;

mod codec;
mod parser;

pub use error::ParseResolutionError;
pub use list::AttrList;
pub use value::{IntegerValue, Resolution, ResolutionValue};
