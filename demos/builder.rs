//! Building attribute lines from typed values.
//!
//! Run with: cargo run --example builder

use attrlist::{attrs, AttrList, Resolution};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // An #EXT-X-KEY tag, one setter per value grammar
    let mut key = AttrList::new();
    key.set_enumerated_string("METHOD", "AES-128");
    key.set_quoted_string("URI", "https://example.com/key?id=42");
    key.set_hexadecimal_integer("IV", &[0x9c, 0x7d, 0xb2, 0x44, 0x00, 0x00, 0x00, 0x01]);
    println!("#EXT-X-KEY:{}", key);

    // The IV decodes back to the same bytes
    let iv = key.hexadecimal_integer("IV").ok_or("IV missing")?;
    println!("iv bytes:   {:02x?}", iv);

    // A stream variant, with the resolution parsed from display syntax
    let resolution: Resolution = "1920x1080".parse()?;
    let mut variant = AttrList::new();
    variant.set_decimal_integer_as_number("BANDWIDTH", 5_000_000.0);
    variant.set_decimal_resolution("RESOLUTION", resolution);
    variant.set_decimal_floating_point("FRAME-RATE", 59.94);
    println!("#EXT-X-STREAM-INF:{}", variant);

    // The same line from raw values via the macro
    let raw = attrs! {
        "BANDWIDTH" => "5000000",
        "RESOLUTION" => "1920x1080",
        "FRAME-RATE" => "59.94",
    };
    assert_eq!(raw, variant);
    println!("✓ Builder and macro agree");

    Ok(())
}
