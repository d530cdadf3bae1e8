//! Reading and rewriting an HLS variant-stream line.
//!
//! Run with: cargo run --example playlist_line

use attrlist::AttrList;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // The attribute part of an #EXT-X-STREAM-INF tag.
    let line = "BANDWIDTH=1280000,AVERAGE-BANDWIDTH=1000000,\
                CODECS=\"avc1.640028,mp4a.40.2\",RESOLUTION=1920x1080,FRAME-RATE=29.97";

    let mut attrs = AttrList::parse(line);
    println!("parsed {} attributes", attrs.len());

    // Typed reads
    let bandwidth = attrs
        .decimal_integer_as_number("BANDWIDTH")
        .ok_or("BANDWIDTH missing")?;
    let resolution = attrs
        .decimal_resolution("RESOLUTION")
        .ok_or("RESOLUTION missing")?;
    let codecs = attrs.quoted_string("CODECS").ok_or("CODECS missing")?;

    println!("bandwidth:  {} bit/s", bandwidth);
    println!("resolution: {}x{}", resolution.width, resolution.height);
    println!("codecs:     {}", codecs);

    // Rewrite one attribute and drop another
    attrs.set_decimal_integer_as_number("BANDWIDTH", 2_560_000.0);
    attrs.unset("AVERAGE-BANDWIDTH");
    println!("rewritten:  {}", attrs);

    // Untouched attributes come back byte for byte
    assert_eq!(AttrList::parse(line).to_string(), line);
    println!("✓ Round-trip successful");

    Ok(())
}
