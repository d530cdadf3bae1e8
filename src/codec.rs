//! Scalar codecs for the individual attribute value grammars.
//!
//! Decoding is lenient the same way everywhere: the longest leading run
//! matching the grammar is decoded and trailing junk is ignored, while an
//! empty run means the value is malformed and yields `None`. Encoding always
//! produces the canonical spelling of a value, so decode(encode(x)) gets the
//! value back.

use num_bigint::BigUint;

/// Largest integer an `f64` can represent exactly (2^53 - 1).
///
/// Decimal and hexadecimal values beyond this decode to `f64::INFINITY`
/// rather than silently losing low-order digits; the byte-sequence decoders
/// stay exact at any size.
pub(crate) const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Leading ASCII-digit run of `s`, or `None` if there is none.
fn decimal_digits(s: &str) -> Option<&str> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}

/// Leading hex-digit run after a mandatory `0x`/`0X` prefix.
fn hex_digits(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    let end = rest.bytes().take_while(u8::is_ascii_hexdigit).count();
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Decodes a base-10 value of any size into minimal big-endian bytes.
///
/// At least one byte comes back; zero is `[0x00]`.
pub(crate) fn parse_decimal_bytes(s: &str) -> Option<Vec<u8>> {
    let digits = decimal_digits(s)?;
    let value = BigUint::parse_bytes(digits.as_bytes(), 10)?;
    Some(value.to_bytes_be())
}

/// Decodes a base-10 value as a float, saturating to infinity past 2^53 - 1.
pub(crate) fn parse_decimal_number(s: &str) -> Option<f64> {
    let digits = decimal_digits(s)?;
    match digits.parse::<u64>() {
        Ok(n) if n <= MAX_SAFE_INTEGER => Some(n as f64),
        // A pure digit run can only fail to parse by overflowing u64, which
        // is past the safe range anyway.
        _ => Some(f64::INFINITY),
    }
}

/// Decodes a `0x` hex value into bytes, two digits per byte.
///
/// An odd digit count gets one implied leading zero nibble, so the byte
/// count always reflects the digit-pair count as written: `0x0042` is two
/// bytes, not one.
pub(crate) fn parse_hex_bytes(s: &str) -> Option<Vec<u8>> {
    let digits = hex_digits(s)?.as_bytes();
    let mut bytes = Vec::with_capacity(digits.len() / 2 + 1);
    let mut idx = 0;
    if digits.len() % 2 == 1 {
        bytes.push(nibble(digits[0])?);
        idx = 1;
    }
    while idx < digits.len() {
        bytes.push(nibble(digits[idx])? << 4 | nibble(digits[idx + 1])?);
        idx += 2;
    }
    Some(bytes)
}

/// Decodes a `0x` hex value as a float, saturating to infinity past 2^53 - 1.
pub(crate) fn parse_hex_number(s: &str) -> Option<f64> {
    let digits = hex_digits(s)?;
    match u64::from_str_radix(digits, 16) {
        Ok(n) if n <= MAX_SAFE_INTEGER => Some(n as f64),
        _ => Some(f64::INFINITY),
    }
}

/// Decodes a leading `digits[.digits]` run, optionally signed.
///
/// There is no exponent form in the grammar. The unsigned variant treats a
/// leading sign as junk at position zero, so the whole value is malformed.
pub(crate) fn parse_float(s: &str, signed: bool) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if signed && matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_len = end - int_start;
    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut i = frac_start;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_len = i - frac_start;
        if int_len > 0 || frac_len > 0 {
            end = i;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Decodes a strict `<width>x<height>` pair.
///
/// Unlike the numeric scanners this matches the whole string: any stray
/// character, missing side, or side too large for `u64` is malformed.
pub(crate) fn parse_resolution(s: &str) -> Option<(u64, u64)> {
    let (width, height) = s.split_once('x')?;
    Some((parse_resolution_side(width)?, parse_resolution_side(height)?))
}

fn parse_resolution_side(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Encodes big-endian bytes as base-10 digits; empty input is zero.
pub(crate) fn encode_decimal_bytes(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(10)
}

/// Encodes big-endian bytes as a `0x` hex literal; empty input is `0x0`.
///
/// Exactly one leading zero nibble is dropped when present, which keeps the
/// byte count recoverable: decoding pads an odd digit count back out to the
/// same bytes.
pub(crate) fn encode_hex_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "0x0".to_string();
    }
    let mut digits = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        digits.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        digits.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    let digits = digits.strip_prefix('0').unwrap_or(&digits);
    format!("0x{digits}")
}

/// Encodes a number as base-10 digits, truncating toward negative infinity.
pub(crate) fn encode_integer(value: f64) -> String {
    let value = value.floor();
    if value == 0.0 {
        // Covers -0.0, which would otherwise print a sign.
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Encodes a number as a `0x` hex literal, truncating toward negative infinity.
pub(crate) fn encode_hex_integer(value: f64) -> String {
    format!("0x{:x}", value.floor() as u64)
}

/// Encodes a float in its shortest round-trip decimal form.
pub(crate) fn encode_float(value: f64) -> String {
    if value == 0.0 {
        // Zero of either sign serializes without the sign.
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Encodes a resolution pair, substituting the literal `NaN` for absent sides.
pub(crate) fn encode_resolution(width: Option<u64>, height: Option<u64>) -> String {
    format!(
        "{}x{}",
        resolution_side(width),
        resolution_side(height)
    )
}

fn resolution_side(side: Option<u64>) -> String {
    match side {
        Some(value) => value.to_string(),
        None => "NaN".to_string(),
    }
}
