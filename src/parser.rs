//! Tolerant tokenizer for attribute-list text.
//!
//! An attribute list is a single line of `NAME=VALUE` entries joined by
//! commas. The scanner is total: whatever the input, it yields the entries
//! it can make sense of and drops the rest, because playlist generators in
//! the wild produce plenty of lists that are not quite well formed and a
//! reader still wants the good entries.
//!
//! Two rules do all the work:
//!
//! - the first `=` of an entry splits name from value, and an entry with no
//!   `=` (or an empty name) is skipped;
//! - a value that starts with `"` runs to the next `"`, and only then does
//!   the comma scan resume, so quoted values carry commas and equals signs
//!   as plain content.

/// Iterator over the `(name, raw value)` entries of an attribute-list string.
///
/// Yields borrowed slices; names come out in written case and are folded by
/// the caller.
pub(crate) struct Entries<'a> {
    input: &'a str,
    pos: usize,
}

pub(crate) fn entries(input: &str) -> Entries<'_> {
    Entries { input, pos: 0 }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let start = self.pos;

            // Find the name/value separator, or bail at the entry delimiter
            // for an entry that has none.
            let mut cursor = start;
            let mut separator = None;
            while cursor < bytes.len() {
                match bytes[cursor] {
                    b'=' => {
                        separator = Some(cursor);
                        break;
                    }
                    b',' => break,
                    _ => cursor += 1,
                }
            }
            let Some(separator) = separator else {
                self.pos = cursor + 1;
                continue;
            };

            let value_start = separator + 1;
            let mut scan_from = value_start;
            if bytes.get(value_start) == Some(&b'"') {
                // Quoted value: the delimiter scan resumes after the closing
                // quote. A quote that never closes runs to end of input.
                scan_from = match find_byte(bytes, value_start + 1, b'"') {
                    Some(close) => close + 1,
                    None => bytes.len(),
                };
            }
            let end = find_byte(bytes, scan_from, b',').unwrap_or(bytes.len());
            self.pos = end + 1;

            let name = &self.input[start..separator];
            if name.is_empty() {
                continue;
            }
            return Some((name, &self.input[value_start..end]));
        }
        None
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == needle)
        .map(|offset| from + offset)
}
