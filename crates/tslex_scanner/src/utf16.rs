//! UTF-16 helpers. Positions everywhere in the scanner are code-unit offsets.

use crate::char_codes::EOF;

/// Encode a Rust string as UTF-16 code units.
pub fn to_utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decode code units, replacing lone surrogates with U+FFFD.
pub fn from_utf16(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// The code point starting at `pos`, combining a valid surrogate pair.
///
/// Returns [`EOF`] when `pos` is outside `text`. A lone surrogate is returned
/// as its own code unit value.
pub fn code_point_at(text: &[u16], pos: usize) -> u32 {
    let Some(&first) = text.get(pos) else {
        return EOF;
    };
    if (0xD800..=0xDBFF).contains(&first) {
        if let Some(&second) = text.get(pos + 1) {
            if (0xDC00..=0xDFFF).contains(&second) {
                return (first as u32 - 0xD800) * 0x400 + (second as u32 - 0xDC00) + 0x10000;
            }
        }
    }
    first as u32
}

/// Append the UTF-16 encoding of `code_point` to `out`.
pub(crate) fn push_code_point(out: &mut Vec<u16>, code_point: u32) {
    if code_point <= 0xFFFF {
        out.push(code_point as u16);
    } else {
        let offset = code_point - 0x10000;
        out.push((offset / 0x400 + 0xD800) as u16);
        out.push((offset % 0x400 + 0xDC00) as u16);
    }
}

/// The code units of `code_point`.
pub(crate) fn encode_code_point(code_point: u32) -> Vec<u16> {
    let mut out = Vec::with_capacity(2);
    push_code_point(&mut out, code_point);
    out
}

/// `code_point` as a string. Surrogate code points become U+FFFD.
pub fn utf16_encode_as_string(code_point: u32) -> String {
    from_utf16(&encode_code_point(code_point))
}
