//! Character code constants and single-character predicates.
//!
//! Source text is held as UTF-16 code units, so every constant here is a
//! `u32` code unit (or code point once surrogates are combined).

#![allow(dead_code)]

/// Returned by bounded reads past the end of the scannable range.
pub const EOF: u32 = u32::MAX;

// Control characters and separators
pub const NULL_CHARACTER: u32 = 0x00;
pub const MAX_ASCII_CHARACTER: u32 = 0x7F;
pub const BACKSPACE: u32 = 0x08;
pub const TAB: u32 = 0x09;
pub const LINE_FEED: u32 = 0x0A;
pub const VERTICAL_TAB: u32 = 0x0B;
pub const FORM_FEED: u32 = 0x0C;
pub const CARRIAGE_RETURN: u32 = 0x0D;
pub const NEXT_LINE: u32 = 0x85;
pub const LINE_SEPARATOR: u32 = 0x2028;
pub const PARAGRAPH_SEPARATOR: u32 = 0x2029;

// Unicode spaces
pub const SPACE: u32 = 0x20;
pub const NON_BREAKING_SPACE: u32 = 0xA0;
pub const OGHAM: u32 = 0x1680;
pub const EN_QUAD: u32 = 0x2000;
pub const ZERO_WIDTH_SPACE: u32 = 0x200B;
pub const ZERO_WIDTH_NON_JOINER: u32 = 0x200C;
pub const ZERO_WIDTH_JOINER: u32 = 0x200D;
pub const NARROW_NO_BREAK_SPACE: u32 = 0x202F;
pub const MATHEMATICAL_SPACE: u32 = 0x205F;
pub const IDEOGRAPHIC_SPACE: u32 = 0x3000;
pub const BYTE_ORDER_MARK: u32 = 0xFEFF;
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

// Punctuation
pub const EXCLAMATION: u32 = b'!' as u32;
pub const DOUBLE_QUOTE: u32 = b'"' as u32;
pub const HASH: u32 = b'#' as u32;
pub const DOLLAR: u32 = b'$' as u32;
pub const PERCENT: u32 = b'%' as u32;
pub const AMPERSAND: u32 = b'&' as u32;
pub const SINGLE_QUOTE: u32 = b'\'' as u32;
pub const OPEN_PAREN: u32 = b'(' as u32;
pub const CLOSE_PAREN: u32 = b')' as u32;
pub const ASTERISK: u32 = b'*' as u32;
pub const PLUS: u32 = b'+' as u32;
pub const COMMA: u32 = b',' as u32;
pub const MINUS: u32 = b'-' as u32;
pub const DOT: u32 = b'.' as u32;
pub const SLASH: u32 = b'/' as u32;
pub const COLON: u32 = b':' as u32;
pub const SEMICOLON: u32 = b';' as u32;
pub const LESS_THAN: u32 = b'<' as u32;
pub const EQUALS: u32 = b'=' as u32;
pub const GREATER_THAN: u32 = b'>' as u32;
pub const QUESTION: u32 = b'?' as u32;
pub const AT: u32 = b'@' as u32;
pub const OPEN_BRACKET: u32 = b'[' as u32;
pub const BACKSLASH: u32 = b'\\' as u32;
pub const CLOSE_BRACKET: u32 = b']' as u32;
pub const CARET: u32 = b'^' as u32;
pub const UNDERSCORE: u32 = b'_' as u32;
pub const BACKTICK: u32 = b'`' as u32;
pub const OPEN_BRACE: u32 = b'{' as u32;
pub const BAR: u32 = b'|' as u32;
pub const CLOSE_BRACE: u32 = b'}' as u32;
pub const TILDE: u32 = b'~' as u32;

// Digits
pub const _0: u32 = b'0' as u32;
pub const _1: u32 = b'1' as u32;
pub const _2: u32 = b'2' as u32;
pub const _3: u32 = b'3' as u32;
pub const _4: u32 = b'4' as u32;
pub const _5: u32 = b'5' as u32;
pub const _6: u32 = b'6' as u32;
pub const _7: u32 = b'7' as u32;
pub const _8: u32 = b'8' as u32;
pub const _9: u32 = b'9' as u32;

// Letters the scanner dispatches on
pub const UPPER_A: u32 = b'A' as u32;
pub const UPPER_B: u32 = b'B' as u32;
pub const UPPER_D: u32 = b'D' as u32;
pub const UPPER_E: u32 = b'E' as u32;
pub const UPPER_F: u32 = b'F' as u32;
pub const UPPER_O: u32 = b'O' as u32;
pub const UPPER_P: u32 = b'P' as u32;
pub const UPPER_S: u32 = b'S' as u32;
pub const UPPER_W: u32 = b'W' as u32;
pub const UPPER_X: u32 = b'X' as u32;
pub const UPPER_Z: u32 = b'Z' as u32;

pub const LOWER_A: u32 = b'a' as u32;
pub const LOWER_B: u32 = b'b' as u32;
pub const LOWER_C: u32 = b'c' as u32;
pub const LOWER_D: u32 = b'd' as u32;
pub const LOWER_E: u32 = b'e' as u32;
pub const LOWER_F: u32 = b'f' as u32;
pub const LOWER_G: u32 = b'g' as u32;
pub const LOWER_I: u32 = b'i' as u32;
pub const LOWER_K: u32 = b'k' as u32;
pub const LOWER_M: u32 = b'm' as u32;
pub const LOWER_N: u32 = b'n' as u32;
pub const LOWER_O: u32 = b'o' as u32;
pub const LOWER_P: u32 = b'p' as u32;
pub const LOWER_Q: u32 = b'q' as u32;
pub const LOWER_R: u32 = b'r' as u32;
pub const LOWER_S: u32 = b's' as u32;
pub const LOWER_T: u32 = b't' as u32;
pub const LOWER_U: u32 = b'u' as u32;
pub const LOWER_V: u32 = b'v' as u32;
pub const LOWER_W: u32 = b'w' as u32;
pub const LOWER_X: u32 = b'x' as u32;
pub const LOWER_Y: u32 = b'y' as u32;
pub const LOWER_Z: u32 = b'z' as u32;

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: u32) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN || ch == LINE_SEPARATOR || ch == PARAGRAPH_SEPARATOR
}

/// Check if a character is whitespace that does not end a line.
#[inline]
pub fn is_white_space_single_line(ch: u32) -> bool {
    matches!(
        ch,
        SPACE
            | TAB
            | VERTICAL_TAB
            | FORM_FEED
            | NON_BREAKING_SPACE
            | NEXT_LINE
            | OGHAM
            | EN_QUAD..=ZERO_WIDTH_SPACE
            | NARROW_NO_BREAK_SPACE
            | MATHEMATICAL_SPACE
            | IDEOGRAPHIC_SPACE
            | BYTE_ORDER_MARK
    )
}

/// Whitespace of either kind.
#[inline]
pub fn is_white_space_like(ch: u32) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

#[inline]
pub fn is_digit(ch: u32) -> bool {
    (_0..=_9).contains(&ch)
}

#[inline]
pub fn is_octal_digit(ch: u32) -> bool {
    (_0..=_7).contains(&ch)
}

#[inline]
pub fn is_hex_digit(ch: u32) -> bool {
    is_digit(ch) || (UPPER_A..=UPPER_F).contains(&ch) || (LOWER_A..=LOWER_F).contains(&ch)
}

#[inline]
pub fn is_ascii_letter(ch: u32) -> bool {
    (UPPER_A..=UPPER_Z).contains(&ch) || (LOWER_A..=LOWER_Z).contains(&ch)
}

/// Letters, digits and `_`, the characters allowed in `\p{...}` names.
#[inline]
pub fn is_word_character(ch: u32) -> bool {
    is_ascii_letter(ch) || is_digit(ch) || ch == UNDERSCORE
}

/// Number of UTF-16 code units needed for `ch`; zero for [`EOF`].
#[inline]
pub fn char_size(ch: u32) -> usize {
    if ch == EOF {
        0
    } else if ch >= 0x10000 {
        2
    } else {
        1
    }
}

/// Value of a hex digit already known to satisfy [`is_hex_digit`].
#[inline]
pub(crate) fn hex_value(ch: u32) -> u32 {
    match ch {
        _0..=_9 => ch - _0,
        UPPER_A..=UPPER_F => ch - UPPER_A + 10,
        _ => ch - LOWER_A + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_classes() {
        assert!(is_white_space_single_line(NEXT_LINE));
        assert!(is_white_space_single_line(0x2005));
        assert!(!is_white_space_single_line(LINE_FEED));
        assert!(is_white_space_like(PARAGRAPH_SEPARATOR));
        assert!(!is_white_space_like(EOF));
    }

    #[test]
    fn test_char_size() {
        assert_eq!(char_size(EOF), 0);
        assert_eq!(char_size(0x61), 1);
        assert_eq!(char_size(0x1F600), 2);
    }

    #[test]
    fn test_hex_value() {
        assert_eq!(hex_value(b'7' as u32), 7);
        assert_eq!(hex_value(b'c' as u32), 12);
        assert_eq!(hex_value(b'F' as u32), 15);
    }
}
