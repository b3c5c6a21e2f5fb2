//! Character classification: the ASCII dispatch table and identifier predicates.

use crate::char_codes::*;
use crate::unicode::{is_unicode_identifier_part, is_unicode_identifier_start};
use tslex_options::{LanguageVariant, ScriptTarget};
use tslex_syntax::SyntaxKind;

/// How `scan` should treat a leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharCategory {
    /// `A-Z`, `a-z`, `$`, `_`
    Identifier,
    Digit,
    Whitespace,
    LineBreak,
    /// Always a one-character token of the given kind.
    Simple(SyntaxKind),
    /// Starts an operator, literal or comment that needs lookahead.
    Operator,
    /// Non-ASCII or unused ASCII; handled by the slow path.
    Other,
}

static ASCII_CATEGORIES: [CharCategory; 128] = build_ascii_table();

const fn build_ascii_table() -> [CharCategory; 128] {
    let mut table = [CharCategory::Other; 128];
    let mut i = 0;
    while i < 128 {
        let ch = i as u8;
        table[i] = match ch {
            b'a'..=b'z' | b'A'..=b'Z' | b'$' | b'_' => CharCategory::Identifier,
            b'0'..=b'9' => CharCategory::Digit,
            b'\t' | 0x0B | 0x0C | b' ' => CharCategory::Whitespace,
            b'\n' | b'\r' => CharCategory::LineBreak,
            b'(' => CharCategory::Simple(SyntaxKind::OpenParenToken),
            b')' => CharCategory::Simple(SyntaxKind::CloseParenToken),
            b'[' => CharCategory::Simple(SyntaxKind::OpenBracketToken),
            b']' => CharCategory::Simple(SyntaxKind::CloseBracketToken),
            b'{' => CharCategory::Simple(SyntaxKind::OpenBraceToken),
            b'}' => CharCategory::Simple(SyntaxKind::CloseBraceToken),
            b';' => CharCategory::Simple(SyntaxKind::SemicolonToken),
            b',' => CharCategory::Simple(SyntaxKind::CommaToken),
            b':' => CharCategory::Simple(SyntaxKind::ColonToken),
            b'~' => CharCategory::Simple(SyntaxKind::TildeToken),
            b'@' => CharCategory::Simple(SyntaxKind::AtToken),
            b'!' | b'"' | b'#' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'/' | b'<'
            | b'=' | b'>' | b'?' | b'\\' | b'^' | b'`' | b'|' => CharCategory::Operator,
            _ => CharCategory::Other,
        };
        i += 1;
    }
    table
}

#[inline]
pub(crate) fn category_of(ch: u32) -> CharCategory {
    if ch <= MAX_ASCII_CHARACTER {
        ASCII_CATEGORIES[ch as usize]
    } else {
        CharCategory::Other
    }
}

/// Whether `ch` may begin an identifier under `target`.
pub fn is_identifier_start(ch: u32, target: ScriptTarget) -> bool {
    (UPPER_A..=UPPER_Z).contains(&ch)
        || (LOWER_A..=LOWER_Z).contains(&ch)
        || ch == DOLLAR
        || ch == UNDERSCORE
        || (ch > MAX_ASCII_CHARACTER && ch != EOF && is_unicode_identifier_start(ch, target))
}

/// Whether `ch` may continue an identifier under `target`.
pub fn is_identifier_part(ch: u32, target: ScriptTarget) -> bool {
    (UPPER_A..=UPPER_Z).contains(&ch)
        || (LOWER_A..=LOWER_Z).contains(&ch)
        || is_digit(ch)
        || ch == DOLLAR
        || ch == UNDERSCORE
        || (ch > MAX_ASCII_CHARACTER && ch != EOF && is_unicode_identifier_part(ch, target))
}

/// Like [`is_identifier_part`], but JSX names also accept `-` and `:`.
pub fn is_identifier_part_in_variant(ch: u32, target: ScriptTarget, variant: LanguageVariant) -> bool {
    (variant == LanguageVariant::JSX && (ch == MINUS || ch == COLON)) || is_identifier_part(ch, target)
}

/// Whether the whole of `name` is a single identifier.
pub fn is_identifier_text(name: &str, target: ScriptTarget, variant: LanguageVariant) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first as u32, target) => {
            chars.all(|ch| is_identifier_part_in_variant(ch as u32, target, variant))
        }
        _ => false,
    }
}
