//! Flag and record types attached to scanned tokens and comments.

use crate::SyntaxKind;
use tslex_core::text::TextRange;

// Token flags from the scanner.
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u32 {
        const NONE                               = 0;
        const PRECEDING_LINE_BREAK               = 1 << 0;
        const PRECEDING_JSDOC_COMMENT            = 1 << 1;
        const UNTERMINATED                       = 1 << 2;
        /// e.g. `\u{10ffff}`
        const EXTENDED_UNICODE_ESCAPE            = 1 << 3;
        /// e.g. `10e2`
        const SCIENTIFIC                         = 1 << 4;
        /// e.g. `0777`
        const OCTAL                              = 1 << 5;
        /// e.g. `0x00000000`
        const HEX_SPECIFIER                      = 1 << 6;
        /// e.g. `0b0110010000000000`
        const BINARY_SPECIFIER                   = 1 << 7;
        /// e.g. `0o777`
        const OCTAL_SPECIFIER                    = 1 << 8;
        /// e.g. `0b1100_0101`
        const CONTAINS_SEPARATOR                 = 1 << 9;
        /// e.g. `\u00a0`
        const UNICODE_ESCAPE                     = 1 << 10;
        /// e.g. `\uhello`
        const CONTAINS_INVALID_ESCAPE            = 1 << 11;
        /// e.g. `\xa0`
        const HEX_ESCAPE                         = 1 << 12;
        /// e.g. `0888`
        const CONTAINS_LEADING_ZERO              = 1 << 13;
        /// e.g. `0_1`
        const CONTAINS_INVALID_SEPARATOR         = 1 << 14;
        const PRECEDING_JSDOC_LEADING_ASTERISKS  = 1 << 15;

        const BINARY_OR_OCTAL_SPECIFIER = Self::BINARY_SPECIFIER.bits() | Self::OCTAL_SPECIFIER.bits();
        const WITH_SPECIFIER = Self::HEX_SPECIFIER.bits() | Self::BINARY_OR_OCTAL_SPECIFIER.bits();
        const STRING_LITERAL_FLAGS = Self::HEX_ESCAPE.bits()
            | Self::UNICODE_ESCAPE.bits()
            | Self::EXTENDED_UNICODE_ESCAPE.bits()
            | Self::CONTAINS_INVALID_ESCAPE.bits();
        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::OCTAL.bits()
            | Self::CONTAINS_LEADING_ZERO.bits()
            | Self::WITH_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits()
            | Self::CONTAINS_INVALID_SEPARATOR.bits();
        const TEMPLATE_LITERAL_LIKE_FLAGS = Self::HEX_ESCAPE.bits()
            | Self::UNICODE_ESCAPE.bits()
            | Self::EXTENDED_UNICODE_ESCAPE.bits()
            | Self::CONTAINS_INVALID_ESCAPE.bits();
        const IS_INVALID = Self::OCTAL.bits()
            | Self::CONTAINS_LEADING_ZERO.bits()
            | Self::CONTAINS_INVALID_SEPARATOR.bits()
            | Self::CONTAINS_INVALID_ESCAPE.bits();
    }
}

/// Which comment syntax a [`CommentRange`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    SingleLine,
    MultiLine,
}

impl CommentKind {
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            CommentKind::SingleLine => SyntaxKind::SingleLineCommentTrivia,
            CommentKind::MultiLine => SyntaxKind::MultiLineCommentTrivia,
        }
    }
}

/// A comment located by the comment-range iterators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentRange {
    pub pos: u32,
    pub end: u32,
    pub kind: CommentKind,
    /// Set when a line break follows the comment before the next token.
    pub has_trailing_new_line: bool,
}

impl CommentRange {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }
}

/// The two suppression pragmas recognized in comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentDirectiveType {
    /// `@ts-expect-error`
    ExpectError,
    /// `@ts-ignore`
    Ignore,
}

/// A `@ts-expect-error` or `@ts-ignore` found while scanning a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentDirective {
    pub range: TextRange,
    pub kind: CommentDirectiveType,
}
