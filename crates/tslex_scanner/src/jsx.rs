//! JSX text, JSX attribute values and JSDoc comment bodies.

use crate::char_class::{is_identifier_part, is_identifier_start};
use crate::char_codes::*;
use crate::scanner::Scanner;
use crate::trivia::{is_conflict_marker_trivia, scan_conflict_marker_trivia, MERGE_CONFLICT_MARKER_LENGTH};
use tslex_diagnostics::messages;
use tslex_syntax::{SyntaxKind, TokenFlags};

impl Scanner {
    // ========================================================================
    // JSX
    // ========================================================================

    /// Scan a token inside JSX children: `<`, `</`, `{` or a run of text.
    ///
    /// A run holding only whitespace and at least one line break is
    /// `JsxTextAllWhiteSpaces`. Unless `allow_multiline_jsx_text` is set, text
    /// stops at the first line break after real content.
    pub fn scan_jsx_token(&mut self, allow_multiline_jsx_text: bool) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.token_start = self.pos;
        if self.pos >= self.end {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.char_code_at(self.pos);
        if ch == LESS_THAN {
            if self.char_code_at(self.pos + 1) == SLASH {
                self.pos += 2;
                self.token = SyntaxKind::LessThanSlashToken;
            } else {
                self.pos += 1;
                self.token = SyntaxKind::LessThanToken;
            }
            return self.token;
        }
        if ch == OPEN_BRACE {
            self.pos += 1;
            self.token = SyntaxKind::OpenBraceToken;
            return self.token;
        }

        // 0: only whitespace so far on the first line; -1: a line break was
        // seen before any content; otherwise the last content offset.
        let mut first_non_whitespace: isize = 0;
        while self.pos < self.end {
            let ch = self.char_code_at(self.pos);
            if ch == OPEN_BRACE {
                break;
            }
            if ch == LESS_THAN {
                if is_conflict_marker_trivia(&self.text[..self.end], self.pos) {
                    self.error(&messages::MERGE_CONFLICT_MARKER_ENCOUNTERED, self.pos, MERGE_CONFLICT_MARKER_LENGTH);
                    self.pos = scan_conflict_marker_trivia(&self.text, self.pos).min(self.end);
                    self.token = SyntaxKind::ConflictMarkerTrivia;
                    return self.token;
                }
                break;
            }
            if ch == GREATER_THAN {
                self.error(&messages::UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_GT, self.pos, 1);
            }
            if ch == CLOSE_BRACE {
                self.error(&messages::UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_RBRACE, self.pos, 1);
            }

            if is_line_break(ch) && first_non_whitespace == 0 {
                first_non_whitespace = -1;
            } else if !allow_multiline_jsx_text && is_line_break(ch) && first_non_whitespace > 0 {
                break;
            } else if !is_white_space_like(ch) {
                first_non_whitespace = self.pos as isize;
            }
            self.pos += 1;
        }

        self.token_value = self.substring(self.full_start_pos, self.pos);
        self.token = if first_non_whitespace == -1 {
            SyntaxKind::JsxTextAllWhiteSpaces
        } else {
            SyntaxKind::JsxText
        };
        self.token
    }

    /// Extend the current identifier or keyword with `-` and further name
    /// parts, as in `data-value` or `aria-label`. Other tokens are returned
    /// unchanged.
    pub fn scan_jsx_identifier(&mut self) -> SyntaxKind {
        if !self.token.is_identifier_or_keyword() {
            return self.token;
        }
        while self.pos < self.end {
            if self.char_code_at(self.pos) == MINUS {
                self.token_value.push('-');
                self.pos += 1;
                continue;
            }
            let old_pos = self.pos;
            let parts = self.scan_identifier_parts();
            self.token_value.push_str(&parts);
            if self.pos == old_pos {
                break;
            }
        }
        self.token = self.get_identifier_token();
        self.token
    }

    /// A quoted attribute value, where backslashes are literal and line
    /// breaks are allowed. Anything else is scanned as a normal token.
    pub fn scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        match self.char_code_at(self.pos) {
            DOUBLE_QUOTE | SINGLE_QUOTE => {
                self.token_start = self.pos;
                self.token_flags = TokenFlags::NONE;
                self.token_value = self.scan_string(true);
                self.token = SyntaxKind::StringLiteral;
                self.token
            }
            _ => self.scan(),
        }
    }

    // ========================================================================
    // JSDoc
    // ========================================================================

    /// Scan one token inside a JSDoc comment. Identifiers may contain `-`.
    pub fn scan_jsdoc_token(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();
        if self.pos >= self.end {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.code_point_at(self.pos);
        self.pos += char_size(ch);
        let kind = match ch {
            TAB | VERTICAL_TAB | FORM_FEED | SPACE => {
                while self.pos < self.end && is_white_space_single_line(self.char_code_at(self.pos)) {
                    self.pos += 1;
                }
                SyntaxKind::WhitespaceTrivia
            }
            AT => SyntaxKind::AtToken,
            CARRIAGE_RETURN | LINE_FEED => {
                if ch == CARRIAGE_RETURN && self.char_code_at(self.pos) == LINE_FEED {
                    self.pos += 1;
                }
                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                SyntaxKind::NewLineTrivia
            }
            ASTERISK => SyntaxKind::AsteriskToken,
            OPEN_BRACE => SyntaxKind::OpenBraceToken,
            CLOSE_BRACE => SyntaxKind::CloseBraceToken,
            OPEN_BRACKET => SyntaxKind::OpenBracketToken,
            CLOSE_BRACKET => SyntaxKind::CloseBracketToken,
            OPEN_PAREN => SyntaxKind::OpenParenToken,
            CLOSE_PAREN => SyntaxKind::CloseParenToken,
            LESS_THAN => SyntaxKind::LessThanToken,
            GREATER_THAN => SyntaxKind::GreaterThanToken,
            EQUALS => SyntaxKind::EqualsToken,
            COMMA => SyntaxKind::CommaToken,
            DOT => SyntaxKind::DotToken,
            BACKTICK => SyntaxKind::BacktickToken,
            HASH => SyntaxKind::HashToken,
            BACKSLASH => {
                self.pos -= 1;
                if let Some(kind) = self.try_scan_escaped_identifier_start() {
                    kind
                } else {
                    self.pos += 1;
                    SyntaxKind::Unknown
                }
            }
            _ if is_identifier_start(ch, self.language_version) => {
                let mut ch = self.code_point_at(self.pos);
                while self.pos < self.end && (is_identifier_part(ch, self.language_version) || ch == MINUS) {
                    self.pos += char_size(ch);
                    ch = self.code_point_at(self.pos);
                }
                self.token_value = self.substring(self.token_start, self.pos);
                if ch == BACKSLASH {
                    let rest = self.scan_identifier_parts();
                    self.token_value.push_str(&rest);
                }
                self.get_identifier_token()
            }
            _ => SyntaxKind::Unknown,
        };
        self.token = kind;
        kind
    }

    /// Scan free comment text up to a line break, a backtick, `{`, or an `@`
    /// that starts a tag. Inside backticks only line breaks and backticks
    /// stop the text. Falls back to [`Scanner::scan_jsdoc_token`] when no text
    /// was consumed.
    pub fn scan_jsdoc_comment_text_token(&mut self, in_backticks: bool) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::NONE;
        if self.pos >= self.end {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let mut ch = self.char_code_at(self.pos);
        while self.pos < self.end && !is_line_break(ch) && ch != BACKTICK {
            if !in_backticks && (ch == OPEN_BRACE || self.is_jsdoc_tag_start(ch)) {
                break;
            }
            self.pos += 1;
            ch = self.code_point_at(self.pos);
        }

        if self.pos == self.token_start {
            return self.scan_jsdoc_token();
        }
        self.token_value = self.substring(self.token_start, self.pos);
        self.token = SyntaxKind::JSDocCommentTextToken;
        self.token
    }

    /// An `@` after whitespace and before non-whitespace.
    fn is_jsdoc_tag_start(&self, ch: u32) -> bool {
        ch == AT
            && self.pos > 0
            && is_white_space_single_line(self.char_code_at(self.pos - 1))
            && !(self.pos + 1 < self.end && is_white_space_like(self.char_code_at(self.pos + 1)))
    }
}
