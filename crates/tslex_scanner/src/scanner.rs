//! The scanner state machine.
//!
//! A [`Scanner`] owns a UTF-16 copy of the source text and produces one
//! token per call to [`Scanner::scan`]. Literal scanning lives in
//! `literals.rs`, the re-scan family in `rescan.rs`, regular expression
//! literals in `regexp.rs` and the JSX/JSDoc modes in `jsx.rs`; they all
//! extend this type.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::char_class::{category_of, is_identifier_start, CharCategory};
use crate::char_codes::*;
use crate::token::TokenInfo;
use crate::trivia::{
    is_conflict_marker_trivia, is_shebang_trivia, scan_conflict_marker_trivia,
    scan_shebang_trivia, MERGE_CONFLICT_MARKER_LENGTH,
};
use crate::utf16::{code_point_at, from_utf16, to_utf16};
use tslex_core::TextRange;
use tslex_diagnostics::{messages, DiagnosticMessage};
use tslex_options::{JSDocParsingMode, LanguageVariant, ScannerOptions, ScriptKind, ScriptTarget};
use tslex_syntax::{CommentDirective, CommentDirectiveType, SyntaxKind, TokenFlags};

/// Receives every lexical error: the message, the start offset and length of
/// the offending text, and the message argument if it takes one.
pub type ErrorCallback = Box<dyn FnMut(&DiagnosticMessage, usize, usize, Option<&str>)>;

/// Saved scanner state for lookahead.
#[derive(Debug, Clone)]
pub struct ScannerState {
    pub pos: usize,
    pub full_start_pos: usize,
    pub token_start: usize,
    pub token: SyntaxKind,
    pub token_value: String,
    pub token_flags: TokenFlags,
    pub comment_directives: Vec<CommentDirective>,
}

/// The scanner converts source text into tokens.
pub struct Scanner {
    /// The source text being scanned, as UTF-16 code units.
    pub(crate) text: Vec<u16>,
    /// Current position in the text.
    pub(crate) pos: usize,
    /// End of the active scan range (exclusive).
    pub(crate) end: usize,
    /// Start of the current token including leading trivia.
    pub(crate) full_start_pos: usize,
    /// Start of the current token (after leading trivia).
    pub(crate) token_start: usize,
    pub(crate) token: SyntaxKind,
    /// Decoded value of the current token.
    pub(crate) token_value: String,
    pub(crate) token_flags: TokenFlags,
    pub(crate) comment_directives: Vec<CommentDirective>,
    /// Reentrant: positive while JSDoc line decorations should be skipped.
    pub(crate) skip_jsdoc_leading_asterisks: i32,
    pub(crate) language_version: ScriptTarget,
    pub(crate) language_variant: LanguageVariant,
    pub(crate) skip_trivia: bool,
    pub(crate) script_kind: ScriptKind,
    pub(crate) jsdoc_parsing_mode: JSDocParsingMode,
    on_error: Option<ErrorCallback>,
}

impl Scanner {
    /// Create a scanner with no text.
    pub fn new(language_version: ScriptTarget, skip_trivia: bool, language_variant: LanguageVariant) -> Self {
        Self {
            text: Vec::new(),
            pos: 0,
            end: 0,
            full_start_pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            comment_directives: Vec::new(),
            skip_jsdoc_leading_asterisks: 0,
            language_version,
            language_variant,
            skip_trivia,
            script_kind: ScriptKind::Unknown,
            jsdoc_parsing_mode: JSDocParsingMode::ParseAll,
            on_error: None,
        }
    }

    /// Create a scanner configured from an options record.
    pub fn with_options(options: &ScannerOptions) -> Self {
        let mut scanner = Self::new(options.target, options.skip_trivia, options.language_variant);
        scanner.script_kind = options.script_kind;
        scanner.jsdoc_parsing_mode = options.jsdoc_parsing_mode;
        scanner
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the text and scan all of it from the start.
    pub fn set_text(&mut self, text: &str) {
        self.text = to_utf16(text);
        self.end = self.text.len();
        self.reset_token_state(0);
    }

    /// Replace the text and scan only `length` code units from `start`.
    pub fn set_text_range(&mut self, text: &str, start: usize, length: usize) {
        self.text = to_utf16(text);
        self.end = (start + length).min(self.text.len());
        self.reset_token_state(start.min(self.end));
    }

    pub fn set_on_error(&mut self, on_error: Option<ErrorCallback>) {
        self.on_error = on_error;
    }

    pub fn set_language_version(&mut self, language_version: ScriptTarget) {
        self.language_version = language_version;
    }

    pub fn set_language_variant(&mut self, variant: LanguageVariant) {
        self.language_variant = variant;
    }

    pub fn set_script_kind(&mut self, kind: ScriptKind) {
        self.script_kind = kind;
    }

    pub fn set_jsdoc_parsing_mode(&mut self, mode: JSDocParsingMode) {
        self.jsdoc_parsing_mode = mode;
    }

    /// Enter (`true`) or leave (`false`) a region where `*` decorations at
    /// the start of JSDoc lines are skipped. Calls nest.
    pub fn set_skip_jsdoc_leading_asterisks(&mut self, skip: bool) {
        self.skip_jsdoc_leading_asterisks += if skip { 1 } else { -1 };
    }

    /// Move to `position` and forget the current token.
    pub fn reset_token_state(&mut self, position: usize) {
        debug_assert!(position <= self.end);
        self.pos = position;
        self.full_start_pos = position;
        self.token_start = position;
        self.token = SyntaxKind::Unknown;
        self.token_value.clear();
        self.token_flags = TokenFlags::NONE;
    }

    pub fn clear_comment_directives(&mut self) {
        self.comment_directives.clear();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The full source text.
    pub fn text(&self) -> String {
        from_utf16(&self.text)
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// The raw source text of the current token.
    pub fn token_text(&self) -> String {
        from_utf16(&self.text[self.token_start..self.pos])
    }

    #[inline]
    pub fn token_full_start(&self) -> usize {
        self.full_start_pos
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn has_unicode_escape(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNICODE_ESCAPE)
    }

    pub fn has_extended_unicode_escape(&self) -> bool {
        self.token_flags.contains(TokenFlags::EXTENDED_UNICODE_ESCAPE)
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn has_preceding_jsdoc_comment(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_JSDOC_COMMENT)
    }

    pub fn has_preceding_jsdoc_leading_asterisks(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_JSDOC_LEADING_ASTERISKS)
    }

    /// Identifiers and every keyword that is not a reserved word.
    pub fn is_identifier(&self) -> bool {
        self.token == SyntaxKind::Identifier || self.token > SyntaxKind::LAST_RESERVED_WORD
    }

    pub fn is_reserved_word(&self) -> bool {
        self.token.is_reserved_word()
    }

    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    /// The subset of the flags that describes a numeric literal's shape.
    pub fn numeric_literal_flags(&self) -> TokenFlags {
        self.token_flags & TokenFlags::NUMERIC_LITERAL_FLAGS
    }

    /// `@ts-expect-error` and `@ts-ignore` comments seen so far.
    pub fn comment_directives(&self) -> &[CommentDirective] {
        &self.comment_directives
    }

    /// An owned snapshot of the current token.
    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            kind: self.token,
            full_start: self.full_start_pos as u32,
            pos: self.token_start as u32,
            end: self.pos as u32,
            value: self.token_value.clone(),
            flags: self.token_flags,
        }
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    /// Save the full scanner state for lookahead.
    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            full_start_pos: self.full_start_pos,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            comment_directives: self.comment_directives.clone(),
        }
    }

    /// Restore the full scanner state from a saved state.
    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.full_start_pos = state.full_start_pos;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_value = state.token_value;
        self.token_flags = state.token_flags;
        self.comment_directives = state.comment_directives;
    }

    /// Run `f`, then put the scanner back where it was.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.save_state();
        let result = f(self);
        self.restore_state(state);
        result
    }

    /// Run `f`, keeping its progress only when it returns `Some`.
    pub fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let state = self.save_state();
        let result = f(self);
        if result.is_none() {
            self.restore_state(state);
        }
        result
    }

    /// Run `f` over `length` code units from `start`, then restore the
    /// previous state and range.
    pub fn scan_range<T>(&mut self, start: usize, length: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        debug!(start, length, "entering scan range");
        let save_end = self.end;
        let state = self.save_state();
        self.end = (start + length).min(self.text.len());
        self.reset_token_state(start.min(self.end));
        let result = f(self);
        self.end = save_end;
        self.restore_state(state);
        result
    }

    // ========================================================================
    // Character access and errors
    // ========================================================================

    /// The code unit at `pos`, or [`EOF`] outside the active range.
    #[inline]
    pub(crate) fn char_code_at(&self, pos: usize) -> u32 {
        if pos < self.end {
            self.text[pos] as u32
        } else {
            EOF
        }
    }

    /// The code point at `pos`, or [`EOF`] outside the active range.
    #[inline]
    pub(crate) fn code_point_at(&self, pos: usize) -> u32 {
        if pos < self.end {
            code_point_at(&self.text[..self.end], pos)
        } else {
            EOF
        }
    }

    pub(crate) fn substring(&self, start: usize, end: usize) -> String {
        from_utf16(&self.text[start..end])
    }

    pub(crate) fn error(&mut self, message: &DiagnosticMessage, start: usize, length: usize) {
        if let Some(on_error) = self.on_error.as_mut() {
            on_error(message, start, length, None);
        }
    }

    pub(crate) fn error_with_arg(&mut self, message: &DiagnosticMessage, start: usize, length: usize, arg0: &str) {
        if let Some(on_error) = self.on_error.as_mut() {
            on_error(message, start, length, Some(arg0));
        }
    }

    /// Report at the current position with no length.
    pub(crate) fn error_here(&mut self, message: &DiagnosticMessage) {
        self.error(message, self.pos, 0);
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();

        loop {
            self.token_start = self.pos;
            if self.pos >= self.end {
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            }

            let ch = self.code_point_at(self.pos);
            if self.pos == 0 && ch == HASH && is_shebang_trivia(&self.text[..self.end]) {
                self.pos = scan_shebang_trivia(&self.text[..self.end], self.pos);
                if self.skip_trivia {
                    continue;
                }
                self.token = SyntaxKind::ShebangTrivia;
                return self.token;
            }

            let kind = match category_of(ch) {
                CharCategory::Identifier => match self.scan_identifier(ch, self.language_version) {
                    Some(kind) => kind,
                    None => self.scan_invalid_character(ch),
                },
                CharCategory::Digit => self.scan_digit(ch),
                CharCategory::Whitespace => {
                    if self.skip_whitespace_run(ch) {
                        continue;
                    }
                    SyntaxKind::WhitespaceTrivia
                }
                CharCategory::LineBreak => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    if self.skip_trivia {
                        self.pos += 1;
                        continue;
                    }
                    if ch == CARRIAGE_RETURN && self.char_code_at(self.pos + 1) == LINE_FEED {
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                    }
                    SyntaxKind::NewLineTrivia
                }
                CharCategory::Simple(kind) => {
                    self.pos += 1;
                    kind
                }
                CharCategory::Operator => match self.scan_operator(ch) {
                    Some(kind) => kind,
                    None => continue,
                },
                CharCategory::Other => match self.scan_other(ch) {
                    Some(kind) => kind,
                    None => continue,
                },
            };
            self.token = kind;
            return kind;
        }
    }

    /// Consume a whitespace run starting with `first`. Returns `true` when
    /// the run is trivia to skip.
    fn skip_whitespace_run(&mut self, first: u32) -> bool {
        if self.skip_trivia {
            self.pos += 1;
            return true;
        }
        while self.pos < self.end {
            let ch = self.text[self.pos] as u32;
            if ch != first && !is_white_space_single_line(ch) {
                break;
            }
            self.pos += 1;
        }
        false
    }

    /// Non-ASCII characters and ASCII control characters.
    fn scan_other(&mut self, ch: u32) -> Option<SyntaxKind> {
        match ch {
            NON_BREAKING_SPACE | OGHAM | EN_QUAD..=ZERO_WIDTH_SPACE | NARROW_NO_BREAK_SPACE
            | MATHEMATICAL_SPACE | IDEOGRAPHIC_SPACE | BYTE_ORDER_MARK => {
                if self.skip_whitespace_run(ch) {
                    None
                } else {
                    Some(SyntaxKind::WhitespaceTrivia)
                }
            }
            REPLACEMENT_CHARACTER => {
                debug!(pos = self.pos, "replacement character found, treating file as binary");
                self.error(&messages::FILE_APPEARS_TO_BE_BINARY, 0, 0);
                self.pos = self.end;
                Some(SyntaxKind::NonTextFileMarkerTrivia)
            }
            _ => {
                if let Some(kind) = self.scan_identifier(ch, self.language_version) {
                    return Some(kind);
                }
                if is_white_space_single_line(ch) {
                    self.pos += char_size(ch);
                    return None;
                }
                if is_line_break(ch) {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += char_size(ch);
                    return None;
                }
                Some(self.scan_invalid_character(ch))
            }
        }
    }

    fn scan_invalid_character(&mut self, ch: u32) -> SyntaxKind {
        let size = char_size(ch);
        self.error(&messages::INVALID_CHARACTER, self.pos, size);
        self.pos += size;
        SyntaxKind::Unknown
    }

    /// Characters that start operators, literals and comments. `None` means
    /// trivia was skipped and scanning continues.
    fn scan_operator(&mut self, ch: u32) -> Option<SyntaxKind> {
        let kind = match ch {
            EXCLAMATION => self.scan_exclamation(),
            DOUBLE_QUOTE | SINGLE_QUOTE => {
                self.token_value = self.scan_string(false);
                SyntaxKind::StringLiteral
            }
            BACKTICK => self.scan_template_and_set_token_value(false),
            PERCENT => self.scan_compound(SyntaxKind::PercentToken, SyntaxKind::PercentEqualsToken),
            AMPERSAND => self.scan_ampersand(),
            ASTERISK => return self.scan_asterisk(),
            PLUS => self.scan_plus(),
            MINUS => self.scan_minus(),
            DOT => self.scan_dot(),
            SLASH => return self.scan_slash(),
            LESS_THAN => return self.scan_less_than(),
            EQUALS => return self.scan_equals(),
            GREATER_THAN => {
                if let Some(kind) = self.try_scan_conflict_marker() {
                    return kind;
                }
                self.pos += 1;
                SyntaxKind::GreaterThanToken
            }
            QUESTION => self.scan_question(),
            CARET => self.scan_compound(SyntaxKind::CaretToken, SyntaxKind::CaretEqualsToken),
            BAR => return self.scan_bar(),
            BACKSLASH => self.scan_backslash(),
            HASH => self.scan_hash(),
            _ => self.scan_invalid_character(ch),
        };
        Some(kind)
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// `op` or `op=`.
    fn scan_compound(&mut self, single: SyntaxKind, with_equals: SyntaxKind) -> SyntaxKind {
        if self.char_code_at(self.pos + 1) == EQUALS {
            self.pos += 2;
            with_equals
        } else {
            self.pos += 1;
            single
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.char_code_at(self.pos + 1) == EQUALS {
            if self.char_code_at(self.pos + 2) == EQUALS {
                self.pos += 3;
                return SyntaxKind::ExclamationEqualsEqualsToken;
            }
            self.pos += 2;
            return SyntaxKind::ExclamationEqualsToken;
        }
        self.pos += 1;
        SyntaxKind::ExclamationToken
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        if self.char_code_at(self.pos + 1) == AMPERSAND {
            if self.char_code_at(self.pos + 2) == EQUALS {
                self.pos += 3;
                return SyntaxKind::AmpersandAmpersandEqualsToken;
            }
            self.pos += 2;
            return SyntaxKind::AmpersandAmpersandToken;
        }
        self.scan_compound(SyntaxKind::AmpersandToken, SyntaxKind::AmpersandEqualsToken)
    }

    fn scan_asterisk(&mut self) -> Option<SyntaxKind> {
        if self.char_code_at(self.pos + 1) == EQUALS {
            self.pos += 2;
            return Some(SyntaxKind::AsteriskEqualsToken);
        }
        if self.char_code_at(self.pos + 1) == ASTERISK {
            if self.char_code_at(self.pos + 2) == EQUALS {
                self.pos += 3;
                return Some(SyntaxKind::AsteriskAsteriskEqualsToken);
            }
            self.pos += 2;
            return Some(SyntaxKind::AsteriskAsteriskToken);
        }
        self.pos += 1;
        if self.skip_jsdoc_leading_asterisks > 0
            && !self.token_flags.contains(TokenFlags::PRECEDING_JSDOC_LEADING_ASTERISKS)
            && self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
        {
            // Decoration at the start of a JSDoc line.
            self.token_flags |= TokenFlags::PRECEDING_JSDOC_LEADING_ASTERISKS;
            return None;
        }
        Some(SyntaxKind::AsteriskToken)
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        if self.char_code_at(self.pos + 1) == PLUS {
            self.pos += 2;
            return SyntaxKind::PlusPlusToken;
        }
        self.scan_compound(SyntaxKind::PlusToken, SyntaxKind::PlusEqualsToken)
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        if self.char_code_at(self.pos + 1) == MINUS {
            self.pos += 2;
            return SyntaxKind::MinusMinusToken;
        }
        self.scan_compound(SyntaxKind::MinusToken, SyntaxKind::MinusEqualsToken)
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if is_digit(self.char_code_at(self.pos + 1)) {
            return self.scan_number();
        }
        if self.char_code_at(self.pos + 1) == DOT && self.char_code_at(self.pos + 2) == DOT {
            self.pos += 3;
            return SyntaxKind::DotDotDotToken;
        }
        self.pos += 1;
        SyntaxKind::DotToken
    }

    fn scan_slash(&mut self) -> Option<SyntaxKind> {
        match self.char_code_at(self.pos + 1) {
            SLASH => {
                self.pos += 2;
                while self.pos < self.end && !is_line_break(self.text[self.pos] as u32) {
                    self.pos += 1;
                }
                self.append_if_comment_directive(self.token_start, DirectiveStyle::SingleLine);
                if self.skip_trivia {
                    None
                } else {
                    Some(SyntaxKind::SingleLineCommentTrivia)
                }
            }
            ASTERISK => {
                self.pos += 2;
                let is_jsdoc =
                    self.char_code_at(self.pos) == ASTERISK && self.char_code_at(self.pos + 1) != SLASH;
                let mut comment_closed = false;
                let mut last_line_start = self.token_start;
                while self.pos < self.end {
                    let ch = self.text[self.pos] as u32;
                    if ch == ASTERISK && self.char_code_at(self.pos + 1) == SLASH {
                        self.pos += 2;
                        comment_closed = true;
                        break;
                    }
                    self.pos += 1;
                    if is_line_break(ch) {
                        last_line_start = self.pos;
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    }
                }
                if is_jsdoc && self.should_parse_jsdoc() {
                    self.token_flags |= TokenFlags::PRECEDING_JSDOC_COMMENT;
                }
                self.append_if_comment_directive(last_line_start, DirectiveStyle::MultiLine);
                if !comment_closed {
                    self.error_here(&messages::ASTERISK_SLASH_EXPECTED);
                }
                if self.skip_trivia {
                    return None;
                }
                if !comment_closed {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                }
                Some(SyntaxKind::MultiLineCommentTrivia)
            }
            _ => Some(self.scan_compound(SyntaxKind::SlashToken, SyntaxKind::SlashEqualsToken)),
        }
    }

    fn scan_digit(&mut self, ch: u32) -> SyntaxKind {
        if ch == _0 && self.pos + 2 < self.end {
            let (flag, base) = match self.char_code_at(self.pos + 1) {
                UPPER_X | LOWER_X => (TokenFlags::HEX_SPECIFIER, 16),
                UPPER_B | LOWER_B => (TokenFlags::BINARY_SPECIFIER, 2),
                UPPER_O | LOWER_O => (TokenFlags::OCTAL_SPECIFIER, 8),
                _ => return self.scan_number(),
            };
            self.pos += 2;
            let (digits, message, prefix) = match base {
                16 => (
                    self.scan_minimum_number_of_hex_digits(1, true),
                    &messages::HEXADECIMAL_DIGIT_EXPECTED,
                    "0x",
                ),
                2 => (self.scan_binary_or_octal_digits(2), &messages::BINARY_DIGIT_EXPECTED, "0b"),
                _ => (self.scan_binary_or_octal_digits(8), &messages::OCTAL_DIGIT_EXPECTED, "0o"),
            };
            let digits = if digits.is_empty() {
                self.error_here(message);
                "0".to_string()
            } else {
                digits
            };
            self.token_value = format!("{prefix}{digits}");
            self.token_flags |= flag;
            return self.check_big_int_suffix();
        }
        self.scan_number()
    }

    fn scan_less_than(&mut self) -> Option<SyntaxKind> {
        if let Some(kind) = self.try_scan_conflict_marker() {
            return kind;
        }
        let next = self.char_code_at(self.pos + 1);
        if next == LESS_THAN {
            if self.char_code_at(self.pos + 2) == EQUALS {
                self.pos += 3;
                return Some(SyntaxKind::LessThanLessThanEqualsToken);
            }
            self.pos += 2;
            return Some(SyntaxKind::LessThanLessThanToken);
        }
        if next == EQUALS {
            self.pos += 2;
            return Some(SyntaxKind::LessThanEqualsToken);
        }
        if self.language_variant == LanguageVariant::JSX
            && next == SLASH
            && self.char_code_at(self.pos + 2) != ASTERISK
        {
            self.pos += 2;
            return Some(SyntaxKind::LessThanSlashToken);
        }
        self.pos += 1;
        Some(SyntaxKind::LessThanToken)
    }

    fn scan_equals(&mut self) -> Option<SyntaxKind> {
        if let Some(kind) = self.try_scan_conflict_marker() {
            return kind;
        }
        let kind = match self.char_code_at(self.pos + 1) {
            EQUALS if self.char_code_at(self.pos + 2) == EQUALS => {
                self.pos += 3;
                SyntaxKind::EqualsEqualsEqualsToken
            }
            EQUALS => {
                self.pos += 2;
                SyntaxKind::EqualsEqualsToken
            }
            GREATER_THAN => {
                self.pos += 2;
                SyntaxKind::EqualsGreaterThanToken
            }
            _ => {
                self.pos += 1;
                SyntaxKind::EqualsToken
            }
        };
        Some(kind)
    }

    fn scan_question(&mut self) -> SyntaxKind {
        if self.char_code_at(self.pos + 1) == DOT && !is_digit(self.char_code_at(self.pos + 2)) {
            self.pos += 2;
            return SyntaxKind::QuestionDotToken;
        }
        if self.char_code_at(self.pos + 1) == QUESTION {
            if self.char_code_at(self.pos + 2) == EQUALS {
                self.pos += 3;
                return SyntaxKind::QuestionQuestionEqualsToken;
            }
            self.pos += 2;
            return SyntaxKind::QuestionQuestionToken;
        }
        self.pos += 1;
        SyntaxKind::QuestionToken
    }

    fn scan_bar(&mut self) -> Option<SyntaxKind> {
        if let Some(kind) = self.try_scan_conflict_marker() {
            return kind;
        }
        if self.char_code_at(self.pos + 1) == BAR {
            if self.char_code_at(self.pos + 2) == EQUALS {
                self.pos += 3;
                return Some(SyntaxKind::BarBarEqualsToken);
            }
            self.pos += 2;
            return Some(SyntaxKind::BarBarToken);
        }
        Some(self.scan_compound(SyntaxKind::BarToken, SyntaxKind::BarEqualsToken))
    }

    /// An identifier that starts with a unicode escape.
    fn scan_backslash(&mut self) -> SyntaxKind {
        if let Some(kind) = self.try_scan_escaped_identifier_start() {
            return kind;
        }
        self.error_here(&messages::INVALID_CHARACTER);
        self.pos += 1;
        SyntaxKind::Unknown
    }

    /// With the cursor on `\`, scan an identifier whose first character is
    /// a unicode escape. Leaves the cursor alone when there is none.
    pub(crate) fn try_scan_escaped_identifier_start(&mut self) -> Option<SyntaxKind> {
        let extended = self.peek_extended_unicode_escape();
        if extended.is_some_and(|ch| is_identifier_start(ch, self.language_version)) {
            let mut value = from_utf16(&self.scan_extended_unicode_escape(true));
            value.push_str(&self.scan_identifier_parts());
            self.token_value = value;
            return Some(self.get_identifier_token());
        }
        let cooked = self.peek_unicode_escape();
        if let Some(ch) = cooked.filter(|&ch| is_identifier_start(ch, self.language_version)) {
            self.pos += 6;
            self.token_flags |= TokenFlags::UNICODE_ESCAPE;
            let mut value = from_utf16(&[ch as u16]);
            value.push_str(&self.scan_identifier_parts());
            self.token_value = value;
            return Some(self.get_identifier_token());
        }
        None
    }

    /// `#!` away from the start, or a private name such as `#field`.
    fn scan_hash(&mut self) -> SyntaxKind {
        if self.pos != 0 && self.char_code_at(self.pos + 1) == EXCLAMATION {
            self.error(&messages::HASH_BANG_CAN_ONLY_BE_USED_AT_THE_START_OF_A_FILE, self.pos, 2);
            self.pos += 1;
            return SyntaxKind::Unknown;
        }

        let char_after_hash = self.code_point_at(self.pos + 1);
        if char_after_hash == BACKSLASH {
            self.pos += 1;
            if self.try_scan_escaped_identifier_start().is_some() {
                self.token_value.insert(0, '#');
                return SyntaxKind::PrivateIdentifier;
            }
            self.pos -= 1;
        }

        if is_identifier_start(char_after_hash, self.language_version) {
            // The identifier is sliced from `token_start`, so it keeps the `#`.
            self.pos += 1;
            self.scan_identifier(char_after_hash, self.language_version);
        } else {
            self.token_value = "#".to_string();
            self.error(&messages::INVALID_CHARACTER, self.pos, char_size(char_after_hash));
            self.pos += 1;
        }
        SyntaxKind::PrivateIdentifier
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    /// Report and skip a merge conflict marker at the cursor. The outer
    /// `None` means there is no marker; the inner one means it was skipped.
    fn try_scan_conflict_marker(&mut self) -> Option<Option<SyntaxKind>> {
        if !is_conflict_marker_trivia(&self.text, self.pos) {
            return None;
        }
        self.error(&messages::MERGE_CONFLICT_MARKER_ENCOUNTERED, self.pos, MERGE_CONFLICT_MARKER_LENGTH);
        self.pos = scan_conflict_marker_trivia(&self.text, self.pos).min(self.end);
        if self.skip_trivia {
            Some(None)
        } else {
            Some(Some(SyntaxKind::ConflictMarkerTrivia))
        }
    }

    /// Record a directive if the comment text from `line_start` to the
    /// cursor is one.
    fn append_if_comment_directive(&mut self, line_start: usize, style: DirectiveStyle) {
        let text = self.substring(line_start, self.pos);
        let text = text.trim_start();
        if memchr::memchr(b'@', text.as_bytes()).is_none() {
            return;
        }
        let Some(captures) = style.regex().captures(text) else {
            return;
        };
        let kind = match captures.get(1).map(|m| m.as_str()) {
            Some("ts-expect-error") => CommentDirectiveType::ExpectError,
            Some("ts-ignore") => CommentDirectiveType::Ignore,
            _ => return,
        };
        self.comment_directives.push(CommentDirective {
            range: TextRange::new(line_start as u32, self.pos as u32),
            kind,
        });
    }

    /// Whether a `/** */` comment that just ended should mark the next token.
    fn should_parse_jsdoc(&self) -> bool {
        match self.jsdoc_parsing_mode {
            JSDocParsingMode::ParseAll => return true,
            JSDocParsingMode::ParseNone => return false,
            _ => {}
        }
        if !self.script_kind.is_typescript() {
            return true;
        }
        if self.jsdoc_parsing_mode == JSDocParsingMode::ParseForTypeInfo {
            return false;
        }
        jsdoc_see_or_link_regex().is_match(&self.substring(self.full_start_pos, self.pos))
    }
}

#[derive(Debug, Clone, Copy)]
enum DirectiveStyle {
    SingleLine,
    MultiLine,
}

impl DirectiveStyle {
    fn regex(self) -> &'static Regex {
        static SINGLE_LINE: OnceLock<Regex> = OnceLock::new();
        static MULTI_LINE: OnceLock<Regex> = OnceLock::new();
        match self {
            DirectiveStyle::SingleLine => SINGLE_LINE.get_or_init(|| {
                Regex::new(r"^///?\s*@(ts-expect-error|ts-ignore)").expect("directive pattern is valid")
            }),
            DirectiveStyle::MultiLine => MULTI_LINE.get_or_init(|| {
                Regex::new(r"^(?:/|\*)*\s*@(ts-expect-error|ts-ignore)").expect("directive pattern is valid")
            }),
        }
    }
}

fn jsdoc_see_or_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@(?:see|link)").expect("jsdoc pattern is valid"))
}
