//! Numeric, string and template literals, escape sequences and identifiers.

use crate::char_class::{is_identifier_part, is_identifier_start};
use crate::char_codes::*;
use crate::number_format::{js_number_to_string, parse_decimal, parse_int_radix, parse_pseudo_big_int};
use crate::scanner::Scanner;
use crate::utf16::{encode_code_point, from_utf16, push_code_point};
use tslex_diagnostics::messages;
use tslex_options::ScriptTarget;
use tslex_syntax::{SyntaxKind, TokenFlags};

bitflags::bitflags! {
    /// Context for [`Scanner::scan_escape_sequence`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct EscapeFlags: u32 {
        const STRING = 1 << 0;
        const REPORT_ERRORS = 1 << 1;
        const REGULAR_EXPRESSION = 1 << 2;
        const ANNEX_B = 1 << 3;
        const ANY_UNICODE_MODE = 1 << 4;
        const ATOM_ESCAPE = 1 << 5;

        const REPORT_INVALID_ESCAPE_ERRORS = Self::REGULAR_EXPRESSION.bits() | Self::REPORT_ERRORS.bits();
        const ALLOW_EXTENDED_UNICODE_ESCAPE = Self::STRING.bits() | Self::ANY_UNICODE_MODE.bits();
    }
}

impl Scanner {
    // ========================================================================
    // Numbers
    // ========================================================================

    /// Scan a decimal literal, including the legacy `0777` octal form.
    pub(crate) fn scan_number(&mut self) -> SyntaxKind {
        let mut start = self.pos;
        let main_fragment;
        if self.char_code_at(self.pos) == _0 {
            self.pos += 1;
            if self.char_code_at(self.pos) == UNDERSCORE {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR | TokenFlags::CONTAINS_INVALID_SEPARATOR;
                self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos, 1);
                self.pos -= 1;
                main_fragment = self.scan_number_fragment();
            } else {
                let (digits, is_octal) = self.scan_digits();
                if !is_octal {
                    // `08`, `09`: reported below once the whole literal is known.
                    self.token_flags |= TokenFlags::CONTAINS_LEADING_ZERO;
                    main_fragment = js_number_to_string(parse_decimal(&digits));
                } else if digits.is_empty() {
                    main_fragment = "0".to_string();
                } else {
                    let value = parse_int_radix(&digits, 8);
                    self.token_value = js_number_to_string(value);
                    self.token_flags |= TokenFlags::OCTAL;
                    let with_minus = self.token == SyntaxKind::MinusToken;
                    let significant = match digits.trim_start_matches('0') {
                        "" => "0",
                        rest => rest,
                    };
                    let literal = format!("{}0o{significant}", if with_minus { "-" } else { "" });
                    if with_minus {
                        start -= 1;
                    }
                    self.error_with_arg(
                        &messages::OCTAL_LITERALS_ARE_NOT_ALLOWED_USE_THE_SYNTAX_0,
                        start,
                        self.pos - start,
                        &literal,
                    );
                    return SyntaxKind::NumericLiteral;
                }
            }
        } else {
            main_fragment = self.scan_number_fragment();
        }

        let mut decimal_fragment = None;
        let mut scientific_fragment = None;
        if self.char_code_at(self.pos) == DOT {
            self.pos += 1;
            decimal_fragment = Some(self.scan_number_fragment());
        }
        let mut end = self.pos;
        if matches!(self.char_code_at(self.pos), UPPER_E | LOWER_E) {
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if matches!(self.char_code_at(self.pos), PLUS | MINUS) {
                self.pos += 1;
            }
            let pre_numeric_part = self.pos;
            let final_fragment = self.scan_number_fragment();
            if final_fragment.is_empty() {
                self.error_here(&messages::DIGIT_EXPECTED);
            } else {
                scientific_fragment = Some(format!("{}{}", self.substring(end, pre_numeric_part), final_fragment));
                end = self.pos;
            }
        }

        let result = if self.token_flags.contains(TokenFlags::CONTAINS_SEPARATOR) {
            let mut result = main_fragment;
            if let Some(decimal) = decimal_fragment.as_deref().filter(|d| !d.is_empty()) {
                result.push('.');
                result.push_str(decimal);
            }
            if let Some(scientific) = &scientific_fragment {
                result.push_str(scientific);
            }
            result
        } else {
            self.substring(start, end)
        };

        if self.token_flags.contains(TokenFlags::CONTAINS_LEADING_ZERO) {
            self.error(&messages::DECIMALS_WITH_LEADING_ZEROS_ARE_NOT_ALLOWED, start, end - start);
            self.token_value = js_number_to_string(parse_decimal(&result));
            return SyntaxKind::NumericLiteral;
        }

        if decimal_fragment.is_some() || self.token_flags.contains(TokenFlags::SCIENTIFIC) {
            let is_scientific = decimal_fragment.is_none() && self.token_flags.contains(TokenFlags::SCIENTIFIC);
            self.check_for_identifier_start_after_numeric_literal(start, is_scientific);
            self.token_value = js_number_to_string(parse_decimal(&result));
            SyntaxKind::NumericLiteral
        } else {
            self.token_value = result;
            let kind = self.check_big_int_suffix();
            self.check_for_identifier_start_after_numeric_literal(start, false);
            kind
        }
    }

    /// Decimal digits with `_` separators; returns the digits without them.
    pub(crate) fn scan_number_fragment(&mut self) -> String {
        let fragment_start = self.pos;
        let mut start = self.pos;
        let mut allow_separator = false;
        let mut is_previous_token_separator = false;
        let mut result = String::new();
        loop {
            let ch = self.char_code_at(self.pos);
            if ch == UNDERSCORE {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                if allow_separator {
                    allow_separator = false;
                    is_previous_token_separator = true;
                    result.push_str(&self.substring(start, self.pos));
                } else {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_SEPARATOR;
                    if is_previous_token_separator {
                        self.error(&messages::MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED, self.pos, 1);
                    } else {
                        self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos, 1);
                    }
                }
                self.pos += 1;
                start = self.pos;
                continue;
            }
            if is_digit(ch) {
                allow_separator = true;
                is_previous_token_separator = false;
                self.pos += 1;
                continue;
            }
            break;
        }
        if self.pos > fragment_start && self.text[self.pos - 1] as u32 == UNDERSCORE {
            self.token_flags |= TokenFlags::CONTAINS_INVALID_SEPARATOR;
            self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos - 1, 1);
        }
        result.push_str(&self.substring(start, self.pos));
        result
    }

    /// The digits after a leading `0`, and whether they are all octal.
    fn scan_digits(&mut self) -> (String, bool) {
        let start = self.pos;
        let mut is_octal = true;
        while is_digit(self.char_code_at(self.pos)) {
            if !is_octal_digit(self.char_code_at(self.pos)) {
                is_octal = false;
            }
            self.pos += 1;
        }
        (self.substring(start, self.pos), is_octal)
    }

    /// Exactly `count` hex digits as a value, or `None`.
    pub(crate) fn scan_exact_number_of_hex_digits(&mut self, count: usize, can_have_separators: bool) -> Option<u32> {
        let digits = self.scan_hex_digits(count, false, can_have_separators);
        hex_string_value(&digits)
    }

    /// At least `count` hex digits, lowercased; empty if there are fewer.
    pub(crate) fn scan_minimum_number_of_hex_digits(&mut self, count: usize, can_have_separators: bool) -> String {
        self.scan_hex_digits(count, true, can_have_separators)
    }

    fn scan_hex_digits(&mut self, min_count: usize, scan_as_many_as_possible: bool, can_have_separators: bool) -> String {
        let scan_start = self.pos;
        let mut value = String::new();
        let mut allow_separator = false;
        let mut is_previous_token_separator = false;
        while value.len() < min_count || scan_as_many_as_possible {
            let ch = self.char_code_at(self.pos);
            if can_have_separators && ch == UNDERSCORE {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                if allow_separator {
                    allow_separator = false;
                    is_previous_token_separator = true;
                } else {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_SEPARATOR;
                    if is_previous_token_separator {
                        self.error(&messages::MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED, self.pos, 1);
                    } else {
                        self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos, 1);
                    }
                }
                self.pos += 1;
                continue;
            }
            allow_separator = can_have_separators;
            if !is_hex_digit(ch) {
                break;
            }
            value.push((ch as u8).to_ascii_lowercase() as char);
            self.pos += 1;
            is_previous_token_separator = false;
        }
        if value.len() < min_count {
            value.clear();
        }
        if self.pos > scan_start && self.text[self.pos - 1] as u32 == UNDERSCORE {
            self.token_flags |= TokenFlags::CONTAINS_INVALID_SEPARATOR;
            self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos - 1, 1);
        }
        value
    }

    /// Digits valid in `base` (2 or 8), with separators removed.
    pub(crate) fn scan_binary_or_octal_digits(&mut self, base: u32) -> String {
        let scan_start = self.pos;
        let mut value = String::new();
        let mut separator_allowed = false;
        let mut is_previous_token_separator = false;
        loop {
            let ch = self.char_code_at(self.pos);
            if ch == UNDERSCORE {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                if separator_allowed {
                    separator_allowed = false;
                    is_previous_token_separator = true;
                } else {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_SEPARATOR;
                    if is_previous_token_separator {
                        self.error(&messages::MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED, self.pos, 1);
                    } else {
                        self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos, 1);
                    }
                }
                self.pos += 1;
                continue;
            }
            separator_allowed = true;
            if !is_digit(ch) || ch - _0 >= base {
                break;
            }
            value.push(ch as u8 as char);
            self.pos += 1;
            is_previous_token_separator = false;
        }
        if self.pos > scan_start && self.text[self.pos - 1] as u32 == UNDERSCORE {
            self.token_flags |= TokenFlags::CONTAINS_INVALID_SEPARATOR;
            self.error(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, self.pos - 1, 1);
        }
        value
    }

    /// Consume a trailing `n`, or normalize `token_value` to a number.
    pub(crate) fn check_big_int_suffix(&mut self) -> SyntaxKind {
        if self.char_code_at(self.pos) == LOWER_N {
            self.token_value.push('n');
            if self.token_flags.intersects(TokenFlags::BINARY_OR_OCTAL_SPECIFIER) {
                self.token_value = format!("{}n", parse_pseudo_big_int(&self.token_value));
            }
            self.pos += 1;
            return SyntaxKind::BigIntLiteral;
        }
        let value = if self.token_flags.contains(TokenFlags::BINARY_SPECIFIER) {
            parse_int_radix(&self.token_value[2..], 2)
        } else if self.token_flags.contains(TokenFlags::OCTAL_SPECIFIER) {
            parse_int_radix(&self.token_value[2..], 8)
        } else if self.token_flags.contains(TokenFlags::HEX_SPECIFIER) {
            parse_int_radix(&self.token_value[2..], 16)
        } else {
            parse_decimal(&self.token_value)
        };
        self.token_value = js_number_to_string(value);
        SyntaxKind::NumericLiteral
    }

    /// Report an identifier glued to the end of a numeric literal.
    fn check_for_identifier_start_after_numeric_literal(&mut self, numeric_start: usize, is_scientific: bool) {
        if !is_identifier_start(self.code_point_at(self.pos), self.language_version) {
            return;
        }
        let identifier_start = self.pos;
        let parts = self.scan_identifier_parts();
        let length = parts.encode_utf16().count();
        if length == 1 && self.text[identifier_start] as u32 == LOWER_N {
            let message = if is_scientific {
                &messages::A_BIGINT_LITERAL_CANNOT_USE_EXPONENTIAL_NOTATION
            } else {
                &messages::A_BIGINT_LITERAL_MUST_BE_AN_INTEGER
            };
            self.error(message, numeric_start, identifier_start - numeric_start + 1);
        } else {
            self.error(
                &messages::AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL,
                identifier_start,
                length,
            );
            self.pos = identifier_start;
        }
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    /// Scan a quoted string and return its cooked value. JSX attribute
    /// strings take escapes and line breaks literally.
    pub(crate) fn scan_string(&mut self, jsx_attribute_string: bool) -> String {
        let quote = self.char_code_at(self.pos);
        self.pos += 1;
        let mut result: Vec<u16> = Vec::new();
        let mut start = self.pos;
        loop {
            if self.pos >= self.end {
                result.extend_from_slice(&self.text[start..self.pos]);
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error_here(&messages::UNTERMINATED_STRING_LITERAL);
                break;
            }
            let ch = self.char_code_at(self.pos);
            if ch == quote {
                result.extend_from_slice(&self.text[start..self.pos]);
                self.pos += 1;
                break;
            }
            if ch == BACKSLASH && !jsx_attribute_string {
                result.extend_from_slice(&self.text[start..self.pos]);
                let escaped = self.scan_escape_sequence(EscapeFlags::STRING | EscapeFlags::REPORT_ERRORS);
                result.extend_from_slice(&escaped);
                start = self.pos;
                continue;
            }
            if (ch == LINE_FEED || ch == CARRIAGE_RETURN) && !jsx_attribute_string {
                result.extend_from_slice(&self.text[start..self.pos]);
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error_here(&messages::UNTERMINATED_STRING_LITERAL);
                break;
            }
            self.pos += 1;
        }
        from_utf16(&result)
    }

    /// Scan from a `` ` `` or `}` up to the end of the template part.
    /// `\r\n` and `\r` in the cooked value become `\n`.
    pub(crate) fn scan_template_and_set_token_value(&mut self, should_report_invalid_escape_errors: bool) -> SyntaxKind {
        let started_with_backtick = self.char_code_at(self.pos) == BACKTICK;
        self.pos += 1;
        let mut start = self.pos;
        let mut contents: Vec<u16> = Vec::new();
        let (closed_kind, open_kind) = if started_with_backtick {
            (SyntaxKind::NoSubstitutionTemplateLiteral, SyntaxKind::TemplateHead)
        } else {
            (SyntaxKind::TemplateTail, SyntaxKind::TemplateMiddle)
        };
        let resulting_token = loop {
            if self.pos >= self.end {
                contents.extend_from_slice(&self.text[start..self.pos]);
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error_here(&messages::UNTERMINATED_TEMPLATE_LITERAL);
                break closed_kind;
            }
            let ch = self.char_code_at(self.pos);
            if ch == BACKTICK {
                contents.extend_from_slice(&self.text[start..self.pos]);
                self.pos += 1;
                break closed_kind;
            }
            if ch == DOLLAR && self.char_code_at(self.pos + 1) == OPEN_BRACE {
                contents.extend_from_slice(&self.text[start..self.pos]);
                self.pos += 2;
                break open_kind;
            }
            if ch == BACKSLASH {
                contents.extend_from_slice(&self.text[start..self.pos]);
                let mut flags = EscapeFlags::STRING;
                if should_report_invalid_escape_errors {
                    flags |= EscapeFlags::REPORT_ERRORS;
                }
                let escaped = self.scan_escape_sequence(flags);
                contents.extend_from_slice(&escaped);
                start = self.pos;
                continue;
            }
            if ch == CARRIAGE_RETURN {
                contents.extend_from_slice(&self.text[start..self.pos]);
                self.pos += 1;
                if self.char_code_at(self.pos) == LINE_FEED {
                    self.pos += 1;
                }
                contents.push(LINE_FEED as u16);
                start = self.pos;
                continue;
            }
            self.pos += 1;
        };
        self.token_value = from_utf16(&contents);
        resulting_token
    }

    // ========================================================================
    // Escapes
    // ========================================================================

    /// Scan the escape sequence at `\` and return its cooked code units.
    /// Invalid sequences come back raw and set `CONTAINS_INVALID_ESCAPE`.
    pub(crate) fn scan_escape_sequence(&mut self, flags: EscapeFlags) -> Vec<u16> {
        let start = self.pos;
        self.pos += 1;
        if self.pos >= self.end {
            self.error_here(&messages::UNEXPECTED_END_OF_TEXT);
            return Vec::new();
        }
        let ch = self.char_code_at(self.pos);
        self.pos += 1;
        let report_invalid = flags.intersects(EscapeFlags::REPORT_INVALID_ESCAPE_ERRORS);
        match ch {
            _0..=_7 => {
                if ch == _0 && !is_digit(self.char_code_at(self.pos)) {
                    return vec![0];
                }
                // `\1`..`\3` take up to two more octal digits, `\4`..`\7` one.
                if ch <= _3 && is_octal_digit(self.char_code_at(self.pos)) {
                    self.pos += 1;
                }
                if is_octal_digit(self.char_code_at(self.pos)) {
                    self.pos += 1;
                }
                self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                if report_invalid {
                    let digits = self.substring(start + 1, self.pos);
                    let code = u32::from_str_radix(&digits, 8).unwrap_or(0);
                    let suggestion = format!("\\x{code:02x}");
                    if flags.contains(EscapeFlags::REGULAR_EXPRESSION)
                        && !flags.contains(EscapeFlags::ATOM_ESCAPE)
                        && ch != _0
                    {
                        self.error_with_arg(
                            &messages::OCTAL_ESCAPE_SEQUENCES_AND_BACKREFERENCES_ARE_NOT_ALLOWED_IN_A_CHARACTER_CLASS_IF_THIS_WAS_INTENDED_AS_AN_ESCAPE_SEQUENCE_USE_THE_SYNTAX_0_INSTEAD,
                            start,
                            self.pos - start,
                            &suggestion,
                        );
                    } else {
                        self.error_with_arg(
                            &messages::OCTAL_ESCAPE_SEQUENCES_ARE_NOT_ALLOWED_USE_THE_SYNTAX_0,
                            start,
                            self.pos - start,
                            &suggestion,
                        );
                    }
                    return vec![code as u16];
                }
                self.text[start..self.pos].to_vec()
            }
            _8 | _9 => {
                self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                if report_invalid {
                    if flags.contains(EscapeFlags::REGULAR_EXPRESSION) && !flags.contains(EscapeFlags::ATOM_ESCAPE) {
                        self.error(
                            &messages::DECIMAL_ESCAPE_SEQUENCES_AND_BACKREFERENCES_ARE_NOT_ALLOWED_IN_A_CHARACTER_CLASS,
                            start,
                            self.pos - start,
                        );
                    } else {
                        let sequence = self.substring(start, self.pos);
                        self.error_with_arg(
                            &messages::ESCAPE_SEQUENCE_0_IS_NOT_ALLOWED,
                            start,
                            self.pos - start,
                            &sequence,
                        );
                    }
                    return vec![ch as u16];
                }
                self.text[start..self.pos].to_vec()
            }
            LOWER_B => vec![BACKSPACE as u16],
            LOWER_T => vec![TAB as u16],
            LOWER_N => vec![LINE_FEED as u16],
            LOWER_V => vec![VERTICAL_TAB as u16],
            LOWER_F => vec![FORM_FEED as u16],
            LOWER_R => vec![CARRIAGE_RETURN as u16],
            SINGLE_QUOTE => vec![SINGLE_QUOTE as u16],
            DOUBLE_QUOTE => vec![DOUBLE_QUOTE as u16],
            LOWER_U => {
                if self.char_code_at(self.pos) == OPEN_BRACE {
                    self.pos -= 2;
                    let result = self.scan_extended_unicode_escape(report_invalid);
                    if !flags.intersects(EscapeFlags::ALLOW_EXTENDED_UNICODE_ESCAPE) {
                        self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                        if report_invalid {
                            self.error(
                                &messages::UNICODE_ESCAPE_SEQUENCES_ARE_ONLY_AVAILABLE_WHEN_THE_UNICODE_U_FLAG_OR_THE_UNICODE_SETS_V_FLAG_IS_SET,
                                start,
                                self.pos - start,
                            );
                        }
                    }
                    return result;
                }
                if let Some(raw) = self.expect_hex_digits_until(start, start + 6, report_invalid) {
                    return raw;
                }
                self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                let escaped_value = hex_units_value(&self.text[start + 2..self.pos]);
                if flags.contains(EscapeFlags::ANY_UNICODE_MODE)
                    && (0xD800..=0xDBFF).contains(&escaped_value)
                    && self.pos + 6 < self.end
                    && self.char_code_at(self.pos) == BACKSLASH
                    && self.char_code_at(self.pos + 1) == LOWER_U
                    && self.char_code_at(self.pos + 2) != OPEN_BRACE
                {
                    // `😀` is one character in unicode mode.
                    let next_start = self.pos;
                    if (next_start + 2..next_start + 6).all(|p| is_hex_digit(self.char_code_at(p))) {
                        let next_value = hex_units_value(&self.text[next_start + 2..next_start + 6]);
                        if (0xDC00..=0xDFFF).contains(&next_value) {
                            self.pos = next_start + 6;
                            return vec![escaped_value as u16, next_value as u16];
                        }
                    }
                }
                vec![escaped_value as u16]
            }
            LOWER_X => {
                if let Some(raw) = self.expect_hex_digits_until(start, start + 4, report_invalid) {
                    return raw;
                }
                self.token_flags |= TokenFlags::HEX_ESCAPE;
                vec![hex_units_value(&self.text[start + 2..self.pos]) as u16]
            }
            // Line continuations contribute nothing.
            CARRIAGE_RETURN => {
                if self.char_code_at(self.pos) == LINE_FEED {
                    self.pos += 1;
                }
                Vec::new()
            }
            LINE_FEED | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => Vec::new(),
            _ => {
                if flags.contains(EscapeFlags::ANY_UNICODE_MODE)
                    || (flags.contains(EscapeFlags::REGULAR_EXPRESSION)
                        && !flags.contains(EscapeFlags::ANNEX_B)
                        && is_identifier_part(ch, self.language_version))
                {
                    self.error(&messages::THIS_CHARACTER_CANNOT_BE_ESCAPED_IN_A_REGULAR_EXPRESSION, self.pos - 2, 2);
                }
                vec![ch as u16]
            }
        }
    }

    /// Advance over hex digits up to `limit`. On a non-hex digit, mark the
    /// escape invalid and return the raw text from `start`.
    fn expect_hex_digits_until(&mut self, start: usize, limit: usize, report: bool) -> Option<Vec<u16>> {
        while self.pos < limit {
            if !is_hex_digit(self.char_code_at(self.pos)) {
                self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                if report {
                    self.error_here(&messages::HEXADECIMAL_DIGIT_EXPECTED);
                }
                return Some(self.text[start..self.pos].to_vec());
            }
            self.pos += 1;
        }
        None
    }

    /// Scan `\u{...}` with the cursor on the backslash.
    pub(crate) fn scan_extended_unicode_escape(&mut self, should_emit_invalid_escape_error: bool) -> Vec<u16> {
        let start = self.pos;
        self.pos += 3;
        let escaped_start = self.pos;
        let escaped_value_string = self.scan_minimum_number_of_hex_digits(1, false);
        let escaped_value = hex_string_value(&escaped_value_string);
        let mut is_invalid_extended_escape = false;

        match escaped_value {
            None => {
                if should_emit_invalid_escape_error {
                    self.error_here(&messages::HEXADECIMAL_DIGIT_EXPECTED);
                }
                is_invalid_extended_escape = true;
            }
            Some(value) if value > 0x10FFFF => {
                if should_emit_invalid_escape_error {
                    self.error(
                        &messages::AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF_INCLUSIVE,
                        escaped_start,
                        self.pos - escaped_start,
                    );
                }
                is_invalid_extended_escape = true;
            }
            Some(_) => {}
        }

        if self.pos >= self.end {
            if should_emit_invalid_escape_error {
                self.error_here(&messages::UNEXPECTED_END_OF_TEXT);
            }
            is_invalid_extended_escape = true;
        } else if self.char_code_at(self.pos) == CLOSE_BRACE {
            self.pos += 1;
        } else {
            if should_emit_invalid_escape_error {
                self.error_here(&messages::UNTERMINATED_UNICODE_ESCAPE_SEQUENCE);
            }
            is_invalid_extended_escape = true;
        }

        match escaped_value {
            Some(value) if !is_invalid_extended_escape => {
                self.token_flags |= TokenFlags::EXTENDED_UNICODE_ESCAPE;
                encode_code_point(value)
            }
            _ => {
                self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                self.text[start..self.pos].to_vec()
            }
        }
    }

    /// The value of a `\uXXXX` escape at the cursor, without consuming it.
    pub(crate) fn peek_unicode_escape(&mut self) -> Option<u32> {
        if self.pos + 5 < self.end && self.char_code_at(self.pos + 1) == LOWER_U {
            let start = self.pos;
            self.pos += 2;
            let value = self.scan_exact_number_of_hex_digits(4, false);
            self.pos = start;
            return value;
        }
        None
    }

    /// The value of a `\u{...}` escape at the cursor, without consuming it.
    pub(crate) fn peek_extended_unicode_escape(&mut self) -> Option<u32> {
        if self.code_point_at(self.pos + 1) == LOWER_U && self.code_point_at(self.pos + 2) == OPEN_BRACE {
            let start = self.pos;
            self.pos += 3;
            let digits = self.scan_minimum_number_of_hex_digits(1, false);
            self.pos = start;
            return hex_string_value(&digits);
        }
        None
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// Scan an identifier starting with `start_character`, or return `None`
    /// without moving when it cannot start one.
    pub(crate) fn scan_identifier(&mut self, start_character: u32, language_version: ScriptTarget) -> Option<SyntaxKind> {
        if !is_identifier_start(start_character, language_version) {
            return None;
        }
        self.pos += char_size(start_character);
        let mut ch = self.code_point_at(self.pos);
        while self.pos < self.end && is_identifier_part(ch, language_version) {
            self.pos += char_size(ch);
            ch = self.code_point_at(self.pos);
        }
        self.token_value = self.substring(self.token_start, self.pos);
        if ch == BACKSLASH {
            let rest = self.scan_identifier_parts();
            self.token_value.push_str(&rest);
        }
        Some(self.get_identifier_token())
    }

    /// Identifier characters and unicode escapes from the cursor, cooked.
    pub(crate) fn scan_identifier_parts(&mut self) -> String {
        let mut result: Vec<u16> = Vec::new();
        let mut start = self.pos;
        while self.pos < self.end {
            let ch = self.code_point_at(self.pos);
            if is_identifier_part(ch, self.language_version) {
                self.pos += char_size(ch);
                continue;
            }
            if ch != BACKSLASH {
                break;
            }
            let extended = self.peek_extended_unicode_escape();
            if extended.is_some_and(|ch| is_identifier_part(ch, self.language_version)) {
                result.extend_from_slice(&self.text[start..self.pos]);
                let escaped = self.scan_extended_unicode_escape(true);
                result.extend_from_slice(&escaped);
                start = self.pos;
                continue;
            }
            let Some(cooked) = self
                .peek_unicode_escape()
                .filter(|&ch| is_identifier_part(ch, self.language_version))
            else {
                break;
            };
            self.token_flags |= TokenFlags::UNICODE_ESCAPE;
            result.extend_from_slice(&self.text[start..self.pos]);
            push_code_point(&mut result, cooked);
            self.pos += 6;
            start = self.pos;
        }
        result.extend_from_slice(&self.text[start..self.pos]);
        from_utf16(&result)
    }

    /// The keyword spelled by `token_value`, or `Identifier`.
    pub(crate) fn get_identifier_token(&self) -> SyntaxKind {
        let value = self.token_value.as_str();
        let len = value.encode_utf16().count();
        if (2..=12).contains(&len) && value.as_bytes()[0].is_ascii_lowercase() {
            if let Some(keyword) = SyntaxKind::from_keyword(value) {
                return keyword;
            }
        }
        SyntaxKind::Identifier
    }
}

/// Value of a lowercase hex digit string, saturating; `None` when empty.
fn hex_string_value(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    Some(digits.chars().fold(0u32, |acc, ch| {
        acc.saturating_mul(16).saturating_add(ch.to_digit(16).unwrap_or(0))
    }))
}

fn hex_units_value(units: &[u16]) -> u32 {
    units.iter().fold(0, |acc, &unit| acc * 16 + hex_value(unit as u32))
}
