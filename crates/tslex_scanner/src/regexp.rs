//! Regular expression literals.
//!
//! [`Scanner::re_scan_slash_token`] finds the extent of a `/.../flags`
//! literal with a quick forward scan, checks the flags, and then (when
//! asked to report errors) runs [`RegexValidator`], a recursive-descent
//! checker of the pattern grammar, over the body inside a nested scan range.
//! The validator only reports; it never changes the token.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::char_class::is_identifier_part;
use crate::char_codes::*;
use crate::literals::EscapeFlags;
use crate::scanner::Scanner;
use crate::unicode_properties::{
    canonical_non_binary_property, is_binary_property, is_binary_property_of_strings,
    is_general_category_value, is_valid_property_value, lone_property_candidates,
    non_binary_property_names, values_of_property,
};
use crate::utf16::{code_point_at, from_utf16};
use tslex_core::get_spelling_suggestion;
use tslex_diagnostics::messages;
use tslex_options::ScriptTarget;
use tslex_syntax::{SyntaxKind, TokenFlags};

bitflags::bitflags! {
    /// Flags after the closing `/` of a regular expression literal.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegularExpressionFlags: u32 {
        const NONE = 0;
        /// `d`
        const HAS_INDICES = 1 << 0;
        /// `g`
        const GLOBAL = 1 << 1;
        /// `i`
        const IGNORE_CASE = 1 << 2;
        /// `m`
        const MULTILINE = 1 << 3;
        /// `s`
        const DOT_ALL = 1 << 4;
        /// `u`
        const UNICODE = 1 << 5;
        /// `v`
        const UNICODE_SETS = 1 << 6;
        /// `y`
        const STICKY = 1 << 7;

        const ANY_UNICODE_MODE = Self::UNICODE.bits() | Self::UNICODE_SETS.bits();
        /// Flags that `(?ims-ims:...)` may toggle.
        const MODIFIERS = Self::IGNORE_CASE.bits() | Self::MULTILINE.bits() | Self::DOT_ALL.bits();
    }
}

impl RegularExpressionFlags {
    /// The flag spelled by `ch`.
    pub fn from_char(ch: u32) -> Option<Self> {
        let flag = match ch {
            LOWER_D => Self::HAS_INDICES,
            LOWER_G => Self::GLOBAL,
            LOWER_I => Self::IGNORE_CASE,
            LOWER_M => Self::MULTILINE,
            LOWER_S => Self::DOT_ALL,
            LOWER_U => Self::UNICODE,
            LOWER_V => Self::UNICODE_SETS,
            LOWER_Y => Self::STICKY,
            _ => return None,
        };
        Some(flag)
    }

    /// The oldest target that supports this flag, if it is not universal.
    pub fn first_available_target(self) -> Option<ScriptTarget> {
        if self == Self::HAS_INDICES {
            Some(ScriptTarget::ES2022)
        } else if self == Self::DOT_ALL {
            Some(ScriptTarget::ES2018)
        } else if self == Self::UNICODE || self == Self::STICKY {
            Some(ScriptTarget::ES2015)
        } else if self == Self::UNICODE_SETS {
            Some(ScriptTarget::ESNext)
        } else {
            None
        }
    }
}

impl Scanner {
    /// Re-scan a `/` or `/=` token as a regular expression literal.
    ///
    /// The token value becomes the raw literal text including flags. With
    /// `report_errors`, flag and pattern errors are reported.
    pub fn re_scan_slash_token(&mut self, report_errors: bool) -> SyntaxKind {
        if self.token != SyntaxKind::SlashToken && self.token != SyntaxKind::SlashEqualsToken {
            return self.token;
        }

        let start_of_body = self.token_start + 1;
        self.pos = start_of_body;
        let mut in_escape = false;
        let mut named_capture_groups = false;
        // Nested classes are not tracked here: `]` always closes the class.
        let mut in_character_class = false;
        loop {
            let ch = self.char_code_at(self.pos);
            if ch == EOF || is_line_break(ch) {
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            if in_escape {
                in_escape = false;
            } else if ch == SLASH && !in_character_class {
                break;
            } else if ch == OPEN_BRACKET {
                in_character_class = true;
            } else if ch == BACKSLASH {
                in_escape = true;
            } else if ch == CLOSE_BRACKET {
                in_character_class = false;
            } else if !in_character_class
                && ch == OPEN_PAREN
                && self.char_code_at(self.pos + 1) == QUESTION
                && self.char_code_at(self.pos + 2) == LESS_THAN
                && self.char_code_at(self.pos + 3) != EQUALS
                && self.char_code_at(self.pos + 3) != EXCLAMATION
            {
                named_capture_groups = true;
            }
            self.pos += 1;
        }
        let end_of_body = self.pos;

        if self.token_flags.contains(TokenFlags::UNTERMINATED) {
            self.pos = self.recover_unterminated_regex_end(start_of_body, end_of_body);
            self.error(
                &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
                self.token_start,
                self.pos - self.token_start,
            );
        } else {
            // Closing slash.
            self.pos += 1;
            let mut flags = RegularExpressionFlags::NONE;
            loop {
                let ch = self.code_point_at(self.pos);
                if ch == EOF || !is_identifier_part(ch, self.language_version) {
                    break;
                }
                let size = char_size(ch);
                if report_errors {
                    match RegularExpressionFlags::from_char(ch) {
                        None => self.error(&messages::UNKNOWN_REGULAR_EXPRESSION_FLAG, self.pos, size),
                        Some(flag) if flags.contains(flag) => {
                            self.error(&messages::DUPLICATE_REGULAR_EXPRESSION_FLAG, self.pos, size)
                        }
                        Some(flag) if (flags | flag).contains(RegularExpressionFlags::ANY_UNICODE_MODE) => self.error(
                            &messages::THE_UNICODE_U_FLAG_AND_THE_UNICODE_SETS_V_FLAG_CANNOT_BE_SET_SIMULTANEOUSLY,
                            self.pos,
                            size,
                        ),
                        Some(flag) => {
                            flags |= flag;
                            self.check_regular_expression_flag_availability(flag, size);
                        }
                    }
                }
                self.pos += size;
            }
            if report_errors {
                self.scan_range(start_of_body, end_of_body - start_of_body, |scanner| {
                    debug!(?flags, start = start_of_body, "validating regular expression");
                    RegexValidator::new(scanner, flags, true, named_capture_groups).validate();
                });
            }
        }

        self.token_value = self.substring(self.token_start, self.pos);
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    /// Guess where an unterminated literal was meant to end: the first
    /// unbalanced closing bracket outside a class, minus trailing whitespace
    /// and semicolons.
    fn recover_unterminated_regex_end(&self, start_of_body: usize, end_of_body: usize) -> usize {
        let mut pos = start_of_body;
        let mut in_escape = false;
        let mut character_class_depth = 0u32;
        let mut in_decimal_quantifier = false;
        let mut group_depth = 0u32;
        while pos < end_of_body {
            let ch = self.char_code_at(pos);
            if in_escape {
                in_escape = false;
            } else if ch == BACKSLASH {
                in_escape = true;
            } else if ch == OPEN_BRACKET {
                character_class_depth += 1;
            } else if ch == CLOSE_BRACKET && character_class_depth > 0 {
                character_class_depth -= 1;
            } else if character_class_depth == 0 {
                if ch == OPEN_BRACE {
                    in_decimal_quantifier = true;
                } else if ch == CLOSE_BRACE && in_decimal_quantifier {
                    in_decimal_quantifier = false;
                } else if !in_decimal_quantifier {
                    if ch == OPEN_PAREN {
                        group_depth += 1;
                    } else if ch == CLOSE_PAREN && group_depth > 0 {
                        group_depth -= 1;
                    } else if matches!(ch, CLOSE_PAREN | CLOSE_BRACKET | CLOSE_BRACE) {
                        break;
                    }
                }
            }
            pos += 1;
        }
        while pos > start_of_body {
            let ch = self.char_code_at(pos - 1);
            if !is_white_space_like(ch) && ch != SEMICOLON {
                break;
            }
            pos -= 1;
        }
        pos
    }

    fn check_regular_expression_flag_availability(&mut self, flag: RegularExpressionFlags, size: usize) {
        if let Some(available_from) = flag.first_available_target() {
            if self.language_version < available_from {
                self.error_with_arg(
                    &messages::THIS_REGULAR_EXPRESSION_FLAG_IS_ONLY_AVAILABLE_WHEN_TARGETING_0_OR_LATER,
                    self.pos,
                    size,
                    available_from.name(),
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassSetExpressionType {
    Subtraction,
    Intersection,
}

#[derive(Debug)]
struct GroupNameReference {
    pos: usize,
    end: usize,
    name: String,
}

#[derive(Debug)]
struct DecimalEscape {
    pos: usize,
    end: usize,
    value: f64,
}

/// Grammar checker for one regular expression body.
///
/// Runs inside a scan range covering exactly the body, so `EOF` marks the
/// closing slash.
struct RegexValidator<'s> {
    scanner: &'s mut Scanner,
    annex_b: bool,
    /// The body contains `(?<name>`, so `\k` must be a named reference.
    named_capture_groups: bool,
    unicode_sets_mode: bool,
    any_unicode_mode: bool,
    /// Stricter checking outside Annex B.
    any_unicode_mode_or_non_annex_b: bool,
    /// Whether the last class set operand or expression may match a string.
    may_contain_strings: bool,
    number_of_capturing_groups: u32,
    group_specifiers: Vec<String>,
    group_name_references: Vec<GroupNameReference>,
    decimal_escapes: Vec<DecimalEscape>,
    /// Names defined by enclosing alternatives. Sibling alternatives of one
    /// disjunction may reuse a name.
    named_capture_groups_scope_stack: Vec<FxHashSet<String>>,
    top_named_capture_groups_scope: FxHashSet<String>,
}

impl<'s> RegexValidator<'s> {
    fn new(scanner: &'s mut Scanner, flags: RegularExpressionFlags, annex_b: bool, named_capture_groups: bool) -> Self {
        let any_unicode_mode = flags.intersects(RegularExpressionFlags::ANY_UNICODE_MODE);
        Self {
            scanner,
            annex_b,
            named_capture_groups,
            unicode_sets_mode: flags.contains(RegularExpressionFlags::UNICODE_SETS),
            any_unicode_mode,
            any_unicode_mode_or_non_annex_b: any_unicode_mode || !annex_b,
            may_contain_strings: false,
            number_of_capturing_groups: 0,
            group_specifiers: Vec::new(),
            group_name_references: Vec::new(),
            decimal_escapes: Vec::new(),
            named_capture_groups_scope_stack: Vec::new(),
            top_named_capture_groups_scope: FxHashSet::default(),
        }
    }

    fn validate(mut self) {
        self.scan_disjunction(false);
        self.check_group_name_references();
        self.check_decimal_escapes();
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    #[inline]
    fn pos(&self) -> usize {
        self.scanner.pos
    }

    #[inline]
    fn current(&self) -> u32 {
        self.scanner.char_code_at(self.scanner.pos)
    }

    #[inline]
    fn peek(&self, offset: usize) -> u32 {
        self.scanner.char_code_at(self.scanner.pos + offset)
    }

    #[inline]
    fn advance(&mut self, count: usize) {
        self.scanner.pos += count;
    }

    fn error(&mut self, message: &tslex_diagnostics::DiagnosticMessage, start: usize, length: usize) {
        self.scanner.error(message, start, length);
    }

    fn error_with_arg(&mut self, message: &tslex_diagnostics::DiagnosticMessage, start: usize, length: usize, arg: &str) {
        self.scanner.error_with_arg(message, start, length, arg);
    }

    fn error_here(&mut self, message: &tslex_diagnostics::DiagnosticMessage) {
        self.scanner.error_here(message);
    }

    fn unexpected_character(&mut self, start: usize, ch: u32) {
        self.error_with_arg(
            &messages::UNEXPECTED_0_DID_YOU_MEAN_TO_ESCAPE_IT_WITH_BACKSLASH,
            start,
            1,
            &char_string(ch),
        );
    }

    fn mixed_operators(&mut self, start: usize, length: usize) {
        self.error(
            &messages::OPERATORS_MUST_NOT_BE_MIXED_WITHIN_A_CHARACTER_CLASS_WRAP_IT_IN_A_NESTED_CLASS_INSTEAD,
            start,
            length,
        );
    }

    fn negated_class_strings(&mut self, start: usize, length: usize) {
        self.error(
            &messages::ANYTHING_THAT_WOULD_POSSIBLY_MATCH_MORE_THAN_A_SINGLE_CHARACTER_IS_INVALID_INSIDE_A_NEGATED_CHARACTER_CLASS,
            start,
            length,
        );
    }

    fn scan_expected_char(&mut self, ch: u32) {
        if self.current() == ch {
            self.advance(1);
        } else {
            self.error_with_arg(&messages::_0_EXPECTED, self.pos(), 0, &char_string(ch));
        }
    }

    // ========================================================================
    // Disjunctions and alternatives
    // ========================================================================

    fn scan_disjunction(&mut self, is_in_group: bool) {
        loop {
            let outer = std::mem::take(&mut self.top_named_capture_groups_scope);
            self.named_capture_groups_scope_stack.push(outer);
            self.scan_alternative(is_in_group);
            self.top_named_capture_groups_scope = self.named_capture_groups_scope_stack.pop().unwrap_or_default();
            if self.current() != BAR {
                return;
            }
            self.advance(1);
        }
    }

    fn scan_alternative(&mut self, is_in_group: bool) {
        let mut is_previous_term_quantifiable = false;
        loop {
            let start = self.pos();
            let ch = self.current();
            match ch {
                EOF => return,
                CARET | DOLLAR => {
                    self.advance(1);
                    is_previous_term_quantifiable = false;
                }
                BACKSLASH => {
                    self.advance(1);
                    if matches!(self.current(), LOWER_B | UPPER_B) {
                        self.advance(1);
                        is_previous_term_quantifiable = false;
                    } else {
                        self.scan_atom_escape();
                        is_previous_term_quantifiable = true;
                    }
                }
                OPEN_PAREN => {
                    self.advance(1);
                    is_previous_term_quantifiable = self.scan_group_prefix();
                    self.scan_disjunction(true);
                    self.scan_expected_char(CLOSE_PAREN);
                }
                OPEN_BRACE => {
                    if self.scan_braced_quantifier(start) {
                        is_previous_term_quantifiable =
                            self.scan_quantifier_suffix(start, is_previous_term_quantifiable);
                    } else {
                        is_previous_term_quantifiable = true;
                    }
                }
                ASTERISK | PLUS | QUESTION => {
                    is_previous_term_quantifiable = self.scan_quantifier_suffix(start, is_previous_term_quantifiable);
                }
                DOT => {
                    self.advance(1);
                    is_previous_term_quantifiable = true;
                }
                OPEN_BRACKET => {
                    self.advance(1);
                    if self.unicode_sets_mode {
                        self.scan_class_set_expression();
                    } else {
                        self.scan_class_ranges();
                    }
                    self.scan_expected_char(CLOSE_BRACKET);
                    is_previous_term_quantifiable = true;
                }
                CLOSE_PAREN if is_in_group => return,
                CLOSE_PAREN | CLOSE_BRACKET | CLOSE_BRACE => {
                    if self.any_unicode_mode_or_non_annex_b || ch == CLOSE_PAREN {
                        self.unexpected_character(self.pos(), ch);
                    }
                    self.advance(1);
                    is_previous_term_quantifiable = true;
                }
                SLASH | BAR => return,
                _ => {
                    self.scan_source_character();
                    is_previous_term_quantifiable = true;
                }
            }
        }
    }

    /// After `(`: the group kind. Returns whether the group is quantifiable.
    fn scan_group_prefix(&mut self) -> bool {
        if self.current() != QUESTION {
            self.number_of_capturing_groups += 1;
            return true;
        }
        self.advance(1);
        match self.current() {
            EQUALS | EXCLAMATION => {
                self.advance(1);
                // Annex B lookaheads are quantifiable.
                !self.any_unicode_mode_or_non_annex_b
            }
            LESS_THAN => {
                let group_name_start = self.pos();
                self.advance(1);
                match self.current() {
                    EQUALS | EXCLAMATION => {
                        self.advance(1);
                        false
                    }
                    _ => {
                        self.scan_group_name(false);
                        self.scan_expected_char(GREATER_THAN);
                        if self.scanner.language_version < ScriptTarget::ES2018 {
                            self.error(
                                &messages::NAMED_CAPTURING_GROUPS_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ES2018_OR_LATER,
                                group_name_start,
                                self.pos() - group_name_start,
                            );
                        }
                        self.number_of_capturing_groups += 1;
                        true
                    }
                }
            }
            _ => {
                let start = self.pos();
                let set_flags = self.scan_pattern_modifiers(RegularExpressionFlags::NONE);
                if self.current() == MINUS {
                    self.advance(1);
                    self.scan_pattern_modifiers(set_flags);
                    if self.pos() == start + 1 {
                        self.error(
                            &messages::SUBPATTERN_FLAGS_MUST_BE_PRESENT_WHEN_THERE_IS_A_MINUS_SIGN,
                            start,
                            self.pos() - start,
                        );
                    }
                }
                self.scan_expected_char(COLON);
                true
            }
        }
    }

    /// `{m}`, `{m,}` or `{m,n}`. Returns `true` when the brace is a
    /// quantifier whose suffix should be scanned next, with the cursor on
    /// the closing brace.
    fn scan_braced_quantifier(&mut self, start: usize) -> bool {
        self.advance(1);
        let digits_start = self.pos();
        let min = self.scan_decimal_digits();
        if !self.any_unicode_mode_or_non_annex_b && min.is_empty() {
            return false;
        }
        if self.current() == COMMA {
            self.advance(1);
            let max = self.scan_decimal_digits();
            if min.is_empty() {
                if !max.is_empty() || self.current() == CLOSE_BRACE {
                    self.error(&messages::INCOMPLETE_QUANTIFIER_DIGIT_EXPECTED, digits_start, 0);
                } else {
                    self.unexpected_character(start, OPEN_BRACE);
                    return false;
                }
            } else if !max.is_empty()
                && parse_digits(&min) > parse_digits(&max)
                && (self.any_unicode_mode_or_non_annex_b || self.current() == CLOSE_BRACE)
            {
                self.error(
                    &messages::NUMBERS_OUT_OF_ORDER_IN_QUANTIFIER,
                    digits_start,
                    self.pos() - digits_start,
                );
            }
        } else if min.is_empty() {
            if self.any_unicode_mode_or_non_annex_b {
                self.unexpected_character(start, OPEN_BRACE);
            }
            return false;
        }
        if self.current() != CLOSE_BRACE {
            if self.any_unicode_mode_or_non_annex_b {
                self.error_with_arg(&messages::_0_EXPECTED, self.pos(), 0, "}");
                self.scanner.pos -= 1;
            } else {
                return false;
            }
        }
        true
    }

    /// The last character of a quantifier and an optional lazy `?`.
    fn scan_quantifier_suffix(&mut self, start: usize, is_previous_term_quantifiable: bool) -> bool {
        self.advance(1);
        if self.current() == QUESTION {
            self.advance(1);
        }
        if !is_previous_term_quantifiable {
            self.error(&messages::THERE_IS_NOTHING_AVAILABLE_FOR_REPETITION, start, self.pos() - start);
        }
        false
    }

    fn scan_pattern_modifiers(&mut self, mut current_flags: RegularExpressionFlags) -> RegularExpressionFlags {
        loop {
            let ch = self.scanner.code_point_at(self.pos());
            if ch == EOF || !is_identifier_part(ch, self.scanner.language_version) {
                break;
            }
            let size = char_size(ch);
            match RegularExpressionFlags::from_char(ch) {
                None => self.error(&messages::UNKNOWN_REGULAR_EXPRESSION_FLAG, self.pos(), size),
                Some(flag) if current_flags.contains(flag) => {
                    self.error(&messages::DUPLICATE_REGULAR_EXPRESSION_FLAG, self.pos(), size)
                }
                Some(flag) if !RegularExpressionFlags::MODIFIERS.contains(flag) => self.error(
                    &messages::THIS_REGULAR_EXPRESSION_FLAG_CANNOT_BE_TOGGLED_WITHIN_A_SUBPATTERN,
                    self.pos(),
                    size,
                ),
                Some(flag) => {
                    current_flags |= flag;
                    self.scanner.check_regular_expression_flag_availability(flag, size);
                }
            }
            self.advance(size);
        }
        current_flags
    }

    // ========================================================================
    // Escapes
    // ========================================================================

    /// After a `\` outside a class.
    fn scan_atom_escape(&mut self) {
        match self.current() {
            LOWER_K => {
                self.advance(1);
                if self.current() == LESS_THAN {
                    self.advance(1);
                    self.scan_group_name(true);
                    self.scan_expected_char(GREATER_THAN);
                } else if self.any_unicode_mode_or_non_annex_b || self.named_capture_groups {
                    self.error(
                        &messages::K_MUST_BE_FOLLOWED_BY_A_CAPTURING_GROUP_NAME_ENCLOSED_IN_ANGLE_BRACKETS,
                        self.pos() - 2,
                        2,
                    );
                }
            }
            LOWER_Q if self.unicode_sets_mode => {
                self.advance(1);
                self.error(&messages::Q_IS_ONLY_AVAILABLE_INSIDE_CHARACTER_CLASS, self.pos() - 2, 2);
            }
            _ => {
                if !self.scan_character_class_escape() && !self.scan_decimal_escape() {
                    self.scan_character_escape(true);
                }
            }
        }
    }

    /// `\1`..`\9` followed by more digits; checked once all groups are known.
    fn scan_decimal_escape(&mut self) -> bool {
        let ch = self.current();
        if !(_1..=_9).contains(&ch) {
            return false;
        }
        let start = self.pos();
        let digits = self.scan_decimal_digits();
        self.decimal_escapes.push(DecimalEscape {
            pos: start,
            end: self.pos(),
            value: parse_digits(&digits),
        });
        true
    }

    /// After a `\`: a character escape, returning the characters it denotes.
    fn scan_character_escape(&mut self, atom_escape: bool) -> Vec<u16> {
        let ch = self.current();
        match ch {
            EOF => {
                self.error(&messages::UNDETERMINED_CHARACTER_ESCAPE, self.pos() - 1, 1);
                vec![BACKSLASH as u16]
            }
            LOWER_C => {
                self.advance(1);
                let ch = self.current();
                if is_ascii_letter(ch) {
                    self.advance(1);
                    return vec![(ch & 0x1f) as u16];
                }
                if self.any_unicode_mode_or_non_annex_b {
                    self.error(&messages::C_MUST_BE_FOLLOWED_BY_AN_ASCII_LETTER, self.pos() - 2, 2);
                } else if atom_escape {
                    // Annex B reads `\c` without a letter as a literal backslash.
                    self.scanner.pos -= 1;
                    return vec![BACKSLASH as u16];
                }
                if ch == EOF {
                    return Vec::new();
                }
                vec![ch as u16]
            }
            CARET | DOLLAR | SLASH | BACKSLASH | DOT | ASTERISK | PLUS | QUESTION | OPEN_PAREN
            | CLOSE_PAREN | OPEN_BRACKET | CLOSE_BRACKET | OPEN_BRACE | CLOSE_BRACE | BAR => {
                self.advance(1);
                vec![ch as u16]
            }
            _ => {
                self.scanner.pos -= 1;
                let mut flags = EscapeFlags::REGULAR_EXPRESSION;
                if self.annex_b {
                    flags |= EscapeFlags::ANNEX_B;
                }
                if self.any_unicode_mode {
                    flags |= EscapeFlags::ANY_UNICODE_MODE;
                }
                if atom_escape {
                    flags |= EscapeFlags::ATOM_ESCAPE;
                }
                self.scanner.scan_escape_sequence(flags)
            }
        }
    }

    /// `\d`, `\s`, `\w`, their negations, and `\p{...}` / `\P{...}`.
    fn scan_character_class_escape(&mut self) -> bool {
        let start = self.pos() - 1;
        let ch = self.current();
        match ch {
            LOWER_D | UPPER_D | LOWER_S | UPPER_S | LOWER_W | UPPER_W => {
                self.advance(1);
                true
            }
            LOWER_P | UPPER_P => {
                let is_character_complement = ch == UPPER_P;
                self.advance(1);
                if self.current() == OPEN_BRACE {
                    self.advance(1);
                    self.scan_unicode_property_value_expression(is_character_complement);
                    self.scan_expected_char(CLOSE_BRACE);
                    if !self.any_unicode_mode {
                        self.error(
                            &messages::UNICODE_PROPERTY_VALUE_EXPRESSIONS_ARE_ONLY_AVAILABLE_WHEN_THE_UNICODE_U_FLAG_OR_THE_UNICODE_SETS_V_FLAG_IS_SET,
                            start,
                            self.pos() - start,
                        );
                    }
                } else if self.any_unicode_mode_or_non_annex_b {
                    self.error_with_arg(
                        &messages::_0_MUST_BE_FOLLOWED_BY_A_UNICODE_PROPERTY_VALUE_EXPRESSION_ENCLOSED_IN_BRACES,
                        self.pos() - 2,
                        2,
                        &char_string(ch),
                    );
                } else {
                    self.scanner.pos -= 1;
                    return false;
                }
                true
            }
            _ => false,
        }
    }

    /// The inside of `\p{...}`: `Name=Value` or a lone name or value.
    fn scan_unicode_property_value_expression(&mut self, is_character_complement: bool) {
        let name_or_value_start = self.pos();
        let name_or_value = self.scan_word_characters();
        let name_or_value_length = self.pos() - name_or_value_start;

        if self.current() == EQUALS {
            let property_name = canonical_non_binary_property(&name_or_value);
            if name_or_value.is_empty() {
                self.error_here(&messages::EXPECTED_A_UNICODE_PROPERTY_NAME);
            } else if property_name.is_none() {
                self.error(&messages::UNKNOWN_UNICODE_PROPERTY_NAME, name_or_value_start, name_or_value_length);
                if let Some(suggestion) = get_spelling_suggestion(&name_or_value, non_binary_property_names()) {
                    self.error_with_arg(&messages::DID_YOU_MEAN_0, name_or_value_start, name_or_value_length, suggestion);
                }
            }
            self.advance(1);
            let value_start = self.pos();
            let value = self.scan_word_characters();
            let value_length = self.pos() - value_start;
            if value.is_empty() {
                self.error_here(&messages::EXPECTED_A_UNICODE_PROPERTY_VALUE);
            } else if let Some(property_name) = property_name {
                if !is_valid_property_value(property_name, &value) {
                    self.error(&messages::UNKNOWN_UNICODE_PROPERTY_VALUE, value_start, value_length);
                    let candidates = values_of_property(property_name).iter().copied();
                    if let Some(suggestion) = get_spelling_suggestion(&value, candidates) {
                        self.error_with_arg(&messages::DID_YOU_MEAN_0, value_start, value_length, suggestion);
                    }
                }
            }
        } else if name_or_value.is_empty() {
            self.error_here(&messages::EXPECTED_A_UNICODE_PROPERTY_NAME_OR_VALUE);
        } else if is_binary_property_of_strings(&name_or_value) {
            if !self.unicode_sets_mode {
                self.error(
                    &messages::ANY_UNICODE_PROPERTY_THAT_WOULD_POSSIBLY_MATCH_MORE_THAN_A_SINGLE_CHARACTER_IS_ONLY_AVAILABLE_WHEN_THE_UNICODE_SETS_V_FLAG_IS_SET,
                    name_or_value_start,
                    name_or_value_length,
                );
            } else if is_character_complement {
                self.negated_class_strings(name_or_value_start, name_or_value_length);
            } else {
                self.may_contain_strings = true;
            }
        } else if !is_general_category_value(&name_or_value) && !is_binary_property(&name_or_value) {
            self.error(
                &messages::UNKNOWN_UNICODE_PROPERTY_NAME_OR_VALUE,
                name_or_value_start,
                name_or_value_length,
            );
            if let Some(suggestion) = get_spelling_suggestion(&name_or_value, lone_property_candidates()) {
                self.error_with_arg(&messages::DID_YOU_MEAN_0, name_or_value_start, name_or_value_length, suggestion);
            }
        }
    }

    /// After `<`: a group name for a definition or a `\k` reference.
    fn scan_group_name(&mut self, is_reference: bool) {
        let start = self.pos();
        self.scanner.token_start = start;
        let ch = self.scanner.code_point_at(start);
        let version = self.scanner.language_version;
        self.scanner.scan_identifier(ch, version);
        if self.pos() == start {
            self.error_here(&messages::EXPECTED_A_CAPTURING_GROUP_NAME);
            return;
        }
        let name = self.scanner.token_value.clone();
        if is_reference {
            self.group_name_references.push(GroupNameReference { pos: start, end: self.pos(), name });
        } else if self.top_named_capture_groups_scope.contains(&name)
            || self.named_capture_groups_scope_stack.iter().any(|scope| scope.contains(&name))
        {
            self.error(
                &messages::NAMED_CAPTURING_GROUPS_WITH_THE_SAME_NAME_MUST_BE_MUTUALLY_EXCLUSIVE_TO_EACH_OTHER,
                start,
                self.pos() - start,
            );
        } else {
            self.top_named_capture_groups_scope.insert(name.clone());
            self.group_specifiers.push(name);
        }
    }

    // ========================================================================
    // Character classes without the `v` flag
    // ========================================================================

    fn scan_class_ranges(&mut self) {
        if self.current() == CARET {
            self.advance(1);
        }
        loop {
            if is_class_content_exit(self.current()) {
                return;
            }
            let min_start = self.pos();
            let min_character = self.scan_class_atom();
            if self.current() != MINUS {
                continue;
            }
            self.advance(1);
            if is_class_content_exit(self.current()) {
                return;
            }
            if min_character.is_empty() && self.any_unicode_mode_or_non_annex_b {
                self.error(
                    &messages::A_CHARACTER_CLASS_RANGE_MUST_NOT_BE_BOUNDED_BY_ANOTHER_CHARACTER_CLASS,
                    min_start,
                    self.pos() - 1 - min_start,
                );
            }
            let max_start = self.pos();
            let max_character = self.scan_class_atom();
            if max_character.is_empty() && self.any_unicode_mode_or_non_annex_b {
                self.error(
                    &messages::A_CHARACTER_CLASS_RANGE_MUST_NOT_BE_BOUNDED_BY_ANOTHER_CHARACTER_CLASS,
                    max_start,
                    self.pos() - max_start,
                );
                continue;
            }
            if is_range_out_of_order(&min_character, &max_character) {
                self.error(&messages::RANGE_OUT_OF_ORDER_IN_CHARACTER_CLASS, min_start, self.pos() - min_start);
            }
        }
    }

    /// One class member; empty for a class escape such as `\d`.
    fn scan_class_atom(&mut self) -> Vec<u16> {
        if self.current() != BACKSLASH {
            return self.scan_source_character();
        }
        self.advance(1);
        let ch = self.current();
        match ch {
            LOWER_B => {
                self.advance(1);
                vec![BACKSPACE as u16]
            }
            MINUS => {
                self.advance(1);
                vec![ch as u16]
            }
            _ => {
                if self.scan_character_class_escape() {
                    Vec::new()
                } else {
                    self.scan_character_escape(false)
                }
            }
        }
    }

    // ========================================================================
    // Character classes with the `v` flag
    // ========================================================================

    fn scan_class_set_expression(&mut self) {
        let mut is_character_complement = false;
        if self.current() == CARET {
            self.advance(1);
            is_character_complement = true;
        }
        let mut expression_may_contain_strings = false;
        if is_class_content_exit(self.current()) {
            return;
        }

        let mut start = self.pos();
        let mut operand = Vec::new();
        if self.at_double_operator() {
            self.error_here(&messages::EXPECTED_A_CLASS_SET_OPERAND);
            self.may_contain_strings = false;
        } else {
            operand = self.scan_class_set_operand();
        }

        match self.current() {
            MINUS if self.peek(1) == MINUS => {
                if is_character_complement && self.may_contain_strings {
                    self.negated_class_strings(start, self.pos() - start);
                }
                expression_may_contain_strings = self.may_contain_strings;
                self.scan_class_set_sub_expression(ClassSetExpressionType::Subtraction);
                self.may_contain_strings = !is_character_complement && expression_may_contain_strings;
                return;
            }
            MINUS => {}
            AMPERSAND => {
                if self.peek(1) == AMPERSAND {
                    self.scan_class_set_sub_expression(ClassSetExpressionType::Intersection);
                    if is_character_complement && self.may_contain_strings {
                        self.negated_class_strings(start, self.pos() - start);
                    }
                    expression_may_contain_strings = self.may_contain_strings;
                    self.may_contain_strings = !is_character_complement && expression_may_contain_strings;
                    return;
                }
                self.unexpected_character(self.pos(), AMPERSAND);
            }
            _ => {
                if is_character_complement && self.may_contain_strings {
                    self.negated_class_strings(start, self.pos() - start);
                }
                expression_may_contain_strings = self.may_contain_strings;
            }
        }

        loop {
            let ch = self.current();
            if ch == EOF {
                break;
            }
            match ch {
                MINUS => {
                    self.advance(1);
                    let next = self.current();
                    if is_class_content_exit(next) {
                        self.may_contain_strings = !is_character_complement && expression_may_contain_strings;
                        return;
                    }
                    if next == MINUS {
                        self.advance(1);
                        self.mixed_operators(self.pos() - 2, 2);
                        start = self.pos() - 2;
                        operand = self.scanner.text[start..self.pos()].to_vec();
                        continue;
                    }
                    if operand.is_empty() {
                        self.error(
                            &messages::A_CHARACTER_CLASS_RANGE_MUST_NOT_BE_BOUNDED_BY_ANOTHER_CHARACTER_CLASS,
                            start,
                            self.pos() - 1 - start,
                        );
                    }
                    let second_start = self.pos();
                    let second_operand = self.scan_class_set_operand();
                    if is_character_complement && self.may_contain_strings {
                        self.negated_class_strings(second_start, self.pos() - second_start);
                    }
                    expression_may_contain_strings |= self.may_contain_strings;
                    if second_operand.is_empty() {
                        self.error(
                            &messages::A_CHARACTER_CLASS_RANGE_MUST_NOT_BE_BOUNDED_BY_ANOTHER_CHARACTER_CLASS,
                            second_start,
                            self.pos() - second_start,
                        );
                    } else if is_range_out_of_order(&operand, &second_operand) {
                        self.error(&messages::RANGE_OUT_OF_ORDER_IN_CHARACTER_CLASS, start, self.pos() - start);
                    }
                }
                AMPERSAND => {
                    start = self.pos();
                    self.advance(1);
                    if self.current() == AMPERSAND {
                        self.advance(1);
                        self.mixed_operators(self.pos() - 2, 2);
                        if self.current() == AMPERSAND {
                            self.unexpected_character(self.pos(), AMPERSAND);
                            self.advance(1);
                        }
                    } else {
                        self.unexpected_character(self.pos() - 1, AMPERSAND);
                    }
                    operand = self.scanner.text[start..self.pos()].to_vec();
                    continue;
                }
                _ => {}
            }
            if is_class_content_exit(self.current()) {
                break;
            }
            start = self.pos();
            if self.at_double_operator() {
                self.mixed_operators(self.pos(), 2);
                self.advance(2);
                operand = self.scanner.text[start..self.pos()].to_vec();
            } else {
                operand = self.scan_class_set_operand();
            }
        }
        self.may_contain_strings = !is_character_complement && expression_may_contain_strings;
    }

    fn at_double_operator(&self) -> bool {
        let ch = self.current();
        (ch == MINUS || ch == AMPERSAND) && self.peek(1) == ch
    }

    /// The rest of an `A--B--C` or `A&&B&&C` expression.
    fn scan_class_set_sub_expression(&mut self, expression_type: ClassSetExpressionType) {
        let mut expression_may_contain_strings = self.may_contain_strings;
        loop {
            let ch = self.current();
            if is_class_content_exit(ch) {
                break;
            }
            match ch {
                MINUS => {
                    self.advance(1);
                    if self.current() == MINUS {
                        self.advance(1);
                        if expression_type != ClassSetExpressionType::Subtraction {
                            self.mixed_operators(self.pos() - 2, 2);
                        }
                    } else {
                        self.mixed_operators(self.pos() - 1, 1);
                    }
                }
                AMPERSAND => {
                    self.advance(1);
                    if self.current() == AMPERSAND {
                        self.advance(1);
                        if expression_type != ClassSetExpressionType::Intersection {
                            self.mixed_operators(self.pos() - 2, 2);
                        }
                        if self.current() == AMPERSAND {
                            self.unexpected_character(self.pos(), AMPERSAND);
                            self.advance(1);
                        }
                    } else {
                        self.unexpected_character(self.pos() - 1, AMPERSAND);
                    }
                }
                _ => {
                    let expected = match expression_type {
                        ClassSetExpressionType::Subtraction => "--",
                        ClassSetExpressionType::Intersection => "&&",
                    };
                    self.error_with_arg(&messages::_0_EXPECTED, self.pos(), 0, expected);
                }
            }
            if is_class_content_exit(self.current()) {
                self.error_here(&messages::EXPECTED_A_CLASS_SET_OPERAND);
                break;
            }
            self.scan_class_set_operand();
            expression_may_contain_strings &= self.may_contain_strings;
        }
        self.may_contain_strings = expression_may_contain_strings;
    }

    /// A nested class, class escape, `\q{...}` or single character. Returns
    /// the character for single characters and empty otherwise.
    fn scan_class_set_operand(&mut self) -> Vec<u16> {
        self.may_contain_strings = false;
        match self.current() {
            EOF => Vec::new(),
            OPEN_BRACKET => {
                self.advance(1);
                self.scan_class_set_expression();
                self.scan_expected_char(CLOSE_BRACKET);
                Vec::new()
            }
            BACKSLASH => {
                self.advance(1);
                if self.scan_character_class_escape() {
                    return Vec::new();
                }
                if self.current() == LOWER_Q {
                    self.advance(1);
                    if self.current() == OPEN_BRACE {
                        self.advance(1);
                        self.scan_class_string_disjunction_contents();
                        self.scan_expected_char(CLOSE_BRACE);
                        return Vec::new();
                    }
                    self.error(
                        &messages::Q_MUST_BE_FOLLOWED_BY_STRING_ALTERNATIVES_ENCLOSED_IN_BRACES,
                        self.pos() - 2,
                        2,
                    );
                    return vec![LOWER_Q as u16];
                }
                self.scanner.pos -= 1;
                self.scan_class_set_character()
            }
            _ => self.scan_class_set_character(),
        }
    }

    /// After `\q{`: `|`-separated strings. Any string that is not exactly
    /// one character may match more than one.
    fn scan_class_string_disjunction_contents(&mut self) {
        let mut character_count = 0;
        loop {
            match self.current() {
                EOF => return,
                CLOSE_BRACE => {
                    if character_count != 1 {
                        self.may_contain_strings = true;
                    }
                    return;
                }
                BAR => {
                    if character_count != 1 {
                        self.may_contain_strings = true;
                    }
                    self.advance(1);
                    character_count = 0;
                }
                _ => {
                    self.scan_class_set_character();
                    character_count += 1;
                }
            }
        }
    }

    fn scan_class_set_character(&mut self) -> Vec<u16> {
        let ch = self.current();
        if ch == BACKSLASH {
            self.advance(1);
            let ch = self.current();
            return match ch {
                LOWER_B => {
                    self.advance(1);
                    vec![BACKSPACE as u16]
                }
                AMPERSAND | MINUS | EXCLAMATION | HASH | PERCENT | COMMA | COLON | SEMICOLON | LESS_THAN
                | EQUALS | GREATER_THAN | AT | BACKTICK | TILDE => {
                    self.advance(1);
                    vec![ch as u16]
                }
                _ => self.scan_character_escape(false),
            };
        }
        if ch == self.peek(1)
            && matches!(
                ch,
                AMPERSAND | EXCLAMATION | HASH | PERCENT | ASTERISK | PLUS | COMMA | DOT | COLON | SEMICOLON
                    | LESS_THAN | EQUALS | GREATER_THAN | QUESTION | AT | BACKTICK | TILDE
            )
        {
            self.error(
                &messages::A_CHARACTER_CLASS_MUST_NOT_CONTAIN_A_RESERVED_DOUBLE_PUNCTUATOR_DID_YOU_MEAN_TO_ESCAPE_IT_WITH_BACKSLASH,
                self.pos(),
                2,
            );
            self.advance(2);
            return self.scanner.text[self.pos() - 2..self.pos()].to_vec();
        }
        match ch {
            SLASH | OPEN_PAREN | CLOSE_PAREN | OPEN_BRACKET | CLOSE_BRACKET | OPEN_BRACE | CLOSE_BRACE | MINUS
            | BAR => {
                self.unexpected_character(self.pos(), ch);
                self.advance(1);
                vec![ch as u16]
            }
            _ => self.scan_source_character(),
        }
    }

    // ========================================================================
    // Characters
    // ========================================================================

    fn scan_word_characters(&mut self) -> String {
        let mut value = String::new();
        loop {
            let ch = self.current();
            if ch == EOF || !is_word_character(ch) {
                break;
            }
            value.push(ch as u8 as char);
            self.advance(1);
        }
        value
    }

    /// One code point in unicode mode, otherwise one code unit.
    fn scan_source_character(&mut self) -> Vec<u16> {
        let size = if self.any_unicode_mode {
            char_size(self.scanner.code_point_at(self.pos()))
        } else {
            1
        };
        let start = self.pos();
        let end = (start + size).min(self.scanner.end);
        self.scanner.pos = end;
        self.scanner.text[start..end].to_vec()
    }

    fn scan_decimal_digits(&mut self) -> String {
        let start = self.pos();
        while is_digit(self.current()) {
            self.advance(1);
        }
        self.scanner.substring(start, self.pos())
    }

    // ========================================================================
    // Checks once the whole pattern is known
    // ========================================================================

    fn check_group_name_references(&mut self) {
        for reference in std::mem::take(&mut self.group_name_references) {
            if self.group_specifiers.contains(&reference.name) {
                continue;
            }
            let length = reference.end - reference.pos;
            self.error_with_arg(
                &messages::THERE_IS_NO_CAPTURING_GROUP_NAMED_0_IN_THIS_REGULAR_EXPRESSION,
                reference.pos,
                length,
                &reference.name,
            );
            let suggestion = get_spelling_suggestion(&reference.name, self.group_specifiers.iter().map(String::as_str))
                .map(str::to_string);
            if let Some(suggestion) = suggestion {
                self.error_with_arg(&messages::DID_YOU_MEAN_0, reference.pos, length, &suggestion);
            }
        }
    }

    /// A backreference past the last group is reported even under Annex B,
    /// where it would be read as an octal or identity escape.
    fn check_decimal_escapes(&mut self) {
        let group_count = self.number_of_capturing_groups;
        for escape in std::mem::take(&mut self.decimal_escapes) {
            if escape.value <= group_count as f64 {
                continue;
            }
            let length = escape.end - escape.pos;
            if group_count > 0 {
                self.error_with_arg(
                    &messages::THIS_BACKREFERENCE_REFERS_TO_A_GROUP_THAT_DOES_NOT_EXIST_THERE_ARE_ONLY_0_CAPTURING_GROUPS_IN_THIS_REGULAR_EXPRESSION,
                    escape.pos,
                    length,
                    &group_count.to_string(),
                );
            } else {
                self.error(
                    &messages::THIS_BACKREFERENCE_REFERS_TO_A_GROUP_THAT_DOES_NOT_EXIST_THERE_ARE_NO_CAPTURING_GROUPS_IN_THIS_REGULAR_EXPRESSION,
                    escape.pos,
                    length,
                );
            }
        }
    }
}

#[inline]
fn is_class_content_exit(ch: u32) -> bool {
    ch == CLOSE_BRACKET || ch == EOF
}

/// Both bounds are single characters and the first is larger.
fn is_range_out_of_order(min: &[u16], max: &[u16]) -> bool {
    if min.is_empty() || max.is_empty() {
        return false;
    }
    let min_value = code_point_at(min, 0);
    let max_value = code_point_at(max, 0);
    min.len() == char_size(min_value) && max.len() == char_size(max_value) && min_value > max_value
}

fn parse_digits(digits: &str) -> f64 {
    digits.parse().unwrap_or(f64::INFINITY)
}

fn char_string(ch: u32) -> String {
    from_utf16(&crate::utf16::encode_code_point(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_from_char() {
        assert_eq!(RegularExpressionFlags::from_char(LOWER_G), Some(RegularExpressionFlags::GLOBAL));
        assert_eq!(RegularExpressionFlags::from_char(LOWER_V), Some(RegularExpressionFlags::UNICODE_SETS));
        assert_eq!(RegularExpressionFlags::from_char(LOWER_X), None);
    }

    #[test]
    fn test_flag_availability() {
        assert_eq!(RegularExpressionFlags::GLOBAL.first_available_target(), None);
        assert_eq!(RegularExpressionFlags::DOT_ALL.first_available_target(), Some(ScriptTarget::ES2018));
        assert_eq!(RegularExpressionFlags::HAS_INDICES.first_available_target(), Some(ScriptTarget::ES2022));
        assert!(RegularExpressionFlags::MODIFIERS.contains(RegularExpressionFlags::IGNORE_CASE));
        assert!(!RegularExpressionFlags::MODIFIERS.contains(RegularExpressionFlags::UNICODE));
    }

    #[test]
    fn test_range_order() {
        assert!(is_range_out_of_order(&[b'z' as u16], &[b'a' as u16]));
        assert!(!is_range_out_of_order(&[b'a' as u16], &[b'z' as u16]));
        assert!(!is_range_out_of_order(&[], &[b'a' as u16]));
        assert!(!is_range_out_of_order(&[b'z' as u16, b'z' as u16], &[b'a' as u16]));
    }
}
