//! tslex_diagnostics: Diagnostic messages and error collection.
//!
//! The scanner never fails on malformed input. It reports each problem as a
//! [`DiagnosticMessage`] plus a span, and callers decide what to keep. This
//! crate defines those messages and a collection type to gather them.

use tslex_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Suggestion => write!(f, "suggestion"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1002).
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template string. May contain a `{0}` placeholder.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source span, in UTF-16 code units.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic attached to a span of the scanned text.
    pub fn with_span(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }

    /// Attach a file name.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} TS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during scanning.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Codes of all collected diagnostics, in report order.
    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Lexical errors
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");
    pub const OCTAL_LITERALS_ARE_NOT_ALLOWED_USE_THE_SYNTAX_0: DiagnosticMessage = diag!(1121, Error, "Octal literals are not allowed. Use the syntax '{0}'.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, Error, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, Error, "Hexadecimal digit expected.");
    pub const UNEXPECTED_END_OF_TEXT: DiagnosticMessage = diag!(1126, Error, "Unexpected end of text.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1160, Error, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage = diag!(1161, Error, "Unterminated regular expression literal.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1177, Error, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1178, Error, "Octal digit expected.");
    pub const MERGE_CONFLICT_MARKER_ENCOUNTERED: DiagnosticMessage = diag!(1185, Error, "Merge conflict marker encountered.");
    pub const AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF_INCLUSIVE: DiagnosticMessage = diag!(1198, Error, "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive.");
    pub const UNTERMINATED_UNICODE_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1199, Error, "Unterminated Unicode escape sequence.");
    pub const AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL: DiagnosticMessage = diag!(1351, Error, "An identifier or keyword cannot immediately follow a numeric literal.");
    pub const A_BIGINT_LITERAL_CANNOT_USE_EXPONENTIAL_NOTATION: DiagnosticMessage = diag!(1352, Error, "A bigint literal cannot use exponential notation.");
    pub const A_BIGINT_LITERAL_MUST_BE_AN_INTEGER: DiagnosticMessage = diag!(1353, Error, "A bigint literal must be an integer.");
    pub const DID_YOU_MEAN_0: DiagnosticMessage = diag!(1369, Message, "Did you mean '{0}'?");
    pub const UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_RBRACE: DiagnosticMessage = diag!(1381, Error, "Unexpected token. Did you mean `{'}'}` or `&rbrace;`?");
    pub const UNEXPECTED_TOKEN_DID_YOU_MEAN_OR_GT: DiagnosticMessage = diag!(1382, Error, "Unexpected token. Did you mean `{'>'}` or `&gt;`?");
    pub const OCTAL_ESCAPE_SEQUENCES_ARE_NOT_ALLOWED_USE_THE_SYNTAX_0: DiagnosticMessage = diag!(1487, Error, "Octal escape sequences are not allowed. Use the syntax '{0}'.");
    pub const ESCAPE_SEQUENCE_0_IS_NOT_ALLOWED: DiagnosticMessage = diag!(1488, Error, "Escape sequence '{0}' is not allowed.");
    pub const DECIMALS_WITH_LEADING_ZEROS_ARE_NOT_ALLOWED: DiagnosticMessage = diag!(1489, Error, "Decimals with leading zeros are not allowed.");
    pub const FILE_APPEARS_TO_BE_BINARY: DiagnosticMessage = diag!(1490, Error, "File appears to be binary.");
    pub const NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE: DiagnosticMessage = diag!(6188, Error, "Numeric separators are not allowed here.");
    pub const MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED: DiagnosticMessage = diag!(6189, Error, "Multiple consecutive numeric separators are not permitted.");
    pub const HASH_BANG_CAN_ONLY_BE_USED_AT_THE_START_OF_A_FILE: DiagnosticMessage = diag!(18026, Error, "'#!' can only be used at the start of a file.");

    // ========================================================================
    // Regular expression errors
    // ========================================================================
    pub const UNKNOWN_REGULAR_EXPRESSION_FLAG: DiagnosticMessage = diag!(1499, Error, "Unknown regular expression flag.");
    pub const DUPLICATE_REGULAR_EXPRESSION_FLAG: DiagnosticMessage = diag!(1500, Error, "Duplicate regular expression flag.");
    pub const THIS_REGULAR_EXPRESSION_FLAG_IS_ONLY_AVAILABLE_WHEN_TARGETING_0_OR_LATER: DiagnosticMessage = diag!(1501, Error, "This regular expression flag is only available when targeting '{0}' or later.");
    pub const THE_UNICODE_U_FLAG_AND_THE_UNICODE_SETS_V_FLAG_CANNOT_BE_SET_SIMULTANEOUSLY: DiagnosticMessage = diag!(1502, Error, "The Unicode (u) flag and the Unicode Sets (v) flag cannot be set simultaneously.");
    pub const NAMED_CAPTURING_GROUPS_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ES2018_OR_LATER: DiagnosticMessage = diag!(1503, Error, "Named capturing groups are only available when targeting 'ES2018' or later.");
    pub const SUBPATTERN_FLAGS_MUST_BE_PRESENT_WHEN_THERE_IS_A_MINUS_SIGN: DiagnosticMessage = diag!(1504, Error, "Subpattern flags must be present when there is a minus sign.");
    pub const INCOMPLETE_QUANTIFIER_DIGIT_EXPECTED: DiagnosticMessage = diag!(1505, Error, "Incomplete quantifier. Digit expected.");
    pub const NUMBERS_OUT_OF_ORDER_IN_QUANTIFIER: DiagnosticMessage = diag!(1506, Error, "Numbers out of order in quantifier.");
    pub const THERE_IS_NOTHING_AVAILABLE_FOR_REPETITION: DiagnosticMessage = diag!(1507, Error, "There is nothing available for repetition.");
    pub const UNEXPECTED_0_DID_YOU_MEAN_TO_ESCAPE_IT_WITH_BACKSLASH: DiagnosticMessage = diag!(1508, Error, "Unexpected '{0}'. Did you mean to escape it with backslash?");
    pub const THIS_REGULAR_EXPRESSION_FLAG_CANNOT_BE_TOGGLED_WITHIN_A_SUBPATTERN: DiagnosticMessage = diag!(1509, Error, "This regular expression flag cannot be toggled within a subpattern.");
    pub const K_MUST_BE_FOLLOWED_BY_A_CAPTURING_GROUP_NAME_ENCLOSED_IN_ANGLE_BRACKETS: DiagnosticMessage = diag!(1510, Error, "'\\k' must be followed by a capturing group name enclosed in angle brackets.");
    pub const Q_IS_ONLY_AVAILABLE_INSIDE_CHARACTER_CLASS: DiagnosticMessage = diag!(1511, Error, "'\\q' is only available inside character class.");
    pub const C_MUST_BE_FOLLOWED_BY_AN_ASCII_LETTER: DiagnosticMessage = diag!(1512, Error, "'\\c' must be followed by an ASCII letter.");
    pub const UNDETERMINED_CHARACTER_ESCAPE: DiagnosticMessage = diag!(1513, Error, "Undetermined character escape.");
    pub const EXPECTED_A_CAPTURING_GROUP_NAME: DiagnosticMessage = diag!(1514, Error, "Expected a capturing group name.");
    pub const NAMED_CAPTURING_GROUPS_WITH_THE_SAME_NAME_MUST_BE_MUTUALLY_EXCLUSIVE_TO_EACH_OTHER: DiagnosticMessage = diag!(1515, Error, "Named capturing groups with the same name must be mutually exclusive to each other.");
    pub const A_CHARACTER_CLASS_RANGE_MUST_NOT_BE_BOUNDED_BY_ANOTHER_CHARACTER_CLASS: DiagnosticMessage = diag!(1516, Error, "A character class range must not be bounded by another character class.");
    pub const RANGE_OUT_OF_ORDER_IN_CHARACTER_CLASS: DiagnosticMessage = diag!(1517, Error, "Range out of order in character class.");
    pub const ANYTHING_THAT_WOULD_POSSIBLY_MATCH_MORE_THAN_A_SINGLE_CHARACTER_IS_INVALID_INSIDE_A_NEGATED_CHARACTER_CLASS: DiagnosticMessage = diag!(1518, Error, "Anything that would possibly match more than a single character is invalid inside a negated character class.");
    pub const OPERATORS_MUST_NOT_BE_MIXED_WITHIN_A_CHARACTER_CLASS_WRAP_IT_IN_A_NESTED_CLASS_INSTEAD: DiagnosticMessage = diag!(1519, Error, "Operators must not be mixed within a character class. Wrap it in a nested class instead.");
    pub const EXPECTED_A_CLASS_SET_OPERAND: DiagnosticMessage = diag!(1520, Error, "Expected a class set operand.");
    pub const Q_MUST_BE_FOLLOWED_BY_STRING_ALTERNATIVES_ENCLOSED_IN_BRACES: DiagnosticMessage = diag!(1521, Error, "'\\q' must be followed by string alternatives enclosed in braces.");
    pub const A_CHARACTER_CLASS_MUST_NOT_CONTAIN_A_RESERVED_DOUBLE_PUNCTUATOR_DID_YOU_MEAN_TO_ESCAPE_IT_WITH_BACKSLASH: DiagnosticMessage = diag!(1522, Error, "A character class must not contain a reserved double punctuator. Did you mean to escape it with backslash?");
    pub const EXPECTED_A_UNICODE_PROPERTY_NAME: DiagnosticMessage = diag!(1523, Error, "Expected a Unicode property name.");
    pub const UNKNOWN_UNICODE_PROPERTY_NAME: DiagnosticMessage = diag!(1524, Error, "Unknown Unicode property name.");
    pub const EXPECTED_A_UNICODE_PROPERTY_VALUE: DiagnosticMessage = diag!(1525, Error, "Expected a Unicode property value.");
    pub const UNKNOWN_UNICODE_PROPERTY_VALUE: DiagnosticMessage = diag!(1526, Error, "Unknown Unicode property value.");
    pub const EXPECTED_A_UNICODE_PROPERTY_NAME_OR_VALUE: DiagnosticMessage = diag!(1527, Error, "Expected a Unicode property name or value.");
    pub const ANY_UNICODE_PROPERTY_THAT_WOULD_POSSIBLY_MATCH_MORE_THAN_A_SINGLE_CHARACTER_IS_ONLY_AVAILABLE_WHEN_THE_UNICODE_SETS_V_FLAG_IS_SET: DiagnosticMessage = diag!(1528, Error, "Any Unicode property that would possibly match more than a single character is only available when the Unicode Sets (v) flag is set.");
    pub const UNKNOWN_UNICODE_PROPERTY_NAME_OR_VALUE: DiagnosticMessage = diag!(1529, Error, "Unknown Unicode property name or value.");
    pub const UNICODE_PROPERTY_VALUE_EXPRESSIONS_ARE_ONLY_AVAILABLE_WHEN_THE_UNICODE_U_FLAG_OR_THE_UNICODE_SETS_V_FLAG_IS_SET: DiagnosticMessage = diag!(1530, Error, "Unicode property value expressions are only available when the Unicode (u) flag or the Unicode Sets (v) flag is set.");
    pub const _0_MUST_BE_FOLLOWED_BY_A_UNICODE_PROPERTY_VALUE_EXPRESSION_ENCLOSED_IN_BRACES: DiagnosticMessage = diag!(1531, Error, "'\\{0}' must be followed by a Unicode property value expression enclosed in braces.");
    pub const THERE_IS_NO_CAPTURING_GROUP_NAMED_0_IN_THIS_REGULAR_EXPRESSION: DiagnosticMessage = diag!(1532, Error, "There is no capturing group named '{0}' in this regular expression.");
    pub const THIS_BACKREFERENCE_REFERS_TO_A_GROUP_THAT_DOES_NOT_EXIST_THERE_ARE_ONLY_0_CAPTURING_GROUPS_IN_THIS_REGULAR_EXPRESSION: DiagnosticMessage = diag!(1533, Error, "This backreference refers to a group that does not exist. There are only {0} capturing groups in this regular expression.");
    pub const THIS_BACKREFERENCE_REFERS_TO_A_GROUP_THAT_DOES_NOT_EXIST_THERE_ARE_NO_CAPTURING_GROUPS_IN_THIS_REGULAR_EXPRESSION: DiagnosticMessage = diag!(1534, Error, "This backreference refers to a group that does not exist. There are no capturing groups in this regular expression.");
    pub const THIS_CHARACTER_CANNOT_BE_ESCAPED_IN_A_REGULAR_EXPRESSION: DiagnosticMessage = diag!(1535, Error, "This character cannot be escaped in a regular expression.");
    pub const OCTAL_ESCAPE_SEQUENCES_AND_BACKREFERENCES_ARE_NOT_ALLOWED_IN_A_CHARACTER_CLASS_IF_THIS_WAS_INTENDED_AS_AN_ESCAPE_SEQUENCE_USE_THE_SYNTAX_0_INSTEAD: DiagnosticMessage = diag!(1536, Error, "Octal escape sequences and backreferences are not allowed in a character class. If this was intended as an escape sequence, use the syntax '{0}' instead.");
    pub const DECIMAL_ESCAPE_SEQUENCES_AND_BACKREFERENCES_ARE_NOT_ALLOWED_IN_A_CHARACTER_CLASS: DiagnosticMessage = diag!(1537, Error, "Decimal escape sequences and backreferences are not allowed in a character class.");
    pub const UNICODE_ESCAPE_SEQUENCES_ARE_ONLY_AVAILABLE_WHEN_THE_UNICODE_U_FLAG_OR_THE_UNICODE_SETS_V_FLAG_IS_SET: DiagnosticMessage = diag!(1538, Error, "Unicode escape sequences are only available when the Unicode (u) flag or the Unicode Sets (v) flag is set.");
}
