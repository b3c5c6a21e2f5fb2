//! Re-scanning the current token under a different reading.
//!
//! The parser calls these when context shows that the default maximal-munch
//! token was wrong, e.g. `>>` closing two type argument lists or `/` starting
//! a regular expression (see `regexp.rs`).

use tracing::trace;

use crate::char_codes::*;
use crate::scanner::Scanner;
use tslex_options::ScriptTarget;
use tslex_syntax::{SyntaxKind, TokenFlags};

impl Scanner {
    /// Replace the current token with `kind`, logging the change.
    fn replace_token(&mut self, kind: SyntaxKind) -> SyntaxKind {
        if kind != self.token {
            trace!(from = ?self.token, to = ?kind, pos = self.token_start, "re-scanned token");
        }
        self.token = kind;
        kind
    }

    /// Extend a `>` into `>>`, `>>>`, `>=`, `>>=` or `>>>=`.
    pub fn re_scan_greater_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::GreaterThanToken {
            return self.token;
        }
        let kind = match (self.char_code_at(self.pos), self.char_code_at(self.pos + 1)) {
            (GREATER_THAN, GREATER_THAN) => {
                if self.char_code_at(self.pos + 2) == EQUALS {
                    self.pos += 3;
                    SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
                } else {
                    self.pos += 2;
                    SyntaxKind::GreaterThanGreaterThanGreaterThanToken
                }
            }
            (GREATER_THAN, EQUALS) => {
                self.pos += 2;
                SyntaxKind::GreaterThanGreaterThanEqualsToken
            }
            (GREATER_THAN, _) => {
                self.pos += 1;
                SyntaxKind::GreaterThanGreaterThanToken
            }
            (EQUALS, _) => {
                self.pos += 1;
                SyntaxKind::GreaterThanEqualsToken
            }
            _ => return self.token,
        };
        self.replace_token(kind)
    }

    /// Split `*=` into `*`, leaving the cursor on the `=`.
    pub fn re_scan_asterisk_equals_token(&mut self) -> SyntaxKind {
        debug_assert_eq!(self.token, SyntaxKind::AsteriskEqualsToken, "current token must be `*=`");
        if self.token != SyntaxKind::AsteriskEqualsToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.replace_token(SyntaxKind::AsteriskToken)
    }

    /// Scan a template part again from its start. Invalid escapes are
    /// reported only for untagged templates.
    pub fn re_scan_template_token(&mut self, is_tagged_template: bool) -> SyntaxKind {
        self.pos = self.token_start;
        let kind = self.scan_template_and_set_token_value(!is_tagged_template);
        self.replace_token(kind)
    }

    pub fn re_scan_template_head_or_no_substitution_template(&mut self) -> SyntaxKind {
        self.pos = self.token_start;
        let kind = self.scan_template_and_set_token_value(true);
        self.replace_token(kind)
    }

    /// Scan JSX text again from the start of the current token.
    pub fn re_scan_jsx_token(&mut self, allow_multiline_jsx_text: bool) -> SyntaxKind {
        self.pos = self.full_start_pos;
        self.token_start = self.full_start_pos;
        let previous = self.token;
        let kind = self.scan_jsx_token(allow_multiline_jsx_text);
        if kind != previous {
            trace!(from = ?previous, to = ?kind, pos = self.token_start, "re-scanned token");
        }
        kind
    }

    pub fn re_scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        self.pos = self.full_start_pos;
        self.token_start = self.full_start_pos;
        self.scan_jsx_attribute_value()
    }

    /// Shrink `<<` to `<`.
    pub fn re_scan_less_than_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::LessThanLessThanToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.replace_token(SyntaxKind::LessThanToken)
    }

    /// Shrink a private name to its `#`.
    pub fn re_scan_hash_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::PrivateIdentifier {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.replace_token(SyntaxKind::HashToken)
    }

    /// Shrink `??` to `?`.
    pub fn re_scan_question_token(&mut self) -> SyntaxKind {
        debug_assert_eq!(self.token, SyntaxKind::QuestionQuestionToken, "current token must be `??`");
        if self.token != SyntaxKind::QuestionQuestionToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.replace_token(SyntaxKind::QuestionToken)
    }

    /// Retry an `Unknown` token as an identifier under the newest Unicode
    /// tables. Without an identifier, skips one character and stays `Unknown`.
    pub fn re_scan_invalid_identifier(&mut self) -> SyntaxKind {
        debug_assert_eq!(self.token, SyntaxKind::Unknown, "current token must be `Unknown`");
        if self.token != SyntaxKind::Unknown {
            return self.token;
        }
        self.pos = self.full_start_pos;
        self.token_start = self.full_start_pos;
        self.token_flags = TokenFlags::NONE;
        let ch = self.code_point_at(self.pos);
        if let Some(kind) = self.scan_identifier(ch, ScriptTarget::ESNext) {
            return self.replace_token(kind);
        }
        self.pos += char_size(ch);
        self.token
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;
    use tslex_options::{LanguageVariant, ScriptTarget};
    use tslex_syntax::SyntaxKind;

    fn new_scanner(source: &str) -> Scanner {
        let mut scanner = Scanner::new(ScriptTarget::LATEST, true, LanguageVariant::Standard);
        scanner.set_text(source);
        scanner
    }

    #[test]
    fn test_greater_forms() {
        for (source, expected) in [
            (">>", SyntaxKind::GreaterThanGreaterThanToken),
            (">>>", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
            (">=", SyntaxKind::GreaterThanEqualsToken),
            (">>=", SyntaxKind::GreaterThanGreaterThanEqualsToken),
            (">>>=", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
        ] {
            let mut scanner = new_scanner(source);
            assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
            assert_eq!(scanner.re_scan_greater_token(), expected, "{source}");
            assert_eq!(scanner.token_end(), source.len());
        }
    }

    #[test]
    fn test_re_scan_greater_is_idempotent() {
        let mut scanner = new_scanner(">>>");
        scanner.scan();
        assert_eq!(scanner.re_scan_greater_token(), SyntaxKind::GreaterThanGreaterThanGreaterThanToken);
        assert_eq!(scanner.re_scan_greater_token(), SyntaxKind::GreaterThanGreaterThanGreaterThanToken);
        assert_eq!(scanner.token_end(), 3);
    }

    #[test]
    fn test_shrinking_re_scans() {
        let mut scanner = new_scanner("<<");
        scanner.scan();
        assert_eq!(scanner.re_scan_less_than_token(), SyntaxKind::LessThanToken);
        assert_eq!(scanner.token_end(), 1);

        let mut scanner = new_scanner("??");
        scanner.scan();
        assert_eq!(scanner.re_scan_question_token(), SyntaxKind::QuestionToken);
        assert_eq!(scanner.scan(), SyntaxKind::QuestionToken);

        let mut scanner = new_scanner("#x");
        scanner.scan();
        assert_eq!(scanner.re_scan_hash_token(), SyntaxKind::HashToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_asterisk_equals_split() {
        let mut scanner = new_scanner("*=");
        scanner.scan();
        assert_eq!(scanner.re_scan_asterisk_equals_token(), SyntaxKind::AsteriskToken);
        assert_eq!(scanner.token_end(), 1);
        assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
    }
}
