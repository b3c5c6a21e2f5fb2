//! Owned token snapshots and whole-text tokenization.

use crate::diagnostic_sink::DiagnosticSink;
use crate::scanner::Scanner;
use tslex_diagnostics::DiagnosticCollection;
use tslex_options::ScannerOptions;
use tslex_syntax::{SyntaxKind, TokenFlags};

/// A snapshot of one scanned token. Offsets are UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub kind: SyntaxKind,
    /// Start of the token including leading trivia.
    pub full_start: u32,
    /// Start of the token itself.
    pub pos: u32,
    /// End of the token (exclusive).
    pub end: u32,
    /// Decoded value for identifiers, literals and JSX text; empty otherwise.
    pub value: String,
    pub flags: TokenFlags,
}

impl TokenInfo {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            full_start: pos,
            pos,
            end,
            value: String::new(),
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Length of the token itself in code units.
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn is_unterminated(&self) -> bool {
        self.flags.contains(TokenFlags::UNTERMINATED)
    }
}

/// Scan all of `text` with `options`.
///
/// The returned tokens end with the `EndOfFileToken`, whose `full_start`
/// covers any trailing trivia.
pub fn tokenize(text: &str, options: &ScannerOptions) -> (Vec<TokenInfo>, DiagnosticCollection) {
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::with_options(options);
    scanner.set_on_error(Some(sink.callback()));
    scanner.set_text(text);

    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        tokens.push(scanner.token_info());
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
    }
    (tokens, sink.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_info_accessors() {
        let token = TokenInfo::new(SyntaxKind::Identifier, 4, 7)
            .with_value("foo")
            .with_flags(TokenFlags::PRECEDING_LINE_BREAK);
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
        assert!(token.has_preceding_line_break());
        assert!(!token.is_unterminated());
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let (tokens, diagnostics) = tokenize("let x = 1; ", &ScannerOptions::default());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::LetKeyword,
                SyntaxKind::Identifier,
                SyntaxKind::EqualsToken,
                SyntaxKind::NumericLiteral,
                SyntaxKind::SemicolonToken,
                SyntaxKind::EndOfFileToken,
            ]
        );
        assert!(diagnostics.is_empty());
        let eof = tokens.last().unwrap();
        assert_eq!(eof.full_start, 10);
        assert_eq!(eof.pos, 11);
    }

    #[test]
    fn test_tokenize_collects_diagnostics() {
        let (_, diagnostics) = tokenize("'abc", &ScannerOptions::default());
        assert_eq!(diagnostics.codes(), vec![1002]);
    }
}
