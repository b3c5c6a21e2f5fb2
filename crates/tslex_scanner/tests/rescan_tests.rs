//! Parser-driven re-scanning, exercised the way a parser would call it.

use tslex_options::{LanguageVariant, ScriptTarget};
use tslex_scanner::{DiagnosticSink, Scanner};
use tslex_syntax::SyntaxKind;

fn new_scanner(source: &str, variant: LanguageVariant) -> Scanner {
    let mut scanner = Scanner::new(ScriptTarget::LATEST, true, variant);
    scanner.set_text(source);
    scanner
}

#[test]
fn test_nested_type_arguments_close_separately() {
    // `a<b<c>>` closes two argument lists with plain `>` tokens.
    let mut scanner = new_scanner("a<b<c>>d", LanguageVariant::Standard);
    let mut kinds = Vec::new();
    while scanner.scan() != SyntaxKind::EndOfFileToken {
        kinds.push(scanner.token());
    }
    assert_eq!(kinds, vec![
        SyntaxKind::Identifier,
        SyntaxKind::LessThanToken,
        SyntaxKind::Identifier,
        SyntaxKind::LessThanToken,
        SyntaxKind::Identifier,
        SyntaxKind::GreaterThanToken,
        SyntaxKind::GreaterThanToken,
        SyntaxKind::Identifier,
    ]);
}

#[test]
fn test_greater_rescan_in_expression_is_idempotent() {
    let mut scanner = new_scanner("a<b>>c", LanguageVariant::Standard);
    scanner.scan();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(scanner.token_start(), 3);
    assert_eq!(scanner.re_scan_greater_token(), SyntaxKind::GreaterThanGreaterThanToken);
    assert_eq!(scanner.re_scan_greater_token(), SyntaxKind::GreaterThanGreaterThanToken);
    assert_eq!(scanner.token_end(), 5);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "c");
}

#[test]
fn test_greater_rescan_leaves_other_tokens() {
    let mut scanner = new_scanner("a", LanguageVariant::Standard);
    scanner.scan();
    assert_eq!(scanner.re_scan_greater_token(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_end(), 1);
}

#[test]
fn test_less_than_rescan_for_type_arguments() {
    // `f<<T>(x: T) => T>` opens with `<<` that the parser splits.
    let mut scanner = new_scanner("f<<T>", LanguageVariant::Standard);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::LessThanLessThanToken);
    assert_eq!(scanner.re_scan_less_than_token(), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_asterisk_equals_rescan() {
    // `function*=` style splits: `*` then `=`.
    let mut scanner = new_scanner("a*=b", LanguageVariant::Standard);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::AsteriskEqualsToken);
    assert_eq!(scanner.re_scan_asterisk_equals_token(), SyntaxKind::AsteriskToken);
    assert_eq!(scanner.token_end(), 2);
    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
}

#[test]
fn test_question_rescan() {
    let mut scanner = new_scanner("a??b", LanguageVariant::Standard);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::QuestionQuestionToken);
    assert_eq!(scanner.re_scan_question_token(), SyntaxKind::QuestionToken);
    assert_eq!(scanner.scan(), SyntaxKind::QuestionToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_hash_rescan() {
    let mut scanner = new_scanner("#private", LanguageVariant::Standard);
    assert_eq!(scanner.scan(), SyntaxKind::PrivateIdentifier);
    assert_eq!(scanner.re_scan_hash_token(), SyntaxKind::HashToken);
    assert_eq!(scanner.token_end(), 1);
    assert_eq!(scanner.scan(), SyntaxKind::PrivateKeyword);
}

#[test]
fn test_template_rescan_tagged_vs_untagged() {
    let sink = DiagnosticSink::new();
    let mut scanner = new_scanner(r"tag`${a}\x`", LanguageVariant::Standard);
    scanner.set_on_error(Some(sink.callback()));
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);

    assert_eq!(scanner.re_scan_template_token(true), SyntaxKind::TemplateTail);
    assert!(sink.is_empty());

    assert_eq!(scanner.re_scan_template_token(false), SyntaxKind::TemplateTail);
    assert_eq!(sink.codes(), vec![1125]);
}

#[test]
fn test_template_head_rescan() {
    let mut scanner = new_scanner("`a${b}`", LanguageVariant::Standard);
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.re_scan_template_head_or_no_substitution_template(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.token_value(), "a");
    assert_eq!(scanner.token_end(), 4);

    let mut scanner = new_scanner("`plain`", LanguageVariant::Standard);
    scanner.scan();
    assert_eq!(
        scanner.re_scan_template_head_or_no_substitution_template(),
        SyntaxKind::NoSubstitutionTemplateLiteral
    );
}

#[test]
fn test_jsx_element_flow() {
    let mut scanner = new_scanner("<div>hi {x}</div>", LanguageVariant::JSX);
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(scanner.scan_jsx_token(true), SyntaxKind::JsxText);
    assert_eq!(scanner.token_value(), "hi ");
    assert_eq!(scanner.scan_jsx_token(true), SyntaxKind::OpenBraceToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.scan_jsx_token(true), SyntaxKind::LessThanSlashToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_jsx_token_rescan_from_full_start() {
    let mut scanner = new_scanner("<a>  some text</a>", LanguageVariant::JSX);
    scanner.scan();
    scanner.scan();
    scanner.scan();
    // The parser first read a normal token, then learned it is in children.
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.re_scan_jsx_token(true), SyntaxKind::JsxText);
    assert_eq!(scanner.token_value(), "  some text");
    assert_eq!(scanner.token_start(), 3);
}

#[test]
fn test_jsx_whitespace_only_children() {
    let mut scanner = new_scanner("<a>\n    </a>", LanguageVariant::JSX);
    scanner.scan();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan_jsx_token(true), SyntaxKind::JsxTextAllWhiteSpaces);
    assert_eq!(scanner.scan_jsx_token(true), SyntaxKind::LessThanSlashToken);
}

#[test]
fn test_jsx_attribute_value_rescan() {
    let mut scanner = new_scanner(r#"<a b="c\d"/>"#, LanguageVariant::JSX);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.re_scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), r"c\d");
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
}

#[test]
fn test_jsx_hyphenated_attribute_name() {
    let mut scanner = new_scanner("<a data-value-x={1}>", LanguageVariant::JSX);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan_jsx_identifier(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "data-value-x");
    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
}

#[test]
fn test_invalid_identifier_rescan_with_newest_tables() {
    let mut scanner = Scanner::new(ScriptTarget::ES5, true, LanguageVariant::Standard);
    scanner.set_text("\u{10400}abc");
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.re_scan_invalid_identifier(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "\u{10400}abc");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_invalid_identifier_rescan_without_identifier() {
    let mut scanner = new_scanner("\u{0001}x", LanguageVariant::Standard);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.re_scan_invalid_identifier(), SyntaxKind::Unknown);
    assert_eq!(scanner.token_end(), 1);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_jsdoc_tokens_inside_scan_range() {
    let source = "/** @param {T} name-x the value */";
    let mut scanner = new_scanner(source, LanguageVariant::Standard);
    let kinds = scanner.scan_range(4, source.len() - 7, |s| {
        let mut kinds = Vec::new();
        loop {
            let kind = s.scan_jsdoc_token();
            if kind == SyntaxKind::EndOfFileToken {
                break;
            }
            if kind != SyntaxKind::WhitespaceTrivia {
                kinds.push((kind, s.token_value().to_string()));
            }
        }
        kinds
    });
    assert_eq!(kinds[0], (SyntaxKind::AtToken, String::new()));
    assert_eq!(kinds[1], (SyntaxKind::Identifier, "param".to_string()));
    assert_eq!(kinds[2].0, SyntaxKind::OpenBraceToken);
    assert_eq!(kinds[3], (SyntaxKind::Identifier, "T".to_string()));
    assert_eq!(kinds[4].0, SyntaxKind::CloseBraceToken);
    assert_eq!(kinds[5], (SyntaxKind::Identifier, "name-x".to_string()));
    assert_eq!(scanner.token(), SyntaxKind::Unknown);
}

#[test]
fn test_jsdoc_comment_text() {
    let source = "some text {@link x} @returns y";
    let mut scanner = new_scanner(source, LanguageVariant::Standard);
    assert_eq!(scanner.scan_jsdoc_comment_text_token(false), SyntaxKind::JSDocCommentTextToken);
    assert_eq!(scanner.token_value(), "some text ");
    assert_eq!(scanner.scan_jsdoc_comment_text_token(false), SyntaxKind::OpenBraceToken);
}
