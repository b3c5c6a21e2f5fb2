//! Regular expression literal tests: extent, flags and pattern checks.

use tslex_options::{LanguageVariant, ScriptTarget};
use tslex_scanner::{DiagnosticSink, Scanner};
use tslex_syntax::SyntaxKind;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("TSLEX_LOG"))
        .with_test_writer()
        .try_init();
}

/// Scan `source` as a single regular expression literal and return the
/// scanner and the reported codes.
fn scan_regex_with_target(source: &str, target: ScriptTarget) -> (Scanner, Vec<u32>) {
    init_tracing();
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::new(target, true, LanguageVariant::Standard);
    scanner.set_on_error(Some(sink.callback()));
    scanner.set_text(source);
    let first = scanner.scan();
    assert!(
        first == SyntaxKind::SlashToken || first == SyntaxKind::SlashEqualsToken,
        "{source} does not start with a slash"
    );
    assert_eq!(scanner.re_scan_slash_token(true), SyntaxKind::RegularExpressionLiteral);
    let codes = sink.codes();
    (scanner, codes)
}

fn regex_errors(source: &str) -> Vec<u32> {
    scan_regex_with_target(source, ScriptTarget::LATEST).1
}

// ========================================================================
// Extent
// ========================================================================

#[test]
fn test_regex_token_covers_flags() {
    let (mut scanner, codes) = scan_regex_with_target("/ab+c/gi.test(s)", ScriptTarget::LATEST);
    assert!(codes.is_empty());
    assert_eq!(scanner.token_value(), "/ab+c/gi");
    assert_eq!(scanner.token_end(), 8);
    assert_eq!(scanner.scan(), SyntaxKind::DotToken);
}

#[test]
fn test_slash_in_class_does_not_end_literal() {
    let (scanner, codes) = scan_regex_with_target("/[/]x/", ScriptTarget::LATEST);
    assert!(codes.is_empty());
    assert_eq!(scanner.token_value(), "/[/]x/");
}

#[test]
fn test_escaped_slash() {
    let (scanner, _) = scan_regex_with_target(r"/a\/b/", ScriptTarget::LATEST);
    assert_eq!(scanner.token_value(), r"/a\/b/");
}

#[test]
fn test_slash_equals_rescans() {
    let (scanner, codes) = scan_regex_with_target("/=a/", ScriptTarget::LATEST);
    assert!(codes.is_empty());
    assert_eq!(scanner.token_value(), "/=a/");
}

#[test]
fn test_unterminated_regex() {
    init_tracing();
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::new(ScriptTarget::LATEST, true, LanguageVariant::Standard);
    scanner.set_on_error(Some(sink.callback()));
    scanner.set_text("x = /abc\nfoo");
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(scanner.re_scan_slash_token(true), SyntaxKind::RegularExpressionLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.token_value(), "/abc");

    let diagnostics = sink.take();
    assert_eq!(diagnostics.codes(), vec![1161]);
    let span = diagnostics.diagnostics()[0].span.expect("span");
    assert_eq!((span.start, span.length), (4, 4));

    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_rescan_without_error_reporting() {
    init_tracing();
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::new(ScriptTarget::LATEST, true, LanguageVariant::Standard);
    scanner.set_on_error(Some(sink.callback()));
    scanner.set_text("/(/gg");
    scanner.scan();
    scanner.re_scan_slash_token(false);
    assert_eq!(scanner.token_value(), "/(/gg");
    assert!(sink.is_empty());
}

// ========================================================================
// Flags
// ========================================================================

#[test]
fn test_flag_errors() {
    assert_eq!(regex_errors("/a/gg"), vec![1500]);
    assert_eq!(regex_errors("/a/x"), vec![1499]);
    assert_eq!(regex_errors("/a/uv"), vec![1502]);
    assert!(regex_errors("/a/dgimsuy").is_empty());
    assert!(regex_errors("/a/v").is_empty());
}

#[test]
fn test_flag_target_availability() {
    let (_, codes) = scan_regex_with_target("/a/s", ScriptTarget::ES5);
    assert_eq!(codes, vec![1501]);
    let (_, codes) = scan_regex_with_target("/a/d", ScriptTarget::ES2021);
    assert_eq!(codes, vec![1501]);
    let (_, codes) = scan_regex_with_target("/a/d", ScriptTarget::ES2022);
    assert!(codes.is_empty());
    let (_, codes) = scan_regex_with_target("/a/gim", ScriptTarget::ES3);
    assert!(codes.is_empty());
}

// ========================================================================
// Groups and quantifiers
// ========================================================================

#[test]
fn test_valid_patterns() {
    for source in [
        r"/^(?<year>\d{4})-(?<month>\d{2})\k<year>$/u",
        r"/(?:a|b)*?c+d?e{1,}f{2,3}/",
        r"/(?=x)(?!y)(?<=z)(?<!w)/",
        r"/[\p{L}--[a-z]]/v",
        r"/(?i:a)(?-m:b)(?s-i:c)/",
        r"/\bword\B/",
    ] {
        assert!(regex_errors(source).is_empty(), "{source}");
    }
}

#[test]
fn test_duplicate_group_names() {
    assert_eq!(regex_errors("/(?<a>x)(?<a>y)/"), vec![1515]);
    // Names may repeat across alternatives.
    assert!(regex_errors("/(?<a>x)|(?<a>y)/").is_empty());
}

#[test]
fn test_named_groups_need_es2018() {
    let (_, codes) = scan_regex_with_target("/(?<a>x)/", ScriptTarget::ES2017);
    assert_eq!(codes, vec![1503]);
}

#[test]
fn test_quantifier_errors() {
    assert_eq!(regex_errors("/a{2,1}/"), vec![1506]);
    assert_eq!(regex_errors("/+a/"), vec![1507]);
    assert_eq!(regex_errors("/a|*b/"), vec![1507]);
}

#[test]
fn test_unbalanced_brackets() {
    assert_eq!(regex_errors("/a)/"), vec![1508]);
    // Annex B allows a lone `]` unless a unicode flag is set.
    assert!(regex_errors("/]/").is_empty());
    assert_eq!(regex_errors("/]/u"), vec![1508]);
    assert_eq!(regex_errors("/(a/"), vec![1005]);
}

#[test]
fn test_pattern_modifiers() {
    assert_eq!(regex_errors("/(?-:a)/"), vec![1504]);
    assert_eq!(regex_errors("/(?x:a)/"), vec![1499]);
    assert_eq!(regex_errors("/(?g:a)/"), vec![1509]);
    assert_eq!(regex_errors("/(?ii:a)/"), vec![1500]);
}

// ========================================================================
// Escapes and backreferences
// ========================================================================

#[test]
fn test_named_backreferences() {
    assert_eq!(regex_errors(r"/\k<b>(?<a>x)/").first(), Some(&1532));
    // References may come before the group they name.
    assert!(regex_errors(r"/\k<a>(?<a>x)/").is_empty());
    assert_eq!(regex_errors(r"/(?<a>x)\k/"), vec![1510]);
}

#[test]
fn test_numbered_backreferences() {
    assert_eq!(regex_errors(r"/(a)\2/"), vec![1533]);
    assert_eq!(regex_errors(r"/\1/"), vec![1534]);
    assert!(regex_errors(r"/(a)(b)\2/").is_empty());
}

#[test]
fn test_escape_errors() {
    assert_eq!(regex_errors(r"/\c1/u"), vec![1512]);
    assert_eq!(regex_errors(r"/[\1]/"), vec![1536]);
    assert_eq!(regex_errors(r"/\u{61}/"), vec![1538]);
    assert!(regex_errors(r"/\u{61}/u").is_empty());
    assert_eq!(regex_errors(r"/\a/u"), vec![1535]);
    assert_eq!(regex_errors(r"/\q/v"), vec![1511]);
}

// ========================================================================
// Unicode properties
// ========================================================================

#[test]
fn test_unicode_property_errors() {
    assert_eq!(regex_errors(r"/\p{Lx}/u").first(), Some(&1529));
    assert_eq!(regex_errors(r"/\p{L}/"), vec![1530]);
    assert_eq!(regex_errors(r"/\p{Script=Foo}/u").first(), Some(&1526));
    assert_eq!(regex_errors(r"/\p{Foo=Latin}/u").first(), Some(&1524));
    assert!(regex_errors(r"/\p{Script=Latin}\P{Lu}/u").is_empty());
}

// ========================================================================
// Character classes
// ========================================================================

#[test]
fn test_class_range_errors() {
    assert_eq!(regex_errors("/[z-a]/"), vec![1517]);
    assert_eq!(regex_errors(r"/[\d-z]/u"), vec![1516]);
    // Annex B reads `[\d-z]` as three members.
    assert!(regex_errors(r"/[\d-z]/").is_empty());
}

#[test]
fn test_class_set_errors() {
    assert_eq!(regex_errors("/[a--b&&c]/v"), vec![1519]);
    assert_eq!(regex_errors(r"/[^\q{abc}]/v"), vec![1518]);
    assert!(regex_errors(r"/[\q{abc|d}]/v").is_empty());
    assert!(regex_errors(r"/[^\q{a|b}]/v").is_empty());
}
