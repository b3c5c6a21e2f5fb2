//! Conformance test framework for the scanner.
//!
//! Runs a corpus of TypeScript snippets through the scanner and checks that
//! it never panics, that the token spans rebuild the source, and that the
//! number of reported diagnostics matches. Groups tests into categories.

use std::collections::BTreeMap;

use tslex_options::{LanguageVariant, ScannerOptions, ScriptTarget};
use tslex_scanner::{to_utf16, tokenize, DiagnosticSink, Scanner};
use tslex_syntax::SyntaxKind;

/// How a test case is scanned.
#[derive(Debug, Clone, Copy)]
enum Mode {
    /// Tokenize the whole text.
    Tokens(LanguageVariant),
    /// Scan the first token and re-scan it as a regular expression.
    Regex,
}

/// Test result for a single conformance test case.
#[derive(Debug, Clone)]
struct TestResult {
    name: String,
    category: String,
    source: String,
    scan_ok: bool,
    scan_error: Option<String>,
}

/// Scan `source` and return the diagnostic codes, or a description of the
/// first broken guarantee.
fn scan_source(source: &str, mode: Mode) -> Result<Vec<u32>, String> {
    match mode {
        Mode::Tokens(variant) => {
            let options = ScannerOptions {
                language_variant: variant,
                skip_trivia: false,
                ..ScannerOptions::default()
            };
            let (tokens, diagnostics) = tokenize(source, &options);

            let units = to_utf16(source);
            let mut rebuilt = Vec::with_capacity(units.len());
            let mut expected_start = 0u32;
            for token in &tokens {
                if token.pos != expected_start {
                    return Err(format!("{:?} starts at {} instead of {}", token.kind, token.pos, expected_start));
                }
                rebuilt.extend_from_slice(&units[token.pos as usize..token.end as usize]);
                expected_start = token.end;
            }
            if rebuilt != units {
                return Err("token spans do not rebuild the source".to_string());
            }
            Ok(diagnostics.codes())
        }
        Mode::Regex => {
            let sink = DiagnosticSink::new();
            let mut scanner = Scanner::new(ScriptTarget::LATEST, true, LanguageVariant::Standard);
            scanner.set_on_error(Some(sink.callback()));
            scanner.set_text(source);
            scanner.scan();
            let kind = scanner.re_scan_slash_token(true);
            if kind != SyntaxKind::RegularExpressionLiteral {
                return Err(format!("expected a regular expression, got {kind:?}"));
            }
            if scanner.token_end() != to_utf16(source).len() {
                return Err(format!("literal ends at {}", scanner.token_end()));
            }
            Ok(sink.codes())
        }
    }
}

/// Run a single conformance test case.
fn run_test(name: &str, category: &str, source: &str, mode: Mode, expected_diagnostics: usize) -> TestResult {
    let outcome = std::panic::catch_unwind(|| scan_source(source, mode));

    let scan_error = match outcome {
        Ok(Ok(codes)) if codes.len() == expected_diagnostics => None,
        Ok(Ok(codes)) => Some(format!("expected {expected_diagnostics} diagnostics, got {codes:?}")),
        Ok(Err(message)) => Some(message),
        Err(e) => Some(if let Some(s) = e.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = e.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        }),
    };

    TestResult {
        name: name.to_string(),
        category: category.to_string(),
        source: source.to_string(),
        scan_ok: scan_error.is_none(),
        scan_error,
    }
}

/// Conformance test suite runner.
struct ConformanceTestSuite {
    tests: Vec<TestResult>,
}

impl ConformanceTestSuite {
    fn new() -> Self {
        Self { tests: Vec::new() }
    }

    /// A snippet the scanner accepts without diagnostics.
    fn add_test(&mut self, name: &str, category: &str, source: &str) {
        self.add_test_with_errors(name, category, source, 0);
    }

    fn add_test_with_errors(&mut self, name: &str, category: &str, source: &str, expected: usize) {
        let result = run_test(name, category, source, Mode::Tokens(LanguageVariant::Standard), expected);
        self.tests.push(result);
    }

    fn add_jsx_test(&mut self, name: &str, source: &str) {
        let result = run_test(name, "jsx", source, Mode::Tokens(LanguageVariant::JSX), 0);
        self.tests.push(result);
    }

    fn add_regex_test(&mut self, name: &str, source: &str, expected: usize) {
        let result = run_test(name, "regexp", source, Mode::Regex, expected);
        self.tests.push(result);
    }

    fn failures(&self) -> Vec<&TestResult> {
        self.tests.iter().filter(|t| !t.scan_ok).collect()
    }

    fn print_summary(&self) {
        let total = self.tests.len();
        let passed = self.tests.iter().filter(|t| t.scan_ok).count();
        let failed = total - passed;
        let pass_rate = if total > 0 {
            (passed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        println!("\n=== Scanner Conformance Test Summary ===");
        println!("Total tests: {}", total);
        println!("Passed: {}", passed);
        println!("Failed: {}", failed);
        println!("Pass rate: {:.2}%", pass_rate);

        let mut categories: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for test in &self.tests {
            let entry = categories.entry(test.category.as_str()).or_insert((0, 0));
            if test.scan_ok {
                entry.0 += 1;
            }
            entry.1 += 1;
        }

        println!("\n--- Results by Category ---");
        for (category, (passed_count, total_count)) in categories {
            let category_pass_rate = (passed_count as f64 / total_count as f64) * 100.0;
            println!("  {}: {}/{} ({:.2}%)", category, passed_count, total_count, category_pass_rate);
        }

        let failures = self.failures();
        if !failures.is_empty() {
            println!("\n--- Failed Tests ---");
            for failure in failures.iter().take(10) {
                println!(
                    "  [{}] {} ({:?}): {}",
                    failure.category,
                    failure.name,
                    failure.source,
                    failure.scan_error.as_deref().unwrap_or("Unknown error")
                );
            }
            if failures.len() > 10 {
                println!("  ... and {} more failures", failures.len() - 10);
            }
        }
    }
}

// ============================================================================
// Test Cases
// ============================================================================

#[test]
fn test_scanner_conformance() {
    let mut suite = ConformanceTestSuite::new();

    // ========================================================================
    // Category: Declarations
    // ========================================================================
    suite.add_test("basic_var_declaration", "declarations", "var x: number = 42;");
    suite.add_test("basic_let_declaration", "declarations", "let y: string = 'hello';");
    suite.add_test("basic_const_declaration", "declarations", "const z: boolean = true;");
    suite.add_test("typed_array_declaration", "declarations", "const arr: number[] = [1, 2, 3];");
    suite.add_test(
        "function_with_params",
        "declarations",
        "function add(a: number, b: number): number { return a + b; }",
    );
    suite.add_test(
        "arrow_function",
        "declarations",
        "const multiply = (x: number, y: number): number => x * y;",
    );
    suite.add_test(
        "async_function",
        "declarations",
        "async function fetchData(): Promise<string> { return await Promise.resolve('data'); }",
    );
    suite.add_test("basic_interface", "declarations", "interface Person { name: string; age: number; }");
    suite.add_test(
        "class_with_private_field",
        "declarations",
        "class Counter { #count = 0; static #instances = 0; get value() { return this.#count; } }",
    );
    suite.add_test("decorator_class", "declarations", "@Component class MyClass {}");
    suite.add_test(
        "enum_declaration",
        "declarations",
        "const enum Direction { Up = 1, Down, Left, Right }",
    );

    // ========================================================================
    // Category: Types
    // ========================================================================
    suite.add_test("generic_nested", "types", "let m: Map<string, Array<Set<number>>> = new Map();");
    suite.add_test("mapped_type_basic", "types", "type Readonly<T> = { readonly [P in keyof T]: T[P]; };");
    suite.add_test(
        "conditional_type_infer",
        "types",
        "type Elem<T> = T extends (infer U)[] ? U : never;",
    );
    suite.add_test("template_literal_type", "types", "type Getter<K extends string> = `get${Capitalize<K>}`;");
    suite.add_test("satisfies_operator", "types", "const cfg = { port: 80 } satisfies Config;");

    // ========================================================================
    // Category: Operators
    // ========================================================================
    suite.add_test("optional_chaining", "operators", "a?.b?.[c]?.(d) ?? e");
    suite.add_test("logical_assignment", "operators", "a ||= b; c &&= d; e ??= f;");
    suite.add_test("exponent_assignment", "operators", "x **= 2; y >>>= 1; z >>= 3;");
    suite.add_test("conditional_with_decimal", "operators", "const v = ok?.5:1;");
    suite.add_test("spread_and_rest", "operators", "const f = (...args) => [...args, ...rest];");

    // ========================================================================
    // Category: Literals
    // ========================================================================
    suite.add_test("numeric_forms", "literals", "[0, 1.5, .5, 1e10, 1E-7, 0xFF, 0b1010, 0o777, 1_000_000]");
    suite.add_test("bigint_forms", "literals", "[0n, 123n, 0xFFn, 0b11n, 0o7n]");
    suite.add_test("string_escapes", "literals", r#"'\n\t\\\'\x41A\u{1F600}\0'"#);
    suite.add_test("template_with_substitutions", "literals", "`a${b}c${`nested ${d}`}e`");
    suite.add_test("unicode_identifiers", "literals", "const café = 1, π = 3.14, \\u0061bc = 2;");
    suite.add_test_with_errors("unterminated_string", "literals", "'abc\nx", 1);
    suite.add_test_with_errors("unterminated_template", "literals", "`abc", 1);
    suite.add_test_with_errors("legacy_octal", "literals", "017", 1);
    suite.add_test_with_errors("double_separator", "literals", "1__000", 1);
    suite.add_test_with_errors("identifier_after_number", "literals", "3in", 1);

    // ========================================================================
    // Category: Trivia
    // ========================================================================
    suite.add_test("shebang", "trivia", "#!/usr/bin/env node\nconsole.log(1);");
    suite.add_test("comments", "trivia", "/** doc */\n// line\nlet a = /* inline */ 1;");
    suite.add_test("unicode_whitespace", "trivia", "let\u{00A0}a\u{3000}=\u{FEFF}1;\u{2028}");
    suite.add_test("crlf_lines", "trivia", "let a = 1;\r\nlet b = 2;\r\n");
    suite.add_test_with_errors("unterminated_comment", "trivia", "/* never closed", 1);
    suite.add_test_with_errors(
        "conflict_markers",
        "trivia",
        "<<<<<<< HEAD\nx\n=======\ny\n>>>>>>> branch\n",
        3,
    );

    // ========================================================================
    // Category: JSX
    // ========================================================================
    suite.add_jsx_test("jsx_element", "const el = <div className=\"a\">hello</div>;");
    suite.add_jsx_test("jsx_self_closing", "const el = <Foo bar={1} />;");
    suite.add_jsx_test("jsx_fragment", "const el = <><span /></>;");

    // ========================================================================
    // Category: Regular expressions
    // ========================================================================
    suite.add_regex_test("regex_basic", "/ab+c/gi", 0);
    suite.add_regex_test("regex_named_groups", r"/(?<y>\d{4})-(?<m>\d{2})\k<y>/u", 0);
    suite.add_regex_test("regex_lookbehind", r"/(?<=\$)\d+(?!px)/", 0);
    suite.add_regex_test("regex_unicode_sets", r"/[\p{L}--[a-z]]/v", 0);
    suite.add_regex_test("regex_class_with_slash", "/[/]+/", 0);
    suite.add_regex_test("regex_duplicate_flag", "/a/gg", 1);
    suite.add_regex_test("regex_unknown_flag", "/a/x", 1);
    suite.add_regex_test("regex_reversed_range", "/[z-a]/", 1);
    suite.add_regex_test("regex_bad_quantifier", "/a{2,1}/", 1);

    suite.print_summary();

    let failures = suite.failures();
    assert!(
        failures.is_empty(),
        "{} conformance cases failed: {:?}",
        failures.len(),
        failures.iter().map(|t| &t.name).collect::<Vec<_>>()
    );
}
