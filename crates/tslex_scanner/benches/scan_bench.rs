//! Scanner throughput benchmarks.
//!
//! Run with: `cargo bench -p tslex_scanner`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tslex_options::{LanguageVariant, ScannerOptions, ScriptTarget};
use tslex_scanner::{tokenize, Scanner};
use tslex_syntax::SyntaxKind;

const MODULE_SOURCE: &str = r#"
/**
 * A small in-memory cache.
 * @template K, V
 */
export class Cache<K extends string, V> implements Store<K, V> {
    #entries = new Map<K, { value: V; expires: number }>();
    static readonly DEFAULT_TTL = 60_000;

    constructor(private readonly clock: () => number = Date.now) {}

    get(key: K): V | undefined {
        const entry = this.#entries.get(key);
        if (entry === undefined || entry.expires <= this.clock()) {
            return undefined; // expired
        }
        return entry?.value ?? undefined;
    }

    set(key: K, value: V, ttl = Cache.DEFAULT_TTL): void {
        this.#entries.set(key, { value, expires: this.clock() + ttl });
        console.log(`cached ${key} for ${ttl / 1e3}s`, 0xFF, 0b1010n, .5);
    }
}

type Keys<T> = { [P in keyof T]: T[P] extends Function ? never : P }[keyof T];
const pattern = /^(?<name>[a-z_$][\w$]*)\s*=\s*(.+)$/u;
"#;

/// Repeat the module source `count` times.
fn generate_source(count: usize) -> String {
    MODULE_SOURCE.repeat(count)
}

/// Scan to EOF with a reused scanner, counting tokens.
fn scan_count(scanner: &mut Scanner, source: &str) -> usize {
    scanner.set_text(source);
    let mut count = 0;
    while scanner.scan() != SyntaxKind::EndOfFileToken {
        count += 1;
    }
    count
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for count in [1, 10, 100] {
        let source = generate_source(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("skip_trivia", count), &source, |b, source| {
            let options = ScannerOptions::default();
            b.iter(|| tokenize(black_box(source), &options))
        });
        group.bench_with_input(BenchmarkId::new("with_trivia", count), &source, |b, source| {
            let options = ScannerOptions {
                skip_trivia: false,
                ..ScannerOptions::default()
            };
            b.iter(|| tokenize(black_box(source), &options))
        });
    }
    group.finish();
}

fn bench_scanner_reuse(c: &mut Criterion) {
    let source = generate_source(100);
    let mut group = c.benchmark_group("scanner");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("reuse", |b| {
        let mut scanner = Scanner::new(ScriptTarget::LATEST, true, LanguageVariant::Standard);
        b.iter(|| scan_count(&mut scanner, black_box(&source)))
    });
    group.bench_function("es5_tables", |b| {
        let mut scanner = Scanner::new(ScriptTarget::ES5, true, LanguageVariant::Standard);
        b.iter(|| scan_count(&mut scanner, black_box(&source)))
    });
    group.finish();
}

fn bench_regex(c: &mut Criterion) {
    let source = r"/^(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})(?:T[\p{N}:.]+)?\k<year>$/gu";
    c.bench_function("regex_rescan", |b| {
        let mut scanner = Scanner::new(ScriptTarget::LATEST, true, LanguageVariant::Standard);
        b.iter(|| {
            scanner.set_text(black_box(source));
            scanner.scan();
            scanner.re_scan_slash_token(true)
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_scanner_reuse, bench_regex);
criterion_main!(benches);
