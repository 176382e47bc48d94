//! Benchmarks for markup expansion, validation, case folding and globbing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_util::{
    apply_format, fold_case, glob, is_valid_channel, is_valid_nick, is_valid_user,
    strip_control_bytes, strip_format_tokens, Pattern,
};

/// Text with no markup at all
const PLAIN_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// A single token near the start
const SHORT_MARKUP: &str = "{bold}Hello{b}, world!";

/// Many tokens, including ones late in the table
const LONG_MARKUP: &str = "{ctcp}ACTION {red}r{orange}o{yellow}y{green}g{blue}b{purple}i{pink}v{c} {underline}rainbow{ul} {italic}done{reset}{ctcp}";

/// Braces that are not markup
const UNKNOWN_TOKENS: &str = "{\"json\": {\"nested\": true}} {notacolor}";

fn benchmark_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Markup");

    let inputs = [
        ("plain", PLAIN_TEXT),
        ("short", SHORT_MARKUP),
        ("long", LONG_MARKUP),
        ("unknown", UNKNOWN_TOKENS),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("apply_format", name), input, |b, s| {
            b.iter(|| black_box(apply_format(black_box(s))))
        });
        group.bench_with_input(BenchmarkId::new("strip_format_tokens", name), input, |b, s| {
            b.iter(|| black_box(strip_format_tokens(black_box(s))))
        });
    }

    let raw = apply_format(LONG_MARKUP).into_owned();
    group.bench_function("strip_control_bytes", |b| {
        b.iter(|| black_box(strip_control_bytes(black_box(&raw))))
    });

    group.finish();
}

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Validation");

    group.bench_function("channel", |b| {
        b.iter(|| black_box(is_valid_channel(black_box("#rust-lang-offtopic"))))
    });

    group.bench_function("channel_id", |b| {
        b.iter(|| black_box(is_valid_channel(black_box("!A1B2Cchannel"))))
    });

    group.bench_function("nick", |b| {
        b.iter(|| black_box(is_valid_nick(black_box("[Ferris]_away"))))
    });

    group.bench_function("user", |b| {
        b.iter(|| black_box(is_valid_user(black_box("~first.last"))))
    });

    group.bench_function("fold_case", |b| {
        b.iter(|| black_box(fold_case(black_box("#Rust[Lang]\\Offtopic^"))))
    });

    group.finish();
}

fn benchmark_glob(c: &mut Criterion) {
    let mut group = c.benchmark_group("Glob");

    const MASK: &str = "*!*@*.example.com";
    const HOST: &str = "nick!~user@irc.example.com";

    group.bench_function("glob_fn", |b| {
        b.iter(|| black_box(glob(black_box(HOST), black_box(MASK))))
    });

    let compiled = Pattern::new(MASK);
    group.bench_function("compiled_pattern", |b| {
        b.iter(|| black_box(compiled.matches(black_box(HOST))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_markup, benchmark_validation, benchmark_glob);

criterion_main!(benches);
