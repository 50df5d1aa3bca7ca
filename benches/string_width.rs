use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use unicode_width_approximation::{get_codepoint_width, get_string_width, graphemes};

fn corpus() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", "The quick brown fox jumps over the lazy dog. ".repeat(64)),
        ("cjk", "日本語のテキストと中文字符，한국어 문장도 있습니다。".repeat(32)),
        (
            "emoji",
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F44B}\u{1F3FB}\u{1F1E8}\u{1F1F3}\u{1F431}"
                .repeat(64),
        ),
        ("combining", "e\u{301}a\u{308}o\u{302}\u{323}".repeat(128)),
    ]
}

fn bench_string_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_width");
    for (name, text) in corpus() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(get_string_width(black_box(text))));
        });
    }
    group.finish();
}

fn bench_graphemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphemes");
    for (name, text) in corpus() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(graphemes(black_box(text)).count()));
        });
    }
    group.finish();
}

fn bench_codepoint_width(c: &mut Criterion) {
    c.bench_function("codepoint_width_sweep", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for code in (0..0x3_0000u32).step_by(7) {
                total += get_codepoint_width(black_box(code));
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_string_width,
    bench_graphemes,
    bench_codepoint_width
);
criterion_main!(benches);
