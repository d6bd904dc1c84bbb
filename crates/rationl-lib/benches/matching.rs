//! Matching time on `(a?){n}a{n}` against `a{n}`.
//!
//! Backtracking engines take time exponential in `n` on this family. Every
//! rationl strategy should grow linearly with the input.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rationl_lib::{Automaton, Strategy};

fn pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    for n in [8, 16, 32, 64] {
        let pattern = format!("(a?){{{n}}}a{{{n}}}");
        let text = "a".repeat(n);
        for strategy in Strategy::ALL {
            let automaton = Automaton::builder()
                .strategy(strategy)
                .build(&pattern)
                .unwrap();
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &text, |b, text| {
                b.iter(|| automaton.matches(black_box(text)))
            });
        }
    }
    group.finish();
}

fn scan(c: &mut Criterion) {
    let text = "lorem ipsum 2024-10-19 dolor 1999-01-01 sit amet ".repeat(2_000);
    let mut group = c.benchmark_group("find_all");
    for strategy in Strategy::ALL {
        let automaton = Automaton::builder()
            .strategy(strategy)
            .build("[0-9]{4}-[0-9]{2}-[0-9]{2}")
            .unwrap();
        group.bench_function(strategy.name(), |b| {
            b.iter(|| automaton.find_all(black_box(text.as_str())).count())
        });
    }
    group.finish();
}

criterion_group!(benches, pathological, scan);
criterion_main!(benches);
