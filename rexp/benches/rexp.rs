use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rexp::{rexp, PatternCache, Rexp};

pub fn criterion_benchmark(c: &mut Criterion) {
    let date = "2000-12-31";

    {
        c.bench_function("new", |b| b.iter(|| Rexp::new(black_box(r"(`d+)"))));

        let cache = PatternCache::new();
        c.bench_function("cache", |b| {
            b.iter(|| cache.get(black_box(r"(`d+)")).call())
        });

        c.bench_function("cache_global", |b| b.iter(|| rexp(black_box(r"(`d+)"))));
    }

    {
        let re = Rexp::new(r"(`d+)").unwrap();
        assert_eq!(re.gsub(date, "<$1>").unwrap(), "<2000>-<12>-<31>");
        c.bench_function("gsub_template", |b| b.iter(|| re.gsub(black_box(date), "<$1>")));
        c.bench_function("gsub_literal", |b| b.iter(|| re.gsub(black_box(date), "X")));
        c.bench_function("gsub_with", |b| {
            b.iter(|| re.gsub_with(black_box(date), |m| m.as_str().len().to_string()))
        });
        c.bench_function("regex_replace_all", |b| {
            b.iter(|| re.as_regex().replace_all(black_box(date), "<$1>"))
        });
    }

    {
        let re = Rexp::new(r"`d+").unwrap();
        c.bench_function("match_all", |b| b.iter(|| re.match_all(black_box(date)).count()));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
