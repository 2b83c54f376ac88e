use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ytz_bench::{full_ledger, gen_scores};
use ytz_highscore::{HighscoreEntry, HighscoreLedger, DEFAULT_CAPACITY};

fn bench_record(c: &mut Criterion) {
    let scores = gen_scores(1024);
    c.bench_function("ytz_highscore_record_1024", |b| {
        b.iter(|| {
            let mut l = HighscoreLedger::new();
            for &s in &scores {
                black_box(l.record(HighscoreEntry::new("bench", black_box(s))));
            }
            l
        })
    });
}

fn bench_text_roundtrip(c: &mut Criterion) {
    let l = full_ledger(DEFAULT_CAPACITY);
    let text = l.to_text();
    c.bench_function("ytz_highscore_to_text", |b| b.iter(|| black_box(l.to_text())));
    c.bench_function("ytz_highscore_parse", |b| {
        b.iter(|| HighscoreLedger::parse(black_box(&text), DEFAULT_CAPACITY))
    });
}

criterion_group!(benches, bench_record, bench_text_roundtrip);
criterion_main!(benches);
