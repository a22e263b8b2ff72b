//! Cursor codec benchmarks.

use bytecursor::SequentialCursor;
use bytecursor_bench::filled_cursor;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_primitive_writes(c: &mut Criterion) {
    let mut cur = SequentialCursor::with_capacity(64);

    c.bench_function("write_u32_be", |b| {
        b.iter(|| {
            cur.seek(0);
            cur.write_u32_be(black_box(0x1234_5678)).unwrap();
        })
    });

    c.bench_function("write_f64_le", |b| {
        b.iter(|| {
            cur.seek(0);
            cur.write_f64_le(black_box(std::f64::consts::PI)).unwrap();
        })
    });
}

fn benchmark_primitive_reads(c: &mut Criterion) {
    let mut cur = filled_cursor(64);

    c.bench_function("next_u32_be", |b| {
        b.iter(|| {
            cur.seek(0);
            black_box(cur.next_u32_be().unwrap())
        })
    });

    c.bench_function("next_f64_le", |b| {
        b.iter(|| {
            cur.seek(0);
            black_box(cur.next_f64_le().unwrap())
        })
    });
}

fn benchmark_string_round_trip(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog";
    let mut cur = SequentialCursor::with_capacity(128);

    c.bench_function("string_round_trip", |b| {
        b.iter(|| {
            cur.seek(0);
            cur.write_string(black_box(text)).unwrap();
            cur.seek(0);
            black_box(cur.next_string(text.len()).unwrap())
        })
    });
}

fn benchmark_growth(c: &mut Criterion) {
    c.bench_function("grow_from_capacity_4", |b| {
        b.iter(|| {
            let mut cur = SequentialCursor::builder().capacity(4).build();
            cur.write_bytes(black_box(&[0u8; 4096])).unwrap();
            black_box(cur.capacity())
        })
    });
}

criterion_group!(
    benches,
    benchmark_primitive_writes,
    benchmark_primitive_reads,
    benchmark_string_round_trip,
    benchmark_growth,
);
criterion_main!(benches);
