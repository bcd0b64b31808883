use criterion::{Criterion, criterion_group, criterion_main};
use decdump_core::{ByteDumper, format_row};
use std::hint::black_box;
use std::io::{Cursor, sink};

fn benchmark_format_row(c: &mut Criterion) {
    let row: Vec<u8> = (0..32).collect();
    c.bench_function("format_row", |b| b.iter(|| format_row(black_box(&row))));
}

fn benchmark_dump(c: &mut Criterion) {
    let data: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let dumper = ByteDumper::default();
    c.bench_function("dump_64k", |b| b.iter(|| dumper.dump(Cursor::new(black_box(&data)), sink())));
}

criterion_group!(main_benches, benchmark_format_row, benchmark_dump);
criterion_main!(main_benches);
