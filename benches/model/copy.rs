//! Benchmarks for deep copy and structural equality.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{ensemble, LINE_COUNTS};

pub fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("model/copy");

    for &lines in LINE_COUNTS {
        let cacophony = ensemble(lines);

        group.bench_with_input(BenchmarkId::new("clone", lines), &lines, |b, _| {
            b.iter(|| black_box(&cacophony).clone())
        });

        // Worst case for equality: the copy matches all the way down
        let copy = cacophony.clone();
        group.bench_with_input(BenchmarkId::new("eq", lines), &lines, |b, _| {
            b.iter(|| black_box(&cacophony) == black_box(&copy))
        });
    }

    group.finish();
}
