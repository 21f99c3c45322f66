//! Benchmarks for Display rendering and element-checked construction.

use std::hint::black_box;

use cacophony::{Cacophony, Element, SoundSequence};
use criterion::{BenchmarkId, Criterion};

use crate::{ensemble, LINE_COUNTS};

pub fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("model/format");

    for &lines in LINE_COUNTS {
        let cacophony = ensemble(lines);

        group.bench_with_input(BenchmarkId::new("to_string", lines), &lines, |b, _| {
            b.iter(|| black_box(&cacophony).to_string())
        });

        let elements: Vec<Element> = cacophony.iter().cloned().map(Element::from).collect();
        group.bench_with_input(
            BenchmarkId::new("try_from_elements", lines),
            &lines,
            |b, _| {
                b.iter(|| Cacophony::try_from_elements(black_box(elements.clone())))
            },
        );

        let sounds: Vec<Element> = cacophony
            .iter()
            .flat_map(|sequence| sequence.iter().copied())
            .map(Element::from)
            .collect();
        group.bench_with_input(
            BenchmarkId::new("sequence_try_from_elements", lines),
            &lines,
            |b, _| {
                b.iter(|| SoundSequence::try_from_elements(black_box(sounds.clone())))
            },
        );
    }

    group.finish();
}
