//! Benchmarks for the music value types.
//!
//! Run with: cargo bench
//!
//! Each benchmark builds a cacophony of `lines` sequences holding 64 sounds
//! apiece, so the sizes below cover a solo line up to a large ensemble.
//!
//! Benchmark groups:
//!   - model/copy     Deep copy and structural equality
//!   - model/format   Display rendering and checked construction

use criterion::{criterion_group, criterion_main};

use cacophony::{Cacophony, SoundSequence};

mod model;

/// Number of lines in the benchmarked cacophonies.
pub const LINE_COUNTS: &[usize] = &[1, 4, 16, 64];

/// Sounds per line
pub const SOUNDS_PER_LINE: usize = 64;

/// A cacophony of `lines` ascending chromatic lines with a rest every eighth sound
pub fn ensemble(lines: usize) -> Cacophony {
    (0..lines)
        .map(|line| {
            (0..SOUNDS_PER_LINE)
                .fold(SoundSequence::builder(), |builder, i| {
                    if i % 8 == 7 {
                        builder.rest(0.25)
                    } else {
                        builder.note((36 + line + i) as u8 % 128, 0.25)
                    }
                })
                .build()
                .expect("benchmark lines are valid")
        })
        .collect()
}

criterion_group!(benches, model::bench_copy, model::bench_format);
criterion_main!(benches);
