//! Benchmarks for copy, equality and formatting of the model types.

mod copy;
mod format;

pub use copy::bench_copy;
pub use format::bench_format;
