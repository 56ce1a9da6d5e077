//! # Dead-Drop Engine Benchmarks
//!
//! | Engine | Operation | Target |
//! |--------|-----------|--------|
//! | dd-01 Authenticated Map | witness verify | < 1ms |
//! | dd-03 Agent Reports | one accumulator step | < 1ms |
//! | dd-03 Agent Reports | adopt a 1000-step head | < 1ms |

use criterion::{criterion_group, criterion_main};
use dd_tests::benchmarks::{dd_01_authenticated_map, dd_03_agent_reports};

criterion_group!(
    map_benches,
    dd_01_authenticated_map::bench_map_insert,
    dd_01_authenticated_map::bench_witness
);
criterion_group!(
    report_benches,
    dd_03_agent_reports::bench_step,
    dd_03_agent_reports::bench_fold,
    dd_03_agent_reports::bench_adopt
);
criterion_main!(map_benches, report_benches);
