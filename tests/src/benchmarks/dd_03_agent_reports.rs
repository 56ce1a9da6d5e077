//! # DD-03 Agent Report Benchmarks
//!
//! - One accumulator step (verify prior, validate, sign)
//! - Folding a stream of mixed reports
//! - Adapter adoption of a long chain's head

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use dd_03_agent_reports::{AgentReport, HighestMessageApi};
use std::time::Duration;

use crate::harness::ChainHarness;

fn stream(len: u64) -> Vec<AgentReport> {
    (1..=len)
        .map(|n| {
            // Every fourth report carries a broken checksum.
            if n % 4 == 0 {
                AgentReport::new(n, n % 3000, 100, 6000, 0)
            } else {
                AgentReport::with_checksum(n, n % 3000, 100, 6000)
            }
        })
        .collect()
}

pub fn bench_step(c: &mut Criterion) {
    let h = ChainHarness::new([0x71; 32]);
    let base = h.prover.base_case().unwrap();
    let report = AgentReport::with_checksum(1, 10, 1000, 8000);

    c.bench_function("dd-03-step", |b| {
        b.iter(|| black_box(h.prover.step(&base, &report).unwrap()))
    });
}

pub fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-03-fold");
    group.measurement_time(Duration::from_secs(10));
    let h = ChainHarness::new([0x72; 32]);

    for len in [10u64, 100, 1_000] {
        let reports = stream(len);
        group.throughput(Throughput::Elements(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &reports, |b, reports| {
            b.iter(|| black_box(h.prover.fold(h.prover.base_case().unwrap(), reports).unwrap()))
        });
    }

    group.finish();
}

pub fn bench_adopt(c: &mut Criterion) {
    let h = ChainHarness::new([0x73; 32]);
    let head = h
        .prover
        .fold(h.prover.base_case().unwrap(), &stream(1_000))
        .unwrap()
        .proof;

    c.bench_function("dd-03-adopt", |b| {
        b.iter(|| black_box(h.adapter.update_highest_message_no(&head).unwrap()))
    });
}
