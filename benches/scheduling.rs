//! Benchmarks for the scheduling policies.
//!
//! Runs every algorithm over seeded random workloads of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use u_cpu_sched::models::{Algorithm, Process};
use u_cpu_sched::scheduler::{schedule, SchedulingParams};

const SIZES: [usize; 3] = [16, 128, 1024];

/// Random workload: arrivals spread over roughly half the total burst so the
/// ready queue stays populated, with occasional idle gaps.
fn gen_workload(n: usize, seed: u64) -> Vec<Process> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let horizon = (n as i64) * 4;
    (0..n)
        .map(|i| {
            Process::new(
                Process::default_id(i),
                rng.random_range(0..horizon),
                rng.random_range(1..16),
            )
            .with_priority(rng.random_range(0..8))
        })
        .collect()
}

fn bench_algorithms(c: &mut Criterion) {
    let params = SchedulingParams::new().with_time_quantum(4);

    for algo in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("schedule/{}", algo.name()));
        for &n in &SIZES {
            let workload = gen_workload(n, 0x5eed ^ n as u64);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::from_parameter(n), &workload, |b, ps| {
                b.iter(|| {
                    let result = schedule(black_box(ps), algo, &params);
                    black_box(result.map(|r| r.makespan()).unwrap_or(0))
                });
            });
        }
        group.finish();
    }
}

fn bench_round_robin_quantum(c: &mut Criterion) {
    let workload = gen_workload(256, 0xabcd);
    let mut group = c.benchmark_group("round_robin/quantum");
    for quantum in [1i64, 2, 8, 32] {
        let params = SchedulingParams::new().with_time_quantum(quantum);
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &params, |b, params| {
            b.iter(|| {
                let result = schedule(black_box(&workload), Algorithm::RoundRobin, params);
                black_box(result.map(|r| r.timeline.len()).unwrap_or(0))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_round_robin_quantum);
criterion_main!(benches);
