//! Times just the transform execution (not allocation and pre-calculation)
//! for the length families that exercise each kernel: powers of two, primes,
//! and composites on both sides of the Bluestein cutoff.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use realdft::{RealDft, RealDftPlanner};

fn bench_lengths(c: &mut Criterion, group_name: &str, lengths: &[usize]) {
    let mut group = c.benchmark_group(group_name);
    let mut planner = RealDftPlanner::new();
    for &len in lengths {
        let fft = planner.plan_real_forward(len).unwrap();
        let mut signal = vec![0.0f32; len];
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| fft.real_forward(&mut signal, 0).unwrap());
        });
    }
    group.finish();
}

fn bench_powers_of_two(c: &mut Criterion) {
    bench_lengths(c, "real_p2", &[64, 256, 1024, 4096, 16384, 65536]);
}

fn bench_primes(c: &mut Criterion) {
    bench_lengths(c, "real_prime", &[5, 17, 151, 211, 257, 1009, 2017]);
}

fn bench_composites(c: &mut Criterion) {
    // Mixed small factors, a power of two times a large prime, and a prime
    // power above the cutoff.
    bench_lengths(c, "real_composite", &[24576, 20736, 32192, 30270, 44521]);
}

criterion_group!(
    benches,
    bench_powers_of_two,
    bench_primes,
    bench_composites
);
criterion_main!(benches);
