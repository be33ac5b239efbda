use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shardid::{BasicGenerator, Config, IdGenStatus, IdGenerator, LockGenerator, TimeSource};
use std::time::Instant;

struct FixedMockTime {
    millis: i64,
}

impl TimeSource for FixedMockTime {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn bench_config() -> Config {
    // 4096 sequence slots per millisecond, so a frozen clock never exhausts
    // the sequence space within one iteration.
    Config::with_bits(1, 0, 12, 5).unwrap()
}

/// Benchmarks a hot-path generator where ids are always `Ready`.
fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: IdGenerator,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    match generator.try_poll_id().unwrap() {
                        IdGenStatus::Ready { id } => {
                            black_box(id);
                        }
                        IdGenStatus::Pending { .. } => unreachable!(),
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

fn bench(c: &mut Criterion) {
    bench_generator(c, "generator/basic", || {
        BasicGenerator::new(bench_config(), FixedMockTime { millis: 1 })
    });
    bench_generator(c, "generator/lock", || {
        LockGenerator::new(bench_config(), FixedMockTime { millis: 1 })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
