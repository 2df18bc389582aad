//! Performance benchmarks for the Tip Pool Allocation Engine.
//!
//! The distribution is recomputed on every input edit, so a full pass over
//! a realistic crew has to stay comfortably below perceptible latency.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use uuid::Uuid;

use tip_engine::allocation::{StaffHours, distribute_tips};

/// Creates a crew of the given size with a spread of weekly hours.
fn create_crew(size: usize) -> Vec<StaffHours> {
    (0..size)
        .map(|index| StaffHours {
            employee_id: Uuid::new_v4(),
            employee_name: format!("emp_{:03}", index),
            hours: Decimal::from((index % 49) as u32),
        })
        .collect()
}

fn bench_distribution(c: &mut Criterion) {
    let pool = Decimal::from(1785);

    let mut group = c.benchmark_group("distribute_tips");
    for size in [5usize, 20, 100] {
        let crew = create_crew(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &crew, |b, crew| {
            b.iter(|| distribute_tips(black_box(pool), black_box(crew)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distribution);
criterion_main!(benches);
