use bitcount_bench::counter::{BitCounter, ClearLowestBit, Intrinsic, LookupTable, Naive, NoOp};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Inputs with low, medium and full population
const INPUTS: [(&str, u32); 4] = [
    ("zero", 0),
    ("sparse", 0x8000_0001),
    ("half", 0xAAAA_AAAA),
    ("full", u32::MAX),
];

/// Benchmark every strategy on fixed inputs
fn bench_fixed_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_set_bits");
    let lookup = LookupTable::new();
    let counters: [&dyn BitCounter; 5] = [&NoOp, &Naive, &ClearLowestBit, &lookup, &Intrinsic];

    for (label, input) in INPUTS.iter() {
        for counter in counters {
            group.bench_with_input(BenchmarkId::new(counter.name(), label), input, |b, &input| {
                b.iter(|| black_box(counter.count_set_bits(black_box(input))));
            });
        }
    }

    group.finish();
}

/// Benchmark every strategy over a pre-generated mixed workload
fn bench_mixed_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_1000");

    // Simple LCG so every strategy sees the same keys
    let inputs: Vec<u32> = (0..1_000u32)
        .map(|i| 1_664_525u32.wrapping_mul(i).wrapping_add(1_013_904_223))
        .collect();

    let lookup = LookupTable::new();
    let counters: [&dyn BitCounter; 5] = [&NoOp, &Naive, &ClearLowestBit, &lookup, &Intrinsic];
    for counter in counters {
        group.bench_function(counter.name(), |b| {
            b.iter(|| {
                let mut total = 0u32;
                for &n in &inputs {
                    total = total.wrapping_add(counter.count_set_bits(black_box(n)));
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_inputs, bench_mixed_inputs);
criterion_main!(benches);
