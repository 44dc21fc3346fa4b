// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use exactint::composite::{add_div, add_sub_div};
use exactint::multi::{add_m, mul_m};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SAMPLES: usize = 1_024;

/// Operand tuples `(a, b, c, divisor)` whose sums overflow `i64` about half
/// of the time, so both the direct path and the exact numerator path are
/// measured.
fn operands(seed: u64) -> Vec<(i64, i64, i64, i64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| {
            let divisor = match rng.random_range(-1_000i64..1_000) {
                0 => 1,
                d => d,
            };
            (rng.random(), rng.random(), rng.random(), divisor)
        })
        .collect()
}

fn bench_composite(c: &mut Criterion) {
    let inputs = operands(1);
    let mut group = c.benchmark_group("composite");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("add_div_i64", |b| {
        b.iter(|| {
            for &(x, y, _, d) in &inputs {
                let _ = black_box(add_div(black_box(x), black_box(y), black_box(d)));
            }
        })
    });

    group.bench_function("add_sub_div_i64", |b| {
        b.iter(|| {
            for &(x, y, z, d) in &inputs {
                let _ = black_box(add_sub_div(black_box(x), black_box(y), black_box(z), black_box(d)));
            }
        })
    });

    group.finish();
}

fn bench_multi(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut group = c.benchmark_group("multi");

    // Past `INLINE_OPERANDS` the operand buffer spills to the heap.
    for len in [3usize, 8, 16, 64] {
        let sums: Vec<i32> = (0..len).map(|_| rng.random_range(-1_000_000..1_000_000)).collect();
        let factors: Vec<i32> = (0..len).map(|_| rng.random_range(-3..=3)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("add_m", len), &sums, |b, values| {
            b.iter(|| black_box(add_m(black_box(values))))
        });
        group.bench_with_input(BenchmarkId::new("mul_m", len), &factors, |b, values| {
            b.iter(|| black_box(mul_m(black_box(values))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_composite, bench_multi);
criterion_main!(benches);
