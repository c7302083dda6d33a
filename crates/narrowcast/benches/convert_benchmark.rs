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

use criterion::{Criterion, criterion_group, criterion_main};
use narrowcast::checked::{NarrowFrom, RoundFrom, TruncFrom};
use narrowcast::saturating::{SaturatingNarrowFrom, SaturatingRoundFrom};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn make_int_inputs() -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..4096).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

fn make_float_inputs() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(11);
    (0..4096).map(|_| rng.random_range(-1.0e7..1.0e7)).collect()
}

fn bench_integer_narrowing(c: &mut Criterion) {
    let inputs = make_int_inputs();

    c.bench_function("narrow_i64_to_i32", |b| {
        b.iter(|| {
            for &value in &inputs {
                let _ = black_box(i32::narrow_from(black_box(value)));
            }
        })
    });

    c.bench_function("saturating_narrow_i64_to_i32", |b| {
        b.iter(|| {
            for &value in &inputs {
                let _ = black_box(i32::saturating_narrow_from(black_box(value)));
            }
        })
    });
}

fn bench_float_conversion(c: &mut Criterion) {
    let inputs = make_float_inputs();

    c.bench_function("round_f64_to_i32", |b| {
        b.iter(|| {
            for &value in &inputs {
                let _ = black_box(i32::round_from(black_box(value)));
            }
        })
    });

    c.bench_function("trunc_f64_to_i32", |b| {
        b.iter(|| {
            for &value in &inputs {
                let _ = black_box(i32::trunc_from(black_box(value)));
            }
        })
    });

    c.bench_function("saturating_round_f64_to_i32", |b| {
        b.iter(|| {
            for &value in &inputs {
                let _ = black_box(i32::saturating_round_from(black_box(value)));
            }
        })
    });
}

fn bench_code_point_conversion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let inputs: Vec<u32> = (0..4096).map(|_| rng.random_range(0..0x11_0000)).collect();

    c.bench_function("narrow_u32_to_char", |b| {
        b.iter(|| {
            for &value in &inputs {
                let _ = black_box(char::narrow_from(black_box(value)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_integer_narrowing,
    bench_float_conversion,
    bench_code_point_conversion
);
criterion_main!(benches);
