// Copyright (c) 2022. Sebastien Soudan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http:www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ADF benchmark
#![allow(missing_docs)]
use adf_unit_root::prelude::adf::{adfuller, AdfRegression};
use adf_unit_root::utils::gen_ar_1;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;

fn adf_benchmark_fixed_lag_2(c: &mut Criterion) {
    for size in [100, 200, 500, 1000, 5000].iter() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);

        let lag = 2;
        let mu: f64 = 0.;
        let delta = 0.5;
        let sigma = 1.0;
        let y = gen_ar_1(&mut rng, *size, mu, delta, sigma);

        c.bench_with_input(BenchmarkId::new("adf_fixed_lag_2", size), &y, |b, y| {
            b.iter(|| adfuller(y, Some(lag), AdfRegression::Constant, None))
        });
    }
}

fn adf_benchmark_fixed_lag_10(c: &mut Criterion) {
    for size in [100, 200, 500, 1000, 5000].iter() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);

        let lag = 10;
        let mu: f64 = 0.;
        let delta = 0.5;
        let sigma = 1.0;
        let y = gen_ar_1(&mut rng, *size, mu, delta, sigma);

        c.bench_with_input(BenchmarkId::new("adf_fixed_lag_10", size), &y, |b, y| {
            b.iter(|| adfuller(y, Some(lag), AdfRegression::Constant, None))
        });
    }
}

fn adf_benchmark_autolag_aic(c: &mut Criterion) {
    for size in [100, 200, 500, 1000, 5000].iter() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);

        let mu: f64 = 0.;
        let delta = 0.5;
        let sigma = 1.0;
        let y = gen_ar_1(&mut rng, *size, mu, delta, sigma);

        c.bench_with_input(BenchmarkId::new("adf_autolag_aic", size), &y, |b, y| {
            b.iter(|| {
                adfuller(
                    y,
                    None,
                    AdfRegression::Constant,
                    Some(adf_unit_root::prelude::autolag::IcMethod::Aic),
                )
            })
        });
    }
}

criterion_group!(
    benches,
    adf_benchmark_fixed_lag_2,
    adf_benchmark_fixed_lag_10,
    adf_benchmark_autolag_aic
);
criterion_main!(benches);
