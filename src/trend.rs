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

//! Deterministic-trend augmentation of a design matrix.

use nalgebra::DMatrix;

/// Deterministic regressors to prepend or append to a design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Constant only: `[1, 1, ..., 1]`.
    Constant,
    /// Linear trend only: `tau = [1, 2, ..., n]`.
    Trend,
    /// Constant and linear trend.
    ConstantAndTrend,
    /// Constant, linear and quadratic trend.
    ConstantAndTrendSquared,
}

/// Number of columns [`Trend`] adds.
fn width(trend: Trend) -> usize {
    match trend {
        Trend::Constant | Trend::Trend => 1,
        Trend::ConstantAndTrend => 2,
        Trend::ConstantAndTrendSquared => 3,
    }
}

/// Prepends or appends deterministic regressor columns to `x`.
///
/// `x` has shape `(n, p)`; the result has shape `(n, p + s)` where `s` is
/// 1, 1, 2 or 3 depending on `trend`. Columns are placed before `x` iff
/// `prepend`.
pub fn add_trend(x: &DMatrix<f64>, trend: Trend, prepend: bool) -> DMatrix<f64> {
    let n = x.nrows();
    let tau: Vec<f64> = (1..=n).map(|i| i as f64).collect();

    let s = width(trend);
    let mut trend_cols = DMatrix::<f64>::zeros(n, s);
    match trend {
        Trend::Constant => {
            trend_cols.column_mut(0).fill(1.0);
        }
        Trend::Trend => {
            for (i, t) in tau.iter().enumerate() {
                trend_cols[(i, 0)] = *t;
            }
        }
        Trend::ConstantAndTrend => {
            trend_cols.column_mut(0).fill(1.0);
            for (i, t) in tau.iter().enumerate() {
                trend_cols[(i, 1)] = *t;
            }
        }
        Trend::ConstantAndTrendSquared => {
            trend_cols.column_mut(0).fill(1.0);
            for (i, t) in tau.iter().enumerate() {
                trend_cols[(i, 1)] = *t;
                trend_cols[(i, 2)] = t * t;
            }
        }
    }

    let p = x.ncols();
    let mut result = DMatrix::<f64>::zeros(n, p + s);
    if prepend {
        result.view_mut((0, 0), (n, s)).copy_from(&trend_cols);
        result.view_mut((0, s), (n, p)).copy_from(x);
    } else {
        result.view_mut((0, 0), (n, p)).copy_from(x);
        result.view_mut((0, p), (n, s)).copy_from(&trend_cols);
    }
    result
}

#[cfg(test)]
mod tests {
    use nalgebra::DMatrix;

    use super::{add_trend, Trend};

    #[test]
    fn example_e6() {
        let x = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
        let out = add_trend(&x, Trend::ConstantAndTrendSquared, true);
        let expected = DMatrix::from_row_slice(
            3,
            4,
            &[1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 4.0, 2.0, 1.0, 3.0, 9.0, 3.0],
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn ctt_appends_three_columns() {
        let x = DMatrix::from_row_slice(4, 2, &[0.0; 8]);
        let out = add_trend(&x, Trend::ConstantAndTrendSquared, false);
        assert_eq!(out.ncols(), 2 + 3);
    }

    #[test]
    fn round_trip_prepend_then_drop() {
        let x = DMatrix::from_row_slice(5, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let out = add_trend(&x, Trend::ConstantAndTrend, true);
        let s = 2;
        let recovered = out.view((0, s), (5, 2)).into_owned();
        assert_eq!(recovered, x);
    }

    #[test]
    fn constant_column_is_ones() {
        let x = DMatrix::from_row_slice(3, 1, &[0.0, 0.0, 0.0]);
        let out = add_trend(&x, Trend::Constant, false);
        assert_eq!(out.column(1), DMatrix::from_row_slice(3, 1, &[1.0, 1.0, 1.0]).column(0));
    }
}
