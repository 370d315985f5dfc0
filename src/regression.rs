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

//! Closed-form ordinary least squares.

use nalgebra::{DMatrix, DVector};

use crate::linalg::inv_or_pinv;
use crate::Error;

/// The result of an OLS fit.
///
/// `aic = n * ln(rss / n) + 2 * k` and `bic = n * ln(rss / n) + k * ln(n)`
/// where `rss` is the residual sum of squares, `n` the number of
/// observations and `k` the number of regressors.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Coefficients, length `k`.
    pub params: DVector<f64>,
    /// Fitted values, length `n`.
    pub fitted_values: DVector<f64>,
    /// Residuals, length `n`. `residuals = y - fitted_values`.
    pub residuals: DVector<f64>,
    /// t-values, length `k`.
    pub t_values: DVector<f64>,
    /// Akaike information criterion.
    pub aic: f64,
    /// Bayesian information criterion.
    pub bic: f64,
    /// Number of regressors `k` used to produce this fit - the lag
    /// length credited to it.
    pub lag: usize,
}

/// Fits `y = x * params + residuals` by ordinary least squares.
///
/// Fails with [`Error::InvalidArgument`] when `n <= k` (non-positive
/// degrees of freedom) or when `x` has zero columns.
pub fn ols_fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<RegressionResult, Error> {
    let n = x.nrows();
    let k = x.ncols();

    if k == 0 {
        return Err(Error::InvalidArgument {
            param: "x",
            value: "must have at least one column".into(),
        });
    }
    if n <= k {
        return Err(Error::InvalidArgument {
            param: "x",
            value: format!("n = {n} observations must exceed k = {k} regressors"),
        });
    }
    if y.len() != n {
        return Err(Error::InvalidArgument {
            param: "y",
            value: format!("length {} does not match x rows {}", y.len(), n),
        });
    }

    let xt = x.transpose();
    let a = &xt * x;
    let a_inv = inv_or_pinv(&a)?;

    let params = &a_inv * &xt * y;
    let fitted_values = x * &params;
    let residuals = y - &fitted_values;

    let rss: f64 = residuals.iter().map(|r| r * r).sum();
    let sigma2 = rss / (n - k) as f64;

    let vcv = &a_inv * sigma2;
    let t_values = DVector::from_iterator(
        k,
        (0..k).map(|i| {
            let var = vcv[(i, i)];
            if var > 0.0 {
                params[i] / var.sqrt()
            } else {
                f64::NAN
            }
        }),
    );

    let n_f = n as f64;
    let k_f = k as f64;
    let aic = n_f * (rss / n_f).ln() + 2.0 * k_f;
    let bic = n_f * (rss / n_f).ln() + k_f * n_f.ln();

    Ok(RegressionResult {
        params,
        fitted_values,
        residuals,
        t_values,
        aic,
        bic,
        lag: k,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::utils::{gen_affine_data, gen_affine_data_with_whitenoise};

    fn add_constant(x: &mut DMatrix<f64>) {
        let a = vec![1.0; x.nrows()];
        x.extend(a)
    }

    #[test]
    fn perfect_fit_has_zero_residuals() {
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut x = DMatrix::from_row_slice(5, 1, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        add_constant(&mut x);

        let result = super::ols_fit(&x, &y).unwrap();
        assert_relative_eq!(result.params[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(result.params[1], 0.0, epsilon = 1e-10);
        assert!(result.residuals.iter().all(|r| r.abs() < 1e-10));
        assert_eq!(result.lag, 2);
    }

    #[test]
    fn affine_recovers_coefficients() {
        let sz = 400;
        let mu = 4.0;
        let beta = 12.0;

        let (mut x, y) = gen_affine_data(sz, mu, beta);
        add_constant(&mut x);

        let result = super::ols_fit(&x, &y).unwrap();
        assert_relative_eq!(result.params[0], beta, epsilon = 0.1);
        assert_relative_eq!(result.params[1], mu, epsilon = 0.1);
    }

    #[test]
    fn residuals_orthogonal_to_regressors() {
        let sz = 200;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (mut x, y) = gen_affine_data_with_whitenoise(&mut rng, sz, 1.0, 2.0);
        add_constant(&mut x);

        let result = super::ols_fit(&x, &y).unwrap();
        let xt_r = x.transpose() * &result.residuals;
        let bound = 1e-8 * (1.0f64).max(x.norm() * y.norm());
        assert!(xt_r.iter().all(|v| v.abs() < bound));
    }

    #[test]
    fn fitted_plus_residuals_is_y() {
        let sz = 50;
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let (mut x, y) = gen_affine_data_with_whitenoise(&mut rng, sz, -3.0, 0.5);
        add_constant(&mut x);

        let result = super::ols_fit(&x, &y).unwrap();
        for i in 0..sz {
            assert_relative_eq!(
                result.fitted_values[i] + result.residuals[i],
                y[i],
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn aic_bic_relationship() {
        let sz = 100;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (mut x, y) = gen_affine_data_with_whitenoise(&mut rng, sz, 0.0, 1.0);
        add_constant(&mut x);

        let result = super::ols_fit(&x, &y).unwrap();
        let k = result.lag as f64;
        let n = sz as f64;
        assert_relative_eq!(result.aic - result.bic, 2.0 * k - k * n.ln(), epsilon = 1e-8);
    }

    #[test]
    fn too_few_observations_fails() {
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 1.0]);
        assert!(super::ols_fit(&x, &y).is_err());
    }

    #[test]
    fn zero_columns_fails() {
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        let x = DMatrix::from_row_slice(3, 0, &[] as &[f64]);
        assert!(super::ols_fit(&x, &y).is_err());
    }
}
