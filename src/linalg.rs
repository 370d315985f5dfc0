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

//! Thin linear-algebra façade over `nalgebra`'s dense solvers.
//!
//! `ols_fit` needs to invert a symmetric positive semidefinite matrix that
//! is occasionally near-singular (collinear lags, short samples). Rather
//! than always falling back to the pseudoinverse - which is more
//! expensive - we check the condition number first and only pay for the
//! SVD-based pseudoinverse when the plain inverse would be unreliable.

use nalgebra::DMatrix;

use crate::Error;

/// Threshold above which `A` is considered near-singular and the
/// Moore-Penrose pseudoinverse is used instead of the direct inverse.
const CONDITION_NUMBER_THRESHOLD: f64 = 1e12;

/// Inverts a symmetric positive semidefinite matrix `a`, falling back to
/// the Moore-Penrose pseudoinverse when `a` is near-singular.
///
/// Near-singular is defined as a condition number (ratio of largest to
/// smallest singular value) exceeding [`CONDITION_NUMBER_THRESHOLD`].
pub(crate) fn inv_or_pinv(a: &DMatrix<f64>) -> Result<DMatrix<f64>, Error> {
    let svd = a.clone().svd(false, false);
    let singular_values = svd.singular_values;
    let sigma_max = singular_values
        .iter()
        .cloned()
        .fold(f64::MIN, f64::max);
    let sigma_min = singular_values
        .iter()
        .cloned()
        .fold(f64::MAX, f64::min);

    let near_singular = if sigma_min <= 0.0 {
        true
    } else {
        (sigma_max / sigma_min) > CONDITION_NUMBER_THRESHOLD
    };

    if near_singular {
        a.clone()
            .pseudo_inverse(1e-12)
            .map_err(|e| Error::FailedToInvertMatrix(format!("pinv failed: {e}")))
    } else {
        a.clone()
            .try_inverse()
            .ok_or_else(|| Error::FailedToInvertMatrix("A.T*A is singular".into()))
    }
}
