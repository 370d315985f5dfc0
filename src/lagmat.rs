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

//! Lag matrix construction.

use nalgebra::DMatrix;

use crate::Error;

/// Which rows of the scratch matrix to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Trim invalid observations in front.
    Forward,
    /// Trim invalid observations at the back.
    Backward,
    /// Trim invalid observations on both sides.
    Both,
    /// No trimming.
    None,
}

/// Whether the lag-0 (original) columns are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Original {
    /// Keep the original columns alongside the lags.
    In,
    /// Drop the original columns, keep only the lags.
    Ex,
}

/// Builds a matrix whose columns are `x` concatenated with its lags
/// `1..=maxlag`.
///
/// `x` has shape `(n, v)`. The returned matrix has, from left to right,
/// lag 0 (the original) followed by lags `1..=maxlag` when
/// `original == In`, or only lags `1..=maxlag` when `original == Ex`.
///
/// Fails when `maxlag >= n`.
pub fn lagmat(x: &DMatrix<f64>, maxlag: usize, trim: Trim, original: Original) -> Result<DMatrix<f64>, Error> {
    let nobs = x.nrows();
    let nvar = x.ncols();

    if maxlag >= nobs {
        return Err(Error::InvalidArgument {
            param: "maxlag",
            value: format!("{maxlag} must be < nobs ({nobs})"),
        });
    }

    let dropidx = if original == Original::Ex { nvar } else { 0 };

    let mut lm = DMatrix::<f64>::zeros(nobs + maxlag, nvar * (maxlag + 1));

    for k in 0..=maxlag {
        let r0 = maxlag - k;
        let c0 = (maxlag - k) * nvar;
        let mut block = lm.view_mut((r0, c0), (nobs, nvar));
        block.copy_from(x);
    }

    let startobs = match trim {
        Trim::None | Trim::Forward => 0,
        Trim::Backward | Trim::Both => maxlag,
    };
    let stopobs = match trim {
        Trim::None | Trim::Backward => lm.nrows(),
        Trim::Forward | Trim::Both => nobs,
    };

    let rows = stopobs - startobs;
    let cols = lm.ncols() - dropidx;
    Ok(lm.view((startobs, dropidx), (rows, cols)).into_owned())
}
