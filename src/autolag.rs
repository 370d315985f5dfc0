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

//! Automatic lag-length selection by repeated OLS fits.

use nalgebra::{DMatrix, DVector};

use crate::regression::ols_fit;
use crate::Error;

/// Regression model used while selecting the lag length. Only OLS
/// exists today; this is a tagged variant so a second model can be
/// added later without reintroducing virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Ordinary least squares.
    Ols,
}

/// Information criterion used to compare candidate lag lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcMethod {
    /// Minimize the Akaike information criterion.
    Aic,
    /// Minimize the Bayesian information criterion.
    Bic,
    /// Walk down from the largest lag until the last t-value is
    /// significant at the 5% one-sided normal critical value.
    TStat,
}

/// 5% one-sided normal critical value used by the `t-stat` method.
const T_STAT_CRITICAL_VALUE: f64 = 1.6448536269514722;

/// Result of [`auto_lag`].
#[derive(Debug, Clone, Copy)]
pub struct AutoLagResult {
    /// The criterion value (AIC, BIC, or |t|) at the selected lag.
    pub icbest: f64,
    /// The selected lag, counted in the same units as `start_lag`/`max_lag`
    /// (i.e. the column count used for that fit, not yet adjusted for
    /// `start_lag`).
    pub best_lag: usize,
}

/// Fits `model` for every lag in `[start_lag, start_lag + max_lag]`
/// (inclusive), using the first `lag` columns of `x`, and selects the
/// best one according to `method`.
///
/// Fails on unknown method (there is none in this closed enum, so this
/// can only fail if one of the underlying OLS fits fails).
pub fn auto_lag(
    model: ModelKind,
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    start_lag: usize,
    max_lag: usize,
    method: IcMethod,
) -> Result<AutoLagResult, Error> {
    let ModelKind::Ols = model;

    match method {
        IcMethod::Aic | IcMethod::Bic => {
            let mut best: Option<(f64, usize)> = None;
            for lag in start_lag..=(start_lag + max_lag) {
                let xi = x.columns(0, lag).into_owned();
                let fit = ols_fit(&xi, y)?;
                let ic = match method {
                    IcMethod::Aic => fit.aic,
                    IcMethod::Bic => fit.bic,
                    IcMethod::TStat => unreachable!(),
                };
                let better = match best {
                    None => true,
                    Some((best_ic, _)) => ic < best_ic,
                };
                if better {
                    best = Some((ic, fit.lag));
                }
            }
            let (icbest, best_lag) = best.expect("range is non-empty");
            Ok(AutoLagResult { icbest, best_lag })
        }
        IcMethod::TStat => {
            let mut icbest = 0.0;
            let mut best_lag = start_lag;
            for lag in (start_lag..=(start_lag + max_lag)).rev() {
                let xi = x.columns(0, lag).into_owned();
                let fit = ols_fit(&xi, y)?;
                let last_t = fit.t_values[fit.t_values.len() - 1].abs();
                icbest = last_t;
                best_lag = lag;
                if last_t >= T_STAT_CRITICAL_VALUE {
                    break;
                }
            }
            Ok(AutoLagResult { icbest, best_lag })
        }
    }
}
