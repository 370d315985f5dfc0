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

//! The Augmented Dickey-Fuller test.
//!
//! Composes [`crate::lagmat`], [`crate::trend`], [`crate::autolag`] and
//! [`crate::regression`] the way `statsmodels.tsa.stattools.adfuller`
//! does, then looks the final t-value up in the MacKinnon tables.

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};

use crate::autolag::{auto_lag, IcMethod, ModelKind};
use crate::lagmat::{lagmat, Original, Trim};
use crate::mackinnon::{crit_value, p_value, MackinnonRegression};
use crate::regression::ols_fit;
use crate::trend::{add_trend, Trend};
use crate::Error;

/// Constant/trend regressors to include in the ADF regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdfRegression {
    /// No constant, no trend.
    NoConstantNoTrend,
    /// Constant only.
    Constant,
    /// Constant and trend.
    ConstantAndTrend,
    /// Constant, trend and quadratic trend.
    ConstantAndTrendSquared,
}

impl AdfRegression {
    fn ntrend(self) -> usize {
        match self {
            AdfRegression::NoConstantNoTrend => 0,
            AdfRegression::Constant => 1,
            AdfRegression::ConstantAndTrend => 2,
            AdfRegression::ConstantAndTrendSquared => 3,
        }
    }

    fn trend(self) -> Option<Trend> {
        match self {
            AdfRegression::NoConstantNoTrend => None,
            AdfRegression::Constant => Some(Trend::Constant),
            AdfRegression::ConstantAndTrend => Some(Trend::ConstantAndTrend),
            AdfRegression::ConstantAndTrendSquared => Some(Trend::ConstantAndTrendSquared),
        }
    }

    fn mackinnon(self) -> MackinnonRegression {
        match self {
            AdfRegression::NoConstantNoTrend => MackinnonRegression::Nc,
            AdfRegression::Constant => MackinnonRegression::C,
            AdfRegression::ConstantAndTrend => MackinnonRegression::Ct,
            AdfRegression::ConstantAndTrendSquared => MackinnonRegression::Ctt,
        }
    }
}

/// The result of [`adfuller`].
#[derive(Debug, Clone)]
pub struct ADFResult {
    /// The ADF test statistic - the t-value on the lagged level term.
    pub adfstat: f64,
    /// p-value from the MacKinnon (1994) response surface.
    pub pvalue: f64,
    /// The lag order actually used.
    pub used_lag: usize,
    /// Number of observations used in the final regression.
    pub nobs: usize,
    /// Critical values keyed by `"1%"`, `"5%"`, `"10%"`.
    pub crit_values: HashMap<&'static str, f64>,
    /// Information criterion value at the selected lag, or `-1.0` when
    /// `autolag` was not used.
    pub icbest: f64,
}

fn diff(x: &DVector<f64>) -> DVector<f64> {
    DVector::from_iterator(x.len() - 1, (1..x.len()).map(|i| x[i] - x[i - 1]))
}

/// Rebuilds `xdall`'s first column with the lagged level series and
/// returns the trailing slice of `xdiff` of matching length, i.e. steps
/// 5 and 6 of the ADF algorithm.
fn relevel(x: &DVector<f64>, xdiff: &DVector<f64>, maxlag: usize) -> Result<(DMatrix<f64>, DVector<f64>, usize), Error> {
    let xdiff_mat = DMatrix::from_column_slice(xdiff.len(), 1, xdiff.as_slice());
    let mut xdall = lagmat(&xdiff_mat, maxlag, Trim::Both, Original::In)?;
    let nobs = xdall.nrows();

    let n = x.len();
    let level = x.rows(n - nobs - 1, nobs).into_owned();
    xdall.column_mut(0).copy_from(&level);

    let xdshort = xdiff.rows(xdiff.len() - nobs, nobs).into_owned();

    Ok((xdall, xdshort, nobs))
}

/// Runs the Augmented Dickey-Fuller unit-root test on `x`.
///
/// `maxlag = None` picks `ceil(12 * (n/100)^(1/4))`, clipped to
/// `n/2 - ntrend - 1`. `autolag = None` uses the fixed `maxlag`;
/// otherwise the lag length is chosen by [`crate::autolag::auto_lag`].
///
/// Fails with [`Error::DegenerateInput`] if `x` is constant, or
/// [`Error::InvalidArgument`] if the sample is too short for the
/// requested regression.
pub fn adfuller(
    x: &DVector<f64>,
    maxlag: Option<usize>,
    regression: AdfRegression,
    autolag: Option<IcMethod>,
) -> Result<ADFResult, Error> {
    let n = x.len();
    if n == 0 {
        return Err(Error::DegenerateInput("series is empty".into()));
    }

    let xmin = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let xmax = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if xmin == xmax {
        return Err(Error::DegenerateInput("series is constant".into()));
    }

    let ntrend = regression.ntrend();

    let maxlag = match maxlag {
        Some(m) => m,
        None => {
            let guess = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as i64;
            let bound = n as i64 / 2 - ntrend as i64 - 1;
            let clipped = guess.min(bound);
            if clipped < 0 {
                return Err(Error::InvalidArgument {
                    param: "x",
                    value: format!("{n} observations is too short for regression with ntrend = {ntrend}"),
                });
            }
            clipped as usize
        }
    };

    let greene_schwert_bound = n as i64 / 2 - ntrend as i64 - 1;
    if maxlag as i64 > greene_schwert_bound {
        log::warn!(
            "maxlag {maxlag} exceeds the Greene/Schwert bound {greene_schwert_bound} for this sample size"
        );
    }

    let xdiff = diff(x);
    let (mut xdall, mut xdshort, mut nobs) = relevel(x, &xdiff, maxlag)?;

    let (used_lag, icbest) = if let Some(method) = autolag {
        let full_rhs = match regression.trend() {
            Some(trend) => add_trend(&xdall, trend, true),
            None => xdall.clone(),
        };
        let start_lag = full_rhs.ncols() - xdall.ncols() + 1;

        let result = auto_lag(ModelKind::Ols, &full_rhs, &xdshort, start_lag, maxlag, method)?;
        let best_lag = result.best_lag - start_lag;

        let (new_xdall, new_xdshort, new_nobs) = relevel(x, &xdiff, best_lag)?;
        xdall = new_xdall;
        xdshort = new_xdshort;
        nobs = new_nobs;

        (best_lag, result.icbest)
    } else {
        (maxlag, -1.0)
    };

    let rhs_cols = xdall.columns(0, used_lag + 1).into_owned();
    let rhs = match regression.trend() {
        Some(trend) => add_trend(&rhs_cols, trend, false),
        None => rhs_cols,
    };

    let fit = ols_fit(&rhs, &xdshort)?;
    let adfstat = fit.t_values[0];

    let mackinnon_regression = regression.mackinnon();
    let pvalue = p_value(adfstat, mackinnon_regression, 1)?;
    let crit = crit_value(1, mackinnon_regression, Some(nobs))?;

    let mut crit_values = HashMap::new();
    crit_values.insert("1%", crit[0]);
    crit_values.insert("5%", crit[1]);
    crit_values.insert("10%", crit[2]);

    Ok(ADFResult {
        adfstat,
        pvalue,
        used_lag,
        nobs,
        crit_values,
        icbest,
    })
}
