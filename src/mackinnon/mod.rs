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

//! MacKinnon p-values and finite-sample critical values for the ADF
//! test statistic.

mod tables;

use statrs::function::erf::erf;

use crate::Error;

/// Regression specification the MacKinnon tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MackinnonRegression {
    /// No constant, no trend.
    Nc,
    /// Constant only.
    C,
    /// Constant and trend.
    Ct,
    /// Constant, trend and quadratic trend.
    Ctt,
}

/// Standard normal CDF, `Phi(z) = 1/2 * (1 + erf(z / sqrt(2)))`.
fn norm_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Evaluates a polynomial given in ascending-power order at `x`:
/// `coeffs[0] + coeffs[1]*x + coeffs[2]*x^2 + ...`.
fn polyval_ascending(coeffs: &[f64], x: f64) -> f64 {
    let mut result = 0.0;
    let mut power = 1.0;
    for c in coeffs {
        result += c * power;
        power *= x;
    }
    result
}

struct PvalueTables {
    tau_star: &'static [f64; 6],
    tau_min: &'static [f64; 6],
    tau_max: &'static [f64; 6],
    smallp: &'static [[f64; 3]; 6],
    largep: &'static [[f64; 4]; 6],
}

fn pvalue_tables(regression: MackinnonRegression) -> PvalueTables {
    use tables::*;
    match regression {
        MackinnonRegression::Nc => PvalueTables {
            tau_star: &TAU_STAR_NC,
            tau_min: &TAU_MIN_NC,
            tau_max: &TAU_MAX_NC,
            smallp: &TAU_NC_SMALLP,
            largep: &TAU_NC_LARGEP,
        },
        MackinnonRegression::C => PvalueTables {
            tau_star: &TAU_STAR_C,
            tau_min: &TAU_MIN_C,
            tau_max: &TAU_MAX_C,
            smallp: &TAU_C_SMALLP,
            largep: &TAU_C_LARGEP,
        },
        MackinnonRegression::Ct => PvalueTables {
            tau_star: &TAU_STAR_CT,
            tau_min: &TAU_MIN_CT,
            tau_max: &TAU_MAX_CT,
            smallp: &TAU_CT_SMALLP,
            largep: &TAU_CT_LARGEP,
        },
        MackinnonRegression::Ctt => PvalueTables {
            tau_star: &TAU_STAR_CTT,
            tau_min: &TAU_MIN_CTT,
            tau_max: &TAU_MAX_CTT,
            smallp: &TAU_CTT_SMALLP,
            largep: &TAU_CTT_LARGEP,
        },
    }
}

/// Maps an ADF test statistic to a p-value using the MacKinnon (1994)
/// response-surface coefficients.
///
/// `n` is the co-integration rank, valid in `1..=6`.
pub fn p_value(teststat: f64, regression: MackinnonRegression, n: usize) -> Result<f64, Error> {
    let t = pvalue_tables(regression);
    let idx = n.checked_sub(1).filter(|&i| i < t.tau_star.len()).ok_or_else(|| {
        Error::InvalidArgument {
            param: "n",
            value: format!("{n} (must be in 1..={})", t.tau_star.len()),
        }
    })?;

    if teststat > t.tau_max[idx] {
        return Ok(1.0);
    }
    if teststat < t.tau_min[idx] {
        return Ok(0.0);
    }

    let (raw, scaling): (&[f64], &[f64]) = if teststat <= t.tau_star[idx] {
        (&t.smallp[idx], &tables::SMALL_SCALING)
    } else {
        (&t.largep[idx], &tables::LARGE_SCALING)
    };
    let coeffs: Vec<f64> = raw.iter().zip(scaling).map(|(c, s)| c * s).collect();

    Ok(norm_cdf(polyval_ascending(&coeffs, teststat)))
}

struct CritTable {
    rows: &'static [[[f64; 4]; 3]],
}

fn crit_table(regression: MackinnonRegression) -> CritTable {
    use tables::*;
    match regression {
        MackinnonRegression::Nc => CritTable { rows: &TAU_NC_2010 },
        MackinnonRegression::C => CritTable { rows: &TAU_C_2010 },
        MackinnonRegression::Ct => CritTable { rows: &TAU_CT_2010 },
        MackinnonRegression::Ctt => CritTable { rows: &TAU_CTT_2010 },
    }
}

/// Finite-sample critical values `[1%, 5%, 10%]` for the ADF test
/// statistic with co-integration rank `n` (valid range depends on
/// `regression`; up to `1..=12` for `c`/`ct`/`ctt`, `1` only for `nc`).
///
/// `nobs = None` returns the asymptotic critical values.
pub fn crit_value(n: usize, regression: MackinnonRegression, nobs: Option<usize>) -> Result<[f64; 3], Error> {
    let table = crit_table(regression);
    let idx = n.checked_sub(1).filter(|&i| i < table.rows.len()).ok_or_else(|| {
        Error::InvalidArgument {
            param: "n",
            value: format!("{n} (must be in 1..={})", table.rows.len()),
        }
    })?;

    let row = &table.rows[idx];
    let mut out = [0.0; 3];
    match nobs {
        None => {
            for (i, coeffs) in row.iter().enumerate() {
                out[i] = coeffs[0];
            }
        }
        Some(nobs) => {
            let x = 1.0 / nobs as f64;
            for (i, coeffs) in row.iter().enumerate() {
                out[i] = polyval_ascending(coeffs, x);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{crit_value, p_value, MackinnonRegression};
    use crate::mackinnon::tables::{TAU_MAX_C, TAU_MIN_C, TAU_STAR_C};

    #[test]
    fn clamps_above_tau_max() {
        let stat = TAU_MAX_C[0] + 1.0;
        assert_eq!(p_value(stat, MackinnonRegression::C, 1).unwrap(), 1.0);
    }

    #[test]
    fn clamps_below_tau_min() {
        let stat = TAU_MIN_C[0] - 1.0;
        assert_eq!(p_value(stat, MackinnonRegression::C, 1).unwrap(), 0.0);
    }

    #[test]
    fn smallp_largep_branches_agree_near_tau_star() {
        let stat = TAU_STAR_C[0];
        let below = p_value(stat - 1e-6, MackinnonRegression::C, 1).unwrap();
        let above = p_value(stat + 1e-6, MackinnonRegression::C, 1).unwrap();
        assert_relative_eq!(below, above, epsilon = 1e-4);
    }

    #[test]
    fn invalid_n_fails() {
        assert!(p_value(-2.0, MackinnonRegression::C, 7).is_err());
        assert!(crit_value(7, MackinnonRegression::Nc, None).is_err());
    }

    #[test]
    fn asymptotic_matches_first_coefficient() {
        let crit = crit_value(1, MackinnonRegression::C, None).unwrap();
        assert_relative_eq!(crit[1], -2.86154, epsilon = 1e-10);
    }

    #[test]
    fn finite_sample_converges_to_asymptotic_for_large_nobs() {
        let asymptotic = crit_value(1, MackinnonRegression::C, None).unwrap();
        let finite = crit_value(1, MackinnonRegression::C, Some(1_000_000)).unwrap();
        for i in 0..3 {
            assert_relative_eq!(asymptotic[i], finite[i], epsilon = 1e-3);
        }
    }

    #[test]
    fn five_percent_near_500_matches_table_1() {
        // cross-checked against the dickeyfuller approximation for
        // constant-only, n = 500.
        let crit = crit_value(1, MackinnonRegression::C, Some(500)).unwrap();
        assert_relative_eq!(crit[1], -2.867, epsilon = 0.02);
    }
}
