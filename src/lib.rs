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

//! Augmented Dickey-Fuller unit-root test for time series data.
//!
//! # Examples
//!
//! ```rust
//! use adf_unit_root::prelude::adf::{adfuller, AdfRegression};
//! use adf_unit_root::prelude::nalgebra::DVector;
//!
//! let mut y = vec![0.0f64];
//! for i in 1..60 {
//!     y.push(y[i - 1] + if i % 2 == 0 { 0.3 } else { -0.3 });
//! }
//! let y = DVector::from_vec(y);
//!
//! let report = adfuller(&y, Some(1), AdfRegression::Constant, None).unwrap();
//! println!("adf statistic: {}", report.adfstat);
//! println!("p-value: {}", report.pvalue);
//! ```
//!
//! # References
//! - [Augmented Dickey-Fuller test](https://en.wikipedia.org/wiki/Augmented_Dickey–Fuller_test)
//! - [Statsmodels](https://github.com/statsmodels/statsmodels/blob/main/statsmodels/tsa/stattools.py)
//! - MacKinnon, J.G. (1994). "Approximate Asymptotic Distribution Functions for
//!   Unit-Root and Cointegration Tests". Journal of Business & Economic Statistics.
//! - MacKinnon, J.G. (2010). "Critical Values for Cointegration Tests". Queen's
//!   Economics Department Working Paper No. 1227.
//! - [Standard errors in OLS](https://lukesonnet.com/teaching/inference/200d_standard_errors.pdf)

use thiserror::Error;

pub(crate) mod adf;
pub(crate) mod autolag;
pub(crate) mod lagmat;
pub(crate) mod linalg;
pub(crate) mod mackinnon;
pub(crate) mod trend;

/// The public API.
pub mod prelude;

#[cfg(any(feature = "unstable", test))]
/// unstable utils API
pub mod utils;

#[cfg(any(feature = "unstable", test))]
/// unstable regression API
pub mod regression;

#[cfg(not(any(feature = "unstable", test)))]
pub(crate) mod regression;

/// The error type for this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An argument was out of its valid domain: wrong enumeration value,
    /// invalid shape, or an index out of range.
    #[error("invalid argument {param}: {value}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// String form of the offending value.
        value: String,
    },
    /// The input data itself cannot support the requested computation:
    /// a constant series, a zero-length series, or a rank-deficient
    /// regression matrix that neither inversion nor pseudoinversion can
    /// stabilize.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    /// A computation produced a non-finite value (NaN/Inf) that prevents
    /// further processing.
    #[error("numerical failure: {0}")]
    NumericalFailure(String),
    /// Failed to invert a matrix.
    #[error("failed to invert matrix: {0}")]
    FailedToInvertMatrix(String),
}
