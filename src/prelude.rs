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

//! `adf_unit_root` is a library for testing for unit roots in time
//! series. This is the public API. Enjoy!

/// Re-export what we need from nalgebra
pub mod nalgebra {
    pub use nalgebra::{DMatrix, DVector};
}

/// Errors
pub use crate::Error;

/// The Augmented Dickey-Fuller test and its result type.
pub mod adf {
    pub use crate::adf::{adfuller, ADFResult, AdfRegression};
}

/// Automatic lag-length selection.
pub mod autolag {
    pub use crate::autolag::{auto_lag, AutoLagResult, IcMethod, ModelKind};
}

/// Lag-matrix construction.
pub mod lagmat {
    pub use crate::lagmat::{lagmat, Original, Trim};
}

/// Deterministic-trend augmentation.
pub mod trend {
    pub use crate::trend::{add_trend, Trend};
}

/// MacKinnon p-values and critical values.
pub mod mackinnon {
    pub use crate::mackinnon::{crit_value, p_value, MackinnonRegression};
}

/// Ordinary least squares.
pub mod regression {
    pub use crate::regression::{ols_fit, RegressionResult};
}
