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

//! Example of the Augmented Dickey-Fuller test
use adf_unit_root::prelude::adf::{adfuller, AdfRegression};
use adf_unit_root::prelude::nalgebra::DVector;

fn main() {
    let y = DVector::from_row_slice(&[
        -0.89642362f64,
        0.3222552,
        -1.96581989,
        -1.10012936,
        -1.3682928,
        1.17239875,
        2.19561259,
        2.54295031,
        2.05530587,
        1.13212955,
        -0.42968979,
    ]);

    // fixed lag, constant-only regression
    let lag = 1;
    let regression = AdfRegression::Constant;
    let report = adfuller(&y, Some(lag), regression, None).unwrap();

    println!("t-statistic: {}", report.adfstat);
    println!("p-value: {}", report.pvalue);
    println!("used lag: {}", report.used_lag);
    println!("nobs: {}", report.nobs);
    println!("critical values: {:?}", report.crit_values);

    // with automatic lag selection via AIC, let adfuller pick the lag
    let report = adfuller(
        &y,
        None,
        regression,
        Some(adf_unit_root::prelude::autolag::IcMethod::Aic),
    )
    .unwrap();
    println!("autolag used lag: {}, icbest: {}", report.used_lag, report.icbest);
}
