use serde::{Serialize, Deserialize};


use crate::{Regressor, Sample};


use super::gradient_descent::{objective, predict_row};


/// The linear model obtained by `LinearRegression::fit`.
///
/// Predictions are `w0 + w1 x1 + ... + wd xd`,
/// where `coefficients() == [w0, w1, ..., wd]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionRegressor {
    coefficients: Vec<f64>,
    alpha: f64,
}


impl LinearRegressionRegressor {
    #[inline]
    pub(super) fn from_components(coefficients: Vec<f64>, alpha: f64)
        -> Self
    {
        Self { coefficients, alpha }
    }


    /// The learned coefficients, intercept first.
    /// The length is the number of features plus one.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }


    /// The step size the descent ran with,
    /// either the one set on `LinearRegression`
    /// or the one found by the automatic search.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }


    /// Half the mean squared error of `self` over `sample`.
    /// This is the objective value the descent minimized.
    pub fn mse(&self, sample: &Sample) -> f64 {
        objective(sample, &self.coefficients)
    }
}


impl Regressor for LinearRegressionRegressor {
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        predict_row(&self.coefficients, sample, row)
    }
}
