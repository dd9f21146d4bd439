use crate::Sample;
use crate::common::checker;


use super::linear_regression_regressor::LinearRegressionRegressor;


/// Default stopping tolerance on the change of the objective value.
const DEFAULT_TOLERANCE: f64 = 0.003;
/// The objective value is recomputed after this many updates.
const UPDATES_PER_CHECK: usize = 100;
/// Hard cap on the number of objective checks during the final
/// descent, so a fit with a hand-picked diverging step size
/// still terminates.
const MAX_CHECKS: usize = 1_000;
/// Update cap for each candidate step size during the search.
const PROBE_UPDATE_CAP: usize = 20_000;
/// The candidate step sizes are `3^i` for `i` in this range.
const ALPHA_GRID: std::ops::RangeInclusive<i32> = -17..=0;


/// The linear regression algorithm, fit by batch gradient descent.
///
/// The model is `y = w0 + w1 x1 + ... + wd xd`
/// and training minimizes half the mean squared error.
/// All coefficients start at `1`.
///
/// When no step size is set explicitly,
/// `fit` probes the grid `3^-17, ..., 3^0` and keeps the
/// step size reaching the smallest objective value.
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("price")
///     .read()
///     .unwrap();
///
/// let lr = LinearRegression::new()
///     .tolerance(1e-4);
/// let f = lr.fit(&sample);
///
/// println!("coefficients: {:?}", f.coefficients());
/// println!("training objective: {}", f.mse(&sample));
/// ```
pub struct LinearRegression {
    alpha: Option<f64>,
    tolerance: f64,
}


impl LinearRegression {
    /// Construct a new instance of `LinearRegression`.
    /// By default, the step size is searched automatically
    /// and the stopping tolerance is `0.003`.
    #[inline]
    pub fn new() -> Self {
        Self {
            alpha: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }


    /// Set the step size, skipping the automatic search.
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha.is_finite(),
            "The step size must be positive and finite"
        );
        self.alpha = Some(alpha);
        self
    }


    /// Set the stopping tolerance.
    /// The descent stops once the objective value changes
    /// by at most this amount between two consecutive checks.
    /// Default value is `0.003`.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        assert!(
            tolerance >= 0.0,
            "The tolerance must be non-negative"
        );
        self.tolerance = tolerance;
        self
    }


    /// Fit the linear model to `sample` and return the regressor.
    ///
    /// # Panics
    /// Panics when `sample` is empty, has no features,
    /// or its target is missing or non-finite.
    pub fn fit(&self, sample: &Sample) -> LinearRegressionRegressor {
        checker::check_sample(sample);
        checker::check_regression_target(sample);

        let alpha = match self.alpha {
            Some(alpha) => alpha,
            None => Self::find_alpha(sample),
        };

        let n_feature = sample.shape().1;
        let mut coefficients = vec![1.0; n_feature + 1];

        let mut previous = objective(sample, &coefficients);
        for _ in 0..MAX_CHECKS {
            for _ in 0..UPDATES_PER_CHECK {
                update(sample, &mut coefficients, alpha);
            }
            let current = objective(sample, &coefficients);

            let delta = (previous - current).abs();
            if delta.is_nan() || delta <= self.tolerance {
                break;
            }
            previous = current;
        }

        LinearRegressionRegressor::from_components(coefficients, alpha)
    }


    /// Probe every candidate step size on `sample` and return the one
    /// reaching the smallest objective value.
    ///
    /// Each candidate restarts from all-ones coefficients and runs
    /// until its objective stops improving, diverges to `NaN`,
    /// or the update cap is hit.
    fn find_alpha(sample: &Sample) -> f64 {
        let n_feature = sample.shape().1;

        let mut best_alpha = 3f64.powi(*ALPHA_GRID.start());
        let mut best_objective = f64::INFINITY;

        for i in ALPHA_GRID {
            let alpha = 3f64.powi(i);
            let mut coefficients = vec![1.0; n_feature + 1];

            // Tracks the smallest objective this candidate reached.
            let mut achieved = objective(sample, &coefficients);

            let mut updates = 0;
            while updates < PROBE_UPDATE_CAP {
                for _ in 0..UPDATES_PER_CHECK {
                    update(sample, &mut coefficients, alpha);
                }
                updates += UPDATES_PER_CHECK;

                let current = objective(sample, &coefficients);
                if current.is_nan() || current >= achieved {
                    break;
                }
                achieved = current;
            }

            if achieved < best_objective {
                best_objective = achieved;
                best_alpha = alpha;
            }
        }

        best_alpha
    }
}


impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}


/// The model output for row `row` of `sample`
/// under the given coefficients.
#[inline]
pub(super) fn predict_row(
    coefficients: &[f64],
    sample: &Sample,
    row: usize,
) -> f64
{
    let intercept = coefficients[0];
    sample.features()
        .iter()
        .zip(&coefficients[1..])
        .map(|(feature, w)| w * feature[row])
        .sum::<f64>()
        + intercept
}


/// Half the mean squared error of the given coefficients
/// over `sample`. This is the quantity the descent minimizes.
pub(super) fn objective(sample: &Sample, coefficients: &[f64]) -> f64 {
    let n_sample = sample.shape().0;
    let target = sample.target();

    (0..n_sample)
        .map(|row| {
            let residual = predict_row(coefficients, sample, row)
                - target[row];
            residual.powi(2)
        })
        .sum::<f64>()
        / (2.0 * n_sample as f64)
}


/// One batch gradient step.
/// The residuals are computed once from the pre-update coefficients,
/// so every coefficient moves simultaneously.
fn update(sample: &Sample, coefficients: &mut [f64], alpha: f64) {
    let n_sample = sample.shape().0;
    let target = sample.target();

    let residuals = (0..n_sample)
        .map(|row| predict_row(coefficients, sample, row) - target[row])
        .collect::<Vec<_>>();

    let m = n_sample as f64;

    let gradient = residuals.iter().sum::<f64>() / m;
    coefficients[0] -= alpha * gradient;

    for (j, feature) in sample.features().iter().enumerate() {
        let gradient = residuals.iter()
            .enumerate()
            .map(|(row, residual)| residual * feature[row])
            .sum::<f64>()
            / m;
        coefficients[j + 1] -= alpha * gradient;
    }
}
