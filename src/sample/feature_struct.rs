use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;

const BUF_SIZE: usize = 256;


/// A feature (column) of a sample.
/// `Feature` holds its name and a dense vector of `f64` values.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature name
    pub(super) name: String,
    /// Feature values
    pub(super) values: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Convert `polars::Series` into `Feature`.
    pub fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();

        let values = series.f64()
            .expect("The series is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .unwrap();

        Self { name, values, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns an iterator over feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.values.push(x);
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if `self.len()` is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    pub(crate) fn into_target(self) -> Vec<f64> {
        self.values
    }


    /// The number of categorical codes this feature can take.
    /// Feature values are assumed to be the codes
    /// `0, 1, ..., cardinality - 1`,
    /// so the cardinality is the maximal code plus one.
    pub(crate) fn cardinality(&self) -> usize {
        let max = self.values.iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() && max >= 0.0 { max as usize + 1 } else { 0 }
    }


    /// Compute the mean and the (population) variance of this feature.
    pub(crate) fn mean_and_variance(&self) -> (f64, f64) {
        let n = self.values.len() as f64;
        if n == 0.0 { return (0.0, 0.0); }

        let mean = self.values.iter().sum::<f64>() / n;
        let variance = self.values.iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / n;
        (mean, variance)
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.values[idx]
    }
}
