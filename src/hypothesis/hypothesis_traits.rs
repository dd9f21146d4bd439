use crate::Sample;


/// A trait that defines the behavior of classifiers.
/// You only need to implement the `predict` method.
/// Class labels are coded as the integers `0, 1, ...`.
pub trait Classifier {
    /// Predicts the label of the i'th row of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> i64;


    /// Predicts the labels of all rows of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}


/// A trait that defines the behavior of regressors.
/// You only need to implement the `predict` method.
pub trait Regressor {
    /// Predicts the target value of the i'th row of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the target values of all rows of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
