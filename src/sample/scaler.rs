use rayon::prelude::*;

use crate::common::checker;
use super::feature_struct::Feature;
use super::sample_struct::Sample;


/// Standardizes features to zero mean and unit deviation.
/// `Standardizer` records the per-feature mean and standard deviation
/// of the sample it was fit on,
/// so that the same shift/scale can be applied to other samples
/// (e.g., a held-out test fold).
///
/// A feature with zero deviation is mapped to `0`.
///
/// # Example
/// ```no_run
/// use minilearn::{SampleReader, Standardizer};
///
/// let sample = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("price")
///     .read()
///     .unwrap();
///
/// let scaler = Standardizer::fit(&sample);
/// let scaled = scaler.transform(&sample);
/// ```
#[derive(Debug, Clone)]
pub struct Standardizer {
    mean: Vec<f64>,
    stddev: Vec<f64>,
}


impl Standardizer {
    /// Compute the per-feature mean and standard deviation of `sample`.
    pub fn fit(sample: &Sample) -> Self {
        checker::check_sample(sample);

        let (mean, stddev): (Vec<_>, Vec<_>) = sample.features()
            .par_iter()
            .map(|feat| {
                let (mean, variance) = feat.mean_and_variance();
                (mean, variance.sqrt())
            })
            .unzip();

        Self { mean, stddev, }
    }


    /// Standardize the features of `sample`.
    /// The target column is copied through untouched.
    pub fn transform(&self, sample: &Sample) -> Sample {
        let n_feature = sample.shape().1;
        assert_eq!(
            n_feature, self.mean.len(),
            "The sample does not match the fitted schema"
        );

        let features = sample.features()
            .iter()
            .zip(self.mean.iter().zip(&self.stddev))
            .map(|(feat, (&mean, &stddev))| {
                let mut scaled = Feature::new(feat.name());
                for &x in feat.iter() {
                    let z = if stddev == 0.0 {
                        0.0
                    } else {
                        (x - mean) / stddev
                    };
                    scaled.append(z);
                }
                scaled
            })
            .collect::<Vec<_>>();

        Sample {
            name_to_index: sample.name_to_index.clone(),
            features,
            target: sample.target.clone(),
            n_sample: sample.n_sample,
            n_feature: sample.n_feature,
        }
    }


    /// Fit to `sample` and standardize it in one call.
    pub fn fit_transform(sample: &Sample) -> Sample {
        Self::fit(sample).transform(sample)
    }


    /// The per-feature means recorded by `fit`.
    pub fn mean(&self) -> &[f64] {
        &self.mean[..]
    }


    /// The per-feature standard deviations recorded by `fit`.
    pub fn stddev(&self) -> &[f64] {
        &self.stddev[..]
    }
}
