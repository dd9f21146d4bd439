//! The k-nearest-neighbor regression algorithm.
use rayon::prelude::*;

use crate::{Regressor, Sample};
use crate::common::checker;
use super::distance::*;

use std::cmp::Ordering;
use std::fmt;
use std::collections::BinaryHeap;


/// The default number of neighbors.
pub const DEFAULT_K: usize = 5;


/// How the targets of the k nearest neighbors are blended
/// into a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightingScheme {
    /// The plain mean of the neighbor targets.
    Unweighted,
    /// Neighbors weighted by their inverse squared distance.
    /// An exact match (distance zero) short-circuits
    /// to that neighbor's target.
    Weighted,
}


impl fmt::Display for WeightingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unweighted => "Unweighted",
            Self::Weighted => "Weighted (1 / d^2)",
        };

        write!(f, "{name}")
    }
}


/// k-nearest-neighbor regression over a stored training sample.
///
/// `Knn` is a lazy learner:
/// construction just borrows the training sample,
/// and every prediction scans it for the `k` closest rows.
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// let train = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("price")
///     .read()
///     .unwrap();
///
/// let knn = Knn::new(&train)
///     .k(7)
///     .distance(Distance::Minkowski(1.0))
///     .weighting_scheme(WeightingScheme::Weighted)
///     .distance_check(DistanceCheck::Efficient);
///
/// let prediction = knn.predict(&train, 0);
/// println!("predicted {prediction}");
/// ```
pub struct Knn<'a> {
    sample: &'a Sample,
    k: usize,
    distance: Distance,
    scheme: WeightingScheme,
    check: DistanceCheck,
}


/// A candidate training row together with its distance to the query.
/// Ordered by distance so that a `BinaryHeap` keeps the worst
/// retained neighbor on top.
struct Neighbor {
    distance: f64,
    row: usize,
}


impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}


impl Eq for Neighbor {}


impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}


impl<'a> Knn<'a> {
    /// Construct a new instance of `Knn`
    /// predicting from the rows of `sample`.
    /// By default, `Knn` sets the parameters as follows;
    /// ```text
    /// k: DEFAULT_K == 5,
    /// distance: Distance::Minkowski(2.0),
    /// weighting_scheme: WeightingScheme::Unweighted,
    /// distance_check: DistanceCheck::Regular,
    /// ```
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        checker::check_sample(sample);
        checker::check_regression_target(sample);

        Self {
            sample,
            k: DEFAULT_K,
            distance: Distance::Minkowski(2.0),
            scheme: WeightingScheme::Unweighted,
            check: DistanceCheck::Regular,
        }
    }


    /// Set the number of neighbors.
    /// Default value is `5.`
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        assert!(k > 0, "The number of neighbors must be positive");
        self.k = k;
        self
    }


    /// Set the distance measure.
    /// Default value is `Distance::Minkowski(2.0)`.
    #[inline]
    pub fn distance(mut self, distance: Distance) -> Self {
        if let Distance::Minkowski(p) = distance {
            assert!(p >= 1.0, "The Minkowski order must be at least 1");
        }
        self.distance = distance;
        self
    }


    /// Set the weighting scheme.
    /// Default value is `WeightingScheme::Unweighted`.
    #[inline]
    pub fn weighting_scheme(mut self, scheme: WeightingScheme) -> Self {
        self.scheme = scheme;
        self
    }


    /// Set the distance check.
    /// Default value is `DistanceCheck::Regular`.
    #[inline]
    pub fn distance_check(mut self, check: DistanceCheck) -> Self {
        self.check = check;
        self
    }


    /// The mean absolute difference between prediction and target
    /// over `sample`.
    pub fn average_error(&self, sample: &Sample) -> f64 {
        checker::check_sample(sample);
        checker::check_regression_target(sample);

        let n_sample = sample.shape().0 as f64;
        let target = sample.target();

        self.predict_all(sample)
            .into_iter()
            .zip(target)
            .map(|(prediction, y)| (prediction - y).abs())
            .sum::<f64>()
            / n_sample
    }


    /// The (up to) `k` training rows closest to row `row` of `sample`.
    /// When the training sample holds fewer than `k` rows,
    /// all of them are neighbors.
    fn nearest_neighbors(&self, sample: &Sample, row: usize)
        -> Vec<Neighbor>
    {
        assert_eq!(
            self.sample.shape().1, sample.shape().1,
            "The query sample does not match the training schema"
        );

        let n_train = self.sample.shape().0;
        let mut heap: BinaryHeap<Neighbor> = BinaryHeap::with_capacity(self.k + 1);

        for i in 0..n_train {
            let cutoff = if heap.len() == self.k {
                heap.peek().map_or(f64::INFINITY, |worst| worst.distance)
            } else {
                f64::INFINITY
            };

            let distance = row_distance(
                self.distance, self.check,
                self.sample, i,
                sample, row,
                cutoff,
            );

            if heap.len() < self.k {
                heap.push(Neighbor { distance, row: i });
            } else if distance < cutoff {
                heap.pop();
                heap.push(Neighbor { distance, row: i });
            }
        }

        heap.into_vec()
    }


    /// Blend the neighbor targets according to the weighting scheme.
    fn blend(&self, neighbors: &[Neighbor]) -> f64 {
        let target = self.sample.target();

        match self.scheme {
            WeightingScheme::Unweighted => {
                neighbors.iter()
                    .map(|n| target[n.row])
                    .sum::<f64>()
                    / neighbors.len() as f64
            },
            WeightingScheme::Weighted => {
                let mut numerator = 0.0;
                let mut denominator = 0.0;
                for n in neighbors {
                    if n.distance == 0.0 {
                        return target[n.row];
                    }
                    let w = 1.0 / n.distance.powi(2);
                    numerator += w * target[n.row];
                    denominator += w;
                }
                numerator / denominator
            },
        }
    }
}


impl Regressor for Knn<'_> {
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        let neighbors = self.nearest_neighbors(sample, row);
        self.blend(&neighbors)
    }


    fn predict_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
