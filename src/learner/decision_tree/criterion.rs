//! Defines the splitting criteria for growing the decision tree.
use std::fmt;

use crate::sample::Feature;


/// Class counts of a subset of rows.
/// All impurity and significance computations run over these counts.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct ClassCounts {
    pub(super) zeros: usize,
    pub(super) ones: usize,
}


impl ClassCounts {
    /// Count the labels of `rows`.
    pub(super) fn from_rows(rows: &[usize], target: &[f64]) -> Self {
        let mut counts = Self::default();
        for &i in rows {
            counts.tally(target[i]);
        }
        counts
    }


    /// Record one label.
    pub(super) fn tally(&mut self, label: f64) {
        if label == 1.0 { self.ones += 1; } else { self.zeros += 1; }
    }


    /// The number of counted rows.
    pub(super) fn total(&self) -> usize {
        self.zeros + self.ones
    }


    /// The majority class.
    /// An exact 50/50 tie resolves to class `0`.
    pub(super) fn majority(&self) -> i64 {
        if self.ones > self.zeros { 1 } else { 0 }
    }


    /// Whether all counted rows carry the same label.
    pub(super) fn is_pure(&self) -> bool {
        self.zeros == 0 || self.ones == 0
    }
}


/// Splitting criteria for growing decision tree.
/// * `Criterion::Entropy` minimizes entropic impurity.
/// * `Criterion::Gini` minimizes the Gini index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Binary entropy function.
    Entropy,
    /// Gini index.
    Gini,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "Entropy",
            Self::Gini => "Gini index",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// The impurity of a subset with the given class counts.
    /// An empty subset has impurity `0`,
    /// and so does a subset where one class fraction vanishes.
    #[inline]
    pub(super) fn impurity(&self, counts: ClassCounts) -> f64 {
        let total = counts.total() as f64;
        if total == 0.0 { return 0.0; }

        let p0 = counts.zeros as f64 / total;
        let p1 = counts.ones as f64 / total;

        match self {
            Self::Entropy => {
                if p0 == 0.0 || p1 == 0.0 {
                    0.0
                } else {
                    -(p0 * p0.log2() + p1 * p1.log2())
                }
            },
            Self::Gini => 1.0 - p0.powi(2) - p1.powi(2),
        }
    }


    /// The gain of splitting `rows` by `feature`:
    /// the parent impurity minus the size-weighted impurity
    /// of the induced subsets.
    /// The subsets range over the whole code range `0..cardinality`,
    /// so codes absent from `rows` contribute zero weight.
    pub(super) fn gain(
        &self,
        parent_impurity: f64,
        feature: &Feature,
        rows: &[usize],
        target: &[f64],
        cardinality: usize,
    ) -> f64
    {
        let mut counts = vec![ClassCounts::default(); cardinality];
        for &i in rows {
            counts[feature[i] as usize].tally(target[i]);
        }

        let n = rows.len() as f64;
        let weighted = counts.into_iter()
            .map(|c| (c.total() as f64 / n) * self.impurity(c))
            .sum::<f64>();

        parent_impurity - weighted
    }
}
