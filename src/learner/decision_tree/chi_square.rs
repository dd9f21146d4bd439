//! Chi-square significance testing for candidate splits.
use std::fmt;

use super::criterion::ClassCounts;


/// Critical values of the chi-square distribution.
/// Rows correspond to the degrees of freedom `2..=12`;
/// columns to the significance levels
/// `p = 1, 0.75, 0.5, 0.25, 0.05, 0.005`.
const CRITICAL_VALUES: [[f64; 6]; 11] = [
    [0.0, 0.102,  0.455,  1.323,  3.841,  7.879],
    [0.0, 0.575,  1.386,  2.773,  5.991, 10.597],
    [0.0, 1.213,  2.366,  4.108,  7.815, 12.838],
    [0.0, 1.923,  3.357,  5.385,  9.488, 14.860],
    [0.0, 2.675,  4.351,  6.626, 11.070, 16.750],
    [0.0, 3.455,  5.348,  7.841, 12.592, 18.548],
    [0.0, 4.255,  6.346,  9.037, 14.067, 20.278],
    [0.0, 5.071,  7.344, 10.219, 15.507, 21.955],
    [0.0, 5.899,  8.343, 11.389, 16.919, 23.589],
    [0.0, 6.737,  9.342, 12.549, 18.307, 25.188],
    [0.0, 7.584, 10.341, 13.701, 19.675, 26.757],
];


/// The significance level of the chi-square test
/// applied to every candidate split.
/// The variants match the columns of the built-in critical-value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceLevel {
    /// `p = 1`. Every critical value is zero,
    /// so no split is ever rejected.
    P100,
    /// `p = 0.75`.
    P75,
    /// `p = 0.5`.
    P50,
    /// `p = 0.25`.
    P25,
    /// `p = 0.05`.
    P05,
    /// `p = 0.005`.
    P005,
}


impl SignificanceLevel {
    /// All levels, ordered from most to least permissive.
    /// Handy for sweeping over the pruning strength.
    pub const ALL: [Self; 6] = [
        Self::P100,
        Self::P75,
        Self::P50,
        Self::P25,
        Self::P05,
        Self::P005,
    ];


    /// The numeric significance level.
    pub fn value(self) -> f64 {
        match self {
            Self::P100 => 1.0,
            Self::P75 => 0.75,
            Self::P50 => 0.5,
            Self::P25 => 0.25,
            Self::P05 => 0.05,
            Self::P005 => 0.005,
        }
    }


    /// The column of `CRITICAL_VALUES` this level reads.
    fn column(self) -> usize {
        match self {
            Self::P100 => 0,
            Self::P75 => 1,
            Self::P50 => 2,
            Self::P25 => 3,
            Self::P05 => 4,
            Self::P005 => 5,
        }
    }


    /// Whether a split producing `n_children` non-empty children
    /// with the given statistic passes the significance test.
    ///
    /// A split is rejected iff the statistic falls strictly below the
    /// critical value for `df = n_children - 1`.
    /// Degrees of freedom outside the table
    /// (fewer than 3 or more than 13 children)
    /// cannot be assessed and are admitted.
    pub(super) fn admits(self, n_children: usize, statistic: f64) -> bool {
        let df = n_children.saturating_sub(1);
        match df.checked_sub(2).and_then(|row| CRITICAL_VALUES.get(row)) {
            Some(row) => statistic >= row[self.column()],
            None => true,
        }
    }
}


impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P100 => write!(f, "p = 1 (no pruning)"),
            level => write!(f, "p = {}", level.value()),
        }
    }
}


/// The chi-square statistic of a candidate split.
/// `parent` holds the class counts before the split and `children`
/// the counts of the children that received at least one row.
///
/// Each child with `D` rows and class counts `Y0`, `Y1` contributes
/// `(Y0 - D*P0)^2 / (D*P0) + (Y1 - D*P1)^2 / (D*P1)`,
/// where `P0`, `P1` are the parent class fractions.
/// A child whose expected mass `D*P0` or `D*P1` vanishes is skipped.
pub(super) fn statistic(parent: ClassCounts, children: &[ClassCounts]) -> f64 {
    let n = parent.total() as f64;
    let p0 = parent.zeros as f64 / n;
    let p1 = 1.0 - p0;

    children.iter()
        .map(|child| {
            let d = child.total() as f64;
            let e0 = d * p0;
            let e1 = d * p1;
            if e0 == 0.0 || e1 == 0.0 { return 0.0; }

            let y0 = child.zeros as f64;
            let y1 = child.ones as f64;
            (y0 - e0).powi(2) / e0 + (y1 - e1).powi(2) / e1
        })
        .sum()
}
