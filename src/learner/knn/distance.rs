//! Distance measures between sample rows.
use std::fmt;

use crate::Sample;


/// The distance between two feature vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// The Minkowski distance of order `p`:
    /// the p-th root of the summed coordinate differences
    /// `|x_i - y_i|^p`.
    /// `Minkowski(1.0)` is the Manhattan distance and
    /// `Minkowski(2.0)` the Euclidean one.
    Minkowski(f64),
    /// The maximal absolute coordinate difference,
    /// i.e. the limit of the Minkowski distance for large `p`.
    Chebyshev,
}


impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minkowski(p) => write!(f, "Minkowski (p = {p})"),
            Self::Chebyshev => write!(f, "Chebyshev (L-infinity)"),
        }
    }
}


/// How a single distance evaluation proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceCheck {
    /// Scan every coordinate.
    Regular,
    /// Abandon a candidate as soon as its partial distance already
    /// exceeds the cutoff handed in by the neighbor search
    /// (the current k-th best distance).
    /// The abandoned value is a lower bound on the true distance
    /// that still exceeds the cutoff,
    /// so the resulting neighbor set never changes.
    Efficient,
}


/// The distance between row `i` of `a` and row `j` of `b`.
///
/// `cutoff` only matters for `DistanceCheck::Efficient`;
/// pass `f64::INFINITY` to force a full scan.
pub(super) fn row_distance(
    distance: Distance,
    check: DistanceCheck,
    a: &Sample,
    i: usize,
    b: &Sample,
    j: usize,
    cutoff: f64,
) -> f64
{
    match distance {
        Distance::Minkowski(p) => minkowski(p, check, a, i, b, j, cutoff),
        Distance::Chebyshev => chebyshev(check, a, i, b, j, cutoff),
    }
}


fn minkowski(
    p: f64,
    check: DistanceCheck,
    a: &Sample,
    i: usize,
    b: &Sample,
    j: usize,
    cutoff: f64,
) -> f64
{
    // With a regular check the bound is infinite
    // and the loop always runs to completion.
    let cutoff_pow = match check {
        DistanceCheck::Regular => f64::INFINITY,
        DistanceCheck::Efficient => cutoff.powf(p),
    };

    let mut sum = 0.0;
    for (fa, fb) in a.features().iter().zip(b.features()) {
        sum += (fa[i] - fb[j]).abs().powf(p);
        if sum > cutoff_pow { break; }
    }

    sum.powf(1.0 / p)
}


fn chebyshev(
    check: DistanceCheck,
    a: &Sample,
    i: usize,
    b: &Sample,
    j: usize,
    cutoff: f64,
) -> f64
{
    let cutoff = match check {
        DistanceCheck::Regular => f64::INFINITY,
        DistanceCheck::Efficient => cutoff,
    };

    // The running max only grows, so once it passes the cutoff
    // the remaining coordinates cannot matter.
    let mut max = 0.0_f64;
    for (fa, fb) in a.features().iter().zip(b.features()) {
        max = max.max((fa[i] - fb[j]).abs());
        if max > cutoff { break; }
    }

    max
}
