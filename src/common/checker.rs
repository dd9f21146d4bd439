//! This file defines some functions that check some pre-conditions.
//! E.g., shape of data, label coding.

use crate::Sample;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) {
    let (n_sample, n_feature) = sample.shape();


    // `sample` must have at least one row.
    assert!(n_sample > 0, "The sample has no rows");


    // `sample` must have a feature.
    assert!(n_feature > 0, "The sample has no features");
}


/// Check whether the target column is specified.
#[inline(always)]
pub(crate) fn check_target_specified(sample: &Sample) {
    let n_sample = sample.shape().0;
    let y = sample.target();

    if n_sample != y.len() {
        panic!(
            "The target class is not specified.\n\
             Use `Sample::set_target(\"Column Name\")`."
        );
    }
}


/// Check whether the target values are all `0` or `1`.
/// The binary classifiers in this crate assume this coding.
#[inline(always)]
pub(crate) fn check_binary_target(sample: &Sample) {
    check_target_specified(sample);


    let y = sample.target();
    let offenders = y.iter()
        .filter(|yi| **yi != 0.0 && **yi != 1.0)
        .collect::<Vec<_>>();
    if !offenders.is_empty() {
        let line = offenders.iter()
            .take(5)
            .map(|yi| yi.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        panic!(
            "Target values take values not in {{0, 1}}.\n\
             Ex. [{line}, ...]."
        );
    }
}


/// Check whether every feature value is a non-negative integer code.
/// The decision tree treats feature values as categorical codes
/// `0, 1, ..., cardinality - 1`.
#[inline(always)]
pub(crate) fn check_categorical_features(sample: &Sample) {
    for feature in sample.features() {
        let offenders = feature.iter()
            .filter(|x| !x.is_finite() || **x < 0.0 || x.trunc() != **x)
            .collect::<Vec<_>>();
        if !offenders.is_empty() {
            let name = feature.name();
            let line = offenders.iter()
                .take(5)
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            panic!(
                "Feature `{name}` takes values that are not \
                 non-negative integer codes.\n\
                 Ex. [{line}, ...]."
            );
        }
    }
}


/// Check whether the target values are finite numbers.
/// The regressors in this crate assume this.
#[inline(always)]
pub(crate) fn check_regression_target(sample: &Sample) {
    check_target_specified(sample);


    let y = sample.target();
    let offenders = y.iter()
        .filter(|yi| !yi.is_finite())
        .collect::<Vec<_>>();
    if !offenders.is_empty() {
        let line = offenders.iter()
            .take(5)
            .map(|yi| yi.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        panic!(
            "Target values contain non-finite numbers.\n\
             Ex. [{line}, ...]."
        );
    }
}
