#![warn(missing_docs)]

//!
//! A crate that provides some classic supervised learning algorithms.
//! Every learner in this crate trains on a [`Sample`],
//! a column-oriented table of `f64` feature values,
//! and returns a hypothesis implementing
//! [`Classifier`] or [`Regressor`].
//!
//! This crate includes the following learners.
//!
//! - Decision tree classification
//!     [`DecisionTree`] grows a tree over categorical features
//!     and binary class labels.
//!     A split that fails a chi-square significance test
//!     is discarded while growing,
//!     so the returned tree never carries it.
//!
//!
//! - k-nearest-neighbor regression
//!     [`Knn`] is a lazy learner that predicts a blend of the targets
//!     of the `k` training rows closest to the query row.
//!
//!
//! - Linear regression
//!     [`LinearRegression`] fits a linear model
//!     by batch gradient descent,
//!     searching the step size automatically when none is given.

pub mod sample;
pub mod hypothesis;
pub mod learner;
pub mod research;
pub mod prelude;

mod common;


pub use sample::{
    Feature,
    Sample,
    SampleReader,
    Standardizer,
};

pub use hypothesis::{
    Classifier,
    Regressor,
};

pub use learner::{
    Criterion,
    SignificanceLevel,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeMetrics,
    Distance,
    DistanceCheck,
    WeightingScheme,
    Knn,
    LinearRegression,
    LinearRegressionRegressor,
};

pub use research::CrossValidation;
