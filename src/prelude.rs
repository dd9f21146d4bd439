//! Exports the standard learners, hypotheses, and sample types.
//!
pub use crate::learner::{
    // Classification ---------------------------
    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeMetrics,
    Criterion,
    SignificanceLevel,


    // Regression -------------------------------
    // k-nearest neighbors
    Knn,
    Distance,
    DistanceCheck,
    WeightingScheme,

    // Linear regression
    LinearRegression,
    LinearRegressionRegressor,
};


pub use crate::hypothesis::{
    Classifier,
    Regressor,
};


pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
    Standardizer,
};
