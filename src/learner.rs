//! The files in `learner/` directory define the supervised learners.

/// Defines Decision Tree.
pub mod decision_tree;

/// Defines k-Nearest Neighbors.
pub mod knn;

/// Defines Linear Regression.
pub mod linear_regression;


pub use self::decision_tree::{
    Criterion,
    SignificanceLevel,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeMetrics,
};


pub use self::knn::{
    Distance,
    DistanceCheck,
    WeightingScheme,
    Knn,
};


pub use self::linear_regression::{
    LinearRegression,
    LinearRegressionRegressor,
};
