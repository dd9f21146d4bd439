//! Defines the k-nearest-neighbor learner.

mod distance;
mod knn_algorithm;


pub use distance::{
    Distance,
    DistanceCheck,
};
pub use knn_algorithm::{
    Knn,
    WeightingScheme,
    DEFAULT_K,
};
