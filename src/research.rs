//! This directory provides some features for research,
//! such as generating cross-validation folds
//! and measuring losses of a learned hypothesis.

/// Defines the cross-validation fold generator.
pub mod cross_validation;

/// Defines loss functions (e.g., zero-one loss, squared loss).
pub mod loss_functions;


pub use cross_validation::CrossValidation;

pub use loss_functions::{
    zero_one_loss,
    squared_loss,
    absolute_loss,
};
