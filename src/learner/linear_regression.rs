//! Defines the linear regression learner.

mod gradient_descent;
mod linear_regression_regressor;


pub use gradient_descent::LinearRegression;
pub use linear_regression_regressor::LinearRegressionRegressor;
