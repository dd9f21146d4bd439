/// Zero-one loss.
/// `true_label` is a `{0, 1}` class code stored as `f64`.
pub fn zero_one_loss(true_label: f64, prediction: i64) -> f64 {
    if prediction as f64 == true_label { 0.0 } else { 1.0 }
}

/// Squared loss
pub fn squared_loss(true_label: f64, prediction: f64) -> f64 {
    (true_label - prediction).powi(2)
}


/// Absolute loss
pub fn absolute_loss(true_label: f64, prediction: f64) -> f64 {
    (true_label - prediction).abs()
}
