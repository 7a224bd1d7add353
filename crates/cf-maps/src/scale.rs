//! Feature standardization.
//!
//! Map surfaces are fitted over standardized features. Variance positivity
//! is a load-time invariant, so these helpers perform no checks of their
//! own.

/// `(x - mean) / sqrt(variance)`
pub fn standardize(x: f64, mean: f64, variance: f64) -> f64 {
    (x - mean) / variance.sqrt()
}

/// `x * sqrt(variance) + mean`
pub fn destandardize(x: f64, mean: f64, variance: f64) -> f64 {
    x * variance.sqrt() + mean
}
