use thiserror::Error;

/// Errors surfaced by the estimator's public entry points.
///
/// Validation fails before any computation starts; there are no partially
/// computed estimates and no internal error paths beyond input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// A project dimension is non-finite, non-positive or outside the configured bounds.
    #[error("invalid {name}: {value} ft (must be a finite value between {min} and {max} ft)")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "length")
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
