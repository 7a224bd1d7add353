//! Compressor map errors.

use cf_core::error::CfError;
use thiserror::Error;

/// Result type for map operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur loading or evaluating compressor maps.
#[derive(Error, Debug)]
pub enum MapError {
    /// Name does not match any model in the registry.
    #[error("Unknown compressor model: {name}")]
    UnknownModel { name: String },

    /// Model is recognized but carries no fitted data yet.
    #[error("No map data available for compressor model: {name}")]
    ModelDataUnavailable { name: String },

    /// Coefficient sequence length does not match the fixed basis size.
    #[error("Model {model}: {surface} coefficients must have {expected} entries, got {actual}")]
    CoefficientLength {
        model: String,
        surface: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Feature mean/variance length does not match the feature count.
    #[error("Model {model}: {what} must have {expected} entries, got {actual}")]
    ScalingLength {
        model: String,
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Standardization divides by the square root of each variance entry.
    #[error("Model {model}: feature variance [{index}] must be positive, got {value}")]
    NonPositiveVariance {
        model: String,
        index: usize,
        value: f64,
    },

    /// A numeric field of a populated profile is NaN or infinite.
    #[error("Model {model}: non-finite value in {what}")]
    NonFiniteDatum { model: String, what: &'static str },

    /// An evaluation input is NaN or infinite.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFiniteInput { what: &'static str, value: f64 },

    /// Profile mixes populated and empty fields.
    #[error("Model {model}: profile is partially populated; supply every field or none")]
    PartialProfile { model: String },

    /// Artifact was fitted against a different polynomial basis.
    #[error("Map artifact basis version {actual} does not match supported version {expected}")]
    BasisVersion { expected: u32, actual: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<MapError> for CfError {
    fn from(e: MapError) -> Self {
        match e {
            MapError::NonFiniteInput { what, value } => CfError::NonFinite { what, value },
            MapError::UnknownModel { name } => CfError::InvalidArg {
                what: format!("unknown compressor model: {}", name),
            },
            MapError::ModelDataUnavailable { name } => CfError::InvalidArg {
                what: format!("no map data available for compressor model: {}", name),
            },
            other => CfError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
