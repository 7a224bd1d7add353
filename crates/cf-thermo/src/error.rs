//! Error types for thermodynamic calculations.

use cf_core::error::CfError;
use thiserror::Error;

/// Errors that can occur during head and power calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type ThermoResult<T> = Result<T, ThermoError>;

impl From<ThermoError> for CfError {
    fn from(e: ThermoError) -> Self {
        match e {
            ThermoError::NonPhysical { what } => CfError::InvalidArg {
                what: what.to_string(),
            },
            ThermoError::NonFinite { what, value } => CfError::NonFinite { what, value },
        }
    }
}
