//! Common validation helpers for the calculators.

use crate::error::{ThermoError, ThermoResult};
use cf_core::numeric::ensure_finite;

/// Ensure a value is finite, returning ThermoError if not.
pub fn check_finite(value: f64, what: &'static str) -> ThermoResult<()> {
    ensure_finite(value, what).map_err(|_| ThermoError::NonFinite { what, value })?;
    Ok(())
}
