//! Gas constants used by the head calculation.
//!
//! Pipeline compressor calculations here run in US field units, so the
//! universal gas constant is carried in ft·lbf/(lbmol·°R) and specific gas
//! constants in ft·lbf/(lbm·°R).

use crate::common::check_finite;
use crate::error::{ThermoError, ThermoResult};

/// Universal gas constant, ft·lbf/(lbmol·°R).
pub const R_UNIVERSAL_FT_LBF: f64 = 1545.0;

/// Molar mass of methane, lbm/lbmol.
pub const MOLAR_MASS_METHANE: f64 = 16.043;

/// Specific gas constant assumed when the caller does not supply one:
/// pure methane, about 96.30 ft·lbf/(lbm·°R).
pub const DEFAULT_RGAS: f64 = R_UNIVERSAL_FT_LBF / MOLAR_MASS_METHANE;

/// Specific gas constant for a gas of the given molar mass (lbm/lbmol).
///
/// # Errors
/// Returns an error if the molar mass is non-finite or not positive.
pub fn specific_gas_constant(molar_mass: f64) -> ThermoResult<f64> {
    check_finite(molar_mass, "molar mass")?;
    if molar_mass <= 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "molar mass must be positive",
        });
    }
    Ok(R_UNIVERSAL_FT_LBF / molar_mass)
}
