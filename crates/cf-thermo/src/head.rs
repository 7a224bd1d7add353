//! Polytropic head calculation.

use crate::common::check_finite;
use crate::error::{ThermoError, ThermoResult};
use crate::gas::DEFAULT_RGAS;

/// Polytropic head required to compress gas from suction to discharge
/// conditions.
///
/// ## Model
///
/// ```text
/// head = z_avg / mratio * t_suction * rgas * ((p_discharge / p_suction)^mratio - 1)
/// ```
///
/// # Arguments
/// * `p_suction` - Suction pressure (psia)
/// * `p_discharge` - Discharge pressure (psia)
/// * `z_avg` - Average gas compressibility factor across the stage
/// * `mratio` - Polytropic exponent ratio (k - 1)/k
/// * `t_suction` - Suction temperature (°R)
/// * `rgas` - Specific gas constant (ft·lbf/(lbm·°R)); pure methane when `None`
///
/// Result is in ft·lbf/lbm.
///
/// # Errors
/// Returns an error for non-finite inputs, non-positive pressures or suction
/// temperature, or a zero `mratio`.
pub fn compressor_head(
    p_suction: f64,
    p_discharge: f64,
    z_avg: f64,
    mratio: f64,
    t_suction: f64,
    rgas: Option<f64>,
) -> ThermoResult<f64> {
    let rgas = rgas.unwrap_or(DEFAULT_RGAS);

    check_finite(p_suction, "suction pressure")?;
    check_finite(p_discharge, "discharge pressure")?;
    check_finite(z_avg, "compressibility factor")?;
    check_finite(mratio, "polytropic exponent ratio")?;
    check_finite(t_suction, "suction temperature")?;
    check_finite(rgas, "specific gas constant")?;

    if p_suction <= 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "suction pressure must be positive",
        });
    }
    if p_discharge <= 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "discharge pressure must be positive",
        });
    }
    if t_suction <= 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "suction temperature must be positive",
        });
    }
    if mratio == 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "polytropic exponent ratio cannot be zero",
        });
    }

    Ok(z_avg / mratio * t_suction * rgas * ((p_discharge / p_suction).powf(mratio) - 1.0))
}

/// Polytropic exponent ratio `(k - 1)/k` for a ratio of specific heats `k`.
///
/// # Errors
/// Returns an error if `k` is non-finite or not greater than 1.
pub fn mratio_from_specific_heat_ratio(k: f64) -> ThermoResult<f64> {
    check_finite(k, "specific heat ratio")?;
    if k <= 1.0 {
        return Err(ThermoError::NonPhysical {
            what: "specific heat ratio must be greater than 1",
        });
    }
    Ok((k - 1.0) / k)
}
