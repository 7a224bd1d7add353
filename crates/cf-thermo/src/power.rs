//! Shaft power calculation.

use crate::common::check_finite;
use crate::error::{ThermoError, ThermoResult};

/// Seconds per day, for mass flows quoted per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Horsepower definition, ft·lbf/s per hp.
pub const FT_LBF_PER_SEC_PER_HP: f64 = 550.0;

/// Shaft power consumed compressing `massflow` against `head`.
///
/// ## Model
///
/// ```text
/// power = massflow * head / (mech_eff * eta * 86400 * 550)
/// ```
///
/// # Arguments
/// * `eta` - Compressor polytropic efficiency (0 < eta <= 1)
/// * `massflow` - Mass flow rate (lbm/day, >= 0)
/// * `head` - Head from the compression (ft·lbf/lbm)
/// * `mech_eff` - Mechanical train efficiency (0 < mech_eff <= 1); 1 when `None`
///
/// Result is in horsepower.
///
/// # Errors
/// Returns an error for non-finite inputs, efficiencies outside (0,1], or a
/// negative mass flow.
pub fn consumed_power(
    eta: f64,
    massflow: f64,
    head: f64,
    mech_eff: Option<f64>,
) -> ThermoResult<f64> {
    let mech_eff = mech_eff.unwrap_or(1.0);

    check_finite(eta, "compressor efficiency")?;
    check_finite(massflow, "mass flow")?;
    check_finite(head, "head")?;
    check_finite(mech_eff, "mechanical efficiency")?;

    if eta <= 0.0 || eta > 1.0 {
        return Err(ThermoError::NonPhysical {
            what: "compressor efficiency must be in (0,1]",
        });
    }
    if mech_eff <= 0.0 || mech_eff > 1.0 {
        return Err(ThermoError::NonPhysical {
            what: "mechanical efficiency must be in (0,1]",
        });
    }
    if massflow < 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "mass flow cannot be negative",
        });
    }

    Ok(massflow * head / (mech_eff * eta * SECONDS_PER_DAY * FT_LBF_PER_SEC_PER_HP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::numeric::{nearly_equal, Tolerances};

    #[test]
    fn power_matches_reference_case() {
        let power = consumed_power(0.8, 2_000_000.0, 50_000.0, Some(0.97)).unwrap();
        assert!(nearly_equal(power, 2711.8261654344124, Tolerances::default()));
    }

    #[test]
    fn power_default_mech_eff_is_unity() {
        let implicit = consumed_power(0.8, 2_000_000.0, 50_000.0, None).unwrap();
        let explicit = consumed_power(0.8, 2_000_000.0, 50_000.0, Some(1.0)).unwrap();
        assert_eq!(implicit, explicit);
        assert!(nearly_equal(implicit, 2630.4713804713806, Tolerances::default()));
    }

    #[test]
    fn power_zero_flow_is_zero() {
        assert_eq!(consumed_power(0.8, 0.0, 50_000.0, None).unwrap(), 0.0);
    }

    #[test]
    fn power_is_deterministic() {
        let a = consumed_power(0.8, 2_000_000.0, 50_000.0, Some(0.97)).unwrap();
        let b = consumed_power(0.8, 2_000_000.0, 50_000.0, Some(0.97)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn power_rejects_bad_efficiencies() {
        assert!(consumed_power(0.0, 2_000_000.0, 50_000.0, None).is_err());
        assert!(consumed_power(-0.8, 2_000_000.0, 50_000.0, None).is_err());
        assert!(consumed_power(1.2, 2_000_000.0, 50_000.0, None).is_err());
        assert!(consumed_power(0.8, 2_000_000.0, 50_000.0, Some(0.0)).is_err());
        assert!(consumed_power(0.8, 2_000_000.0, 50_000.0, Some(1.5)).is_err());
    }

    #[test]
    fn power_rejects_negative_flow() {
        let err = consumed_power(0.8, -1.0, 50_000.0, None).unwrap_err();
        assert!(matches!(err, ThermoError::NonPhysical { .. }));
    }

    #[test]
    fn power_rejects_non_finite_inputs() {
        assert!(consumed_power(f64::NAN, 2_000_000.0, 50_000.0, None).is_err());
        assert!(consumed_power(0.8, f64::INFINITY, 50_000.0, None).is_err());
        assert!(consumed_power(0.8, 2_000_000.0, f64::NAN, None).is_err());
        assert!(consumed_power(0.8, 2_000_000.0, 50_000.0, Some(f64::NAN)).is_err());
    }
}
