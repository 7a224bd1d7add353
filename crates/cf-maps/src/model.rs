//! Validated compressor map models and point evaluation.

use crate::basis::{CUBIC_2VAR_TERMS, CUBIC_3VAR_TERMS, eval_cubic_2var, eval_cubic_3var};
use crate::error::{MapError, MapResult};
use crate::scale::{destandardize, standardize};

/// Number of features a map is fitted over.
pub const FEATURE_COUNT: usize = 4;

/// Index of shaft speed in the feature mean/variance vectors.
pub const FEAT_SPEED: usize = 0;
/// Index of flow.
pub const FEAT_FLOW: usize = 1;
/// Index of head.
pub const FEAT_HEAD: usize = 2;
/// Index of isentropic efficiency.
pub const FEAT_ETA: usize = 3;

/// Fitted regression data for one compressor model.
///
/// Fixed-size fields are the post-validation form of a
/// [`CompressorModelProfile`](crate::profile::CompressorModelProfile):
/// coefficient lengths match the cubic bases by construction, mean/variance
/// cover the four features in `[speed, flow, head, efficiency]` order, and
/// every variance entry is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFit {
    pub speed_coefficients: [f64; CUBIC_2VAR_TERMS],
    pub speed_intercept: f64,
    pub efficiency_coefficients: [f64; CUBIC_3VAR_TERMS],
    pub efficiency_intercept: f64,
    pub feature_mean: [f64; FEATURE_COUNT],
    pub feature_variance: [f64; FEATURE_COUNT],
}

/// A named compressor model: fitted map data, or a placeholder awaiting it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    pub name: String,
    /// `None` marks a model the registry recognizes but has no data for yet.
    pub fit: Option<MapFit>,
}

/// Predicted operating point for a (head, flow) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPrediction {
    /// Shaft speed (RPM)
    pub speed_rpm: f64,
    /// Isentropic efficiency (fraction)
    pub efficiency: f64,
}

impl MapModel {
    /// Predict shaft speed and isentropic efficiency at an operating point.
    ///
    /// ## Pipeline
    ///
    /// 1. Standardize `flow` and `head` against the trained feature scaling.
    /// 2. Evaluate the cubic speed surface over the standardized pair.
    /// 3. Evaluate the cubic efficiency surface over the standardized pair
    ///    plus the speed surface output. The efficiency surface was fitted
    ///    with its speed feature still in standardized form, so the raw
    ///    surface output feeds in directly, not the physical RPM.
    /// 4. De-standardize both outputs.
    ///
    /// # Arguments
    /// * `head` - Head (ft·lbf/lbm)
    /// * `flow` - Suction flow, in the units the map was fitted in
    ///
    /// # Errors
    /// Returns an error for non-finite inputs or if the model is a
    /// placeholder without fitted data.
    pub fn evaluate(&self, head: f64, flow: f64) -> MapResult<MapPrediction> {
        if !head.is_finite() {
            return Err(MapError::NonFiniteInput {
                what: "head",
                value: head,
            });
        }
        if !flow.is_finite() {
            return Err(MapError::NonFiniteInput {
                what: "flow",
                value: flow,
            });
        }

        let fit = self
            .fit
            .as_ref()
            .ok_or_else(|| MapError::ModelDataUnavailable {
                name: self.name.clone(),
            })?;

        let tf = standardize(flow, fit.feature_mean[FEAT_FLOW], fit.feature_variance[FEAT_FLOW]);
        let th = standardize(head, fit.feature_mean[FEAT_HEAD], fit.feature_variance[FEAT_HEAD]);

        let speed_std = eval_cubic_2var(&fit.speed_coefficients, fit.speed_intercept, tf, th);
        let eta_std = eval_cubic_3var(
            &fit.efficiency_coefficients,
            fit.efficiency_intercept,
            tf,
            th,
            speed_std,
        );

        tracing::debug!(model = %self.name, tf, th, speed_std, "evaluated map point");

        Ok(MapPrediction {
            speed_rpm: destandardize(
                speed_std,
                fit.feature_mean[FEAT_SPEED],
                fit.feature_variance[FEAT_SPEED],
            ),
            efficiency: destandardize(
                eta_std,
                fit.feature_mean[FEAT_ETA],
                fit.feature_variance[FEAT_ETA],
            ),
        })
    }

    /// Whether this model carries fitted data.
    pub fn is_available(&self) -> bool {
        self.fit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Surfaces chosen so every step is exact in f64: sqrt(4) = 2,
    // sqrt(0.25) = 0.5, and the polynomials reduce to single basis terms.
    fn toy_model() -> MapModel {
        let mut speed_coefficients = [0.0; CUBIC_2VAR_TERMS];
        speed_coefficients[1] = 1.0; // tf
        let mut efficiency_coefficients = [0.0; CUBIC_3VAR_TERMS];
        efficiency_coefficients[3] = 1.0; // standardized speed

        MapModel {
            name: "toy".to_string(),
            fit: Some(MapFit {
                speed_coefficients,
                speed_intercept: 3.0,
                efficiency_coefficients,
                efficiency_intercept: 0.25,
                feature_mean: [100.0, 10.0, 20.0, 0.5],
                feature_variance: [4.0, 1.0, 1.0, 0.25],
            }),
        }
    }

    #[test]
    fn evaluate_standardizes_and_destandardizes() {
        let model = toy_model();
        // tf = (11-10)/1 = 1, th = (20-20)/1 = 0
        // speed_std = 1 + 3 = 4 -> rpm = 4*2 + 100
        // eta_std = 4 + 0.25 -> eta = 4.25*0.5 + 0.5
        let p = model.evaluate(20.0, 11.0).unwrap();
        assert_eq!(p.speed_rpm, 108.0);
        assert_eq!(p.efficiency, 2.625);
    }

    #[test]
    fn efficiency_surface_sees_standardized_speed() {
        let model = toy_model();
        // At the means both inputs standardize to 0, so the efficiency
        // surface's third feature is exactly the speed intercept.
        let p = model.evaluate(20.0, 10.0).unwrap();
        assert_eq!(p.speed_rpm, 3.0 * 2.0 + 100.0);
        assert_eq!(p.efficiency, (3.0 + 0.25) * 0.5 + 0.5);
    }

    #[test]
    fn placeholder_rejects_evaluation() {
        let model = MapModel {
            name: "c40".to_string(),
            fit: None,
        };
        let err = model.evaluate(7000.0, 8000.0).unwrap_err();
        match err {
            MapError::ModelDataUnavailable { name } => assert_eq!(name, "c40"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let model = toy_model();
        assert!(matches!(
            model.evaluate(f64::NAN, 11.0),
            Err(MapError::NonFiniteInput { what: "head", .. })
        ));
        assert!(matches!(
            model.evaluate(20.0, f64::INFINITY),
            Err(MapError::NonFiniteInput { what: "flow", .. })
        ));
        // Input checks come before the data-availability check
        let placeholder = MapModel {
            name: "c40".to_string(),
            fit: None,
        };
        assert!(matches!(
            placeholder.evaluate(f64::NAN, 8000.0),
            Err(MapError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn availability_reflects_fit_presence() {
        assert!(toy_model().is_available());
        let placeholder = MapModel {
            name: "c45".to_string(),
            fit: None,
        };
        assert!(!placeholder.is_available());
    }
}
