//! Artifact document types and profile validation.
//!
//! Artifacts store coefficient tables as variable-length sequences; this
//! module is where they are checked against the fixed bases and turned into
//! [`MapFit`] data. Everything downstream of validation works with
//! fixed-size arrays and never re-checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::basis::{CUBIC_2VAR_TERMS, CUBIC_3VAR_TERMS};
use crate::error::{MapError, MapResult};
use crate::model::{FEATURE_COUNT, MapFit, MapModel};

/// On-disk form of a map registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapDocument {
    /// Basis ordering the coefficient tables were fitted against; must match
    /// [`POLY_BASIS_VERSION`](crate::basis::POLY_BASIS_VERSION) to load.
    pub basis_version: u32,
    /// Model profiles keyed by model name.
    pub models: BTreeMap<String, CompressorModelProfile>,
}

/// One compressor model's profile as it appears in an artifact.
///
/// A placeholder (model known, fit pending) is written with every sequence
/// empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompressorModelProfile {
    #[serde(default)]
    pub speed_coefficients: Vec<f64>,
    #[serde(default)]
    pub speed_intercept: f64,
    #[serde(default)]
    pub efficiency_coefficients: Vec<f64>,
    #[serde(default)]
    pub efficiency_intercept: f64,
    /// Feature means in `[speed, flow, head, efficiency]` order.
    #[serde(default)]
    pub feature_mean: Vec<f64>,
    /// Feature variances, same order.
    #[serde(default)]
    pub feature_variance: Vec<f64>,
}

/// Validate one profile into a [`MapModel`].
///
/// A fully-empty profile becomes a placeholder. A fully-populated one has
/// its sequence lengths, finiteness and variance signs checked. Anything in
/// between is rejected.
pub fn validate_profile(name: &str, profile: &CompressorModelProfile) -> MapResult<MapModel> {
    let filled = [
        !profile.speed_coefficients.is_empty(),
        !profile.efficiency_coefficients.is_empty(),
        !profile.feature_mean.is_empty(),
        !profile.feature_variance.is_empty(),
    ];

    if filled.iter().all(|&f| !f) {
        return Ok(MapModel {
            name: name.to_string(),
            fit: None,
        });
    }
    if !filled.iter().all(|&f| f) {
        return Err(MapError::PartialProfile {
            model: name.to_string(),
        });
    }

    let speed_coefficients: [f64; CUBIC_2VAR_TERMS] = profile
        .speed_coefficients
        .as_slice()
        .try_into()
        .map_err(|_| MapError::CoefficientLength {
            model: name.to_string(),
            surface: "speed",
            expected: CUBIC_2VAR_TERMS,
            actual: profile.speed_coefficients.len(),
        })?;
    let efficiency_coefficients: [f64; CUBIC_3VAR_TERMS] = profile
        .efficiency_coefficients
        .as_slice()
        .try_into()
        .map_err(|_| MapError::CoefficientLength {
            model: name.to_string(),
            surface: "efficiency",
            expected: CUBIC_3VAR_TERMS,
            actual: profile.efficiency_coefficients.len(),
        })?;
    let feature_mean: [f64; FEATURE_COUNT] = profile
        .feature_mean
        .as_slice()
        .try_into()
        .map_err(|_| MapError::ScalingLength {
            model: name.to_string(),
            what: "feature_mean",
            expected: FEATURE_COUNT,
            actual: profile.feature_mean.len(),
        })?;
    let feature_variance: [f64; FEATURE_COUNT] = profile
        .feature_variance
        .as_slice()
        .try_into()
        .map_err(|_| MapError::ScalingLength {
            model: name.to_string(),
            what: "feature_variance",
            expected: FEATURE_COUNT,
            actual: profile.feature_variance.len(),
        })?;

    check_all_finite(name, "speed_coefficients", &speed_coefficients)?;
    check_all_finite(name, "efficiency_coefficients", &efficiency_coefficients)?;
    check_all_finite(name, "feature_mean", &feature_mean)?;
    check_all_finite(name, "feature_variance", &feature_variance)?;
    check_all_finite(name, "speed_intercept", &[profile.speed_intercept])?;
    check_all_finite(name, "efficiency_intercept", &[profile.efficiency_intercept])?;

    for (index, &value) in feature_variance.iter().enumerate() {
        if value <= 0.0 {
            return Err(MapError::NonPositiveVariance {
                model: name.to_string(),
                index,
                value,
            });
        }
    }

    Ok(MapModel {
        name: name.to_string(),
        fit: Some(MapFit {
            speed_coefficients,
            speed_intercept: profile.speed_intercept,
            efficiency_coefficients,
            efficiency_intercept: profile.efficiency_intercept,
            feature_mean,
            feature_variance,
        }),
    })
}

/// Document form of a validated model, for writing artifacts.
pub fn profile_from_model(model: &MapModel) -> CompressorModelProfile {
    match &model.fit {
        Some(fit) => CompressorModelProfile {
            speed_coefficients: fit.speed_coefficients.to_vec(),
            speed_intercept: fit.speed_intercept,
            efficiency_coefficients: fit.efficiency_coefficients.to_vec(),
            efficiency_intercept: fit.efficiency_intercept,
            feature_mean: fit.feature_mean.to_vec(),
            feature_variance: fit.feature_variance.to_vec(),
        },
        None => CompressorModelProfile::default(),
    }
}

fn check_all_finite(name: &str, what: &'static str, values: &[f64]) -> MapResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(MapError::NonFiniteDatum {
            model: name.to_string(),
            what,
        })
    }
}
