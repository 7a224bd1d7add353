//! Model registry and artifact loading.

use std::collections::BTreeMap;
use std::path::Path;

use crate::basis::POLY_BASIS_VERSION;
use crate::data::builtin_maps;
use crate::error::{MapError, MapResult};
use crate::model::{MapModel, MapPrediction};
use crate::profile::{MapDocument, profile_from_model, validate_profile};

/// Immutable collection of compressor models keyed by name.
///
/// Built once from the builtin table or a JSON artifact, validated during
/// construction, never mutated afterwards. Safe to share behind `&` across
/// threads.
#[derive(Debug, Clone)]
pub struct MapRegistry {
    models: BTreeMap<String, MapModel>,
}

impl MapRegistry {
    /// Registry over the builtin model table.
    pub fn builtin() -> Self {
        let models = builtin_maps()
            .iter()
            .map(|entry| {
                (
                    entry.name.to_string(),
                    MapModel {
                        name: entry.name.to_string(),
                        fit: entry.fit.clone(),
                    },
                )
            })
            .collect();
        Self { models }
    }

    /// Build a registry from a parsed artifact document.
    ///
    /// # Errors
    /// Rejects a basis version mismatch, then the first invalid profile.
    pub fn from_document(document: &MapDocument) -> MapResult<Self> {
        if document.basis_version != POLY_BASIS_VERSION {
            return Err(MapError::BasisVersion {
                expected: POLY_BASIS_VERSION,
                actual: document.basis_version,
            });
        }

        let mut models = BTreeMap::new();
        for (name, profile) in &document.models {
            models.insert(name.clone(), validate_profile(name, profile)?);
        }

        tracing::debug!(model_count = models.len(), "loaded map artifact");
        Ok(Self { models })
    }

    /// Parse and validate a JSON artifact.
    pub fn from_json_str(json: &str) -> MapResult<Self> {
        let document: MapDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Read, parse and validate a JSON artifact file.
    pub fn from_path(path: &Path) -> MapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Document form of this registry, for writing artifacts.
    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            basis_version: POLY_BASIS_VERSION,
            models: self
                .models
                .iter()
                .map(|(name, model)| (name.clone(), profile_from_model(model)))
                .collect(),
        }
    }

    /// Predict shaft speed and isentropic efficiency for the named model at
    /// an operating point.
    ///
    /// # Errors
    /// `UnknownModel` for an unregistered name; otherwise the model's own
    /// errors (placeholder data, non-finite inputs).
    pub fn evaluate(&self, head: f64, flow: f64, name: &str) -> MapResult<MapPrediction> {
        let model = self.get(name).ok_or_else(|| MapError::UnknownModel {
            name: name.to_string(),
        })?;
        model.evaluate(head, flow)
    }

    pub fn get(&self, name: &str) -> Option<&MapModel> {
        self.models.get(name)
    }

    /// All registered model names, sorted.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Names of the models that carry fitted data, sorted.
    pub fn available_model_names(&self) -> Vec<&str> {
        self.models
            .values()
            .filter(|model| model.is_available())
            .map(|model| model.name.as_str())
            .collect()
    }

    /// Whether `name` is registered and carries fitted data.
    pub fn is_available(&self, name: &str) -> bool {
        self.get(name).is_some_and(MapModel::is_available)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::numeric::{Tolerances, nearly_equal};
    use crate::profile::CompressorModelProfile;

    #[test]
    fn builtin_lists_models_in_order() {
        let reg = MapRegistry::builtin();
        assert_eq!(reg.len(), 4);
        assert!(!reg.is_empty());
        assert_eq!(reg.model_names(), ["c40", "c45", "c65", "c75"]);
        assert_eq!(reg.available_model_names(), ["c65", "c75"]);
        assert!(reg.is_available("c75"));
        assert!(!reg.is_available("c40"));
        assert!(!reg.is_available("c99"));
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MapRegistry>();
    }

    #[test]
    fn unknown_model_is_rejected() {
        let reg = MapRegistry::builtin();
        match reg.evaluate(7000.0, 8000.0, "c99") {
            Err(MapError::UnknownModel { name }) => assert_eq!(name, "c99"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn placeholder_models_are_rejected() {
        let reg = MapRegistry::builtin();
        for name in ["c40", "c45"] {
            assert!(
                matches!(
                    reg.evaluate(7000.0, 8000.0, name),
                    Err(MapError::ModelDataUnavailable { .. })
                ),
                "{} should have no data",
                name
            );
        }
    }

    #[test]
    fn c65_at_training_means_reduces_to_intercepts() {
        let reg = MapRegistry::builtin();
        let p = reg.evaluate(7.72007143e3, 8.20365714e3, "c65").unwrap();
        // Head and flow standardize to exactly 0, so the speed surface
        // collapses to its intercept before de-standardization.
        assert_eq!(
            p.speed_rpm,
            0.016134302866640093 * 3.61042041e6_f64.sqrt() + 6.92714286e3
        );
        // The efficiency surface's third feature is the standardized speed
        // output, so at the means it still sees the speed intercept.
        assert_eq!(p.efficiency, 0.849902223553124);
    }

    #[test]
    fn c65_matches_fitted_points() {
        let reg = MapRegistry::builtin();
        let tol = Tolerances::default();
        let cases = [
            (7000.0, 8000.0, 6689.555470334464, 0.8472269591745439),
            (9000.0, 10000.0, 7833.567081923975, 0.8264266561509803),
            (5477.0, 6200.0, 5681.910769244585, 0.8644943331717301),
        ];
        for (head, flow, speed, eta) in cases {
            let p = reg.evaluate(head, flow, "c65").unwrap();
            assert!(
                nearly_equal(p.speed_rpm, speed, tol),
                "speed at ({}, {}): {}",
                head,
                flow,
                p.speed_rpm
            );
            assert!(
                nearly_equal(p.efficiency, eta, tol),
                "efficiency at ({}, {}): {}",
                head,
                flow,
                p.efficiency
            );
        }
    }

    #[test]
    fn c75_matches_fitted_points() {
        let reg = MapRegistry::builtin();
        let tol = Tolerances::default();
        let cases = [
            (15000.0, 11000.0, 5549.890836226571, 0.8464004209047261),
            (12000.0, 9500.0, 4943.085215669152, 0.8460678796245085),
            (20000.0, 13000.0, 6351.448530920463, 0.8537226412223329),
        ];
        for (head, flow, speed, eta) in cases {
            let p = reg.evaluate(head, flow, "c75").unwrap();
            assert!(
                nearly_equal(p.speed_rpm, speed, tol),
                "speed at ({}, {}): {}",
                head,
                flow,
                p.speed_rpm
            );
            assert!(
                nearly_equal(p.efficiency, eta, tol),
                "efficiency at ({}, {}): {}",
                head,
                flow,
                p.efficiency
            );
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let reg = MapRegistry::builtin();
        let a = reg.evaluate(9000.0, 10000.0, "c65").unwrap();
        let b = reg.evaluate(9000.0, 10000.0, "c65").unwrap();
        assert_eq!(a.speed_rpm.to_bits(), b.speed_rpm.to_bits());
        assert_eq!(a.efficiency.to_bits(), b.efficiency.to_bits());
    }

    #[test]
    fn artifact_version_must_match() {
        let mut document = MapRegistry::builtin().to_document();
        document.basis_version = POLY_BASIS_VERSION + 1;
        match MapRegistry::from_document(&document) {
            Err(MapError::BasisVersion { expected, actual }) => {
                assert_eq!(expected, POLY_BASIS_VERSION);
                assert_eq!(actual, POLY_BASIS_VERSION + 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn invalid_profile_fails_load() {
        let mut document = MapRegistry::builtin().to_document();
        document
            .models
            .get_mut("c65")
            .unwrap()
            .speed_coefficients
            .pop();
        assert!(matches!(
            MapRegistry::from_document(&document),
            Err(MapError::CoefficientLength { .. })
        ));
    }

    #[test]
    fn minimal_document_loads() {
        let json = r#"{
            "basis_version": 1,
            "models": {
                "x10": {}
            }
        }"#;
        let reg = MapRegistry::from_json_str(json).unwrap();
        assert_eq!(reg.model_names(), ["x10"]);
        assert!(!reg.is_available("x10"));
        assert!(matches!(
            reg.evaluate(1000.0, 1000.0, "x10"),
            Err(MapError::ModelDataUnavailable { .. })
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            MapRegistry::from_json_str("{ not json"),
            Err(MapError::Json(_))
        ));
    }

    #[test]
    fn partial_document_profile_fails_load() {
        let profile = CompressorModelProfile {
            feature_mean: vec![1.0, 2.0, 3.0, 4.0],
            ..CompressorModelProfile::default()
        };
        let mut document = MapRegistry::builtin().to_document();
        document.models.insert("c80".to_string(), profile);
        assert!(matches!(
            MapRegistry::from_document(&document),
            Err(MapError::PartialProfile { .. })
        ));
    }
}
