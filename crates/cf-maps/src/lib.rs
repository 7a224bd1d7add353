//! cf-maps: compressor performance map surrogates.
//!
//! A compressor map relates head, flow, shaft speed and isentropic
//! efficiency for one compressor family. This crate carries polynomial
//! regression surrogates of those maps: given a (head, flow) operating
//! point and a model name, it predicts shaft speed and efficiency.
//!
//! Provides:
//! - Fixed cubic polynomial bases with a named ordering version
//! - Feature standardization matching the training pipeline
//! - Builtin fitted tables (c65, c75) and placeholders (c40, c45)
//! - A registry with JSON artifact loading and load-time validation
//!
//! Everything after load-time validation is pure computation over `f64`
//! scalars; a registry can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use cf_maps::MapRegistry;
//!
//! let maps = MapRegistry::builtin();
//! let point = maps.evaluate(7000.0, 8000.0, "c65").unwrap();
//! assert!(point.speed_rpm > 0.0);
//! assert!(point.efficiency > 0.0 && point.efficiency < 1.0);
//! ```

pub mod basis;
pub mod data;
pub mod error;
pub mod model;
pub mod profile;
pub mod registry;
pub mod scale;

// Re-exports for ergonomics
pub use basis::{CUBIC_2VAR_TERMS, CUBIC_3VAR_TERMS, POLY_BASIS_VERSION};
pub use error::{MapError, MapResult};
pub use model::{FEATURE_COUNT, MapFit, MapModel, MapPrediction};
pub use profile::{CompressorModelProfile, MapDocument};
pub use registry::MapRegistry;
