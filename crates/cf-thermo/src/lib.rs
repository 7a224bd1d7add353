//! cf-thermo: head and power calculations for centrifugal compressors.
//!
//! Provides:
//! - Polytropic head from suction/discharge conditions
//! - Consumed shaft power from efficiency, mass flow and head
//! - Gas constants for the default working fluid (methane)
//!
//! Both calculators are pure functions over `f64` scalars in US field units
//! (psia, °R, lbm/day, ft·lbf/lbm, hp). Inputs are validated eagerly; nothing
//! is computed from a non-physical operating point.
//!
//! # Example
//!
//! ```
//! use cf_thermo::{compressor_head, consumed_power};
//!
//! let head = compressor_head(500.0, 1000.0, 0.95, 0.26, 520.0, None).unwrap();
//! let power = consumed_power(0.8, 2_000_000.0, head, Some(0.97)).unwrap();
//! assert!(head > 0.0);
//! assert!(power > 0.0);
//! ```

pub mod common;
pub mod error;
pub mod gas;
pub mod head;
pub mod power;

// Re-exports
pub use error::{ThermoError, ThermoResult};
pub use gas::{DEFAULT_RGAS, MOLAR_MASS_METHANE, R_UNIVERSAL_FT_LBF, specific_gas_constant};
pub use head::{compressor_head, mratio_from_specific_heat_ratio};
pub use power::{FT_LBF_PER_SEC_PER_HP, SECONDS_PER_DAY, consumed_power};
