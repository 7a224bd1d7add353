//! cf-core: stable foundation for centriflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error type the domain crates convert into)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CfError, CfResult};
pub use numeric::*;
