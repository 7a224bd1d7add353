use thiserror::Error;

pub type CfResult<T> = Result<T, CfError>;

/// Workspace-wide error type.
///
/// Domain crates (cf-thermo, cf-maps) define their own error enums and
/// convert into `CfError` at the boundary, so callers embedding several
/// centriflow crates can handle one type.
#[derive(Error, Debug)]
pub enum CfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
