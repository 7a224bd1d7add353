//! Polynomial bases shared by the speed and efficiency surfaces.
//!
//! Both map surfaces are full cubic polynomials over standardized features:
//! two variables (flow, head) for the speed surface, three (flow, head,
//! speed) for the efficiency surface. The monomial ordering is fixed and
//! load-bearing: coefficient tables are fitted against it, so reordering the
//! terms silently corrupts every prediction.
//!
//! The ordering is total degree ascending, combinations-with-replacement
//! within each degree (the order scikit-learn's `PolynomialFeatures` emits,
//! which is how the builtin tables were fitted):
//!
//! ```text
//! 2 vars: [1, x, y, x², xy, y², x³, x²y, xy², y³]
//! 3 vars: [1, x, y, z, x², xy, xz, y², yz, z²,
//!          x³, x²y, x²z, xy², xyz, xz², y³, y²z, yz², z³]
//! ```
//!
//! `POLY_BASIS_VERSION` names this ordering. Coefficient artifacts carry the
//! version they were fitted against and loading rejects a mismatch, so the
//! tables and this module cannot drift apart unnoticed.

/// Version of the basis ordering defined by this module.
pub const POLY_BASIS_VERSION: u32 = 1;

/// Term count of the full cubic basis in two variables.
pub const CUBIC_2VAR_TERMS: usize = 10;

/// Term count of the full cubic basis in three variables.
pub const CUBIC_3VAR_TERMS: usize = 20;

/// Basis terms for a full cubic in `(x, y)`, in fitted order.
pub fn cubic_2var_terms(x: f64, y: f64) -> [f64; CUBIC_2VAR_TERMS] {
    [
        1.0,
        x,
        y,
        x * x,
        x * y,
        y * y,
        x * x * x,
        x * x * y,
        x * y * y,
        y * y * y,
    ]
}

/// Basis terms for a full cubic in `(x, y, z)`, in fitted order.
pub fn cubic_3var_terms(x: f64, y: f64, z: f64) -> [f64; CUBIC_3VAR_TERMS] {
    [
        1.0,
        x,
        y,
        z,
        x * x,
        x * y,
        x * z,
        y * y,
        y * z,
        z * z,
        x * x * x,
        x * x * y,
        x * x * z,
        x * y * y,
        x * y * z,
        x * z * z,
        y * y * y,
        y * y * z,
        y * z * z,
        z * z * z,
    ]
}

/// Dot product of `coeffs` with the two-variable basis at `(x, y)`, plus
/// `intercept`.
///
/// Fitted tables conventionally store 0 in the first slot (the constant term
/// lives in the intercept), but the slot is honored if nonzero.
pub fn eval_cubic_2var(coeffs: &[f64; CUBIC_2VAR_TERMS], intercept: f64, x: f64, y: f64) -> f64 {
    let terms = cubic_2var_terms(x, y);
    coeffs.iter().zip(terms).map(|(c, t)| c * t).sum::<f64>() + intercept
}

/// Dot product of `coeffs` with the three-variable basis at `(x, y, z)`,
/// plus `intercept`.
pub fn eval_cubic_3var(
    coeffs: &[f64; CUBIC_3VAR_TERMS],
    intercept: f64,
    x: f64,
    y: f64,
    z: f64,
) -> f64 {
    let terms = cubic_3var_terms(x, y, z);
    coeffs.iter().zip(terms).map(|(c, t)| c * t).sum::<f64>() + intercept
}
