use thiserror::Error;

pub mod affine_coords;
pub mod ecc_curves;
pub mod ecc_points;
pub mod field;
pub mod jacobian_coords;
pub mod scalar_mul;

/// Errors shared by the field, curve, point and signature layers.
///
/// Verification failure is not represented here: `verify` reports a wrong
/// signature as `Ok(false)`, and only malformed inputs surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EccError {
    /// A field was constructed with p = 0
    #[error("field modulus cannot be zero")]
    ZeroModulus,

    /// Two field values under different moduli met in one operation
    #[error("field values carry different moduli")]
    IncompatibleModulus,

    /// Inverse of zero or of a non-unit was requested
    #[error("value has no inverse under its modulus")]
    NotInvertible,

    /// Points from different curves met in one operation
    #[error("points lie on different curves")]
    CurveMismatch,

    /// A finite curve point was required but the identity was supplied
    #[error("expected a finite curve point")]
    NotAPoint,

    /// A scalar argument was outside its allowed range
    #[error("invalid scalar: {0}")]
    InvalidScalar(&'static str),

    /// Registry lookup miss
    #[error("unknown group `{0}`")]
    UnknownGroup(String),
}
