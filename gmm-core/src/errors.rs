use crate::constraints::Bounds;
use crate::imt::Imt;
use crate::input::Field;
use thiserror::Error;

/// Error type for model construction and evaluation failures.
///
/// All variants indicate programming or data errors rather than transient
/// conditions: they are detected eagerly (construction time for composition
/// and resource errors, call time for input-range errors) and are never
/// retried or downgraded to a default value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GmmError {
    #[error("{field} = {value} is outside the allowed range {bounds}")]
    ConstraintViolation {
        field: Field,
        value: f64,
        bounds: Bounds,
    },
    #[error("{family} has no coefficients for {imt} and no interpolation bracket")]
    UnsupportedImt { family: String, imt: Imt },
    #[error("unknown model family '{0}'")]
    UnknownFamily(String),
    #[error("invalid model composition: {0}")]
    InvalidComposition(String),
    #[error("missing coefficient '{name}' for {imt}")]
    MissingCoefficient { imt: Imt, name: String },
    #[error("spectral period must be finite and positive, got {0}")]
    InvalidPeriod(f64),
    #[error("invalid coefficient resource: {0}")]
    InvalidResource(String),
}

/// Convenience type for `Result<T, GmmError>`.
pub type GmmResult<T> = Result<T, GmmError>;
