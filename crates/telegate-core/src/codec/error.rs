use thiserror::Error;

/// Errors returned by the half-precision encoder.
///
/// # Examples
/// ```
/// use telegate_core::{HalfCodecError, f32_to_half};
///
/// let err = f32_to_half(f32::NAN).unwrap_err();
/// assert_eq!(err, HalfCodecError::NanUnsupported);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HalfCodecError {
    #[error("NaN has no half-precision encoding")]
    NanUnsupported,
}
