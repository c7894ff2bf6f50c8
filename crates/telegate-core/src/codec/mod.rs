//! Payload sample codecs.
//!
//! Gateway payloads carry sensor readings as big-endian IEEE-754 binary16
//! words; `half` widens them to binary32 on decode and narrows on encode.

pub mod error;
pub mod half;

pub use error::HalfCodecError;
pub use half::{f32_to_half, half_to_f32};
