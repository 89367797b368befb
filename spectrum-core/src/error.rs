//! # Error Module
//!
//! Every shape rule the spectral pipeline relies on (even interleaved
//! lengths, matching real/imaginary halves, power-of-two transform sizes,
//! usable frequencies) is checked at the module boundaries and reported
//! through [`SpectrumError`].

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SpectrumError>;

#[derive(Error, Debug)]
pub enum SpectrumError {
    /// An interleaved complex sequence must hold `[re, im]` pairs.
    #[error("complex sequence has odd length {0}")]
    OddLength(usize),

    #[error("real part has {reals} values but imaginary part has {imaginarys}")]
    LengthMismatch { reals: usize, imaginarys: usize },

    #[error("sample is empty")]
    EmptySample,

    /// The transform engine only accepts powers of two larger than one.
    #[error("transform size {0} is not a power of two larger than 1")]
    TransformSize(usize),

    #[error("engine of size {expected} was given {actual} values")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("invalid {name}: {value}")]
    InvalidFrequency { name: &'static str, value: f64 },

    #[error("no pass band configured")]
    MissingBand,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Rejects zero, negative and non-finite frequencies.
pub(crate) fn check_frequency(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SpectrumError::InvalidFrequency { name, value })
    }
}
