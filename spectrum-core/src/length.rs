//! # Length Normalization Module
//!
//! The transform engine only accepts power-of-two lengths. A sample of any
//! other length is either cut down to the largest power of two that fits
//! (losing the tail) or padded with zeros up to the next power of two
//! (keeping every value but changing the bin spacing).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectrumError};

/// How a sample is brought to a power-of-two length before transforming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Keep the longest power-of-two prefix.
    #[default]
    Truncate,
    /// Append zeros up to the next power of two.
    Pad,
}

impl LengthPolicy {
    pub fn apply(self, sample: &[f64]) -> Result<Vec<f64>> {
        match self {
            LengthPolicy::Truncate => cut_sample(sample),
            LengthPolicy::Pad => expand_sample(sample),
        }
    }
}

/// Returns the prefix of `sample` whose length is the largest power of two
/// not exceeding `sample.len()`, e.g. 1088 values become 1024.
pub fn cut_sample(sample: &[f64]) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(SpectrumError::EmptySample);
    }
    let len_cut = 1usize << (usize::BITS - 1 - sample.len().leading_zeros());
    Ok(sample[..len_cut].to_vec())
}

/// Returns `sample` followed by zeros up to the smallest power of two not
/// less than `sample.len()`, e.g. 1088 values become 2048.
pub fn expand_sample(sample: &[f64]) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(SpectrumError::EmptySample);
    }
    let mut expanded = sample.to_vec();
    expanded.resize(sample.len().next_power_of_two(), 0.0);
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64 + 1.0).collect()
    }

    #[test]
    fn cut_keeps_power_of_two_prefix() {
        let sample = ramp(1088);
        let cut = cut_sample(&sample).unwrap();
        assert_eq!(cut.len(), 1024);
        assert_eq!(&cut[..], &sample[..1024]);

        for len in [1, 2, 3, 5, 7, 9, 100, 513] {
            let cut = cut_sample(&ramp(len)).unwrap();
            assert!(cut.len().is_power_of_two());
            assert!(cut.len() <= len && cut.len() * 2 > len);
        }
    }

    #[test]
    fn expand_pads_with_zeros() {
        let sample = ramp(1088);
        let expanded = expand_sample(&sample).unwrap();
        assert_eq!(expanded.len(), 2048);
        assert_eq!(&expanded[..1088], &sample[..]);
        assert!(expanded[1088..].iter().all(|&v| v == 0.0));

        assert_eq!(expand_sample(&ramp(3)).unwrap(), vec![1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn powers_of_two_pass_through() {
        let sample = ramp(256);
        assert_eq!(cut_sample(&sample).unwrap(), sample);
        assert_eq!(expand_sample(&sample).unwrap(), sample);
        assert_eq!(cut_sample(&[4.0]).unwrap(), vec![4.0]);
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert!(matches!(cut_sample(&[]), Err(SpectrumError::EmptySample)));
        assert!(matches!(expand_sample(&[]), Err(SpectrumError::EmptySample)));
    }

    #[test]
    fn policy_selects_operation() {
        let sample = ramp(6);
        assert_eq!(LengthPolicy::default(), LengthPolicy::Truncate);
        assert_eq!(LengthPolicy::Truncate.apply(&sample).unwrap().len(), 4);
        assert_eq!(LengthPolicy::Pad.apply(&sample).unwrap().len(), 8);
    }
}
