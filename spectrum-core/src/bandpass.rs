//! # Band-Pass Module
//!
//! Zeroes the bins of a full two-sided spectrum that fall outside a
//! frequency window. The mask works on whole bins: a real part and its
//! imaginary partner always get the same decision, so phase is preserved for
//! everything that passes.

use serde::{Deserialize, Serialize};

use crate::complex::ComplexSpectrum;
use crate::error::{Result, check_frequency};

/// A closed frequency window `[low, high]` in Hz.
///
/// `low > high` is an empty window that passes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.low && frequency <= self.high
    }
}

/// Passes the bins of `result_fft` whose frequency lies in `[f1, f2]`.
///
/// With `N` complex bins the resolution is `fs / N`, and the value at flat
/// index `j` belongs to bin `j / 2`. The output has the input's length and
/// can be fed to either the DFT normalizer or the inverse transform.
pub fn through_band_pass(
    result_fft: &ComplexSpectrum,
    fs: f64,
    f1: f64,
    f2: f64,
) -> Result<ComplexSpectrum> {
    let fs = check_frequency("sampling frequency", fs)?;
    let band = Band::new(f1, f2);
    let resolution = fs / result_fft.bins() as f64;

    Ok(result_fft
        .iter_bins()
        .enumerate()
        .map(|(bin, (re, im))| {
            let f = bin as f64 * resolution;
            if band.contains(f) { (re, im) } else { (0.0, 0.0) }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(bins: usize) -> ComplexSpectrum {
        ComplexSpectrum::new(vec![1.0; bins * 2]).unwrap()
    }

    #[test]
    fn keeps_only_bins_inside_window() {
        // 8 bins at fs = 8: bin k sits at k Hz.
        let passed = through_band_pass(&ones(8), 8.0, 2.0, 3.0).unwrap();
        let expected = [
            0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(passed.as_slice(), &expected);
    }

    #[test]
    fn never_splits_complex_pairs() {
        let values: Vec<f64> = (1..=32).map(|i| i as f64).collect();
        let spectrum = ComplexSpectrum::new(values).unwrap();
        for (f1, f2) in [(0.0, 0.0), (1.5, 7.2), (3.0, 3.0), (10.0, 100.0)] {
            let passed = through_band_pass(&spectrum, 44.1, f1, f2).unwrap();
            assert_eq!(passed.len(), spectrum.len());
            for ((re, im), (orig_re, orig_im)) in passed.iter_bins().zip(spectrum.iter_bins()) {
                let kept_re = re == orig_re;
                let kept_im = im == orig_im;
                assert_eq!(kept_re, kept_im);
                if !kept_re {
                    assert_eq!((re, im), (0.0, 0.0));
                }
            }
        }
    }

    #[test]
    fn inverted_window_zeroes_everything() {
        let passed = through_band_pass(&ones(16), 1000.0, 300.0, 100.0).unwrap();
        assert!(passed.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn window_edges_are_inclusive() {
        let band = Band::new(1.0, 2.0);
        assert!(band.contains(1.0));
        assert!(band.contains(2.0));
        assert!(!band.contains(2.0001));

        let passed = through_band_pass(&ones(4), 4.0, 1.0, 1.0).unwrap();
        assert_eq!(passed.as_slice(), &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn invalid_sampling_frequency_is_rejected() {
        assert!(through_band_pass(&ones(4), 0.0, 0.0, 1.0).is_err());
        assert!(through_band_pass(&ones(4), f64::INFINITY, 0.0, 1.0).is_err());
    }
}
