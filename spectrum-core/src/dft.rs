//! # DFT Normalization Module
//!
//! Turns the engine's raw, unnormalized full spectrum into a one-sided
//! discrete spectrum whose magnitudes are the physical amplitudes of the
//! sample's components, then reduces it to an amplitude spectrum.

use crate::complex::{self, ComplexSpectrum};

/// Translates a full FFT result into the one-sided DFT.
///
/// For an input of `N` complex bins only bins `0..N/2` are kept. The DC bin
/// is divided by `N`; every other bin by `N/2`, since it also carries the
/// energy of its discarded negative-frequency mirror.
///
/// The output has half the bin count of the input.
pub fn to_dft(result_fft: &ComplexSpectrum) -> ComplexSpectrum {
    let n = result_fft.bins();
    let half = n / 2;
    let scale = |index: usize, value: f64| {
        let divisor = if index == 0 { n as f64 } else { n as f64 / 2.0 };
        value / divisor
    };

    result_fft
        .iter_bins()
        .take(half)
        .enumerate()
        .map(|(index, (re, im))| (scale(index, re), scale(index, im)))
        .collect()
}

/// Maps a normalized spectrum to one magnitude per bin.
pub fn to_amplitude_spectrum(result_dft: &ComplexSpectrum) -> Vec<f64> {
    result_dft
        .iter_bins()
        .map(|(re, im)| complex::abs_complex(re, im))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn output_is_half_the_input() {
        for bins in [2, 4, 8, 64] {
            let dft = to_dft(&ComplexSpectrum::zeros(bins));
            assert_eq!(dft.len(), bins);
            assert_eq!(dft.bins(), bins / 2);
        }
    }

    #[test]
    fn dc_bin_uses_full_length_divisor() {
        // 8 bins of (8, 8): DC is divided by 8, the rest by 4.
        let raw = ComplexSpectrum::new(vec![8.0; 16]).unwrap();
        let dft = to_dft(&raw);
        assert_eq!(dft.as_slice(), &[1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn discards_negative_frequency_half() {
        let values: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let raw = ComplexSpectrum::new(values).unwrap();
        // 4 bins: keep bins 0 and 1, divisors 4 and 2.
        let dft = to_dft(&raw);
        assert_eq!(dft.as_slice(), &[0.0, 0.25, 1.0, 1.5]);
    }

    #[test]
    fn amplitude_pairs_real_with_imaginary() {
        let dft = ComplexSpectrum::new(vec![3.0, 4.0, 0.0, -2.0, 1.0, 0.0]).unwrap();
        let amplitudes = to_amplitude_spectrum(&dft);
        assert_eq!(amplitudes.len(), 3);
        assert_abs_diff_eq!(amplitudes[0], 5.0);
        assert_abs_diff_eq!(amplitudes[1], 2.0);
        assert_abs_diff_eq!(amplitudes[2], 1.0);
    }
}
