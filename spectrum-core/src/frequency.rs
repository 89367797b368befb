//! # Frequency Labeling Module
//!
//! Attaches a frequency to every bin of an amplitude spectrum and, for order
//! analysis, re-expresses those frequencies as multiples of a base
//! (rotational) frequency.

use serde::{Deserialize, Serialize};

use crate::error::{Result, check_frequency};

/// One labeled bin of a frequency or order spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Frequency in Hz, or in orders of the base frequency.
    pub frequency: f64,
    pub amplitude: f64,
}

/// Labels amplitude bin `i` with `i * (2 * len / fs)`.
///
/// # Arguments
/// * `result_as` - Amplitude spectrum, one value per one-sided bin
/// * `fs` - Sampling frequency in Hz
pub fn add_frequency_on_as(result_as: &[f64], fs: f64) -> Result<Vec<SpectrumPoint>> {
    let fs = check_frequency("sampling frequency", fs)?;
    let n = (result_as.len() * 2) as f64;
    let resolution = n / fs;
    Ok(result_as
        .iter()
        .enumerate()
        .map(|(index, &amplitude)| SpectrumPoint {
            frequency: resolution * index as f64,
            amplitude,
        })
        .collect())
}

/// Divides every frequency by the base frequency `fb`, leaving amplitudes as-is.
pub fn order_spectrum(result_fs: &[SpectrumPoint], fb: f64) -> Result<Vec<SpectrumPoint>> {
    let fb = check_frequency("base frequency", fb)?;
    Ok(result_fs
        .iter()
        .map(|point| SpectrumPoint {
            frequency: point.frequency / fb,
            amplitude: point.amplitude,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpectrumError;
    use approx::assert_relative_eq;

    #[test]
    fn labels_bins_with_fixed_resolution() {
        let points = add_frequency_on_as(&[1.0, 0.5, 0.25, 0.0], 4.0).unwrap();
        // resolution = 2 * 4 / 4 = 2
        let frequencies: Vec<f64> = points.iter().map(|p| p.frequency).collect();
        assert_eq!(frequencies, vec![0.0, 2.0, 4.0, 6.0]);
        let amplitudes: Vec<f64> = points.iter().map(|p| p.amplitude).collect();
        assert_eq!(amplitudes, vec![1.0, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn order_spectrum_scales_back() {
        let points = add_frequency_on_as(&[3.0, 1.0, 4.0, 1.0, 5.0], 7.0).unwrap();
        let base = 0.37;
        let orders = order_spectrum(&points, base).unwrap();
        for (order, point) in orders.iter().zip(&points) {
            assert_relative_eq!(order.frequency * base, point.frequency, max_relative = 1e-12);
            assert_eq!(order.amplitude, point.amplitude);
        }
    }

    #[test]
    fn zero_frequencies_are_rejected() {
        assert!(matches!(
            add_frequency_on_as(&[1.0], 0.0),
            Err(SpectrumError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            order_spectrum(&[], 0.0),
            Err(SpectrumError::InvalidFrequency { .. })
        ));
        assert!(order_spectrum(&[], f64::NAN).is_err());
    }

    #[test]
    fn points_serialize_as_objects() {
        let point = SpectrumPoint {
            frequency: 12.5,
            amplitude: 0.75,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"frequency":12.5,"amplitude":0.75}"#);
    }
}
