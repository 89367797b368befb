//! # Fast Fourier Transform (FFT) Module
//!
//! The spectral pipeline never computes a transform itself. It talks to a
//! [`FourierEngine`], which owns the forward and inverse power-of-two
//! transforms and the interleaved complex-buffer layout they operate on.
//!
//! ## Features
//! - Engine trait so any power-of-two complex FFT can be substituted
//! - [`RustFftEngine`], backed by RustFFT, planned once per size
//! - Conjugate mirroring to rebuild a full spectrum from its positive half
//! - Inverse transform scaled by `1/n`, so forward then inverse is identity

use std::fmt;
use std::sync::Arc;

use rustfft::{Fft, FftPlanner, num_complex::Complex};

use crate::complex::ComplexSpectrum;
use crate::error::{Result, SpectrumError};

/// A power-of-two complex transform over interleaved buffers.
pub trait FourierEngine: Sized {
    /// Builds an engine for transforms of `size` points.
    ///
    /// `size` must be a power of two larger than 1.
    fn new(size: usize) -> Result<Self>;

    fn size(&self) -> usize;

    /// Forward transform, unnormalized, full two-sided output.
    fn transform(&self, input: &ComplexSpectrum) -> Result<ComplexSpectrum>;

    /// Inverse transform, scaled by `1/size`.
    fn inverse_transform(&self, input: &ComplexSpectrum) -> Result<ComplexSpectrum>;

    /// A zeroed buffer of `size` complex values.
    fn create_complex_array(&self) -> ComplexSpectrum {
        ComplexSpectrum::zeros(self.size())
    }

    /// Lifts a real sample into a complex buffer with zero imaginary parts.
    fn to_complex_array(&self, sample: &[f64]) -> Result<ComplexSpectrum> {
        check_size(self.size(), sample.len())?;
        Ok(sample.iter().map(|&re| (re, 0.0)).collect())
    }

    /// Real parts of a complex buffer.
    fn from_complex_array(&self, complex: &ComplexSpectrum) -> Vec<f64> {
        complex.reals()
    }

    /// Rebuilds the negative-frequency half from the positive half.
    ///
    /// For `k` in `1..size/2`, bin `size - k` becomes the conjugate of bin
    /// `k`. The DC and Nyquist bins are left untouched.
    fn complete_spectrum(&self, spectrum: &ComplexSpectrum) -> Result<ComplexSpectrum> {
        let size = self.size();
        check_size(size, spectrum.bins())?;
        let mut values = spectrum.as_slice().to_vec();
        for k in 1..size / 2 {
            values[2 * (size - k)] = values[2 * k];
            values[2 * (size - k) + 1] = -values[2 * k + 1];
        }
        ComplexSpectrum::new(values)
    }
}

/// [`FourierEngine`] backed by RustFFT.
#[derive(Clone)]
pub struct RustFftEngine {
    size: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl RustFftEngine {
    fn process(
        &self,
        plan: &Arc<dyn Fft<f64>>,
        input: &ComplexSpectrum,
    ) -> Result<Vec<Complex<f64>>> {
        check_size(self.size, input.bins())?;
        let mut buffer: Vec<Complex<f64>> = input
            .iter_bins()
            .map(|(re, im)| Complex { re, im })
            .collect();
        plan.process(&mut buffer);
        Ok(buffer)
    }
}

impl FourierEngine for RustFftEngine {
    fn new(size: usize) -> Result<Self> {
        if size < 2 || !size.is_power_of_two() {
            return Err(SpectrumError::TransformSize(size));
        }
        let mut planner = FftPlanner::new();
        Ok(Self {
            size,
            forward: planner.plan_fft_forward(size),
            inverse: planner.plan_fft_inverse(size),
        })
    }

    fn size(&self) -> usize {
        self.size
    }

    fn transform(&self, input: &ComplexSpectrum) -> Result<ComplexSpectrum> {
        let buffer = self.process(&self.forward, input)?;
        Ok(buffer.into_iter().map(|c| (c.re, c.im)).collect())
    }

    fn inverse_transform(&self, input: &ComplexSpectrum) -> Result<ComplexSpectrum> {
        let buffer = self.process(&self.inverse, input)?;
        let scale = self.size as f64;
        Ok(buffer
            .into_iter()
            .map(|c| (c.re / scale, c.im / scale))
            .collect())
    }
}

impl fmt::Debug for RustFftEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustFftEngine").field("size", &self.size).finish()
    }
}

fn check_size(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(SpectrumError::SizeMismatch { expected, actual });
    }
    Ok(())
}
