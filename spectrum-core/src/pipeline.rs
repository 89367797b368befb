//! # Spectral Pipeline Module
//!
//! Composes length normalization, the transform engine, the band-pass mask
//! and DFT normalization into the analyses callers actually run:
//! - the raw full spectrum of a sample
//! - its amplitude spectrum, optionally band-passed
//! - a band-passed reconstruction of the sample itself
//!
//! The free functions use [`RustFftEngine`] and truncate samples to a power
//! of two. [`SpectrumPipeline`] lets callers pick the engine and the
//! [`LengthPolicy`].

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::bandpass::{self, Band};
use crate::complex::ComplexSpectrum;
use crate::config::SpectrumConfig;
use crate::dft;
use crate::error::{Result, SpectrumError};
use crate::fft::{FourierEngine, RustFftEngine};
use crate::frequency::{self, SpectrumPoint};
use crate::length::LengthPolicy;

/// The engine's full spectrum of a length-normalized sample.
///
/// The engine and length are kept for inverting the spectrum later.
#[derive(Debug, Clone)]
pub struct RawTransform<E> {
    pub spectrum: ComplexSpectrum,
    pub engine: E,
    /// Sample length after normalization.
    pub len: usize,
}

#[derive(Debug, Clone)]
pub struct SpectrumPipeline<E = RustFftEngine> {
    length_policy: LengthPolicy,
    engine: PhantomData<E>,
}

impl<E> Default for SpectrumPipeline<E> {
    fn default() -> Self {
        Self::new(LengthPolicy::default())
    }
}

impl<E> SpectrumPipeline<E> {
    pub fn new(length_policy: LengthPolicy) -> Self {
        Self {
            length_policy,
            engine: PhantomData,
        }
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }
}

impl<E: FourierEngine> SpectrumPipeline<E> {
    /// Normalizes the sample length and runs the forward transform.
    pub fn raw_transform(&self, sample: &[f64]) -> Result<RawTransform<E>> {
        let normalized = self.length_policy.apply(sample)?;
        let len = normalized.len();
        if len < sample.len() {
            warn!(
                "[FFT] Truncation dropped {} of {} samples",
                sample.len() - len,
                sample.len()
            );
        }
        debug!(
            "[FFT] Sample length {} normalized to {} ({:?})",
            sample.len(),
            len,
            self.length_policy
        );

        let engine = E::new(len)?;
        let complex = engine.to_complex_array(&normalized)?;
        let spectrum = engine.transform(&complex)?;
        trace!("[FFT] Raw spectrum has {} bins", spectrum.bins());

        Ok(RawTransform {
            spectrum,
            engine,
            len,
        })
    }

    /// Amplitude of every one-sided bin of the sample.
    pub fn amplitude_spectrum(&self, sample: &[f64]) -> Result<Vec<f64>> {
        let RawTransform { spectrum, .. } = self.raw_transform(sample)?;
        let result_dft = dft::to_dft(&spectrum);
        Ok(dft::to_amplitude_spectrum(&result_dft))
    }

    /// Amplitude spectrum restricted to `band`.
    ///
    /// The mask is applied to the full spectrum, before DFT normalization,
    /// since its resolution is defined over the full bin count.
    pub fn amplitude_spectrum_through_band(
        &self,
        sample: &[f64],
        fs: f64,
        band: Band,
    ) -> Result<Vec<f64>> {
        let RawTransform { spectrum, .. } = self.raw_transform(sample)?;
        let passed = self.mask(&spectrum, fs, band)?;
        let result_dft = dft::to_dft(&passed);
        Ok(dft::to_amplitude_spectrum(&result_dft))
    }

    /// Reconstructs the sample with everything outside `band` removed.
    ///
    /// The result has the normalized sample length.
    pub fn sample_through_band(&self, sample: &[f64], fs: f64, band: Band) -> Result<Vec<f64>> {
        let RawTransform {
            spectrum,
            engine,
            len,
        } = self.raw_transform(sample)?;
        let passed = self.mask(&spectrum, fs, band)?;
        let completed = engine.complete_spectrum(&passed)?;
        let sample_complex = engine.inverse_transform(&completed)?;

        let mut sample_real = engine.from_complex_array(&sample_complex);
        sample_real.truncate(len);
        Ok(sample_real)
    }

    /// Runs the analysis described by `config`.
    ///
    /// Band-passes when a band is configured, labels every bin with its
    /// frequency, and converts to orders when a base frequency is set.
    pub fn analyze(&self, sample: &[f64], config: &SpectrumConfig) -> Result<Vec<SpectrumPoint>> {
        config.validate()?;
        let fs = config.sampling_frequency;
        let amplitudes = match config.band {
            Some(band) => self.amplitude_spectrum_through_band(sample, fs, band)?,
            None => self.amplitude_spectrum(sample)?,
        };
        let labeled = frequency::add_frequency_on_as(&amplitudes, fs)?;
        match config.base_frequency {
            Some(fb) => frequency::order_spectrum(&labeled, fb),
            None => Ok(labeled),
        }
    }

    /// Band-passed reconstruction using the band from `config`.
    pub fn filter(&self, sample: &[f64], config: &SpectrumConfig) -> Result<Vec<f64>> {
        config.validate()?;
        let band = config.band.ok_or(SpectrumError::MissingBand)?;
        self.sample_through_band(sample, config.sampling_frequency, band)
    }

    fn mask(&self, spectrum: &ComplexSpectrum, fs: f64, band: Band) -> Result<ComplexSpectrum> {
        debug!(
            "[BANDPASS] Passing {}..={} Hz at fs = {} Hz over {} bins",
            band.low,
            band.high,
            fs,
            spectrum.bins()
        );
        bandpass::through_band_pass(spectrum, fs, band.low, band.high)
    }
}

/// Truncates the sample to a power of two and returns its raw full spectrum.
pub fn get_res_fft(sample: &[f64]) -> Result<RawTransform<RustFftEngine>> {
    SpectrumPipeline::<RustFftEngine>::default().raw_transform(sample)
}

/// Raw transform, DFT normalization, then amplitudes.
pub fn amplitude_spectrum(sample: &[f64]) -> Result<Vec<f64>> {
    SpectrumPipeline::<RustFftEngine>::default().amplitude_spectrum(sample)
}

/// Like [`amplitude_spectrum`], with bins outside `[f1, f2]` zeroed first.
pub fn as_through_bandpass(sample: &[f64], fs: f64, f1: f64, f2: f64) -> Result<Vec<f64>> {
    SpectrumPipeline::<RustFftEngine>::default().amplitude_spectrum_through_band(
        sample,
        fs,
        Band::new(f1, f2),
    )
}

/// Band-passes the sample to `[f1, f2]` and transforms it back.
///
/// # Arguments
/// * `sample` - Original sample
/// * `fs` - Sampling frequency in Hz
/// * `f1` - Lower edge of the pass band
/// * `f2` - Upper edge of the pass band
pub fn sample_through_bandpass(sample: &[f64], fs: f64, f1: f64, f2: f64) -> Result<Vec<f64>> {
    SpectrumPipeline::<RustFftEngine>::default().sample_through_band(
        sample,
        fs,
        Band::new(f1, f2),
    )
}

/// Configured analysis with the default engine.
pub fn analyze(sample: &[f64], config: &SpectrumConfig) -> Result<Vec<SpectrumPoint>> {
    SpectrumPipeline::<RustFftEngine>::new(config.length_policy).analyze(sample, config)
}

/// Configured band-pass reconstruction with the default engine.
pub fn filter(sample: &[f64], config: &SpectrumConfig) -> Result<Vec<f64>> {
    SpectrumPipeline::<RustFftEngine>::new(config.length_policy).filter(sample, config)
}
