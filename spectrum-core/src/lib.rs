// spectrum-core/src/lib.rs

//! The core logic for spectral and order analysis of sampled signals.
//! This crate turns a real time-domain sample into normalized one-sided
//! spectra, amplitude spectra and frequency- or order-labeled spectra, and
//! band-limits samples in the frequency domain. It performs no I/O.

pub mod bandpass;
pub mod complex;
pub mod config;
pub mod dft;
pub mod error;
pub mod fft;
pub mod frequency;
pub mod length;
pub mod pipeline;

pub use bandpass::{Band, through_band_pass};
pub use complex::{ComplexSpectrum, abs_complex, get_complexes, get_imaginarys, get_reals};
pub use config::SpectrumConfig;
pub use dft::{to_amplitude_spectrum, to_dft};
pub use error::{Result, SpectrumError};
pub use fft::{FourierEngine, RustFftEngine};
pub use frequency::{SpectrumPoint, add_frequency_on_as, order_spectrum};
pub use length::{LengthPolicy, cut_sample, expand_sample};
pub use pipeline::{
    RawTransform, SpectrumPipeline, amplitude_spectrum, analyze, as_through_bandpass, filter,
    get_res_fft, sample_through_bandpass,
};
