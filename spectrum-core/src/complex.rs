//! # Complex Layout Module
//!
//! Spectra travel through the crate as flat `f64` sequences laid out as
//! `[re0, im0, re1, im1, ...]`. This module converts between that layout and
//! separate real/imaginary sequences, and owns the [`ComplexSpectrum`] type
//! that guarantees the layout's even length.

use crate::error::{Result, SpectrumError};

/// An interleaved complex sequence of even length.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSpectrum {
    values: Vec<f64>,
}

impl ComplexSpectrum {
    /// Wraps an interleaved sequence, rejecting odd lengths.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() % 2 != 0 {
            return Err(SpectrumError::OddLength(values.len()));
        }
        Ok(Self { values })
    }

    /// A spectrum of `bins` complex zeros.
    pub fn zeros(bins: usize) -> Self {
        Self {
            values: vec![0.0; bins * 2],
        }
    }

    /// Interleaves two equal-length sequences.
    pub fn from_parts(reals: &[f64], imaginarys: &[f64]) -> Result<Self> {
        Ok(pairs(reals, imaginarys)?.collect())
    }

    /// Number of complex bins (half the flat length).
    pub fn bins(&self) -> usize {
        self.values.len() / 2
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn reals(&self) -> Vec<f64> {
        self.values.iter().step_by(2).copied().collect()
    }

    pub fn imaginarys(&self) -> Vec<f64> {
        self.values.iter().skip(1).step_by(2).copied().collect()
    }

    /// Iterates over `(re, im)` pairs, one per bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for ComplexSpectrum {
    type Error = SpectrumError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl FromIterator<(f64, f64)> for ComplexSpectrum {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let values = iter.into_iter().flat_map(|(re, im)| [re, im]).collect();
        Self { values }
    }
}

impl AsRef<[f64]> for ComplexSpectrum {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Pairs `reals[i]` with `imaginarys[i]`, refusing sequences of different length.
pub fn pairs<'a>(
    reals: &'a [f64],
    imaginarys: &'a [f64],
) -> Result<impl Iterator<Item = (f64, f64)> + 'a> {
    if reals.len() != imaginarys.len() {
        return Err(SpectrumError::LengthMismatch {
            reals: reals.len(),
            imaginarys: imaginarys.len(),
        });
    }
    Ok(reals.iter().copied().zip(imaginarys.iter().copied()))
}

/// Elements at even positions of an interleaved sequence.
pub fn get_reals(complex: &[f64]) -> Result<Vec<f64>> {
    check_even(complex)?;
    Ok(complex.iter().step_by(2).copied().collect())
}

/// Elements at odd positions of an interleaved sequence.
pub fn get_imaginarys(complex: &[f64]) -> Result<Vec<f64>> {
    check_even(complex)?;
    Ok(complex.iter().skip(1).step_by(2).copied().collect())
}

/// Interleaves two equal-length sequences into one of twice the length.
pub fn get_complexes(reals: &[f64], imaginarys: &[f64]) -> Result<Vec<f64>> {
    ComplexSpectrum::from_parts(reals, imaginarys).map(ComplexSpectrum::into_vec)
}

/// Euclidean magnitude of `real + i * imaginary`.
pub fn abs_complex(real: f64, imaginary: f64) -> f64 {
    (real * real + imaginary * imaginary).sqrt()
}

fn check_even(complex: &[f64]) -> Result<()> {
    if complex.len() % 2 != 0 {
        return Err(SpectrumError::OddLength(complex.len()));
    }
    Ok(())
}
