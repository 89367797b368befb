//! # Analysis Configuration
//!
//! Describes one configured analysis: how to sample, how to bring the
//! sample to a transform length, which band to keep and which base frequency
//! to express orders against. Saved and loaded as JSON.

use serde::{Deserialize, Serialize};

use crate::bandpass::Band;
use crate::error::{Result, check_frequency};
use crate::length::LengthPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumConfig {
    /// Sampling frequency in Hz.
    pub sampling_frequency: f64,
    #[serde(default)]
    pub length_policy: LengthPolicy,
    /// Pass band for filtered spectra and reconstruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<Band>,
    /// When set, spectra are reported in orders of this frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_frequency: Option<f64>,
}

impl SpectrumConfig {
    pub fn new(sampling_frequency: f64) -> Self {
        Self {
            sampling_frequency,
            length_policy: LengthPolicy::default(),
            band: None,
            base_frequency: None,
        }
    }

    pub fn with_band(mut self, low: f64, high: f64) -> Self {
        self.band = Some(Band::new(low, high));
        self
    }

    pub fn with_base_frequency(mut self, base_frequency: f64) -> Self {
        self.base_frequency = Some(base_frequency);
        self
    }

    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    /// Checks that every configured frequency is usable.
    ///
    /// The band edges may be any value; an inverted band is simply empty.
    pub fn validate(&self) -> Result<()> {
        check_frequency("sampling frequency", self.sampling_frequency)?;
        if let Some(base) = self.base_frequency {
            check_frequency("base frequency", base)?;
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
