// Feature records shared between extraction and analysis

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CatSenseError, Result};

/// Raw measurements straight out of extraction. Any stage that fails to
/// produce a value leaves `None` rather than a silent zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFeatures {
    pub duration_seconds: Option<f64>,
    pub pitch_mean_hz: Option<f64>,
    pub pitch_std_hz: Option<f64>,
    pub loudness_mean: Option<f64>,
    pub loudness_std: Option<f64>,
    pub spectral_centroid_hz: Option<f64>,
    pub zero_crossing_rate: Option<f64>,
}

/// Validated acoustic feature set for one vocalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub duration_seconds: f64,
    pub pitch_mean_hz: f64,
    pub pitch_std_hz: f64,
    pub loudness_mean: f64,
    pub loudness_std: f64,
    pub spectral_centroid_hz: f64,
    pub zero_crossing_rate: f64,
    /// Field names that were clamped into range during validation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub out_of_range: Vec<String>,
}

impl FeatureRecord {
    /// Validate raw measurements into a complete record.
    ///
    /// Every field must be present. Negative values clamp to zero and a
    /// zero crossing rate above 1.0 clamps to 1.0; clamped field names are
    /// recorded in `out_of_range` so downstream reporting can surface them.
    pub fn from_raw(raw: &RawFeatures) -> Result<Self> {
        let mut out_of_range = Vec::new();

        let mut field = |name: &str, value: Option<f64>| -> Result<f64> {
            let v = value
                .ok_or_else(|| CatSenseError::InvalidFeature(name.to_string()))?;
            if v < 0.0 {
                out_of_range.push(name.to_string());
                Ok(0.0)
            } else {
                Ok(v)
            }
        };

        let duration_seconds = field("duration_seconds", raw.duration_seconds)?;
        let pitch_mean_hz = field("pitch_mean_hz", raw.pitch_mean_hz)?;
        let pitch_std_hz = field("pitch_std_hz", raw.pitch_std_hz)?;
        let loudness_mean = field("loudness_mean", raw.loudness_mean)?;
        let loudness_std = field("loudness_std", raw.loudness_std)?;
        let spectral_centroid_hz = field("spectral_centroid_hz", raw.spectral_centroid_hz)?;
        let mut zero_crossing_rate = field("zero_crossing_rate", raw.zero_crossing_rate)?;

        if zero_crossing_rate > 1.0 {
            out_of_range.push("zero_crossing_rate".to_string());
            zero_crossing_rate = 1.0;
        }

        Ok(Self {
            duration_seconds,
            pitch_mean_hz,
            pitch_std_hz,
            loudness_mean,
            loudness_std,
            spectral_centroid_hz,
            zero_crossing_rate,
            out_of_range,
        })
    }

    /// Quick gate for whether a segment looks like a cat vocalization at
    /// all. Used by the batch path to skip silence and ambient noise.
    pub fn is_plausible_meow(&self) -> bool {
        self.pitch_mean_hz >= MEOW_PITCH_MIN
            && self.pitch_mean_hz <= MEOW_PITCH_MAX
            && self.pitch_std_hz > MEOW_PITCH_STD_MIN
            && self.duration_seconds >= MEOW_DURATION_MIN
            && self.duration_seconds <= MEOW_DURATION_MAX
    }
}

/// Per-sample motion magnitudes from the video stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionTrace {
    /// Mean absolute luma difference per sampled frame, 0-255 scale
    pub magnitudes: Vec<f64>,
    pub duration_seconds: f64,
}

impl MotionTrace {
    pub fn mean(&self) -> f64 {
        if self.magnitudes.is_empty() {
            return 0.0;
        }
        self.magnitudes.iter().sum::<f64>() / self.magnitudes.len() as f64
    }

    pub fn variance(&self) -> f64 {
        if self.magnitudes.len() < 2 {
            return 0.0;
        }
        let mean = self.mean();
        self.magnitudes
            .iter()
            .map(|m| (m - mean).powi(2))
            .sum::<f64>()
            / self.magnitudes.len() as f64
    }
}
