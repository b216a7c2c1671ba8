// Catsense Analysis Configuration
// All interpretation thresholds collected into one serializable value object.
// Defaults come from constants.rs; a JSON file can override any subset.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub urgency: UrgencyConfig,
    pub health: HealthConfig,
    pub confidence: ConfidenceConfig,
    pub motion: MotionConfig,
    pub agreement: AgreementConfig,
}

impl AnalysisConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Urgency cluster scoring: one point per matching signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyConfig {
    pub cluster_loudness_min: f64,
    pub cluster_duration_max: f64,
    pub cluster_pitch_std_min: f64,
    pub cluster_pitch_min: f64,
    pub moderate_min: i64,
    pub critical_min: i64,
    /// Floors that escalate the pitch-band urgency seed to at least High
    pub escalation_duration_min: f64,
    pub escalation_loudness_min: f64,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            cluster_loudness_min: CLUSTER_LOUDNESS_MIN,
            cluster_duration_max: CLUSTER_DURATION_MAX,
            cluster_pitch_std_min: CLUSTER_PITCH_STD_MIN,
            cluster_pitch_min: CLUSTER_PITCH_MIN,
            moderate_min: CLUSTER_MODERATE_MIN,
            critical_min: CLUSTER_CRITICAL_MIN,
            escalation_duration_min: URGENCY_ESCALATION_DURATION_MIN,
            escalation_loudness_min: URGENCY_ESCALATION_LOUDNESS_MIN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub respiratory_zcr_high_concern: f64,
    pub respiratory_zcr_concern: f64,
    pub respiratory_zcr_healthy_max: f64,
    pub strain_loudness_min: f64,
    pub strain_loudness_std_min: f64,
    pub lethargy_loudness_max: f64,
    pub lethargy_spectral_max: f64,
    pub neuro_pitch_std_min: f64,
    pub neuro_duration_min: f64,
    pub age_pitch_max: f64,
    pub age_zcr_min: f64,
    pub age_zcr_max: f64,
    pub age_spectral_max: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            respiratory_zcr_high_concern: RESPIRATORY_ZCR_HIGH_CONCERN,
            respiratory_zcr_concern: RESPIRATORY_ZCR_CONCERN,
            respiratory_zcr_healthy_max: RESPIRATORY_ZCR_HEALTHY_MAX,
            strain_loudness_min: STRAIN_LOUDNESS_MIN,
            strain_loudness_std_min: LOUDNESS_STD_HIGH,
            lethargy_loudness_max: LETHARGY_LOUDNESS_MAX,
            lethargy_spectral_max: LETHARGY_SPECTRAL_MAX,
            neuro_pitch_std_min: NEURO_PITCH_STD_MIN,
            neuro_duration_min: NEURO_DURATION_MIN,
            age_pitch_max: AGE_PITCH_MAX,
            age_zcr_min: AGE_ZCR_MIN,
            age_zcr_max: AGE_ZCR_MAX,
            age_spectral_max: AGE_SPECTRAL_MAX,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub pitch_min: f64,
    pub pitch_max: f64,
    pub duration_min: f64,
    pub duration_max: f64,
    pub spectral_min: f64,
    pub spectral_max: f64,
    pub min_details: usize,
    pub very_high_min: f64,
    pub high_min: f64,
    pub medium_min: f64,
    pub low_min: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            pitch_min: PLAUSIBLE_PITCH_MIN,
            pitch_max: PLAUSIBLE_PITCH_MAX,
            duration_min: PLAUSIBLE_DURATION_MIN,
            duration_max: PLAUSIBLE_DURATION_MAX,
            spectral_min: PLAUSIBLE_SPECTRAL_MIN,
            spectral_max: PLAUSIBLE_SPECTRAL_MAX,
            min_details: CONFIDENCE_MIN_DETAILS,
            very_high_min: CONFIDENCE_VERY_HIGH_MIN,
            high_min: CONFIDENCE_HIGH_MIN,
            medium_min: CONFIDENCE_MEDIUM_MIN,
            low_min: CONFIDENCE_LOW_MIN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub high_threshold: f64,
    pub medium_threshold: f64,
    pub sample_stride: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            high_threshold: MOTION_HIGH_THRESHOLD,
            medium_threshold: MOTION_MEDIUM_THRESHOLD,
            sample_stride: MOTION_SAMPLE_STRIDE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgreementConfig {
    pub high_min: f64,
    pub moderate_min: f64,
}

impl Default for AgreementConfig {
    fn default() -> Self {
        Self {
            high_min: AGREEMENT_HIGH_MIN,
            moderate_min: AGREEMENT_MODERATE_MIN,
        }
    }
}
