// Acoustic health screening
// Five independent checks, each yielding at most one finding. These are
// observations about the recording, not a veterinary diagnosis.

use serde::{Deserialize, Serialize};

use crate::config::HealthConfig;
use crate::features::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    Respiratory,
    VocalStrain,
    EnergyLevel,
    Neurological,
    AgeRelated,
}

impl HealthCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCategory::Respiratory => "respiratory",
            HealthCategory::VocalStrain => "vocal_strain",
            HealthCategory::EnergyLevel => "energy_level",
            HealthCategory::Neurological => "neurological",
            HealthCategory::AgeRelated => "age_related",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Concern,
    HighConcern,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Concern => "concern",
            Severity::HighConcern => "high_concern",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthFinding {
    pub category: HealthCategory,
    pub severity: Severity,
    pub description: String,
}

impl HealthFinding {
    fn new(category: HealthCategory, severity: Severity, description: &str) -> Self {
        Self {
            category,
            severity,
            description: description.to_string(),
        }
    }
}

/// Run all health checks against one record.
pub fn assess_health(f: &FeatureRecord, cfg: &HealthConfig) -> Vec<HealthFinding> {
    let mut findings = Vec::new();

    // Respiratory: sustained roughness suggests labored or congested breathing
    if f.zero_crossing_rate > cfg.respiratory_zcr_high_concern {
        findings.push(HealthFinding::new(
            HealthCategory::Respiratory,
            Severity::HighConcern,
            "Pronounced vocal roughness; consider checking for respiratory congestion",
        ));
    } else if f.zero_crossing_rate >= cfg.respiratory_zcr_concern {
        findings.push(HealthFinding::new(
            HealthCategory::Respiratory,
            Severity::Concern,
            "Elevated vocal roughness; worth monitoring across future calls",
        ));
    } else if f.zero_crossing_rate < cfg.respiratory_zcr_healthy_max {
        findings.push(HealthFinding::new(
            HealthCategory::Respiratory,
            Severity::Info,
            "Smooth vocal texture consistent with clear airways",
        ));
    }

    if f.loudness_mean > cfg.strain_loudness_min && f.loudness_std > cfg.strain_loudness_std_min {
        findings.push(HealthFinding::new(
            HealthCategory::VocalStrain,
            Severity::Concern,
            "Very loud, unsteady delivery may indicate vocal strain",
        ));
    }

    if f.loudness_mean < cfg.lethargy_loudness_max
        && f.spectral_centroid_hz < cfg.lethargy_spectral_max
    {
        findings.push(HealthFinding::new(
            HealthCategory::EnergyLevel,
            Severity::Concern,
            "Weak, muted vocalization; possible lethargy or low energy",
        ));
    }

    if f.pitch_std_hz > cfg.neuro_pitch_std_min && f.duration_seconds > cfg.neuro_duration_min {
        findings.push(HealthFinding::new(
            HealthCategory::Neurological,
            Severity::HighConcern,
            "Extreme pitch instability over a long call; atypical vocal control",
        ));
    }

    if f.pitch_mean_hz < cfg.age_pitch_max
        && f.zero_crossing_rate >= cfg.age_zcr_min
        && f.zero_crossing_rate <= cfg.age_zcr_max
        && f.spectral_centroid_hz < cfg.age_spectral_max
    {
        findings.push(HealthFinding::new(
            HealthCategory::AgeRelated,
            Severity::Info,
            "Deep, slightly rough voice typical of a senior cat",
        ));
    }

    findings
}
