// Contextual framing of a vocalization
// Urgency clustering, acoustic time-of-day shape, and breath pattern.
// Time-of-day labels describe acoustic shape only; no clock is consulted.

use serde::{Deserialize, Serialize};

use crate::config::UrgencyConfig;
use crate::constants::*;
use crate::features::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextCategory {
    UrgencyCluster,
    TimeOfDay,
    BreathPattern,
}

impl ContextCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextCategory::UrgencyCluster => "urgency_cluster",
            ContextCategory::TimeOfDay => "time_of_day",
            ContextCategory::BreathPattern => "breath_pattern",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFinding {
    pub category: ContextCategory,
    pub label: String,
    pub rationale: String,
    /// Accumulated point total, urgency_cluster only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

/// Produce all context findings for one record. The urgency cluster is
/// always present; time-of-day and breath findings appear only when their
/// acoustic shape matches.
pub fn analyze_context(f: &FeatureRecord, cfg: &UrgencyConfig) -> Vec<ContextFinding> {
    let mut findings = vec![urgency_cluster(f, cfg)];

    if let Some(finding) = time_of_day_shape(f) {
        findings.push(finding);
    }
    if let Some(finding) = breath_pattern(f) {
        findings.push(finding);
    }

    findings
}

fn urgency_cluster(f: &FeatureRecord, cfg: &UrgencyConfig) -> ContextFinding {
    let mut score: i64 = 0;
    let mut signals = Vec::new();

    if f.loudness_mean > cfg.cluster_loudness_min {
        score += 1;
        signals.push("loud");
    }
    if f.duration_seconds < cfg.cluster_duration_max {
        score += 1;
        signals.push("short");
    }
    if f.pitch_std_hz > cfg.cluster_pitch_std_min {
        score += 1;
        signals.push("variable pitch");
    }
    if f.pitch_mean_hz > cfg.cluster_pitch_min {
        score += 1;
        signals.push("high pitch");
    }

    let label = if score >= cfg.critical_min {
        "Critical"
    } else if score >= cfg.moderate_min {
        "Moderate"
    } else {
        "Low"
    };

    let rationale = if signals.is_empty() {
        "No urgency signals present".to_string()
    } else {
        format!("Urgency signals: {}", signals.join(", "))
    };

    ContextFinding {
        category: ContextCategory::UrgencyCluster,
        label: label.to_string(),
        rationale,
        score: Some(score),
    }
}

fn time_of_day_shape(f: &FeatureRecord) -> Option<ContextFinding> {
    // Morning-demand shape: loud, high, short (the breakfast call)
    if f.loudness_mean > CLUSTER_LOUDNESS_MIN
        && f.pitch_mean_hz > CLUSTER_PITCH_MIN
        && f.duration_seconds < CLUSTER_DURATION_MAX
    {
        return Some(ContextFinding {
            category: ContextCategory::TimeOfDay,
            label: "Morning demand".to_string(),
            rationale: "Loud, high, short call shaped like a feeding-time demand".to_string(),
            score: None,
        });
    }

    // Evening-social shape: mid pitch, expressive, unhurried, balanced tone
    if f.pitch_mean_hz >= PITCH_SERIOUS_MAX
        && f.pitch_mean_hz < PITCH_SOCIAL_MAX
        && f.pitch_std_hz >= PITCH_STD_EXPRESSIVE_MIN
        && f.duration_seconds >= DURATION_GREETING_MAX
        && f.spectral_centroid_hz >= SPECTRAL_MELLOW_MAX
        && f.spectral_centroid_hz < SPECTRAL_BALANCED_MAX
    {
        return Some(ContextFinding {
            category: ContextCategory::TimeOfDay,
            label: "Evening social".to_string(),
            rationale: "Relaxed, expressive call shaped like end-of-day social contact".to_string(),
            score: None,
        });
    }

    None
}

fn breath_pattern(f: &FeatureRecord) -> Option<ContextFinding> {
    if f.loudness_std > LOUDNESS_STD_HIGH && f.zero_crossing_rate > ZCR_NORMAL_MAX {
        return Some(ContextFinding {
            category: ContextCategory::BreathPattern,
            label: "Irregular".to_string(),
            rationale: "Wavering volume with rough texture suggests irregular breathing or stress"
                .to_string(),
            score: None,
        });
    }

    if f.loudness_std <= LOUDNESS_STD_LOW && f.zero_crossing_rate < ZCR_SMOOTH_MAX {
        return Some(ContextFinding {
            category: ContextCategory::BreathPattern,
            label: "Controlled".to_string(),
            rationale: "Steady volume and smooth texture suggest controlled, healthy breathing"
                .to_string(),
            score: None,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FeatureRecord {
        FeatureRecord {
            duration_seconds: 1.0,
            pitch_mean_hz: 300.0,
            pitch_std_hz: 20.0,
            loudness_mean: 0.05,
            loudness_std: 0.03,
            spectral_centroid_hz: 2000.0,
            zero_crossing_rate: 0.05,
            out_of_range: Vec::new(),
        }
    }

    fn cluster(findings: &[ContextFinding]) -> &ContextFinding {
        findings
            .iter()
            .find(|f| f.category == ContextCategory::UrgencyCluster)
            .unwrap()
    }

    #[test]
    fn test_cluster_zero_signals_is_low() {
        let findings = analyze_context(&record(), &UrgencyConfig::default());
        let c = cluster(&findings);
        assert_eq!(c.label, "Low");
        assert_eq!(c.score, Some(0));
    }

    #[test]
    fn test_cluster_two_signals_is_moderate() {
        let mut f = record();
        f.loudness_mean = 0.12;
        f.pitch_std_hz = 120.0;
        let findings = analyze_context(&f, &UrgencyConfig::default());
        let c = cluster(&findings);
        assert_eq!(c.label, "Moderate");
        assert_eq!(c.score, Some(2));
    }

    #[test]
    fn test_cluster_all_signals_is_critical() {
        let mut f = record();
        f.loudness_mean = 0.12;
        f.duration_seconds = 0.3;
        f.pitch_std_hz = 60.0;
        f.pitch_mean_hz = 450.0;
        let findings = analyze_context(&f, &UrgencyConfig::default());
        let c = cluster(&findings);
        assert_eq!(c.label, "Critical");
        assert_eq!(c.score, Some(4));
    }

    #[test]
    fn test_morning_demand_shape() {
        let mut f = record();
        f.loudness_mean = 0.12;
        f.pitch_mean_hz = 450.0;
        f.duration_seconds = 0.3;
        let findings = analyze_context(&f, &UrgencyConfig::default());
        let tod = findings
            .iter()
            .find(|c| c.category == ContextCategory::TimeOfDay)
            .unwrap();
        assert_eq!(tod.label, "Morning demand");
    }

    #[test]
    fn test_evening_social_shape() {
        let mut f = record();
        f.pitch_mean_hz = 320.0;
        f.pitch_std_hz = 40.0;
        f.duration_seconds = 1.0;
        f.spectral_centroid_hz = 2100.0;
        let findings = analyze_context(&f, &UrgencyConfig::default());
        let tod = findings
            .iter()
            .find(|c| c.category == ContextCategory::TimeOfDay)
            .unwrap();
        assert_eq!(tod.label, "Evening social");
    }

    #[test]
    fn test_breath_irregular() {
        let mut f = record();
        f.loudness_std = 0.08;
        f.zero_crossing_rate = 0.10;
        let findings = analyze_context(&f, &UrgencyConfig::default());
        let breath = findings
            .iter()
            .find(|c| c.category == ContextCategory::BreathPattern)
            .unwrap();
        assert_eq!(breath.label, "Irregular");
    }

    #[test]
    fn test_breath_controlled() {
        let mut f = record();
        f.loudness_std = 0.01;
        f.zero_crossing_rate = 0.02;
        let findings = analyze_context(&f, &UrgencyConfig::default());
        let breath = findings
            .iter()
            .find(|c| c.category == ContextCategory::BreathPattern)
            .unwrap();
        assert_eq!(breath.label, "Controlled");
    }

    #[test]
    fn test_breath_absent_when_ambiguous() {
        let findings = analyze_context(&record(), &UrgencyConfig::default());
        assert!(findings
            .iter()
            .all(|c| c.category != ContextCategory::BreathPattern));
    }
}
