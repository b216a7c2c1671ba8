// Confidence scoring
// Eight boolean checks, one point each; score = passed / 8.

use serde::{Deserialize, Serialize};

use crate::analysis::interpreter::{CorrectionOutcome, Interpretation};
use crate::analysis::patterns::PatternMatch;
use crate::config::ConfidenceConfig;
use crate::features::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl ConfidenceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLabel::VeryHigh => "Very High",
            ConfidenceLabel::High => "High",
            ConfidenceLabel::Medium => "Medium",
            ConfidenceLabel::Low => "Low",
            ConfidenceLabel::VeryLow => "Very Low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceFactor {
    pub name: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceResult {
    pub label: ConfidenceLabel,
    pub score: f64,
    pub contributing_factors: Vec<ConfidenceFactor>,
}

/// Score how trustworthy the interpretation is. Factor order is fixed for
/// report readability.
pub fn score(
    features: &FeatureRecord,
    interpretation: &Interpretation,
    patterns: &[PatternMatch],
    cfg: &ConfidenceConfig,
) -> ConfidenceResult {
    let checks: [(&str, bool); 8] = [
        (
            "pitch_in_plausible_range",
            features.pitch_mean_hz >= cfg.pitch_min && features.pitch_mean_hz <= cfg.pitch_max,
        ),
        (
            "duration_in_plausible_range",
            features.duration_seconds >= cfg.duration_min
                && features.duration_seconds <= cfg.duration_max,
        ),
        (
            "spectral_centroid_in_plausible_range",
            features.spectral_centroid_hz >= cfg.spectral_min
                && features.spectral_centroid_hz <= cfg.spectral_max,
        ),
        (
            "analysis_details_complete",
            interpretation.details.len() >= cfg.min_details,
        ),
        // Always true once the interpreter completes; kept for symmetry
        // with degraded inputs
        ("urgency_determinable", true),
        ("emotional_state_determinable", true),
        ("vocal_pattern_detected", !patterns.is_empty()),
        (
            "labels_consistent",
            interpretation.correction != CorrectionOutcome::Skipped,
        ),
    ];

    let contributing_factors: Vec<ConfidenceFactor> = checks
        .iter()
        .map(|(name, passed)| ConfidenceFactor {
            name: name.to_string(),
            passed: *passed,
        })
        .collect();

    let passed = contributing_factors.iter().filter(|f| f.passed).count();
    let score = passed as f64 / checks.len() as f64;

    let label = if score >= cfg.very_high_min {
        ConfidenceLabel::VeryHigh
    } else if score >= cfg.high_min {
        ConfidenceLabel::High
    } else if score >= cfg.medium_min {
        ConfidenceLabel::Medium
    } else if score >= cfg.low_min {
        ConfidenceLabel::Low
    } else {
        ConfidenceLabel::VeryLow
    };

    ConfidenceResult {
        label,
        score,
        contributing_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EmotionalState, UrgencyLevel};

    fn record() -> FeatureRecord {
        FeatureRecord {
            duration_seconds: 1.0,
            pitch_mean_hz: 300.0,
            pitch_std_hz: 20.0,
            loudness_mean: 0.05,
            loudness_std: 0.01,
            spectral_centroid_hz: 2000.0,
            zero_crossing_rate: 0.05,
            out_of_range: Vec::new(),
        }
    }

    fn interpretation(correction: CorrectionOutcome) -> Interpretation {
        Interpretation {
            primary_meaning: "Normal social communication".to_string(),
            emotional_state: EmotionalState::CalmControlled,
            urgency_level: UrgencyLevel::Low,
            details: vec!["d".to_string(); 7],
            correction,
        }
    }

    fn pattern() -> PatternMatch {
        PatternMatch {
            name: crate::analysis::patterns::PatternName::Trill,
            meaning: "test".to_string(),
        }
    }

    #[test]
    fn test_all_checks_pass() {
        let result = score(
            &record(),
            &interpretation(CorrectionOutcome::NotRequired),
            &[pattern()],
            &ConfidenceConfig::default(),
        );
        assert_eq!(result.score, 1.0);
        assert_eq!(result.label, ConfidenceLabel::VeryHigh);
        assert_eq!(result.contributing_factors.len(), 8);
    }

    #[test]
    fn test_no_pattern_drops_one_point() {
        let result = score(
            &record(),
            &interpretation(CorrectionOutcome::NotRequired),
            &[],
            &ConfidenceConfig::default(),
        );
        assert!((result.score - 7.0 / 8.0).abs() < 1e-9);
        assert_eq!(result.label, ConfidenceLabel::VeryHigh);
    }

    #[test]
    fn test_skipped_correction_fails_consistency_factor() {
        let result = score(
            &record(),
            &interpretation(CorrectionOutcome::Skipped),
            &[pattern()],
            &ConfidenceConfig::default(),
        );
        let factor = result
            .contributing_factors
            .iter()
            .find(|f| f.name == "labels_consistent")
            .unwrap();
        assert!(!factor.passed);
        assert!((result.score - 7.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_implausible_features_lower_label() {
        let mut f = record();
        f.pitch_mean_hz = 50.0;
        f.duration_seconds = 8.0;
        f.spectral_centroid_hz = 100.0;
        let result = score(
            &f,
            &interpretation(CorrectionOutcome::NotRequired),
            &[],
            &ConfidenceConfig::default(),
        );
        // 4 of 8 checks pass
        assert!((result.score - 0.5).abs() < 1e-9);
        assert_eq!(result.label, ConfidenceLabel::Medium);
    }

    #[test]
    fn test_monotonicity_of_passing_checks() {
        // Flipping one failing check to passing never lowers the score
        let base = score(
            &record(),
            &interpretation(CorrectionOutcome::Skipped),
            &[],
            &ConfidenceConfig::default(),
        );
        let with_pattern = score(
            &record(),
            &interpretation(CorrectionOutcome::Skipped),
            &[pattern()],
            &ConfidenceConfig::default(),
        );
        assert!(with_pattern.score >= base.score);
    }

    #[test]
    fn test_factor_order_is_stable() {
        let result = score(
            &record(),
            &interpretation(CorrectionOutcome::NotRequired),
            &[],
            &ConfidenceConfig::default(),
        );
        assert_eq!(result.contributing_factors[0].name, "pitch_in_plausible_range");
        assert_eq!(result.contributing_factors[7].name, "labels_consistent");
    }
}
