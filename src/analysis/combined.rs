// Cross-validation of the audio interpretation against motion and a
// secondary classifier opinion. Fully deterministic: identical inputs
// always produce identical agreement output.

use serde::{Deserialize, Serialize};

use crate::analysis::interpreter::Interpretation;
use crate::analysis::{ActivityLevel, EmotionalState};
use crate::classifier::{BehaviorClass, MlOpinion};
use crate::config::{AgreementConfig, MotionConfig};
use crate::features::MotionTrace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementLevel {
    High,
    Moderate,
    Low,
}

impl AgreementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementLevel::High => "High",
            AgreementLevel::Moderate => "Moderate",
            AgreementLevel::Low => "Low",
        }
    }
}

/// Visual activity summary for the video path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualActivity {
    pub dominant_activity: ActivityLevel,
    pub duration_seconds: f64,
    pub motion_mean: f64,
    pub motion_variance: f64,
}

/// Agreement between the audio interpretation and the classifier opinion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementSummary {
    pub score: f64,
    pub level: AgreementLevel,
    pub ml_opinion: MlOpinion,
    pub supporting_evidence: Vec<String>,
    pub conflicting_indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedAnalysis {
    pub visual_activity: VisualActivity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<AgreementSummary>,
}

/// Correlate audio interpretation, motion trace, and classifier opinion.
pub fn correlate(
    interpretation: &Interpretation,
    motion: &MotionTrace,
    ml_opinion: Option<MlOpinion>,
    motion_cfg: &MotionConfig,
    agreement_cfg: &AgreementConfig,
) -> CombinedAnalysis {
    let mean = motion.mean();
    let dominant_activity = if mean > motion_cfg.high_threshold {
        ActivityLevel::High
    } else if mean > motion_cfg.medium_threshold {
        ActivityLevel::Medium
    } else {
        ActivityLevel::Low
    };

    let visual_activity = VisualActivity {
        dominant_activity,
        duration_seconds: motion.duration_seconds,
        motion_mean: mean,
        motion_variance: motion.variance(),
    };

    let agreement = ml_opinion.map(|opinion| {
        assess_agreement(interpretation.emotional_state, opinion, agreement_cfg)
    });

    CombinedAnalysis {
        visual_activity,
        agreement,
    }
}

/// Single-sample agreement: 1.0 when the classifier label falls in the
/// emotional state's coarse bucket, else 0.0.
fn assess_agreement(
    state: EmotionalState,
    opinion: MlOpinion,
    cfg: &AgreementConfig,
) -> AgreementSummary {
    let compatible = compatible_classes(state);
    let agrees = compatible.contains(&opinion.class);
    let score = if agrees { 1.0 } else { 0.0 };

    let mut supporting_evidence = Vec::new();
    let mut conflicting_indicators = Vec::new();
    if agrees {
        supporting_evidence.push(format!(
            "Emotional state agreement: {} matches {}",
            state.as_str(),
            opinion.class.as_str()
        ));
    } else {
        conflicting_indicators.push(format!(
            "Emotional state mismatch: {} vs {}",
            state.as_str(),
            opinion.class.as_str()
        ));
    }

    let level = if score >= cfg.high_min {
        AgreementLevel::High
    } else if score >= cfg.moderate_min {
        AgreementLevel::Moderate
    } else {
        AgreementLevel::Low
    };

    AgreementSummary {
        score,
        level,
        ml_opinion: opinion,
        supporting_evidence,
        conflicting_indicators,
    }
}

/// Coarse compatibility buckets between the seven audio states and the
/// four classifier classes.
fn compatible_classes(state: EmotionalState) -> &'static [BehaviorClass] {
    match state {
        EmotionalState::AlertExcited | EmotionalState::PlayfulExpressive => {
            &[BehaviorClass::Excited, BehaviorClass::Active]
        }
        EmotionalState::RelaxedContent | EmotionalState::CalmControlled => {
            &[BehaviorClass::Calm]
        }
        EmotionalState::SeekingAttention
        | EmotionalState::SeriousFormal
        | EmotionalState::StressedStrained => &[BehaviorClass::Vocal],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::interpreter::CorrectionOutcome;
    use crate::analysis::UrgencyLevel;

    fn interpretation(state: EmotionalState) -> Interpretation {
        Interpretation {
            primary_meaning: "test".to_string(),
            emotional_state: state,
            urgency_level: UrgencyLevel::Low,
            details: Vec::new(),
            correction: CorrectionOutcome::NotRequired,
        }
    }

    fn trace(level: f64) -> MotionTrace {
        MotionTrace {
            magnitudes: vec![level; 8],
            duration_seconds: 4.0,
        }
    }

    fn opinion(class: BehaviorClass) -> MlOpinion {
        MlOpinion {
            class,
            confidence: 0.6,
        }
    }

    #[test]
    fn test_activity_thresholds() {
        let cfg = MotionConfig::default();
        let acfg = AgreementConfig::default();
        let interp = interpretation(EmotionalState::CalmControlled);

        let result = correlate(&interp, &trace(20.0), None, &cfg, &acfg);
        assert_eq!(result.visual_activity.dominant_activity, ActivityLevel::High);

        let result = correlate(&interp, &trace(8.0), None, &cfg, &acfg);
        assert_eq!(result.visual_activity.dominant_activity, ActivityLevel::Medium);

        let result = correlate(&interp, &trace(2.0), None, &cfg, &acfg);
        assert_eq!(result.visual_activity.dominant_activity, ActivityLevel::Low);
    }

    #[test]
    fn test_agreement_high_when_buckets_match() {
        let result = correlate(
            &interpretation(EmotionalState::SeekingAttention),
            &trace(2.0),
            Some(opinion(BehaviorClass::Vocal)),
            &MotionConfig::default(),
            &AgreementConfig::default(),
        );
        let agreement = result.agreement.unwrap();
        assert_eq!(agreement.score, 1.0);
        assert_eq!(agreement.level, AgreementLevel::High);
        assert_eq!(agreement.supporting_evidence.len(), 1);
        assert!(agreement.conflicting_indicators.is_empty());
    }

    #[test]
    fn test_agreement_low_on_mismatch() {
        let result = correlate(
            &interpretation(EmotionalState::RelaxedContent),
            &trace(2.0),
            Some(opinion(BehaviorClass::Excited)),
            &MotionConfig::default(),
            &AgreementConfig::default(),
        );
        let agreement = result.agreement.unwrap();
        assert_eq!(agreement.score, 0.0);
        assert_eq!(agreement.level, AgreementLevel::Low);
        assert_eq!(agreement.conflicting_indicators.len(), 1);
    }

    #[test]
    fn test_no_opinion_means_no_agreement_summary() {
        let result = correlate(
            &interpretation(EmotionalState::CalmControlled),
            &trace(2.0),
            None,
            &MotionConfig::default(),
            &AgreementConfig::default(),
        );
        assert!(result.agreement.is_none());
    }

    #[test]
    fn test_determinism() {
        let interp = interpretation(EmotionalState::AlertExcited);
        let a = correlate(
            &interp,
            &trace(12.0),
            Some(opinion(BehaviorClass::Active)),
            &MotionConfig::default(),
            &AgreementConfig::default(),
        );
        let b = correlate(
            &interp,
            &trace(12.0),
            Some(opinion(BehaviorClass::Active)),
            &MotionConfig::default(),
            &AgreementConfig::default(),
        );
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
