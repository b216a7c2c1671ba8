// Secondary opinion classifiers for cross-validation

use serde::{Deserialize, Serialize};

use crate::constants::{
    CLASSIFIER_EXCITED_PITCH_MIN, CLASSIFIER_STUB_CONFIDENCE, CLASSIFIER_VOCAL_LOUDNESS_MIN,
    MOTION_HIGH_THRESHOLD,
};
use crate::features::{FeatureRecord, MotionTrace};

/// Coarse behavioral label from a secondary classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorClass {
    Excited,
    Active,
    Vocal,
    Calm,
}

impl BehaviorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorClass::Excited => "Excited",
            BehaviorClass::Active => "Active",
            BehaviorClass::Vocal => "Vocal",
            BehaviorClass::Calm => "Calm",
        }
    }
}

/// Opinion emitted by a classifier, used by the correlator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlOpinion {
    pub class: BehaviorClass,
    pub confidence: f64,
}

/// Seam for plugging in trained models. The built-in implementation is a
/// rule stub so the correlator always has a second opinion to compare
/// against.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureRecord, motion: Option<&MotionTrace>) -> MlOpinion;
}

/// Rule-based stand-in classifier.
#[derive(Debug, Default)]
pub struct HeuristicClassifier;

impl Classifier for HeuristicClassifier {
    fn predict(&self, features: &FeatureRecord, motion: Option<&MotionTrace>) -> MlOpinion {
        let motion_mean = motion.map(|m| m.mean()).unwrap_or(0.0);
        let high_motion = motion_mean > MOTION_HIGH_THRESHOLD;

        let class = if high_motion && features.pitch_mean_hz > CLASSIFIER_EXCITED_PITCH_MIN {
            BehaviorClass::Excited
        } else if high_motion {
            BehaviorClass::Active
        } else if features.loudness_mean > CLASSIFIER_VOCAL_LOUDNESS_MIN {
            BehaviorClass::Vocal
        } else {
            BehaviorClass::Calm
        };

        MlOpinion {
            class,
            confidence: CLASSIFIER_STUB_CONFIDENCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(pitch: f64, loudness: f64) -> FeatureRecord {
        FeatureRecord {
            duration_seconds: 1.0,
            pitch_mean_hz: pitch,
            pitch_std_hz: 30.0,
            loudness_mean: loudness,
            loudness_std: 0.01,
            spectral_centroid_hz: 2000.0,
            zero_crossing_rate: 0.05,
            out_of_range: Vec::new(),
        }
    }

    fn trace(level: f64) -> MotionTrace {
        MotionTrace {
            magnitudes: vec![level; 10],
            duration_seconds: 5.0,
        }
    }

    #[test]
    fn test_high_motion_high_pitch_is_excited() {
        let opinion =
            HeuristicClassifier.predict(&features(350.0, 0.05), Some(&trace(20.0)));
        assert_eq!(opinion.class, BehaviorClass::Excited);
        assert_eq!(opinion.confidence, 0.6);
    }

    #[test]
    fn test_high_motion_low_pitch_is_active() {
        let opinion =
            HeuristicClassifier.predict(&features(150.0, 0.05), Some(&trace(20.0)));
        assert_eq!(opinion.class, BehaviorClass::Active);
    }

    #[test]
    fn test_loud_without_motion_is_vocal() {
        let opinion = HeuristicClassifier.predict(&features(350.0, 0.12), Some(&trace(2.0)));
        assert_eq!(opinion.class, BehaviorClass::Vocal);
    }

    #[test]
    fn test_quiet_still_is_calm() {
        let opinion = HeuristicClassifier.predict(&features(350.0, 0.05), None);
        assert_eq!(opinion.class, BehaviorClass::Calm);
    }
}
