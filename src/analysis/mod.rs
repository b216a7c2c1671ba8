// Vocalization analysis engine
// Turns a FeatureRecord (plus optional motion/classifier input) into one
// immutable AnalysisResult.

pub mod combined;
pub mod confidence;
pub mod context;
pub mod health;
pub mod insights;
pub mod interpreter;
pub mod patterns;


use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, HeuristicClassifier, MlOpinion};
use crate::config::AnalysisConfig;
use crate::features::{FeatureRecord, MotionTrace};

pub use combined::CombinedAnalysis;
pub use confidence::ConfidenceResult;
pub use context::ContextFinding;
pub use health::HealthFinding;
pub use interpreter::Interpretation;
pub use patterns::PatternMatch;

/// Emotional register of a vocalization. The correction pass is the only
/// stage allowed to rewrite this after the interpreter seeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionalState {
    #[serde(rename = "Playful_Expressive")]
    PlayfulExpressive,
    #[serde(rename = "Stressed_Strained")]
    StressedStrained,
    #[serde(rename = "Calm_Controlled")]
    CalmControlled,
    #[serde(rename = "Seeking_Attention")]
    SeekingAttention,
    #[serde(rename = "Serious_Formal")]
    SeriousFormal,
    #[serde(rename = "Alert_Excited")]
    AlertExcited,
    #[serde(rename = "Relaxed_Content")]
    RelaxedContent,
}

impl EmotionalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::PlayfulExpressive => "Playful_Expressive",
            EmotionalState::StressedStrained => "Stressed_Strained",
            EmotionalState::CalmControlled => "Calm_Controlled",
            EmotionalState::SeekingAttention => "Seeking_Attention",
            EmotionalState::SeriousFormal => "Serious_Formal",
            EmotionalState::AlertExcited => "Alert_Excited",
            EmotionalState::RelaxedContent => "Relaxed_Content",
        }
    }
}

/// Urgency of the vocalization, ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::VeryLow => "Very Low",
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::High => "High",
            UrgencyLevel::VeryHigh => "Very High",
        }
    }
}

/// Dominant visual activity from the motion trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    High,
    Medium,
    Low,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::High => "High",
            ActivityLevel::Medium => "Medium",
            ActivityLevel::Low => "Low",
        }
    }
}

/// Terminal result for one analyzed segment or video. Never mutated after
/// confidence scoring completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub source: String,
    pub features: FeatureRecord,
    pub interpretation: Interpretation,
    pub patterns: Vec<PatternMatch>,
    pub context: Vec<ContextFinding>,
    pub health: Vec<HealthFinding>,
    pub confidence: ConfidenceResult,
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined: Option<CombinedAnalysis>,
}

/// Stateless analysis pipeline. One instance may serve many segments
/// concurrently; all components are pure functions over the config.
pub struct Analyzer {
    config: AnalysisConfig,
    classifier: Box<dyn Classifier>,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            classifier: Box::new(HeuristicClassifier),
        }
    }

    pub fn with_classifier(config: AnalysisConfig, classifier: Box<dyn Classifier>) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Audio-only analysis of one vocalization.
    pub fn analyze(&self, features: &FeatureRecord, source: &str) -> AnalysisResult {
        self.run(features, None, None, source)
    }

    /// Combined audio and visual analysis. Cross-validation against a
    /// classifier opinion only happens when the caller supplies one.
    pub fn analyze_video(
        &self,
        features: &FeatureRecord,
        motion: &MotionTrace,
        ml_opinion: Option<MlOpinion>,
        source: &str,
    ) -> AnalysisResult {
        self.run(features, Some(motion), ml_opinion, source)
    }

    /// Opinion from the configured classifier, for callers that opt in to
    /// cross-validation.
    pub fn classifier_opinion(
        &self,
        features: &FeatureRecord,
        motion: Option<&MotionTrace>,
    ) -> MlOpinion {
        self.classifier.predict(features, motion)
    }

    fn run(
        &self,
        features: &FeatureRecord,
        motion: Option<&MotionTrace>,
        ml_opinion: Option<MlOpinion>,
        source: &str,
    ) -> AnalysisResult {
        let patterns = patterns::detect_patterns(features);
        let context = context::analyze_context(features, &self.config.urgency);
        let health = health::assess_health(features, &self.config.health);
        let interpretation = interpreter::interpret(features, &health, &self.config.urgency);
        let confidence = confidence::score(
            features,
            &interpretation,
            &patterns,
            &self.config.confidence,
        );
        let insights = insights::generate_insights(&interpretation, &patterns, &context, &health);

        let combined = motion.map(|trace| {
            combined::correlate(
                &interpretation,
                trace,
                ml_opinion,
                &self.config.motion,
                &self.config.agreement,
            )
        });

        log::debug!(
            "Analyzed {}: state={} urgency={} confidence={:.2}",
            source,
            interpretation.emotional_state.as_str(),
            interpretation.urgency_level.as_str(),
            confidence.score
        );

        AnalysisResult {
            source: source.to_string(),
            features: features.clone(),
            interpretation,
            patterns,
            context,
            health,
            confidence,
            insights,
            combined,
        }
    }
}
