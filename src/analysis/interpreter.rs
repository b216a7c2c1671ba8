// Primary interpretation of a vocalization
// Band-based classification per feature, assembled field-by-field, then a
// single correction pass that keeps emotional_state and primary_meaning in
// agreement.

use serde::{Deserialize, Serialize};

use crate::analysis::health::{HealthCategory, HealthFinding, Severity};
use crate::analysis::{EmotionalState, UrgencyLevel};
use crate::config::UrgencyConfig;
use crate::constants::*;
use crate::features::FeatureRecord;

/// Outcome of the consistency-correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectionOutcome {
    /// No roughness finding required an override
    NotRequired,
    /// Emotional state and primary meaning were both rewritten
    Applied,
    /// An override was warranted but no rewrite rule matched the meaning,
    /// so both fields were left as seeded
    Skipped,
}

/// Finalized interpretation of one vocalization. Constructed through the
/// builder below; emotional_state and primary_meaning never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub primary_meaning: String,
    pub emotional_state: EmotionalState,
    pub urgency_level: UrgencyLevel,
    pub details: Vec<String>,
    pub correction: CorrectionOutcome,
}

/// Accumulates fields in the fixed sub-analysis order and only yields an
/// Interpretation once the correction pass has run.
struct InterpretationBuilder {
    primary_meaning: String,
    emotional_state: EmotionalState,
    urgency_level: UrgencyLevel,
    details: Vec<String>,
}

impl InterpretationBuilder {
    fn finalize(self, correction: CorrectionOutcome) -> Interpretation {
        Interpretation {
            primary_meaning: self.primary_meaning,
            emotional_state: self.emotional_state,
            urgency_level: self.urgency_level,
            details: self.details,
            correction,
        }
    }
}

/// Interpret one feature record against the band tables.
///
/// Always succeeds on a validated record; every field falls into exactly
/// one band. Health findings feed the correction pass, which is the only
/// stage allowed to rewrite the pitch-band emotional seed.
pub fn interpret(
    f: &FeatureRecord,
    health: &[HealthFinding],
    urgency: &UrgencyConfig,
) -> Interpretation {
    let mut details = Vec::with_capacity(7);

    details.push(duration_detail(f.duration_seconds));
    details.push(pitch_detail(f.pitch_mean_hz));
    details.push(pitch_variation_detail(f.pitch_std_hz));
    details.push(loudness_detail(f.loudness_mean));
    details.push(spectral_detail(f.spectral_centroid_hz));
    details.push(zcr_detail(f.zero_crossing_rate));
    details.push(loudness_stability_detail(f.loudness_std));

    let emotional_state = emotional_seed(f);
    let primary_meaning = primary_meaning_for_pitch(f.pitch_mean_hz).to_string();
    let urgency_level = urgency_seed(f, urgency);

    let builder = InterpretationBuilder {
        primary_meaning,
        emotional_state,
        urgency_level,
        details,
    };

    apply_consistency_correction(builder, health)
}

fn duration_detail(d: f64) -> String {
    if d < DURATION_QUICK_MAX {
        format!("Very short meow ({:.2}s) - quick acknowledgment or greeting", d)
    } else if d < DURATION_GREETING_MAX {
        format!("Short meow ({:.2}s) - greeting or mild request", d)
    } else if d < DURATION_DELIBERATE_MAX {
        format!("Medium-length meow ({:.2}s) - deliberate communication", d)
    } else if d < DURATION_EMPHATIC_MAX {
        format!("Long meow ({:.2}s) - emphatic request or complaint", d)
    } else {
        format!("Very long meow ({:.2}s) - intense demand or possible distress", d)
    }
}

fn pitch_detail(p: f64) -> String {
    if p >= PITCH_FRIENDLY_MAX {
        format!("Very high pitch ({:.0} Hz) - kitten-like appeal, urgent need", p)
    } else if p >= PITCH_SOCIAL_MAX {
        format!("High pitch ({:.0} Hz) - friendly attention-seeking", p)
    } else if p >= PITCH_SERIOUS_MAX {
        format!("Mid-range pitch ({:.0} Hz) - balanced social communication", p)
    } else if p >= PITCH_DEEP_MAX {
        format!("Low pitch ({:.0} Hz) - serious, weighty tone", p)
    } else {
        format!("Very low pitch ({:.0} Hz) - deep emotional statement", p)
    }
}

fn pitch_variation_detail(std: f64) -> String {
    if std >= PITCH_STD_EXPRESSIVE_MIN {
        format!("High pitch variation ({:.0} Hz) - expressive, inflected delivery", std)
    } else {
        format!("Low pitch variation ({:.0} Hz) - stable, controlled delivery", std)
    }
}

fn loudness_detail(l: f64) -> String {
    if l > LOUDNESS_ASSERTIVE_MAX {
        format!("Very loud meow ({:.3}) - demanding immediate attention", l)
    } else if l >= LOUDNESS_STANDARD_MAX {
        format!("Loud meow ({:.3}) - assertive delivery", l)
    } else if l >= LOUDNESS_GENTLE_MAX {
        format!("Moderate loudness ({:.3}) - standard conversational level", l)
    } else if l >= LOUDNESS_WHISPER_MAX {
        format!("Quiet meow ({:.3}) - gentle request", l)
    } else {
        format!("Very quiet meow ({:.3}) - whisper-like appeal", l)
    }
}

fn spectral_detail(c: f64) -> String {
    if c > SPECTRAL_CRISP_MAX {
        format!("Piercing tone ({:.0} Hz) - cuts through background noise", c)
    } else if c >= SPECTRAL_BALANCED_MAX {
        format!("Crisp, bright tone ({:.0} Hz) - alert delivery", c)
    } else if c >= SPECTRAL_MELLOW_MAX {
        format!("Balanced tonal quality ({:.0} Hz)", c)
    } else if c >= SPECTRAL_VERY_MELLOW_MAX {
        format!("Mellow tone ({:.0} Hz) - relaxed or content", c)
    } else {
        format!("Very mellow, muted tone ({:.0} Hz) - subdued delivery", c)
    }
}

fn zcr_detail(z: f64) -> String {
    if z > ZCR_NOTICEABLE_MAX {
        format!("Significant vocal roughness ({:.3}) - strained or raspy delivery", z)
    } else if z >= ZCR_NORMAL_MAX {
        format!("Noticeable vocal roughness ({:.3})", z)
    } else if z >= ZCR_SMOOTH_MAX {
        format!("Minor vocal roughness ({:.3}) - normal texture", z)
    } else {
        format!("Smooth, clear vocal delivery ({:.3})", z)
    }
}

fn loudness_stability_detail(std: f64) -> String {
    if std > LOUDNESS_STD_HIGH {
        format!("Unsteady volume ({:.3}) - wavering delivery", std)
    } else if std <= LOUDNESS_STD_LOW {
        format!("Very steady volume ({:.3})", std)
    } else {
        format!("Moderately steady volume ({:.3})", std)
    }
}

/// Pitch band supplies the emotional seed. The balanced-social band is the
/// only neutral one; it refines on secondary features so every reachable
/// state has a path.
fn emotional_seed(f: &FeatureRecord) -> EmotionalState {
    let p = f.pitch_mean_hz;

    if p >= PITCH_SOCIAL_MAX {
        return EmotionalState::SeekingAttention;
    }
    if p < PITCH_SERIOUS_MAX {
        return EmotionalState::SeriousFormal;
    }

    // Balanced-social band: refine the neutral seed
    if f.pitch_std_hz >= PITCH_STD_EXPRESSIVE_MIN {
        EmotionalState::PlayfulExpressive
    } else if f.spectral_centroid_hz > SPECTRAL_CRISP_MAX {
        EmotionalState::AlertExcited
    } else if f.spectral_centroid_hz < SPECTRAL_VERY_MELLOW_MAX {
        EmotionalState::RelaxedContent
    } else {
        EmotionalState::CalmControlled
    }
}

fn primary_meaning_for_pitch(p: f64) -> &'static str {
    if p >= PITCH_FRIENDLY_MAX {
        "Urgent demand for attention or food"
    } else if p >= PITCH_SOCIAL_MAX {
        "Friendly request for attention"
    } else if p >= PITCH_SERIOUS_MAX {
        "Normal social communication"
    } else if p >= PITCH_DEEP_MAX {
        "Serious complaint or weighty request"
    } else {
        "Deep emotional statement or warning"
    }
}

/// Urgency seed comes from the pitch band; long or very loud calls floor
/// it at High.
fn urgency_seed(f: &FeatureRecord, cfg: &UrgencyConfig) -> UrgencyLevel {
    let p = f.pitch_mean_hz;
    let seed = if p >= PITCH_FRIENDLY_MAX {
        UrgencyLevel::VeryHigh
    } else if p >= PITCH_SOCIAL_MAX {
        UrgencyLevel::Medium
    } else if p >= PITCH_SERIOUS_MAX {
        UrgencyLevel::Low
    } else if p >= PITCH_DEEP_MAX {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    };

    if f.duration_seconds >= cfg.escalation_duration_min
        || f.loudness_mean > cfg.escalation_loudness_min
    {
        seed.max(UrgencyLevel::High)
    } else {
        seed
    }
}

/// A roughness-driven health concern must surface in the emotional labels,
/// but only when primary_meaning has a matching rewrite. Rewriting one
/// field without the other is exactly the staleness this pass exists to
/// prevent.
fn apply_consistency_correction(
    builder: InterpretationBuilder,
    health: &[HealthFinding],
) -> Interpretation {
    let roughness_concern = health.iter().any(|finding| {
        finding.category == HealthCategory::Respiratory
            && matches!(finding.severity, Severity::Concern | Severity::HighConcern)
    });

    if !roughness_concern {
        return builder.finalize(CorrectionOutcome::NotRequired);
    }

    if matches!(
        builder.emotional_state,
        EmotionalState::SeriousFormal | EmotionalState::StressedStrained
    ) {
        // Already in a distress-class state; nothing stale to fix
        return builder.finalize(CorrectionOutcome::NotRequired);
    }

    let lowered = builder.primary_meaning.to_lowercase();
    let rewritten = if lowered.contains("friendly request") {
        Some("Stressed vocalization with underlying request")
    } else if lowered.contains("normal social communication") {
        Some("Stressed communication attempt")
    } else {
        None
    };

    match rewritten {
        Some(meaning) => {
            let mut builder = builder;
            builder.primary_meaning = meaning.to_string();
            builder.emotional_state = EmotionalState::StressedStrained;
            builder.finalize(CorrectionOutcome::Applied)
        }
        None => builder.finalize(CorrectionOutcome::Skipped),
    }
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
            loudness_std: 0.01,
            spectral_centroid_hz: 2000.0,
            zero_crossing_rate: 0.05,
            out_of_range: Vec::new(),
        }
    }

    fn roughness_finding(severity: Severity) -> HealthFinding {
        HealthFinding {
            category: HealthCategory::Respiratory,
            severity,
            description: "test".to_string(),
        }
    }

    #[test]
    fn test_details_have_seven_entries_in_order() {
        let interp = interpret(&record(), &[], &UrgencyConfig::default());
        assert_eq!(interp.details.len(), 7);
        assert!(interp.details[0].contains("meow"));
        assert!(interp.details[1].contains("pitch"));
        assert!(interp.details[2].contains("pitch variation"));
        assert!(interp.details[4].contains("Hz"));
        assert!(interp.details[6].contains("volume"));
    }

    #[test]
    fn test_serious_band_interpretation() {
        let mut f = record();
        f.pitch_mean_hz = 175.5;
        let interp = interpret(&f, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::SeriousFormal);
        assert_eq!(interp.primary_meaning, "Serious complaint or weighty request");
        assert_eq!(interp.urgency_level, UrgencyLevel::Medium);
    }

    #[test]
    fn test_kitten_band_is_very_high_urgency() {
        let mut f = record();
        f.pitch_mean_hz = 650.0;
        let interp = interpret(&f, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::SeekingAttention);
        assert_eq!(interp.urgency_level, UrgencyLevel::VeryHigh);
    }

    #[test]
    fn test_long_call_floors_urgency_at_high() {
        let mut f = record();
        f.duration_seconds = 2.0; // balanced band would otherwise seed Low
        let interp = interpret(&f, &[], &UrgencyConfig::default());
        assert_eq!(interp.urgency_level, UrgencyLevel::High);
    }

    #[test]
    fn test_very_high_seed_survives_escalation() {
        let mut f = record();
        f.pitch_mean_hz = 650.0;
        f.duration_seconds = 2.0;
        let interp = interpret(&f, &[], &UrgencyConfig::default());
        assert_eq!(interp.urgency_level, UrgencyLevel::VeryHigh);
    }

    #[test]
    fn test_neutral_band_refinements() {
        let mut expressive = record();
        expressive.pitch_std_hz = 45.0;
        let interp = interpret(&expressive, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::PlayfulExpressive);

        let mut piercing = record();
        piercing.spectral_centroid_hz = 4500.0;
        let interp = interpret(&piercing, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::AlertExcited);

        let mut mellow = record();
        mellow.spectral_centroid_hz = 900.0;
        let interp = interpret(&mellow, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::RelaxedContent);

        let interp = interpret(&record(), &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::CalmControlled);
    }

    #[test]
    fn test_correction_rewrites_social_communication() {
        let interp = interpret(
            &record(),
            &[roughness_finding(Severity::HighConcern)],
            &UrgencyConfig::default(),
        );
        assert_eq!(interp.emotional_state, EmotionalState::StressedStrained);
        assert_eq!(interp.primary_meaning, "Stressed communication attempt");
        assert_eq!(interp.correction, CorrectionOutcome::Applied);
    }

    #[test]
    fn test_correction_rewrites_friendly_request() {
        let mut f = record();
        f.pitch_mean_hz = 500.0;
        let interp = interpret(
            &f,
            &[roughness_finding(Severity::Concern)],
            &UrgencyConfig::default(),
        );
        assert_eq!(interp.emotional_state, EmotionalState::StressedStrained);
        assert_eq!(
            interp.primary_meaning,
            "Stressed vocalization with underlying request"
        );
    }

    #[test]
    fn test_correction_skipped_when_no_rewrite_matches() {
        // Kitten band: meaning is "Urgent demand...", no rewrite rule
        let mut f = record();
        f.pitch_mean_hz = 650.0;
        let interp = interpret(
            &f,
            &[roughness_finding(Severity::HighConcern)],
            &UrgencyConfig::default(),
        );
        assert_eq!(interp.emotional_state, EmotionalState::SeekingAttention);
        assert_eq!(interp.primary_meaning, "Urgent demand for attention or food");
        assert_eq!(interp.correction, CorrectionOutcome::Skipped);
    }

    #[test]
    fn test_correction_not_required_for_serious_state() {
        let mut f = record();
        f.pitch_mean_hz = 175.0;
        let interp = interpret(
            &f,
            &[roughness_finding(Severity::HighConcern)],
            &UrgencyConfig::default(),
        );
        assert_eq!(interp.emotional_state, EmotionalState::SeriousFormal);
        assert_eq!(interp.correction, CorrectionOutcome::NotRequired);
    }

    #[test]
    fn test_info_finding_never_triggers_correction() {
        let interp = interpret(
            &record(),
            &[roughness_finding(Severity::Info)],
            &UrgencyConfig::default(),
        );
        assert_eq!(interp.correction, CorrectionOutcome::NotRequired);
    }

    #[test]
    fn test_band_boundaries_belong_to_upper_band() {
        let mut f = record();
        f.pitch_mean_hz = 400.0; // boundary goes to the friendly band
        let interp = interpret(&f, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::SeekingAttention);

        f.pitch_mean_hz = 399.99;
        let interp = interpret(&f, &[], &UrgencyConfig::default());
        assert_eq!(interp.emotional_state, EmotionalState::CalmControlled);
    }
}
