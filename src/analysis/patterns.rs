// Named vocal pattern detection
// Each rule is an independent predicate; several may fire on one record.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::features::FeatureRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternName {
    Trill,
    Chirp,
    PurrMeow,
    Yowl,
    SilentMeow,
    RapidSequence,
    DescendingPitch,
    AscendingPitch,
    HarmonicRich,
}

impl PatternName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::Trill => "trill",
            PatternName::Chirp => "chirp",
            PatternName::PurrMeow => "purr_meow",
            PatternName::Yowl => "yowl",
            PatternName::SilentMeow => "silent_meow",
            PatternName::RapidSequence => "rapid_sequence",
            PatternName::DescendingPitch => "descending_pitch",
            PatternName::AscendingPitch => "ascending_pitch",
            PatternName::HarmonicRich => "harmonic_rich",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    pub name: PatternName,
    pub meaning: String,
}

impl PatternMatch {
    fn new(name: PatternName, meaning: &str) -> Self {
        Self {
            name,
            meaning: meaning.to_string(),
        }
    }
}

/// Run every pattern rule against the record. Display order is fixed;
/// detection of one pattern never affects another.
pub fn detect_patterns(f: &FeatureRecord) -> Vec<PatternMatch> {
    let mut matches = Vec::new();

    if f.pitch_std_hz > TRILL_PITCH_STD_MIN
        && f.duration_seconds > TRILL_DURATION_MIN
        && f.spectral_centroid_hz >= SPECTRAL_BRIGHT_MIN
        && f.zero_crossing_rate < ZCR_SMOOTH_MAX
    {
        matches.push(PatternMatch::new(
            PatternName::Trill,
            "Rolling greeting, often directed at a trusted person",
        ));
    }

    if f.duration_seconds < CHIRP_DURATION_MAX
        && f.pitch_mean_hz > CHIRP_PITCH_MIN
        && f.pitch_std_hz > CHIRP_PITCH_STD_MIN
        && f.spectral_centroid_hz >= CHIRP_SPECTRAL_MIN
    {
        matches.push(PatternMatch::new(
            PatternName::Chirp,
            "Prey-watching excitement or frustrated hunting instinct",
        ));
    }

    if f.zero_crossing_rate < PURR_MEOW_ZCR_MAX
        && f.spectral_centroid_hz >= SPECTRAL_VERY_MELLOW_MAX
        && f.spectral_centroid_hz < SPECTRAL_MELLOW_MAX
        && f.duration_seconds > PURR_MEOW_DURATION_MIN
        && f.loudness_mean >= LOUDNESS_GENTLE_MAX
        && f.loudness_mean < LOUDNESS_STANDARD_MAX
    {
        matches.push(PatternMatch::new(
            PatternName::PurrMeow,
            "Contented solicitation, a purr blended into a meow",
        ));
    }

    if f.duration_seconds > YOWL_DURATION_MIN
        && f.pitch_mean_hz > YOWL_PITCH_MIN
        && f.pitch_std_hz > YOWL_PITCH_STD_MIN
        && f.loudness_mean > YOWL_LOUDNESS_MIN
    {
        matches.push(PatternMatch::new(
            PatternName::Yowl,
            "Strong distress, territorial dispute, or mating call",
        ));
    }

    if f.loudness_mean < SILENT_MEOW_LOUDNESS_MAX
        && f.duration_seconds >= SILENT_MEOW_DURATION_MIN
        && f.duration_seconds <= SILENT_MEOW_DURATION_MAX
        && f.pitch_std_hz < SILENT_MEOW_PITCH_STD_MAX
    {
        matches.push(PatternMatch::new(
            PatternName::SilentMeow,
            "Near-silent appeal reserved for a bonded human",
        ));
    }

    if f.duration_seconds < RAPID_SEQUENCE_DURATION_MAX
        && f.loudness_mean > RAPID_SEQUENCE_LOUDNESS_MIN
        && f.pitch_std_hz >= RAPID_SEQUENCE_PITCH_STD_MIN
        && f.pitch_std_hz < RAPID_SEQUENCE_PITCH_STD_MAX
    {
        matches.push(PatternMatch::new(
            PatternName::RapidSequence,
            "Burst of short calls, insistent demand",
        ));
    }

    if f.pitch_std_hz > SLIDE_PITCH_STD_MIN
        && f.pitch_mean_hz >= DESCENDING_PITCH_MIN
        && f.pitch_mean_hz < DESCENDING_PITCH_MAX
        && f.spectral_centroid_hz >= SPECTRAL_VERY_MELLOW_MAX
        && f.spectral_centroid_hz < SPECTRAL_MELLOW_MAX
    {
        matches.push(PatternMatch::new(
            PatternName::DescendingPitch,
            "Falling inflection, winding down or mild disappointment",
        ));
    }

    if f.pitch_std_hz > SLIDE_PITCH_STD_MIN
        && f.duration_seconds < ASCENDING_DURATION_MAX
        && f.spectral_centroid_hz >= SPECTRAL_BRIGHT_MIN
    {
        matches.push(PatternMatch::new(
            PatternName::AscendingPitch,
            "Rising question-like inflection, inviting a response",
        ));
    }

    if f.spectral_centroid_hz >= HARMONIC_SPECTRAL_MIN
        && f.spectral_centroid_hz <= HARMONIC_SPECTRAL_MAX
        && f.zero_crossing_rate < ZCR_SMOOTH_MAX
        && f.pitch_std_hz >= HARMONIC_PITCH_STD_MIN
        && f.pitch_std_hz < HARMONIC_PITCH_STD_MAX
    {
        matches.push(PatternMatch::new(
            PatternName::HarmonicRich,
            "Tonally rich call, comfortable and socially engaged",
        ));
    }

    matches
}
