// Catsense Constants
// Documented default thresholds for the interpretation engine. All of these
// feed AnalysisConfig::default(); change them there-adjacent, not inline.

// ----- Duration bands (seconds) -----
// Half-open intervals, boundary belongs to the upper band.

pub const DURATION_QUICK_MAX: f64 = 0.3; // below: quick acknowledgment
pub const DURATION_GREETING_MAX: f64 = 0.8; // [0.3, 0.8): greeting/request
pub const DURATION_DELIBERATE_MAX: f64 = 1.5; // [0.8, 1.5): deliberate communication
pub const DURATION_EMPHATIC_MAX: f64 = 3.0; // [1.5, 3.0): emphatic; >= 3.0: intense

// ----- Pitch bands (Hz) -----

pub const PITCH_DEEP_MAX: f64 = 150.0; // below: deep emotional register
pub const PITCH_SERIOUS_MAX: f64 = 250.0; // [150, 250): serious tone
pub const PITCH_SOCIAL_MAX: f64 = 400.0; // [250, 400): balanced social
pub const PITCH_FRIENDLY_MAX: f64 = 600.0; // [400, 600): friendly; >= 600: kitten-like urgent

// Pitch variation split (std dev, Hz)
pub const PITCH_STD_EXPRESSIVE_MIN: f64 = 30.0;

// ----- Loudness bands (normalized RMS amplitude) -----

pub const LOUDNESS_WHISPER_MAX: f64 = 0.02; // below: whisper-like
pub const LOUDNESS_GENTLE_MAX: f64 = 0.04; // [0.02, 0.04): gentle
pub const LOUDNESS_STANDARD_MAX: f64 = 0.08; // [0.04, 0.08): standard
pub const LOUDNESS_ASSERTIVE_MAX: f64 = 0.15; // [0.08, 0.15]: assertive; above: demanding

// Loudness stability (std dev of frame RMS)
pub const LOUDNESS_STD_LOW: f64 = 0.02;
pub const LOUDNESS_STD_HIGH: f64 = 0.05;

// ----- Spectral centroid bands (Hz) -----

pub const SPECTRAL_VERY_MELLOW_MAX: f64 = 1200.0; // below: muted, possible respiratory dullness
pub const SPECTRAL_MELLOW_MAX: f64 = 1800.0; // [1200, 1800): mellow
pub const SPECTRAL_BALANCED_MAX: f64 = 2500.0; // [1800, 2500): balanced
pub const SPECTRAL_CRISP_MAX: f64 = 4000.0; // [2500, 4000]: crisp/alert; above: piercing

// ----- Zero crossing rate bands -----

pub const ZCR_SMOOTH_MAX: f64 = 0.04; // below: smooth, clear
pub const ZCR_NORMAL_MAX: f64 = 0.08; // [0.04, 0.08): minor roughness
pub const ZCR_NOTICEABLE_MAX: f64 = 0.15; // [0.08, 0.15]: noticeable; above: significant

// ----- Vocal pattern thresholds -----

pub const TRILL_PITCH_STD_MIN: f64 = 80.0;
pub const TRILL_DURATION_MIN: f64 = 0.5;

pub const CHIRP_DURATION_MAX: f64 = 0.4;
pub const CHIRP_PITCH_MIN: f64 = 400.0;
pub const CHIRP_PITCH_STD_MIN: f64 = 80.0;
pub const CHIRP_SPECTRAL_MIN: f64 = 4000.0;

pub const PURR_MEOW_ZCR_MAX: f64 = 0.02;
pub const PURR_MEOW_DURATION_MIN: f64 = 1.0;

pub const YOWL_DURATION_MIN: f64 = 2.0;
pub const YOWL_PITCH_MIN: f64 = 300.0;
pub const YOWL_PITCH_STD_MIN: f64 = 100.0;
pub const YOWL_LOUDNESS_MIN: f64 = 0.08;

pub const SILENT_MEOW_LOUDNESS_MAX: f64 = 0.01;
pub const SILENT_MEOW_DURATION_MIN: f64 = 0.2;
pub const SILENT_MEOW_DURATION_MAX: f64 = 3.0;
pub const SILENT_MEOW_PITCH_STD_MAX: f64 = 20.0;

pub const RAPID_SEQUENCE_DURATION_MAX: f64 = 0.5;
pub const RAPID_SEQUENCE_LOUDNESS_MIN: f64 = 0.08;
pub const RAPID_SEQUENCE_PITCH_STD_MIN: f64 = 20.0;
pub const RAPID_SEQUENCE_PITCH_STD_MAX: f64 = 80.0;

pub const SLIDE_PITCH_STD_MIN: f64 = 60.0; // shared by ascending/descending slides
pub const DESCENDING_PITCH_MIN: f64 = 250.0;
pub const DESCENDING_PITCH_MAX: f64 = 600.0;
pub const ASCENDING_DURATION_MAX: f64 = 0.6;

pub const HARMONIC_SPECTRAL_MIN: f64 = 2000.0;
pub const HARMONIC_SPECTRAL_MAX: f64 = 4000.0;
pub const HARMONIC_PITCH_STD_MIN: f64 = 20.0;
pub const HARMONIC_PITCH_STD_MAX: f64 = 60.0;

// Bright range shared by trill and ascending-slide checks
pub const SPECTRAL_BRIGHT_MIN: f64 = 2500.0;

// ----- Urgency cluster scoring -----
// One point per signal; 0-1 Low, 2-3 Moderate, >= 4 Critical.

pub const CLUSTER_LOUDNESS_MIN: f64 = 0.08;
pub const CLUSTER_DURATION_MAX: f64 = 0.5;
pub const CLUSTER_PITCH_STD_MIN: f64 = 50.0;
pub const CLUSTER_PITCH_MIN: f64 = 400.0;
pub const CLUSTER_MODERATE_MIN: i64 = 2;
pub const CLUSTER_CRITICAL_MIN: i64 = 4;

// Floors that escalate the pitch-band urgency seed to at least High
pub const URGENCY_ESCALATION_DURATION_MIN: f64 = 1.5;
pub const URGENCY_ESCALATION_LOUDNESS_MIN: f64 = 0.15;

// ----- Health indicator thresholds -----

pub const RESPIRATORY_ZCR_HIGH_CONCERN: f64 = 0.12;
pub const RESPIRATORY_ZCR_CONCERN: f64 = 0.08;
pub const RESPIRATORY_ZCR_HEALTHY_MAX: f64 = 0.04;

pub const STRAIN_LOUDNESS_MIN: f64 = 0.15;

pub const LETHARGY_LOUDNESS_MAX: f64 = 0.02;
pub const LETHARGY_SPECTRAL_MAX: f64 = 1200.0;

pub const NEURO_PITCH_STD_MIN: f64 = 150.0;
pub const NEURO_DURATION_MIN: f64 = 2.0;

pub const AGE_PITCH_MAX: f64 = 150.0;
pub const AGE_ZCR_MIN: f64 = 0.08;
pub const AGE_ZCR_MAX: f64 = 0.15;
pub const AGE_SPECTRAL_MAX: f64 = 1800.0;

// ----- Confidence scoring -----
// Eight boolean checks, one point each; score = passed / 8.

pub const PLAUSIBLE_PITCH_MIN: f64 = 100.0;
pub const PLAUSIBLE_PITCH_MAX: f64 = 800.0;
pub const PLAUSIBLE_DURATION_MIN: f64 = 0.1;
pub const PLAUSIBLE_DURATION_MAX: f64 = 5.0;
pub const PLAUSIBLE_SPECTRAL_MIN: f64 = 500.0;
pub const PLAUSIBLE_SPECTRAL_MAX: f64 = 6000.0;
pub const CONFIDENCE_MIN_DETAILS: usize = 5;

pub const CONFIDENCE_VERY_HIGH_MIN: f64 = 0.85;
pub const CONFIDENCE_HIGH_MIN: f64 = 0.7;
pub const CONFIDENCE_MEDIUM_MIN: f64 = 0.5;
pub const CONFIDENCE_LOW_MIN: f64 = 0.3;

// ----- Visual activity classification -----
// Mean of per-frame motion magnitudes (luma frame difference, 0-255 scale).

pub const MOTION_HIGH_THRESHOLD: f64 = 15.0;
pub const MOTION_MEDIUM_THRESHOLD: f64 = 5.0;

// Frame sampling stride for motion extraction
pub const MOTION_SAMPLE_STRIDE: u32 = 15;

// ----- Cross-validation agreement levels -----

pub const AGREEMENT_HIGH_MIN: f64 = 0.7;
pub const AGREEMENT_MODERATE_MIN: f64 = 0.4;

// ----- Classifier heuristics -----

pub const CLASSIFIER_EXCITED_PITCH_MIN: f64 = 200.0;
pub const CLASSIFIER_VOCAL_LOUDNESS_MIN: f64 = 0.1;
pub const CLASSIFIER_STUB_CONFIDENCE: f64 = 0.6;

// ----- Feature extraction -----

pub const EXTRACT_SAMPLE_RATE: u32 = 22_050;
pub const EXTRACT_FRAME_SIZE: usize = 2048;
pub const EXTRACT_HOP_SIZE: usize = 512;

// Pitch detection (cat vocal range is wider than human speech)
pub const PITCH_FRAME_SIZE: usize = 1024;
pub const PITCH_HOP_SIZE: usize = 512;
pub const PITCH_RANGE_MIN_HZ: f64 = 70.0;
pub const PITCH_RANGE_MAX_HZ: f64 = 1000.0;
pub const PITCH_POWER_THRESHOLD: f32 = 0.15;
pub const PITCH_CLARITY_THRESHOLD: f32 = 0.5;
pub const PITCH_MIN_VOICED_FRAMES: usize = 3;

// Meow plausibility gate (segment selection in the batch path)
pub const MEOW_PITCH_MIN: f64 = 100.0;
pub const MEOW_PITCH_MAX: f64 = 800.0;
pub const MEOW_PITCH_STD_MIN: f64 = 10.0;
pub const MEOW_DURATION_MIN: f64 = 0.2;
pub const MEOW_DURATION_MAX: f64 = 3.0;

// ----- File types -----

pub const VIDEO_EXTENSIONS: [&str; 8] = ["mp4", "mov", "avi", "mkv", "wmv", "webm", "m4v", "mpg"];

pub const AUDIO_EXTENSIONS: [&str; 7] = ["wav", "mp3", "m4a", "aac", "flac", "ogg", "aiff"];
