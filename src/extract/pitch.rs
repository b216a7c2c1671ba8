// Fundamental frequency estimation via McLeod pitch method

use pitch_detection::detector::mcleod::McLeodDetector;
use pitch_detection::detector::PitchDetector;

use crate::constants::{
    PITCH_CLARITY_THRESHOLD, PITCH_FRAME_SIZE, PITCH_HOP_SIZE, PITCH_MIN_VOICED_FRAMES,
    PITCH_POWER_THRESHOLD, PITCH_RANGE_MAX_HZ, PITCH_RANGE_MIN_HZ,
};

/// Estimate mean and standard deviation of F0 across voiced frames.
///
/// Frames with no confident pitch are skipped; if fewer than
/// `PITCH_MIN_VOICED_FRAMES` frames carry pitch the whole estimate is
/// `None` rather than a misleading zero.
pub fn estimate_pitch(samples: &[f32], sample_rate: u32) -> Option<(f64, f64)> {
    if samples.len() < PITCH_FRAME_SIZE {
        return None;
    }

    let mut detector = McLeodDetector::new(PITCH_FRAME_SIZE, PITCH_FRAME_SIZE / 2);
    let mut pitches: Vec<f64> = Vec::new();

    let mut start = 0;
    while start + PITCH_FRAME_SIZE <= samples.len() {
        let frame = &samples[start..start + PITCH_FRAME_SIZE];

        if let Some(pitch) = detector.get_pitch(
            frame,
            sample_rate as usize,
            PITCH_POWER_THRESHOLD,
            PITCH_CLARITY_THRESHOLD,
        ) {
            let freq = pitch.frequency as f64;
            // Keep estimates inside the feline vocal range
            if freq >= PITCH_RANGE_MIN_HZ && freq <= PITCH_RANGE_MAX_HZ {
                pitches.push(freq);
            }
        }

        start += PITCH_HOP_SIZE;
    }

    if pitches.len() < PITCH_MIN_VOICED_FRAMES {
        return None;
    }

    let mean = pitches.iter().sum::<f64>() / pitches.len() as f64;
    let variance = pitches.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / pitches.len() as f64;

    Some((mean, variance.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn generate_sine(freq: f32, sample_rate: u32, duration_ms: u32) -> Vec<f32> {
        let num_samples = (sample_rate * duration_ms / 1000) as usize;
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * PI * freq * t).sin() * 0.5
            })
            .collect()
    }

    #[test]
    fn test_constant_tone_pitch() {
        let samples = generate_sine(300.0, 22050, 500);
        let (mean, std) = estimate_pitch(&samples, 22050).unwrap();
        assert!((mean - 300.0).abs() < 20.0, "mean was {}", mean);
        assert!(std < 15.0, "std was {}", std);
    }

    #[test]
    fn test_silence_has_no_pitch() {
        let samples = vec![0.0f32; 22050];
        assert!(estimate_pitch(&samples, 22050).is_none());
    }

    #[test]
    fn test_too_short_has_no_pitch() {
        let samples = generate_sine(300.0, 22050, 10);
        assert!(estimate_pitch(&samples, 22050).is_none());
    }
}
