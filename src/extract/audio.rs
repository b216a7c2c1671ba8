// WAV decoding and time-domain feature measurement

use std::path::Path;

use crate::constants::{EXTRACT_FRAME_SIZE, EXTRACT_HOP_SIZE};
use crate::error::{CatSenseError, Result};
use crate::extract::{pitch, spectral};
use crate::features::RawFeatures;

/// Decode a WAV file to mono f32 samples.
///
/// Multi-channel audio is downmixed by averaging channels.
pub fn decode_wav(path: &Path) -> Result<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    if channels == 0 {
        return Err(CatSenseError::Extraction(format!(
            "WAV file {} reports zero channels",
            path.display()
        )));
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<Vec<f32>, _>>()?
        }
    };

    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    Ok((samples, spec.sample_rate))
}

/// Measure all acoustic features from decoded samples.
///
/// Each measurement that cannot be made stays `None` in the result; the
/// caller decides whether missing fields are fatal.
pub fn measure_features(samples: &[f32], sample_rate: u32) -> RawFeatures {
    let mut raw = RawFeatures::default();

    if sample_rate == 0 || samples.is_empty() {
        return raw;
    }

    raw.duration_seconds = Some(samples.len() as f64 / sample_rate as f64);

    let frame_rms = frame_rms_values(samples);
    if !frame_rms.is_empty() {
        let mean = frame_rms.iter().sum::<f64>() / frame_rms.len() as f64;
        let variance =
            frame_rms.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / frame_rms.len() as f64;
        raw.loudness_mean = Some(mean);
        raw.loudness_std = Some(variance.sqrt());
    }

    raw.zero_crossing_rate = zero_crossing_rate(samples);
    raw.spectral_centroid_hz = spectral::spectral_centroid(samples, sample_rate);

    if let Some((mean, std)) = pitch::estimate_pitch(samples, sample_rate) {
        raw.pitch_mean_hz = Some(mean);
        raw.pitch_std_hz = Some(std);
    }

    raw
}

/// RMS amplitude per analysis frame
fn frame_rms_values(samples: &[f32]) -> Vec<f64> {
    let mut values = Vec::new();
    let mut start = 0;
    while start + EXTRACT_FRAME_SIZE <= samples.len() {
        let frame = &samples[start..start + EXTRACT_FRAME_SIZE];
        let sum_sq: f64 = frame.iter().map(|s| (*s as f64).powi(2)).sum();
        values.push((sum_sq / frame.len() as f64).sqrt());
        start += EXTRACT_HOP_SIZE;
    }

    // Signal shorter than one frame still gets a single measurement
    if values.is_empty() && !samples.is_empty() {
        let sum_sq: f64 = samples.iter().map(|s| (*s as f64).powi(2)).sum();
        values.push((sum_sq / samples.len() as f64).sqrt());
    }

    values
}

/// Fraction of adjacent sample pairs that change sign
fn zero_crossing_rate(samples: &[f32]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let crossings = samples
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();
    Some(crossings as f64 / (samples.len() - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn generate_sine(freq: f32, sample_rate: u32, num_samples: usize) -> Vec<f32> {
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * PI * freq * t).sin() * 0.5
            })
            .collect()
    }

    #[test]
    fn test_measure_features_on_tone() {
        let samples = generate_sine(300.0, 22050, 22050);
        let raw = measure_features(&samples, 22050);

        assert!((raw.duration_seconds.unwrap() - 1.0).abs() < 1e-6);
        // RMS of a 0.5 amplitude sine is ~0.354
        assert!((raw.loudness_mean.unwrap() - 0.354).abs() < 0.02);
        // A 300 Hz sine crosses zero 600 times per second
        let zcr = raw.zero_crossing_rate.unwrap();
        assert!((zcr - 600.0 / 22050.0).abs() < 0.005, "zcr was {}", zcr);
        assert!(raw.pitch_mean_hz.is_some());
        assert!(raw.spectral_centroid_hz.is_some());
    }

    #[test]
    fn test_measure_features_on_silence() {
        let samples = vec![0.0f32; 22050];
        let raw = measure_features(&samples, 22050);

        assert!(raw.duration_seconds.is_some());
        assert!(raw.pitch_mean_hz.is_none());
        assert!(raw.spectral_centroid_hz.is_none());
        assert_eq!(raw.loudness_mean, Some(0.0));
    }

    #[test]
    fn test_measure_features_empty_input() {
        let raw = measure_features(&[], 22050);
        assert!(raw.duration_seconds.is_none());
    }

    #[test]
    fn test_wav_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for sample in generate_sine(440.0, 22050, 11025) {
            writer
                .write_sample((sample * i16::MAX as f32) as i16)
                .unwrap();
        }
        writer.finalize().unwrap();

        let (samples, rate) = decode_wav(&path).unwrap();
        assert_eq!(rate, 22050);
        assert_eq!(samples.len(), 11025);
    }
}
