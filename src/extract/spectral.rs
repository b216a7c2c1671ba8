// Spectral centroid via short-time FFT

use rustfft::{num_complex::Complex, FftPlanner};
use std::f32::consts::PI;

use crate::constants::{EXTRACT_FRAME_SIZE, EXTRACT_HOP_SIZE};

/// Mean spectral centroid in Hz over all frames with signal energy.
///
/// Returns `None` when the signal is too short or has no energy at all.
pub fn spectral_centroid(samples: &[f32], sample_rate: u32) -> Option<f64> {
    if samples.len() < EXTRACT_FRAME_SIZE {
        return None;
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(EXTRACT_FRAME_SIZE);

    let window: Vec<f32> = (0..EXTRACT_FRAME_SIZE)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f32 / (EXTRACT_FRAME_SIZE - 1) as f32).cos())
        .collect();

    let bin_hz = sample_rate as f64 / EXTRACT_FRAME_SIZE as f64;
    let mut centroids: Vec<f64> = Vec::new();
    let mut buffer = vec![Complex::new(0.0f32, 0.0f32); EXTRACT_FRAME_SIZE];

    let mut start = 0;
    while start + EXTRACT_FRAME_SIZE <= samples.len() {
        for (i, sample) in samples[start..start + EXTRACT_FRAME_SIZE].iter().enumerate() {
            buffer[i] = Complex::new(sample * window[i], 0.0);
        }
        fft.process(&mut buffer);

        // Centroid over the positive-frequency half
        let mut weighted = 0.0f64;
        let mut total = 0.0f64;
        for (bin, value) in buffer.iter().take(EXTRACT_FRAME_SIZE / 2).enumerate() {
            let magnitude = value.norm() as f64;
            weighted += bin as f64 * bin_hz * magnitude;
            total += magnitude;
        }

        if total > 1e-10 {
            centroids.push(weighted / total);
        }

        start += EXTRACT_HOP_SIZE;
    }

    if centroids.is_empty() {
        return None;
    }

    Some(centroids.iter().sum::<f64>() / centroids.len() as f64)
}
