// Feature extraction pipeline
// Turns media files into RawFeatures (acoustic) and MotionTrace (visual).

pub mod audio;
pub mod ffmpeg;
pub mod motion;
pub mod pitch;
pub mod spectral;

use std::path::Path;

use crate::constants::{AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::error::{CatSenseError, Result};
use crate::features::RawFeatures;
use crate::tools::Tool;

pub use motion::extract_motion;

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Extract acoustic features from any supported input.
///
/// WAV files are decoded directly; a `.json` file is read as
/// already-measured `RawFeatures`; everything else goes through ffmpeg
/// into a scratch WAV first. Files without an audio stream fail with
/// `NoAudioStream`.
pub fn extract_features(path: &Path) -> Result<RawFeatures> {
    if has_extension(path, "json") {
        let content = std::fs::read_to_string(path)?;
        let raw: RawFeatures = serde_json::from_str(&content)?;
        return Ok(raw);
    }

    let (samples, sample_rate) = if has_extension(path, "wav") {
        audio::decode_wav(path)?
    } else {
        if !Tool::Ffmpeg.is_available() {
            return Err(CatSenseError::FFmpeg(
                "ffmpeg not found; install it or set CATSENSE_FFMPEG_PATH".to_string(),
            ));
        }
        let info = ffmpeg::probe(path)?;
        if !info.has_audio {
            return Err(CatSenseError::NoAudioStream(path.display().to_string()));
        }

        let scratch = tempfile::Builder::new()
            .prefix("catsense-")
            .suffix(".wav")
            .tempdir()?;
        let wav_path = scratch.path().join("audio.wav");
        ffmpeg::extract_audio_wav(path, &wav_path)?;
        audio::decode_wav(&wav_path)?
    };

    log::debug!(
        "Decoded {} samples at {} Hz from {}",
        samples.len(),
        sample_rate,
        path.display()
    );

    Ok(audio::measure_features(&samples, sample_rate))
}

/// Whether the extension marks a file the batch scanner should pick up
pub fn is_media_file(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return false,
    };
    AUDIO_EXTENSIONS.contains(&ext.as_str()) || VIDEO_EXTENSIONS.contains(&ext.as_str())
}

/// Whether the extension marks a video container (motion analysis possible)
pub fn is_video_file(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return false,
    };
    VIDEO_EXTENSIONS.contains(&ext.as_str())
}
