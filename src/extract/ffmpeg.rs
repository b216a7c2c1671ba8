// FFmpeg/ffprobe shell-outs for media preparation

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::constants::EXTRACT_SAMPLE_RATE;
use crate::error::{CatSenseError, Result};
use crate::tools::Tool;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    streams: Option<Vec<FFprobeStream>>,
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    codec_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Stream layout and duration of a media file.
#[derive(Debug, Default)]
pub struct MediaInfo {
    pub has_audio: bool,
    pub has_video: bool,
    pub duration_seconds: Option<f64>,
}

/// Run ffprobe and report which stream types the file carries.
pub fn probe(path: &Path) -> Result<MediaInfo> {
    let output = Command::new(Tool::Ffprobe.path())
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| CatSenseError::FFprobe(format!("Failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CatSenseError::FFprobe(format!("ffprobe failed: {}", stderr)));
    }

    let probe_output: FFprobeOutput = serde_json::from_slice(&output.stdout)
        .map_err(|e| CatSenseError::FFprobe(format!("Failed to parse ffprobe output: {}", e)))?;

    let mut info = MediaInfo::default();

    if let Some(ref streams) = probe_output.streams {
        for stream in streams {
            match stream.codec_type.as_deref() {
                Some("audio") => info.has_audio = true,
                Some("video") => info.has_video = true,
                _ => {}
            }
        }
    }

    if let Some(ref format) = probe_output.format {
        info.duration_seconds = format.duration.as_deref().and_then(|s| s.parse().ok());
    }

    Ok(info)
}

/// Extract the audio track as mono 16-bit PCM WAV at the analysis rate.
pub fn extract_audio_wav(input: &Path, output: &Path) -> Result<()> {
    let result = Command::new(Tool::Ffmpeg.path())
        .args(["-v", "error", "-y", "-i"])
        .arg(input)
        .args([
            "-vn",
            "-ac", "1",
            "-ar", &EXTRACT_SAMPLE_RATE.to_string(),
            "-acodec", "pcm_s16le",
        ])
        .arg(output)
        .output()
        .map_err(|e| CatSenseError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(CatSenseError::FFmpeg(format!(
            "Audio extraction failed for {}: {}",
            input.display(),
            stderr.trim()
        )));
    }

    Ok(())
}
