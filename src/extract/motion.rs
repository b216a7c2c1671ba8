// Visual activity extraction via frame differencing

use std::path::Path;
use std::process::Command;

use regex::Regex;

use crate::error::{CatSenseError, Result};
use crate::extract::ffmpeg::probe;
use crate::features::MotionTrace;
use crate::tools::Tool;

/// Sample per-frame motion magnitudes from the video stream.
///
/// Every `stride`-th frame is kept and signalstats reports the mean
/// absolute luma difference (YDIF) against the previous kept frame, on a
/// 0-255 scale. The first kept frame has no predecessor and reports 0.
pub fn extract_motion(video_path: &Path, stride: u32) -> Result<MotionTrace> {
    let info = probe(video_path)?;
    if !info.has_video {
        return Err(CatSenseError::Extraction(format!(
            "No video stream in {}",
            video_path.display()
        )));
    }

    let filter = format!(
        "select='not(mod(n,{}))',signalstats,metadata=print",
        stride.max(1)
    );

    let output = Command::new(Tool::Ffmpeg.path())
        .args(["-i", &video_path.to_string_lossy()])
        .args(["-vf", &filter, "-an", "-f", "null", "-"])
        .output()
        .map_err(|e| CatSenseError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CatSenseError::FFmpeg(format!(
            "Motion analysis failed for {}: {}",
            video_path.display(),
            stderr.trim()
        )));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let magnitudes = parse_ydif_values(&stderr);

    if magnitudes.is_empty() {
        return Err(CatSenseError::Extraction(format!(
            "No motion samples produced for {}",
            video_path.display()
        )));
    }

    Ok(MotionTrace {
        magnitudes,
        duration_seconds: info.duration_seconds.unwrap_or(0.0),
    })
}

/// Parse `lavfi.signalstats.YDIF=<value>` lines from metadata=print output
fn parse_ydif_values(text: &str) -> Vec<f64> {
    let re = match Regex::new(r"lavfi\.signalstats\.YDIF=(\d+\.?\d*)") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    re.captures_iter(text)
        .filter_map(|cap| cap[1].parse::<f64>().ok())
        .collect()
}
