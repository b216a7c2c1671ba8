// Catsense Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatSenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("FFprobe error: {0}")]
    FFprobe(String),

    #[error("Missing feature: {0}")]
    InvalidFeature(String),

    #[error("No audio stream in {0}")]
    NoAudioStream(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for CatSenseError {
    fn from(err: anyhow::Error) -> Self {
        CatSenseError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatSenseError>;
