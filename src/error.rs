use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum TranskriptError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("WAV error")]
    Wav(#[from] hound::Error),
    #[error("Whisper error")]
    Whisper(#[from] whisper_rs::WhisperError),
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("model file not found: {}", .0.display())]
    ModelNotFound(PathBuf),
    #[error("model not loaded, call load_model() first")]
    ModelNotLoaded,
    #[error("ffmpeg is not installed or not on PATH")]
    FfmpegMissing,
    #[error("ffmpeg exited with {status}: {stderr}")]
    FfmpegFailed { status: ExitStatus, stderr: String },
    #[error("unsupported audio format: {0}")]
    AudioFormat(String),
}
