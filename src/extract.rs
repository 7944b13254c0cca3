//! Audio normalization through an external `ffmpeg` process.
//!
//! The transcoder strips the video stream, downmixes to mono, resamples, and
//! applies a fixed filter chain selected from the quality preset table. The
//! argument builders are pure so the exact command lines are testable without
//! running ffmpeg.

use std::path::Path;
use std::process::Command;

use clap::ValueEnum;

use crate::TranskriptError;

/// Quality presets for the normalization pass.
///
/// `High` keeps a wide band plus dynamic range compression for archival
/// quality; `Low` matches the engine's 16 kHz input directly with a narrow
/// speech band.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum QualityPreset {
    High,
    Medium,
    Low,
}

struct PresetSettings {
    sample_rate: &'static str,
    codec: &'static str,
    filters: &'static str,
}

impl QualityPreset {
    fn settings(self) -> PresetSettings {
        match self {
            QualityPreset::High => PresetSettings {
                sample_rate: "48000",
                codec: "pcm_s24le",
                filters: "highpass=f=80,lowpass=f=8000,volume=1.2,\
                          compand=0.3|0.3:1|1:-90/-60/-40/-30/-20/-10/-3/0:6:0:-90:0.2",
            },
            QualityPreset::Medium => PresetSettings {
                sample_rate: "44100",
                codec: "pcm_s16le",
                filters: "highpass=f=100,lowpass=f=6000,volume=1.1",
            },
            QualityPreset::Low => PresetSettings {
                sample_rate: "16000",
                codec: "pcm_s16le",
                filters: "highpass=f=200,lowpass=f=3000,volume=1.0",
            },
        }
    }
}

/// Build the ffmpeg argument vector for a preset extraction pass.
pub fn ffmpeg_extract_args(input: &Path, output: &Path, preset: QualityPreset) -> Vec<String> {
    let settings = preset.settings();
    vec![
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-vn".to_string(),
        "-acodec".to_string(),
        settings.codec.to_string(),
        "-ar".to_string(),
        settings.sample_rate.to_string(),
        "-ac".to_string(),
        "1".to_string(),
        "-af".to_string(),
        settings.filters.to_string(),
        "-y".to_string(),
        output.to_string_lossy().into_owned(),
    ]
}

/// Build the ffmpeg argument vector for the engine-format conversion pass
/// (16 kHz, mono, 16-bit PCM).
pub fn ffmpeg_convert_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-vn".to_string(),
        "-acodec".to_string(),
        "pcm_s16le".to_string(),
        "-ar".to_string(),
        "16000".to_string(),
        "-ac".to_string(),
        "1".to_string(),
        "-y".to_string(),
        output.to_string_lossy().into_owned(),
    ]
}

fn run_ffmpeg(args: &[String]) -> Result<(), TranskriptError> {
    log::debug!("ffmpeg {}", args.join(" "));

    let output = Command::new("ffmpeg")
        .args(args)
        .output()
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => TranskriptError::FfmpegMissing,
            _ => TranskriptError::Io(err),
        })?;

    if !output.status.success() {
        return Err(TranskriptError::FfmpegFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

/// Extract normalized audio from a video (or audio) file.
pub fn extract_audio(
    input: &Path,
    output: &Path,
    preset: QualityPreset,
) -> Result<(), TranskriptError> {
    if !input.is_file() {
        return Err(TranskriptError::InputNotFound(input.to_path_buf()));
    }

    log::info!(
        "Extracting {:?} quality audio from {} to {}",
        preset,
        input.display(),
        output.display()
    );
    run_ffmpeg(&ffmpeg_extract_args(input, output, preset))
}

/// Convert an audio file down to the engine's input layout.
pub fn convert_for_engine(input: &Path, output: &Path) -> Result<(), TranskriptError> {
    if !input.is_file() {
        return Err(TranskriptError::InputNotFound(input.to_path_buf()));
    }

    log::info!(
        "Converting {} to 16 kHz mono for the engine",
        input.display()
    );
    run_ffmpeg(&ffmpeg_convert_args(input, output))
}

/// Returns true if an `ffmpeg` binary is on PATH and answers `-version`.
pub fn check_ffmpeg() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
