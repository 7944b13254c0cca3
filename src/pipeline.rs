//! Sequences the two pipeline stages and derives intermediate file paths.
//!
//! The stages stay independently invocable: [`extract_stage`] produces the
//! normalized audio artifact, [`transcribe_stage`] turns an audio file into a
//! written transcript, and [`run_pipeline`] chains them with the derived
//! `<stem>_audio.wav` / `<stem>_transcript.<ext>` path contract.

use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::QualityPreset;
use crate::output::OutputFormat;
use crate::{audio, correct, extract, output, TranscriptionEngine, TranscriptionResult, TranskriptError};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub preset: QualityPreset,
    pub format: OutputFormat,
    /// Directory receiving the derived artifacts; defaults to the input's
    /// parent directory.
    pub output_dir: Option<PathBuf>,
    /// Explicit transcript path, overriding the derived one.
    pub transcript_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            preset: QualityPreset::High,
            format: OutputFormat::Txt,
            output_dir: None,
            transcript_path: None,
        }
    }
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub audio_path: PathBuf,
    pub transcript_path: PathBuf,
    pub result: TranscriptionResult,
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<stem>_audio.wav` beside the video file.
pub fn derive_audio_path(video: &Path) -> PathBuf {
    let mut path = video.to_path_buf();
    path.set_file_name(format!("{}_audio.wav", file_stem(video)));
    path
}

/// `<stem>_transcript.<ext>` beside the audio file.
pub fn derive_transcript_path(audio: &Path, format: OutputFormat) -> PathBuf {
    let mut path = audio.to_path_buf();
    path.set_file_name(format!(
        "{}_transcript.{}",
        file_stem(audio),
        format.extension()
    ));
    path
}

/// Sibling temp path for the engine-format conversion pass.
fn engine_input_path(audio: &Path) -> PathBuf {
    let mut path = audio.to_path_buf();
    path.set_file_name(format!("{}_16k.wav", file_stem(audio)));
    path
}

/// Run the normalization stage, writing the preset WAV to `audio_out`.
pub fn extract_stage(
    video: &Path,
    audio_out: &Path,
    preset: QualityPreset,
) -> Result<(), TranskriptError> {
    extract::extract_audio(video, audio_out, preset)
}

/// Run the transcription stage: feed the engine 16 kHz mono samples
/// (converting through ffmpeg when the input layout differs), post-correct
/// the text, and write the transcript.
pub fn transcribe_stage<E: TranscriptionEngine>(
    engine: &mut E,
    audio_path: &Path,
    transcript_out: &Path,
    format: OutputFormat,
    params: Option<E::InferenceParams>,
) -> Result<TranscriptionResult, TranskriptError> {
    if !audio_path.is_file() {
        return Err(TranskriptError::InputNotFound(audio_path.to_path_buf()));
    }

    let converted = if audio::matches_engine_spec(audio_path)? {
        None
    } else {
        let temp = engine_input_path(audio_path);
        extract::convert_for_engine(audio_path, &temp)?;
        Some(temp)
    };

    let engine_input = converted.as_deref().unwrap_or(audio_path);
    let transcribed = engine.transcribe_file(engine_input, params);

    if let Some(temp) = converted {
        let _ = fs::remove_file(temp);
    }

    let mut result = transcribed?;
    result.text = correct::post_process(&result.text);
    for segment in &mut result.segments {
        segment.text = correct::post_process(&segment.text);
    }

    output::write_transcript(&result, transcript_out, format)?;
    Ok(result)
}

/// Full pipeline: normalize, transcribe, post-correct, write.
pub fn run_pipeline<E: TranscriptionEngine>(
    engine: &mut E,
    video: &Path,
    config: &PipelineConfig,
    params: Option<E::InferenceParams>,
) -> Result<PipelineOutcome, TranskriptError> {
    if !video.is_file() {
        return Err(TranskriptError::InputNotFound(video.to_path_buf()));
    }

    let audio_path = match &config.output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir.join(format!("{}_audio.wav", file_stem(video)))
        }
        None => derive_audio_path(video),
    };

    extract_stage(video, &audio_path, config.preset)?;

    let transcript_path = config
        .transcript_path
        .clone()
        .unwrap_or_else(|| derive_transcript_path(&audio_path, config.format));

    let result = transcribe_stage(engine, &audio_path, &transcript_path, config.format, params)?;

    Ok(PipelineOutcome {
        audio_path,
        transcript_path,
        result,
    })
}
