//! Turkish-tuned video/audio transcription pipeline.
//!
//! The pipeline has two stages: audio normalization through an external
//! `ffmpeg` process ([`extract`]), and speech recognition through a local
//! Whisper model ([`engines::whisper`]). The raw transcript is then run
//! through a lexical post-correction pass ([`correct`]) and serialized by one
//! of the output writers ([`output`]). [`pipeline`] sequences the stages and
//! derives the intermediate file paths.

pub mod audio;
pub mod correct;
pub mod engines;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

use std::path::Path;

use serde::Serialize;

pub use error::TranskriptError;

/// Flat transcription outcome: full text, timestamped segments, and the
/// language the model detected (a Whisper language code such as `"tr"`).
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub language: Option<String>,
    pub segments: Vec<TranscriptionSegment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionSegment {
    pub start: f32,
    pub end: f32,
    pub text: String,
}

/// Seam between the pipeline and a concrete speech-recognition model.
pub trait TranscriptionEngine {
    type InferenceParams;
    type ModelParams;

    fn load_model(&mut self, model_path: &Path) -> Result<(), TranskriptError>
    where
        Self::ModelParams: Default,
    {
        self.load_model_with_params(model_path, Self::ModelParams::default())
    }

    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<(), TranskriptError>;

    fn unload_model(&mut self);

    fn transcribe_samples(
        &mut self,
        samples: Vec<f32>,
        params: Option<Self::InferenceParams>,
    ) -> Result<TranscriptionResult, TranskriptError>;

    fn transcribe_file(
        &mut self,
        wav_path: &Path,
        params: Option<Self::InferenceParams>,
    ) -> Result<TranscriptionResult, TranskriptError> {
        let samples = audio::read_wav_samples(wav_path)?;
        self.transcribe_samples(samples, params)
    }
}
