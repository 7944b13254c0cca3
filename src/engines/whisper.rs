use std::path::{Path, PathBuf};

use clap::ValueEnum;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::{TranscriptionEngine, TranscriptionResult, TranscriptionSegment, TranskriptError};

/// Prompt seeded into the decoder so it commits to Turkish early.
pub const TURKISH_INITIAL_PROMPT: &str =
    "Bu bir Türkçe konuşma kaydıdır. Türkçe dilinde transkripsiyon yapılacaktır.";

/// Pretrained Whisper model sizes, mapped to conventional GGML file names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
    LargeV2,
    LargeV3,
}

impl ModelSize {
    pub fn ggml_file_name(self) -> &'static str {
        match self {
            ModelSize::Tiny => "ggml-tiny.bin",
            ModelSize::Base => "ggml-base.bin",
            ModelSize::Small => "ggml-small.bin",
            ModelSize::Medium => "ggml-medium.bin",
            ModelSize::Large => "ggml-large.bin",
            ModelSize::LargeV2 => "ggml-large-v2.bin",
            ModelSize::LargeV3 => "ggml-large-v3.bin",
        }
    }

    /// Expected model file location inside a models directory.
    pub fn resolve(self, models_dir: &Path) -> PathBuf {
        models_dir.join(self.ggml_file_name())
    }
}

impl Default for ModelSize {
    fn default() -> Self {
        ModelSize::LargeV3
    }
}

#[derive(Debug, Clone)]
pub struct WhisperModelParams {
    /// Boolean capability switch only; device selection beyond this is left
    /// to whisper.cpp.
    pub use_gpu: bool,
}

impl Default for WhisperModelParams {
    fn default() -> Self {
        Self { use_gpu: true }
    }
}

/// Decoding parameters. The defaults are the fixed Turkish-tuned set:
/// greedy deterministic decoding, entropy threshold 2.4, log-probability
/// threshold -1.0, no-speech threshold 0.6, conditioning on previous text,
/// forced `tr` language with a Turkish initial prompt.
#[derive(Debug, Clone)]
pub struct WhisperInferenceParams {
    pub language: Option<String>,
    pub translate: bool,
    pub temperature: f32,
    pub entropy_thold: f32,
    pub logprob_thold: f32,
    pub no_speech_thold: f32,
    pub condition_on_previous_text: bool,
    pub initial_prompt: Option<String>,
}

impl Default for WhisperInferenceParams {
    fn default() -> Self {
        Self {
            language: Some("tr".to_string()),
            translate: false,
            temperature: 0.0,
            entropy_thold: 2.4,
            logprob_thold: -1.0,
            no_speech_thold: 0.6,
            condition_on_previous_text: true,
            initial_prompt: Some(TURKISH_INITIAL_PROMPT.to_string()),
        }
    }
}

pub struct WhisperEngine {
    loaded_model_path: Option<PathBuf>,
    context: Option<WhisperContext>,
    state: Option<whisper_rs::WhisperState>,
}

impl WhisperEngine {
    pub fn new() -> Self {
        Self {
            loaded_model_path: None,
            context: None,
            state: None,
        }
    }

    pub fn loaded_model_path(&self) -> Option<&Path> {
        self.loaded_model_path.as_deref()
    }
}

impl Default for WhisperEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptionEngine for WhisperEngine {
    type InferenceParams = WhisperInferenceParams;
    type ModelParams = WhisperModelParams;

    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<(), TranskriptError> {
        if !model_path.is_file() {
            return Err(TranskriptError::ModelNotFound(model_path.to_path_buf()));
        }

        log::info!(
            "Loading Whisper model from {} (gpu: {})",
            model_path.display(),
            params.use_gpu
        );

        let mut context_params = WhisperContextParameters::default();
        context_params.use_gpu(params.use_gpu);

        let context =
            WhisperContext::new_with_params(&model_path.to_string_lossy(), context_params)?;
        let state = context.create_state()?;

        self.context = Some(context);
        self.state = Some(state);
        self.loaded_model_path = Some(model_path.to_path_buf());
        Ok(())
    }

    fn unload_model(&mut self) {
        self.loaded_model_path = None;
        self.state = None;
        self.context = None;
    }

    fn transcribe_samples(
        &mut self,
        samples: Vec<f32>,
        params: Option<Self::InferenceParams>,
    ) -> Result<TranscriptionResult, TranskriptError> {
        let state = self.state.as_mut().ok_or(TranskriptError::ModelNotLoaded)?;

        let params = params.unwrap_or_default();

        // best_of 1 with temperature 0.0 keeps decoding deterministic.
        let mut full_params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        full_params.set_language(params.language.as_deref());
        full_params.set_translate(params.translate);
        full_params.set_temperature(params.temperature);
        full_params.set_entropy_thold(params.entropy_thold);
        full_params.set_logprob_thold(params.logprob_thold);
        full_params.set_no_speech_thold(params.no_speech_thold);
        full_params.set_no_context(!params.condition_on_previous_text);
        if let Some(prompt) = params.initial_prompt.as_deref() {
            full_params.set_initial_prompt(prompt);
        }
        full_params.set_print_special(false);
        full_params.set_print_progress(false);
        full_params.set_print_realtime(false);
        full_params.set_print_timestamps(false);
        full_params.set_suppress_blank(true);
        full_params.set_suppress_non_speech_tokens(true);

        state.full(full_params, &samples)?;

        let num_segments = state.full_n_segments()?;

        let mut segments = Vec::new();
        let mut full_text = String::new();

        for i in 0..num_segments {
            let text = state.full_get_segment_text(i)?;
            let start = state.full_get_segment_t0(i)? as f32 / 100.0;
            let end = state.full_get_segment_t1(i)? as f32 / 100.0;

            segments.push(TranscriptionSegment {
                start,
                end,
                text: text.clone(),
            });
            full_text.push_str(&text);
        }

        let language = whisper_rs::get_lang_str(state.full_lang_id_from_state()?)
            .map(|code| code.to_string());

        log::info!(
            "Transcribed {} segment(s), detected language: {}",
            segments.len(),
            language.as_deref().unwrap_or("unknown")
        );

        Ok(TranscriptionResult {
            text: full_text.trim().to_string(),
            language,
            segments,
        })
    }
}
