use std::path::PathBuf;

use clap::Parser;

use transkript::engines::whisper::{
    ModelSize, WhisperEngine, WhisperInferenceParams, WhisperModelParams,
};
use transkript::extract::{self, QualityPreset};
use transkript::output::OutputFormat;
use transkript::pipeline::{self, PipelineConfig};
use transkript::{TranscriptionEngine, TranscriptionResult, TranskriptError};

#[derive(Parser, Debug)]
#[command(
    about = "Extract Turkish transcripts from video and audio files",
    version
)]
struct Args {
    /// Path to the video file to process
    #[arg(required_unless_present_any = ["transcribe_only", "check_deps"])]
    input: Option<PathBuf>,

    /// Audio quality preset for the extraction stage
    #[arg(short, long, value_enum, default_value_t = QualityPreset::High)]
    quality: QualityPreset,

    /// Whisper model size
    #[arg(short, long, value_enum, default_value_t = ModelSize::LargeV3)]
    model: ModelSize,

    /// Explicit path to a GGML model file, overriding --model/--models-dir
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Directory holding GGML model files
    #[arg(long, default_value = "models")]
    models_dir: PathBuf,

    /// Language code forced on the model
    #[arg(short, long, default_value = "tr")]
    language: String,

    /// Transcript output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Txt)]
    format: OutputFormat,

    /// Output path override (the audio file with --audio-only, the
    /// transcript otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for derived output files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Only extract audio, don't transcribe
    #[arg(long, conflicts_with = "transcribe_only")]
    audio_only: bool,

    /// Transcribe an existing audio file, skipping extraction
    #[arg(long, value_name = "AUDIO")]
    transcribe_only: Option<PathBuf>,

    /// Check external dependencies and exit
    #[arg(long)]
    check_deps: bool,

    /// Disable GPU inference
    #[arg(long)]
    no_gpu: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), TranskriptError> {
    let model_path = args
        .model_path
        .clone()
        .unwrap_or_else(|| args.model.resolve(&args.models_dir));

    if args.check_deps {
        report_dependencies(&model_path);
        return Ok(());
    }

    if !extract::check_ffmpeg() {
        return Err(TranskriptError::FfmpegMissing);
    }

    let inference = WhisperInferenceParams {
        language: Some(args.language.clone()),
        ..Default::default()
    };

    if let Some(audio_path) = args.transcribe_only.as_deref() {
        let mut engine = load_engine(&model_path, args.no_gpu)?;
        let transcript_path = args
            .output
            .clone()
            .unwrap_or_else(|| pipeline::derive_transcript_path(audio_path, args.format));
        let result = pipeline::transcribe_stage(
            &mut engine,
            audio_path,
            &transcript_path,
            args.format,
            Some(inference),
        )?;
        engine.unload_model();
        print_summary(&result, &transcript_path);
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .expect("clap requires an input path without --transcribe-only/--check-deps");

    if args.audio_only {
        let audio_path = args
            .output
            .clone()
            .unwrap_or_else(|| pipeline::derive_audio_path(input));
        pipeline::extract_stage(input, &audio_path, args.quality)?;
        println!("Audio extraction completed: {}", audio_path.display());
        println!("Use --transcribe-only to transcribe this audio file later");
        return Ok(());
    }

    let config = PipelineConfig {
        preset: args.quality,
        format: args.format,
        output_dir: args.output_dir.clone(),
        transcript_path: args.output.clone(),
    };

    let mut engine = load_engine(&model_path, args.no_gpu)?;
    let outcome = pipeline::run_pipeline(&mut engine, input, &config, Some(inference))?;
    engine.unload_model();

    println!("Pipeline completed successfully");
    println!("Video: {}", input.display());
    println!("Audio: {}", outcome.audio_path.display());
    print_summary(&outcome.result, &outcome.transcript_path);
    Ok(())
}

fn load_engine(model_path: &std::path::Path, no_gpu: bool) -> Result<WhisperEngine, TranskriptError> {
    let mut engine = WhisperEngine::new();
    engine.load_model_with_params(model_path, WhisperModelParams { use_gpu: !no_gpu })?;
    Ok(engine)
}

fn print_summary(result: &TranscriptionResult, transcript_path: &std::path::Path) {
    println!("Transcript: {}", transcript_path.display());
    println!(
        "Language detected: {}",
        result.language.as_deref().unwrap_or("unknown")
    );
    println!("Segments: {}", result.segments.len());
    if let Some(last) = result.segments.last() {
        println!("Duration: {:.1} seconds", last.end);
    }
}

fn report_dependencies(model_path: &std::path::Path) {
    if extract::check_ffmpeg() {
        println!("✓ ffmpeg is installed");
    } else {
        println!("✗ ffmpeg is not installed");
        println!("  Install with: brew install ffmpeg (macOS) or sudo apt install ffmpeg (Ubuntu)");
    }

    if model_path.is_file() {
        println!("✓ model file found: {}", model_path.display());
    } else {
        println!("✗ model file not found: {}", model_path.display());
    }
}
