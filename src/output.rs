//! Transcript output writers: plain text, JSON, SRT, and WebVTT.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::{TranscriptionResult, TranskriptError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Txt,
    Json,
    Srt,
    Vtt,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
        }
    }
}

/// Render a result into the requested format.
pub fn render(result: &TranscriptionResult, format: OutputFormat) -> Result<String, TranskriptError> {
    Ok(match format {
        OutputFormat::Txt => result.text.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Srt => render_srt(result),
        OutputFormat::Vtt => render_vtt(result),
    })
}

/// Render and write a transcript file.
pub fn write_transcript(
    result: &TranscriptionResult,
    path: &Path,
    format: OutputFormat,
) -> Result<(), TranskriptError> {
    fs::write(path, render(result, format)?)?;
    log::info!("Transcript saved to {}", path.display());
    Ok(())
}

/// SubRip timestamp: `HH:MM:SS,mmm`.
pub fn srt_timestamp(seconds: f32) -> String {
    format_timestamp(seconds, ',')
}

/// WebVTT timestamp: `HH:MM:SS.mmm`.
pub fn vtt_timestamp(seconds: f32) -> String {
    format_timestamp(seconds, '.')
}

fn format_timestamp(seconds: f32, separator: char) -> String {
    let total_ms = (f64::from(seconds.max(0.0)) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02}{separator}{millis:03}")
}

fn render_srt(result: &TranscriptionResult) -> String {
    let mut out = String::new();
    for (index, segment) in result.segments.iter().enumerate() {
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            srt_timestamp(segment.start),
            srt_timestamp(segment.end),
            segment.text.trim()
        );
    }
    out
}

fn render_vtt(result: &TranscriptionResult) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for segment in &result.segments {
        let _ = write!(
            out,
            "{} --> {}\n{}\n\n",
            vtt_timestamp(segment.start),
            vtt_timestamp(segment.end),
            segment.text.trim()
        );
    }
    out
}
