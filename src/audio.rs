//! WAV reading for the transcription engine.
//!
//! Whisper consumes 16 kHz, 16-bit, mono PCM. [`read_wav_samples`] validates
//! that layout and normalizes samples to f32 in [-1.0, 1.0];
//! [`matches_engine_spec`] lets the pipeline decide whether an intermediate
//! ffmpeg conversion pass is required first.

use std::path::Path;

use crate::TranskriptError;

/// Sample rate the engine consumes.
pub const ENGINE_SAMPLE_RATE: u32 = 16_000;

/// WAV layout the engine consumes: 16 kHz, 16-bit int PCM, mono.
pub fn engine_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: ENGINE_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Returns true if the file is a WAV with the engine's expected layout.
///
/// Files hound cannot parse (mp3, ogg, a video container) report `false`:
/// the caller routes them through the ffmpeg conversion pass, which accepts
/// anything the transcoder can read.
pub fn matches_engine_spec(audio_path: &Path) -> Result<bool, TranskriptError> {
    match hound::WavReader::open(audio_path) {
        Ok(reader) => Ok(reader.spec() == engine_spec()),
        Err(hound::Error::IoError(err)) => Err(TranskriptError::Io(err)),
        Err(_) => Ok(false),
    }
}

/// Read WAV samples and normalize them to f32 in [-1.0, 1.0].
///
/// # Errors
///
/// Fails if the file cannot be opened or its layout differs from
/// [`engine_spec`].
pub fn read_wav_samples(wav_path: &Path) -> Result<Vec<f32>, TranskriptError> {
    let mut reader = hound::WavReader::open(wav_path)?;
    let spec = reader.spec();
    let expected = engine_spec();

    if spec.channels != expected.channels {
        return Err(TranskriptError::AudioFormat(format!(
            "expected {} channel(s), found {}",
            expected.channels, spec.channels
        )));
    }

    if spec.sample_rate != expected.sample_rate {
        return Err(TranskriptError::AudioFormat(format!(
            "expected {} Hz sample rate, found {} Hz",
            expected.sample_rate, spec.sample_rate
        )));
    }

    if spec.bits_per_sample != expected.bits_per_sample {
        return Err(TranskriptError::AudioFormat(format!(
            "expected {} bits per sample, found {}",
            expected.bits_per_sample, spec.bits_per_sample
        )));
    }

    if spec.sample_format != expected.sample_format {
        return Err(TranskriptError::AudioFormat(format!(
            "expected Int sample format, found {:?}",
            spec.sample_format
        )));
    }

    // 32768 keeps the full i16 range inside [-1.0, 1.0]: i16::MIN lands on
    // exactly -1.0, i16::MAX on 32767/32768.
    let samples: Result<Vec<f32>, _> = reader
        .samples::<i16>()
        .map(|sample| sample.map(|s| s as f32 / 32768.0))
        .collect();

    Ok(samples?)
}
