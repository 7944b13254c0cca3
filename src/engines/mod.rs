//! Speech recognition engines.
//!
//! A single engine is provided: OpenAI's Whisper through `whisper-rs`,
//! loading a GGML format model file (for example `ggml-large-v3.bin`) and
//! running it with deterministic decoding parameters tuned for Turkish.
//! The [`crate::TranscriptionEngine`] trait is the seam the pipeline works
//! against, so tests can substitute a mock engine.

pub mod whisper;
