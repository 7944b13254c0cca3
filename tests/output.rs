use std::error::Error;

use transkript::output::{render, write_transcript, OutputFormat};
use transkript::{TranscriptionResult, TranscriptionSegment};

fn synthetic_result() -> TranscriptionResult {
    TranscriptionResult {
        text: "Merhaba dünya. Nasılsınız?".to_string(),
        language: Some("tr".to_string()),
        segments: vec![
            TranscriptionSegment {
                start: 0.0,
                end: 2.5,
                text: "Merhaba dünya.".to_string(),
            },
            TranscriptionSegment {
                start: 2.5,
                end: 7.25,
                text: " Nasılsınız?".to_string(),
            },
        ],
    }
}

#[test]
fn txt_is_the_bare_text() -> Result<(), Box<dyn Error>> {
    let rendered = render(&synthetic_result(), OutputFormat::Txt)?;
    assert_eq!(rendered, "Merhaba dünya. Nasılsınız?");
    Ok(())
}

#[test]
fn srt_blocks_are_byte_exact() -> Result<(), Box<dyn Error>> {
    let rendered = render(&synthetic_result(), OutputFormat::Srt)?;
    assert_eq!(
        rendered,
        "1\n\
         00:00:00,000 --> 00:00:02,500\n\
         Merhaba dünya.\n\
         \n\
         2\n\
         00:00:02,500 --> 00:00:07,250\n\
         Nasılsınız?\n\
         \n"
    );
    Ok(())
}

#[test]
fn vtt_output_is_byte_exact() -> Result<(), Box<dyn Error>> {
    let rendered = render(&synthetic_result(), OutputFormat::Vtt)?;
    assert_eq!(
        rendered,
        "WEBVTT\n\
         \n\
         00:00:00.000 --> 00:00:02.500\n\
         Merhaba dünya.\n\
         \n\
         00:00:02.500 --> 00:00:07.250\n\
         Nasılsınız?\n\
         \n"
    );
    Ok(())
}

#[test]
fn json_output_is_byte_exact() -> Result<(), Box<dyn Error>> {
    let rendered = render(&synthetic_result(), OutputFormat::Json)?;
    assert_eq!(
        rendered,
        r#"{
  "text": "Merhaba dünya. Nasılsınız?",
  "language": "tr",
  "segments": [
    {
      "start": 0.0,
      "end": 2.5,
      "text": "Merhaba dünya."
    },
    {
      "start": 2.5,
      "end": 7.25,
      "text": " Nasılsınız?"
    }
  ]
}"#
    );
    Ok(())
}

#[test]
fn empty_segment_list_renders_header_only_vtt_and_empty_srt() -> Result<(), Box<dyn Error>> {
    let result = TranscriptionResult {
        text: String::new(),
        language: None,
        segments: Vec::new(),
    };
    assert_eq!(render(&result, OutputFormat::Srt)?, "");
    assert_eq!(render(&result, OutputFormat::Vtt)?, "WEBVTT\n\n");
    Ok(())
}

#[test]
fn write_transcript_puts_rendered_bytes_on_disk() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("talk_transcript.srt");

    write_transcript(&synthetic_result(), &path, OutputFormat::Srt)?;

    let on_disk = std::fs::read_to_string(&path)?;
    assert_eq!(on_disk, render(&synthetic_result(), OutputFormat::Srt)?);
    Ok(())
}
