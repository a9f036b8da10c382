// src/core/decoder.rs
//
// Audio decoding module.
// Uses Symphonia for format-agnostic decoding (WAV, MP3, FLAC, ...).

use anyhow::{Context, Result};
use symphonia::core::audio::SampleBuffer as InterleavedBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use std::fs::File;
use std::path::Path;

use super::buffer::SampleBuffer;
use crate::error::NoiseCheckError;

/// Container for decoded audio data and metadata
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Original codec name
    pub codec_name: String,
}

impl AudioData {
    /// Down-mix to mono and wrap as a validated [`SampleBuffer`]
    pub fn to_sample_buffer(&self) -> crate::error::Result<SampleBuffer> {
        SampleBuffer::new(extract_mono(self), self.sample_rate)
    }
}

/// Decode audio file to floating-point samples
pub fn decode_audio(path: &Path) -> Result<AudioData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("Failed to probe file format - may be corrupted or unsupported")?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No supported audio track found in file")?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("File does not specify sample rate")?;

    // Containers may omit the layout; the first decoded buffer is authoritative
    let mut channels = track.codec_params.channels.map(|c| c.count());

    let codec_name = symphonia::default::get_codecs()
        .get_codec(track.codec_params.codec)
        .map(|d| d.short_name.to_string())
        .unwrap_or_else(|| format!("{:?}", track.codec_params.codec));

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create decoder for audio codec")?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<InterleavedBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(msg)) => {
                log::debug!("Skipping undecodable packet in {}: {}", path.display(), msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let decoded_channels = spec.channels.count();
            if channels.is_some_and(|c| c != decoded_channels) {
                log::debug!(
                    "{}: header reports {:?} channels, decoder produced {}",
                    path.display(),
                    channels,
                    decoded_channels
                );
            }
            channels = Some(decoded_channels);

            let duration = decoded.capacity() as u64;
            sample_buf = Some(InterleavedBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(NoiseCheckError::Decode(format!(
            "no audio samples decoded from {}",
            path.display()
        ))
        .into());
    }

    let channels = match channels {
        Some(count) if count > 0 => count,
        _ => {
            return Err(
                NoiseCheckError::Decode("file reports 0 audio channels".to_string()).into(),
            )
        }
    };

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);

    log::debug!(
        "Decoded {}: {} Hz, {} ch, {:.2}s ({})",
        path.display(),
        sample_rate,
        channels,
        duration_secs,
        codec_name
    );

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        duration_secs,
        codec_name,
    })
}

/// Decode straight to a mono [`SampleBuffer`]
pub fn load_mono(path: &Path) -> Result<SampleBuffer> {
    let audio = decode_audio(path)?;
    audio
        .to_sample_buffer()
        .with_context(|| format!("Invalid audio in {}", path.display()))
}

/// Extract mono samples from potentially multi-channel audio
pub fn extract_mono(audio: &AudioData) -> Vec<f32> {
    if audio.channels <= 1 {
        return audio.samples.clone();
    }

    audio
        .samples
        .chunks_exact(audio.channels)
        .map(|frame| frame.iter().sum::<f32>() / audio.channels as f32)
        .collect()
}
