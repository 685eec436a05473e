// SPDX-License-Identifier: MPL-2.0
//! Looping ambient audio track.
//!
//! A blocking worker decodes the track with FFmpeg, resamples it to the
//! output device's rate and layout, and keeps the device queue topped up
//! a short look-ahead ahead of playback. At end of file it rewinds and
//! keeps going until the session's [`AudioControl`] is stopped.

use super::audio_output::{AudioControl, AudioOutput};
use super::ffmpeg::{init_ffmpeg, rewind};
use crate::config::AUDIO_LOOKAHEAD_MS;
use crate::error::{MediaError, MediaKind};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long the worker sleeps while the output queue is full.
const FILL_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Events sent from the audio worker.
#[derive(Debug, Clone)]
pub enum AudioEvent {
    /// The track cannot be played; the worker has exited.
    Failed(MediaError),
}

/// Starts the audio worker for `audio_path`.
///
/// Failures are logged and reported once through `event_tx`. The worker
/// exits when `control` is stopped.
pub fn spawn_audio_track(
    audio_path: PathBuf,
    control: AudioControl,
    event_tx: mpsc::Sender<AudioEvent>,
) {
    // cpal streams and FFmpeg contexts are not Send: both are created here
    tokio::task::spawn_blocking(move || {
        if let Err(err) = play_loop(&audio_path, &control) {
            tracing::warn!(path = %audio_path.display(), error = %err, "audio track stopped");
            let _ = event_tx.blocking_send(AudioEvent::Failed(err));
        }
    });
}

/// Number of interleaved samples covering `ms` milliseconds of output.
#[must_use]
pub fn lookahead_samples(sample_rate: u32, channels: u16, ms: u32) -> usize {
    (u64::from(sample_rate) * u64::from(channels) * u64::from(ms) / 1000) as usize
}

/// Spreads interleaved stereo (or mono) samples over `dst` device channels.
///
/// Extra device channels receive silence; `src == dst` is a plain copy.
#[must_use]
pub fn remap_channels(samples: &[f32], src: u16, dst: u16) -> Vec<f32> {
    if src == dst || src == 0 {
        return samples.to_vec();
    }
    let (src, dst) = (src as usize, dst as usize);
    let mut out = Vec::with_capacity(samples.len() / src * dst);
    for frame in samples.chunks_exact(src) {
        for channel in 0..dst {
            out.push(frame.get(channel).copied().unwrap_or(0.0));
        }
    }
    out
}

struct AudioSource {
    ictx: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Audio,
    stream_index: usize,
    eof_sent: bool,
}

impl AudioSource {
    fn open(path: &Path) -> Result<Self, MediaError> {
        init_ffmpeg().map_err(|e| MediaError::Other(e.to_string()))?;

        let ictx = ffmpeg_next::format::input(path)
            .map_err(|e| MediaError::from_message(&format!("Failed to open audio: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or(MediaError::NoStream(MediaKind::Audio))?;
        let stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| MediaError::from_message(&format!("codec context: {e}")))?;
        let decoder = context_decoder
            .decoder()
            .audio()
            .map_err(|e| MediaError::from_message(&format!("audio decoder: {e}")))?;

        Ok(Self {
            ictx,
            decoder,
            stream_index,
            eof_sent: false,
        })
    }

    /// Returns the next decoded frame, or `None` at end of stream.
    fn next_frame(&mut self) -> Option<ffmpeg_next::frame::Audio> {
        let mut frame = ffmpeg_next::frame::Audio::empty();
        loop {
            if self.decoder.receive_frame(&mut frame).is_ok() {
                return Some(frame);
            }
            if self.eof_sent {
                return None;
            }

            let stream_index = self.stream_index;
            let packet = self
                .ictx
                .packets()
                .find(|(stream, _)| stream.index() == stream_index)
                .map(|(_, packet)| packet);

            match packet {
                Some(packet) => {
                    if let Err(e) = self.decoder.send_packet(&packet) {
                        tracing::debug!(error = %e, "audio packet rejected");
                    }
                }
                None => {
                    let _ = self.decoder.send_eof();
                    self.eof_sent = true;
                }
            }
        }
    }

    fn rewind(&mut self) -> Result<(), MediaError> {
        rewind(&mut self.ictx).map_err(|e| MediaError::DecodingFailed(e.to_string()))?;
        self.decoder.flush();
        self.eof_sent = false;
        Ok(())
    }
}

fn play_loop(path: &Path, control: &AudioControl) -> Result<(), MediaError> {
    if !path.exists() {
        return Err(MediaError::NotFound(path.display().to_string()));
    }

    let mut source = AudioSource::open(path)?;
    let output = AudioOutput::new(control.clone())?;

    // The resampler only produces mono or stereo; wider devices are remapped
    let (resampled_layout, resampled_channels) = match output.channels() {
        1 => (ffmpeg_next::ChannelLayout::MONO, 1),
        _ => (ffmpeg_next::ChannelLayout::STEREO, 2),
    };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        source.decoder.format(),
        source.decoder.channel_layout(),
        source.decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        resampled_layout,
        output.sample_rate(),
    )
    .map_err(|e| MediaError::DecodingFailed(format!("Failed to create resampler: {e}")))?;

    let lookahead = lookahead_samples(output.sample_rate(), output.channels(), AUDIO_LOOKAHEAD_MS);
    let mut frames_since_rewind: u64 = 0;

    while !control.is_stopped() {
        if output.buffered_samples() >= lookahead {
            std::thread::sleep(FILL_POLL_INTERVAL);
            continue;
        }

        let Some(decoded) = source.next_frame() else {
            if frames_since_rewind == 0 {
                return Err(MediaError::DecodingFailed(
                    "audio produced no frames".to_string(),
                ));
            }
            tracing::debug!(
                path = %path.display(),
                frames = frames_since_rewind,
                "audio loop restart",
            );
            source.rewind()?;
            frames_since_rewind = 0;
            continue;
        };
        frames_since_rewind += 1;

        let mut resampled = ffmpeg_next::frame::Audio::empty();
        if let Err(e) = resampler.run(&decoded, &mut resampled) {
            tracing::debug!(error = %e, "audio resampling failed");
            continue;
        }

        let samples = extract_samples(&resampled, resampled_channels);
        output.queue(&remap_channels(
            &samples,
            resampled_channels,
            output.channels(),
        ));
    }

    Ok(())
}

/// Extracts f32 samples from a resampled, packed audio frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16) -> Vec<f32> {
    let data = frame.data(0);
    let sample_count = frame.samples() * channels as usize;

    data.chunks_exact(4)
        .take(sample_count)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}
