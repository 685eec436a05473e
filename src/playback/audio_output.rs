// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal for low-latency playback.
//!
//! The output owns a sample queue drained by the device callback. Volume,
//! mute and stop live in an [`AudioControl`] shared with the UI, so toggling
//! mute takes effect on the next callback without any message passing.

use super::Volume;
use crate::error::MediaError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Shared state between the audio thread and the UI.
struct SharedState {
    /// Current volume (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,

    muted: AtomicBool,

    /// Set once the session ends; the audio worker exits on its next check.
    stopped: AtomicBool,
}

/// Cheap, cloneable handle to a session's audio state.
#[derive(Clone)]
pub struct AudioControl {
    shared: Arc<SharedState>,
}

impl AudioControl {
    #[must_use]
    pub fn new(volume: Volume, muted: bool) -> Self {
        Self {
            shared: Arc::new(SharedState {
                volume_bits: AtomicU32::new(volume.value().to_bits()),
                muted: AtomicBool::new(muted),
                stopped: AtomicBool::new(false),
            }),
        }
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new(f32::from_bits(self.shared.volume_bits.load(Ordering::Relaxed)))
    }

    pub fn set_volume(&self, volume: Volume) {
        self.shared
            .volume_bits
            .store(volume.value().to_bits(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.shared.muted.load(Ordering::Relaxed)
    }

    /// Mutes or unmutes the audio track only. Decoding keeps running so the
    /// track has advanced normally when it is unmuted.
    pub fn set_muted(&self, muted: bool) {
        self.shared.muted.store(muted, Ordering::Relaxed);
    }

    pub fn stop(&self) {
        self.shared.stopped.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.shared.stopped.load(Ordering::Relaxed)
    }

    /// Gain the device callback applies right now.
    fn effective_gain(&self) -> f32 {
        if self.is_muted() {
            0.0
        } else {
            self.volume().gain()
        }
    }
}

impl fmt::Debug for AudioControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioControl")
            .field("volume", &self.volume())
            .field("muted", &self.is_muted())
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

type SampleQueue = Arc<Mutex<VecDeque<f32>>>;

/// Audio output stream on the system's default device.
///
/// Not `Send`: create it on the thread that feeds it.
pub struct AudioOutput {
    queue: SampleQueue,

    sample_rate: u32,

    channels: u16,

    /// The audio stream (kept alive to maintain playback).
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device and starts an (initially silent)
    /// stream.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::AudioDevice`] if no device is available, its
    /// configuration cannot be read, or the stream fails to start.
    pub fn new(control: AudioControl) -> Result<Self, MediaError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| MediaError::AudioDevice("No audio output device found".to_string()))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| MediaError::AudioDevice(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();
        let sample_format = supported_config.sample_format();
        let config: cpal::StreamConfig = supported_config.into();

        let queue: SampleQueue = Arc::new(Mutex::new(VecDeque::with_capacity(
            sample_rate as usize * channels as usize,
        )));

        let stream = match sample_format {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &config, Arc::clone(&queue), control)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &config, Arc::clone(&queue), control)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &config, Arc::clone(&queue), control)?
            }
            other => {
                return Err(MediaError::AudioDevice(format!(
                    "Unsupported audio sample format: {other:?}"
                )));
            }
        };

        stream
            .play()
            .map_err(|e| MediaError::AudioDevice(format!("Failed to start audio stream: {e}")))?;

        tracing::debug!(sample_rate, channels, "audio output started");

        Ok(Self {
            queue,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        queue: SampleQueue,
        control: AudioControl,
    ) -> Result<cpal::Stream, MediaError> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let gain = control.effective_gain();
                    match queue.lock() {
                        Ok(mut queue) => fill_output(data, &mut queue, gain),
                        // Mutex poisoned, output silence
                        Err(_) => fill_output(data, &mut VecDeque::new(), 0.0),
                    }
                },
                |err| {
                    tracing::warn!(error = %err, "audio output error");
                },
                None,
            )
            .map_err(|e| MediaError::AudioDevice(format!("Failed to build audio stream: {e}")))
    }

    /// Appends interleaved samples for playback.
    pub fn queue(&self, samples: &[f32]) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.extend(samples.iter().copied());
        }
    }

    /// Number of interleaved samples waiting to be played.
    #[must_use]
    pub fn buffered_samples(&self) -> usize {
        self.queue.lock().map_or(0, |queue| queue.len())
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

/// Moves queued samples into a device buffer, scaled by `gain`.
///
/// Samples are consumed even at zero gain, so a muted track keeps its
/// position. Underruns are padded with silence.
fn fill_output<T: cpal::SizedSample + cpal::FromSample<f32>>(
    data: &mut [T],
    queue: &mut VecDeque<f32>,
    gain: f32,
) {
    for sample in data.iter_mut() {
        let value = queue.pop_front().unwrap_or(0.0) * gain;
        let value = if value.is_finite() { value } else { 0.0 };
        // Clamping to slightly below 1.0 prevents i16 overflow
        *sample = T::from_sample(value.clamp(-1.0, 0.999_999_9));
    }
}
