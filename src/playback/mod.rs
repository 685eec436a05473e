// SPDX-License-Identifier: MPL-2.0
//! Ambient playback engine.
//!
//! A session plays one [`MediaPair`](crate::media::MediaPair): a looping
//! background video decoded to RGBA frames, and a looping audio track sent
//! to the default output device. The two run in independent blocking
//! workers. If one half fails the other keeps playing.

pub mod audio_output;
pub mod audio_track;
mod ffmpeg;
pub mod subscription;
pub mod video_decoder;
mod volume;

pub use audio_output::AudioControl;
pub use subscription::{ambient_playback, PlaybackEvent, PlaybackRequest};
pub use video_decoder::{DecodedFrame, FramePacer, VideoDecoder, VideoEvent};
pub use volume::Volume;
