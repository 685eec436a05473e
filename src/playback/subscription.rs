// SPDX-License-Identifier: MPL-2.0
//! Iced subscription driving a session's ambient playback.
//!
//! The subscription is keyed on [`PlaybackRequest`]: while the app keeps
//! returning the same request, the workers keep running. When the request
//! disappears the stream is dropped, which stops both workers.

use super::audio_output::AudioControl;
use super::audio_track::{spawn_audio_track, AudioEvent};
use super::video_decoder::{VideoDecoder, VideoEvent};
use super::Volume;
use crate::error::MediaError;
use crate::media::MediaPair;
use iced::futures::channel::mpsc as iced_mpsc;
use iced::futures::{SinkExt, Stream};
use iced::widget::image;
use iced::{stream, Subscription};
use tokio::sync::mpsc;

/// What to play. A new `session_id` restarts playback even for the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackRequest {
    pub session_id: u64,
    pub pair: MediaPair,
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    /// Workers are starting; the handle controls the audio track.
    Started(AudioControl),

    /// A new background frame is ready for display.
    Frame(image::Handle),

    /// The video cannot be shown. Audio is unaffected.
    VideoUnavailable(MediaError),

    /// The audio cannot be played. Video is unaffected.
    AudioUnavailable(MediaError),
}

/// Stops the audio worker when the subscription stream is dropped.
struct StopOnDrop(AudioControl);

impl Drop for StopOnDrop {
    fn drop(&mut self) {
        self.0.stop();
    }
}

/// Creates the playback subscription for `request`.
pub fn ambient_playback(request: PlaybackRequest) -> Subscription<PlaybackEvent> {
    Subscription::run_with(request, |request| playback_stream(request.clone()))
}

fn playback_stream(request: PlaybackRequest) -> impl Stream<Item = PlaybackEvent> {
    stream::channel(
        16,
        move |mut output: iced_mpsc::Sender<PlaybackEvent>| async move {
            let PlaybackRequest { session_id, pair } = request;
            tracing::debug!(session_id, bucket = %pair.bucket(), "playback starting");

            // Volume and mute are applied by the UI as soon as it sees `Started`
            let control = AudioControl::new(Volume::default(), false);
            let _guard = StopOnDrop(control.clone());

            let (audio_tx, mut audio_rx) = mpsc::channel(1);
            spawn_audio_track(pair.audio().to_path_buf(), control.clone(), audio_tx);
            let _ = output.send(PlaybackEvent::Started(control)).await;

            let mut video = match VideoDecoder::new(pair.video()) {
                Ok(decoder) => Some(decoder),
                Err(err) => {
                    tracing::warn!(
                        path = %pair.video().display(),
                        error = %err,
                        "video unavailable",
                    );
                    let _ = output.send(PlaybackEvent::VideoUnavailable(err)).await;
                    None
                }
            };

            loop {
                let message = tokio::select! {
                    Some(event) = next_video_event(&mut video) => match event {
                        VideoEvent::FrameReady(frame) => PlaybackEvent::Frame(
                            image::Handle::from_rgba(frame.width, frame.height, frame.rgba_data),
                        ),
                        VideoEvent::Failed(err) => PlaybackEvent::VideoUnavailable(err),
                    },
                    Some(AudioEvent::Failed(err)) = audio_rx.recv() => {
                        PlaybackEvent::AudioUnavailable(err)
                    }
                    else => break,
                };

                if matches!(message, PlaybackEvent::VideoUnavailable(_)) {
                    video = None;
                }
                if output.send(message).await.is_err() {
                    break;
                }
            }

            tracing::debug!(session_id, "playback workers finished");

            // Keep the subscription alive; dropping it is what ends the session
            std::future::pending::<()>().await;
        },
    )
}

/// Next event from the video decoder, or `None` if there is none.
async fn next_video_event(video: &mut Option<VideoDecoder>) -> Option<VideoEvent> {
    match video {
        Some(decoder) => decoder.recv_event().await,
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaLibrary;
    use crate::session::TimeBucket;
    use std::path::PathBuf;

    #[test]
    fn requests_differ_by_session() {
        let pair = MediaLibrary::new(PathBuf::from("/media")).pair(TimeBucket::Night);
        let first = PlaybackRequest {
            session_id: 1,
            pair: pair.clone(),
        };
        let second = PlaybackRequest {
            session_id: 2,
            pair,
        };
        assert_ne!(first, second);
    }

    #[test]
    fn guard_stops_audio_on_drop() {
        let control = AudioControl::new(Volume::default(), false);
        {
            let _guard = StopOnDrop(control.clone());
            assert!(!control.is_stopped());
        }
        assert!(control.is_stopped());
    }

    #[tokio::test]
    async fn missing_video_has_no_events() {
        let mut video = None;
        assert!(next_video_event(&mut video).await.is_none());
    }
}
