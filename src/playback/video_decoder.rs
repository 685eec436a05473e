// SPDX-License-Identifier: MPL-2.0
//! Looping background video decoder using FFmpeg.
//!
//! Decoding runs in a blocking Tokio thread and delivers RGBA frames through
//! a bounded channel. Only the video stream is ever decoded; the file's own
//! audio tracks are skipped. At end of stream the input is rewound and the
//! pacing clock restarted, so playback loops forever until the decoder is
//! dropped.

use super::ffmpeg::{init_ffmpeg, rewind, time_base_secs};
use crate::error::{MediaError, MediaKind};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Vec<u8>,

    pub width: u32,

    pub height: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Events sent from the decoder thread.
#[derive(Debug, Clone)]
pub enum VideoEvent {
    FrameReady(DecodedFrame),

    /// The decoder gave up; no more frames will follow.
    Failed(MediaError),
}

/// Maps presentation timestamps onto wall-clock deadlines.
///
/// The first timestamp seen after a (re)start is anchored to the current
/// instant; later frames are due at the anchor plus their PTS offset.
#[derive(Debug, Default)]
pub struct FramePacer {
    anchor: Option<(Instant, f64)>,
}

impl FramePacer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns when the frame with `pts_secs` should be shown.
    pub fn deadline(&mut self, pts_secs: f64, now: Instant) -> Instant {
        let (start, first_pts) = *self.anchor.get_or_insert((now, pts_secs));
        let offset = (pts_secs - first_pts).max(0.0);
        start + Duration::from_secs_f64(offset)
    }

    /// Forgets the anchor; the next frame starts a new timeline.
    pub fn reset(&mut self) {
        self.anchor = None;
    }
}

/// Handle to a running video decoder thread.
pub struct VideoDecoder {
    event_rx: mpsc::Receiver<VideoEvent>,
    stop: Arc<AtomicBool>,
}

impl VideoDecoder {
    /// Spawns the decoder thread for `video_path`.
    ///
    /// Fails immediately if the file does not exist; every other failure is
    /// reported later as [`VideoEvent::Failed`].
    pub fn new<P: AsRef<Path>>(video_path: P) -> Result<Self, MediaError> {
        let path = video_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(MediaError::NotFound(path.display().to_string()));
        }

        // Capacity of 2 frames ensures backpressure while allowing some buffering
        let (event_tx, event_rx) = mpsc::channel(2);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        // FFmpeg contexts are not Send, so everything lives in one blocking thread
        tokio::task::spawn_blocking(move || {
            if let Err(err) = decode_loop(&path, &event_tx, &stop_flag) {
                tracing::warn!(path = %path.display(), error = %err, "video decoder stopped");
                let _ = event_tx.blocking_send(VideoEvent::Failed(err));
            }
        });

        Ok(Self { event_rx, stop })
    }

    /// Receives the next event; `None` once the decoder thread has exited.
    pub async fn recv_event(&mut self) -> Option<VideoEvent> {
        self.event_rx.recv().await
    }
}

impl Drop for VideoDecoder {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Open input plus the decoding state for its best video stream.
struct VideoSource {
    ictx: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    stream_index: usize,
    time_base_secs: f64,
    eof_sent: bool,
}

impl VideoSource {
    fn open(path: &Path) -> Result<Self, MediaError> {
        init_ffmpeg().map_err(|e| MediaError::Other(e.to_string()))?;

        let ictx = ffmpeg_next::format::input(path)
            .map_err(|e| MediaError::from_message(&format!("Failed to open video: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(MediaError::NoStream(MediaKind::Video))?;
        let stream_index = input.index();
        let time_base_secs = time_base_secs(input.time_base());

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| MediaError::from_message(&format!("codec context: {e}")))?;
        let decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| MediaError::from_message(&format!("video decoder: {e}")))?;

        Ok(Self {
            ictx,
            decoder,
            stream_index,
            time_base_secs,
            eof_sent: false,
        })
    }

    /// Returns the next decoded frame, or `None` at end of stream.
    ///
    /// Buffered frames are drained before new packets are read, and the
    /// decoder is flushed with EOF so the final frames are not lost.
    fn next_frame(&mut self) -> Option<ffmpeg_next::frame::Video> {
        let mut frame = ffmpeg_next::frame::Video::empty();
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
                        tracing::debug!(error = %e, "video packet rejected");
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

    fn pts_secs(&self, frame: &ffmpeg_next::frame::Video) -> f64 {
        frame
            .timestamp()
            .map_or(0.0, |pts| pts as f64 * self.time_base_secs)
    }
}

/// Main decoder loop running in a blocking thread.
fn decode_loop(
    path: &Path,
    event_tx: &mpsc::Sender<VideoEvent>,
    stop: &AtomicBool,
) -> Result<(), MediaError> {
    let mut source = VideoSource::open(path)?;
    let width = source.decoder.width();
    let height = source.decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        source.decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| MediaError::DecodingFailed(format!("Failed to create scaler: {e}")))?;

    let mut pacer = FramePacer::new();
    let mut frames_since_rewind: u64 = 0;

    while !stop.load(Ordering::Relaxed) {
        let Some(decoded) = source.next_frame() else {
            if frames_since_rewind == 0 {
                return Err(MediaError::DecodingFailed(
                    "video produced no frames".to_string(),
                ));
            }
            tracing::debug!(
                path = %path.display(),
                frames = frames_since_rewind,
                "video loop restart",
            );
            source.rewind()?;
            pacer.reset();
            frames_since_rewind = 0;
            continue;
        };

        let mut rgb_frame = ffmpeg_next::frame::Video::empty();
        if let Err(e) = scaler.run(&decoded, &mut rgb_frame) {
            tracing::debug!(error = %e, "video frame scaling failed");
            continue;
        }

        let pts_secs = source.pts_secs(&decoded);
        let deadline = pacer.deadline(pts_secs, Instant::now());
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }

        let frame = DecodedFrame {
            rgba_data: extract_rgba_data(&rgb_frame),
            width,
            height,
            pts_secs,
        };
        if event_tx.blocking_send(VideoEvent::FrameReady(frame)).is_err() {
            // Receiver dropped: the session is over
            break;
        }
        frames_since_rewind += 1;
    }

    Ok(())
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        let row_end = row_start + width * 4;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacer_anchors_first_frame_to_now() {
        let mut pacer = FramePacer::new();
        let now = Instant::now();
        assert_eq!(pacer.deadline(12.0, now), now);
    }

    #[test]
    fn pacer_offsets_later_frames() {
        let mut pacer = FramePacer::new();
        let start = Instant::now();
        pacer.deadline(1.0, start);

        let later = start + Duration::from_millis(5);
        assert_eq!(pacer.deadline(1.5, later), start + Duration::from_millis(500));
    }

    #[test]
    fn pacer_never_schedules_before_anchor() {
        let mut pacer = FramePacer::new();
        let start = Instant::now();
        pacer.deadline(2.0, start);
        assert_eq!(pacer.deadline(1.0, start), start);
    }

    #[test]
    fn pacer_reset_starts_new_timeline() {
        let mut pacer = FramePacer::new();
        let start = Instant::now();
        pacer.deadline(0.0, start);
        pacer.deadline(9.0, start);

        pacer.reset();
        let restart = start + Duration::from_secs(10);
        assert_eq!(pacer.deadline(0.0, restart), restart);
    }

    #[tokio::test]
    async fn decoder_fails_for_nonexistent_file() {
        let result = VideoDecoder::new("/nonexistent/video.mp4");
        assert!(matches!(result, Err(MediaError::NotFound(_))));
    }

    #[tokio::test]
    async fn decoder_reports_failure_for_invalid_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("broken.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let mut decoder = VideoDecoder::new(&video_path).expect("file exists");
        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("decoder should answer");
        assert!(matches!(event, Some(VideoEvent::Failed(_))));
    }
}
