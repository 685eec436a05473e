// SPDX-License-Identifier: MPL-2.0
//! One-time FFmpeg initialization shared by the video and audio workers.

use crate::error::{Error, Result};
use std::sync::OnceLock;

static FFMPEG_INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Initialize FFmpeg with the log level set to errors only.
///
/// Safe to call from any worker; initialization happens once and the
/// outcome is remembered for later callers.
pub fn init_ffmpeg() -> Result<()> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;

            // SAFETY: av_log_set_level is thread-safe and only affects logging
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(Error::Io)
}

/// Seconds per tick of a stream time base.
pub fn time_base_secs(time_base: ffmpeg_next::Rational) -> f64 {
    f64::from(time_base.numerator()) / f64::from(time_base.denominator())
}

/// Seeks an input back to its first frame.
pub fn rewind(ictx: &mut ffmpeg_next::format::context::Input) -> Result<()> {
    ictx.seek(0, ..0)
        .map_err(|e| Error::Io(format!("Seek failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_base_converts_to_seconds() {
        let secs = time_base_secs(ffmpeg_next::Rational::new(1, 1000));
        assert!((secs - 0.001).abs() < 1e-12);
    }

    #[test]
    fn init_is_repeatable() {
        let first = init_ffmpeg().is_ok();
        let second = init_ffmpeg().is_ok();
        assert_eq!(first, second);
    }
}
