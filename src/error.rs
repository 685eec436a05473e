// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Which half of a media pair a failure concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Audio => write!(f, "audio"),
        }
    }
}

/// Specific error types for media playback issues.
/// Used to choose the localized notice shown on the playback surface.
#[derive(Debug, Clone)]
pub enum MediaError {
    /// Asset file does not exist at the resolved path
    NotFound(String),

    /// File opened but contains no stream of the requested kind
    NoStream(MediaKind),

    /// Codec is not supported by the system's FFmpeg
    UnsupportedCodec(String),

    /// Decoding or resampling failed during playback
    DecodingFailed(String),

    /// No usable audio output device
    AudioDevice(String),

    /// Generic error with raw message
    Other(String),
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::NotFound(_) => "error-media-not-found",
            MediaError::NoStream(_) => "error-media-no-stream",
            MediaError::UnsupportedCodec(_) => "error-media-unsupported-codec",
            MediaError::DecodingFailed(_) => "error-media-decoding-failed",
            MediaError::AudioDevice(_) => "error-media-audio-device",
            MediaError::Other(_) => "error-media-general",
        }
    }

    /// Categorizes a raw FFmpeg/decoder message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return MediaError::UnsupportedCodec(codec);
            }
        }

        if msg_lower.contains("no such file")
            || (msg_lower.contains("not found") && !msg_lower.contains("decoder"))
            || msg_lower.contains("permission denied")
        {
            return MediaError::NotFound(msg.to_string());
        }

        if msg_lower.contains("no video stream") {
            return MediaError::NoStream(MediaKind::Video);
        }
        if msg_lower.contains("no audio stream") {
            return MediaError::NoStream(MediaKind::Audio);
        }

        if msg_lower.contains("packet")
            || msg_lower.contains("scaling")
            || msg_lower.contains("resampl")
            || msg_lower.contains("decode")
            || msg_lower.contains("invalid data")
        {
            return MediaError::DecodingFailed(msg.to_string());
        }

        MediaError::Other(msg.to_string())
    }

    fn extract_codec_name(msg: &str) -> Option<String> {
        let codecs = [
            "h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mp3", "aac", "opus",
        ];
        codecs
            .iter()
            .find(|codec| msg.contains(*codec))
            .map(|codec| codec.to_uppercase())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound(msg) => write!(f, "Media file not found: {}", msg),
            MediaError::NoStream(kind) => write!(f, "No {} stream found", kind),
            MediaError::UnsupportedCodec(codec) => write!(f, "Unsupported codec: {}", codec),
            MediaError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            MediaError::AudioDevice(msg) => write!(f, "Audio device error: {}", msg),
            MediaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn media_error_from_message_not_found() {
        let err = MediaError::from_message("No such file or directory");
        assert!(matches!(err, MediaError::NotFound(_)));
    }

    #[test]
    fn media_error_from_message_no_stream() {
        assert!(matches!(
            MediaError::from_message("No video stream found"),
            MediaError::NoStream(MediaKind::Video)
        ));
        assert!(matches!(
            MediaError::from_message("No audio stream found"),
            MediaError::NoStream(MediaKind::Audio)
        ));
    }

    #[test]
    fn media_error_from_message_codec() {
        let err = MediaError::from_message("Decoder h264 not found");
        assert!(matches!(err, MediaError::UnsupportedCodec(codec) if codec == "H264"));
    }

    #[test]
    fn media_error_from_message_decoding() {
        let err = MediaError::from_message("Packet send failed: error");
        assert!(matches!(err, MediaError::DecodingFailed(_)));
    }

    #[test]
    fn media_error_i18n_keys() {
        assert_eq!(
            MediaError::NotFound(String::new()).i18n_key(),
            "error-media-not-found"
        );
        assert_eq!(
            MediaError::AudioDevice(String::new()).i18n_key(),
            "error-media-audio-device"
        );
    }
}
