// SPDX-License-Identifier: MPL-2.0
//! Session requests: what the welcome form produces once it validates.
//!
//! A [`SessionDraft`] is the raw text the user is typing. [`validation::validate`]
//! turns it into a [`SessionRequest`], which is then consumed by
//! [`SessionRequest::into_media`] to pick the media pair for the session.

pub mod time_bucket;
pub mod validation;

pub use time_bucket::{parse_hour, TimeBucket};
pub use validation::{validate, Field, FieldError, FormErrors};

use crate::media::{MediaLibrary, MediaPair};

/// Unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    pub name: String,
    pub time: String,
}

/// A validated request: both fields are non-empty after trimming.
///
/// Only [`validate`] can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    name: String,
    time: String,
}

impl SessionRequest {
    fn new(name: String, time: String) -> Self {
        debug_assert!(!name.is_empty() && !time.is_empty());
        Self { name, time }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn bucket(&self) -> TimeBucket {
        TimeBucket::for_time(&self.time)
    }

    /// Consumes the request and returns the media pair for its time bucket.
    #[must_use]
    pub fn into_media(self, library: &MediaLibrary) -> MediaPair {
        library.pair(self.bucket())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request(time: &str) -> SessionRequest {
        validate(&SessionDraft {
            name: "Ada".to_string(),
            time: time.to_string(),
        })
        .expect("draft should be valid")
    }

    #[test]
    fn into_media_selects_pair_for_bucket() {
        let library = MediaLibrary::new(PathBuf::from("/media"));

        let pair = request("06:30").into_media(&library);
        assert_eq!(pair.video(), PathBuf::from("/media/videos/morning.mp4"));
        assert_eq!(pair.audio(), PathBuf::from("/media/audio/morning.mp3"));

        let pair = request("13:00").into_media(&library);
        assert_eq!(pair.bucket(), TimeBucket::Evening);

        let pair = request("22:10").into_media(&library);
        assert_eq!(pair.bucket(), TimeBucket::Night);
    }

    #[test]
    fn bucket_matches_time() {
        assert_eq!(request("05:00").bucket(), TimeBucket::Morning);
        assert_eq!(request("04:59").bucket(), TimeBucket::Night);
    }
}
