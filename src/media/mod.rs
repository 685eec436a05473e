// SPDX-License-Identifier: MPL-2.0
//! Media pairs and the on-disk asset layout.
//!
//! ```text
//! <base>/videos/{morning,evening,night}.mp4
//! <base>/audio/{morning,evening,night}.mp3
//! ```

use crate::session::TimeBucket;
use std::path::{Path, PathBuf};

const VIDEO_DIR: &str = "videos";
const AUDIO_DIR: &str = "audio";
const VIDEO_EXTENSION: &str = "mp4";
const AUDIO_EXTENSION: &str = "mp3";

/// The video and audio played together for one time bucket.
///
/// Fields are private: pairs only come from [`MediaLibrary::pair`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaPair {
    bucket: TimeBucket,
    video: PathBuf,
    audio: PathBuf,
}

impl MediaPair {
    #[must_use]
    pub fn bucket(&self) -> TimeBucket {
        self.bucket
    }

    #[must_use]
    pub fn video(&self) -> &Path {
        &self.video
    }

    #[must_use]
    pub fn audio(&self) -> &Path {
        &self.audio
    }

    /// Paths of the pair's assets that do not exist on disk.
    #[must_use]
    pub fn missing_assets(&self) -> Vec<&Path> {
        [self.video(), self.audio()]
            .into_iter()
            .filter(|path| !path.exists())
            .collect()
    }
}

/// Resolves media pairs against a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLibrary {
    base_dir: PathBuf,
}

impl MediaLibrary {
    #[must_use]
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn pair(&self, bucket: TimeBucket) -> MediaPair {
        let stem = bucket.asset_stem();
        MediaPair {
            bucket,
            video: self
                .base_dir
                .join(VIDEO_DIR)
                .join(format!("{stem}.{VIDEO_EXTENSION}")),
            audio: self
                .base_dir
                .join(AUDIO_DIR)
                .join(format!("{stem}.{AUDIO_EXTENSION}")),
        }
    }
}

impl Default for MediaLibrary {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn pairs_follow_asset_layout() {
        let library = MediaLibrary::new(PathBuf::from("/base"));

        let night = library.pair(TimeBucket::Night);
        assert_eq!(night.video(), PathBuf::from("/base/videos/night.mp4"));
        assert_eq!(night.audio(), PathBuf::from("/base/audio/night.mp3"));

        let evening = library.pair(TimeBucket::Evening);
        assert_eq!(evening.video(), PathBuf::from("/base/videos/evening.mp4"));
        assert_eq!(evening.audio(), PathBuf::from("/base/audio/evening.mp3"));
    }

    #[test]
    fn exactly_three_distinct_pairs() {
        let library = MediaLibrary::new(PathBuf::from("/base"));
        let pairs: Vec<_> = TimeBucket::ALL.iter().map(|b| library.pair(*b)).collect();
        assert_eq!(pairs.len(), 3);
        assert_ne!(pairs[0], pairs[1]);
        assert_ne!(pairs[1], pairs[2]);
        assert_ne!(pairs[0], pairs[2]);
    }

    #[test]
    fn missing_assets_reports_absent_files() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("videos")).unwrap();
        fs::write(dir.path().join("videos/morning.mp4"), b"").unwrap();

        let library = MediaLibrary::new(dir.path().to_path_buf());
        let pair = library.pair(TimeBucket::Morning);

        assert_eq!(pair.missing_assets(), vec![pair.audio()]);
    }
}
