// SPDX-License-Identifier: MPL-2.0
//! Hour parsing and the morning/evening/night buckets.

use std::fmt;

/// Part of the day a session time falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// Hours `[5, 12)`.
    Morning,
    /// Hours `[12, 18)`, afternoon included.
    Evening,
    /// Every other parseable hour.
    Night,
}

impl TimeBucket {
    /// Bucket used when the hour cannot be parsed at all.
    pub const FALLBACK: TimeBucket = TimeBucket::Morning;

    /// All buckets, in day order.
    pub const ALL: [TimeBucket; 3] = [TimeBucket::Morning, TimeBucket::Evening, TimeBucket::Night];

    /// Buckets an hour. Total over all integers: anything outside
    /// `[5, 18)` is night, including values past 23.
    #[must_use]
    pub fn for_hour(hour: i64) -> Self {
        match hour {
            5..=11 => TimeBucket::Morning,
            12..=17 => TimeBucket::Evening,
            _ => TimeBucket::Night,
        }
    }

    /// Buckets a raw `HH:MM` time string.
    #[must_use]
    pub fn for_time(raw: &str) -> Self {
        match parse_hour(raw) {
            Some(hour) => Self::for_hour(hour),
            None => {
                tracing::warn!(time = raw, bucket = %Self::FALLBACK, "unparseable session hour");
                Self::FALLBACK
            }
        }
    }

    /// File stem shared by the bucket's video and audio assets.
    #[must_use]
    pub fn asset_stem(self) -> &'static str {
        match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Evening => "evening",
            TimeBucket::Night => "night",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_stem())
    }
}

/// Extracts the hour from a time string.
///
/// Reads an optional sign and the leading digits of the trimmed text, so
/// `"07:30"`, `"7"` and `"9am"` all parse while `":30"` and `"abc"` do not.
/// Digit runs too long for `i64` saturate.
#[must_use]
pub fn parse_hour(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    // Only overflow can fail here; saturate so huge hours still bucket
    let hour = match digits.parse::<i64>() {
        Ok(hour) if negative => -hour,
        Ok(hour) => hour,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(hour)
}
