// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Volume**: Audio playback volume settings
//! - **Audio buffering**: Look-ahead kept in the output buffer

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default ambient track volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Audio Buffering Defaults
// ==========================================================================

/// Audio kept queued ahead of the output device, in milliseconds.
pub const AUDIO_LOOKAHEAD_MS: u32 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(AUDIO_LOOKAHEAD_MS > 0);
};
