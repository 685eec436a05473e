// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each has a
//! `State`, a `ViewContext` borrowed from the root `App`, a `Message` it
//! handles in `update`, and an `Event` it reports back to the parent.
//!
//! # Screens
//!
//! - [`welcome`] - Name and session time form
//! - [`session`] - Playback surface with background video and mute toggle
//!
//! # Shared Infrastructure
//!
//! - [`controls`] - Round theme and mute toggles
//! - [`styles`] - Centralized styling (buttons, containers, icon tints)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark appearance and colour schemes
//! - [`icons`] - Embedded SVG glyphs

pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod session;
pub mod styles;
pub mod theming;
pub mod welcome;
