// SPDX-License-Identifier: MPL-2.0
//! `zenzone` is an ambient break companion built with the Iced GUI toolkit.
//!
//! The user enters a name and a session time; the time picks a morning,
//! evening or night pair of background video and ambient audio, played in a
//! loop until the window closes. Mute and light/dark toggles are kept in
//! memory only.

#![doc(html_root_url = "https://docs.rs/zenzone/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod playback;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_utils;
