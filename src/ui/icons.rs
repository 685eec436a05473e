// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small monochrome SVG paths embedded as string constants. Handles
//! are cached using `OnceLock` and tinted at the call site through
//! [`styles::overlay::icon_tint`](super::styles::overlay::icon_tint).
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `pause` not `muted`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $source:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const PLAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M8 5v14l11-7z"/></svg>"#;

const PAUSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M16 7H14V17H16V7ZM10 7H8V17H10V7Z"/></svg>"#;

const SUN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="4.5" fill="currentColor"/><g stroke="currentColor" stroke-width="2" stroke-linecap="round"><path d="M12 2v2.5M12 19.5V22M2 12h2.5M19.5 12H22M4.9 4.9l1.8 1.8M17.3 17.3l1.8 1.8M4.9 19.1l1.8-1.8M17.3 6.7l1.8-1.8"/></g></svg>"#;

const MOON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M20.5 14.6A8.5 8.5 0 0 1 9.4 3.5a8.5 8.5 0 1 0 11.1 11.1z"/></svg>"#;

define_icon!(play, PLAY_SVG, "Play icon: triangle pointing right.");
define_icon!(pause, PAUSE_SVG, "Pause icon: two vertical bars.");
define_icon!(sun, SUN_SVG, "Sun icon: disc with eight rays.");
define_icon!(moon, MOON_SVG, "Moon icon: crescent.");

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        let _ = play();
        let _ = pause();
        let _ = sun();
        let _ = moon();
    }

    #[test]
    fn sources_are_svg_documents() {
        for source in [PLAY_SVG, PAUSE_SVG, SUN_SVG, MOON_SVG] {
            assert!(source.starts_with("<svg"));
            assert!(source.ends_with("</svg>"));
            assert!(source.contains("currentColor"));
        }
    }

    #[test]
    fn sized_helper_works() {
        let _ = sized(play(), 24.0);
    }
}
