// SPDX-License-Identifier: MPL-2.0
//! Styles for glyphs drawn on top of the page.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints a monochrome SVG icon.
pub fn icon_tint(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
