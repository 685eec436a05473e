// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::{Appearance, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Welcome card floating over the page background.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the card stays readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Solid page background: the form backdrop, or the session backdrop
/// standing in for a missing video.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Small notice pill for media that could not be played.
pub fn notice(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.overlay_background;
    let text = colors.overlay_text;
    let accent = colors.warning;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Label bubble next to a hovered toggle, drawn in the opposite
/// appearance for contrast.
pub fn tooltip(appearance: Appearance) -> impl Fn(&Theme) -> container::Style {
    let colors = ColorScheme::for_appearance(appearance.toggled());
    let background = colors.surface_primary;
    let text = colors.text_primary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_is_translucent() {
        let style = card(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn backdrop_uses_given_color() {
        let style = backdrop(palette::DUSK_900)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::DUSK_900)));
    }

    #[test]
    fn notice_uses_warning_accent() {
        let colors = ColorScheme::dark();
        let style = notice(&colors)(&Theme::Dark);
        assert_eq!(style.border.color, colors.warning);
    }

    #[test]
    fn tooltip_inverts_appearance() {
        let style = tooltip(Appearance::Dark)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().surface_primary))
        );
    }
}
