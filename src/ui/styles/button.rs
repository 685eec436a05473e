// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::Appearance;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button ("Start My Break").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style::default(),
    }
}

/// Secondary inline action, such as the "Now" button beside the time field.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::DUSK_800, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent toggle floating over the page (theme, mute).
///
/// The tint follows the appearance so the glyph stays readable over both
/// the light form and a dark video.
pub fn glass_toggle(appearance: Appearance) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_SUBTLE,
        };
        let (tint, text_color) = match appearance {
            Appearance::Dark => (WHITE, WHITE),
            Appearance::Light => (BLACK, palette::GRAY_900),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..tint })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..tint
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn glass_toggle_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = glass_toggle(Appearance::Dark);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn glass_toggle_is_round() {
        let style = glass_toggle(Appearance::Light)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::FULL));
    }

    #[test]
    fn secondary_highlights_border_on_hover() {
        let theme = Theme::Light;
        let active = secondary(&theme, button::Status::Active);
        let hover = secondary(&theme, button::Status::Hovered);
        assert_eq!(hover.border.color, palette::PRIMARY_500);
        assert_ne!(active.border.color, hover.border.color);
    }
}
