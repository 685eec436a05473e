// SPDX-License-Identifier: MPL-2.0
//! Floating round toggles for theme and mute.
//!
//! Both builders are generic over the message type so each screen can wire
//! the press to its own message.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{Appearance, ColorScheme};
use iced::widget::{button, container, svg::Svg, text, tooltip};
use iced::Element;

/// Glyph shown on the theme toggle: a sun while dark, a moon while light.
#[must_use]
pub fn theme_glyph(appearance: Appearance) -> Svg<'static> {
    match appearance {
        Appearance::Dark => icons::sun(),
        Appearance::Light => icons::moon(),
    }
}

/// i18n key describing what pressing the theme toggle does.
#[must_use]
pub fn theme_label_key(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Dark => "control-theme-to-light",
        Appearance::Light => "control-theme-to-dark",
    }
}

/// Glyph shown on the mute toggle: pause while muted, play while sounding.
#[must_use]
pub fn mute_glyph(muted: bool) -> Svg<'static> {
    if muted {
        icons::pause()
    } else {
        icons::play()
    }
}

#[must_use]
pub fn mute_label_key(muted: bool) -> &'static str {
    if muted {
        "control-unmute"
    } else {
        "control-mute"
    }
}

pub fn theme_toggle<'a, Message: Clone + 'a>(
    i18n: &I18n,
    appearance: Appearance,
    on_press: Message,
) -> Element<'a, Message> {
    round_toggle(
        theme_glyph(appearance),
        i18n.tr(theme_label_key(appearance)),
        appearance,
        tooltip::Position::Left,
        on_press,
    )
}

pub fn mute_toggle<'a, Message: Clone + 'a>(
    i18n: &I18n,
    appearance: Appearance,
    muted: bool,
    on_press: Message,
) -> Element<'a, Message> {
    round_toggle(
        mute_glyph(muted),
        i18n.tr(mute_label_key(muted)),
        appearance,
        tooltip::Position::Top,
        on_press,
    )
}

fn round_toggle<'a, Message: Clone + 'a>(
    glyph: Svg<'static>,
    label: String,
    appearance: Appearance,
    position: tooltip::Position,
    on_press: Message,
) -> Element<'a, Message> {
    let tint = ColorScheme::for_appearance(appearance).overlay_text;
    let icon = icons::sized(glyph, sizing::ICON_MD).style(styles::overlay::icon_tint(tint));

    let toggle = button(icon)
        .padding((sizing::TOGGLE_SIZE - sizing::ICON_MD) / 2.0)
        .style(styles::button::glass_toggle(appearance))
        .on_press(on_press);

    let label = container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tooltip(appearance));

    tooltip(toggle, label, position).gap(spacing::XXS).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_label_describes_target() {
        assert_eq!(theme_label_key(Appearance::Dark), "control-theme-to-light");
        assert_eq!(theme_label_key(Appearance::Light), "control-theme-to-dark");
    }

    #[test]
    fn mute_label_describes_action() {
        assert_eq!(mute_label_key(true), "control-unmute");
        assert_eq!(mute_label_key(false), "control-mute");
    }

    #[test]
    fn toggles_render() {
        let i18n = I18n::default();
        let _theme: Element<'_, ()> = theme_toggle(&i18n, Appearance::Dark, ());
        let _mute: Element<'_, ()> = mute_toggle(&i18n, Appearance::Light, true, ());
    }
}
