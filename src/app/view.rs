// SPDX-License-Identifier: MPL-2.0
//! Root view: the current screen with the theme toggle floating above it.

use super::{Message, UiState};
use crate::i18n::fluent::I18n;
use crate::ui::controls;
use crate::ui::design_tokens::spacing;
use crate::ui::session;
use crate::ui::theming::ColorScheme;
use crate::ui::welcome;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, stack},
    Element, Length,
};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub ui: UiState,
    pub colors: &'a ColorScheme,
    pub welcome: &'a welcome::State,
    pub session: Option<&'a session::State>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = match ctx.session {
        Some(state) if ctx.ui.started => session::view(session::ViewContext {
            i18n: ctx.i18n,
            state,
            muted: ctx.ui.muted,
            appearance: ctx.ui.appearance,
            colors: ctx.colors,
        })
        .map(Message::Session),
        _ => welcome::view(welcome::ViewContext {
            i18n: ctx.i18n,
            state: ctx.welcome,
            colors: ctx.colors,
        })
        .map(Message::Welcome),
    };

    let theme_toggle = container(controls::theme_toggle(
        ctx.i18n,
        ctx.ui.appearance,
        Message::ToggleTheme,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top)
    .padding(spacing::LG);

    stack![screen, theme_toggle].into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaLibrary;
    use crate::session::TimeBucket;
    use crate::ui::theming::Appearance;

    #[test]
    fn welcome_screen_renders() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let welcome = welcome::State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            ui: UiState::new(Appearance::Dark),
            colors: &colors,
            welcome: &welcome,
            session: None,
        });
    }

    #[test]
    fn session_screen_renders() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let welcome = welcome::State::new();
        let session = session::State::new(1, MediaLibrary::default().pair(TimeBucket::Night));
        let ui = UiState {
            started: true,
            muted: true,
            appearance: Appearance::Light,
        };
        let _element = view(ViewContext {
            i18n: &i18n,
            ui,
            colors: &colors,
            welcome: &welcome,
            session: Some(&session),
        });
    }
}
