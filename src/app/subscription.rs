// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed only when no widget captured the key, so
//! typing `m` or `t` into the welcome form never toggles anything. The
//! playback subscription exists exactly while a session does.

use super::{Message, UiState};
use crate::playback::ambient_playback;
use crate::ui::session;
use iced::keyboard::{self, Modifiers};
use iced::{event, Subscription};

pub fn create_subscription(
    ui: UiState,
    session: Option<&session::State>,
) -> Subscription<Message> {
    let shortcuts = event::listen_with(|event, status, _window| route_event(&event, status));

    let playback = match session {
        Some(state) if ui.started => ambient_playback(state.playback_request().clone())
            .map(|event| Message::Session(session::Message::Playback(event))),
        _ => Subscription::none(),
    };

    Subscription::batch([shortcuts, playback])
}

/// Turns a native event into a shortcut message. Key presses a widget has
/// already captured (typing in a text field) are left alone.
#[must_use]
pub fn route_event(event: &event::Event, status: event::Status) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            shortcut_for(key, *modifiers)
        }
        _ => None,
    }
}

/// Maps an uncaptured key press to a toggle.
#[must_use]
pub fn shortcut_for(key: &keyboard::Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("m") => Some(Message::ToggleMute),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("t") => Some(Message::ToggleTheme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    fn key_press(c: &str, code: keyboard::key::Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: character(c),
            modified_key: character(c),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: Modifiers::default(),
            text: Some(c.into()),
            repeat: false,
        })
    }

    #[test]
    fn uncaptured_key_press_is_routed() {
        let event = key_press("m", keyboard::key::Code::KeyM);
        assert!(matches!(
            route_event(&event, event::Status::Ignored),
            Some(Message::ToggleMute)
        ));
    }

    #[test]
    fn captured_key_press_is_ignored() {
        let mute = key_press("m", keyboard::key::Code::KeyM);
        let theme = key_press("t", keyboard::key::Code::KeyT);
        assert!(route_event(&mute, event::Status::Captured).is_none());
        assert!(route_event(&theme, event::Status::Captured).is_none());
    }

    #[test]
    fn non_keyboard_events_are_ignored() {
        let event = event::Event::Window(iced::window::Event::Focused);
        assert!(route_event(&event, event::Status::Ignored).is_none());
    }

    #[test]
    fn m_toggles_mute() {
        assert!(matches!(
            shortcut_for(&character("m"), Modifiers::empty()),
            Some(Message::ToggleMute)
        ));
        assert!(matches!(
            shortcut_for(&character("M"), Modifiers::SHIFT),
            Some(Message::ToggleMute)
        ));
    }

    #[test]
    fn t_toggles_theme() {
        assert!(matches!(
            shortcut_for(&character("t"), Modifiers::empty()),
            Some(Message::ToggleTheme)
        ));
    }

    #[test]
    fn modified_keys_are_ignored() {
        assert!(shortcut_for(&character("m"), Modifiers::COMMAND).is_none());
        assert!(shortcut_for(&character("t"), Modifiers::ALT).is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(shortcut_for(&character("x"), Modifiers::empty()).is_none());
        assert!(shortcut_for(
            &keyboard::Key::Named(keyboard::key::Named::Space),
            Modifiers::empty()
        )
        .is_none());
    }
}
