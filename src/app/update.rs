// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Screen components return events; this module turns them into changes of
//! the root state. The only side effect a session start has is a new
//! playback subscription, which `subscription.rs` derives from the state.

use super::{App, Message};
use crate::session::SessionRequest;
use crate::ui::session::{self, Event as SessionEvent};
use crate::ui::theming::ColorScheme;
use crate::ui::welcome::{self, Event as WelcomeEvent};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Welcome(message) => {
            if let WelcomeEvent::Submitted(request) = welcome::update(&mut app.welcome, message) {
                start_session(app, request);
            }
        }
        Message::Session(message) => {
            let Some(state) = app.session.as_mut() else {
                // Late playback event after the surface went away.
                return Task::none();
            };
            match session::update(state, message, app.ui.muted, app.volume) {
                SessionEvent::None => {}
                SessionEvent::ToggleMute => toggle_mute(app),
            }
        }
        Message::ToggleMute => toggle_mute(app),
        Message::ToggleTheme => {
            let appearance = app.ui.toggle_theme();
            app.colors = ColorScheme::for_appearance(appearance);
            tracing::debug!(?appearance, "theme toggled");
        }
    }
    Task::none()
}

fn start_session(app: &mut App, request: SessionRequest) {
    let pair = request.into_media(&app.library);
    for path in pair.missing_assets() {
        tracing::warn!(path = %path.display(), "media asset missing");
    }
    tracing::info!(bucket = %pair.bucket(), "session started");

    app.next_session_id += 1;
    app.session = Some(session::State::new(app.next_session_id, pair));
    app.ui.started = true;
}

/// Mute only exists alongside a playback surface.
fn toggle_mute(app: &mut App) {
    let Some(state) = app.session.as_ref() else {
        return;
    };
    let muted = app.ui.toggle_mute();
    state.apply_mute(muted);
    tracing::debug!(muted, "mute toggled");
}
