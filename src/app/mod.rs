// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the welcome form and
//! the playback surface.
//!
//! The `App` struct wires together localization, configuration, the media
//! library and the two screens. Presentation toggles live in [`UiState`] and
//! are handed down to a single root view; nothing is written back to disk.

mod message;
pub mod paths;
mod state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use state::UiState;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::MediaLibrary;
use crate::playback::Volume;
use crate::ui::session;
use crate::ui::theming::ColorScheme;
use crate::ui::welcome;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    library: MediaLibrary,
    volume: Volume,
    ui: UiState,
    colors: ColorScheme,
    welcome: welcome::State,
    session: Option<session::State>,
    /// Monotonic id so every started session gets a fresh playback subscription.
    next_session_id: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("ui", &self.ui)
            .field("media_dir", &self.library.base_dir())
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = &config_warning {
            tracing::warn!(warning = %key, "configuration problem, using defaults");
        }

        let i18n = I18n::new(flags.lang, &config);
        let media_dir = paths::get_media_dir(config.media.base_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::info!(
            locale = %i18n.current_locale(),
            media_dir = %media_dir.display(),
            "starting"
        );

        let mut app = Self::with_config(&config, i18n, MediaLibrary::new(media_dir));
        app.welcome = welcome::State::with_notice(config_warning);
        (app, Task::none())
    }

    /// Builds the initial state from an already loaded configuration.
    #[must_use]
    pub fn with_config(config: &Config, i18n: I18n, library: MediaLibrary) -> Self {
        let ui = UiState::new(config.general.theme_mode.appearance());
        Self {
            i18n,
            library,
            volume: Volume::new(config.volume()),
            colors: ColorScheme::for_appearance(ui.appearance),
            ui,
            welcome: welcome::State::new(),
            session: None,
            next_session_id: 0,
        }
    }

    #[must_use]
    pub fn ui(&self) -> UiState {
        self.ui
    }

    #[must_use]
    pub fn session(&self) -> Option<&session::State> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn welcome(&self) -> &welcome::State {
        &self.welcome
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.ui.appearance.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(self.ui, self.session.as_ref())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            ui: self.ui,
            colors: &self.colors,
            welcome: &self.welcome,
            session: self.session.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::{Appearance, ThemeMode};

    fn config_with(theme_mode: ThemeMode, volume: f32) -> Config {
        let mut config = Config::default();
        config.general.theme_mode = theme_mode;
        config.audio.volume = Some(volume);
        config
    }

    #[test]
    fn initial_state_follows_config() {
        let config = config_with(ThemeMode::Light, 0.4);
        let app = App::with_config(&config, I18n::default(), MediaLibrary::default());

        assert_eq!(app.ui().appearance, Appearance::Light);
        assert!(!app.ui().started);
        assert!(!app.ui().muted);
        assert_eq!(app.volume(), Volume::new(0.4));
        assert!(app.session().is_none());
    }

    #[test]
    fn default_config_starts_dark() {
        let app = App::with_config(&Config::default(), I18n::default(), MediaLibrary::default());
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn out_of_range_volume_is_clamped() {
        let config = config_with(ThemeMode::Dark, 3.0);
        let app = App::with_config(&config, I18n::default(), MediaLibrary::default());
        assert_eq!(app.volume(), Volume::new(1.0));
    }

    #[test]
    fn title_is_localized() {
        let app = App::with_config(&Config::default(), I18n::default(), MediaLibrary::default());
        assert_eq!(app.title(), "ZenZone");
    }
}
