// SPDX-License-Identifier: MPL-2.0
//! Playback surface shown once a session has started.
//!
//! The surface draws the latest frame of the background video scaled to
//! cover the window, with the mute toggle in the bottom-right corner. If
//! either half of the media pair fails, a themed backdrop and a short
//! notice take its place while the other half keeps playing.

use crate::error::MediaError;
use crate::i18n::fluent::I18n;
use crate::media::MediaPair;
use crate::playback::{AudioControl, PlaybackEvent, PlaybackRequest, Volume};
use crate::ui::controls;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{Appearance, ColorScheme};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{column, container, image, row, stack, text, Column},
    ContentFit, Element, Length,
};

/// A running session.
#[derive(Debug, Clone)]
pub struct State {
    request: PlaybackRequest,
    frame: Option<image::Handle>,
    control: Option<AudioControl>,
    video_error: Option<MediaError>,
    audio_error: Option<MediaError>,
}

impl State {
    #[must_use]
    pub fn new(session_id: u64, pair: MediaPair) -> Self {
        Self {
            request: PlaybackRequest { session_id, pair },
            frame: None,
            control: None,
            video_error: None,
            audio_error: None,
        }
    }

    #[must_use]
    pub fn pair(&self) -> &MediaPair {
        &self.request.pair
    }

    /// Key for the playback subscription.
    #[must_use]
    pub fn playback_request(&self) -> &PlaybackRequest {
        &self.request
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn video_error(&self) -> Option<&MediaError> {
        self.video_error.as_ref()
    }

    #[must_use]
    pub fn audio_error(&self) -> Option<&MediaError> {
        self.audio_error.as_ref()
    }

    /// Pushes the UI mute state to the audio track, if it is running.
    pub fn apply_mute(&self, muted: bool) {
        if let Some(control) = &self.control {
            control.set_muted(muted);
        }
    }
}

/// Contextual data needed to render the surface.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub muted: bool,
    pub appearance: Appearance,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Playback(PlaybackEvent),
    ToggleMute,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ToggleMute,
}

/// Processes a surface message.
///
/// `muted` and `volume` are applied to the audio handle as soon as the
/// playback workers report in.
pub fn update(state: &mut State, message: Message, muted: bool, volume: Volume) -> Event {
    match message {
        Message::ToggleMute => Event::ToggleMute,
        Message::Playback(event) => {
            match event {
                PlaybackEvent::Started(control) => {
                    control.set_volume(volume);
                    control.set_muted(muted);
                    state.control = Some(control);
                }
                PlaybackEvent::Frame(handle) => {
                    state.frame = Some(handle);
                }
                PlaybackEvent::VideoUnavailable(error) => {
                    state.frame = None;
                    state.video_error = Some(error);
                }
                PlaybackEvent::AudioUnavailable(error) => {
                    state.audio_error = Some(error);
                }
            }
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let background: Element<'a, Message> = match &ctx.state.frame {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(ctx.colors.ambient_background))
            .into(),
    };

    let mut notices = Column::new().spacing(spacing::XS);
    if let Some(error) = &ctx.state.video_error {
        notices = notices.push(notice(&ctx, "session-video-unavailable", error));
    }
    if let Some(error) = &ctx.state.audio_error {
        notices = notices.push(notice(&ctx, "session-audio-unavailable", error));
    }

    let mute = controls::mute_toggle(ctx.i18n, ctx.appearance, ctx.muted, Message::ToggleMute);

    let bottom_bar = row![
        container(notices).width(Length::Fill).align_y(Vertical::Bottom),
        mute,
    ]
    .align_y(Vertical::Bottom);

    let overlay = container(column![bottom_bar])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG);

    stack![background, overlay].into()
}

fn notice<'a>(ctx: &ViewContext<'a>, key: &str, error: &MediaError) -> Element<'a, Message> {
    let message = format!("{}: {}", ctx.i18n.tr(key), ctx.i18n.tr(error.i18n_key()));

    container(text(message).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::notice(ctx.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaLibrary;
    use crate::session::TimeBucket;
    use std::path::PathBuf;

    fn state() -> State {
        let pair = MediaLibrary::new(PathBuf::from("/media")).pair(TimeBucket::Evening);
        State::new(7, pair)
    }

    #[test]
    fn started_applies_mute_and_volume() {
        let mut state = state();
        let control = AudioControl::new(Volume::default(), false);

        update(
            &mut state,
            Message::Playback(PlaybackEvent::Started(control.clone())),
            true,
            Volume::new(0.3),
        );

        assert!(control.is_muted());
        assert_eq!(control.volume(), Volume::new(0.3));
    }

    #[test]
    fn apply_mute_reaches_audio_handle() {
        let mut state = state();
        let control = AudioControl::new(Volume::default(), false);
        update(
            &mut state,
            Message::Playback(PlaybackEvent::Started(control.clone())),
            false,
            Volume::default(),
        );

        state.apply_mute(true);
        assert!(control.is_muted());
        state.apply_mute(false);
        assert!(!control.is_muted());
    }

    #[test]
    fn apply_mute_without_audio_is_noop() {
        let state = state();
        state.apply_mute(true);
        assert!(state.audio_error().is_none());
    }

    #[test]
    fn frames_replace_backdrop() {
        let mut state = state();
        assert!(!state.has_frame());

        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        update(
            &mut state,
            Message::Playback(PlaybackEvent::Frame(handle)),
            false,
            Volume::default(),
        );
        assert!(state.has_frame());
    }

    #[test]
    fn video_failure_falls_back_to_backdrop() {
        let mut state = state();
        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        update(
            &mut state,
            Message::Playback(PlaybackEvent::Frame(handle)),
            false,
            Volume::default(),
        );

        update(
            &mut state,
            Message::Playback(PlaybackEvent::VideoUnavailable(MediaError::NotFound(
                "night.mp4".to_string(),
            ))),
            false,
            Volume::default(),
        );

        assert!(!state.has_frame());
        assert!(matches!(state.video_error(), Some(MediaError::NotFound(_))));
        assert!(state.audio_error().is_none());
    }

    #[test]
    fn mute_button_bubbles_up() {
        let mut state = state();
        let event = update(&mut state, Message::ToggleMute, false, Volume::default());
        assert!(matches!(event, Event::ToggleMute));
    }

    #[test]
    fn session_view_renders_with_notices() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let mut state = state();
        update(
            &mut state,
            Message::Playback(PlaybackEvent::AudioUnavailable(MediaError::AudioDevice(
                "none".to_string(),
            ))),
            false,
            Volume::default(),
        );

        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            muted: true,
            appearance: Appearance::Light,
            colors: &colors,
        };
        let _element = view(ctx);
    }
}
