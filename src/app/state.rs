// SPDX-License-Identifier: MPL-2.0
//! Presentation state owned by the root application.

use crate::ui::theming::Appearance;

/// Transient, in-memory UI state. Nothing here outlives the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    /// True exactly while a playback surface exists.
    pub started: bool,
    pub muted: bool,
    pub appearance: Appearance,
}

impl UiState {
    #[must_use]
    pub fn new(appearance: Appearance) -> Self {
        Self {
            started: false,
            muted: false,
            appearance,
        }
    }

    /// Flips mute and returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn toggle_theme(&mut self) -> Appearance {
        self.appearance = self.appearance.toggled();
        self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unmuted_and_not_started() {
        let state = UiState::new(Appearance::Light);
        assert!(!state.started);
        assert!(!state.muted);
        assert_eq!(state.appearance, Appearance::Light);
    }

    #[test]
    fn double_mute_toggle_restores_state() {
        for initial in [false, true] {
            let mut state = UiState {
                muted: initial,
                ..UiState::default()
            };
            assert_eq!(state.toggle_mute(), !initial);
            assert_eq!(state.toggle_mute(), initial);
        }
    }

    #[test]
    fn double_theme_toggle_restores_appearance() {
        for initial in [Appearance::Light, Appearance::Dark] {
            let mut state = UiState::new(initial);
            state.toggle_theme();
            assert_ne!(state.appearance, initial);
            state.toggle_theme();
            assert_eq!(state.appearance, initial);
        }
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = UiState::new(Appearance::Dark);
        state.toggle_mute();
        assert_eq!(state.appearance, Appearance::Dark);

        state.toggle_theme();
        assert!(state.muted);
    }
}
