// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the fixed scales every style in ZenZone is built from.
//!
//! Widgets never hard-code colors or sizes; they pick a token from one of
//! the scales below, and [`theming`](super::theming) maps the palette onto
//! the light and dark appearances.
//!
//! ```
//! use iced::Color;
//! use zenzone::ui::design_tokens::{opacity, palette, spacing};
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::DUSK_900
//! };
//! assert!(scrim.a < 1.0);
//! assert_eq!(spacing::LG, 24.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (teal scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.78, 0.74);
    pub const PRIMARY_500: Color = Color::from_rgb(0.22, 0.66, 0.62);
    pub const PRIMARY_600: Color = Color::from_rgb(0.16, 0.54, 0.51);

    // Ambient backgrounds shown when no video frame is available
    pub const DUSK_900: Color = Color::from_rgb(0.07, 0.09, 0.14);
    pub const DUSK_800: Color = Color::from_rgb(0.11, 0.14, 0.21);
    pub const DAWN_100: Color = Color::from_rgb(0.94, 0.96, 0.95);
    pub const DAWN_200: Color = Color::from_rgb(0.86, 0.91, 0.90);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Round toggle buttons (theme, mute) - WCAG 2.5.5 compliant (44x44 minimum)
    pub const TOGGLE_SIZE: f32 = 48.0;

    // Component widths
    pub const WELCOME_CARD_WIDTH: f32 = 380.0;
    pub const TIME_INPUT_WIDTH: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Large title - Welcome heading
    pub const TITLE_LG: f32 = 30.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Tooltips, notices, field errors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Buttons, notices
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADE: Color = Color::from_rgba(0.02, 0.03, 0.06, 0.35);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Buttons at rest.
    pub const SM: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    /// Hovered buttons, tooltips.
    pub const MD: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 10.0,
    };

    /// The welcome card floating over the page.
    pub const LG: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_PRESSED);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Touch target minimum
    assert!(sizing::TOGGLE_SIZE >= 44.0);
    assert!(sizing::TOGGLE_SIZE > sizing::ICON_MD);
    assert!(sizing::TIME_INPUT_WIDTH < sizing::WELCOME_CARD_WIDTH);

    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_SM > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_half_unit_grid() {
        for step in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ] {
            assert_eq!(step % spacing::XXS, 0.0);
        }
    }

    #[test]
    fn toggle_padding_centers_icon() {
        let padding = (sizing::TOGGLE_SIZE - sizing::ICON_MD) / 2.0;
        assert_eq!(padding * 2.0 + sizing::ICON_MD, sizing::TOGGLE_SIZE);
    }

    #[test]
    fn ambient_backgrounds_contrast() {
        assert!(palette::DUSK_900.r < 0.2);
        assert!(palette::DAWN_100.r > 0.9);
    }
}
