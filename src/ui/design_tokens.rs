// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are designed to be consistent; maintain ratios (e.g. MD = XS * 2)
//! when modifying.

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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_300: Color = Color::from_rgb(0.576, 0.773, 0.992);
    pub const PRIMARY_500: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_600: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const PRIMARY_700: Color = Color::from_rgb(0.09, 0.25, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Fully hidden content (pre-reveal state).
    pub const HIDDEN: f32 = 0.0;
    /// Dimmed content and disabled text.
    pub const DIMMED: f32 = 0.45;
    /// Subtle hover overlays.
    pub const OVERLAY_SUBTLE: f32 = 0.08;
    /// Scrolled-navbar backdrop.
    pub const NAVBAR_SCROLLED: f32 = 0.97;
    pub const FULL: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical breathing room between page sections.
    pub const SECTION: f32 = 64.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Toast card width, matching the page's notification surface.
    pub const TOAST_WIDTH: f32 = 400.0;
    /// Diameter of the round back-to-top button.
    pub const BACK_TO_TOP: f32 = 50.0;
    /// Width of form columns.
    pub const FORM_WIDTH: f32 = 480.0;
    /// Width of a service or portfolio card.
    pub const CARD_WIDTH: f32 = 260.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const HERO: f32 = 44.0;
    pub const TITLE: f32 = 30.0;
    pub const SUBTITLE: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
    /// Animated stat figures.
    pub const STAT: f32 = 34.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Fully round (back-to-top button).
    pub const ROUND: f32 = 25.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 4.0),
        blur_radius: 6.0,
    };

    /// Lifted cards on hover.
    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.18,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 10.0),
        blur_radius: 16.0,
    };
}

/// Copied-state colors for the copy button. Grouped because all three are
/// swapped in and restored together.
pub mod copy_feedback {
    use super::Color;

    pub const BACKGROUND: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const TEXT: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const BORDER: Color = Color::from_rgb(0.576, 0.773, 0.992);
}
