// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the application, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_vqa::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.067, 0.078, 0.106);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.18, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_600: Color = Color::from_rgb(0.35, 0.37, 0.42);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0); // Very light blue
    pub const PRIMARY_300: Color = Color::from_rgb(0.58, 0.77, 0.99); // Light blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7); // Dark blue

    // Accent (purple) for the window backdrop
    pub const ACCENT_100: Color = Color::from_rgb(0.95, 0.91, 1.0);

    // Semantic colors
    pub const ERROR_100: Color = Color::from_rgb(1.0, 0.886, 0.886);
    pub const ERROR_300: Color = Color::from_rgb(0.988, 0.647, 0.647);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_700: Color = Color::from_rgb(0.725, 0.11, 0.11);
    pub const ERROR_900: Color = Color::from_rgb(0.498, 0.114, 0.114);

    pub const SUCCESS_50: Color = Color::from_rgb(0.941, 0.992, 0.957);
    pub const SUCCESS_200: Color = Color::from_rgb(0.733, 0.969, 0.816);
    pub const SUCCESS_300: Color = Color::from_rgb(0.525, 0.937, 0.675);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const SUCCESS_700: Color = Color::from_rgb(0.082, 0.502, 0.239);
    pub const SUCCESS_900: Color = Color::from_rgb(0.078, 0.325, 0.176);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
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
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Maximum height of the image preview inside the drop region.
    pub const PREVIEW_MAX_HEIGHT: f32 = 256.0;

    /// Minimum height of the drop region while it shows the prompt.
    pub const DROP_REGION_MIN_HEIGHT: f32 = 140.0;

    /// Maximum width of the form card.
    pub const CARD_MAX_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Large title - Main heading
    pub const TITLE_LG: f32 = 30.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Drop region outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PREVIEW_MAX_HEIGHT > sizing::DROP_REGION_MIN_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
