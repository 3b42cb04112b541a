// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for toast cards and the demo window.

## Organization

- **Palette**: Base and severity colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font sizes and line height
- **Border** / **Radius** / **Shadow**: Card chrome
- **Motion**: Animation timings

## Examples

```
use iced_toasts::ui::design_tokens::{opacity, palette, spacing};
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

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity accents
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_WIDTH: f32 = 280.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// Characters of body text that fit on one toast line.
    ///
    /// Width left for the message once padding, icon and dismiss control
    /// are taken out, divided by an average glyph width of half the font
    /// size.
    pub const TOAST_CHARS_PER_LINE: usize = 29;

    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    pub const MIN_WINDOW_WIDTH: f32 = 480.0;
    pub const MIN_WINDOW_HEIGHT: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Most UI text, toast messages
    pub const BODY: f32 = 14.0;

    /// Cooldown labels, hints
    pub const CAPTION: f32 = 12.0;

    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT: f32 = 1.3;
}

// ============================================================================
// Border / Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent border
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Toast fade-in once its entry timer fires.
    pub const FADE_IN: Duration = Duration::from_millis(200);

    /// Redraw interval while a toast is fading.
    pub const FRAME: Duration = Duration::from_millis(16);
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

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::TOAST_CHARS_PER_LINE > 0);
};
