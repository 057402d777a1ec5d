//! Centralized theme constants for Slowpoke Square
//! The surface mimics a plain page: white body, CSS named colors for the square

use crate::types::SquareColor;
use egui::Color32;

// =============================================================================
// COLORS - Surface
// =============================================================================
pub const SURFACE_BG: Color32 = Color32::WHITE; // document body

// =============================================================================
// COLORS - Square (CSS named colors)
// =============================================================================
pub const SQUARE_BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
pub const SQUARE_GREEN: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
pub const SQUARE_BLUE: Color32 = Color32::from_rgb(0x00, 0x00, 0xff);
pub const SQUARE_RED: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);

pub fn square_fill(color: SquareColor) -> Color32 {
    match color {
        SquareColor::Black => SQUARE_BLACK,
        SquareColor::Green => SQUARE_GREEN,
        SquareColor::Blue => SQUARE_BLUE,
        SquareColor::Red => SQUARE_RED,
    }
}

// =============================================================================
// COLORS - Status bar
// =============================================================================
pub const BG_STATUS: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const STATUS_PENDING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// TYPOGRAPHY & SPACING
// =============================================================================
pub const FONT_LABEL: f32 = 13.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const SPACING_MD: f32 = 12.0;
pub const SWATCH_SIZE: f32 = 12.0;

/// Apply the app visuals to the egui context
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: SURFACE_BG,
        window_fill: BG_STATUS,
        override_text_color: Some(TEXT_PRIMARY),
        ..egui::Visuals::dark()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_is_css_green_not_lime() {
        assert_eq!(square_fill(SquareColor::Green), Color32::from_rgb(0, 128, 0));
    }

    #[test]
    fn every_color_has_distinct_fill() {
        let fills = [
            SquareColor::Black,
            SquareColor::Green,
            SquareColor::Blue,
            SquareColor::Red,
        ]
        .map(square_fill);
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
