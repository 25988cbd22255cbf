// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the gallery grid and the lightbox overlay.

use crate::config::BackdropStyle;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::Color;

/// Background color of the gallery grid surface.
pub fn gallery_background() -> Color {
    palette::GRAY_900
}

/// Tile color shown behind a thumbnail while its pixels load.
pub fn thumbnail_placeholder_color() -> Color {
    palette::GRAY_700
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// White text color for overlay controls on dark backgrounds.
pub fn overlay_text_color() -> Color {
    WHITE
}

/// Backdrop color of the lightbox layer, derived from the configured style.
///
/// The dimmed variant keeps a hint of the gallery visible underneath; the
/// black variant is fully opaque.
pub fn backdrop_color(style: BackdropStyle) -> Color {
    match style {
        BackdropStyle::Dimmed => Color {
            a: opacity::SURFACE,
            ..BLACK
        },
        BackdropStyle::Black => BLACK,
    }
}
