// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::config::BackdropStyle;
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Theme};

/// Style for the gallery grid surface behind the thumbnails.
pub fn gallery_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::gallery_background())),
        ..Default::default()
    }
}

/// Style for the lightbox backdrop layer.
///
/// The backdrop fills the whole window; its color depends on the configured
/// [`BackdropStyle`].
pub fn backdrop(style: BackdropStyle) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::backdrop_color(style))),
        text_color: Some(theme::overlay_text_color()),
        ..Default::default()
    }
}
