// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always present; while the lightbox is open it is layered
//! on top with a stack and the gallery underneath is shielded from input.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::widgets::input_shield;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub gallery: &'a gallery::Content,
    pub lightbox: Option<&'a lightbox::State>,
}

/// Renders the gallery, with the lightbox stacked over it when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = gallery::view(gallery::ViewContext { i18n: ctx.i18n }, ctx.gallery)
        .map(Message::Gallery);

    let Some(state) = ctx.lightbox else {
        return gallery_view;
    };

    let lightbox_view = lightbox::pane::view(
        lightbox::pane::ViewContext {
            i18n: ctx.i18n,
            backdrop: ctx.config.backdrop(),
            show_position_counter: ctx.config.show_position_counter(),
        },
        state,
    )
    .map(Message::Lightbox);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(input_shield(gallery_view, true))
        .push(lightbox_view)
        .into()
}
