// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the thumbnail grid and its idle/empty/error states.
//!
//! The grid is purely presentational. Opening a folder and building the
//! [`ImageCollection`] happen in the application update loop; this module
//! only renders whatever content the scan produced and reports presses.

use crate::gallery::{ImageCollection, ImageItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::image::Handle;
use iced::widget::{button, image, responsive, scrollable, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Size,
};

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenFolderRequested,
    ThumbnailPressed(usize),
}

/// What the gallery currently has to show.
#[derive(Debug, Clone)]
pub enum Content {
    /// No folder has been opened yet.
    Idle,
    /// The last scan finished without finding a supported image.
    EmptyFolder,
    /// The folder could not be read.
    ScanFailed(String),
    Grid(ImageCollection),
}

/// Renders the gallery screen for the given content.
pub fn view<'a>(ctx: ViewContext<'a>, content: &'a Content) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match content {
        Content::Idle => idle_state(&ctx),
        Content::EmptyFolder => {
            notice(ctx.i18n.tr("gallery-empty-folder"), theme::muted_text_color(), &ctx)
        }
        Content::ScanFailed(error) => notice(
            ctx.i18n
                .tr_with_args("gallery-scan-error", &[("error", error.as_str())]),
            theme::error_text_color(),
            &ctx,
        ),
        Content::Grid(collection) => grid(collection.items()),
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::gallery_surface)
        .into()
}

/// Start screen shown before any folder is opened.
fn idle_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("empty-state-title")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr("empty-state-subtitle"))
                .size(typography::BODY_LG)
                .color(theme::muted_text_color()),
        )
        .push(open_folder_button(ctx))
        .push(
            Text::new(ctx.i18n.tr("empty-state-drop-hint"))
                .size(typography::BODY_SM)
                .color(theme::muted_text_color()),
        );

    centered(content.into())
}

/// Single-line notice with the open button underneath, used for the empty
/// folder and scan failure states.
fn notice<'a>(message: String, color: iced::Color, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(message).size(typography::BODY_LG).color(color))
        .push(open_folder_button(ctx));

    centered(content.into())
}

fn open_folder_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr("empty-state-button")).size(typography::BODY))
        .padding(spacing::SM)
        .style(styles::button_primary)
        .on_press(Message::OpenFolderRequested)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Scrollable thumbnail grid. The column count follows the available width
/// so tiles keep their fixed size on resize.
fn grid(items: &[ImageItem]) -> Element<'_, Message> {
    responsive(move |size: Size| {
        let columns = column_count(size.width);

        let mut rows = Column::new().spacing(spacing::SM);
        for (chunk_index, chunk) in items.chunks(columns).enumerate() {
            let mut row = Row::new().spacing(spacing::SM);
            for (offset, item) in chunk.iter().enumerate() {
                row = row.push(thumbnail_tile(item, chunk_index * columns + offset));
            }
            rows = rows.push(row);
        }

        scrollable(
            Container::new(rows)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    })
    .into()
}

fn thumbnail_tile(item: &ImageItem, index: usize) -> Element<'_, Message> {
    let thumbnail = image(Handle::from_path(item.path.clone()))
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover);

    button(thumbnail)
        .padding(0)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // width is clamped positive first
fn column_count(available_width: f32) -> usize {
    let tile = sizing::THUMBNAIL + spacing::SM;
    let usable = (available_width - 2.0 * spacing::MD).max(0.0);
    ((usable / tile).floor() as usize).max(1)
}
