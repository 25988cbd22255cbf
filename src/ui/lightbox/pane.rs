// SPDX-License-Identifier: MPL-2.0
//! Lightbox pane stacking the backdrop, the image surface, the overlay
//! controls, and the position counter.
//!
//! None of the layers except the buttons capture pointer events: presses on
//! the image or the backdrop fall through to the window-level event pipeline
//! that drives the tap/drag session.

use crate::config::BackdropStyle;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::lightbox::component::{ImageLoadState, Message, NavigationDirection, State};
use crate::ui::lightbox::geometry;
use crate::ui::lightbox::transition::Transform;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::image::{FilterMethod, Handle};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Background, Element, Length, Padding, Rectangle, Renderer, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub backdrop: BackdropStyle,
    pub show_position_counter: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let backdrop = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.backdrop));

    let mut stack = Stack::new().push(backdrop);

    // Image surface, present once the decode finished
    if let ImageLoadState::Ready(image) = state.image_state() {
        let surface = Canvas::new(ImageSurface {
            handle: image.handle.clone(),
            width: image.width,
            height: image.height,
            transform: state.render_transform(),
            zoomed: state.is_zoomed(),
            dragging: state.is_dragging(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        stack = stack.push(surface);
    }

    let (current, total) = state.position();

    // Navigation arrows, pointless on a single image
    if total > 1 {
        let left_arrow = button(Text::new("◀").size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button_overlay(
                theme::overlay_text_color(),
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(Message::NavigatePressed(NavigationDirection::Previous));

        stack = stack.push(
            Container::new(left_arrow)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center),
        );

        let right_arrow = button(Text::new("▶").size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button_overlay(
                theme::overlay_text_color(),
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(Message::NavigatePressed(NavigationDirection::Next));

        stack = stack.push(
            Container::new(right_arrow)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        );
    }

    // Top-right control cluster
    let slideshow_glyph = if state.is_slideshow_active() {
        "■"
    } else {
        "▶"
    };
    let controls = Row::new()
        .spacing(spacing::SM)
        .push(control_button(slideshow_glyph, Message::SlideshowPressed))
        .push(control_button("⛶", Message::FullscreenPressed))
        .push(control_button("✕", Message::ClosePressed));

    stack = stack.push(
        Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    // Loading badge while the decode is in flight
    if matches!(state.image_state(), ImageLoadState::Loading) {
        let spinner = AnimatedSpinner::new(theme::overlay_text_color(), state.spinner_rotation())
            .into_element();

        let loading_content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(Text::new(ctx.i18n.tr("lightbox-loading")).size(typography::BODY_LG));

        let loading_badge = Container::new(loading_content)
            .padding(spacing::MD)
            .style(move |_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(iced::Color {
                    r: 0.0,
                    g: 0.0,
                    b: 0.0,
                    a: opacity::OVERLAY_MEDIUM,
                })),
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                text_color: Some(theme::overlay_text_color()),
                ..Default::default()
            });

        stack = stack.push(
            Container::new(loading_badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    // Failure badge when the file could not be decoded
    if let ImageLoadState::Failed { file } = state.image_state() {
        let error_text = ctx
            .i18n
            .tr_with_args("lightbox-load-error", &[("file", file.as_str())]);

        let error_content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("⚠").size(sizing::ICON_LG))
            .push(Text::new(error_text).size(typography::BODY));

        let error_badge = Container::new(error_content)
            .padding(spacing::LG)
            .max_width(400.0)
            .style(move |_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(iced::Color {
                    r: 0.0,
                    g: 0.0,
                    b: 0.0,
                    a: opacity::OVERLAY_STRONG,
                })),
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                text_color: Some(theme::overlay_text_color()),
                ..Default::default()
            });

        stack = stack.push(
            Container::new(error_badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    // Position counter at bottom center
    if ctx.show_position_counter && total > 1 {
        let position_text = format!("{}/{}", current + 1, total);
        let position_indicator = Container::new(Text::new(position_text).size(typography::BODY))
            .padding(Padding {
                top: spacing::XXS,
                right: spacing::XS,
                bottom: spacing::XXS,
                left: spacing::XS,
            })
            .style(styles::overlay::indicator(12.0));

        stack = stack.push(
            Container::new(position_indicator)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

fn control_button<'a>(glyph: &'a str, message: Message) -> iced::widget::Button<'a, Message> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            theme::overlay_text_color(),
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
}

/// Canvas program painting the image with its current pan/zoom transform.
///
/// Input is deliberately left unhandled so pointer events reach the raw
/// event pipeline; the program only contributes the cursor shape.
struct ImageSurface {
    handle: Handle,
    width: u32,
    height: u32,
    transform: Transform,
    zoomed: bool,
    dragging: bool,
}

impl ImageSurface {
    fn displayed_rect(&self, bounds: Rectangle) -> Rectangle {
        geometry::image_rect(
            self.width,
            self.height,
            bounds.size(),
            self.transform.scale,
            self.transform.pan,
        )
    }
}

impl canvas::Program<Message> for ImageSurface {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.draw_image(
            self.displayed_rect(bounds),
            canvas::Image::new(self.handle.clone()).filter_method(FilterMethod::Linear),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };

        if !self.displayed_rect(bounds).contains(position) {
            return mouse::Interaction::default();
        }

        if self.zoomed {
            if self.dragging {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::ZoomIn
        }
    }
}
