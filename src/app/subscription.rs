// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, mouse, touch, window) to the
//! lightbox while it is open. With the lightbox closed only the few window
//! events the gallery cares about are listened for.

use super::Message;
use crate::ui::lightbox;
use iced::{event, window, Subscription};

/// Creates the event subscription for the current application state.
///
/// With the lightbox open, window resizes are forwarded unconditionally so
/// pan clamping always sees the real viewport, and everything no widget
/// captured is handed to the lightbox as a raw event. File drops are only
/// accepted while the gallery is interactive.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, window_id| {
            if let event::Event::Window(window::Event::Resized(_)) = &event {
                return Some(Message::Lightbox(lightbox::Message::RawEvent {
                    window: window_id,
                    event,
                }));
            }

            match status {
                event::Status::Ignored => Some(Message::Lightbox(lightbox::Message::RawEvent {
                    window: window_id,
                    event,
                })),
                event::Status::Captured => None,
            }
        })
    } else {
        event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
                window: window_id,
                size,
            }),
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }
}
