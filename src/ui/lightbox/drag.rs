// SPDX-License-Identifier: MPL-2.0
//! Drag session state for lightbox pointer interaction.
//!
//! A session starts on pointer down and follows exactly one pointer until
//! it is released or lost. Movement past the click threshold permanently
//! marks the session as a drag; a release before that counts as a click.

use iced::Point;

use super::pan::PanOffset;

/// Distance in pixels the pointer must travel before a press stops being
/// a click.
pub const CLICK_DRAG_THRESHOLD: f32 = 6.0;

/// Identifies the device pointer that owns a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    /// The mouse cursor (left button).
    Mouse,
    /// A touch contact, identified by its finger id.
    Touch(u64),
}

/// Tracks a single press from pointer down to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pointer: PointerId,
    start_position: Point,
    start_pan: PanOffset,
    moved: bool,
}

impl DragSession {
    /// Starts a session for the given pointer, capturing the pan offset the
    /// drag will be relative to.
    #[must_use]
    pub fn begin(pointer: PointerId, position: Point, pan: PanOffset) -> Self {
        Self {
            pointer,
            start_position: position,
            start_pan: pan,
            moved: false,
        }
    }

    /// The pointer that owns this session.
    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Records a movement sample. Once the pointer strays further than
    /// [`CLICK_DRAG_THRESHOLD`] from the press position the session counts
    /// as a drag, even if the pointer later returns to where it started.
    pub fn track(&mut self, position: Point) {
        if !self.moved && self.start_position.distance(position) > CLICK_DRAG_THRESHOLD {
            self.moved = true;
        }
    }

    /// The pan offset the image should take with the pointer at `position`.
    #[must_use]
    pub fn pan_target(&self, position: Point) -> PanOffset {
        self.start_pan.translated(position - self.start_position)
    }

    /// Whether releasing now counts as a click rather than a drag.
    #[must_use]
    pub fn is_click(&self) -> bool {
        !self.moved
    }
}
