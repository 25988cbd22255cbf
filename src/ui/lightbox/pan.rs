// SPDX-License-Identifier: MPL-2.0
//! Pan offset state for the lightbox image.
//!
//! Offsets are expressed in viewport pixels relative to the centered
//! position: `(0, 0)` means the image sits exactly in the middle of the
//! viewport, positive x moves it right, positive y moves it down.

use iced::Vector;

/// Displacement of the image from its centered position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    /// The centered position.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this offset shifted by the given delta.
    #[must_use]
    pub fn translated(self, delta: Vector) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

/// Maximum pan distance per axis, guaranteed non-negative.
///
/// A limit of zero on an axis pins the image to the center of that axis,
/// which is the case whenever the displayed image fits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanLimits {
    max_x: f32,
    max_y: f32,
}

impl PanLimits {
    /// No panning allowed on either axis.
    pub const NONE: Self = Self {
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Creates limits, clamping negative inputs to zero.
    #[must_use]
    pub fn new(max_x: f32, max_y: f32) -> Self {
        Self {
            max_x: max_x.max(0.0),
            max_y: max_y.max(0.0),
        }
    }

    /// Clamps an offset so the image edges stay at or outside the viewport
    /// edges on each axis.
    #[must_use]
    pub fn clamp(self, offset: PanOffset) -> PanOffset {
        PanOffset {
            x: offset.x.clamp(-self.max_x, self.max_x),
            y: offset.y.clamp(-self.max_y, self.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offset_is_centered() {
        assert_eq!(PanOffset::default(), PanOffset::ZERO);
    }

    #[test]
    fn translated_adds_the_delta() {
        let offset = PanOffset::new(10.0, -5.0).translated(Vector::new(2.5, 5.0));
        assert_eq!(offset, PanOffset::new(12.5, 0.0));
    }

    #[test]
    fn negative_limits_collapse_to_zero() {
        assert_eq!(PanLimits::new(-20.0, -1.0), PanLimits::NONE);
    }

    #[test]
    fn clamp_keeps_offsets_inside_the_limits() {
        let limits = PanLimits::new(50.0, 30.0);

        let inside = limits.clamp(PanOffset::new(25.0, -30.0));
        assert_eq!(inside, PanOffset::new(25.0, -30.0));

        let outside = limits.clamp(PanOffset::new(80.0, -45.0));
        assert_eq!(outside, PanOffset::new(50.0, -30.0));
    }

    #[test]
    fn zero_limits_pin_every_offset_to_center() {
        let pinned = PanLimits::NONE.clamp(PanOffset::new(999.0, -999.0));
        assert_eq!(pinned, PanOffset::ZERO);
    }
}
