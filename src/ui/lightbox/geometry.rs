// SPDX-License-Identifier: MPL-2.0
//! Layout math for the lightbox image.
//!
//! All values are in logical viewport pixels. The image is laid out
//! centered, scaled to fit inside a margin of the viewport, and displaced
//! by the pan offset when magnified.

use iced::{Point, Rectangle, Size};

use super::pan::{PanLimits, PanOffset};

/// Fraction of the viewport the fitted image may occupy per axis.
pub const FIT_FRACTION: f32 = 0.9;

/// Scale that fits an image inside the viewport margin. Images smaller than
/// the margin are shown at natural size rather than upscaled.
#[must_use]
pub fn fit_scale(width: u32, height: u32, viewport: Size) -> f32 {
    if width == 0 || height == 0 || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let scale_x = viewport.width * FIT_FRACTION / width as f32;
    #[allow(clippy::cast_precision_loss)]
    let scale_y = viewport.height * FIT_FRACTION / height as f32;

    scale_x.min(scale_y).min(1.0)
}

/// Size the image occupies on screen at the given zoom factor.
#[must_use]
pub fn displayed_size(width: u32, height: u32, viewport: Size, zoom: f32) -> Size {
    let scale = fit_scale(width, height, viewport) * zoom;
    #[allow(clippy::cast_precision_loss)]
    Size::new(width as f32 * scale, height as f32 * scale)
}

/// Pan limits that keep the displayed image edges at or outside the
/// viewport edges. Axes where the image fits entirely get a zero limit.
#[must_use]
pub fn pan_limits(width: u32, height: u32, viewport: Size, zoom: f32) -> PanLimits {
    let displayed = displayed_size(width, height, viewport, zoom);
    PanLimits::new(
        (displayed.width - viewport.width) / 2.0,
        (displayed.height - viewport.height) / 2.0,
    )
}

/// Rectangle the image occupies inside the viewport: centered, scaled,
/// then shifted by the pan offset.
#[must_use]
pub fn image_rect(
    width: u32,
    height: u32,
    viewport: Size,
    zoom: f32,
    pan: PanOffset,
) -> Rectangle {
    let displayed = displayed_size(width, height, viewport, zoom);
    Rectangle::new(
        Point::new(
            (viewport.width - displayed.width) / 2.0 + pan.x,
            (viewport.height - displayed.height) / 2.0 + pan.y,
        ),
        displayed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn small_images_are_not_upscaled() {
        assert_relative_eq!(fit_scale(200, 100, VIEWPORT), 1.0);
    }

    #[test]
    fn large_images_shrink_into_the_margin() {
        // 2000px wide against a 900px margin
        assert_relative_eq!(fit_scale(2000, 400, VIEWPORT), 0.45);
    }

    #[test]
    fn the_tighter_axis_wins() {
        // Height is the constraint: 720 / 1600 < 900 / 1200
        assert_relative_eq!(fit_scale(1200, 1600, VIEWPORT), 0.45);
    }

    #[test]
    fn degenerate_dimensions_fall_back_to_natural_size() {
        assert_relative_eq!(fit_scale(0, 100, VIEWPORT), 1.0);
        assert_relative_eq!(fit_scale(100, 100, Size::new(0.0, 600.0)), 1.0);
    }

    #[test]
    fn fitted_image_cannot_pan() {
        let limits = pan_limits(2000, 400, VIEWPORT, 1.0);
        assert_eq!(limits, PanLimits::NONE);
    }

    #[test]
    fn magnified_image_pans_up_to_the_overhang() {
        // Fitted at 0.45, doubled: 1800x360 displayed in 1000x800
        let limits = pan_limits(2000, 400, VIEWPORT, 2.0);
        assert_eq!(limits, PanLimits::new(400.0, 0.0));

        let clamped = limits.clamp(PanOffset::new(500.0, 100.0));
        assert_eq!(clamped, PanOffset::new(400.0, 0.0));
    }

    #[test]
    fn centered_rect_has_equal_margins() {
        let rect = image_rect(2000, 400, VIEWPORT, 1.0, PanOffset::ZERO);
        assert_relative_eq!(rect.x, 50.0);
        assert_relative_eq!(rect.y, 310.0);
        assert_relative_eq!(rect.width, 900.0);
        assert_relative_eq!(rect.height, 180.0);
    }

    #[test]
    fn pan_shifts_the_rect() {
        let rect = image_rect(2000, 400, VIEWPORT, 2.0, PanOffset::new(400.0, 0.0));
        // 1800px wide, centered at x = -400, panned right by the full limit
        assert_relative_eq!(rect.x, 0.0);
        assert_relative_eq!(rect.width, 1800.0);
    }

    #[test]
    fn max_pan_aligns_the_image_edge_with_the_viewport_edge() {
        let limits = pan_limits(2000, 400, VIEWPORT, 2.0);
        let offset = limits.clamp(PanOffset::new(f32::MAX, 0.0));
        let rect = image_rect(2000, 400, VIEWPORT, 2.0, offset);

        // Left edge flush with the viewport; no gap can open up
        assert_relative_eq!(rect.x, 0.0);
    }
}
