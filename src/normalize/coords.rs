//! Viewport-to-canvas coordinate mapping.
//!
//! A canvas has two sizes that rarely agree: the internal pixel resolution it
//! renders at and the on-screen box the host lays it out in. Pointer events
//! arrive in viewport pixels relative to the whole page, so every coordinate
//! has to be translated into the element's local space and rescaled before it
//! means anything to a consumer drawing on the canvas.

use tracing::trace;

/// On-screen box of the canvas element, in viewport pixels.
///
/// `width`/`height` are the rendered size, which may differ from the internal
/// resolution when the host scales the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Host-side geometry collaborator.
///
/// Injected into the adapter so the core never touches real host state; tests
/// supply a fixed implementation.
pub trait SurfaceGeometry {
    /// Current on-screen box of the canvas, in viewport pixels.
    fn bounding_rect(&self) -> CanvasRect;

    /// Internal pixel resolution of the canvas.
    fn internal_size(&self) -> (u32, u32);
}

/// Maps a viewport coordinate into canvas-internal pixel space.
///
/// Translates into element-local space, rescales by `internal / rendered` per
/// axis, rounds to the nearest integer, and clamps into
/// `[0, internal_width] x [0, internal_height]`. Out-of-box coordinates are
/// clamped to the nearest edge rather than rejected.
pub fn map_to_canvas(
    viewport_x: f32,
    viewport_y: f32,
    rect: &CanvasRect,
    internal_width: u32,
    internal_height: u32,
) -> (i32, i32) {
    let scale_x = internal_width as f32 / rect.width;
    let scale_y = internal_height as f32 / rect.height;

    let x = ((viewport_x - rect.left) * scale_x).round();
    let y = ((viewport_y - rect.top) * scale_y).round();

    let x = x.clamp(0.0, internal_width as f32) as i32;
    let y = y.clamp(0.0, internal_height as f32) as i32;

    trace!(
        "Mapped viewport ({:.1}, {:.1}) -> canvas ({}, {})",
        viewport_x,
        viewport_y,
        x,
        y
    );
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> CanvasRect {
        CanvasRect {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 300.0,
        }
    }

    #[test]
    fn maps_origin_to_zero() {
        assert_eq!(map_to_canvas(100.0, 50.0, &rect(), 800, 600), (0, 0));
    }

    #[test]
    fn applies_scale_correction() {
        // Internal 800x600 rendered at 400x300: scale factor 2 on both axes.
        assert_eq!(map_to_canvas(200.0, 50.0, &rect(), 800, 600), (200, 0));
        assert_eq!(map_to_canvas(100.0, 200.0, &rect(), 800, 600), (0, 300));
        assert_eq!(map_to_canvas(300.0, 200.0, &rect(), 800, 600), (400, 300));
    }

    #[test]
    fn identity_when_rendered_matches_internal() {
        let r = CanvasRect {
            left: 0.0,
            top: 0.0,
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(map_to_canvas(123.0, 456.0, &r, 800, 600), (123, 456));
    }

    #[test]
    fn rounds_to_nearest_integer() {
        let r = CanvasRect {
            left: 0.0,
            top: 0.0,
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(map_to_canvas(10.4, 10.6, &r, 800, 600), (10, 11));
    }

    #[test]
    fn clamps_coordinates_before_the_box() {
        assert_eq!(map_to_canvas(-500.0, -500.0, &rect(), 800, 600), (0, 0));
    }

    #[test]
    fn clamps_coordinates_beyond_the_box() {
        assert_eq!(map_to_canvas(5000.0, 5000.0, &rect(), 800, 600), (800, 600));
    }

    #[test]
    fn in_box_coordinates_stay_in_bounds() {
        let r = rect();
        for vx in [100, 150, 237, 355, 499] {
            for vy in [50, 99, 180, 290, 349] {
                let (x, y) = map_to_canvas(vx as f32, vy as f32, &r, 800, 600);
                assert!((0..=800).contains(&x), "x out of bounds: {}", x);
                assert!((0..=600).contains(&y), "y out of bounds: {}", y);
            }
        }
    }
}
