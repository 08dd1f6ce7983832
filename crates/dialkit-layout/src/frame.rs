//! The rotated ring frame and conversions out of it.
//!
//! Rings, segments and ticks are laid out in a frame centered on the gauge
//! and rotated −90°, where value angle 0 sits at the left end of the visible
//! arc and π at the right end.

use dialkit_core::{Point, Transform2D};
use std::f64::consts::{FRAC_PI_2, PI};

/// Rotation of the ring frame relative to the surface, in degrees.
pub const FRAME_ROTATION_DEGREES: f64 = -90.0;

/// Point on a circle of `radius` at value angle `angle`, in the ring frame.
#[must_use]
pub fn arc_point(radius: f64, angle: f64) -> Point {
    Point::polar(radius, frame_angle(angle))
}

/// Value angle expressed as a canvas angle inside the ring frame.
#[must_use]
pub fn frame_angle(angle: f64) -> f64 {
    angle - FRAC_PI_2
}

/// Value angle expressed as a canvas angle on the surface.
#[must_use]
pub fn screen_angle(angle: f64) -> f64 {
    angle - PI
}

/// Ring frame anchored at a gauge center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    center: Point,
}

impl LocalFrame {
    /// Frame anchored at `center`.
    #[must_use]
    pub const fn new(center: Point) -> Self {
        Self { center }
    }

    /// Frame origin in surface pixels.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Frame → surface transform (rotate, then translate).
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        Transform2D::rotate_degrees(FRAME_ROTATION_DEGREES)
            .then(&Transform2D::translate(self.center.x, self.center.y))
    }

    /// Convert a ring-frame point to surface pixels.
    #[must_use]
    pub fn to_screen(&self, local: Point) -> Point {
        // rotate(-90°) maps (x, y) to (y, -x)
        Point::new(self.center.x + local.y, self.center.y - local.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn test_arc_point_endpoints() {
        assert!(close(arc_point(10.0, 0.0), Point::new(0.0, -10.0)));
        assert!(close(arc_point(10.0, PI), Point::new(0.0, 10.0)));
        assert!(close(arc_point(10.0, FRAC_PI_2), Point::new(10.0, 0.0)));
    }

    #[test]
    fn test_to_screen_maps_arc_to_upper_half() {
        let frame = LocalFrame::new(Point::new(200.0, 195.0));
        assert!(close(frame.to_screen(arc_point(10.0, 0.0)), Point::new(190.0, 195.0)));
        assert!(close(frame.to_screen(arc_point(10.0, FRAC_PI_2)), Point::new(200.0, 185.0)));
        assert!(close(frame.to_screen(arc_point(10.0, PI)), Point::new(210.0, 195.0)));
    }

    #[test]
    fn test_to_screen_matches_transform() {
        let frame = LocalFrame::new(Point::new(12.0, 34.0));
        let local = Point::new(3.0, -7.0);
        assert!(close(frame.to_screen(local), frame.transform().apply(local)));
    }

    #[test]
    fn test_screen_angle_agrees_with_frame() {
        let frame = LocalFrame::new(Point::ORIGIN);
        for angle in [0.0, 0.3, FRAC_PI_2, 2.0, PI] {
            let via_frame = frame.to_screen(arc_point(5.0, angle));
            let direct = Point::polar(5.0, screen_angle(angle));
            assert!(close(via_frame, direct), "angle {angle}");
        }
    }
}
