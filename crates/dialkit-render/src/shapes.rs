//! Ring-frame geometry shared by both backends.

use crate::scene::TransformOp;
use crate::IMAGE_POINTER_ROTATION;
use dialkit_config::PointerKind;
use dialkit_core::{Path, Point};
use dialkit_layout::{arc_point, frame_angle, GaugeLayoutCalculator, RingLayout, SegmentData};
use std::f64::consts::PI;

/// Half-annulus covering the whole arc.
#[must_use]
pub(crate) fn ring_path(ring: &RingLayout) -> Path {
    arc_band(ring, 0.0, PI)
}

/// Outlines along both radii of a ring.
#[must_use]
pub(crate) fn ring_outlines(ring: &RingLayout) -> [Path; 2] {
    let (start, end) = (frame_angle(0.0), frame_angle(PI));
    [
        Path::arc_outline(Point::ORIGIN, ring.outer_radius, start, end),
        Path::arc_outline(Point::ORIGIN, ring.inner_radius, start, end),
    ]
}

/// Slice of `ring` covering one segment.
#[must_use]
pub(crate) fn segment_path(ring: &RingLayout, segment: &SegmentData) -> Path {
    arc_band(ring, segment.start_angle, segment.end_angle)
}

/// Radial line across `ring` at value angle `angle`.
#[must_use]
pub(crate) fn separator(ring: &RingLayout, angle: f64) -> (Point, Point) {
    (
        arc_point(ring.inner_radius, angle),
        arc_point(ring.outer_radius, angle),
    )
}

/// Pointer transform, relative to the pointer group, at `degrees`.
///
/// The image pointer gets its inner-edge offset for the same angle, so an
/// animated image slides along the background ring.
#[must_use]
pub(crate) fn pointer_transform(
    geometry: &GaugeLayoutCalculator,
    degrees: f64,
) -> Vec<TransformOp> {
    match geometry.config().pointer.kind {
        PointerKind::Line => vec![TransformOp::Rotate(degrees)],
        PointerKind::Image => {
            let offset = geometry.pointer_image_offset(degrees);
            let mut ops = Vec::with_capacity(2);
            if offset != Point::ORIGIN {
                ops.push(TransformOp::Translate(offset.x, offset.y));
            }
            ops.push(TransformOp::Rotate(degrees + IMAGE_POINTER_ROTATION));
            ops
        }
    }
}

fn arc_band(ring: &RingLayout, start: f64, end: f64) -> Path {
    Path::annulus_sector(
        Point::ORIGIN,
        ring.inner_radius,
        ring.outer_radius,
        frame_angle(start),
        frame_angle(end),
    )
}
