//! Core types and traits for dialkit gauge charts.
//!
//! This crate provides the foundational types shared by every backend:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] parsed from CSS notation
//! - Drawing: [`Path`], [`DrawCommand`], the [`Canvas`] trait and [`RecordingCanvas`]
//! - Animation: [`Easing`] curves and [`EasedValue`] tweens

mod animation;
mod canvas;
mod color;
pub mod draw;
mod geometry;
pub mod image;

pub use animation::{EasedValue, Easing};
pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{
    DrawCommand, FontWeight, GradientStop, LineCap, Paint, Path, PathCommand, Shadow, ShapeStyle,
    StrokeStyle, TextAnchor, TextBaseline, TextStyle, Transform2D,
};
pub use geometry::{Point, Rect, Size};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==========================================================================
    // PROPERTY TESTS
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_color_css_roundtrip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let color = Color::from_rgba8(r, g, b, 1.0);
            let parsed = Color::parse_css(&color.to_css()).unwrap();
            prop_assert_eq!(parsed.to_hex(), color.to_hex());
        }

        #[test]
        fn prop_polar_distance_equals_radius(radius in 0.0f64..1000.0, angle in -10.0f64..10.0) {
            let p = Point::polar(radius, angle);
            prop_assert!((p.distance(&Point::ORIGIN) - radius).abs() < 1e-6);
        }

        #[test]
        fn prop_transform_translate_inverse(x in -500.0f64..500.0, y in -500.0f64..500.0) {
            let t = Transform2D::translate(x, y).then(&Transform2D::translate(-x, -y));
            let p = t.apply(Point::new(3.0, 4.0));
            prop_assert!((p.x - 3.0).abs() < 1e-9);
            prop_assert!((p.y - 4.0).abs() < 1e-9);
        }

        #[test]
        fn prop_eased_value_stays_between_endpoints(
            from in -100.0f64..100.0,
            to in -100.0f64..100.0,
            dt in 0.0f64..2.0,
        ) {
            let mut v = EasedValue::new(from, to, 0.8).with_easing(Easing::CubicInOut);
            v.update(dt);
            let lo = from.min(to) - 1e-9;
            let hi = from.max(to) + 1e-9;
            prop_assert!(v.value() >= lo && v.value() <= hi);
        }
    }
}
