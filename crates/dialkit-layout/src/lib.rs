#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Geometry for dialkit gauge charts.
//!
//! Everything here is pure arithmetic over a [`GaugeConfig`]:
//!
//! - [`GaugeLayoutCalculator`]: center, radii, segments, ticks, pointer
//! - [`LocalFrame`]: the −90° ring frame and its mapping to surface pixels
//! - [`LinearScale`]: value → angle mapping
//!
//! Angles follow one convention throughout: a value angle is `0` at the
//! range minimum and `π` at the maximum, with the arc opening upward.
//!
//! [`GaugeConfig`]: dialkit_config::GaugeConfig

mod calculator;
mod frame;
mod scale;
mod types;

pub use calculator::{
    angle_to_degrees, calculate_base_layout, format_value, GaugeLayoutCalculator,
    DEFAULT_TICK_LABEL_FONT_SIZE, INNER_LABEL_NUDGE_RATIO, INNER_LABEL_RADIUS_RATIO,
};
pub use frame::{arc_point, frame_angle, screen_angle, LocalFrame, FRAME_ROTATION_DEGREES};
pub use scale::LinearScale;
pub use types::{
    EndLabel, GaugeLayout, PointerPosition, RingLayout, SegmentData, TickData, ValueBoxLayout,
};

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_config::GaugeOptions;
    use proptest::prelude::*;
    use std::f64::consts::PI;
    use std::sync::Arc;

    fn calculator(min: f64, max: f64) -> GaugeLayoutCalculator {
        let config = GaugeOptions::new().with_range(min, max).resolve().unwrap();
        GaugeLayoutCalculator::new(Arc::new(config))
    }

    proptest! {
        #[test]
        fn prop_angle_monotonic(
            min in -1e4f64..1e4,
            span in 1e-2f64..1e4,
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
        ) {
            let calc = calculator(min, min + span);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let angle_lo = calc.value_to_angle(min + span * lo);
            let angle_hi = calc.value_to_angle(min + span * hi);
            prop_assert!(angle_lo <= angle_hi + 1e-12);
        }

        #[test]
        fn prop_range_endpoints(min in -1e4f64..1e4, span in 1e-2f64..1e4) {
            let calc = calculator(min, min + span);
            prop_assert!(calc.value_to_angle(min).abs() < 1e-9);
            prop_assert!((calc.value_to_angle(min + span) - PI).abs() < 1e-9);
        }

        #[test]
        fn prop_pointer_degrees_in_half_turn(t in 0.0f64..=1.0) {
            let calc = calculator(0.0, 100.0);
            let degrees = calc.calculate_pointer_position(t * 100.0).angle;
            prop_assert!((-180.0 - 1e-9..=1e-9).contains(&degrees));
        }

        #[test]
        fn prop_base_radius_scales_with_size(width in 10.0f64..4000.0, height in 10.0f64..4000.0) {
            let config = GaugeOptions::new().with_size(width, height).resolve().unwrap();
            let layout = calculate_base_layout(&config);
            prop_assert!(layout.base_radius * 3.0 <= width + 1e-9);
            prop_assert!(layout.base_radius * 3.0 <= height * 1.2 + 1e-9);
            prop_assert!(layout.gauge.inner_radius < layout.gauge.outer_radius);
        }
    }
}
