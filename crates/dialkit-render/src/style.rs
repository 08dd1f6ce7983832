//! Configuration → draw style conversions shared by both backends.

use dialkit_config::{Fill, GaugeConfig, RingConfig, SEPARATOR_COLOR, SEPARATOR_WIDTH};
use dialkit_core::{
    Color, LineCap, Paint, Point, ShapeStyle, StrokeStyle, TextAnchor, TextBaseline, TextStyle,
};
use dialkit_layout::RingLayout;

/// Fill of a ring, centered on the ring frame origin.
#[must_use]
pub(crate) fn ring_paint(ring: &RingConfig, layout: &RingLayout) -> Paint {
    match &ring.color {
        Fill::Solid(color) => Paint::Solid(*color),
        Fill::Gradient(colors) => Paint::radial(
            Point::ORIGIN,
            layout.inner_radius,
            layout.outer_radius,
            colors,
        ),
    }
}

/// Filled ring body with the ring opacity.
#[must_use]
pub(crate) fn ring_fill(ring: &RingConfig, layout: &RingLayout) -> ShapeStyle {
    ShapeStyle::fill(ring_paint(ring, layout)).with_opacity(ring.opacity)
}

/// Border stroke for both radii of a ring, if enabled.
#[must_use]
pub(crate) fn ring_border(ring: &RingConfig) -> Option<ShapeStyle> {
    ring.border.show.then(|| {
        ShapeStyle::stroke(StrokeStyle::new(ring.border.color, ring.border.width))
            .with_opacity(ring.opacity)
    })
}

/// Separator between two segments.
#[must_use]
pub(crate) fn separator_stroke() -> StrokeStyle {
    StrokeStyle::new(SEPARATOR_COLOR, SEPARATOR_WIDTH)
}

/// Tick line stroke.
#[must_use]
pub(crate) fn tick_stroke(config: &GaugeConfig, is_main: bool) -> StrokeStyle {
    let ticks = &config.ticks;
    let width = if is_main { ticks.main_width } else { ticks.width };
    StrokeStyle::new(ticks.color, width)
}

/// Tick value label style.
#[must_use]
pub(crate) fn tick_label_style(config: &GaugeConfig) -> TextStyle {
    let label = &config.ticks.label;
    TextStyle {
        size: label.font_size,
        color: label.color,
        family: label.font_family.clone(),
        ..TextStyle::default()
    }
}

/// End label style.
#[must_use]
pub(crate) fn end_label_style(config: &GaugeConfig) -> TextStyle {
    TextStyle {
        size: config.labels.font_size,
        color: config.labels.color,
        family: config.text.font_family.clone(),
        ..TextStyle::default()
    }
}

/// Line pointer stroke.
#[must_use]
pub(crate) fn pointer_stroke(config: &GaugeConfig) -> StrokeStyle {
    StrokeStyle {
        color: config.pointer.color,
        width: config.pointer.width,
        cap: LineCap::Round,
    }
}

/// Center hub: radial gradient with a border.
#[must_use]
pub(crate) fn hub_style(config: &GaugeConfig) -> ShapeStyle {
    let hub = &config.center_circle;
    ShapeStyle::fill(Paint::radial(
        Point::ORIGIN,
        0.0,
        hub.radius,
        &[hub.gradient.start, hub.gradient.end],
    ))
    .with_stroke(StrokeStyle::new(hub.border_color, hub.line_width))
}

/// Value read-out style.
#[must_use]
pub(crate) fn value_text_style(config: &GaugeConfig) -> TextStyle {
    let text = &config.text;
    TextStyle {
        size: text.font_size,
        color: text.color,
        weight: text.font_weight,
        family: text.font_family.clone(),
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Middle,
    }
}

/// Segment label line style, colored by the current segment.
#[must_use]
pub(crate) fn value_label_style(config: &GaugeConfig, color: Color) -> TextStyle {
    TextStyle {
        size: config.value_box.font.size,
        color,
        family: config.value_box.font.family.clone(),
        ..TextStyle::default()
    }
}

/// Background box behind the value read-out.
#[must_use]
pub(crate) fn value_box_style(config: &GaugeConfig) -> ShapeStyle {
    let value_box = &config.value_box;
    let style = ShapeStyle::fill(value_box.bg_color);
    if value_box.border_width > 0.0 {
        style.with_stroke(StrokeStyle::new(value_box.border_color, value_box.border_width))
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_config::GaugeOptions;
    use dialkit_layout::calculate_base_layout;

    #[test]
    fn test_solid_ring_paint() {
        let config = GaugeConfig::default();
        let layout = calculate_base_layout(&config);
        let style = ring_fill(&config.gauge, &layout.gauge);
        assert!(matches!(style.fill, Some(Paint::Solid(_))));
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_gradient_ring_paint_spans_thickness() {
        let config = GaugeOptions::from_json(r##"{"background": {"color": ["#000", "#888", "#fff"]}}"##)
            .unwrap()
            .resolve()
            .unwrap();
        let layout = calculate_base_layout(&config);
        match ring_paint(&config.background, &layout.background) {
            Paint::Radial {
                inner_radius,
                outer_radius,
                stops,
                ..
            } => {
                assert_eq!(inner_radius, layout.background.inner_radius);
                assert_eq!(outer_radius, layout.background.outer_radius);
                let offsets: Vec<f64> = stops.iter().map(|s| s.offset).collect();
                assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
            }
            Paint::Solid(_) => panic!("expected gradient"),
        }
    }

    #[test]
    fn test_ring_border_toggle() {
        let config = GaugeConfig::default();
        assert!(ring_border(&config.gauge).is_some());
        assert!(ring_border(&config.background).is_none());
    }

    #[test]
    fn test_tick_stroke_widths() {
        let config = GaugeConfig::default();
        assert_eq!(tick_stroke(&config, true).width, 2.0);
        assert_eq!(tick_stroke(&config, false).width, 1.0);
    }

    #[test]
    fn test_pointer_stroke_round_cap() {
        let config = GaugeConfig::default();
        let stroke = pointer_stroke(&config);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.width, 4.0);
    }

    #[test]
    fn test_value_box_border_only_when_wide() {
        let config = GaugeConfig::default();
        let style = value_box_style(&config);
        assert_eq!(style.stroke.map(|s| s.width), Some(1.0));

        let config = GaugeOptions::from_json(r#"{"valueBox": {"borderWidth": 0}}"#)
            .unwrap()
            .resolve()
            .unwrap();
        assert!(value_box_style(&config).stroke.is_none());
    }
}
