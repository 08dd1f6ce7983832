//! Gauge layout calculator.
//!
//! Pure geometry: turns a configuration and a value into center, radii,
//! segment sweeps, tick positions and pointer rotation. Both rendering
//! backends consume these results; neither does its own trigonometry.

use crate::frame::{arc_point, frame_angle, screen_angle, LocalFrame};
use crate::scale::LinearScale;
use crate::types::{
    EndLabel, GaugeLayout, PointerPosition, RingLayout, SegmentData, TickData, ValueBoxLayout,
};
use dialkit_config::{GaugeConfig, LabelPosition};
use dialkit_core::{Point, Rect, Size};
use std::f64::consts::PI;
use std::sync::Arc;
use tracing::trace;

/// Radius of inner tick labels as a fraction of the body ring's inner radius.
pub const INNER_LABEL_RADIUS_RATIO: f64 = 0.8;

/// Downward nudge of inner tick labels as a fraction of their font size.
pub const INNER_LABEL_NUDGE_RATIO: f64 = 0.5;

/// Font size assumed for inner tick labels configured with size 0.
pub const DEFAULT_TICK_LABEL_FONT_SIZE: f64 = 10.0;

/// Compute center and ring radii for a configuration.
#[must_use]
pub fn calculate_base_layout(config: &GaugeConfig) -> GaugeLayout {
    let ratio = &config.layout.base_radius_ratio;
    let base_radius = config.width.min(config.height * ratio.min_height_ratio) / ratio.divider;

    GaugeLayout {
        center_x: config.width / 2.0,
        center_y: config.height * config.layout.center_y_ratio,
        base_radius,
        gauge: RingLayout::new(
            base_radius * config.gauge.inner_radius_ratio,
            base_radius * config.gauge.outer_radius_ratio,
        ),
        background: RingLayout::new(
            base_radius * config.background.inner_radius_ratio,
            base_radius * config.background.outer_radius_ratio,
        ),
    }
}

/// Format a value the way it appears in labels (`50`, `12.5`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{value}")
}

/// Convert a value angle (radians) to pointer rotation degrees.
#[must_use]
pub fn angle_to_degrees(angle: f64) -> f64 {
    (angle / PI - 1.0) * 180.0
}

/// Geometry calculator bound to one configuration.
#[derive(Debug, Clone)]
pub struct GaugeLayoutCalculator {
    config: Arc<GaugeConfig>,
    layout: GaugeLayout,
    scale: LinearScale,
}

impl GaugeLayoutCalculator {
    /// Create a calculator for a configuration.
    #[must_use]
    pub fn new(config: Arc<GaugeConfig>) -> Self {
        let layout = calculate_base_layout(&config);
        let scale = Self::angle_scale(&config);
        Self {
            config,
            layout,
            scale,
        }
    }

    /// Create a calculator around a layout computed elsewhere.
    #[must_use]
    pub fn with_layout(config: Arc<GaugeConfig>, layout: GaugeLayout) -> Self {
        let scale = Self::angle_scale(&config);
        Self {
            config,
            layout,
            scale,
        }
    }

    fn angle_scale(config: &GaugeConfig) -> LinearScale {
        LinearScale::new((config.range.min, config.range.max), (0.0, PI))
    }

    /// Replace the configuration and recompute layout and scale.
    pub fn update_config(&mut self, config: Arc<GaugeConfig>) {
        self.layout = calculate_base_layout(&config);
        self.scale = Self::angle_scale(&config);
        self.config = config;
        trace!(base_radius = self.layout.base_radius, "layout recomputed");
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &Arc<GaugeConfig> {
        &self.config
    }

    /// Current layout snapshot.
    #[must_use]
    pub const fn layout(&self) -> &GaugeLayout {
        &self.layout
    }

    /// Ring frame anchored at the gauge center.
    #[must_use]
    pub fn frame(&self) -> LocalFrame {
        LocalFrame::new(self.layout.center())
    }

    /// Compute the base layout for the current configuration.
    #[must_use]
    pub fn calculate_base_layout(&self) -> GaugeLayout {
        calculate_base_layout(&self.config)
    }

    /// Map a value linearly onto `[0, π]`. Out-of-range values extrapolate.
    #[must_use]
    pub fn value_to_angle(&self, value: f64) -> f64 {
        self.scale.apply(value)
    }

    /// Segments annotated with their sweep and midpoint.
    #[must_use]
    pub fn calculate_segments(&self) -> Vec<SegmentData> {
        self.config
            .segments
            .iter()
            .map(|segment| SegmentData {
                min: segment.min,
                max: segment.max,
                color: segment.color,
                label: segment.label.clone(),
                value: segment.midpoint(),
                start_angle: self.value_to_angle(segment.min),
                end_angle: self.value_to_angle(segment.max),
            })
            .collect()
    }

    /// Angles of the separators between segments (every start but the first).
    #[must_use]
    pub fn separator_angles(segments: &[SegmentData]) -> Vec<f64> {
        segments.iter().skip(1).map(|s| s.start_angle).collect()
    }

    /// `count + 1` evenly spaced ticks, or none when both tick lines and
    /// tick labels are hidden.
    #[must_use]
    pub fn calculate_ticks(&self) -> Vec<TickData> {
        let ticks = &self.config.ticks;
        if !ticks.show && !ticks.label.show {
            return Vec::new();
        }

        let range = &self.config.range;
        let outer = self.layout.gauge.outer_radius;
        (0..=ticks.count)
            .map(|i| {
                let value = range.span() * f64::from(i) / f64::from(ticks.count) + range.min;
                let angle = self.value_to_angle(value);
                let is_main = i % ticks.main_tick_every == 0;
                let end = arc_point(outer, angle);
                let label = (is_main && ticks.label.show).then(|| self.tick_label_position(angle));
                TickData {
                    value,
                    angle: frame_angle(angle),
                    is_main,
                    x: end.x,
                    y: end.y,
                    label_x: label.map(|p| p.x),
                    label_y: label.map(|p| p.y),
                }
            })
            .collect()
    }

    fn tick_label_position(&self, angle: f64) -> Point {
        let label = &self.config.ticks.label;
        match label.position {
            LabelPosition::Inner => {
                let radius = self.layout.gauge.inner_radius * INNER_LABEL_RADIUS_RATIO;
                let font_size = if label.font_size > 0.0 {
                    label.font_size
                } else {
                    DEFAULT_TICK_LABEL_FONT_SIZE
                };
                Point::polar(radius, screen_angle(angle))
                    .offset(0.0, font_size * INNER_LABEL_NUDGE_RATIO)
            }
            LabelPosition::Outer => arc_point(self.layout.gauge.outer_radius + label.offset, angle),
        }
    }

    /// Inner end of a tick line, in the ring frame.
    #[must_use]
    pub fn tick_inner_end(&self, tick: &TickData) -> Point {
        let ticks = &self.config.ticks;
        let length = if tick.is_main {
            ticks.main_length
        } else {
            ticks.length
        };
        Point::polar(self.layout.gauge.outer_radius - length, tick.angle)
    }

    /// Pointer tip and rotation for a value.
    #[must_use]
    pub fn calculate_pointer_position(&self, value: f64) -> PointerPosition {
        let angle = self.value_to_angle(value);
        let tip = self.layout.center() + Point::polar(self.pointer_length(), screen_angle(angle));
        PointerPosition {
            x: tip.x,
            y: tip.y,
            angle: angle_to_degrees(angle),
        }
    }

    /// Length of the line pointer.
    #[must_use]
    pub fn pointer_length(&self) -> f64 {
        self.layout.gauge.inner_radius * self.config.pointer.length
    }

    /// Translation applied before rotating the image pointer.
    ///
    /// Zero unless the image starts at the background ring's inner edge, in
    /// which case it is that radius along the pointer direction. Recomputed
    /// from the interpolated angle on every animation frame so the image
    /// base follows the arc.
    #[must_use]
    pub fn pointer_image_offset(&self, angle_degrees: f64) -> Point {
        if self.config.pointer.from_inner_edge {
            Point::polar(self.layout.background.inner_radius, angle_degrees.to_radians())
        } else {
            Point::ORIGIN
        }
    }

    /// Image pointer placement relative to its pivot, before rotation.
    #[must_use]
    pub fn pointer_image_bounds(&self, natural: Option<Size>) -> Rect {
        let image = &self.config.pointer.image;
        let size = dialkit_core::image::resolve_image_size(image.size(), natural);
        Rect::new(image.offset_x, image.offset_y, size.width, size.height)
    }

    /// Start and end labels near the two ends of the arc.
    #[must_use]
    pub fn end_label_positions(&self) -> [EndLabel; 2] {
        let labels = &self.config.labels;
        let radius = match labels.position {
            LabelPosition::Inner => self.layout.gauge.inner_radius - labels.offset,
            LabelPosition::Outer => self.layout.gauge.outer_radius + labels.offset,
        };
        let center = self.layout.center();
        let start = PI * (1.0 + labels.angle_offset);
        let end = -PI * labels.angle_offset;
        [
            EndLabel {
                text: labels.start_label.clone(),
                position: center + Point::polar(radius, start),
            },
            EndLabel {
                text: labels.end_label.clone(),
                position: center + Point::polar(radius, end),
            },
        ]
    }

    /// Value box geometry for a value text of `text_width` pixels.
    #[must_use]
    pub fn value_box_layout(&self, text_width: f64) -> ValueBoxLayout {
        let value_box = &self.config.value_box;
        let font_size = self.config.text.font_size;
        let anchor = self.layout.center().offset(0.0, value_box.offset_y);
        let size = Size::new(
            value_box.padding_x.mul_add(value_box.padding_multiplier, text_width),
            value_box.padding_y.mul_add(value_box.padding_multiplier, font_size),
        );
        ValueBoxLayout {
            anchor,
            bounds: Rect::centered(anchor, size),
            label_anchor: anchor.offset(0.0, font_size + value_box.label_offset_y),
        }
    }
}
