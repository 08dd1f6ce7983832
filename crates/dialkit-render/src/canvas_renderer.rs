//! Immediate-mode renderer over a [`Canvas`].
//!
//! Render calls only record what the frame contains; [`GaugeRenderer::present`]
//! clears the surface and repaints every layer, so partial updates never
//! leave stale pixels behind.

use crate::animator::{Animator, PointerState};
use crate::readout::Readout;
use crate::scene::{compose, TransformOp};
use crate::{shapes, style, GaugeRenderer};
use dialkit_config::{GaugeConfig, GaugeData, LabelPosition, PointerKind, RingConfig};
use dialkit_core::{Canvas, Point, ShapeStyle, Size, Transform2D};
use dialkit_layout::{
    format_value, GaugeLayout, GaugeLayoutCalculator, PointerPosition, RingLayout, SegmentData,
    TickData, FRAME_ROTATION_DEGREES,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// What the next repaint draws.
#[derive(Debug, Clone, Default)]
struct Frame {
    background: bool,
    gauge_base: bool,
    segments: Vec<SegmentData>,
    ticks: Vec<TickData>,
    end_labels: bool,
    pointer: bool,
    value: Option<GaugeData>,
}

/// Renderer repainting a [`Canvas`] on every [`present`](GaugeRenderer::present).
#[derive(Debug)]
pub struct CanvasRenderer<C: Canvas> {
    canvas: C,
    geometry: GaugeLayoutCalculator,
    size: Size,
    frame: Frame,
    animator: Animator,
    pointer: PointerState,
    pointer_image_size: Option<Size>,
}

impl<C: Canvas> CanvasRenderer<C> {
    /// Create a renderer drawing onto `canvas`.
    #[must_use]
    pub fn new(canvas: C, config: Arc<GaugeConfig>, layout: GaugeLayout) -> Self {
        Self {
            canvas,
            size: config.size(),
            animator: Animator::new(config.animation.clone()),
            geometry: GaugeLayoutCalculator::with_layout(config, layout),
            frame: Frame::default(),
            pointer: PointerState::default(),
            pointer_image_size: None,
        }
    }

    /// The drawing surface.
    #[must_use]
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutable drawing surface.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give the surface back.
    #[must_use]
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        self.geometry.config()
    }

    /// Surface size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Natural size of the pointer image once it has loaded.
    pub fn set_pointer_image_size(&mut self, size: Option<Size>) {
        self.pointer_image_size = size;
    }

    fn frame_transform(&self) -> Transform2D {
        let center = self.geometry.layout().center();
        compose(&[
            TransformOp::Translate(center.x, center.y),
            TransformOp::Rotate(FRAME_ROTATION_DEGREES),
        ])
    }

    fn paint_ring(&mut self, ring: &RingConfig, layout: &RingLayout) {
        self.canvas
            .draw_path(&shapes::ring_path(layout), &style::ring_fill(ring, layout));
        if let Some(border) = style::ring_border(ring) {
            for outline in shapes::ring_outlines(layout) {
                self.canvas.draw_path(&outline, &border);
            }
        }
    }

    fn paint_rotated_layers(&mut self, config: &GaugeConfig) {
        let layout = *self.geometry.layout();
        self.canvas.push_transform(self.frame_transform());

        if self.frame.background && config.background.show {
            self.paint_ring(&config.background, &layout.background);
        }
        if self.frame.gauge_base && config.gauge.show {
            self.paint_ring(&config.gauge, &layout.gauge);
        }

        for segment in &self.frame.segments {
            self.canvas.draw_path(
                &shapes::segment_path(&layout.gauge, segment),
                &ShapeStyle::fill(segment.color),
            );
        }
        let separator = style::separator_stroke();
        for angle in GaugeLayoutCalculator::separator_angles(&self.frame.segments) {
            let (from, to) = shapes::separator(&layout.gauge, angle);
            self.canvas.draw_line(from, to, &separator, None);
        }

        if config.ticks.show {
            for tick in &self.frame.ticks {
                let stroke = style::tick_stroke(config, tick.is_main);
                let inner = self.geometry.tick_inner_end(tick);
                self.canvas.draw_line(tick.outer_end(), inner, &stroke, None);
            }
        }
        if config.ticks.label.position == LabelPosition::Outer {
            self.paint_tick_labels(config, Point::ORIGIN);
        }

        self.canvas.pop_transform();

        if config.ticks.label.position == LabelPosition::Inner {
            self.paint_tick_labels(config, layout.center());
        }
    }

    fn paint_tick_labels(&mut self, config: &GaugeConfig, origin: Point) {
        if !config.ticks.label.show {
            return;
        }
        let text_style = style::tick_label_style(config);
        for tick in &self.frame.ticks {
            if let Some(position) = tick.label_position() {
                self.canvas
                    .draw_text(&format_value(tick.value), origin + position, &text_style);
            }
        }
    }

    fn paint_end_labels(&mut self, config: &GaugeConfig) {
        if !self.frame.end_labels || !config.labels.show {
            return;
        }
        let text_style = style::end_label_style(config);
        for label in self.geometry.end_label_positions() {
            self.canvas.draw_text(&label.text, label.position, &text_style);
        }
    }

    fn paint_pointer(&mut self, config: &GaugeConfig) {
        if !self.frame.pointer {
            return;
        }
        let center = self.geometry.layout().center();
        let shadow = config.pointer.shadow.to_shadow();
        let rotation = compose(&shapes::pointer_transform(
            &self.geometry,
            self.pointer.current_angle(),
        ));

        self.canvas
            .push_transform(Transform2D::translate(center.x, center.y));
        self.canvas.push_transform(rotation);
        match config.pointer.kind {
            PointerKind::Line => self.canvas.draw_line(
                Point::ORIGIN,
                Point::new(self.geometry.pointer_length(), 0.0),
                &style::pointer_stroke(config),
                shadow.as_ref(),
            ),
            PointerKind::Image => {
                let bounds = self.geometry.pointer_image_bounds(self.pointer_image_size);
                self.canvas
                    .draw_image(&config.pointer.image.src, bounds, shadow.as_ref());
            }
        }
        self.canvas.pop_transform();

        if config.pointer.kind == PointerKind::Line {
            self.canvas.draw_circle(
                Point::ORIGIN,
                config.center_circle.radius,
                &style::hub_style(config),
            );
        }
        self.canvas.pop_transform();
    }

    fn paint_value(&mut self, config: &GaugeConfig) {
        let Some(data) = &self.frame.value else {
            return;
        };
        let readout = Readout::new(config, data);
        let value_style = style::value_text_style(config);
        let width = self.canvas.measure_text(&readout.value, &value_style);
        let layout = self.geometry.value_box_layout(width);

        self.canvas
            .draw_rect(layout.bounds, &style::value_box_style(config));
        self.canvas
            .draw_text(&readout.value, layout.anchor, &value_style);
        if let Some(label) = &readout.label {
            self.canvas.draw_text(
                label,
                layout.label_anchor,
                &style::value_label_style(config, readout.label_color),
            );
        }
    }
}

impl<C: Canvas> GaugeRenderer for CanvasRenderer<C> {
    fn render_background(&mut self) {
        self.frame.background = true;
    }

    fn render_gauge_base(&mut self) {
        self.frame.gauge_base = true;
    }

    fn render_segments(&mut self, segments: &[SegmentData]) {
        self.frame.segments = segments.to_vec();
    }

    fn render_ticks(&mut self, ticks: &[TickData]) {
        self.frame.ticks = ticks.to_vec();
    }

    fn render_end_labels(&mut self) {
        self.frame.end_labels = true;
    }

    fn render_pointer(&mut self, pointer: &PointerPosition) {
        self.pointer.set_immediately(pointer.angle);
        self.frame.pointer = true;
    }

    fn render_value_text(&mut self, data: &GaugeData) {
        self.frame.value = Some(data.clone());
    }

    fn update_pointer(&mut self, pointer: &PointerPosition) {
        self.animator.animate_pointer(&mut self.pointer, pointer.angle);
        self.frame.pointer = true;
    }

    fn update_value_text(&mut self, data: &GaugeData) {
        self.frame.value = Some(data.clone());
    }

    fn clear(&mut self) {
        self.frame = Frame::default();
        self.canvas.clear(self.size);
    }

    fn update(&mut self, config: Arc<GaugeConfig>, layout: GaugeLayout) {
        debug!(
            width = config.width,
            height = config.height,
            "canvas renderer reconfigured"
        );
        self.animator.set_config(config.animation.clone());
        self.size = config.size();
        self.geometry = GaugeLayoutCalculator::with_layout(config, layout);
        self.clear();
    }

    fn resize_surface(&mut self, size: Size) {
        self.size = size;
    }

    fn present(&mut self) {
        let config = Arc::clone(self.geometry.config());
        self.canvas.clear(self.size);
        self.paint_rotated_layers(&config);
        self.paint_end_labels(&config);
        self.paint_pointer(&config);
        self.paint_value(&config);
        trace!(angle = self.pointer.current_angle(), "canvas frame presented");
    }

    fn advance(&mut self, dt: f64) -> bool {
        self.animator.advance(&mut self.pointer, dt)
    }

    fn is_animating(&self) -> bool {
        self.pointer.is_animating()
    }

    fn pointer_angle(&self) -> f64 {
        self.pointer.current_angle()
    }
}
