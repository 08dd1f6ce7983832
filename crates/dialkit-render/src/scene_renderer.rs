//! Retained-mode renderer over a [`Scene`].

use crate::animator::{Animator, PointerState};
use crate::readout::Readout;
use crate::scene::{Element, NodeId, Scene, TransformOp};
use crate::{shapes, style, GaugeRenderer};
use dialkit_config::{GaugeConfig, GaugeData, LabelPosition, PointerKind};
use dialkit_core::draw::estimate_text_width;
use dialkit_core::{Point, ShapeStyle, Size};
use dialkit_layout::{
    GaugeLayout, GaugeLayoutCalculator, PointerPosition, SegmentData, TickData,
    FRAME_ROTATION_DEGREES,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Node classes used by [`SceneRenderer`].
pub mod class {
    /// Background ring group (rotated)
    pub const BACKGROUND_GROUP: &str = "gauge-background";
    /// Body group (rotated)
    pub const BODY_GROUP: &str = "gauge-main";
    /// Pointer group (translated only)
    pub const POINTER_GROUP: &str = "gauge-pointer";
    /// Label group (rotated)
    pub const LABELS_GROUP: &str = "gauge-labels";
    /// Background ring fill
    pub const BACKGROUND: &str = "background";
    /// Background ring borders
    pub const BACKGROUND_BORDER: &str = "background-border";
    /// Body ring fill
    pub const GAUGE_BASE: &str = "gauge-base";
    /// Body ring borders
    pub const GAUGE_BORDER: &str = "gauge-border";
    /// Segment slice
    pub const SEGMENT: &str = "segment";
    /// Line between two segments
    pub const SEPARATOR: &str = "segment-separator";
    /// Tick line
    pub const TICK_LINE: &str = "tick-line";
    /// Tick value label
    pub const TICK_LABEL: &str = "tick-label";
    /// Start/end label
    pub const END_LABEL: &str = "end-label";
    /// Pointer line or image
    pub const POINTER: &str = "pointer";
    /// Hub over the line pointer's pivot
    pub const CENTER_CIRCLE: &str = "center-circle";
    /// Value read-out group
    pub const VALUE_GROUP: &str = "value-group";
    /// Box behind the value
    pub const VALUE_BOX: &str = "value-box";
    /// Value text
    pub const VALUE_TEXT: &str = "value-text";
    /// Caption under the value
    pub const VALUE_LABEL: &str = "value-label";
}

#[derive(Debug, Clone, Copy)]
struct Groups {
    background: NodeId,
    body: NodeId,
    pointer: NodeId,
    labels: NodeId,
}

/// Renderer keeping a retained [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    geometry: GaugeLayoutCalculator,
    scene: Scene,
    groups: Option<Groups>,
    animator: Animator,
    pointer: PointerState,
    pointer_image_size: Option<Size>,
}

impl SceneRenderer {
    /// Create a renderer with an empty, grouped scene.
    #[must_use]
    pub fn new(config: Arc<GaugeConfig>, layout: GaugeLayout) -> Self {
        let animator = Animator::new(config.animation.clone());
        let scene = Scene::new(config.size());
        let mut renderer = Self {
            geometry: GaugeLayoutCalculator::with_layout(config, layout),
            scene,
            groups: None,
            animator,
            pointer: PointerState::default(),
            pointer_image_size: None,
        };
        renderer.groups();
        renderer
    }

    /// The retained scene.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        self.geometry.config()
    }

    /// Natural size of the pointer image once known. Unset sizes fall back
    /// to the configured footprint.
    pub fn set_pointer_image_size(&mut self, size: Option<Size>) {
        self.pointer_image_size = size;
        let Some(groups) = self.groups else {
            return;
        };
        let placed = self.geometry.pointer_image_bounds(size);
        for id in self.scene.select(groups.pointer, class::POINTER) {
            if let Some(Element::Image { bounds, .. }) =
                self.scene.node_mut(id).map(|node| &mut node.element)
            {
                *bounds = placed;
            }
        }
    }

    /// Standalone SVG document of the current scene.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.scene.to_svg()
    }

    fn groups(&mut self) -> Groups {
        if let Some(groups) = self.groups {
            if self.scene.node(groups.labels).is_some() {
                return groups;
            }
        }

        let center = self.geometry.layout().center();
        let base = vec![TransformOp::Translate(center.x, center.y)];
        let rotated = vec![
            TransformOp::Translate(center.x, center.y),
            TransformOp::Rotate(FRAME_ROTATION_DEGREES),
        ];
        let root = self.scene.root();
        let mut group = |class: &str, transform: &[TransformOp]| {
            let id = self.scene.append(root, class, Element::Group);
            self.scene.set_transform(id, transform.to_vec());
            id
        };
        let groups = Groups {
            background: group(class::BACKGROUND_GROUP, &rotated),
            body: group(class::BODY_GROUP, &rotated),
            pointer: group(class::POINTER_GROUP, &base),
            labels: group(class::LABELS_GROUP, &rotated),
        };
        self.groups = Some(groups);
        groups
    }

    fn config_arc(&self) -> Arc<GaugeConfig> {
        Arc::clone(self.geometry.config())
    }

    fn ring_elements(
        ring: &dialkit_config::RingConfig,
        layout: &dialkit_layout::RingLayout,
    ) -> (Element, Vec<Element>) {
        let fill = Element::Path {
            path: shapes::ring_path(layout),
            style: style::ring_fill(ring, layout),
        };
        let borders = style::ring_border(ring).map_or_else(Vec::new, |border| {
            shapes::ring_outlines(layout)
                .into_iter()
                .map(|path| Element::Path {
                    path,
                    style: border.clone(),
                })
                .collect()
        });
        (fill, borders)
    }

    fn apply_pointer_transform(&mut self) {
        let Some(groups) = self.groups else {
            return;
        };
        let transform = shapes::pointer_transform(&self.geometry, self.pointer.current_angle());
        for id in self.scene.select(groups.pointer, class::POINTER) {
            self.scene.set_transform(id, transform.clone());
        }
    }

    fn value_text_width(&self, readout: &Readout) -> f64 {
        estimate_text_width(&readout.value, self.config().text.font_size)
    }
}

impl GaugeRenderer for SceneRenderer {
    fn render_background(&mut self) {
        let groups = self.groups();
        let config = self.config_arc();
        if !config.background.show {
            self.scene.remove_children(groups.background, class::BACKGROUND);
            self.scene.remove_children(groups.background, class::BACKGROUND_BORDER);
            return;
        }
        let (fill, borders) =
            Self::ring_elements(&config.background, &self.geometry.layout().background);
        self.scene.join(groups.background, class::BACKGROUND, vec![fill]);
        self.scene.join(groups.background, class::BACKGROUND_BORDER, borders);
    }

    fn render_gauge_base(&mut self) {
        let groups = self.groups();
        let config = self.config_arc();
        if !config.gauge.show {
            self.scene.remove_children(groups.body, class::GAUGE_BASE);
            self.scene.remove_children(groups.body, class::GAUGE_BORDER);
            return;
        }
        let (fill, borders) = Self::ring_elements(&config.gauge, &self.geometry.layout().gauge);
        self.scene.join(groups.body, class::GAUGE_BASE, vec![fill]);
        self.scene.join(groups.body, class::GAUGE_BORDER, borders);
    }

    fn render_segments(&mut self, segments: &[SegmentData]) {
        let groups = self.groups();
        let ring = self.geometry.layout().gauge;
        let slices = segments
            .iter()
            .map(|segment| Element::Path {
                path: shapes::segment_path(&ring, segment),
                style: ShapeStyle::fill(segment.color),
            })
            .collect();
        self.scene.join(groups.body, class::SEGMENT, slices);

        let separators = GaugeLayoutCalculator::separator_angles(segments)
            .into_iter()
            .map(|angle| {
                let (from, to) = shapes::separator(&ring, angle);
                Element::Line {
                    from,
                    to,
                    stroke: style::separator_stroke(),
                }
            })
            .collect();
        self.scene.join(groups.body, class::SEPARATOR, separators);
        trace!(count = segments.len(), "segments rendered");
    }

    fn render_ticks(&mut self, ticks: &[TickData]) {
        let groups = self.groups();
        let config = self.config_arc();

        if config.ticks.show {
            let lines = ticks
                .iter()
                .map(|tick| Element::Line {
                    from: tick.outer_end(),
                    to: self.geometry.tick_inner_end(tick),
                    stroke: style::tick_stroke(&config, tick.is_main),
                })
                .collect();
            self.scene.join(groups.body, class::TICK_LINE, lines);
        } else {
            self.scene.remove_all(class::TICK_LINE);
        }

        self.scene.remove_all(class::TICK_LABEL);
        if config.ticks.label.show {
            let (parent, origin) = match config.ticks.label.position {
                LabelPosition::Inner => (self.scene.root(), self.geometry.layout().center()),
                LabelPosition::Outer => (groups.body, Point::ORIGIN),
            };
            let text_style = style::tick_label_style(&config);
            let labels = ticks
                .iter()
                .filter_map(|tick| {
                    tick.label_position().map(|position| Element::Text {
                        content: dialkit_layout::format_value(tick.value),
                        position: origin + position,
                        style: text_style.clone(),
                    })
                })
                .collect();
            self.scene.join(parent, class::TICK_LABEL, labels);
        }
    }

    fn render_end_labels(&mut self) {
        let config = self.config_arc();
        self.scene.remove_all(class::END_LABEL);
        if !config.labels.show {
            return;
        }
        let text_style = style::end_label_style(&config);
        let labels = self
            .geometry
            .end_label_positions()
            .into_iter()
            .map(|label| Element::Text {
                content: label.text,
                position: label.position,
                style: text_style.clone(),
            })
            .collect();
        let root = self.scene.root();
        self.scene.join(root, class::END_LABEL, labels);
    }

    fn render_pointer(&mut self, pointer: &PointerPosition) {
        let groups = self.groups();
        let config = self.config_arc();
        self.pointer.set_immediately(pointer.angle);
        self.scene.remove_children(groups.pointer, class::POINTER);
        self.scene.remove_children(groups.pointer, class::CENTER_CIRCLE);

        let element = match config.pointer.kind {
            PointerKind::Line => Element::Line {
                from: Point::ORIGIN,
                to: Point::new(self.geometry.pointer_length(), 0.0),
                stroke: style::pointer_stroke(&config),
            },
            PointerKind::Image => Element::Image {
                href: config.pointer.image.src.clone(),
                bounds: self.geometry.pointer_image_bounds(self.pointer_image_size),
            },
        };
        let id = self.scene.append(groups.pointer, class::POINTER, element);
        self.scene.set_shadow(id, config.pointer.shadow.to_shadow());
        self.apply_pointer_transform();

        if config.pointer.kind == PointerKind::Line {
            self.scene.append(
                groups.pointer,
                class::CENTER_CIRCLE,
                Element::Circle {
                    center: Point::ORIGIN,
                    radius: config.center_circle.radius,
                    style: style::hub_style(&config),
                },
            );
        }
    }

    fn render_value_text(&mut self, data: &GaugeData) {
        let config = self.config_arc();
        let readout = Readout::new(&config, data);
        let layout = self.geometry.value_box_layout(self.value_text_width(&readout));
        let anchor = layout.anchor;

        self.scene.remove_all(class::VALUE_GROUP);
        let root = self.scene.root();
        let group = self.scene.append(root, class::VALUE_GROUP, Element::Group);
        self.scene
            .set_transform(group, vec![TransformOp::Translate(anchor.x, anchor.y)]);

        let mut bounds = layout.bounds;
        bounds.x -= anchor.x;
        bounds.y -= anchor.y;
        self.scene.append(
            group,
            class::VALUE_BOX,
            Element::Rect {
                bounds,
                style: style::value_box_style(&config),
            },
        );
        self.scene.append(
            group,
            class::VALUE_TEXT,
            Element::Text {
                content: readout.value,
                position: Point::ORIGIN,
                style: style::value_text_style(&config),
            },
        );
        if let Some(label) = readout.label {
            self.scene.append(
                group,
                class::VALUE_LABEL,
                Element::Text {
                    content: label,
                    position: layout.label_anchor - anchor,
                    style: style::value_label_style(&config, readout.label_color),
                },
            );
        }
    }

    fn update_pointer(&mut self, pointer: &PointerPosition) {
        let animating = self.animator.animate_pointer(&mut self.pointer, pointer.angle);
        if !animating {
            self.apply_pointer_transform();
        }
    }

    fn update_value_text(&mut self, data: &GaugeData) {
        let config = self.config_arc();
        let readout = Readout::new(&config, data);
        let Some(group) = self.scene.find(class::VALUE_GROUP) else {
            self.render_value_text(data);
            return;
        };

        for id in self.scene.select(group, class::VALUE_TEXT) {
            if let Some(node) = self.scene.node_mut(id) {
                if let Element::Text { content, .. } = &mut node.element {
                    content.clone_from(&readout.value);
                }
            }
        }

        let labels = self.scene.select(group, class::VALUE_LABEL);
        match (labels.first().copied(), readout.label) {
            (Some(id), Some(label)) => {
                if let Some(node) = self.scene.node_mut(id) {
                    if let Element::Text { content, style, .. } = &mut node.element {
                        *content = label;
                        style.color = readout.label_color;
                    }
                }
            }
            (Some(id), None) => self.scene.remove(id),
            (None, Some(label)) => {
                let anchor = self.geometry.value_box_layout(0.0);
                self.scene.append(
                    group,
                    class::VALUE_LABEL,
                    Element::Text {
                        content: label,
                        position: anchor.label_anchor - anchor.anchor,
                        style: style::value_label_style(&config, readout.label_color),
                    },
                );
            }
            (None, None) => {}
        }
    }

    fn clear(&mut self) {
        self.scene.clear();
        self.groups = None;
    }

    fn update(&mut self, config: Arc<GaugeConfig>, layout: GaugeLayout) {
        debug!(
            width = config.width,
            height = config.height,
            "scene renderer reconfigured"
        );
        self.animator.set_config(config.animation.clone());
        self.scene.set_size(config.size());
        self.geometry = GaugeLayoutCalculator::with_layout(config, layout);
        self.clear();
        self.groups();
    }

    fn resize_surface(&mut self, size: Size) {
        self.scene.set_size(size);
    }

    fn advance(&mut self, dt: f64) -> bool {
        if !self.pointer.is_animating() {
            return false;
        }
        let running = self.animator.advance(&mut self.pointer, dt);
        self.apply_pointer_transform();
        running
    }

    fn is_animating(&self) -> bool {
        self.pointer.is_animating()
    }

    fn pointer_angle(&self) -> f64 {
        self.pointer.current_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_config::GaugeOptions;

    fn renderer_for(options: &GaugeOptions) -> (SceneRenderer, GaugeLayoutCalculator) {
        let calc = GaugeLayoutCalculator::new(Arc::new(options.resolve().unwrap()));
        let renderer = SceneRenderer::new(Arc::clone(calc.config()), *calc.layout());
        (renderer, calc)
    }

    fn render_all(renderer: &mut SceneRenderer, calc: &GaugeLayoutCalculator, value: f64) {
        renderer.update(Arc::clone(calc.config()), *calc.layout());
        renderer.render_background();
        renderer.render_gauge_base();
        renderer.render_segments(&calc.calculate_segments());
        renderer.render_ticks(&calc.calculate_ticks());
        renderer.render_end_labels();
        renderer.render_pointer(&calc.calculate_pointer_position(value));
        renderer.render_value_text(&GaugeData::new(value));
    }

    fn count(renderer: &SceneRenderer, class: &str) -> usize {
        renderer.scene().select_all(class).len()
    }

    fn text_of(renderer: &SceneRenderer, class: &str) -> Option<String> {
        let id = renderer.scene().find(class)?;
        renderer.scene().node(id)?.text().map(str::to_string)
    }

    // =========================================================================
    // Structure Tests
    // =========================================================================

    #[test]
    fn test_four_groups_with_frame_transforms() {
        let (renderer, _) = renderer_for(&GaugeOptions::new());
        let scene = renderer.scene();
        let body = scene.find(class::BODY_GROUP).unwrap();
        assert_eq!(
            scene.node(body).unwrap().transform,
            vec![TransformOp::Translate(200.0, 195.0), TransformOp::Rotate(-90.0)]
        );
        let pointer = scene.find(class::POINTER_GROUP).unwrap();
        assert_eq!(
            scene.node(pointer).unwrap().transform,
            vec![TransformOp::Translate(200.0, 195.0)]
        );
        assert!(scene.find(class::BACKGROUND_GROUP).is_some());
        assert!(scene.find(class::LABELS_GROUP).is_some());
    }

    #[test]
    fn test_full_render_contents() {
        let (mut renderer, calc) = renderer_for(&GaugeOptions::new());
        render_all(&mut renderer, &calc, 50.0);
        assert_eq!(count(&renderer, class::SEGMENT), 5);
        assert_eq!(count(&renderer, class::SEPARATOR), 4);
        assert_eq!(count(&renderer, class::END_LABEL), 2);
        assert_eq!(count(&renderer, class::TICK_LINE), 0);
        // default: labels on the main ticks at 0 and 100
        assert_eq!(count(&renderer, class::TICK_LABEL), 2);
        assert_eq!(count(&renderer, class::POINTER), 1);
        assert_eq!(count(&renderer, class::CENTER_CIRCLE), 0);
        assert_eq!(text_of(&renderer, class::VALUE_TEXT).as_deref(), Some("50"));
        assert_eq!(text_of(&renderer, class::VALUE_LABEL).as_deref(), Some("Neutral"));
    }

    #[test]
    fn test_line_pointer_has_hub_and_rotation() {
        let options = GaugeOptions::from_json(r#"{"pointer": {"type": "line"}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&options);
        render_all(&mut renderer, &calc, 25.0);
        assert_eq!(count(&renderer, class::CENTER_CIRCLE), 1);
        let pointer = renderer.scene().find(class::POINTER).unwrap();
        assert_eq!(
            renderer.scene().node(pointer).unwrap().transform,
            vec![TransformOp::Rotate(-135.0)]
        );
    }

    #[test]
    fn test_line_pointer_tip_on_screen() {
        let options = GaugeOptions::from_json(r#"{"pointer": {"type": "line"}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&options);
        render_all(&mut renderer, &calc, 70.0);
        let scene = renderer.scene();
        let id = scene.find(class::POINTER).unwrap();
        let Element::Line { to, .. } = &scene.node(id).unwrap().element else {
            panic!("line pointer expected");
        };
        let tip = scene.world_transform(id).apply(*to);
        let expected = calc.calculate_pointer_position(70.0);
        assert!((tip.x - expected.x).abs() < 1e-9);
        assert!((tip.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn test_image_pointer_rotation_offset() {
        let (mut renderer, calc) = renderer_for(&GaugeOptions::new());
        render_all(&mut renderer, &calc, 50.0);
        let pointer = renderer.scene().find(class::POINTER).unwrap();
        let node = renderer.scene().node(pointer).unwrap();
        assert_eq!(node.transform, vec![TransformOp::Rotate(0.0)]);
        assert!(node.shadow.is_some());
    }

    #[test]
    fn test_image_pointer_from_inner_edge_translates() {
        let options =
            GaugeOptions::from_json(r#"{"pointer": {"fromInnerEdge": true}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&options);
        render_all(&mut renderer, &calc, 0.0);
        let pointer = renderer.scene().find(class::POINTER).unwrap();
        let transform = &renderer.scene().node(pointer).unwrap().transform;
        match transform.as_slice() {
            [TransformOp::Translate(x, y), TransformOp::Rotate(r)] => {
                assert!((x + 60.0).abs() < 1e-9);
                assert!(y.abs() < 1e-9);
                assert_eq!(*r, -90.0);
            }
            other => panic!("unexpected transform {other:?}"),
        }
    }

    #[test]
    fn test_natural_image_size_applies_when_unsized() {
        let options =
            GaugeOptions::from_json(r#"{"pointer": {"image": {"width": 0, "height": 0}}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&options);
        render_all(&mut renderer, &calc, 50.0);
        renderer.set_pointer_image_size(Some(Size::new(16.0, 90.0)));
        let pointer = renderer.scene().find(class::POINTER).unwrap();
        let Element::Image { bounds, .. } = &renderer.scene().node(pointer).unwrap().element else {
            panic!("image pointer expected");
        };
        assert_eq!(bounds.width, 16.0);
        assert_eq!(bounds.height, 90.0);
    }

    // =========================================================================
    // Toggle Tests
    // =========================================================================

    #[test]
    fn test_disabling_ticks_removes_stale_lines() {
        let shown = GaugeOptions::from_json(r#"{"ticks": {"show": true}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&shown);
        render_all(&mut renderer, &calc, 10.0);
        assert_eq!(count(&renderer, class::TICK_LINE), 11);

        let hidden = GaugeOptions::from_json(r#"{"ticks": {"show": false, "label": {"show": false}}}"#)
            .unwrap()
            .merge_onto(calc.config())
            .unwrap();
        let mut calc_hidden = calc.clone();
        calc_hidden.update_config(Arc::new(hidden));

        // swap the config without clearing the scene
        renderer.geometry = calc_hidden.clone();
        renderer.render_ticks(&calc_hidden.calculate_ticks());
        assert_eq!(count(&renderer, class::TICK_LINE), 0);
        assert_eq!(count(&renderer, class::TICK_LABEL), 0);
    }

    #[test]
    fn test_outer_tick_labels_in_body_group() {
        let options = GaugeOptions::from_json(r#"{"ticks": {"label": {"position": "outer"}}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&options);
        render_all(&mut renderer, &calc, 10.0);
        let body = renderer.scene().find(class::BODY_GROUP).unwrap();
        assert_eq!(renderer.scene().select(body, class::TICK_LABEL).len(), 2);
        let root = renderer.scene().root();
        assert!(renderer.scene().select(root, class::TICK_LABEL).is_empty());
    }

    #[test]
    fn test_hidden_end_labels() {
        let options = GaugeOptions::from_json(r#"{"labels": {"show": false}}"#).unwrap();
        let (mut renderer, calc) = renderer_for(&options);
        render_all(&mut renderer, &calc, 10.0);
        assert_eq!(count(&renderer, class::END_LABEL), 0);
    }

    // =========================================================================
    // Fast Path Tests
    // =========================================================================

    #[test]
    fn test_update_value_text_in_place() {
        let (mut renderer, calc) = renderer_for(&GaugeOptions::new());
        render_all(&mut renderer, &calc, 50.0);
        let before = renderer.scene().find(class::VALUE_TEXT);
        renderer.update_value_text(&GaugeData::new(80.0));
        assert_eq!(renderer.scene().find(class::VALUE_TEXT), before);
        assert_eq!(text_of(&renderer, class::VALUE_TEXT).as_deref(), Some("80"));
        assert_eq!(text_of(&renderer, class::VALUE_LABEL).as_deref(), Some("Extreme Greed"));
        assert_eq!(count(&renderer, class::VALUE_BOX), 1);
    }

    #[test]
    fn test_update_pointer_animates_then_settles() {
        let (mut renderer, calc) = renderer_for(&GaugeOptions::new());
        render_all(&mut renderer, &calc, 0.0);
        assert_eq!(renderer.pointer_angle(), -180.0);

        renderer.update_pointer(&calc.calculate_pointer_position(100.0));
        assert!(renderer.is_animating());
        assert!(renderer.advance(0.4));
        let midway = renderer.pointer_angle();
        assert!(midway > -180.0 && midway < 0.0);
        while renderer.advance(0.1) {}
        assert_eq!(renderer.pointer_angle(), 0.0);
        let pointer = renderer.scene().find(class::POINTER).unwrap();
        assert_eq!(
            renderer.scene().node(pointer).unwrap().transform,
            vec![TransformOp::Rotate(90.0)]
        );
    }

    #[test]
    fn test_update_pointer_without_animation_is_immediate() {
        let (mut renderer, calc) = renderer_for(&GaugeOptions::new().with_animation(false));
        render_all(&mut renderer, &calc, 0.0);
        renderer.update_pointer(&calc.calculate_pointer_position(50.0));
        assert!(!renderer.is_animating());
        assert!((renderer.pointer_angle() + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_removes_everything() {
        let (mut renderer, calc) = renderer_for(&GaugeOptions::new());
        render_all(&mut renderer, &calc, 50.0);
        renderer.clear();
        assert!(renderer.scene().is_empty());
        // groups come back on the next render call
        renderer.render_segments(&calc.calculate_segments());
        assert_eq!(count(&renderer, class::SEGMENT), 5);
        assert_eq!(count(&renderer, class::BODY_GROUP), 1);
    }
}
