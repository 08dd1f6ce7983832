//! Immediate-mode drawing surface and a recording implementation.

use crate::draw::{
    estimate_text_width, DrawCommand, Path, Shadow, ShapeStyle, StrokeStyle, TextStyle,
    Transform2D,
};
use crate::{Point, Rect, Size};

/// Immediate-mode drawing surface.
///
/// Coordinates are in surface pixels after the current transform.
pub trait Canvas {
    /// Erase the whole surface.
    fn clear(&mut self, size: Size);

    /// Fill and/or stroke a path.
    fn draw_path(&mut self, path: &Path, style: &ShapeStyle);

    /// Stroke a straight line.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle, shadow: Option<&Shadow>);

    /// Fill and/or stroke a circle.
    fn draw_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle);

    /// Fill and/or stroke a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: &ShapeStyle);

    /// Draw a text run anchored at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw an image into `bounds`.
    fn draw_image(&mut self, href: &str, bounds: Rect, shadow: Option<&Shadow>);

    /// Push a transform, composed with the current one.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the most recent transform.
    fn pop_transform(&mut self);

    /// Width of `text` when drawn with `style`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        estimate_text_width(text, style.size)
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Used for headless rendering and for asserting what a frame painted.
/// Geometry is recorded in surface space: pushed transforms are applied
/// to paths, lines and circles as they are recorded.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Recorded commands as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.commands)
    }

    /// Recorded text runs in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, size: Size) {
        self.commands.clear();
        self.transform_stack.clear();
        self.commands.push(DrawCommand::Clear { size });
    }

    fn draw_path(&mut self, path: &Path, style: &ShapeStyle) {
        self.commands.push(DrawCommand::Path {
            path: path.transformed(&self.current_transform()),
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle, shadow: Option<&Shadow>) {
        let transform = self.current_transform();
        self.commands.push(DrawCommand::Line {
            from: transform.apply(from),
            to: transform.apply(to),
            stroke: stroke.clone(),
            shadow: shadow.cloned(),
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle) {
        self.commands.push(DrawCommand::Circle {
            center: self.current_transform().apply(center),
            radius,
            style: style.clone(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, style: &ShapeStyle) {
        let origin = self.current_transform().apply(Point::new(rect.x, rect.y));
        self.commands.push(DrawCommand::Rect {
            bounds: Rect::new(origin.x, origin.y, rect.width, rect.height),
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position: self.current_transform().apply(position),
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, href: &str, bounds: Rect, shadow: Option<&Shadow>) {
        self.commands.push(DrawCommand::Image {
            href: href.to_string(),
            bounds,
            transform: self.current_transform(),
            shadow: shadow.cloned(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let composed = transform.then(&self.current_transform());
        self.transform_stack.push(composed);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use std::f64::consts::FRAC_PI_2;

    // =========================================================================
    // RecordingCanvas Creation Tests
    // =========================================================================

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.transform_depth(), 0);
    }

    // =========================================================================
    // Recording Tests
    // =========================================================================

    #[test]
    fn test_clear_resets_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_circle(Point::ORIGIN, 5.0, &ShapeStyle::fill(Color::RED));
        canvas.push_transform(Transform2D::translate(1.0, 1.0));
        canvas.clear(Size::new(400.0, 300.0));

        assert_eq!(canvas.command_count(), 1);
        assert_eq!(canvas.transform_depth(), 0);
        assert!(matches!(canvas.commands()[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("50", Point::new(200.0, 245.0), &TextStyle::default());
        assert_eq!(canvas.texts(), vec!["50"]);
    }

    #[test]
    fn test_draw_line_with_shadow() {
        let mut canvas = RecordingCanvas::new();
        let shadow = Shadow {
            color: Color::BLACK,
            offset_x: 2.0,
            offset_y: 2.0,
            blur: 2.0,
        };
        canvas.draw_line(
            Point::ORIGIN,
            Point::new(10.0, 0.0),
            &StrokeStyle::new(Color::BLACK, 4.0).round(),
            Some(&shadow),
        );

        match &canvas.commands()[0] {
            DrawCommand::Line { shadow, stroke, .. } => {
                assert!(shadow.is_some());
                assert_eq!(stroke.width, 4.0);
            }
            _ => panic!("Expected Line command"),
        }
    }

    #[test]
    fn test_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &ShapeStyle::fill(Color::WHITE));
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    // =========================================================================
    // Transform Tests
    // =========================================================================

    #[test]
    fn test_push_pop_transform() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(100.0, 50.0));
        canvas.draw_circle(Point::new(1.0, 2.0), 3.0, &ShapeStyle::default());
        canvas.pop_transform();
        canvas.draw_circle(Point::new(1.0, 2.0), 3.0, &ShapeStyle::default());

        match (&canvas.commands()[0], &canvas.commands()[1]) {
            (DrawCommand::Circle { center: a, .. }, DrawCommand::Circle { center: b, .. }) => {
                assert_eq!(*a, Point::new(101.0, 52.0));
                assert_eq!(*b, Point::new(1.0, 2.0));
            }
            _ => panic!("Expected Circle commands"),
        }
    }

    #[test]
    fn test_nested_transforms_compose() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(200.0, 195.0));
        canvas.push_transform(Transform2D::rotate(-FRAC_PI_2));
        let p = canvas.current_transform().apply(Point::new(0.0, -10.0));
        assert!((p.x - 190.0).abs() < 1e-9);
        assert!((p.y - 195.0).abs() < 1e-9);
        assert_eq!(canvas.transform_depth(), 2);
    }

    #[test]
    fn test_pop_empty_transform_stack() {
        let mut canvas = RecordingCanvas::new();
        canvas.pop_transform();
        assert_eq!(canvas.current_transform(), Transform2D::identity());
    }

    #[test]
    fn test_image_records_transform() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(5.0, 5.0));
        canvas.draw_image("data:image/png;base64,AA==", Rect::new(-10.0, -100.0, 20.0, 100.0), None);
        match &canvas.commands()[0] {
            DrawCommand::Image { transform, bounds, .. } => {
                assert_eq!(*transform, Transform2D::translate(5.0, 5.0));
                assert_eq!(bounds.height, 100.0);
            }
            _ => panic!("Expected Image command"),
        }
    }

    #[test]
    fn test_measure_text_estimate() {
        let canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 16.0,
            ..TextStyle::default()
        };
        assert!((canvas.measure_text("abcd", &style) - 38.4).abs() < 1e-9);
    }

    #[test]
    fn test_to_json() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("Neutral", Point::ORIGIN, &TextStyle::default());
        let json = canvas.to_json().unwrap();
        assert!(json.contains("Neutral"));
    }
}
