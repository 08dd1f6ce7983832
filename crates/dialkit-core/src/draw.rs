//! Draw commands and the styles they carry.
//!
//! Every frame of the immediate-mode backend reduces to these primitives.
//! Angles follow the canvas convention: radians measured from +x toward +y
//! (clockwise on screen).

use crate::{Color, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Average advance of a glyph relative to the font size, used when no font
/// engine is available to measure text.
pub const AVERAGE_GLYPH_WIDTH: f64 = 0.6;

/// Estimate the rendered width of `text` at `font_size` pixels.
#[must_use]
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * AVERAGE_GLYPH_WIDTH
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient [0.0, 1.0]
    pub offset: f64,
    /// Stop color
    pub color: Color,
}

/// Evenly spaced stops: color `i` of `n` sits at `i / (n - 1)`.
#[must_use]
pub fn even_stops(colors: &[Color]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            offset: i as f64 / last,
            color: *color,
        })
        .collect()
}

/// Fill paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Single color
    Solid(Color),
    /// Radial gradient between two concentric circles
    Radial {
        /// Shared center of both circles
        center: Point,
        /// Radius where offset 0.0 sits
        inner_radius: f64,
        /// Radius where offset 1.0 sits
        outer_radius: f64,
        /// Ordered color stops
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Radial gradient from evenly spaced colors.
    #[must_use]
    pub fn radial(center: Point, inner_radius: f64, outer_radius: f64, colors: &[Color]) -> Self {
        Self::Radial {
            center,
            inner_radius,
            outer_radius,
            stops: even_stops(colors),
        }
    }

    /// Representative color (the solid color or the first stop).
    #[must_use]
    pub fn primary_color(&self) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Radial { stops, .. } => stops.first().map_or(Color::TRANSPARENT, |s| s.color),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Stroke style for lines and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl StrokeStyle {
    /// Solid stroke with butt caps.
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    /// Use round caps.
    #[must_use]
    pub fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
}

impl LineCap {
    /// CSS / canvas keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Drop shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f64,
    /// Vertical offset
    pub offset_y: f64,
    /// Blur radius
    pub blur: f64,
}

impl Shadow {
    /// CSS `drop-shadow()` filter function.
    #[must_use]
    pub fn css_filter(&self) -> String {
        format!(
            "drop-shadow({}px {}px {}px {})",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.color.to_css()
        )
    }
}

/// Fill/stroke/opacity for closed shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill paint (None = no fill)
    pub fill: Option<Paint>,
    /// Stroke (None = no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Opacity multiplier [0.0, 1.0]
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }
}

impl ShapeStyle {
    /// Filled shape.
    #[must_use]
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            ..Self::default()
        }
    }

    /// Stroked shape.
    #[must_use]
    pub fn stroke(stroke: StrokeStyle) -> Self {
        Self {
            stroke: Some(stroke),
            ..Self::default()
        }
    }

    /// Add a stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the opacity multiplier.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light (300)
    #[serde(alias = "300")]
    Light,
    /// Normal (400)
    #[default]
    #[serde(alias = "400")]
    Normal,
    /// Medium (500)
    #[serde(alias = "500")]
    Medium,
    /// Semibold (600)
    #[serde(alias = "600")]
    Semibold,
    /// Bold (700)
    #[serde(alias = "700")]
    Bold,
}

impl FontWeight {
    /// CSS `font-weight` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Light => "300",
            Self::Normal => "normal",
            Self::Medium => "500",
            Self::Semibold => "600",
            Self::Bold => "bold",
        }
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Text starts at the position
    Start,
    /// Text is centered on the position
    #[default]
    Middle,
    /// Text ends at the position
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` value.
    #[must_use]
    pub const fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }

    /// Canvas `textAlign` value.
    #[must_use]
    pub const fn as_canvas(self) -> &'static str {
        match self {
            Self::Start => "left",
            Self::Middle => "center",
            Self::End => "right",
        }
    }
}

/// Vertical text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextBaseline {
    /// Alphabetic baseline
    Alphabetic,
    /// Vertically centered
    #[default]
    Middle,
}

impl TextBaseline {
    /// Shared SVG `dominant-baseline` / canvas `textBaseline` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Middle => "middle",
        }
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f64,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// CSS font family list
    pub family: String,
    /// Horizontal anchor
    pub anchor: TextAnchor,
    /// Vertical baseline
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            family: "Arial, sans-serif".to_string(),
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
        }
    }
}

impl TextStyle {
    /// CSS `font` shorthand, e.g. `bold 36px Arial, sans-serif`.
    #[must_use]
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.weight.as_css(), self.size, self.family)
    }
}

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f64; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a rotation transform (radians).
    #[must_use]
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Create a rotation transform (degrees).
    #[must_use]
    pub fn rotate_degrees(degrees: f64) -> Self {
        Self::rotate(degrees.to_radians())
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

/// A single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Circular arc around `center`; connects from the current point
    Arc {
        /// Arc center
        center: Point,
        /// Arc radius
        radius: f64,
        /// Start angle (radians)
        start_angle: f64,
        /// End angle (radians)
        end_angle: f64,
        /// Sweep direction
        counterclockwise: bool,
    },
    /// Close the subpath
    Close,
}

/// A vector path built from [`PathCommand`]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Move to a point.
    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    /// Line to a point.
    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    /// Append a circular arc.
    #[must_use]
    pub fn arc(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
        self
    }

    /// Close the current subpath.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed ring slice between two radii, swept clockwise from `start`
    /// to `end`.
    #[must_use]
    pub fn annulus_sector(center: Point, inner: f64, outer: f64, start: f64, end: f64) -> Self {
        Self::new()
            .move_to(center + Point::polar(outer, start))
            .arc(center, outer, start, end, false)
            .line_to(center + Point::polar(inner, end))
            .arc(center, inner, end, start, true)
            .close()
    }

    /// Open arc along one radius, swept clockwise from `start` to `end`.
    #[must_use]
    pub fn arc_outline(center: Point, radius: f64, start: f64, end: f64) -> Self {
        Self::new()
            .move_to(center + Point::polar(radius, start))
            .arc(center, radius, start, end, false)
    }

    /// Apply a transform to every point in the path.
    ///
    /// Arcs keep their radius, so only rigid transforms are supported.
    #[must_use]
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        let rotation = transform.matrix[1].atan2(transform.matrix[0]);
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(transform.apply(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(transform.apply(p)),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => PathCommand::Arc {
                    center: transform.apply(center),
                    radius,
                    start_angle: start_angle + rotation,
                    end_angle: end_angle + rotation,
                    counterclockwise,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }

    /// SVG path data (`d` attribute).
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => parts.push(format!("M{},{}", fmt_num(p.x), fmt_num(p.y))),
                PathCommand::LineTo(p) => parts.push(format!("L{},{}", fmt_num(p.x), fmt_num(p.y))),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => parts.push(svg_arc(center, radius, start_angle, end_angle, counterclockwise)),
                PathCommand::Close => parts.push("Z".to_string()),
            }
        }
        parts.join("")
    }
}

/// SVG arc segment(s) for a canvas-style arc. Full circles are split in two
/// because a single SVG arc cannot start and end at the same point.
fn svg_arc(center: Point, radius: f64, start: f64, end: f64, ccw: bool) -> String {
    let sweep = if ccw { start - end } else { end - start };
    let sweep = sweep.rem_euclid(TAU + 1e-9);
    let sweep_flag = u8::from(!ccw);
    let start_point = center + Point::polar(radius, start);
    let mut out = format!("L{},{}", fmt_num(start_point.x), fmt_num(start_point.y));

    if sweep >= TAU - 1e-9 {
        let mid = if ccw { start - PI } else { start + PI };
        for angle in [mid, start] {
            let p = center + Point::polar(radius, angle);
            out.push_str(&format!(
                "A{r},{r},0,0,{sweep_flag},{},{}",
                fmt_num(p.x),
                fmt_num(p.y),
                r = fmt_num(radius)
            ));
        }
        return out;
    }

    let large_arc = u8::from(sweep > PI);
    let end_point = center + Point::polar(radius, end);
    out.push_str(&format!(
        "A{r},{r},0,{large_arc},{sweep_flag},{},{}",
        fmt_num(end_point.x),
        fmt_num(end_point.y),
        r = fmt_num(radius)
    ));
    out
}

/// Format a coordinate with at most three decimals and no trailing zeros.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Drawing primitive recorded by [`crate::RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear {
        /// Surface size
        size: Size,
    },
    /// Fill and/or stroke a path
    Path {
        /// Path geometry
        path: Path,
        /// Shape style
        style: ShapeStyle,
    },
    /// Straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke
        stroke: StrokeStyle,
        /// Optional drop shadow
        shadow: Option<Shadow>,
    },
    /// Circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f64,
        /// Shape style
        style: ShapeStyle,
    },
    /// Axis-aligned rectangle
    Rect {
        /// Bounds
        bounds: Rect,
        /// Shape style
        style: ShapeStyle,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Image drawn into `bounds` after `transform`
    Image {
        /// Image URI
        href: String,
        /// Destination bounds in the transformed frame
        bounds: Rect,
        /// Transform applied to the bounds
        transform: Transform2D,
        /// Optional drop shadow
        shadow: Option<Shadow>,
    },
}

impl DrawCommand {
    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f64, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: ShapeStyle::fill(color),
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, stroke: StrokeStyle) -> Self {
        Self::Line {
            from,
            to,
            stroke,
            shadow: None,
        }
    }

    /// Text content if this is a text command.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
