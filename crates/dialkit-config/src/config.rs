//! Fully resolved gauge configuration.
//!
//! Every field is present; partial overrides live in [`crate::GaugeOptions`]
//! and are merged onto these defaults.

use dialkit_core::{Color, Easing, FontWeight, Size};
use serde::{Deserialize, Serialize};

/// Tapered needle drawn for the default image pointer (16×261 SVG, drawn at 20×100).
pub const DEFAULT_POINTER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxNiIgaGVpZ2h0PSIyNjEiIHZpZXdCb3g9IjAgMCAxNiAyNjEiIGZpbGw9Im5vbmUiPgo8cGF0aCBkPSJNNi45NzMwOSAxLjQ5OTYzQzYuOTg4MDcgMC45NDMyNDggNy40NDM0MSAwLjUgOCAwLjVDOC41NTY1OSAwLjUgOS4wMTE5MyAwLjk0MzI1NCA5LjAyNjkxIDEuNDk5NjRMMTUuNzg0NyAyNTIuNTAzQzE1LjkwMjcgMjU2Ljg4NCAxMi4zODMgMjYwLjUgOCAyNjAuNUMzLjYxNjk5IDI2MC41IDAuMDk3MzQ1MSAyNTYuODg0IDAuMjE1MzA3IDI1Mi41MDNMNi45NzMwOSAxLjQ5OTYzWiIgZmlsbD0iYmxhY2siLz4KPC9zdmc+";

/// Color of the separator lines drawn between segments.
pub const SEPARATOR_COLOR: Color = Color::WHITE;

/// Width of the separator lines drawn between segments.
pub const SEPARATOR_WIDTH: f64 = 2.0;

fn css(color: &str) -> Color {
    // Only called on the literals below.
    Color::parse_css(color).unwrap_or(Color::BLACK)
}

/// Complete gauge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeConfig {
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
    /// Numeric domain of the gauge
    pub range: ValueRange,
    /// Ordered, contiguous colored sub-ranges
    pub segments: Vec<Segment>,
    /// Pointer appearance
    pub pointer: PointerConfig,
    /// Value text style
    pub text: TextConfig,
    /// Start/end labels
    pub labels: EndLabelsConfig,
    /// Tick marks and tick labels
    pub ticks: TicksConfig,
    /// Body ring under the segments
    pub gauge: RingConfig,
    /// Background ring
    pub background: RingConfig,
    /// Center and base radius placement
    pub layout: LayoutConfig,
    /// Hub drawn over the line pointer's pivot
    pub center_circle: CenterCircleConfig,
    /// Box around the value read-out
    pub value_box: ValueBoxConfig,
    /// Pointer animation
    pub animation: AnimationConfig,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            range: ValueRange::default(),
            segments: vec![
                Segment::new(0.0, 25.0, css("#ff4444"), "Extreme Fear"),
                Segment::new(25.0, 45.0, css("#ff8844"), "Fear"),
                Segment::new(45.0, 55.0, css("#ffcc44"), "Neutral"),
                Segment::new(55.0, 75.0, css("#88cc44"), "Greed"),
                Segment::new(75.0, 100.0, css("#44ff44"), "Extreme Greed"),
            ],
            pointer: PointerConfig::default(),
            text: TextConfig::default(),
            labels: EndLabelsConfig::default(),
            ticks: TicksConfig::default(),
            gauge: RingConfig::gauge_default(),
            background: RingConfig::background_default(),
            layout: LayoutConfig::default(),
            center_circle: CenterCircleConfig::default(),
            value_box: ValueBoxConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl GaugeConfig {
    /// Surface size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// First segment (in array order) whose inclusive bounds contain `value`.
    ///
    /// A value on a shared boundary resolves to the earlier segment.
    #[must_use]
    pub fn segment_for(&self, value: f64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(value))
    }

    /// Whether `value` lies within the inclusive range.
    #[must_use]
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.range.min && value <= self.range.max
    }

    /// Load a complete configuration snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or an invalid configuration.
    pub fn from_json(json: &str) -> Result<Self, crate::ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, crate::ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Inclusive numeric domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl ValueRange {
    /// Create a range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A labeled, colored sub-interval of the value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Fill color
    pub color: Color,
    /// Descriptive label
    pub label: String,
}

impl Segment {
    /// Create a segment.
    #[must_use]
    pub fn new(min: f64, max: f64, color: Color, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            color,
            label: label.into(),
        }
    }

    /// Inclusive containment check.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Pointer visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Straight stroke from the center
    Line,
    /// Image asset rotated about the center
    #[default]
    Image,
}

/// Pointer appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerConfig {
    /// Line or image
    #[serde(rename = "type")]
    pub kind: PointerKind,
    /// Length as a fraction of the body ring's inner radius [0, 1]
    pub length: f64,
    /// Stroke width of the line pointer
    pub width: f64,
    /// Stroke color of the line pointer
    pub color: Color,
    /// Drop shadow
    pub shadow: ShadowConfig,
    /// Start the image pointer at the background ring's inner edge instead
    /// of the center
    pub from_inner_edge: bool,
    /// Image pointer asset and placement
    pub image: PointerImageConfig,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            kind: PointerKind::Image,
            length: 0.85,
            width: 4.0,
            color: css("#333"),
            shadow: ShadowConfig::default(),
            from_inner_edge: false,
            image: PointerImageConfig::default(),
        }
    }
}

/// Drop shadow settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    /// Whether the shadow is drawn
    pub enable: bool,
    /// Horizontal offset
    pub offset_x: f64,
    /// Vertical offset
    pub offset_y: f64,
    /// Blur radius
    pub blur: f64,
    /// Shadow color
    pub color: Color,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enable: true,
            offset_x: 2.0,
            offset_y: 2.0,
            blur: 2.0,
            color: Color::from_rgba8(0, 0, 0, 0.2),
        }
    }
}

impl ShadowConfig {
    /// Drawable shadow, or `None` when disabled.
    #[must_use]
    pub fn to_shadow(&self) -> Option<dialkit_core::Shadow> {
        self.enable.then(|| dialkit_core::Shadow {
            color: self.color,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            blur: self.blur,
        })
    }
}

/// Image pointer asset and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerImageConfig {
    /// Image URI (data URI or URL)
    pub src: String,
    /// Drawn width
    pub width: f64,
    /// Drawn height
    pub height: f64,
    /// Horizontal offset of the image relative to the pivot
    pub offset_x: f64,
    /// Vertical offset of the image relative to the pivot
    pub offset_y: f64,
}

impl Default for PointerImageConfig {
    fn default() -> Self {
        Self {
            src: DEFAULT_POINTER_IMAGE.to_string(),
            width: 20.0,
            height: 100.0,
            offset_x: -10.0,
            offset_y: -100.0,
        }
    }
}

impl PointerImageConfig {
    /// Configured image size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Value text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Font size in pixels
    pub font_size: f64,
    /// Font weight
    pub font_weight: FontWeight,
    /// Text color
    pub color: Color,
    /// CSS font family list
    pub font_family: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: 36.0,
            font_weight: FontWeight::Bold,
            color: css("#333"),
            font_family: "Arial, sans-serif".to_string(),
        }
    }
}

/// Placement of labels relative to a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Inside the ring
    #[default]
    Inner,
    /// Outside the ring
    Outer,
}

/// Labels at the two ends of the arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndLabelsConfig {
    /// Whether end labels are drawn
    pub show: bool,
    /// Font size in pixels
    pub font_size: f64,
    /// Text color
    pub color: Color,
    /// Label at the minimum end
    pub start_label: String,
    /// Label at the maximum end
    pub end_label: String,
    /// Inside or outside the body ring
    pub position: LabelPosition,
    /// Radial distance from the ring edge
    pub offset: f64,
    /// Angular margin from the arc endpoints, as a fraction of π
    pub angle_offset: f64,
}

impl Default for EndLabelsConfig {
    fn default() -> Self {
        Self {
            show: true,
            font_size: 12.0,
            color: css("#888"),
            start_label: "Extreme Fear".to_string(),
            end_label: "Extreme Greed".to_string(),
            position: LabelPosition::Inner,
            offset: 15.0,
            angle_offset: 0.05,
        }
    }
}

/// Tick marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicksConfig {
    /// Whether tick lines are drawn
    pub show: bool,
    /// Line color
    pub color: Color,
    /// Number of intervals (`count + 1` ticks)
    pub count: u32,
    /// Every n-th tick is a main tick
    pub main_tick_every: u32,
    /// Minor tick length
    pub length: f64,
    /// Main tick length
    pub main_length: f64,
    /// Minor tick width
    pub width: f64,
    /// Main tick width
    pub main_width: f64,
    /// Tick value labels
    pub label: TickLabelConfig,
}

impl Default for TicksConfig {
    fn default() -> Self {
        Self {
            show: false,
            color: css("#999"),
            count: 10,
            main_tick_every: 10,
            length: 4.0,
            main_length: 8.0,
            width: 1.0,
            main_width: 2.0,
            label: TickLabelConfig::default(),
        }
    }
}

/// Tick value labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickLabelConfig {
    /// Whether labels are drawn
    pub show: bool,
    /// Inside or outside the body ring
    pub position: LabelPosition,
    /// Font size in pixels
    pub font_size: f64,
    /// CSS font family list
    pub font_family: String,
    /// Text color
    pub color: Color,
    /// Radial distance past the outer radius (outer labels)
    pub offset: f64,
}

impl Default for TickLabelConfig {
    fn default() -> Self {
        Self {
            show: true,
            position: LabelPosition::Inner,
            font_size: 10.0,
            font_family: "Arial, sans-serif".to_string(),
            color: css("#666"),
            offset: 15.0,
        }
    }
}

/// Ring fill: a single color or radial gradient stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    /// Single color
    Solid(Color),
    /// Colors spread evenly from the inner to the outer radius
    Gradient(Vec<Color>),
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Ring border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    /// Whether the border is drawn
    pub show: bool,
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: f64,
}

/// Half-annulus ring (body or background).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingConfig {
    /// Whether the ring is drawn
    pub show: bool,
    /// Fill
    pub color: Fill,
    /// Outer radius as a multiple of the base radius
    pub outer_radius_ratio: f64,
    /// Inner radius as a multiple of the base radius
    pub inner_radius_ratio: f64,
    /// Border on both radii
    pub border: BorderConfig,
    /// Opacity multiplier [0, 1]
    pub opacity: f64,
}

impl RingConfig {
    /// Default body ring.
    #[must_use]
    pub fn gauge_default() -> Self {
        Self {
            show: true,
            color: Fill::Solid(css("#f5f5f5")),
            outer_radius_ratio: 1.0,
            inner_radius_ratio: 0.65,
            border: BorderConfig {
                show: true,
                color: css("#ccc"),
                width: 2.0,
            },
            opacity: 1.0,
        }
    }

    /// Default background ring.
    #[must_use]
    pub fn background_default() -> Self {
        Self {
            show: true,
            color: Fill::Solid(css("#eeeeee")),
            outer_radius_ratio: 1.2,
            inner_radius_ratio: 0.5,
            border: BorderConfig {
                show: false,
                color: css("#ddd"),
                width: 1.0,
            },
            opacity: 0.6,
        }
    }
}

/// Center and base radius placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Center y as a fraction of the height
    pub center_y_ratio: f64,
    /// Base radius derivation
    pub base_radius_ratio: BaseRadiusConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_y_ratio: 0.65,
            base_radius_ratio: BaseRadiusConfig::default(),
        }
    }
}

/// `base_radius = min(width, height * min_height_ratio) / divider`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRadiusConfig {
    /// Height multiplier
    pub min_height_ratio: f64,
    /// Divisor
    pub divider: f64,
}

impl Default for BaseRadiusConfig {
    fn default() -> Self {
        Self {
            min_height_ratio: 1.2,
            divider: 3.0,
        }
    }
}

/// Hub drawn over the line pointer's pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterCircleConfig {
    /// Radius
    pub radius: f64,
    /// Border width
    pub line_width: f64,
    /// Radial gradient from the center outward
    pub gradient: GradientConfig,
    /// Border color
    pub border_color: Color,
}

impl Default for CenterCircleConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            line_width: 2.0,
            gradient: GradientConfig {
                start: css("#666"),
                end: css("#333"),
            },
            border_color: css("#222"),
        }
    }
}

/// Two-stop gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Color at the center
    pub start: Color,
    /// Color at the edge
    pub end: Color,
}

/// Box around the value read-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueBoxConfig {
    /// Distance below the center
    pub offset_y: f64,
    /// Horizontal padding
    pub padding_x: f64,
    /// Vertical padding
    pub padding_y: f64,
    /// Box fill
    pub bg_color: Color,
    /// Box border color
    pub border_color: Color,
    /// Box border width
    pub border_width: f64,
    /// Gap between the value and the segment label line
    pub label_offset_y: f64,
    /// Segment label font
    pub font: FontConfig,
    /// Multiplier applied to the total padding
    pub padding_multiplier: f64,
}

impl Default for ValueBoxConfig {
    fn default() -> Self {
        Self {
            offset_y: 50.0,
            padding_x: 10.0,
            padding_y: 5.0,
            bg_color: Color::from_rgba8(255, 255, 255, 0.9),
            border_color: css("#ddd"),
            border_width: 1.0,
            label_offset_y: 5.0,
            font: FontConfig {
                size: 16.0,
                family: "Arial, sans-serif".to_string(),
            },
            padding_multiplier: 2.0,
        }
    }
}

/// Font size and family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Size in pixels
    pub size: f64,
    /// CSS font family list
    pub family: String,
}

/// Pointer animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration in milliseconds
    pub duration: f64,
    /// Easing curve
    pub easing: Easing,
    /// Whether pointer moves are animated
    pub enable: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: 800.0,
            easing: Easing::CubicInOut,
            enable: true,
        }
    }
}

impl AnimationConfig {
    /// Effective duration in seconds (zero when disabled).
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        if self.enable {
            self.duration / 1000.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = GaugeConfig::default();
        assert_eq!(config.size(), Size::new(400.0, 300.0));
        assert_eq!(config.range, ValueRange::new(0.0, 100.0));
        assert_eq!(config.segments.len(), 5);
        assert_eq!(config.pointer.kind, PointerKind::Image);
        assert_eq!(config.pointer.length, 0.85);
        assert_eq!(config.text.font_weight, FontWeight::Bold);
        assert!(!config.ticks.show);
        assert!(config.ticks.label.show);
    }

    #[test]
    fn test_default_colors() {
        let config = GaugeConfig::default();
        assert_eq!(config.segments[0].color.to_hex(), "#ff4444");
        assert_eq!(config.segments[4].color.to_hex(), "#44ff44");
        assert_eq!(config.pointer.color.to_hex(), "#333333");
        assert_eq!(
            config.pointer.shadow.color.to_css(),
            "rgba(0, 0, 0, 0.2)"
        );
        assert_eq!(config.value_box.bg_color.to_css(), "rgba(255, 255, 255, 0.9)");
    }

    #[test]
    fn test_default_rings_differ() {
        let config = GaugeConfig::default();
        assert_eq!(config.gauge.outer_radius_ratio, 1.0);
        assert_eq!(config.gauge.inner_radius_ratio, 0.65);
        assert!(config.gauge.border.show);
        assert_eq!(config.background.outer_radius_ratio, 1.2);
        assert_eq!(config.background.inner_radius_ratio, 0.5);
        assert!(!config.background.border.show);
        assert_eq!(config.background.opacity, 0.6);
    }

    #[test]
    fn test_default_image_pointer_is_data_uri() {
        let image = PointerImageConfig::default();
        assert!(dialkit_core::image::is_valid_base64_image(&image.src));
        assert!(image.src.starts_with("data:image/svg+xml;base64,PHN2Zy"));
        assert_eq!(image.size(), Size::new(20.0, 100.0));
        assert_eq!((image.offset_x, image.offset_y), (-10.0, -100.0));
        assert!(!PointerConfig::default().from_inner_edge);
    }

    // =========================================================================
    // Segment Lookup Tests
    // =========================================================================

    #[test]
    fn test_segment_for_midpoint() {
        let config = GaugeConfig::default();
        assert_eq!(config.segment_for(50.0).unwrap().label, "Neutral");
        assert_eq!(config.segment_for(10.0).unwrap().label, "Extreme Fear");
        assert_eq!(config.segment_for(99.0).unwrap().label, "Extreme Greed");
    }

    #[test]
    fn test_segment_for_shared_boundary_prefers_earlier() {
        let config = GaugeConfig::default();
        assert_eq!(config.segment_for(25.0).unwrap().label, "Extreme Fear");
        assert_eq!(config.segment_for(45.0).unwrap().label, "Fear");
        assert_eq!(config.segment_for(100.0).unwrap().label, "Extreme Greed");
    }

    #[test]
    fn test_segment_for_outside() {
        let config = GaugeConfig::default();
        assert!(config.segment_for(-1.0).is_none());
        assert!(config.segment_for(100.5).is_none());
        assert!(config.segment_for(f64::NAN).is_none());
    }

    #[test]
    fn test_segment_midpoint() {
        let segment = Segment::new(45.0, 55.0, Color::BLACK, "Neutral");
        assert_eq!(segment.midpoint(), 50.0);
    }

    // =========================================================================
    // Serde Tests
    // =========================================================================

    #[test]
    fn test_config_json_roundtrip() {
        let config = GaugeConfig::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"centerYRatio\""));
        assert!(json.contains("\"type\": \"image\""));
        assert!(json.contains("\"easing\": \"easeCubicInOut\""));
        let parsed = GaugeConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_fill_untagged() {
        let solid: Fill = serde_json::from_str("\"#eeeeee\"").unwrap();
        assert!(matches!(solid, Fill::Solid(_)));

        let gradient: Fill = serde_json::from_str("[\"#fff\", \"#000\"]").unwrap();
        match gradient {
            Fill::Gradient(stops) => assert_eq!(stops.len(), 2),
            Fill::Solid(_) => panic!("Expected gradient"),
        }
    }

    #[test]
    fn test_shadow_to_shadow() {
        let mut shadow = ShadowConfig::default();
        assert!(shadow.to_shadow().is_some());
        shadow.enable = false;
        assert!(shadow.to_shadow().is_none());
    }

    #[test]
    fn test_animation_duration_secs() {
        let mut animation = AnimationConfig::default();
        assert!((animation.duration_secs() - 0.8).abs() < 1e-12);
        animation.enable = false;
        assert_eq!(animation.duration_secs(), 0.0);
    }
}
