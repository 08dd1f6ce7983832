//! Derived geometry snapshots.

use dialkit_core::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Radii of one half-annulus ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingLayout {
    /// Outer radius in pixels
    pub outer_radius: f64,
    /// Inner radius in pixels
    pub inner_radius: f64,
    /// `outer_radius - inner_radius`
    pub thickness: f64,
}

impl RingLayout {
    /// Ring from its two radii.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            outer_radius,
            inner_radius,
            thickness: outer_radius - inner_radius,
        }
    }
}

/// Center point and ring radii for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeLayout {
    /// Center x in surface pixels
    pub center_x: f64,
    /// Center y in surface pixels
    pub center_y: f64,
    /// Radius the ring ratios multiply
    pub base_radius: f64,
    /// Body ring
    pub gauge: RingLayout,
    /// Background ring
    pub background: RingLayout,
}

impl GaugeLayout {
    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// A configured segment annotated with its sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentData {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Fill color
    pub color: Color,
    /// Descriptive label
    pub label: String,
    /// Midpoint value
    pub value: f64,
    /// Angle of `min` (radians, `[0, π]` over the range)
    pub start_angle: f64,
    /// Angle of `max`
    pub end_angle: f64,
}

/// One tick mark.
///
/// `angle`, `x` and `y` are in the rotated ring frame. Label coordinates are
/// in the rotated frame for outer labels and relative to the unrotated center
/// for inner labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickData {
    /// Tick value
    pub value: f64,
    /// Angle in the rotated frame (value angle − π/2)
    pub angle: f64,
    /// Main ticks are longer, thicker and labeled
    pub is_main: bool,
    /// Outer end x
    pub x: f64,
    /// Outer end y
    pub y: f64,
    /// Label x (main ticks with labels enabled)
    pub label_x: Option<f64>,
    /// Label y (main ticks with labels enabled)
    pub label_y: Option<f64>,
}

impl TickData {
    /// Outer end point.
    #[must_use]
    pub fn outer_end(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Label anchor, if this tick is labeled.
    #[must_use]
    pub fn label_position(&self) -> Option<Point> {
        Some(Point::new(self.label_x?, self.label_y?))
    }
}

/// Pointer placement for one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Tip x in surface pixels
    pub x: f64,
    /// Tip y in surface pixels
    pub y: f64,
    /// Rotation in degrees: −180 at the minimum, 0 at the maximum
    pub angle: f64,
}

/// A positioned end label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndLabel {
    /// Label text
    pub text: String,
    /// Anchor in surface pixels (text centered on it)
    pub position: Point,
}

/// Geometry of the value read-out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueBoxLayout {
    /// Value text anchor in surface pixels
    pub anchor: Point,
    /// Background box in surface pixels
    pub bounds: Rect,
    /// Segment label anchor in surface pixels
    pub label_anchor: Point,
}
