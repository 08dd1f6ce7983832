//! Partial gauge options and their merge onto a full configuration.
//!
//! Every field is optional. Merging walks each nested slot explicitly:
//! `Some` overrides, `None` keeps the current value. Lists (segments,
//! gradient stops) replace wholesale and are never merged element-wise.

use crate::config::{
    AnimationConfig, BaseRadiusConfig, BorderConfig, CenterCircleConfig, EndLabelsConfig, Fill,
    FontConfig, GaugeConfig, GradientConfig, LabelPosition, LayoutConfig, PointerConfig,
    PointerImageConfig, PointerKind, RingConfig, Segment, ShadowConfig, TextConfig,
    TickLabelConfig, TicksConfig, ValueBoxConfig, ValueRange,
};
use crate::ConfigError;
use dialkit_core::{Color, Easing, FontWeight};
use serde::{Deserialize, Serialize};

/// Copy every `Some` leaf field of `$src` into `$dst`.
macro_rules! overlay {
    ($src:ident => $dst:ident { $($field:ident),* $(,)? }) => {
        $(
            if let Some(value) = &$src.$field {
                $dst.$field = value.clone();
            }
        )*
    };
}

/// Recurse into every `Some` nested options field of `$src`.
macro_rules! overlay_nested {
    ($src:ident => $dst:ident { $($field:ident),* $(,)? }) => {
        $(
            if let Some(value) = &$src.$field {
                value.apply_to(&mut $dst.$field);
            }
        )*
    };
}

/// Partial gauge configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GaugeOptions {
    /// Surface width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Surface height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Value range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeOptions>,
    /// Segments (replaced wholesale)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    /// Pointer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<PointerOptions>,
    /// Value text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOptions>,
    /// End labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<EndLabelsOptions>,
    /// Ticks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TicksOptions>,
    /// Body ring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauge: Option<RingOptions>,
    /// Background ring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<RingOptions>,
    /// Layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOptions>,
    /// Center hub
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_circle: Option<CenterCircleOptions>,
    /// Value box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_box: Option<ValueBoxOptions>,
    /// Animation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOptions>,
}

impl GaugeOptions {
    /// Empty options (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, unknown fields or bad colors.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML, unknown fields or bad colors.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Set the surface size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the value range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(RangeOptions {
            min: Some(min),
            max: Some(max),
        });
        self
    }

    /// Select the pointer style.
    #[must_use]
    pub fn with_pointer_kind(mut self, kind: PointerKind) -> Self {
        self.pointer.get_or_insert_with(PointerOptions::default).kind = Some(kind);
        self
    }

    /// Enable or disable pointer animation.
    #[must_use]
    pub fn with_animation(mut self, enable: bool) -> Self {
        self.animation
            .get_or_insert_with(AnimationOptions::default)
            .enable = Some(enable);
        self
    }

    /// Overlay these options onto `target`, leaving unset fields untouched.
    pub fn apply_to(&self, target: &mut GaugeConfig) {
        overlay!(self => target { width, height, segments });
        overlay_nested!(self => target {
            range, pointer, text, labels, ticks, gauge, background,
            layout, center_circle, value_box, animation,
        });
    }

    /// Merge onto `base` and validate the result. `base` is not modified.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of the merged configuration.
    pub fn merge_onto(&self, base: &GaugeConfig) -> Result<GaugeConfig, ConfigError> {
        let mut merged = base.clone();
        self.apply_to(&mut merged);
        merged.validate()?;
        Ok(merged)
    }

    /// Merge onto the defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of the merged configuration.
    pub fn resolve(&self) -> Result<GaugeConfig, ConfigError> {
        self.merge_onto(&GaugeConfig::default())
    }
}

/// Partial [`ValueRange`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeOptions {
    /// Lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RangeOptions {
    fn apply_to(&self, target: &mut ValueRange) {
        overlay!(self => target { min, max });
    }
}

/// Partial [`PointerConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PointerOptions {
    /// Line or image
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PointerKind>,
    /// Length ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Stroke width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Stroke color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowOptions>,
    /// Start the image pointer at the background ring's inner edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_inner_edge: Option<bool>,
    /// Image asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PointerImageOptions>,
}

impl PointerOptions {
    fn apply_to(&self, target: &mut PointerConfig) {
        overlay!(self => target { kind, length, width, color, from_inner_edge });
        overlay_nested!(self => target { shadow, image });
    }
}

/// Partial [`ShadowConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ShadowOptions {
    /// Whether the shadow is drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Horizontal offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    /// Vertical offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    /// Blur radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Shadow color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl ShadowOptions {
    fn apply_to(&self, target: &mut ShadowConfig) {
        overlay!(self => target { enable, offset_x, offset_y, blur, color });
    }
}

/// Partial [`PointerImageConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PointerImageOptions {
    /// Image URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Drawn width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Drawn height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Horizontal offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    /// Vertical offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

impl PointerImageOptions {
    fn apply_to(&self, target: &mut PointerImageConfig) {
        overlay!(self => target { src, width, height, offset_x, offset_y });
    }
}

/// Partial [`TextConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TextOptions {
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextOptions {
    fn apply_to(&self, target: &mut TextConfig) {
        overlay!(self => target { font_size, font_weight, color, font_family });
    }
}

/// Partial [`EndLabelsConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EndLabelsOptions {
    /// Whether end labels are drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Minimum-end label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_label: Option<String>,
    /// Maximum-end label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_label: Option<String>,
    /// Inside or outside the ring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    /// Radial offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Angular margin (fraction of π)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_offset: Option<f64>,
}

impl EndLabelsOptions {
    fn apply_to(&self, target: &mut EndLabelsConfig) {
        overlay!(self => target {
            show, font_size, color, start_label, end_label, position, offset, angle_offset,
        });
    }
}

/// Partial [`TicksConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TicksOptions {
    /// Whether tick lines are drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Line color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Number of intervals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Main tick interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_tick_every: Option<u32>,
    /// Minor tick length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Main tick length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_length: Option<f64>,
    /// Minor tick width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Main tick width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_width: Option<f64>,
    /// Tick labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TickLabelOptions>,
}

impl TicksOptions {
    fn apply_to(&self, target: &mut TicksConfig) {
        overlay!(self => target {
            show, color, count, main_tick_every, length, main_length, width, main_width,
        });
        overlay_nested!(self => target { label });
    }
}

/// Partial [`TickLabelConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TickLabelOptions {
    /// Whether labels are drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Inside or outside the ring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Radial offset (outer labels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

impl TickLabelOptions {
    fn apply_to(&self, target: &mut TickLabelConfig) {
        overlay!(self => target { show, position, font_size, font_family, color, offset });
    }
}

/// Partial [`RingConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RingOptions {
    /// Whether the ring is drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Fill (gradient stops replace wholesale)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Fill>,
    /// Outer radius ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_radius_ratio: Option<f64>,
    /// Inner radius ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius_ratio: Option<f64>,
    /// Border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderOptions>,
    /// Opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl RingOptions {
    fn apply_to(&self, target: &mut RingConfig) {
        overlay!(self => target { show, color, outer_radius_ratio, inner_radius_ratio, opacity });
        overlay_nested!(self => target { border });
    }
}

/// Partial [`BorderConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderOptions {
    /// Whether the border is drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Stroke color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Stroke width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl BorderOptions {
    fn apply_to(&self, target: &mut BorderConfig) {
        overlay!(self => target { show, color, width });
    }
}

/// Partial [`LayoutConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOptions {
    /// Center y ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_y_ratio: Option<f64>,
    /// Base radius derivation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_radius_ratio: Option<BaseRadiusOptions>,
}

impl LayoutOptions {
    fn apply_to(&self, target: &mut LayoutConfig) {
        overlay!(self => target { center_y_ratio });
        overlay_nested!(self => target { base_radius_ratio });
    }
}

/// Partial [`BaseRadiusConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BaseRadiusOptions {
    /// Height multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_ratio: Option<f64>,
    /// Divisor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<f64>,
}

impl BaseRadiusOptions {
    fn apply_to(&self, target: &mut BaseRadiusConfig) {
        overlay!(self => target { min_height_ratio, divider });
    }
}

/// Partial [`CenterCircleConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CenterCircleOptions {
    /// Radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    /// Gradient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientOptions>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

impl CenterCircleOptions {
    fn apply_to(&self, target: &mut CenterCircleConfig) {
        overlay!(self => target { radius, line_width, border_color });
        overlay_nested!(self => target { gradient });
    }
}

/// Partial [`GradientConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientOptions {
    /// Center color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Color>,
    /// Edge color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Color>,
}

impl GradientOptions {
    fn apply_to(&self, target: &mut GradientConfig) {
        overlay!(self => target { start, end });
    }
}

/// Partial [`ValueBoxConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ValueBoxOptions {
    /// Distance below the center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    /// Horizontal padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<f64>,
    /// Vertical padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<f64>,
    /// Box fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    /// Box border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Box border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Label line gap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_offset_y: Option<f64>,
    /// Label font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOptions>,
    /// Padding multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_multiplier: Option<f64>,
}

impl ValueBoxOptions {
    fn apply_to(&self, target: &mut ValueBoxConfig) {
        overlay!(self => target {
            offset_y, padding_x, padding_y, bg_color, border_color, border_width,
            label_offset_y, padding_multiplier,
        });
        overlay_nested!(self => target { font });
    }
}

/// Partial [`FontConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontOptions {
    /// Size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl FontOptions {
    fn apply_to(&self, target: &mut FontConfig) {
        overlay!(self => target { size, family });
    }
}

/// Partial [`AnimationConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationOptions {
    /// Duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Easing curve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    /// Whether pointer moves are animated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
}

impl AnimationOptions {
    fn apply_to(&self, target: &mut AnimationConfig) {
        overlay!(self => target { duration, easing, enable });
    }
}
