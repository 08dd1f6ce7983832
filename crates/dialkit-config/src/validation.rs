//! Configuration validation.
//!
//! Runs at merge time so layout math never sees a degenerate range,
//! non-finite radii or an out-of-bounds opacity.

use crate::config::{Fill, GaugeConfig, RingConfig};
use crate::ConfigError;
use tracing::warn;

/// Most tick intervals a gauge may request.
pub const MAX_TICK_COUNT: u32 = 1000;

fn finite(field: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite {
            field: field.to_string(),
        })
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative {
            field: field.to_string(),
            value,
        })
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&finite(field, value)?) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn nonzero(field: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::ZeroCount {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

fn at_most(field: &str, value: u32, max: u32) -> Result<(), ConfigError> {
    nonzero(field, value)?;
    if value > max {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value: f64::from(value),
            min: 1.0,
            max: f64::from(max),
        })
    } else {
        Ok(())
    }
}

fn validate_ring(name: &str, ring: &RingConfig) -> Result<(), ConfigError> {
    let inner = finite(&format!("{name}.innerRadiusRatio"), ring.inner_radius_ratio)?;
    let outer = finite(&format!("{name}.outerRadiusRatio"), ring.outer_radius_ratio)?;
    if !(inner > 0.0 && inner < outer) {
        return Err(ConfigError::InvalidRadii {
            ring: name.to_string(),
            inner,
            outer,
        });
    }
    unit_interval(&format!("{name}.opacity"), ring.opacity)?;
    non_negative(&format!("{name}.border.width"), ring.border.width)?;
    if let Fill::Gradient(stops) = &ring.color {
        if stops.is_empty() {
            return Err(ConfigError::InvalidColor {
                field: format!("{name}.color"),
                reason: "gradient needs at least one color".to_string(),
            });
        }
    }
    Ok(())
}

impl GaugeConfig {
    /// Check every constraint the layout and renderers rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|e| {
            warn!(error = %e, "rejected gauge configuration");
            e
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;

        let min = finite("range.min", self.range.min)?;
        let max = finite("range.max", self.range.max)?;
        if min >= max {
            return Err(ConfigError::InvalidRange { min, max });
        }

        for (i, segment) in self.segments.iter().enumerate() {
            finite(&format!("segments[{i}].min"), segment.min)?;
            finite(&format!("segments[{i}].max"), segment.max)?;
        }

        unit_interval("pointer.length", self.pointer.length)?;
        non_negative("pointer.width", self.pointer.width)?;
        finite("pointer.image.offsetX", self.pointer.image.offset_x)?;
        finite("pointer.image.offsetY", self.pointer.image.offset_y)?;
        non_negative("pointer.image.width", self.pointer.image.width)?;
        non_negative("pointer.image.height", self.pointer.image.height)?;

        positive("text.fontSize", self.text.font_size)?;
        positive("labels.fontSize", self.labels.font_size)?;
        finite("labels.offset", self.labels.offset)?;
        finite("labels.angleOffset", self.labels.angle_offset)?;

        at_most("ticks.count", self.ticks.count, MAX_TICK_COUNT)?;
        nonzero("ticks.mainTickEvery", self.ticks.main_tick_every)?;
        non_negative("ticks.length", self.ticks.length)?;
        non_negative("ticks.mainLength", self.ticks.main_length)?;
        non_negative("ticks.label.fontSize", self.ticks.label.font_size)?;
        finite("ticks.label.offset", self.ticks.label.offset)?;

        validate_ring("gauge", &self.gauge)?;
        validate_ring("background", &self.background)?;

        finite("layout.centerYRatio", self.layout.center_y_ratio)?;
        positive(
            "layout.baseRadiusRatio.minHeightRatio",
            self.layout.base_radius_ratio.min_height_ratio,
        )?;
        positive(
            "layout.baseRadiusRatio.divider",
            self.layout.base_radius_ratio.divider,
        )?;

        non_negative("centerCircle.radius", self.center_circle.radius)?;
        finite("valueBox.offsetY", self.value_box.offset_y)?;
        non_negative("valueBox.paddingX", self.value_box.padding_x)?;
        non_negative("valueBox.paddingY", self.value_box.padding_y)?;
        positive("valueBox.font.size", self.value_box.font.size)?;
        non_negative("valueBox.paddingMultiplier", self.value_box.padding_multiplier)?;

        non_negative("animation.duration", self.animation.duration)?;
        Ok(())
    }
}
