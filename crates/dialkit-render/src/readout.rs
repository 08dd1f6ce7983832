//! Text shown in the value box.

use dialkit_config::{GaugeConfig, GaugeData};
use dialkit_core::Color;
use dialkit_layout::format_value;

/// Resolved value box content for one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// Formatted value
    pub value: String,
    /// Caption under the value, if any
    pub label: Option<String>,
    /// Caption color (current segment, else the value text color)
    pub label_color: Color,
}

impl Readout {
    /// Resolve the read-out for `data` against `config`.
    ///
    /// The caption is the data's own label when set, otherwise the label of
    /// the first segment containing the value.
    #[must_use]
    pub fn new(config: &GaugeConfig, data: &GaugeData) -> Self {
        let segment = config.segment_for(data.value);
        let label = data
            .explicit_label()
            .map(str::to_string)
            .or_else(|| segment.map(|s| s.label.clone()))
            .filter(|label| !label.is_empty());
        Self {
            value: format_value(data.value),
            label,
            label_color: segment.map_or(config.text.color, |s| s.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_label_fallback() {
        let config = GaugeConfig::default();
        let readout = Readout::new(&config, &GaugeData::new(50.0));
        assert_eq!(readout.value, "50");
        assert_eq!(readout.label.as_deref(), Some("Neutral"));
        assert_eq!(readout.label_color, config.segments[2].color);
    }

    #[test]
    fn test_shared_boundary_resolves_to_earlier_segment() {
        let config = GaugeConfig::default();
        let readout = Readout::new(&config, &GaugeData::new(25.0));
        assert_eq!(readout.label.as_deref(), Some("Extreme Fear"));
    }

    #[test]
    fn test_explicit_label_wins() {
        let config = GaugeConfig::default();
        let readout = Readout::new(&config, &GaugeData::new(80.0).with_label("Euphoria"));
        assert_eq!(readout.label.as_deref(), Some("Euphoria"));
        assert_eq!(readout.label_color, config.segments[4].color);
    }

    #[test]
    fn test_outside_segments_uses_text_color() {
        let mut config = GaugeConfig::default();
        config.segments.truncate(1);
        let readout = Readout::new(&config, &GaugeData::new(90.0));
        assert_eq!(readout.label, None);
        assert_eq!(readout.label_color, config.text.color);
    }
}
