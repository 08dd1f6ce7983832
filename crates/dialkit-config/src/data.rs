//! The value a gauge displays.

use serde::{Deserialize, Serialize};

/// One reading: the value and an optional caption replacing the segment
/// label under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeData {
    /// Displayed value
    pub value: f64,
    /// Caption shown instead of the current segment's label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GaugeData {
    /// Reading without a caption.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    /// Attach a caption.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The caption, unless absent or empty.
    #[must_use]
    pub fn explicit_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }
}

impl From<f64> for GaugeData {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_label() {
        assert_eq!(GaugeData::new(1.0).explicit_label(), None);
        assert_eq!(GaugeData::new(1.0).with_label("").explicit_label(), None);
        assert_eq!(GaugeData::new(1.0).with_label("Hot").explicit_label(), Some("Hot"));
    }

    #[test]
    fn test_deserialize_without_label() {
        let data: GaugeData = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(data, GaugeData::new(42.0));
    }
}
