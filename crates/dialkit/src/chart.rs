//! The gauge chart controller.

use crate::host::Host;
use crate::GaugeError;
use dialkit_config::{GaugeConfig, GaugeData, GaugeOptions};
use dialkit_layout::{GaugeLayout, GaugeLayoutCalculator};
use dialkit_render::GaugeRenderer;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A gauge chart attached to a host container.
///
/// Owns the live configuration, the current reading and the renderer.
/// Configuration changes recompute the layout and redraw everything; value
/// changes only move the pointer and rewrite the read-out.
///
/// ```
/// use dialkit::{GaugeChart, GaugeOptions, SvgHost};
///
/// let mut chart = GaugeChart::new(SvgHost::new(400.0), &GaugeOptions::new()).unwrap();
/// chart.set_value(50.0).unwrap();
/// assert!(chart.renderer().to_svg().contains("Neutral"));
/// ```
#[derive(Debug)]
pub struct GaugeChart<H: Host> {
    host: H,
    renderer: H::Renderer,
    config: Arc<GaugeConfig>,
    calculator: GaugeLayoutCalculator,
    data: Option<GaugeData>,
}

impl<H: Host> GaugeChart<H> {
    /// Merge `options` onto the defaults and attach a surface to `host`.
    ///
    /// Nothing is attached when the options are invalid or the host has no
    /// surface to give.
    pub fn new(mut host: H, options: &GaugeOptions) -> Result<Self, GaugeError> {
        let config = Arc::new(options.resolve()?);
        let calculator = GaugeLayoutCalculator::new(Arc::clone(&config));
        let renderer = host.attach(Arc::clone(&config), *calculator.layout())?;
        debug!(
            width = config.width,
            height = config.height,
            segments = config.segments.len(),
            "gauge chart created"
        );
        Ok(Self {
            host,
            renderer,
            config,
            calculator,
            data: None,
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Current reading, if one was set.
    #[must_use]
    pub const fn data(&self) -> Option<&GaugeData> {
        self.data.as_ref()
    }

    /// Current layout.
    #[must_use]
    pub const fn layout(&self) -> &GaugeLayout {
        self.calculator.layout()
    }

    /// Geometry calculator for the current configuration.
    #[must_use]
    pub const fn calculator(&self) -> &GaugeLayoutCalculator {
        &self.calculator
    }

    /// The renderer.
    #[must_use]
    pub const fn renderer(&self) -> &H::Renderer {
        &self.renderer
    }

    /// Mutable renderer, e.g. to report a loaded pointer image size.
    pub fn renderer_mut(&mut self) -> &mut H::Renderer {
        &mut self.renderer
    }

    /// The host container.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host container.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Replace the reading and redraw everything.
    pub fn set_data(&mut self, data: GaugeData) -> Result<(), GaugeError> {
        check_value(&self.config, data.value)?;
        self.data = Some(data);
        self.render();
        Ok(())
    }

    /// Change the value of the current reading.
    ///
    /// With a reading already shown this only moves the pointer and rewrites
    /// the read-out; otherwise it behaves like [`set_data`](Self::set_data).
    pub fn set_value(&mut self, value: f64) -> Result<(), GaugeError> {
        check_value(&self.config, value)?;
        let Some(data) = self.data.as_mut() else {
            return self.set_data(GaugeData::new(value));
        };
        data.value = value;

        let pointer = self.calculator.calculate_pointer_position(value);
        trace!(value, angle = pointer.angle, "value updated");
        self.renderer.update_pointer(&pointer);
        self.renderer.update_value_text(data);
        self.renderer.present();
        Ok(())
    }

    /// Merge `options` onto the current configuration and redraw.
    ///
    /// Fields not named in `options` keep their current values. A new range
    /// that excludes the current reading is rejected. On error the
    /// configuration is left untouched.
    pub fn update_config(&mut self, options: &GaugeOptions) -> Result<(), GaugeError> {
        let merged = options.merge_onto(&self.config)?;
        if let Some(data) = &self.data {
            check_value(&merged, data.value)?;
        }
        self.config = Arc::new(merged);
        self.calculator.update_config(Arc::clone(&self.config));
        self.renderer
            .update(Arc::clone(&self.config), *self.calculator.layout());
        self.renderer.resize_surface(self.config.size());
        debug!(
            width = self.config.width,
            height = self.config.height,
            "configuration updated"
        );

        if self.data.is_some() {
            self.render();
        } else {
            self.renderer.present();
        }
        Ok(())
    }

    /// Fit the chart to its container's width, keeping the aspect ratio.
    pub fn resize(&mut self) -> Result<(), GaugeError> {
        let width = self.host.client_width();
        let height = self.config.size().height_for_width(width);
        debug!(width, height, "resizing to container");
        self.update_config(&GaugeOptions::new().with_size(width, height))
    }

    /// Full redraw of every layer. Does nothing before the first reading.
    pub fn render(&mut self) {
        let Some(data) = &self.data else {
            return;
        };
        let calc = &self.calculator;
        let renderer = &mut self.renderer;

        renderer.clear();
        renderer.update(Arc::clone(&self.config), *calc.layout());
        renderer.render_background();
        renderer.render_gauge_base();
        renderer.render_segments(&calc.calculate_segments());
        renderer.render_ticks(&calc.calculate_ticks());
        renderer.render_end_labels();
        renderer.render_pointer(&calc.calculate_pointer_position(data.value));
        renderer.render_value_text(data);
        renderer.present();
        trace!(value = data.value, "full render");
    }

    /// Advance animations by `elapsed` and repaint.
    ///
    /// Returns whether another frame is needed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.renderer.is_animating() {
            return false;
        }
        let running = self.renderer.advance(elapsed.as_secs_f64());
        self.renderer.present();
        running
    }

    /// Whether the pointer is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.renderer.is_animating()
    }

    /// Detach the surface and give the host back.
    #[must_use]
    pub fn destroy(mut self) -> H {
        self.host.detach(&mut self.renderer);
        debug!("gauge chart destroyed");
        self.host
    }
}

fn check_value(config: &GaugeConfig, value: f64) -> Result<(), GaugeError> {
    if !value.is_finite() {
        warn!(value, "rejected non-finite value");
        return Err(GaugeError::NonFiniteValue(value));
    }
    if !config.in_range(value) {
        warn!(value, "rejected out-of-range value");
        return Err(GaugeError::ValueOutOfRange {
            value,
            min: config.range.min,
            max: config.range.max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{RecordingHost, SvgHost};
    use dialkit_render::{class, GaugeRenderer};

    fn chart() -> GaugeChart<SvgHost> {
        GaugeChart::new(SvgHost::new(400.0), &GaugeOptions::new()).unwrap()
    }

    fn value_text(chart: &GaugeChart<SvgHost>) -> Option<String> {
        let scene = chart.renderer().scene();
        let id = scene.find(class::VALUE_TEXT)?;
        scene.node(id)?.text().map(str::to_string)
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_new_attaches_one_surface() {
        let chart = chart();
        assert_eq!(chart.host().surface_count(), 1);
        assert!(chart.data().is_none());
        assert_eq!(chart.config().width, 400.0);
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = GaugeOptions::new().with_range(10.0, 10.0);
        let err = GaugeChart::new(SvgHost::new(400.0), &options).unwrap_err();
        assert!(matches!(err, GaugeError::Config(_)));
    }

    #[test]
    fn test_new_reports_missing_surface() {
        let err = GaugeChart::new(RecordingHost::without_surface("gone"), &GaugeOptions::new())
            .unwrap_err();
        assert!(matches!(err, GaugeError::SurfaceUnavailable(_)));
    }

    #[test]
    fn test_render_before_data_draws_nothing() {
        let mut chart = chart();
        chart.render();
        assert!(chart.renderer().scene().find(class::SEGMENT).is_none());
    }

    // =========================================================================
    // Value Tests
    // =========================================================================

    #[test]
    fn test_set_value_without_data_renders_fully() {
        let mut chart = chart();
        chart.set_value(25.0).unwrap();
        assert_eq!(chart.data().map(|d| d.value), Some(25.0));
        assert_eq!(value_text(&chart).as_deref(), Some("25"));
        assert_eq!(chart.renderer().scene().select_all(class::SEGMENT).len(), 5);
    }

    #[test]
    fn test_set_value_fast_path_keeps_label() {
        let mut chart = chart();
        chart
            .set_data(GaugeData::new(40.0).with_label("Custom"))
            .unwrap();
        let nodes = chart.renderer().scene().node_count();
        chart.set_value(60.0).unwrap();
        assert_eq!(chart.renderer().scene().node_count(), nodes);
        assert_eq!(chart.data().and_then(|d| d.label.as_deref()), Some("Custom"));
        assert_eq!(value_text(&chart).as_deref(), Some("60"));
    }

    #[test]
    fn test_invalid_values_leave_state() {
        let mut chart = chart();
        chart.set_value(30.0).unwrap();
        let angle = chart.renderer().pointer_angle();

        assert!(matches!(
            chart.set_value(100.0 + 1e-9),
            Err(GaugeError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            chart.set_value(f64::NAN),
            Err(GaugeError::NonFiniteValue(_))
        ));
        assert!(chart.set_data(GaugeData::new(-1.0)).is_err());

        assert_eq!(chart.data().map(|d| d.value), Some(30.0));
        assert_eq!(chart.renderer().pointer_angle(), angle);
        assert!(!chart.is_animating());
    }

    #[test]
    fn test_tick_drives_animation() {
        let mut chart = chart();
        chart.set_value(0.0).unwrap();
        chart.set_value(100.0).unwrap();
        assert!(chart.is_animating());
        let mut frames = 0;
        while chart.tick(Duration::from_millis(16)) {
            frames += 1;
            assert!(frames < 200);
        }
        assert_eq!(chart.renderer().pointer_angle(), 0.0);
        assert!(!chart.tick(Duration::from_millis(16)));
    }

    // =========================================================================
    // Config Tests
    // =========================================================================

    #[test]
    fn test_update_config_merges_and_rerenders() {
        let mut chart = chart();
        chart.set_value(50.0).unwrap();
        let options = GaugeOptions::from_json(r#"{"pointer": {"type": "line"}}"#).unwrap();
        chart.update_config(&options).unwrap();
        assert_eq!(chart.config().pointer.width, 4.0);
        assert!(chart
            .renderer()
            .scene()
            .find(class::CENTER_CIRCLE)
            .is_some());
    }

    #[test]
    fn test_update_config_error_keeps_config() {
        let mut chart = chart();
        let before = chart.config().clone();
        let options = GaugeOptions::from_json(r#"{"width": -5}"#).unwrap();
        assert!(chart.update_config(&options).is_err());
        assert_eq!(chart.config(), &before);
    }

    #[test]
    fn test_update_config_rejects_range_excluding_value() {
        let mut chart = chart();
        chart.set_value(80.0).unwrap();
        let angle = chart.renderer().pointer_angle();
        let svg = chart.renderer().to_svg();

        let err = chart
            .update_config(&GaugeOptions::new().with_range(0.0, 50.0))
            .unwrap_err();
        assert!(matches!(
            err,
            GaugeError::ValueOutOfRange { value, min, max }
                if value == 80.0 && min == 0.0 && max == 50.0
        ));
        assert_eq!(chart.config().range.max, 100.0);
        assert_eq!(chart.data().map(|d| d.value), Some(80.0));
        assert_eq!(chart.renderer().pointer_angle(), angle);
        assert_eq!(chart.renderer().to_svg(), svg);

        chart
            .update_config(&GaugeOptions::new().with_range(0.0, 200.0))
            .unwrap();
        assert!((chart.renderer().pointer_angle() + 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_follows_container() {
        let mut chart = chart();
        chart.set_value(50.0).unwrap();
        chart.host_mut().set_client_width(800.0);
        chart.resize().unwrap();
        assert_eq!(chart.config().width, 800.0);
        assert_eq!(chart.config().height, 600.0);
        assert!((chart.layout().base_radius - 240.0).abs() < 1e-9);
        assert_eq!(chart.renderer().scene().size().width, 800.0);
    }

    #[test]
    fn test_destroy_returns_host() {
        let mut chart = chart();
        chart.set_value(70.0).unwrap();
        chart.set_value(10.0).unwrap();
        let host = chart.destroy();
        assert_eq!(host.surface_count(), 0);
    }
}
