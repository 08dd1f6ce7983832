//! Integration tests for dialkit-layout.
//!
//! These tests drive the calculator through configurations built the way
//! callers build them: JSON and YAML options merged onto defaults.

use dialkit_config::{GaugeConfig, GaugeOptions};
use dialkit_core::Point;
use dialkit_layout::{GaugeLayoutCalculator, LocalFrame, TickData};
use std::f64::consts::{FRAC_PI_4, PI};
use std::sync::Arc;

fn from_json(json: &str) -> GaugeLayoutCalculator {
    let config = GaugeOptions::from_json(json).unwrap().resolve().unwrap();
    GaugeLayoutCalculator::new(Arc::new(config))
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn default_gauge_maps_quarter_value_to_quarter_turn() {
    let calc = GaugeLayoutCalculator::new(Arc::new(GaugeConfig::default()));
    assert!((calc.value_to_angle(25.0) - FRAC_PI_4).abs() < 1e-12);
    assert!((calc.layout().base_radius - 120.0).abs() < 1e-9);
}

#[test]
fn resize_scales_radii_proportionally() {
    let small = from_json(r#"{"width": 400, "height": 300}"#);
    let large = from_json(r#"{"width": 800, "height": 600}"#);
    let (a, b) = (small.layout(), large.layout());
    assert!((b.base_radius - 240.0).abs() < 1e-9);
    assert!((b.gauge.inner_radius - 2.0 * a.gauge.inner_radius).abs() < 1e-9);
    assert!((b.background.outer_radius - 2.0 * a.background.outer_radius).abs() < 1e-9);
    assert!((b.center_y - 2.0 * a.center_y).abs() < 1e-9);
}

// =============================================================================
// Ticks
// =============================================================================

#[test]
fn ticks_follow_count_and_spacing() {
    let calc = from_json(r#"{"ticks": {"show": true, "count": 4, "mainTickEvery": 2}}"#);
    let ticks = calc.calculate_ticks();
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

    let main: Vec<bool> = ticks.iter().map(|t| t.is_main).collect();
    assert_eq!(main, vec![true, false, true, false, true]);
}

#[test]
fn tick_labels_absent_when_disabled() {
    let calc = from_json(r#"{"ticks": {"show": true, "label": {"show": false}}}"#);
    let ticks = calc.calculate_ticks();
    assert_eq!(ticks.len(), 11);
    assert!(ticks.iter().all(|t| t.label_position().is_none()));
}

#[test]
fn ticks_span_the_visible_arc() {
    let calc = from_json(r#"{"ticks": {"show": true}, "width": 600, "height": 400}"#);
    let frame = LocalFrame::new(calc.layout().center());
    let center = calc.layout().center();
    let screen: Vec<Point> = calc
        .calculate_ticks()
        .iter()
        .map(|t: &TickData| frame.to_screen(t.outer_end()))
        .collect();
    // every tick end sits on or above the horizontal through the center
    assert!(screen.iter().all(|p| p.y <= center.y + 1e-9));
    assert!(screen.first().unwrap().x < center.x);
    assert!(screen.last().unwrap().x > center.x);
}

// =============================================================================
// Pointer
// =============================================================================

#[test]
fn pointer_sweeps_left_to_right() {
    let calc = from_json(r#"{"range": {"min": -20, "max": 40}}"#);
    let left = calc.calculate_pointer_position(-20.0);
    let middle = calc.calculate_pointer_position(10.0);
    let right = calc.calculate_pointer_position(40.0);
    assert!((left.angle + 180.0).abs() < 1e-9);
    assert!((middle.angle + 90.0).abs() < 1e-9);
    assert!(right.angle.abs() < 1e-9);
    assert!(left.x < middle.x && middle.x < right.x);
    assert!(middle.y < left.y);
}

#[test]
fn segments_track_custom_range() {
    let yaml = r"
range:
  min: 0
  max: 10
segments:
  - { min: 0, max: 4, color: '#ff0000', label: Low }
  - { min: 4, max: 10, color: '#00ff00', label: High }
";
    let config = GaugeOptions::from_yaml(yaml).unwrap().resolve().unwrap();
    let calc = GaugeLayoutCalculator::new(Arc::new(config));
    let segments = calc.calculate_segments();
    assert_eq!(segments.len(), 2);
    assert!((segments[0].end_angle - 0.4 * PI).abs() < 1e-12);
    assert_eq!(segments[1].value, 7.0);
    assert_eq!(GaugeLayoutCalculator::separator_angles(&segments).len(), 1);
}
