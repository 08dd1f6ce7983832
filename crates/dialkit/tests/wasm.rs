//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use dialkit::browser::{container_by_id, CanvasElementHost, SvgElementHost, WasmGauge};
use dialkit::{GaugeChart, GaugeOptions, Host};

fn mount(id: &str) {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let div = document.create_element("div").expect("div");
    div.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&div)
        .expect("append");
}

fn child_count(id: &str) -> u32 {
    container_by_id(id).expect("container").child_element_count()
}

// ============================================================================
// SVG Surface Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_svg_chart_writes_markup() {
    mount("svg-markup");
    let mut gauge = WasmGauge::new("svg-markup", "", "svg").expect("gauge");
    gauge.set_value(50.0).expect("value");

    let html = container_by_id("svg-markup").expect("container").inner_html();
    assert!(html.contains("<svg"));
    assert!(html.contains("Neutral"));
    assert_eq!(gauge.to_svg().map(|s| s.contains("gauge-pointer")), Some(true));
}

#[wasm_bindgen_test]
fn test_svg_destroy_removes_surface() {
    mount("svg-destroy");
    let gauge = WasmGauge::new("svg-destroy", "{}", "svg").expect("gauge");
    assert_eq!(child_count("svg-destroy"), 1);
    gauge.destroy();
    assert_eq!(child_count("svg-destroy"), 0);
}

#[wasm_bindgen_test]
fn test_svg_host_client_width() {
    mount("svg-width");
    let container = container_by_id("svg-width").expect("container");
    container
        .style()
        .set_property("width", "640px")
        .expect("style");
    let host = SvgElementHost::new(container);
    assert_eq!(host.client_width(), 640.0);
}

// ============================================================================
// Canvas Surface Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_canvas_chart_sizes_element() {
    mount("canvas-size");
    let container = container_by_id("canvas-size").expect("container");
    let options = GaugeOptions::new().with_size(200.0, 150.0);
    let mut chart = GaugeChart::new(CanvasElementHost::new(container), &options).expect("chart");
    chart.set_value(75.0).expect("value");

    let element = chart.renderer().canvas().element();
    assert_eq!(element.width(), 200);
    assert_eq!(element.height(), 150);
    let _ = chart.destroy();
    assert_eq!(child_count("canvas-size"), 0);
}

#[wasm_bindgen_test]
fn test_canvas_gauge_animates() {
    mount("canvas-anim");
    let mut gauge = WasmGauge::new("canvas-anim", "", "canvas").expect("gauge");
    gauge.set_value(0.0).expect("value");
    gauge.set_value(100.0).expect("value");
    assert!(gauge.is_animating());

    let mut frames = 0;
    while gauge.tick(16.0) {
        frames += 1;
        assert!(frames < 200);
    }
    assert!(gauge.to_svg().is_none());
}

// ============================================================================
// Error Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_rejects_bad_input() {
    mount("bad-input");
    assert!(WasmGauge::new("missing-container", "", "svg").is_err());
    assert!(WasmGauge::new("bad-input", "", "webgl").is_err());
    assert!(WasmGauge::new("bad-input", "{not json", "svg").is_err());

    let mut gauge = WasmGauge::new("bad-input", "", "svg").expect("gauge");
    assert!(gauge.set_value(f64::NAN).is_err());
    assert!(gauge.set_value(101.0).is_err());
    assert!(gauge.update_config(r#"{"width": -1}"#).is_err());
}

#[wasm_bindgen_test]
fn test_update_config_roundtrip() {
    mount("config");
    let mut gauge = WasmGauge::new("config", "", "svg").expect("gauge");
    gauge
        .update_config(r#"{"pointer": {"type": "line"}}"#)
        .expect("update");
    let json = gauge.config().expect("json");
    assert!(json.contains("\"line\""));
}
