//! JavaScript entry point.

use super::host::{container_by_id, CanvasElementHost, SvgElementHost};
use crate::{GaugeChart, GaugeError};
use dialkit_config::{GaugeData, GaugeOptions};
use dialkit_core::Size;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

enum Chart {
    Svg(GaugeChart<SvgElementHost>),
    Canvas(GaugeChart<CanvasElementHost>),
}

/// Dispatch `$body` to whichever chart is live, bound as `$c`.
macro_rules! with_chart {
    ($chart:expr, $c:ident => $body:expr) => {
        match $chart {
            Chart::Svg($c) => $body,
            Chart::Canvas($c) => $body,
        }
    };
}

#[allow(clippy::needless_pass_by_value)]
fn to_js(err: GaugeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_options(json: &str) -> Result<GaugeOptions, JsValue> {
    GaugeOptions::from_json(json).map_err(|e| to_js(e.into()))
}

/// A gauge chart mounted in a DOM container.
#[wasm_bindgen]
pub struct WasmGauge {
    chart: Chart,
}

#[wasm_bindgen]
impl WasmGauge {
    /// Mount a gauge in the element with id `container_id`.
    ///
    /// `options_json` holds partial options merged onto the defaults.
    /// `backend` is `"svg"` or `"canvas"`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options_json: &str, backend: &str) -> Result<WasmGauge, JsValue> {
        console_error_panic_hook::set_once();

        let options = if options_json.trim().is_empty() {
            GaugeOptions::new()
        } else {
            parse_options(options_json)?
        };
        let container = container_by_id(container_id).map_err(to_js)?;
        let chart = match backend {
            "svg" => Chart::Svg(
                GaugeChart::new(SvgElementHost::new(container), &options).map_err(to_js)?,
            ),
            "canvas" => Chart::Canvas(
                GaugeChart::new(CanvasElementHost::new(container), &options).map_err(to_js)?,
            ),
            other => return Err(JsValue::from_str(&format!("unknown backend '{other}'"))),
        };
        Ok(Self { chart })
    }

    /// Show a new value, keeping the current caption.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, value: f64) -> Result<(), JsValue> {
        with_chart!(&mut self.chart, c => c.set_value(value)).map_err(to_js)
    }

    /// Replace the reading. Without `label` the caption follows the segment.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(&mut self, value: f64, label: Option<String>) -> Result<(), JsValue> {
        let data = match label {
            Some(label) => GaugeData::new(value).with_label(label),
            None => GaugeData::new(value),
        };
        with_chart!(&mut self.chart, c => c.set_data(data)).map_err(to_js)
    }

    /// Merge partial options onto the live configuration and redraw.
    #[wasm_bindgen(js_name = updateConfig)]
    pub fn update_config(&mut self, options_json: &str) -> Result<(), JsValue> {
        let options = parse_options(options_json)?;
        with_chart!(&mut self.chart, c => c.update_config(&options)).map_err(to_js)
    }

    /// Current configuration as JSON.
    pub fn config(&self) -> Result<String, JsValue> {
        with_chart!(&self.chart, c => c.config().to_json()).map_err(|e| to_js(e.into()))
    }

    /// Fit to the container's current width.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        with_chart!(&mut self.chart, c => c.resize()).map_err(to_js)
    }

    /// Advance animations by `dt_ms` milliseconds.
    ///
    /// Returns whether another animation frame should be requested.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let dt = if dt_ms.is_finite() && dt_ms > 0.0 {
            Duration::from_secs_f64(dt_ms / 1000.0)
        } else {
            Duration::ZERO
        };
        with_chart!(&mut self.chart, c => c.tick(dt))
    }

    /// Whether the pointer is still moving.
    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        with_chart!(&self.chart, c => c.is_animating())
    }

    /// Report the natural size of the pointer image once it has loaded.
    #[wasm_bindgen(js_name = setPointerImageSize)]
    pub fn set_pointer_image_size(&mut self, width: f64, height: f64) {
        let size = Some(Size::new(width, height));
        match &mut self.chart {
            Chart::Svg(c) => {
                c.renderer_mut().set_pointer_image_size(size);
                c.render();
            }
            Chart::Canvas(c) => {
                c.renderer_mut().set_pointer_image_size(size);
                c.render();
            }
        }
    }

    /// Current SVG markup, for the SVG backend.
    #[wasm_bindgen(js_name = toSvg)]
    pub fn to_svg(&self) -> Option<String> {
        match &self.chart {
            Chart::Svg(c) => Some(c.renderer().scene_renderer().to_svg()),
            Chart::Canvas(_) => None,
        }
    }

    /// Remove the surface from the container.
    pub fn destroy(self) {
        match self.chart {
            Chart::Svg(c) => {
                let _ = c.destroy();
            }
            Chart::Canvas(c) => {
                let _ = c.destroy();
            }
        }
    }
}

/// Load an image and resolve to its natural `[width, height]`.
#[wasm_bindgen(js_name = measureImage)]
pub async fn measure_image(src: String) -> Result<Vec<f64>, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(&src);
    JsFuture::from(image.decode()).await?;
    Ok(vec![
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    ])
}
