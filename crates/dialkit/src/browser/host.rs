//! DOM containers for SVG and Canvas2D surfaces.

use super::canvas2d::Canvas2d;
use crate::host::Host;
use crate::GaugeError;
use dialkit_config::{GaugeConfig, GaugeData};
use dialkit_core::Size;
use dialkit_layout::{GaugeLayout, PointerPosition, SegmentData, TickData};
use dialkit_render::{CanvasRenderer, GaugeRenderer, SceneRenderer};
use std::sync::Arc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

fn document() -> Result<Document, GaugeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| GaugeError::SurfaceUnavailable("no document".to_string()))
}

/// Look up a container element by id.
pub fn container_by_id(id: &str) -> Result<HtmlElement, GaugeError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| GaugeError::SurfaceUnavailable(format!("no element with id '{id}'")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GaugeError::SurfaceUnavailable(format!("element '{id}' is not HTML")))
}

fn create_child(container: &HtmlElement, tag: &str) -> Result<Element, GaugeError> {
    let element = document()?
        .create_element(tag)
        .map_err(|e| GaugeError::SurfaceUnavailable(format!("{e:?}")))?;
    container
        .append_child(&element)
        .map_err(|e| GaugeError::SurfaceUnavailable(format!("{e:?}")))?;
    Ok(element)
}

/// Scene renderer whose SVG is written into a DOM element on present.
pub struct SvgElementRenderer {
    inner: SceneRenderer,
    element: Element,
}

impl SvgElementRenderer {
    /// The wrapped scene renderer.
    pub const fn scene_renderer(&self) -> &SceneRenderer {
        &self.inner
    }

    /// Report the natural size of the loaded pointer image.
    pub fn set_pointer_image_size(&mut self, size: Option<Size>) {
        self.inner.set_pointer_image_size(size);
    }
}

impl GaugeRenderer for SvgElementRenderer {
    fn render_background(&mut self) {
        self.inner.render_background();
    }

    fn render_gauge_base(&mut self) {
        self.inner.render_gauge_base();
    }

    fn render_segments(&mut self, segments: &[SegmentData]) {
        self.inner.render_segments(segments);
    }

    fn render_ticks(&mut self, ticks: &[TickData]) {
        self.inner.render_ticks(ticks);
    }

    fn render_end_labels(&mut self) {
        self.inner.render_end_labels();
    }

    fn render_pointer(&mut self, pointer: &PointerPosition) {
        self.inner.render_pointer(pointer);
    }

    fn render_value_text(&mut self, data: &GaugeData) {
        self.inner.render_value_text(data);
    }

    fn update_pointer(&mut self, pointer: &PointerPosition) {
        self.inner.update_pointer(pointer);
    }

    fn update_value_text(&mut self, data: &GaugeData) {
        self.inner.update_value_text(data);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn update(&mut self, config: Arc<GaugeConfig>, layout: GaugeLayout) {
        self.inner.update(config, layout);
    }

    fn resize_surface(&mut self, size: Size) {
        self.inner.resize_surface(size);
    }

    fn present(&mut self) {
        self.element.set_inner_html(&self.inner.to_svg());
    }

    fn advance(&mut self, dt: f64) -> bool {
        self.inner.advance(dt)
    }

    fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    fn pointer_angle(&self) -> f64 {
        self.inner.pointer_angle()
    }
}

/// Container receiving an SVG document per frame.
pub struct SvgElementHost {
    container: HtmlElement,
}

impl SvgElementHost {
    /// Host drawing into `container`.
    pub const fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl Host for SvgElementHost {
    type Renderer = SvgElementRenderer;

    fn client_width(&self) -> f64 {
        f64::from(self.container.client_width())
    }

    fn attach(
        &mut self,
        config: Arc<GaugeConfig>,
        layout: GaugeLayout,
    ) -> Result<SvgElementRenderer, GaugeError> {
        let element = create_child(&self.container, "div")?;
        element.set_class_name("dialkit-gauge");
        debug!(width = config.width, height = config.height, "svg surface attached");
        Ok(SvgElementRenderer {
            inner: SceneRenderer::new(config, layout),
            element,
        })
    }

    fn detach(&mut self, renderer: &mut SvgElementRenderer) {
        renderer.clear();
        renderer.element.remove();
        debug!("svg surface detached");
    }
}

/// Container receiving a `<canvas>` element.
pub struct CanvasElementHost {
    container: HtmlElement,
}

impl CanvasElementHost {
    /// Host drawing into `container`.
    pub const fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl Host for CanvasElementHost {
    type Renderer = CanvasRenderer<Canvas2d>;

    fn client_width(&self) -> f64 {
        f64::from(self.container.client_width())
    }

    fn attach(
        &mut self,
        config: Arc<GaugeConfig>,
        layout: GaugeLayout,
    ) -> Result<Self::Renderer, GaugeError> {
        let canvas = create_child(&self.container, "canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GaugeError::SurfaceUnavailable("not a canvas".to_string()))?;
        let size = config.size();
        canvas.set_width(size.width.round() as u32);
        canvas.set_height(size.height.round() as u32);
        canvas.set_class_name("dialkit-gauge");
        let surface = Canvas2d::new(canvas).map_err(GaugeError::SurfaceUnavailable)?;
        debug!(width = size.width, height = size.height, "canvas surface attached");
        Ok(CanvasRenderer::new(surface, config, layout))
    }

    fn detach(&mut self, renderer: &mut Self::Renderer) {
        renderer.clear();
        renderer.canvas().element().remove();
        debug!("canvas surface detached");
    }
}
