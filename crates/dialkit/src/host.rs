//! Containers that provide a chart's drawing surface.

use crate::GaugeError;
use dialkit_config::GaugeConfig;
use dialkit_core::RecordingCanvas;
use dialkit_layout::GaugeLayout;
use dialkit_render::{CanvasRenderer, GaugeRenderer, SceneRenderer};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A container a chart draws into.
///
/// The chart appends exactly one surface on [`attach`](Host::attach) and
/// removes that same surface on [`detach`](Host::detach).
pub trait Host {
    /// Renderer drawing onto the attached surface.
    type Renderer: GaugeRenderer;

    /// Current width of the container in pixels.
    fn client_width(&self) -> f64;

    /// Create the surface for `config` and return a renderer bound to it.
    fn attach(
        &mut self,
        config: Arc<GaugeConfig>,
        layout: GaugeLayout,
    ) -> Result<Self::Renderer, GaugeError>;

    /// Remove the surface created by `attach`.
    fn detach(&mut self, renderer: &mut Self::Renderer);
}

/// Builds a renderer for [`HeadlessHost`].
pub trait HeadlessRenderer: GaugeRenderer + Sized {
    /// Renderer for a freshly attached surface.
    fn create(config: Arc<GaugeConfig>, layout: GaugeLayout) -> Self;
}

impl HeadlessRenderer for SceneRenderer {
    fn create(config: Arc<GaugeConfig>, layout: GaugeLayout) -> Self {
        Self::new(config, layout)
    }
}

impl HeadlessRenderer for CanvasRenderer<RecordingCanvas> {
    fn create(config: Arc<GaugeConfig>, layout: GaugeLayout) -> Self {
        Self::new(RecordingCanvas::new(), config, layout)
    }
}

/// In-memory host for native use and tests.
///
/// Tracks how many surfaces are attached so callers can check that a chart
/// cleans up after itself.
#[derive(Debug)]
pub struct HeadlessHost<R> {
    client_width: f64,
    surfaces: usize,
    unavailable: Option<String>,
    renderer: PhantomData<fn() -> R>,
}

impl<R> HeadlessHost<R> {
    /// Host whose container is `client_width` pixels wide.
    #[must_use]
    pub const fn new(client_width: f64) -> Self {
        Self {
            client_width,
            surfaces: 0,
            unavailable: None,
            renderer: PhantomData,
        }
    }

    /// Host that refuses to create a surface.
    #[must_use]
    pub fn without_surface(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::new(0.0)
        }
    }

    /// Change the container width, as a browser layout change would.
    pub fn set_client_width(&mut self, width: f64) {
        self.client_width = width;
    }

    /// Number of surfaces currently attached.
    #[must_use]
    pub const fn surface_count(&self) -> usize {
        self.surfaces
    }
}

impl<R: HeadlessRenderer> Host for HeadlessHost<R> {
    type Renderer = R;

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn attach(&mut self, config: Arc<GaugeConfig>, layout: GaugeLayout) -> Result<R, GaugeError> {
        if let Some(reason) = &self.unavailable {
            return Err(GaugeError::SurfaceUnavailable(reason.clone()));
        }
        self.surfaces += 1;
        debug!(width = config.width, height = config.height, "headless surface attached");
        Ok(R::create(config, layout))
    }

    fn detach(&mut self, renderer: &mut R) {
        renderer.clear();
        self.surfaces = self.surfaces.saturating_sub(1);
        debug!("headless surface detached");
    }
}

/// Headless host producing SVG through a [`SceneRenderer`].
pub type SvgHost = HeadlessHost<SceneRenderer>;

/// Headless host recording draw commands through a [`CanvasRenderer`].
pub type RecordingHost = HeadlessHost<CanvasRenderer<RecordingCanvas>>;
