#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Rendering backends for dialkit gauges.
//!
//! Both backends implement [`GaugeRenderer`] over the geometry computed by
//! `dialkit-layout`; neither does its own trigonometry.
//!
//! - [`SceneRenderer`]: retained scene of class-tagged nodes, updated by
//!   keyed joins and exported as SVG. The pointer is animated by an
//!   [`Animator`].
//! - [`CanvasRenderer`]: immediate mode. Render calls record frame state and
//!   [`GaugeRenderer::present`] repaints the whole frame onto a
//!   [`dialkit_core::Canvas`].

mod animator;
mod canvas_renderer;
mod readout;
mod scene;
mod scene_renderer;
mod shapes;
mod style;
mod svg;

pub use animator::{Animator, PointerState, Transition};
pub use canvas_renderer::CanvasRenderer;
pub use readout::Readout;
pub use scene::{compose, Element, Node, NodeId, Scene, TransformOp};
pub use scene_renderer::{class, SceneRenderer};
pub use svg::{escape, transform_attr};

use dialkit_config::{GaugeConfig, GaugeData};
use dialkit_core::Size;
use dialkit_layout::{GaugeLayout, PointerPosition, SegmentData, TickData};
use std::sync::Arc;

/// Rotation added to the pointer angle for the image pointer, whose asset
/// points up rather than along +x.
pub const IMAGE_POINTER_ROTATION: f64 = 90.0;

/// Drawing capability shared by the gauge backends.
///
/// Full renders call every `render_*` method in order after [`clear`];
/// value-only changes call [`update_pointer`] and [`update_value_text`].
///
/// [`clear`]: GaugeRenderer::clear
/// [`update_pointer`]: GaugeRenderer::update_pointer
/// [`update_value_text`]: GaugeRenderer::update_value_text
pub trait GaugeRenderer {
    /// Draw the background ring.
    fn render_background(&mut self);

    /// Draw the body ring under the segments.
    fn render_gauge_base(&mut self);

    /// Draw segment slices and the separators between them.
    fn render_segments(&mut self, segments: &[SegmentData]);

    /// Draw tick lines and tick labels, removing whichever is disabled.
    fn render_ticks(&mut self, ticks: &[TickData]);

    /// Draw the start and end labels.
    fn render_end_labels(&mut self);

    /// Draw the pointer at its final angle, dropping any animation.
    fn render_pointer(&mut self, pointer: &PointerPosition);

    /// Draw the value box, value and caption.
    fn render_value_text(&mut self, data: &GaugeData);

    /// Move the pointer, animated when enabled.
    fn update_pointer(&mut self, pointer: &PointerPosition);

    /// Change the value and caption text in place.
    fn update_value_text(&mut self, data: &GaugeData);

    /// Remove everything drawn.
    fn clear(&mut self);

    /// Swap configuration and layout and reset the drawing structure.
    fn update(&mut self, config: Arc<GaugeConfig>, layout: GaugeLayout);

    /// Resize the drawing surface.
    fn resize_surface(&mut self, size: Size);

    /// Flush the frame to the surface.
    fn present(&mut self) {}

    /// Step animations by `dt` seconds. Returns whether more frames are needed.
    fn advance(&mut self, dt: f64) -> bool;

    /// Whether an animation is in flight.
    fn is_animating(&self) -> bool;

    /// Pointer rotation as currently drawn, in degrees.
    fn pointer_angle(&self) -> f64;
}
