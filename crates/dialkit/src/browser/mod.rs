//! Browser runtime for dialkit gauges.
//!
//! Bridges [`GaugeChart`](crate::GaugeChart) to DOM containers: an SVG
//! surface rewritten on every frame, or a Canvas2D surface repainted on
//! every frame.

pub mod canvas2d;
pub mod gauge;
pub mod host;

pub use canvas2d::Canvas2d;
pub use gauge::{measure_image, WasmGauge};
pub use host::{container_by_id, CanvasElementHost, SvgElementHost, SvgElementRenderer};
