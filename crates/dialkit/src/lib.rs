//! dialkit: configurable semicircular gauge charts.
//!
//! A [`GaugeChart`] shows one value against colored segments, with a
//! pointer, ticks, end labels and a value read-out. It draws through any
//! [`Host`]:
//!
//! - [`SvgHost`]: headless, retained scene exported as SVG
//! - [`RecordingHost`]: headless, immediate mode into a recording canvas
//! - `browser::SvgElementHost` / `browser::CanvasElementHost` (wasm32):
//!   live DOM surfaces, wrapped for JavaScript by `browser::WasmGauge`
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { WasmGauge } from './dialkit.js';
//!
//! async function main() {
//!     await init();
//!     const gauge = new WasmGauge('gauge', '{"pointer": {"type": "line"}}', 'svg');
//!     gauge.setValue(42);
//!     const frame = () => { if (gauge.tick(16)) requestAnimationFrame(frame); };
//!     requestAnimationFrame(frame);
//! }
//! ```

#[cfg(target_arch = "wasm32")]
pub mod browser;
mod chart;
mod error;
mod host;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use chart::GaugeChart;
pub use error::GaugeError;
pub use host::{HeadlessHost, HeadlessRenderer, Host, RecordingHost, SvgHost};

pub use dialkit_config::{ConfigError, GaugeConfig, GaugeData, GaugeOptions};
pub use dialkit_layout::{GaugeLayout, GaugeLayoutCalculator};
pub use dialkit_render::{CanvasRenderer, GaugeRenderer, SceneRenderer};
