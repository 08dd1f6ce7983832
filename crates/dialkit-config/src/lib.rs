//! Configuration model for dialkit gauge charts.
//!
//! - [`GaugeConfig`]: the fully defaulted settings tree
//! - [`GaugeOptions`]: partial overrides, loadable from JSON or YAML
//! - [`GaugeData`]: the reading a gauge displays
//! - [`ConfigError`]: validation and parsing failures
//!
//! ```
//! use dialkit_config::GaugeOptions;
//!
//! let config = GaugeOptions::from_json(r#"{"pointer": {"color": "red"}}"#)
//!     .and_then(|options| options.resolve())
//!     .unwrap();
//! assert_eq!(config.pointer.width, 4.0);
//! ```

mod config;
mod data;
mod error;
mod options;
mod validation;

pub use config::{
    AnimationConfig, BaseRadiusConfig, BorderConfig, CenterCircleConfig, EndLabelsConfig, Fill,
    FontConfig, GaugeConfig, GradientConfig, LabelPosition, LayoutConfig, PointerConfig,
    PointerImageConfig, PointerKind, RingConfig, Segment, ShadowConfig, TextConfig,
    TickLabelConfig, TicksConfig, ValueBoxConfig, ValueRange, DEFAULT_POINTER_IMAGE,
    SEPARATOR_COLOR, SEPARATOR_WIDTH,
};
pub use data::GaugeData;
pub use error::ConfigError;
pub use options::{
    AnimationOptions, BaseRadiusOptions, BorderOptions, CenterCircleOptions, EndLabelsOptions,
    FontOptions, GaugeOptions, GradientOptions, LayoutOptions, PointerImageOptions,
    PointerOptions, RangeOptions, RingOptions, ShadowOptions, TextOptions, TickLabelOptions,
    TicksOptions, ValueBoxOptions,
};
pub use validation::MAX_TICK_COUNT;
