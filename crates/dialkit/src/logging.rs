//! Diagnostic output.
//!
//! The library only emits `tracing` events. Native binaries and tests call
//! [`init`] to print them; in the browser the panic hook installed by
//! `WasmGauge` covers the fatal path.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,dialkit=debug";

/// Install a formatted subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
    init_with(filter)
}

/// Install a formatted subscriber with an explicit filter directive.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_with(filter: impl Into<tracing_subscriber::EnvFilter>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
