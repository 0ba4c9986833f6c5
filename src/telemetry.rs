//! Telemetry helpers for applications embedding `chart-waterfall`.
//!
//! The crate only emits `tracing` events (lifecycle transitions at `debug`,
//! per-connector geometry at `trace`, option fallbacks at `warn`). Hosts
//! either call one of the initializers below or wire their own subscriber.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "chart_waterfall=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive,
/// e.g. `"chart_waterfall=trace"` to dump connector geometry.
#[must_use]
pub fn init_tracing_with_fallback(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
