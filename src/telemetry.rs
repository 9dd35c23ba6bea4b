//! Opt-in log output for hosts embedding `zoomchart`.
//!
//! The engine emits `tracing` events only: engine creation and data swaps at
//! `debug`, per-gesture zoom/pan steps at `trace`, skipped taps at `warn`.
//! Hosts with their own subscriber ignore this module.

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "ZOOMCHART_LOG";

/// Directives used when neither environment variable is set.
pub const DEFAULT_LOG_DIRECTIVES: &str = "zoomchart=info";

/// Installs a compact fmt subscriber filtered by `ZOOMCHART_LOG`, then
/// `RUST_LOG`, then [`DEFAULT_LOG_DIRECTIVES`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    let directives = std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVES.to_owned());
    init_tracing_with_directives(&directives)
}

/// Same as [`init_default_tracing`] with explicit filter directives, e.g.
/// `"zoomchart::api=trace"` to follow every gesture step.
#[must_use]
pub fn init_tracing_with_directives(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_new(directives)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
