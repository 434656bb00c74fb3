use std::sync::Once;

/// Filter applied when neither the config nor `RUST_LOG` provides one.
///
/// The windowing and context crates are chatty at `info`; cap them at `warn`.
pub const DEFAULT_FILTER: &str = "info,winit=warn,glutin=warn,glutin_winit=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "trigon_engine=trace,winit=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Picks the filter string: explicit config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub(crate) fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    config
        .env_filter
        .clone()
        .or(rust_log)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global `env_logger` backend once.
///
/// Later calls are no-ops. Call it first thing in `main`, before the window
/// and GL context come up, so bootstrap steps are visible.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized (filter: {filter})");
    });
}
