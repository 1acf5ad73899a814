use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "orbis_ui=debug,orbis_engine=warn"). When it is `None` the `RUST_LOG`
/// environment variable is consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Configuration with an explicit filter string.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored, so tests and demos may call it freely.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed by the host; keep it.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
