//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal failures that abort the run
//! - `warn`: row-level failures, fallbacks, unresolved columns
//! - `info`: stage progress, summary counts
//! - `debug`: column map, per-row inference details

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level to emit.
    pub level_filter: LevelFilter,
    /// Output format.
    pub format: LogFormat,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Whether `RUST_LOG` may override the configured level.
    pub use_env_filter: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: true,
            use_env_filter: true,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    }
}

/// Build an `EnvFilter` from the configured level, optionally letting
/// `RUST_LOG` take precedence.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    let default_directives = format!(
        "{level},catalogo_cli={level},catalogo_ingest={level},catalogo_map={level},\
         catalogo_model={level},catalogo_output={level},catalogo_transform={level}"
    );
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
    } else {
        EnvFilter::new(default_directives)
    }
}
