//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`); the output format from
//! `AIRPACK_LOG_FORMAT` (`json`, the default, or `pretty`).

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "AIRPACK_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line output for local runs.
    Pretty,
}

impl LogFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }

    /// Pick the format for an optional setting.
    ///
    /// Unset means the default; an unrecognised name is handed back so the
    /// caller can report it once a subscriber exists.
    pub fn select(raw: Option<&str>) -> Result<Self, String> {
        match raw {
            None => Ok(LogFormat::default()),
            Some(raw) => Self::parse(raw).ok_or_else(|| raw.to_string()),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let raw = std::env::var(LOG_FORMAT_ENV).ok();

    match LogFormat::select(raw.as_deref()) {
        Ok(format) => init_with(format),
        Err(unknown) => {
            init_with(LogFormat::default());
            ::tracing::warn!(format = %unknown, "unknown {LOG_FORMAT_ENV}; using json");
        }
    }
}

/// Initialize with an explicit format, still honouring `RUST_LOG`.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
