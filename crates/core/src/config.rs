//! Runtime configuration
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CURIO_LOG` | `warn` | Filter directive for the tracing subscriber (`EnvFilter` syntax) |
//! | `CURIO_LOG_FORMAT` | `compact` | Log line format: `compact`, `pretty` or `full` |
//! | `CURIO_DEBUG_LIST_LIMIT` | `32` | Array elements shown when displaying a `Value` |
//!
//! Unparseable values fall back to the default.
//!
//! The first call to [`current`] freezes the process-wide configuration,
//! either from an explicit [`install`] or from the environment.

use std::sync::OnceLock;

static CURRENT: OnceLock<RuntimeConfig> = OnceLock::new();

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_DEBUG_LIST_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `EnvFilter` directive, e.g. `curio_core=trace`
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Maximum array elements rendered by `Display for Value`
    pub debug_list_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Full,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Compact,
            debug_list_limit: DEFAULT_DEBUG_LIST_LIMIT,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("CURIO_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = lookup("CURIO_LOG_FORMAT")
            .map(|s| match s.trim().to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "full" => LogFormat::Full,
                _ => LogFormat::Compact,
            })
            .unwrap_or(LogFormat::Compact);

        let debug_list_limit = lookup("CURIO_DEBUG_LIST_LIMIT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_DEBUG_LIST_LIMIT);

        Self {
            log_filter,
            log_format,
            debug_list_limit,
        }
    }
}

/// Fix the process-wide configuration
///
/// Returns false if a configuration was already in effect.
pub fn install(config: RuntimeConfig) -> bool {
    CURRENT.set(config).is_ok()
}

/// The configuration in effect
pub fn current() -> &'static RuntimeConfig {
    CURRENT.get_or_init(RuntimeConfig::from_env)
}
