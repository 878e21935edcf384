//! Tracing subscriber setup
//!
//! The core only emits `tracing` events. Embedders that want them printed
//! call [`install_tracing`] once at startup; later calls are no-ops.
//!
//! ```bash
//! CURIO_LOG=curio_core=trace ./generated-program
//! ```

use crate::config::{self, LogFormat, RuntimeConfig};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Filter from `config.log_filter`, or the default filter if it does not parse
fn build_filter(config: &RuntimeConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|err| {
        eprintln!(
            "curio: ignoring invalid log filter {:?}: {}",
            config.log_filter, err
        );
        EnvFilter::new(config::DEFAULT_LOG_FILTER)
    })
}

/// Install a stderr subscriber configured by `config`
///
/// Idempotent. Leaves any subscriber installed by the embedder in place.
pub fn install_tracing(config: &RuntimeConfig) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(config);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let installed = match config.log_format {
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Full => builder.try_init(),
        };

        if installed.is_ok() {
            tracing::debug!(filter = %config.log_filter, "tracing installed");
        }
    });
}

/// Install tracing using the process-wide configuration
pub fn install_tracing_from_env() {
    install_tracing(config::current());
}
