//! Subscriber setup.

use super::{tracer, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Picks the filter directive for the subscriber.
///
/// `env` is the value of `RUST_LOG` if set. A blank value counts as unset.
///
/// # Examples
///
/// ```
/// use jobfinder::observability::resolve_level;
/// use jobfinder::Config;
///
/// let config = Config { trace_level: Some("debug".to_string()), ..Config::default() };
/// assert_eq!(resolve_level(&config, None), "debug");
/// assert_eq!(resolve_level(&config, Some("jobfinder=trace")), "jobfinder=trace");
/// assert_eq!(resolve_level(&Config::default(), None), "info");
/// ```
#[must_use]
pub fn resolve_level(config: &Config, env: Option<&str>) -> String {
    env.map(str::trim)
        .filter(|value| !value.is_empty())
        .or(config.trace_level.as_deref())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Installs the global subscriber with file-based OTLP export.
///
/// Called once from the plugin's `load` and once on the worker's first
/// message. Later calls are no-ops because `try_init` refuses to replace an
/// installed subscriber.
///
/// If the data directory cannot be created, tracing stays disabled and the
/// plugin runs normally.
pub fn init_tracing(config: &Config) {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let level = resolve_level(config, env_level.as_deref());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("jobfinder.region", config.region.key()),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_env_falls_back_to_config() {
        let config = Config {
            trace_level: Some("warn".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_level(&config, Some("  ")), "warn");
    }
}
