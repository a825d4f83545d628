//! Logging setup with tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `default_level`
/// and tower-http request traces at `info`.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let default_directives = format!(
        "{}={},tower_http=info",
        app_name.replace('-', "_"),
        default_level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
