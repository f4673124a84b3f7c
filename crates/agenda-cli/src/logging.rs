use crate::types::LogLevel;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`.
///
/// Events go to stderr so stdout carries only the report.
pub fn init_logging(level: LogLevel) {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Already installed (e.g. a second call in tests) is fine
    let _ = tracing::subscriber::set_global_default(subscriber);
}
