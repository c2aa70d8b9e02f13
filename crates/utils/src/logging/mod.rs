use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn, Level};

/// Initialize the tracing system
///
/// `level` is a filter directive, normally `Config::log.level`, which
/// already carries any `CREDBROKER_LOG` override applied by the loader.
/// Output is compact, uncoloured and goes to stderr so it never mixes with
/// values a caller prints on stdout.
///
/// Fails if the directive does not parse or a global subscriber is already
/// installed.
pub fn init(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_new(level)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
