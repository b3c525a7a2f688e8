use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: the TUI owns stdout and any log
/// lines would corrupt the display. Set `PHARMADASH_LOG` to a file
/// path to enable it; `RUST_LOG` controls the filter.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("PHARMADASH_LOG") else {
        return;
    };

    // Suffix with the PID so concurrent instances don't clobber each
    // other's files.
    let unique_path = format!("{}.{}", log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
