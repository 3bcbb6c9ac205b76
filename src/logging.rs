//! Инициализация tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `RUST_LOG` приоритетнее флага `--verbose`
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
