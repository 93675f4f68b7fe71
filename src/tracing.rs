//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing on stderr. Safe to call multiple times.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .compact()
            .try_init();

        if let Err(error) = result {
            eprintln!("Failed to initialize tracing: {}", error);
        }
    });
}
