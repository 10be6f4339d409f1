use std::env;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "homework_bot=debug";

/// Installs the global subscriber: stdout always, plus `LOG_FILE` when set.
pub fn init_logging() -> io::Result<()> {
    let filter = EnvFilter::new(
        env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
    );

    let file_layer = match env::var("LOG_FILE") {
        Ok(path) if !path.is_empty() => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_line_number(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        _ => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_line_number(true))
        .with(file_layer)
        .init();

    Ok(())
}
