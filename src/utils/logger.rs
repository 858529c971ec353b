use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{prelude::*, EnvFilter};

pub enum TracingMode {
    /// Default tracing, for running the mock locally
    Full,
    /// JSON tracing, for running the mock in a container
    Json,
}

/// Setup tracing - stdout subscriber
/// stdout defaults to INFO; tower_http request tracing runs at DEBUG unless RUST_LOG says otherwise
pub fn setup_tracing(mode: TracingMode) -> Result<()> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    let var = std::env::var("RUST_LOG").unwrap_or("".to_string());
    if !var.contains("tower_http") {
        // API request/response debug tracing
        filter = filter.add_directive("tower_http::trace=debug".parse()?);
    }

    match mode {
        TracingMode::Full => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(filter))
            .init(),
        TracingMode::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(tracing_subscriber::fmt::format().json())
                    .with_filter(filter),
            )
            .init(),
    }

    Ok(())
}
