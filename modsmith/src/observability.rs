//! Observability (logging and tracing)
//!
//! Structured logging for the generator and its front ends. No metrics
//! layer; the whole run is near-instant and the logs are the story.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack.
///
/// Sets up:
/// - Structured logging with pretty formatting (dev) or JSON (production)
/// - Environment-based log level filtering via `RUST_LOG`
///
/// # Errors
///
/// Currently infallible; returns `Result` so callers are insulated from
/// future initialization failure modes.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> anyhow::Result<()> {
/// modsmith::observability::init()?;
/// tracing::info!("generator starting");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("debug,modsmith=trace")
        } else {
            EnvFilter::new("info")
        }
    });

    #[cfg(debug_assertions)]
    {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        // JSON formatting for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }

    Ok(())
}
