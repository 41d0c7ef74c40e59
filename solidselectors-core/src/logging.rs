//! Structured logging for transform audit trails using **tracing**.
//!
//! The transform itself only emits `tracing` events (debug-level per
//! rewrite, info-level per statement cleanup); installing a collector is
//! the embedding application's choice. The JSON subscriber here provides
//! machine-readable output for observability platforms.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime. It configures structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=solidselectors_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
