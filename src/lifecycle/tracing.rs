//! Tracing setup for the catalog system.
//!
//! Structured logging with the `tracing` crate. The compact format hides
//! module paths (`with_target(false)`) since the log fields already say
//! which component is talking.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events
//! RUST_LOG=debug cargo run     # full request payloads
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
