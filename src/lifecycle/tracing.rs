//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. Log levels are configured through the `RUST_LOG` environment
//! variable:
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads and per-message detail
//! RUST_LOG=debug cargo run
//! ```
//!
//! The compact format hides module paths (`with_target(false)`) and shows
//! span hierarchy inline, e.g. `order_submission:submit: Sending request`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
