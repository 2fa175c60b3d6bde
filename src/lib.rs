//! Client-side data layer for the Freeport freelance marketplace.
//!
//! The backend exposes a REST API with two naming conventions
//! (PascalCase database columns and snake_case attributes) and an
//! inconsistent response envelope. This crate absorbs both: every
//! response is normalized into one canonical snake_case view model, an
//! identity resolver maps auth accounts onto marketplace profiles, and
//! optimistic toggle machines keep bookmark and notification state
//! responsive while requests are in flight.

pub mod api;
pub mod completion;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod media;
pub mod normalize;
pub mod session;
pub mod toggle;
pub mod types;

pub use config::ApiConfig;
pub use error::ApiError;
pub use http::ApiClient;
pub use session::Session;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filter defaults to `info` for this crate and is overridable through
/// `RUST_LOG`. Safe to call once per process; embedding applications
/// that bring their own subscriber should skip it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("freeport_client=info"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .init();
}
