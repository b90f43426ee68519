//! Client for the HerdLink cattle monitoring backend.
//!
//! Every backend response is wrapped in a `{success, data, error}` envelope;
//! this crate owns the envelope protocol (unwrap `data` on success, build an
//! error from the backend's fallback chain otherwise) and exposes one typed
//! method per backend operation on [`ApiClient`].
//!
//! It intentionally contains **no** retry policy, **no** caching, and **no**
//! shared state beyond the connection pool inside `reqwest::Client`.

pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod ops;

pub use client::ApiClient;
pub use error::{ApiError, Result};
