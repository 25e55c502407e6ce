//! HTTP client for the ledger server's enveloped JSON API.
//!
//! Every endpoint wraps its payload in `{code, msg, data}`. This module
//! owns unwrapping that envelope, classifying failures, and attaching
//! auth to outgoing requests. Callers get `Result<Option<T>, ApiError>`
//! and never see HTTP details.

mod client;
mod envelope;
mod error;
pub mod types;

pub use client::ApiClient;
pub use envelope::{required, Envelope};
pub use error::ApiError;
