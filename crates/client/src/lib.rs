//! REST client for the LIMS backend.
//!
//! [`LimsBackend`] is the seam the console talks through; [`ApiClient`]
//! implements it over HTTP with bearer-token auth against a single
//! configured base URL.

pub mod api;
pub mod backend;
pub mod envelope;
pub mod error;
pub mod reference;

pub use api::ApiClient;
pub use backend::{submit, LimsBackend, PageRequest};
pub use envelope::ListEnvelope;
pub use error::{ApiError, FALLBACK_MESSAGE};
pub use reference::{fetch_reference_options, ReferenceOptions};
