//! vigil-http - Session-managed HTTP client for the back-office API.
//!
//! [`ApiClient`] injects the bearer token, refreshes once on a 401 and tears
//! the session down when it cannot recover. [`MultipartClient`] uploads forms
//! without refreshing. The [`services`] facades map typed calls onto
//! [`endpoints`].

mod backoffice;
mod client;
mod config;
pub mod endpoints;
mod multipart;
mod request;
pub mod services;

pub use backoffice::Backoffice;
pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, UPLOAD_TIMEOUT, USER_AGENT};
pub use endpoints::{LoginResponse, RefreshData};
pub use multipart::MultipartClient;
pub use request::{ApiRequest, Attempt};
