//! Core value types.
//!
//! These types enforce invariants at construction time.

mod api_url;
mod envelope;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use envelope::{ApiResponse, Pagination, PaginatedResponse};
