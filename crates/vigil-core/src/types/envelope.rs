//! Response envelopes returned by every API call.

use serde::{Deserialize, Serialize};

/// Envelope for single-resource responses.
///
/// The HTTP status, not `success`, decides whether a call failed; `success`
/// is advisory and left to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Envelope for collection responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata attached to collection responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_rows: u64,
    pub per_page: u32,
    pub current_page: u32,
    pub last_page: u32,
}

impl Pagination {
    /// Returns true if a later page exists.
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}
