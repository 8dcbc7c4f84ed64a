//! vigil-core - Core types and traits for the back-office API client.

pub mod credentials;
pub mod error;
pub mod memory;
pub mod models;
pub mod session;
pub mod state;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use memory::MemoryTokenStore;
pub use session::{LOGIN_PATH, Session};
pub use state::ListState;
pub use tokens::{AccessToken, RefreshToken, TokenPair};
pub use traits::{Navigator, NoopNavigator, TokenStore};
pub use types::{ApiResponse, ApiUrl, PaginatedResponse, Pagination};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
