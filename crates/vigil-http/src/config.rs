//! Client configuration.

use std::time::Duration;

use vigil_core::ApiUrl;

/// Timeout for JSON requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for multipart uploads.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("vigil/", env!("CARGO_PKG_VERSION"));

/// Settings shared by [`ApiClient`](crate::ApiClient) and
/// [`MultipartClient`](crate::MultipartClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: ApiUrl,
    pub timeout: Duration,
    pub upload_timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for a specific API base URL with default timeouts.
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            upload_timeout: UPLOAD_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
