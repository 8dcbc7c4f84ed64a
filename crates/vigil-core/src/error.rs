//! Error types for vigil.
//!
//! A single error type with explicit variants for transport, authentication,
//! API (HTTP status), input validation and token-storage failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for vigil operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors raised by the client itself.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-2xx responses from the API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (base URL, header values, payloads).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Token storage errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Returns the HTTP status if this error came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns true if this is a 401 from the API.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api(err) if err.is_unauthorized())
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication errors detected on the client side.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No access token is stored.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A refresh was needed but no refresh token is stored.
    #[error("no refresh token available")]
    RefreshTokenMissing,

    /// The refresh call failed.
    #[error("token refresh failed: {reason}")]
    RefreshFailed { reason: String },

    /// The server rejected the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// An API error carrying the original status and body.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The envelope `message`, when the body was an envelope.
    pub message: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create an API error from a status and raw body.
    ///
    /// The envelope `message` is extracted when the body is JSON.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .filter(|m| !m.is_empty());
        Self {
            status,
            message,
            body,
        }
    }

    /// Check if this is a 401.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A token contained characters not allowed in an HTTP header.
    #[error("token is not a valid header value")]
    HeaderValue,

    /// A payload could not be serialized.
    #[error("invalid payload: {message}")]
    Payload { message: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// Token storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// The stored session could not be parsed or written.
    #[error("corrupt session data: {message}")]
    Corrupt { message: String },
}
