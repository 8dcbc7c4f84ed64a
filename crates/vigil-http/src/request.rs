//! Owned request descriptions and per-call attempt tracking.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use vigil_core::error::InvalidInputError;
use vigil_core::{AccessToken, Result};

/// A replayable API request.
///
/// The body is kept as JSON so the same request can be dispatched again after
/// a token refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Payload {
            message: e.to_string(),
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Append query parameters from a flat serializable value.
    ///
    /// `None` fields are skipped; strings are sent verbatim and other scalars
    /// in their JSON form (`true`, `20`).
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let value = serde_json::to_value(params).map_err(|e| InvalidInputError::Payload {
            message: e.to_string(),
        })?;
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Null => {}
                        Value::String(s) => self.query.push((key, s)),
                        Value::Array(_) | Value::Object(_) => {
                            return Err(InvalidInputError::Payload {
                                message: format!("query parameter '{}' is not a scalar", key),
                            }
                            .into());
                        }
                        other => self.query.push((key, other.to_string())),
                    }
                }
            }
            _ => {
                return Err(InvalidInputError::Payload {
                    message: "query parameters must be an object".to_string(),
                }
                .into());
            }
        }
        Ok(self)
    }
}

/// One dispatch of an [`ApiRequest`].
///
/// `attempt` is 0 for the original dispatch and 1 for the single re-dispatch
/// after a refresh. A retry carries the freshly issued token, which takes
/// precedence over whatever the store holds at that moment.
#[derive(Debug, Clone)]
pub struct Attempt {
    request: ApiRequest,
    attempt: u8,
    token: Option<AccessToken>,
}

impl Attempt {
    pub fn first(request: ApiRequest) -> Self {
        Self {
            request,
            attempt: 0,
            token: None,
        }
    }

    /// The re-dispatch of this request with a refreshed token.
    pub fn retry(self, token: AccessToken) -> Self {
        Self {
            request: self.request,
            attempt: self.attempt + 1,
            token: Some(token),
        }
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn number(&self) -> u8 {
        self.attempt
    }

    pub fn is_retry(&self) -> bool {
        self.attempt > 0
    }

    /// Token pinned to this attempt, if any.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }
}
