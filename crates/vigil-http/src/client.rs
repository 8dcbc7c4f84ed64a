//! JSON API client with bearer injection and a single refresh-and-retry.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, trace, warn};

use vigil_core::error::{ApiError, AuthError, InvalidInputError, TransportError};
use vigil_core::{
    AccessToken, ApiResponse, ApiUrl, Error, PaginatedResponse, RefreshToken, Result, Session,
};

use crate::config::ClientConfig;
use crate::endpoints::{self, RefreshData, RefreshRequest};
use crate::request::{ApiRequest, Attempt};

/// Map a reqwest failure onto the transport error variants.
pub(crate) fn transport_error(err: reqwest::Error, timeout: Duration) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: timeout.as_millis() as u64,
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// `Authorization` header value for a token.
pub(crate) fn bearer(token: &AccessToken) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(&token.bearer()).map_err(|_| InvalidInputError::HeaderValue)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Turn a non-2xx response into an [`ApiError`], keeping status and body.
pub(crate) async fn api_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Error::Api(ApiError::new(status, body))
}

/// HTTP client for the back-office JSON API.
///
/// Every request carries `Authorization: Bearer <token>` when the session
/// holds an access token. A 401 on the first dispatch triggers one refresh
/// and one re-dispatch; a 401 that cannot be remedied tears the session down.
///
/// Clones share the underlying connection pool and session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    timeout: Duration,
    session: Session,
}

impl ApiClient {
    /// Create a client for the configured API.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            session,
        })
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    /// Returns the session this client reads tokens from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an endpoint path, for resources fetched outside the
    /// client (images, documents).
    pub fn url(&self, path: &str) -> String {
        self.base_url.endpoint(path)
    }

    /// Execute a request and decode the 2xx body.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = self.send_with_refresh(request).await?;
        response
            .json::<R>()
            .await
            .map_err(|e| transport_error(e, self.timeout))
    }

    /// Execute a request whose response body is not needed.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<()> {
        self.send_with_refresh(request).await?;
        Ok(())
    }

    /// Execute a request and return the envelope's `data`.
    pub async fn data<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        Ok(self.execute::<ApiResponse<T>>(request).await?.into_data())
    }

    /// Execute a request for a paginated collection.
    pub async fn page<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<PaginatedResponse<T>> {
        self.execute(request).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.data(ApiRequest::get(path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.data(ApiRequest::post(path).json(body)?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.data(ApiRequest::put(path).json(body)?).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.data(ApiRequest::patch(path).json(body)?).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute_empty(ApiRequest::delete(path)).await
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Issued without a bearer header and outside the 401 handling. The new
    /// access token is stored, and so is a rotated refresh token if the server
    /// sent one. Failure leaves the session untouched.
    #[instrument(skip(self), fields(api = %self.base_url))]
    pub async fn refresh_session(&self) -> Result<AccessToken> {
        let refresh = self
            .session
            .refresh_token()
            .ok_or(AuthError::RefreshTokenMissing)?;

        debug!("Refreshing session");
        let response = self
            .http
            .post(self.base_url.endpoint(endpoints::auth::REFRESH))
            .json(&RefreshRequest {
                refresh_token: refresh.as_str(),
            })
            .send()
            .await
            .map_err(|e| AuthError::RefreshFailed {
                reason: transport_error(e, self.timeout).to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = api_error(response).await;
            return Err(AuthError::RefreshFailed {
                reason: err.to_string(),
            }
            .into());
        }

        let envelope: ApiResponse<RefreshData> =
            response.json().await.map_err(|e| AuthError::RefreshFailed {
                reason: format!("malformed refresh response: {}", e),
            })?;
        let data = envelope.into_data();
        if data.access_token.is_empty() {
            return Err(AuthError::RefreshFailed {
                reason: "empty access token".to_string(),
            }
            .into());
        }

        let access = AccessToken::new(data.access_token);
        let rotated = data.refresh_token.filter(|t| !t.is_empty());
        let rotated_refresh = rotated.is_some();
        self.session
            .set_tokens(access.clone(), rotated.map(RefreshToken::new))?;

        info!(rotated_refresh, "Session refreshed");
        Ok(access)
    }

    /// Dispatch with the refresh cycle and return the 2xx response.
    async fn send_with_refresh(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let mut attempt = Attempt::first(request);
        loop {
            let response = self.dispatch(&attempt).await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }
            if status != StatusCode::UNAUTHORIZED {
                return Err(api_error(response).await);
            }

            let unauthorized = api_error(response).await;
            if attempt.is_retry() {
                debug!("Still unauthorized after refresh");
                return Err(unauthorized);
            }

            match self.refresh_session().await {
                Ok(token) => attempt = attempt.retry(token),
                Err(e) => {
                    warn!(error = %e, "Could not recover from 401");
                    self.session.teardown();
                    return Err(unauthorized);
                }
            }
        }
    }

    async fn dispatch(&self, attempt: &Attempt) -> Result<reqwest::Response> {
        let request = attempt.request();
        let url = self.base_url.endpoint(&request.path);

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let token = attempt
            .token()
            .cloned()
            .or_else(|| self.session.access_token());
        let authed = token.is_some();
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, bearer(&token)?);
        }

        debug!(%url, attempt = attempt.number(), authed, "Dispatching request");
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        trace!(status = %response.status(), "Response received");
        Ok(response)
    }
}
