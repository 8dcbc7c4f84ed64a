//! Multipart upload client.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};

use vigil_core::error::TransportError;
use vigil_core::{ApiResponse, ApiUrl, Result, Session};

use crate::client::{api_error, bearer, transport_error};
use crate::config::ClientConfig;

/// Client for `multipart/form-data` uploads.
///
/// Shares the bearer injection of [`ApiClient`](crate::ApiClient) but never
/// refreshes: form bodies are consumed by the first dispatch, so any 401
/// tears the session down and is returned to the caller.
#[derive(Debug, Clone)]
pub struct MultipartClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    timeout: Duration,
    session: Session,
}

impl MultipartClient {
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.upload_timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout: config.upload_timeout,
            session,
        })
    }

    /// Send a form and decode the 2xx body.
    #[instrument(skip(self, form), fields(api = %self.base_url))]
    pub async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<R> {
        let url = self.base_url.endpoint(path);
        let mut builder = self.http.request(method, &url).multipart(form);

        let token = self.session.access_token();
        let authed = token.is_some();
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, bearer(&token)?);
        }

        debug!(%url, authed, "Uploading form");
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        trace!(%status, "Upload response");

        if status == StatusCode::UNAUTHORIZED {
            let err = api_error(response).await;
            warn!("Upload rejected as unauthorized");
            self.session.teardown();
            return Err(err);
        }
        if !status.is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<R>()
            .await
            .map_err(|e| transport_error(e, self.timeout))
    }

    /// POST a form and return the envelope's `data`.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        Ok(self
            .send::<ApiResponse<T>>(Method::POST, path, form)
            .await?
            .into_data())
    }
}
