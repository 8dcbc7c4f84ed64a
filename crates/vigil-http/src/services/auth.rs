//! Authentication: login, logout, refresh and password recovery.

use tracing::{info, instrument, warn};

use vigil_core::error::AuthError;
use vigil_core::models::User;
use vigil_core::{AccessToken, Credentials, Error, RefreshToken, Result};

use crate::client::ApiClient;
use crate::endpoints::{
    self, EmailRequest, LoginResponse, ResetPasswordRequest, VerifyResetCodeRequest,
};
use crate::request::ApiRequest;

/// Authentication operations over an [`ApiClient`] and its session.
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in and persist the issued tokens.
    ///
    /// A 401 from the server is reported as [`AuthError::InvalidCredentials`].
    #[instrument(skip(self, credentials), fields(login = %credentials.login()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response: LoginResponse = self
            .client
            .post(endpoints::auth::LOGIN, credentials)
            .await
            .map_err(|e| match e {
                Error::Api(ref api) if api.is_unauthorized() => AuthError::InvalidCredentials.into(),
                other => other,
            })?;

        let refresh = response
            .refresh_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(RefreshToken::new);
        self.client
            .session()
            .set_tokens(AccessToken::new(response.access_token.clone()), refresh)?;

        info!(user = %response.user.id, "Logged in");
        Ok(response)
    }

    /// Log out on the server, then clear the local tokens.
    ///
    /// Tokens are cleared even when the server call fails; that failure is
    /// still returned.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let result = self
            .client
            .execute_empty(ApiRequest::post(endpoints::auth::LOGOUT))
            .await;
        if let Err(ref e) = result {
            warn!(error = %e, "Logout call failed, clearing tokens anyway");
        }

        let cleared = self.client.session().clear_tokens();
        result?;
        cleared?;
        info!("Logged out");
        Ok(())
    }

    /// Refresh the access token on demand.
    pub async fn refresh(&self) -> Result<AccessToken> {
        self.client.refresh_session().await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let request =
            ApiRequest::post(endpoints::auth::FORGOT_PASSWORD).json(&EmailRequest { email })?;
        self.client.execute_empty(request).await
    }

    pub async fn verify_reset_code(&self, email: &str, code: &str) -> Result<()> {
        let request = ApiRequest::post(endpoints::auth::VERIFY_RESET_CODE)
            .json(&VerifyResetCodeRequest { email, code })?;
        self.client.execute_empty(request).await
    }

    pub async fn reset_password(&self, reset: &ResetPasswordRequest) -> Result<()> {
        let request = ApiRequest::post(endpoints::auth::RESET_PASSWORD).json(reset)?;
        self.client.execute_empty(request).await
    }

    /// The logged-in user.
    pub async fn current_user(&self) -> Result<User> {
        self.client.get(endpoints::users::ME).await
    }

    /// True iff an access token is stored. Expiry is not checked.
    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }
}
