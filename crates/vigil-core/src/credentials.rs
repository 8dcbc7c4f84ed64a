//! Login credentials type.

use std::fmt;

use serde::Serialize;

/// Login credentials for `POST /auth/login`.
///
/// `login` is an email address or phone number; the API accepts either.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use vigil_core::Credentials;
///
/// let creds = Credentials::new("admin@alphsecurite.ci", "secret");
/// assert_eq!(creds.login(), "admin@alphsecurite.ci");
/// ```
#[derive(Clone, Serialize)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Returns the login identifier.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the password.
    ///
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
