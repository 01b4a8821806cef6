//! Admin credentials and bearer tokens.

use std::fmt;
use std::sync::Arc;

use zeroize::Zeroizing;

/// Administrator login for `POST /admins/auth-with-password`.
///
/// The password is wiped from memory on drop and never printed.
///
/// ```rust
/// use pocketbase_bootstrap::AdminCredentials;
///
/// let creds = AdminCredentials::new("admin@example.com", "hunter22");
/// assert_eq!(creds.email(), "admin@example.com");
/// assert!(!format!("{:?}", creds).contains("hunter22"));
/// ```
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl AdminCredentials {
    /// Creates admin credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Returns the admin email (the login identity).
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A bearer token attached as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    token: Arc<str>,
}

impl BearerToken {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl<S: Into<String>> From<S> for BearerToken {
    fn from(token: S) -> Self {
        Self::new(token)
    }
}
