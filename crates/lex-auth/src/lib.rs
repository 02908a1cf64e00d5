//! # lex-auth
//!
//! Shared-password admin authentication for Lexsite.
//!
//! The admin logs in with the site password (checked against a SHA-256
//! digest from configuration) and receives an HMAC-signed bearer token that
//! every protected admin route verifies.

pub mod error;
pub mod password;
pub mod token;

use chrono::Utc;
use lex_config::AuthConfig;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{Claims, IssuedToken, TokenSigner};

/// Password check plus token issuing and verification, built from the
/// `auth` configuration section.
pub struct Authenticator {
    password_hash: String,
    signer: TokenSigner,
}

impl Authenticator {
    /// # Errors
    ///
    /// Returns `AuthError::NotConfigured` if the section is incomplete or
    /// invalid.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        if let Err(error) = config.validate() {
            tracing::warn!(%error, "admin auth disabled");
            return Err(AuthError::NotConfigured);
        }
        Ok(Self {
            password_hash: config.password_hash.clone(),
            signer: TokenSigner::new(&config.token_secret, config.token_ttl_secs),
        })
    }

    /// Exchange the admin password for a token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPassword` on a wrong password.
    pub fn login(&self, password: &str) -> Result<IssuedToken, AuthError> {
        if !verify_password(password, &self.password_hash) {
            tracing::warn!("rejected admin login");
            return Err(AuthError::InvalidPassword);
        }
        let issued = self.issue()?;
        tracing::info!(expires_at = %issued.expires_at, "admin login");
        Ok(issued)
    }

    /// Issue a token without a password check, for operators who already
    /// hold the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Random` if the nonce cannot be generated.
    pub fn issue(&self) -> Result<IssuedToken, AuthError> {
        self.signer.issue(Utc::now())
    }

    /// Verify an `Authorization` header value of the form `Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingToken` when the header is absent or not a
    /// bearer credential, otherwise the token verification error.
    pub fn authorize(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let token = header
            .map(str::trim)
            .and_then(|value| {
                value
                    .strip_prefix("Bearer ")
                    .or_else(|| value.strip_prefix("bearer "))
            })
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;
        self.signer.verify(token, Utc::now())
    }
}
