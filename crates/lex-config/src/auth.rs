//! Admin authentication configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default admin token lifetime: 8 hours.
const fn default_token_ttl_secs() -> u64 {
    8 * 60 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Hex SHA-256 digest of the shared admin password.
    #[serde(default)]
    pub password_hash: String,

    /// Secret used to sign admin tokens.
    #[serde(default)]
    pub token_secret: String,

    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_hash: String::new(),
            token_secret: String::new(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

impl AuthConfig {
    /// Check if both the password digest and the signing secret are set.
    pub fn is_configured(&self) -> bool {
        !self.password_hash.is_empty() && !self.token_secret.is_empty()
    }

    /// Require a usable auth section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when fields are missing and
    /// `ConfigError::InvalidValue` for a malformed digest, a short secret, or
    /// a zero TTL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "auth".into(),
            });
        }
        if self.password_hash.len() != 64
            || !self.password_hash.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::InvalidValue {
                field: "auth.password_hash".into(),
                reason: "expected a 64-character hex SHA-256 digest".into(),
            });
        }
        if self.token_secret.len() < 16 {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_secret".into(),
                reason: "must be at least 16 characters".into(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_ttl_secs".into(),
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

    #[test]
    fn default_is_not_configured() {
        let config = AuthConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.token_ttl_secs, 28_800);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn accepts_valid_section() {
        let config = AuthConfig {
            password_hash: DIGEST.into(),
            token_secret: "a-long-enough-signing-secret".into(),
            token_ttl_secs: 60,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_digest() {
        let config = AuthConfig {
            password_hash: "not-hex".into(),
            token_secret: "a-long-enough-signing-secret".into(),
            token_ttl_secs: 60,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "auth.password_hash"
        ));
    }
}
