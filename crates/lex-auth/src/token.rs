//! Signed admin session tokens.
//!
//! Format: `base64url(claims JSON) "." base64url(HMAC-SHA256(secret, payload))`,
//! where the MAC covers the encoded payload segment. No padding.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Subject of every admin token; there is a single shared admin identity.
pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
    pub nonce: String,
}

impl Claims {
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// A freshly issued token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct TokenSigner {
    secret: Vec<u8>,
    ttl: TimeDelta,
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            secret: secret.as_bytes().to_vec(),
            ttl: TimeDelta::try_seconds(ttl_secs).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Issue a token valid from `now` for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Random` if the nonce cannot be generated.
    pub fn issue(&self, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        let mut nonce_bytes = [0u8; 16];
        getrandom::fill(&mut nonce_bytes).map_err(|e| AuthError::Random(e.to_string()))?;

        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nonce: nonce_bytes.iter().map(|b| format!("{b:02x}")).collect(),
        };

        let json = serde_json::to_vec(&claims).map_err(|e| AuthError::Other(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = URL_SAFE_NO_PAD.encode(self.mac(payload.as_bytes())?.finalize().into_bytes());

        Ok(IssuedToken {
            token: format!("{payload}.{signature}"),
            expires_at: claims.expires_at(),
        })
    }

    /// Verify the signature, then the expiry.
    ///
    /// # Errors
    ///
    /// `AuthError::MalformedToken`, `AuthError::BadSignature`, or
    /// `AuthError::TokenExpired`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| AuthError::MalformedToken("expected two segments".into()))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|e| AuthError::MalformedToken(format!("signature: {e}")))?;

        self.mac(payload.as_bytes())?
            .verify_slice(&signature)
            .map_err(|_| AuthError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AuthError::MalformedToken(format!("payload: {e}")))?;
        let claims: Claims = serde_json::from_slice(&json)
            .map_err(|e| AuthError::MalformedToken(format!("claims: {e}")))?;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AuthError::MalformedToken(format!("unexpected subject '{}'", claims.sub)));
        }
        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }

    fn mac(&self, payload: &[u8]) -> Result<HmacSha256, AuthError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Other(format!("invalid signing key: {e}")))?;
        mac.update(payload);
        Ok(mac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret-0123456789";

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn issued_token_verifies_until_expiry() {
        let signer = TokenSigner::new(SECRET, 60);
        let issued = signer.issue(at(1_000)).unwrap();
        assert_eq!(issued.expires_at, at(1_060));

        let claims = signer.verify(&issued.token, at(1_059)).unwrap();
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.nonce.len(), 32);

        assert!(matches!(
            signer.verify(&issued.token, at(1_060)),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn tokens_are_unique() {
        let signer = TokenSigner::new(SECRET, 60);
        let a = signer.issue(at(0)).unwrap();
        let b = signer.issue(at(0)).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn other_secret_is_rejected() {
        let issued = TokenSigner::new(SECRET, 60).issue(at(0)).unwrap();
        let other = TokenSigner::new("another-secret-entirely!!", 60);
        assert!(matches!(
            other.verify(&issued.token, at(1)),
            Err(AuthError::BadSignature)
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let signer = TokenSigner::new(SECRET, 60);
        let issued = signer.issue(at(0)).unwrap();
        let (_, signature) = issued.token.split_once('.').unwrap();

        let forged_claims = Claims {
            sub: ADMIN_SUBJECT.into(),
            iat: 0,
            exp: i64::MAX,
            nonce: "00".into(),
        };
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{forged_payload}.{signature}");
        assert!(matches!(
            signer.verify(&forged, at(1)),
            Err(AuthError::BadSignature)
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        let signer = TokenSigner::new(SECRET, 60);
        assert!(matches!(
            signer.verify("no-dot-here", at(0)),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(matches!(
            signer.verify("abc.!!!", at(0)),
            Err(AuthError::MalformedToken(_))
        ));
    }
}
