use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("admin auth is not configured; set auth.password_hash and auth.token_secret")]
    NotConfigured,

    #[error("invalid password")]
    InvalidPassword,

    #[error("missing bearer token")]
    MissingToken,

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("token signature mismatch")]
    BadSignature,

    #[error("token expired")]
    TokenExpired,

    #[error("failed to generate token nonce: {0}")]
    Random(String),

    #[error("{0}")]
    Other(String),
}
