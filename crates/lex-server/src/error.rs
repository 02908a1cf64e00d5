//! API error taxonomy and its mapping onto HTTP statuses.

use lex_auth::AuthError;
use lex_core::api::ErrorBody;
use lex_parser::ParserError;
use lex_store::StoreError;
use lex_sync::SyncError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Unauthorized,
    MethodNotAllowed,
    PayloadTooLarge,
    Sync,
    Io,
}

impl ErrorKind {
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::PayloadTooLarge => 413,
            Self::Sync => 422,
            Self::Io => 500,
        }
    }
}

/// A failed request: a kind that fixes the status, a short message, and
/// optional details for the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.kind.status()
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message.clone(),
            details: self.details.clone(),
        }
    }
}

impl From<ParserError> for ApiError {
    fn from(error: ParserError) -> Self {
        let kind = match error {
            ParserError::RegionNotFound(_) | ParserError::UnknownSection(_) => ErrorKind::NotFound,
            ParserError::NavigationNotFound { .. }
            | ParserError::UnclosedElement(_)
            | ParserError::DuplicateId(_) => ErrorKind::Sync,
        };
        Self::new(kind, error.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => Self::not_found(error.to_string()),
            StoreError::InvalidPageName(_) => Self::validation(error.to_string()),
            StoreError::Malformed { ref path, ref details } => Self::new(
                ErrorKind::Sync,
                format!("Menu document {} is unreadable", path.display()),
            )
            .with_details(details.clone()),
            StoreError::Io { .. } => {
                Self::new(ErrorKind::Io, "File system error").with_details(error.to_string())
            }
            StoreError::Parser(parser) => parser.into(),
        }
    }
}

impl From<SyncError> for ApiError {
    fn from(error: SyncError) -> Self {
        match error {
            SyncError::Extraction(parser) => {
                Self::new(ErrorKind::Sync, "Menu extraction failed").with_details(parser.to_string())
            }
            SyncError::Store(store) => store.into(),
            SyncError::EntryNotFound(_) => Self::not_found(error.to_string()),
            SyncError::InvalidMenu { ref problems } => {
                Self::validation("Invalid menu").with_details(problems.join("; "))
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::NotConfigured | AuthError::Random(_) | AuthError::Other(_) => {
                Self::new(ErrorKind::Io, "Admin authentication unavailable")
                    .with_details(error.to_string())
            }
            AuthError::InvalidPassword => Self::new(ErrorKind::Unauthorized, "Invalid password"),
            AuthError::MissingToken
            | AuthError::MalformedToken(_)
            | AuthError::BadSignature
            | AuthError::TokenExpired => {
                Self::new(ErrorKind::Unauthorized, "Unauthorized").with_details(error.to_string())
            }
        }
    }
}
