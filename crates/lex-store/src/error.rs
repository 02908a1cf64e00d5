//! Store error types.

use std::path::PathBuf;

use lex_parser::ParserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file backing a document or page does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a valid document.
    #[error("Malformed document {}: {details}", path.display())]
    Malformed { path: PathBuf, details: String },

    /// Page names are lowercase slugs; anything else could escape the site root.
    #[error("Invalid page name '{0}' (expected [a-z0-9-]+)")]
    InvalidPageName(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parser(#[from] ParserError),
}

impl StoreError {
    /// Map an I/O error, turning `NotFound` into [`StoreError::NotFound`].
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
