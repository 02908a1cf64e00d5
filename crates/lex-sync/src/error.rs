//! Reconciliation and menu-edit errors.

use lex_parser::ParserError;
use lex_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The navigation markup could not be read from the menu page.
    #[error("Menu extraction failed: {0}")]
    Extraction(#[from] ParserError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// No entry with this id exists anywhere in the menu tree.
    #[error("Menu item not found: {0}")]
    EntryNotFound(String),

    /// A submitted menu tree breaks the structural rules.
    #[error("Invalid menu: {}", problems.join("; "))]
    InvalidMenu { problems: Vec<String> },
}
