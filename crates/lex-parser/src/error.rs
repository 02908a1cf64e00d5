//! Parser error types for lex-parser.

/// Errors that can occur while reading or editing an HTML document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    /// The designated navigation list is not present in the document.
    #[error("Navigation list not found: <ul id=\"{list_id}\">")]
    NavigationNotFound { list_id: String },

    /// A content region (title, h1, main, section, ...) is not present.
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    /// The element exists but has no closing tag, so its content cannot be replaced.
    #[error("Element <{0}> has no closing tag")]
    UnclosedElement(String),

    /// Two navigation items carry the same id (authored or generated).
    #[error("Duplicate menu item id in navigation: {0}")]
    DuplicateId(String),

    /// Section name outside the editable catalog.
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}
