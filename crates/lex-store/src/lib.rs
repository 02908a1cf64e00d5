//! # lex-store
//!
//! File-backed persistence for Lexsite.
//!
//! - [`MenuStore`]: the menu JSON document, schema-checked on load and
//!   replaced whole on save
//! - [`PageStore`]: the localized HTML pages and their editable regions
//!
//! Writes go through a temp file and a rename. There is no locking;
//! concurrent writers race and the last one wins.

mod fs;

pub mod error;
pub mod menu_store;
pub mod page_store;

pub use error::StoreError;
pub use menu_store::MenuStore;
pub use page_store::PageStore;
