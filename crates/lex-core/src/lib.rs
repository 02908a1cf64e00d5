//! # lex-core
//!
//! Core types shared across all Lexsite crates.
//!
//! - Menu tree types (`MenuEntry`, `MenuDocument`) and tree helpers
//! - Sync report types produced by the menu reconciler
//! - Page content types and the editable section catalog
//! - Locale handling for the English/Hebrew site
//! - URL normalization used by both the HTML extractor and the reconciler
//! - Request/response DTOs for the admin API

pub mod api;
pub mod locale;
pub mod menu;
pub mod page;
pub mod sync;
pub mod url;

pub use locale::Locale;
pub use menu::{MenuDocument, MenuEntry};
pub use sync::{DiscrepancyKind, DiscrepancyValue, MenuDiscrepancy, Severity, SyncReport};
pub use url::normalize_url;
