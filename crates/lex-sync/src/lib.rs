//! # lex-sync
//!
//! Keeps the menu JSON document and the navigation markup of the menu page
//! consistent.
//!
//! - [`compare_menus`]: typed discrepancies between the two sides
//! - [`auto_sync_menus`]: additive merge of HTML-only entries into the JSON
//! - [`edit`]: deletion, renumbering, and structural validation
//! - [`MenuSyncService`]: the same operations bound to the configured files

pub mod compare;
pub mod edit;
pub mod error;
pub mod merge;
pub mod service;

pub use compare::compare_menus;
pub use edit::{delete_entry, renumber, validate_menu};
pub use error::SyncError;
pub use merge::{SyncOutcome, auto_sync_menus};
pub use service::{DeleteResult, MenuSyncService, SyncResult};
