//! Menu JSON document store.
//!
//! The document is always read and written whole. Raw JSON is checked
//! against the registered `menu_document` schema before deserialization so
//! a hand-edited file is reported with field-level detail.

use std::path::{Path, PathBuf};

use chrono::Utc;
use lex_core::MenuDocument;
use lex_schema::{SchemaError, SchemaRegistry, registry::MENU_DOCUMENT};

use crate::error::StoreError;
use crate::fs::{read_to_string, write_atomic};

pub struct MenuStore {
    path: PathBuf,
    schemas: SchemaRegistry,
}

impl MenuStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schemas: SchemaRegistry::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read and validate the menu document.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the file is missing, `StoreError::Malformed`
    /// if it is not JSON or fails schema validation.
    pub fn load(&self) -> Result<MenuDocument, StoreError> {
        let raw = read_to_string(&self.path)?;
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| self.malformed(e.to_string()))?;

        self.schemas
            .validate(MENU_DOCUMENT, &value)
            .map_err(|e| match e {
                SchemaError::Invalid { errors } => self.malformed(errors.join("; ")),
                other => self.malformed(other.to_string()),
            })?;

        let doc: MenuDocument =
            serde_json::from_value(value).map_err(|e| self.malformed(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), entries = doc.total_entries(), "loaded menu document");
        Ok(doc)
    }

    /// Replace the whole document, stamping `lastUpdated`.
    ///
    /// Returns the document as written.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the file cannot be written.
    pub fn save(&self, doc: &MenuDocument) -> Result<MenuDocument, StoreError> {
        let mut stamped = doc.clone();
        stamped.last_updated = Some(Utc::now());
        self.write(&stamped)?;
        Ok(stamped)
    }

    /// Like [`Self::save`], additionally stamping `lastSyncedAt`.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the file cannot be written.
    pub fn save_synced(&self, doc: &MenuDocument) -> Result<MenuDocument, StoreError> {
        let now = Utc::now();
        let mut stamped = doc.clone();
        stamped.last_updated = Some(now);
        stamped.last_synced_at = Some(now);
        self.write(&stamped)?;
        Ok(stamped)
    }

    fn write(&self, doc: &MenuDocument) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(doc)
            .map_err(|e| self.malformed(e.to_string()))?;
        json.push('\n');
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), entries = doc.total_entries(), "wrote menu document");
        Ok(())
    }

    fn malformed(&self, details: String) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            details,
        }
    }
}
