//! Central schema registry for Lexsite types.
//!
//! The `SchemaRegistry` builds JSON Schemas from lex-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the persisted menu document schema.
pub const MENU_DOCUMENT: &str = "menu_document";

pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (infallible
/// for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry containing the menu, sync, page, and API body schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated schema,
    /// which does not happen for schemars output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        // --- Persisted documents ---
        register!(schemas, MENU_DOCUMENT, lex_core::menu::MenuDocument);
        register!(schemas, "menu_entry", lex_core::menu::MenuEntry);

        // --- Reports ---
        register!(schemas, "sync_report", lex_core::sync::SyncReport);
        register!(schemas, "sync_summary", lex_core::sync::SyncSummary);

        // --- Pages ---
        register!(schemas, "page_content", lex_core::page::PageContent);
        register!(schemas, "page_update", lex_core::page::PageUpdate);

        // --- API bodies ---
        register!(schemas, "login_request", lex_core::api::LoginRequest);
        register!(schemas, "menu_replace_request", lex_core::api::MenuReplaceRequest);
        register!(schemas, "section_update_request", lex_core::api::SectionUpdateRequest);
        register!(schemas, "menu_response", lex_core::api::MenuResponse);
        register!(schemas, "sync_response", lex_core::api::SyncResponse);
        register!(schemas, "error_body", lex_core::api::ErrorBody);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Registered schema names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Unknown` if the schema name is unknown, or
    /// `SchemaError::Invalid` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::Unknown(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compile {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid { errors })
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn registers_documents_reports_and_bodies() {
        let registry = SchemaRegistry::new();
        assert!(registry.get(MENU_DOCUMENT).is_some());
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![
                "error_body",
                "login_request",
                "menu_document",
                "menu_entry",
                "menu_replace_request",
                "menu_response",
                "page_content",
                "page_update",
                "section_update_request",
                "sync_report",
                "sync_response",
                "sync_summary",
            ]
        );
    }

    #[test]
    fn valid_menu_document_passes() {
        let registry = SchemaRegistry::new();
        let doc = json!({
            "mainMenu": [
                {"id": "home", "title": "Home", "url": "/", "order": 1, "children": []},
                {"id": "about", "title": "About Us", "url": "/about/"}
            ],
            "lastUpdated": "2026-03-01T10:00:00Z"
        });
        assert!(registry.validate(MENU_DOCUMENT, &doc).is_ok());
    }

    #[test]
    fn entry_without_title_fails() {
        let registry = SchemaRegistry::new();
        let doc = json!({"mainMenu": [{"id": "home", "url": "/"}]});
        let err = registry.validate(MENU_DOCUMENT, &doc).unwrap_err();
        assert!(matches!(err, SchemaError::Invalid { .. }));
    }

    #[test]
    fn negative_order_fails() {
        let registry = SchemaRegistry::new();
        let doc = json!({"mainMenu": [{"id": "a", "title": "A", "url": "/a/", "order": -1}]});
        assert!(registry.validate(MENU_DOCUMENT, &doc).is_err());
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let registry = SchemaRegistry::new();
        let err = registry.validate("nope", &json!({})).unwrap_err();
        assert!(matches!(err, SchemaError::Unknown(name) if name == "nope"));
    }
}
