//! Page content types and the editable section catalog.
//!
//! Editable sections are marked in the HTML with `data-region="{name}"`.
//! Only names in [`SECTION_CATALOG`] are addressable through the admin API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Version of the content-region markup contract.
pub const REGION_SCHEMA_VERSION: u32 = 1;

/// HTML attribute that marks an editable section.
pub const REGION_ATTRIBUTE: &str = "data-region";

/// Editable sections, in page order.
pub const SECTION_CATALOG: [&str; 7] = [
    "hero",
    "practice-areas",
    "about",
    "team",
    "testimonials",
    "contact",
    "footer",
];

#[must_use]
pub fn is_catalog_section(name: &str) -> bool {
    SECTION_CATALOG.contains(&name)
}

/// Page names map to file names; only lowercase slugs are accepted.
#[must_use]
pub fn is_valid_page_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// The fixed page fields exposed to the admin panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub h1: String,
    pub meta_description: String,
    pub main_content: String,
}

/// Partial page update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub h1: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub main_content: Option<String>,
}

impl PageUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.h1.is_none()
            && self.meta_description.is_none()
            && self.main_content.is_none()
    }
}

/// Presence of one catalog section in a page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionInfo {
    pub name: String,
    pub present: bool,
}

/// Inner HTML of a section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    pub name: String,
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_are_slugs() {
        assert!(is_valid_page_name("index"));
        assert!(is_valid_page_name("family-law"));
        assert!(is_valid_page_name("404"));
        assert!(!is_valid_page_name(""));
        assert!(!is_valid_page_name("../secrets"));
        assert!(!is_valid_page_name("About"));
        assert!(!is_valid_page_name("-x"));
        assert!(!is_valid_page_name("a/b"));
    }

    #[test]
    fn catalog_lookup() {
        assert!(is_catalog_section("hero"));
        assert!(!is_catalog_section("sidebar"));
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(PageUpdate::default().is_empty());
        let update: PageUpdate = serde_json::from_str(r#"{"h1":"Welcome"}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.h1.as_deref(), Some("Welcome"));
    }
}
