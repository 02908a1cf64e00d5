//! Navigation menu tree.
//!
//! The same tree shape is produced by the HTML extractor and stored in the
//! menu JSON document, which is what makes the two comparable.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single navigation entry. Ids are unique across the whole tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    /// 1-based position within the sibling list.
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            order,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }
}

/// The persisted menu document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub main_menu: Vec<MenuEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl MenuDocument {
    #[must_use]
    pub const fn new(main_menu: Vec<MenuEntry>) -> Self {
        Self {
            main_menu,
            last_updated: None,
            last_synced_at: None,
        }
    }

    /// Number of entries at every depth.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        all_ids(&self.main_menu).len()
    }
}

/// Every id in the tree, depth-first in document order.
#[must_use]
pub fn all_ids(entries: &[MenuEntry]) -> Vec<&str> {
    let mut ids = Vec::new();
    collect_ids(entries, &mut ids);
    ids
}

fn collect_ids<'a>(entries: &'a [MenuEntry], ids: &mut Vec<&'a str>) {
    for entry in entries {
        ids.push(entry.id.as_str());
        collect_ids(&entry.children, ids);
    }
}

/// Whether `id` appears anywhere in the tree.
#[must_use]
pub fn contains_id(entries: &[MenuEntry], id: &str) -> bool {
    find(entries, id).is_some()
}

/// Find an entry by id at any depth.
#[must_use]
pub fn find<'a>(entries: &'a [MenuEntry], id: &str) -> Option<&'a MenuEntry> {
    entries.iter().find_map(|entry| {
        if entry.id == id {
            Some(entry)
        } else {
            find(&entry.children, id)
        }
    })
}

/// Depth of the tree: 0 for an empty list, 1 for a flat list.
#[must_use]
pub fn depth(entries: &[MenuEntry]) -> usize {
    entries
        .iter()
        .map(|entry| 1 + depth(&entry.children))
        .max()
        .unwrap_or(0)
}
