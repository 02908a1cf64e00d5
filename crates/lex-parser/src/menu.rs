//! Navigation menu extraction.
//!
//! Reads the designated `<ul id="...">` list and produces the same tree
//! shape that the menu JSON document stores:
//!
//! ```html
//! <ul id="main-menu">
//!   <li id="home"><a href="/index.html">Home</a></li>
//!   <li id="services"><a href="/services.html">Services</a>
//!     <ul class="sub-menu">
//!       <li id="litigation"><a href="/services/litigation.html">Litigation</a></li>
//!     </ul>
//!   </li>
//! </ul>
//! ```

use std::collections::HashSet;

use lex_core::menu::all_ids;
use lex_core::{MenuEntry, normalize_url};

use crate::error::ParserError;
use crate::html::{
    attr_value, child_elements, find_element, find_element_outside, tag_info, text_content,
};
use crate::parser::{HtmlNode, parse_html};

/// Extract the navigation tree from an HTML document.
///
/// Top-level items without an `id` attribute get `generated-{index}`;
/// sub-menu items get `generated-{index}-{child_index}` (0-based). Only one
/// level of sub-menu is read.
///
/// # Errors
///
/// Returns `ParserError::NavigationNotFound` if the document has no `<ul>`
/// with the given id, and `ParserError::DuplicateId` if two items (at any
/// depth) end up with the same id.
pub fn extract_menu(source: &str, list_id: &str) -> Result<Vec<MenuEntry>, ParserError> {
    let tree = parse_html(source);
    let root = tree.root();
    let list = find_element(&root, &|tag, attrs| {
        tag == "ul" && attr_value(attrs, "id").as_deref() == Some(list_id)
    })
    .ok_or_else(|| ParserError::NavigationNotFound {
        list_id: list_id.to_string(),
    })?;

    let entries: Vec<MenuEntry> = child_elements(&list, "li")
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = element_id(item).unwrap_or_else(|| format!("generated-{index}"));
            let children: Vec<MenuEntry> = sub_menu(item)
                .map(|sub| {
                    child_elements(&sub, "li")
                        .iter()
                        .enumerate()
                        .map(|(child_index, child)| {
                            let child_id = element_id(child)
                                .unwrap_or_else(|| format!("generated-{index}-{child_index}"));
                            entry_from_item(child, source, child_id, child_index)
                        })
                        .collect()
                })
                .unwrap_or_default();
            entry_from_item(item, source, id, index).with_children(children)
        })
        .collect();

    if let Some(id) = first_duplicate(&entries) {
        tracing::warn!(list_id, id, "navigation has a duplicate item id");
        return Err(ParserError::DuplicateId(id.to_string()));
    }

    tracing::debug!(list_id, items = entries.len(), "extracted navigation menu");
    Ok(entries)
}

fn first_duplicate(entries: &[MenuEntry]) -> Option<&str> {
    let mut seen = HashSet::new();
    all_ids(entries).into_iter().find(|id| !seen.insert(*id))
}

fn element_id(item: &HtmlNode<'_>) -> Option<String> {
    tag_info(item)
        .and_then(|(_, attrs)| attr_value(&attrs, "id"))
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

/// First nested list of an item.
fn sub_menu<'r>(item: &HtmlNode<'r>) -> Option<HtmlNode<'r>> {
    find_element(item, &|tag, _| tag == "ul")
}

fn entry_from_item(item: &HtmlNode<'_>, source: &str, id: String, index: usize) -> MenuEntry {
    let anchor = find_element_outside(item, "ul", &|tag, _| tag == "a");
    let (title, href) = anchor.map_or_else(
        || (String::new(), None),
        |a| {
            let href = tag_info(&a).and_then(|(_, attrs)| attr_value(&attrs, "href"));
            (text_content(&a, source), href)
        },
    );
    let url = href
        .filter(|h| !h.trim().is_empty())
        .map_or_else(|| String::from("#"), |h| normalize_url(&h));
    MenuEntry::new(id, title, url, position(index))
}

/// 1-based sibling position.
pub(crate) fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
