//! Structural edits and checks on a menu tree.

use std::collections::HashSet;

use lex_core::MenuEntry;

use crate::error::SyncError;

/// Deepest nesting a menu may have: top level plus one sub-menu.
pub const MAX_DEPTH: usize = 2;

/// Assign `order` 1..n by position, in every sibling list.
pub fn renumber(entries: &mut [MenuEntry]) {
    for (order, entry) in (1_u32..).zip(entries.iter_mut()) {
        entry.order = order;
        renumber(&mut entry.children);
    }
}

/// Sort every sibling list by its current `order` (stable), then renumber.
///
/// Used on submitted trees, where orders may have gaps or repeats.
pub fn normalize_orders(entries: &mut [MenuEntry]) {
    entries.sort_by_key(|entry| entry.order);
    for entry in entries.iter_mut() {
        normalize_orders(&mut entry.children);
    }
    renumber(entries);
}

/// Remove the entry with `id` from any depth and renumber its siblings.
///
/// # Errors
///
/// Returns `SyncError::EntryNotFound` if no entry has this id.
pub fn delete_entry(entries: &mut Vec<MenuEntry>, id: &str) -> Result<MenuEntry, SyncError> {
    remove_from(entries, id).ok_or_else(|| SyncError::EntryNotFound(id.to_string()))
}

fn remove_from(entries: &mut Vec<MenuEntry>, id: &str) -> Option<MenuEntry> {
    if let Some(index) = entries.iter().position(|entry| entry.id == id) {
        let removed = entries.remove(index);
        for (order, entry) in (1_u32..).zip(entries.iter_mut()) {
            entry.order = order;
        }
        return Some(removed);
    }
    entries
        .iter_mut()
        .find_map(|entry| remove_from(&mut entry.children, id))
}

/// Check a menu tree for duplicate ids, blank ids or titles, and nesting
/// deeper than [`MAX_DEPTH`].
///
/// # Errors
///
/// Returns `SyncError::InvalidMenu` listing every problem found.
pub fn validate_menu(entries: &[MenuEntry]) -> Result<(), SyncError> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    check_level(entries, 1, &mut seen, &mut problems);

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SyncError::InvalidMenu { problems })
    }
}

fn check_level<'a>(
    entries: &'a [MenuEntry],
    depth: usize,
    seen: &mut HashSet<&'a str>,
    problems: &mut Vec<String>,
) {
    for entry in entries {
        if entry.id.trim().is_empty() {
            problems.push(format!("item at depth {depth} has an empty id"));
        } else if !seen.insert(entry.id.as_str()) {
            problems.push(format!("duplicate id '{}'", entry.id));
        }
        if entry.title.trim().is_empty() {
            problems.push(format!("item '{}' has an empty title", entry.id));
        }
        if !entry.children.is_empty() && depth >= MAX_DEPTH {
            problems.push(format!(
                "item '{}' nests deeper than {MAX_DEPTH} levels",
                entry.id
            ));
        }
        check_level(&entry.children, depth + 1, seen, problems);
    }
}
