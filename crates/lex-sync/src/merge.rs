//! Auto-sync: fold HTML-only navigation entries into the menu document.

use std::collections::{HashMap, HashSet};

use lex_core::menu::all_ids;
use lex_core::{MenuEntry, normalize_url};

use crate::edit::renumber;

/// Result of [`auto_sync_menus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The merged menu tree, renumbered.
    pub menu: Vec<MenuEntry>,
    /// Entries inserted from the HTML, with their final `order`.
    pub added: Vec<MenuEntry>,
}

/// Merge top-level HTML entries missing from the JSON tree into a copy of it.
///
/// Existing entries are never removed and never have their title or url
/// rewritten. An HTML id counts as present when it occurs anywhere in the
/// JSON tree, including among children. Children of an inserted entry whose
/// id is already taken (by the JSON tree or an earlier insertion) are left
/// out, so ids stay unique across the merged tree.
///
/// After insertion the top level is re-sorted: entries present in the HTML
/// first, in HTML order, then JSON-only entries by their own `order`. All
/// sibling lists are then renumbered from 1.
#[must_use]
pub fn auto_sync_menus(html: &[MenuEntry], json: &[MenuEntry]) -> SyncOutcome {
    let mut menu = json.to_vec();
    let mut added_ids = Vec::new();
    let mut taken: HashSet<String> = all_ids(json).into_iter().map(str::to_string).collect();

    for entry in html {
        if !taken.insert(entry.id.clone()) {
            continue;
        }
        let mut inserted = normalized(entry);
        inserted.children.retain(|child| {
            let fresh = taken.insert(child.id.clone());
            if !fresh {
                tracing::warn!(
                    parent = %entry.id,
                    id = %child.id,
                    "skipping child whose id is already in the menu"
                );
            }
            fresh
        });

        let index = usize::try_from(entry.order)
            .unwrap_or(usize::MAX)
            .saturating_sub(1)
            .min(menu.len());
        tracing::info!(id = %entry.id, index, "adding menu item from HTML");
        menu.insert(index, inserted);
        added_ids.push(entry.id.clone());
    }

    let html_position: HashMap<&str, usize> = html
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.id.as_str(), index))
        .collect();
    menu.sort_by_key(|entry| {
        html_position.get(entry.id.as_str()).map_or_else(
            || (1_u8, usize::try_from(entry.order).unwrap_or(usize::MAX)),
            |&position| (0_u8, position),
        )
    });
    renumber(&mut menu);

    let added = added_ids
        .iter()
        .filter_map(|id| menu.iter().find(|entry| &entry.id == id).cloned())
        .collect();
    SyncOutcome { menu, added }
}

fn normalized(entry: &MenuEntry) -> MenuEntry {
    MenuEntry {
        id: entry.id.clone(),
        title: entry.title.clone(),
        url: normalize_url(&entry.url),
        order: entry.order,
        children: entry.children.iter().map(normalized).collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compare::compare_menus;
    use crate::edit::validate_menu;
    use lex_core::DiscrepancyKind;

    fn entry(id: &str, title: &str, url: &str, order: u32) -> MenuEntry {
        MenuEntry::new(id, title, url, order)
    }

    #[test]
    fn inserts_html_only_entry_at_its_position() {
        let json = vec![entry("home", "Home", "/", 1)];
        let html = vec![entry("home", "Home", "/", 1), entry("about", "About", "/about/", 2)];

        let outcome = auto_sync_menus(&html, &json);
        assert_eq!(outcome.menu, html);
        assert_eq!(outcome.added, vec![entry("about", "About", "/about/", 2)]);
    }

    #[test]
    fn keeps_existing_titles_and_urls() {
        let json = vec![entry("x", "Our Team", "/our-team/", 1)];
        let html = vec![entry("x", "Team", "/team/", 1)];

        let outcome = auto_sync_menus(&html, &json);
        assert_eq!(outcome.menu, json);
        assert!(outcome.added.is_empty());
    }

    #[test]
    fn json_only_entries_follow_html_entries() {
        let json = vec![
            entry("blog", "Blog", "/blog/", 1),
            entry("home", "Home", "/", 2),
            entry("careers", "Careers", "/careers/", 3),
        ];
        let html = vec![entry("home", "Home", "/", 1), entry("about", "About", "/about/", 2)];

        let outcome = auto_sync_menus(&html, &json);
        let ids: Vec<_> = outcome.menu.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "about", "blog", "careers"]);
        let orders: Vec<_> = outcome.menu.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn id_nested_in_json_is_not_duplicated() {
        let json = vec![entry("services", "Services", "/services/", 1)
            .with_children(vec![entry("wills", "Wills", "/wills/", 1)])];
        let html = vec![entry("wills", "Wills", "/wills/", 1)];

        let outcome = auto_sync_menus(&html, &json);
        assert!(outcome.added.is_empty());
        assert_eq!(outcome.menu.len(), 1);
    }

    #[test]
    fn inserted_child_with_existing_id_is_skipped() {
        let json = vec![entry("wills", "Wills", "/wills/", 1)];
        let html = vec![entry("services", "Services", "/services/", 1).with_children(vec![
            entry("wills", "Wills", "/services/wills/", 1),
            entry("trusts", "Trusts", "/services/trusts/", 2),
        ])];

        let outcome = auto_sync_menus(&html, &json);
        assert_eq!(all_ids(&outcome.menu), vec!["services", "trusts", "wills"]);
        assert_eq!(outcome.menu[0].children[0].order, 1);
        assert!(validate_menu(&outcome.menu).is_ok());
    }

    #[test]
    fn children_shared_between_inserted_entries_appear_once() {
        let html = vec![
            entry("family", "Family", "/family/", 1)
                .with_children(vec![entry("mediation", "Mediation", "/mediation/", 1)]),
            entry("labor", "Labor", "/labor/", 2)
                .with_children(vec![entry("mediation", "Mediation", "/mediation/", 1)]),
        ];

        let outcome = auto_sync_menus(&html, &[]);
        assert_eq!(all_ids(&outcome.menu), vec!["family", "mediation", "labor"]);
        assert!(outcome.added[1].children.is_empty());
        assert!(validate_menu(&outcome.menu).is_ok());
    }

    #[test]
    fn inserted_children_are_normalized_and_renumbered() {
        let html = vec![entry("services", "Services", "services.html", 1).with_children(vec![
            entry("wills", "Wills", "wills.html", 5),
            entry("trusts", "Trusts", "/trusts/index.html", 9),
        ])];

        let outcome = auto_sync_menus(&html, &[]);
        let services = &outcome.menu[0];
        assert_eq!(services.url, "/services/");
        assert_eq!(services.children[0].url, "/wills/");
        assert_eq!(services.children[1].url, "/trusts/");
        let orders: Vec<_> = services.children.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn out_of_range_order_appends() {
        let json = vec![entry("home", "Home", "/", 1)];
        let html = vec![entry("faq", "FAQ", "/faq/", 40)];
        let outcome = auto_sync_menus(&html, &json);
        let ids: Vec<_> = outcome.menu.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["faq", "home"]);
    }

    #[test]
    fn sync_is_idempotent_and_clears_missing_in_json() {
        let json = vec![entry("home", "Home", "/", 1), entry("blog", "Blog", "/blog/", 2)];
        let html = vec![
            entry("home", "Home", "/", 1),
            entry("about", "About", "/about/", 2),
            entry("contact", "Contact", "/contact/", 3),
        ];

        let first = auto_sync_menus(&html, &json);
        let report = compare_menus(&html, &first.menu);
        assert_eq!(report.of_kind(DiscrepancyKind::MissingInJson).count(), 0);

        let second = auto_sync_menus(&html, &first.menu);
        assert_eq!(second.menu, first.menu);
        assert!(second.added.is_empty());
    }
}
