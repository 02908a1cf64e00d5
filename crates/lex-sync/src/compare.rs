//! HTML ↔ JSON menu comparison.

use std::collections::HashMap;

use chrono::Utc;
use lex_core::{DiscrepancyKind, MenuDiscrepancy, MenuEntry, SyncReport, normalize_url};

/// Compare the top-level entries of the navigation markup (`html`) with the
/// menu document (`json`).
///
/// Presence is checked in both directions; common ids are checked for
/// title, normalized url and child count. Children themselves are not
/// diffed, only counted.
#[must_use]
pub fn compare_menus(html: &[MenuEntry], json: &[MenuEntry]) -> SyncReport {
    let html_by_id: HashMap<&str, &MenuEntry> =
        html.iter().map(|entry| (entry.id.as_str(), entry)).collect();
    let json_by_id: HashMap<&str, &MenuEntry> =
        json.iter().map(|entry| (entry.id.as_str(), entry)).collect();

    let mut discrepancies = Vec::new();

    for entry in html {
        if !json_by_id.contains_key(entry.id.as_str()) {
            discrepancies.push(MenuDiscrepancy::new(
                DiscrepancyKind::MissingInJson,
                &entry.id,
                format!("Menu item '{}' is in the HTML navigation but not in the menu JSON", entry.id),
            ));
        }
    }

    for entry in json {
        if !html_by_id.contains_key(entry.id.as_str()) {
            discrepancies.push(MenuDiscrepancy::new(
                DiscrepancyKind::MissingInHtml,
                &entry.id,
                format!("Menu item '{}' is in the menu JSON but not in the HTML navigation", entry.id),
            ));
        }
    }

    for html_entry in html {
        let Some(json_entry) = json_by_id.get(html_entry.id.as_str()) else {
            continue;
        };
        discrepancies.extend(compare_entry(html_entry, json_entry));
    }

    let report = SyncReport::from_discrepancies(discrepancies, html.len(), json.len(), Utc::now());
    if report.is_in_sync {
        tracing::debug!(items = html.len(), "menus in sync");
    } else {
        tracing::warn!(
            errors = report.error_count,
            warnings = report.warning_count,
            "menu discrepancies found"
        );
    }
    report
}

fn compare_entry(html: &MenuEntry, json: &MenuEntry) -> Vec<MenuDiscrepancy> {
    let mut found = Vec::new();
    let id = html.id.as_str();

    if html.title != json.title {
        found.push(
            MenuDiscrepancy::new(
                DiscrepancyKind::TitleMismatch,
                id,
                format!("Title of '{id}' differs between HTML and JSON"),
            )
            .with_values(html.title.as_str(), json.title.as_str()),
        );
    }

    let html_url = normalize_url(&html.url);
    let json_url = normalize_url(&json.url);
    if html_url != json_url {
        found.push(
            MenuDiscrepancy::new(
                DiscrepancyKind::UrlMismatch,
                id,
                format!("URL of '{id}' differs between HTML and JSON"),
            )
            .with_values(html_url, json_url),
        );
    }

    if html.children.len() != json.children.len() {
        found.push(
            MenuDiscrepancy::new(
                DiscrepancyKind::ChildrenCountMismatch,
                id,
                format!(
                    "'{id}' has {} sub-items in HTML and {} in JSON",
                    html.children.len(),
                    json.children.len()
                ),
            )
            .with_values(html.children.len(), json.children.len()),
        );
    }

    found
}
