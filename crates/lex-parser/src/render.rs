//! Navigation markup generation (menu JSON → HTML).

use lex_core::MenuEntry;

use crate::error::ParserError;
use crate::html::{
    attr_value, escape_attr, escape_text, find_element, inner_range, line_indent, splice,
};
use crate::parser::parse_html;

const INDENT: &str = "  ";

/// Render `<li>` markup for a menu tree, one item per line.
///
/// Entries are emitted by ascending `order`; children go into a nested
/// `<ul class="sub-menu">`.
#[must_use]
pub fn render_nav_items(entries: &[MenuEntry], indent: &str) -> String {
    let mut out = String::new();
    write_items(&mut out, entries, indent);
    out
}

fn write_items(out: &mut String, entries: &[MenuEntry], indent: &str) {
    let mut sorted: Vec<&MenuEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.order);

    for entry in sorted {
        out.push_str(&format!(
            "{indent}<li id=\"{id}\"><a href=\"{url}\">{title}</a>",
            id = escape_attr(&entry.id),
            url = escape_attr(&entry.url),
            title = escape_text(&entry.title),
        ));
        if !entry.children.is_empty() {
            let nested = format!("{indent}{INDENT}{INDENT}");
            out.push_str(&format!("\n{indent}{INDENT}<ul class=\"sub-menu\">\n"));
            write_items(out, &entry.children, &nested);
            out.push_str(&format!("{indent}{INDENT}</ul>\n{indent}"));
        }
        out.push_str("</li>\n");
    }
}

/// Replace the items of the navigation list in `source` with markup
/// rendered from `entries`.
///
/// Only the inner markup of `<ul id="{list_id}">` changes; everything else in
/// the document is preserved byte-for-byte.
///
/// # Errors
///
/// Returns `ParserError::NavigationNotFound` if the list is missing and
/// `ParserError::UnclosedElement` if it has no closing tag.
pub fn replace_nav(
    source: &str,
    list_id: &str,
    entries: &[MenuEntry],
) -> Result<String, ParserError> {
    let tree = parse_html(source);
    let root = tree.root();
    let list = find_element(&root, &|tag, attrs| {
        tag == "ul" && attr_value(attrs, "id").as_deref() == Some(list_id)
    })
    .ok_or_else(|| ParserError::NavigationNotFound {
        list_id: list_id.to_string(),
    })?;
    let inner = inner_range(&list).ok_or_else(|| ParserError::UnclosedElement("ul".into()))?;

    let base = line_indent(source, list.range().start);
    let items = render_nav_items(entries, &format!("{base}{INDENT}"));
    let replacement = if items.is_empty() {
        String::new()
    } else {
        format!("\n{items}{base}")
    };

    tracing::debug!(list_id, entries = entries.len(), "regenerated navigation markup");
    Ok(splice(source, inner, &replacement))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::menu::extract_menu;

    fn menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("contact", "Contact", "/contact/", 3),
            MenuEntry::new("home", "Home", "/", 1),
            MenuEntry::new("services", "Tax & Estate", "/services/", 2).with_children(vec![
                MenuEntry::new("wills", "Wills", "/services/wills/", 1),
            ]),
        ]
    }

    #[test]
    fn renders_sorted_items_with_sub_menu() {
        let html = render_nav_items(&menu(), "");
        let expected = concat!(
            "<li id=\"home\"><a href=\"/\">Home</a></li>\n",
            "<li id=\"services\"><a href=\"/services/\">Tax &amp; Estate</a>\n",
            "  <ul class=\"sub-menu\">\n",
            "    <li id=\"wills\"><a href=\"/services/wills/\">Wills</a></li>\n",
            "  </ul>\n",
            "</li>\n",
            "<li id=\"contact\"><a href=\"/contact/\">Contact</a></li>\n",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn replace_preserves_surrounding_markup() {
        let page = "<body>\n  <nav>\n    <ul id=\"main-menu\">\n      <li id=\"old\"><a href=\"/old/\">Old</a></li>\n    </ul>\n  </nav>\n  <main>Keep me</main>\n</body>";
        let updated = replace_nav(page, "main-menu", &menu()).unwrap();
        assert!(updated.starts_with(
            "<body>\n  <nav>\n    <ul id=\"main-menu\">\n      <li id=\"home\">"
        ));
        assert!(updated.ends_with("    </ul>\n  </nav>\n  <main>Keep me</main>\n</body>"));
        assert!(!updated.contains("id=\"old\""));
    }

    #[test]
    fn rendered_markup_extracts_back_to_same_tree() {
        let page = "<nav><ul id=\"main-menu\"></ul></nav>";
        let updated = replace_nav(page, "main-menu", &menu()).unwrap();
        let extracted = extract_menu(&updated, "main-menu").unwrap();

        let mut expected = menu();
        expected.sort_by_key(|e| e.order);
        assert_eq!(extracted, expected);
    }

    #[test]
    fn empty_menu_clears_list() {
        let page = "<ul id=\"main-menu\"><li>x</li></ul>";
        assert_eq!(
            replace_nav(page, "main-menu", &[]).unwrap(),
            "<ul id=\"main-menu\"></ul>"
        );
    }

    #[test]
    fn missing_list_is_reported() {
        let err = replace_nav("<nav></nav>", "main-menu", &menu()).unwrap_err();
        assert!(matches!(err, ParserError::NavigationNotFound { .. }));
    }
}
