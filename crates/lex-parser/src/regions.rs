//! Content regions of a page: the fixed page fields and the
//! `data-region` sections.
//!
//! Reads never fail on missing structure (an absent region reads as empty);
//! writes require the region to exist and splice only its byte range.

use std::ops::Range;

use lex_core::page::{
    PageContent, PageUpdate, REGION_ATTRIBUTE, SECTION_CATALOG, SectionInfo, is_catalog_section,
};

use crate::error::ParserError;
use crate::html::{
    AttrSpan, HtmlAttr, attr_value, attribute_value_range, escape_attr, escape_text, find_element,
    inner_range, splice, tag_info, text_content,
};
use crate::parser::{HtmlNode, parse_html};

fn is_meta_description(tag: &str, attrs: &[HtmlAttr]) -> bool {
    tag == "meta"
        && attr_value(attrs, "name").is_some_and(|name| name.eq_ignore_ascii_case("description"))
}

fn is_section(name: &str) -> impl Fn(&str, &[HtmlAttr]) -> bool + '_ {
    move |_: &str, attrs: &[HtmlAttr]| attr_value(attrs, REGION_ATTRIBUTE).as_deref() == Some(name)
}

/// Read the fixed page fields.
#[must_use]
pub fn read_page_content(source: &str) -> PageContent {
    let tree = parse_html(source);
    let root = tree.root();

    let text_of = |wanted: &str| {
        find_element(&root, &|tag, _| tag == wanted)
            .map(|node| text_content(&node, source))
            .unwrap_or_default()
    };

    let meta_description = find_element(&root, &is_meta_description)
        .and_then(|node| tag_info(&node).and_then(|(_, attrs)| attr_value(&attrs, "content")))
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    let main_content = find_element(&root, &|tag, _| tag == "main")
        .and_then(|node| inner_range(&node))
        .map(|range| source[range].trim().to_string())
        .unwrap_or_default();

    PageContent {
        title: text_of("title"),
        h1: text_of("h1"),
        meta_description,
        main_content,
    }
}

/// Apply a partial update to the fixed page fields.
///
/// Each field is applied against a fresh parse of the previous result, so
/// nested regions (an `<h1>` inside `<main>`) compose predictably: `main`
/// is applied last.
///
/// # Errors
///
/// Returns `ParserError::RegionNotFound` if a field to update has no
/// element in the page, or `ParserError::UnclosedElement` if it cannot be
/// spliced.
pub fn apply_page_update(source: &str, update: &PageUpdate) -> Result<String, ParserError> {
    let mut html = source.to_string();

    if let Some(title) = &update.title {
        html = replace_element_text(&html, "title", title)?;
    }
    if let Some(h1) = &update.h1 {
        html = replace_element_text(&html, "h1", h1)?;
    }
    if let Some(description) = &update.meta_description {
        html = replace_meta_description(&html, description)?;
    }
    if let Some(main) = &update.main_content {
        html = replace_inner(&html, "main", &|tag, _| tag == "main", main)?;
    }
    Ok(html)
}

fn replace_element_text(source: &str, tag_name: &str, text: &str) -> Result<String, ParserError> {
    replace_inner(source, tag_name, &|tag, _| tag == tag_name, &escape_text(text))
}

fn replace_inner<F>(
    source: &str,
    label: &str,
    pred: &F,
    replacement: &str,
) -> Result<String, ParserError>
where
    F: Fn(&str, &[HtmlAttr]) -> bool,
{
    let range = locate_inner(source, label, pred)?;
    tracing::debug!(region = label, bytes = replacement.len(), "replacing region content");
    Ok(splice(source, range, replacement))
}

fn locate_inner<F>(source: &str, label: &str, pred: &F) -> Result<Range<usize>, ParserError>
where
    F: Fn(&str, &[HtmlAttr]) -> bool,
{
    let tree = parse_html(source);
    let root = tree.root();
    let node = find_element(&root, pred)
        .ok_or_else(|| ParserError::RegionNotFound(label.to_string()))?;
    inner_of(&node, label)
}

fn inner_of(node: &HtmlNode<'_>, label: &str) -> Result<Range<usize>, ParserError> {
    inner_range(node).ok_or_else(|| ParserError::UnclosedElement(label.to_string()))
}

fn replace_meta_description(source: &str, description: &str) -> Result<String, ParserError> {
    let tree = parse_html(source);
    let root = tree.root();
    let meta = find_element(&root, &is_meta_description)
        .ok_or_else(|| ParserError::RegionNotFound("meta description".into()))?;

    let quoted = format!("\"{}\"", escape_attr(description));
    let updated = match attribute_value_range(&meta, "content") {
        Some(AttrSpan::Value(range)) => splice(source, range, &quoted),
        Some(AttrSpan::Bare(offset)) => splice(source, offset..offset, &format!("={quoted}")),
        None => {
            // Insert after the `name` attribute, which is known to exist.
            let offset = match attribute_value_range(&meta, "name") {
                Some(AttrSpan::Value(range)) => range.end,
                Some(AttrSpan::Bare(offset)) => offset,
                None => return Err(ParserError::RegionNotFound("meta description".into())),
            };
            splice(source, offset..offset, &format!(" content={quoted}"))
        }
    };
    Ok(updated)
}

/// Catalog sections with their presence in the page.
#[must_use]
pub fn list_sections(source: &str) -> Vec<SectionInfo> {
    let tree = parse_html(source);
    let root = tree.root();
    SECTION_CATALOG
        .iter()
        .map(|name| SectionInfo {
            name: (*name).to_string(),
            present: find_element(&root, &is_section(name)).is_some(),
        })
        .collect()
}

/// Inner HTML of a catalog section.
///
/// # Errors
///
/// Returns `ParserError::UnknownSection` for names outside the catalog and
/// `ParserError::RegionNotFound` when the page lacks the section.
pub fn read_section(source: &str, name: &str) -> Result<String, ParserError> {
    if !is_catalog_section(name) {
        return Err(ParserError::UnknownSection(name.to_string()));
    }
    let range = locate_inner(source, &section_label(name), &is_section(name))?;
    Ok(source[range].trim().to_string())
}

/// Replace the inner HTML of a catalog section.
///
/// # Errors
///
/// Same as [`read_section`], plus `ParserError::UnclosedElement`.
pub fn replace_section(source: &str, name: &str, html: &str) -> Result<String, ParserError> {
    if !is_catalog_section(name) {
        return Err(ParserError::UnknownSection(name.to_string()));
    }
    replace_inner(source, &section_label(name), &is_section(name), html)
}

fn section_label(name: &str) -> String {
    format!("section '{name}'")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="he" dir="rtl">
<head>
  <meta charset="utf-8">
  <title>Cohen &amp; Levi | Law Office</title>
  <meta name="description" content="Boutique litigation firm">
</head>
<body>
  <main>
    <section data-region="hero">
      <h1>Cohen &amp; Levi</h1>
    </section>
    <section data-region="team"><p>Our partners</p></section>
  </main>
  <footer data-region="footer">© 2026</footer>
</body>
</html>"#;

    #[test]
    fn reads_fixed_fields() {
        let content = read_page_content(PAGE);
        assert_eq!(content.title, "Cohen & Levi | Law Office");
        assert_eq!(content.h1, "Cohen & Levi");
        assert_eq!(content.meta_description, "Boutique litigation firm");
        assert!(content.main_content.starts_with("<section data-region=\"hero\">"));
        assert!(content.main_content.ends_with("<p>Our partners</p></section>"));
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let content = read_page_content("<html><body><p>bare</p></body></html>");
        assert_eq!(content, PageContent::default());
    }

    #[test]
    fn updates_only_requested_fields() {
        let update = PageUpdate {
            title: Some("Cohen & Levi <Tel Aviv>".into()),
            meta_description: Some("Say \"hello\"".into()),
            ..PageUpdate::default()
        };
        let html = apply_page_update(PAGE, &update).unwrap();
        assert!(html.contains("<title>Cohen &amp; Levi &lt;Tel Aviv&gt;</title>"));
        assert!(html.contains(r#"<meta name="description" content="Say &quot;hello&quot;">"#));
        assert!(html.contains("<h1>Cohen &amp; Levi</h1>"));

        let content = read_page_content(&html);
        assert_eq!(content.title, "Cohen & Levi <Tel Aviv>");
        assert_eq!(content.meta_description, "Say \"hello\"");
    }

    #[test]
    fn h1_then_main_applies_main_last() {
        let update = PageUpdate {
            h1: Some("ignored".into()),
            main_content: Some("<p>replaced</p>".into()),
            ..PageUpdate::default()
        };
        let html = apply_page_update(PAGE, &update).unwrap();
        assert!(html.contains("<main><p>replaced</p></main>"));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn update_of_missing_region_fails() {
        let update = PageUpdate {
            h1: Some("Title".into()),
            ..PageUpdate::default()
        };
        let err = apply_page_update("<html><body></body></html>", &update).unwrap_err();
        assert_eq!(err, ParserError::RegionNotFound("h1".into()));
    }

    #[test]
    fn inserts_missing_content_attribute() {
        let src = r#"<head><meta name="description"></head>"#;
        let update = PageUpdate {
            meta_description: Some("Family law".into()),
            ..PageUpdate::default()
        };
        let html = apply_page_update(src, &update).unwrap();
        assert_eq!(html, r#"<head><meta name="description" content="Family law"></head>"#);
    }

    #[test]
    fn replaces_empty_content_attribute() {
        let src = r#"<head><meta name="description" content=""></head>"#;
        let update = PageUpdate {
            meta_description: Some("Labor law".into()),
            ..PageUpdate::default()
        };
        let html = apply_page_update(src, &update).unwrap();
        assert_eq!(html, r#"<head><meta name="description" content="Labor law"></head>"#);
    }

    #[test]
    fn lists_catalog_presence() {
        let sections = list_sections(PAGE);
        assert_eq!(sections.len(), SECTION_CATALOG.len());
        let present: Vec<_> = sections
            .iter()
            .filter(|s| s.present)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(present, vec!["hero", "team", "footer"]);
    }

    #[test]
    fn reads_and_replaces_sections() {
        assert_eq!(read_section(PAGE, "team").unwrap(), "<p>Our partners</p>");

        let html = replace_section(PAGE, "team", "<p>Meet the team</p>").unwrap();
        assert_eq!(read_section(&html, "team").unwrap(), "<p>Meet the team</p>");
        assert_eq!(read_section(&html, "footer").unwrap(), "© 2026");
    }

    #[test]
    fn unknown_and_absent_sections() {
        assert_eq!(
            read_section(PAGE, "sidebar").unwrap_err(),
            ParserError::UnknownSection("sidebar".into())
        );
        assert_eq!(
            read_section(PAGE, "contact").unwrap_err(),
            ParserError::RegionNotFound("section 'contact'".into())
        );
    }
}
