//! Tree helpers shared by the extractors and editors.

use std::ops::Range;

use crate::parser::HtmlNode;

/// An HTML attribute: `(name, optional_value)`, value entity-decoded.
pub type HtmlAttr = (String, Option<String>);

/// The `start_tag` (or `self_closing_tag`) child of an element.
pub(crate) fn start_tag<'r>(node: &HtmlNode<'r>) -> Option<HtmlNode<'r>> {
    node.children().find(|c| {
        matches!(c.kind().as_ref(), "start_tag" | "self_closing_tag")
    })
}

/// Extract the lowercased tag name and attributes from an element.
pub(crate) fn tag_info(node: &HtmlNode<'_>) -> Option<(String, Vec<HtmlAttr>)> {
    let tag = start_tag(node)?;
    let tag_name = tag
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?
        .text()
        .to_ascii_lowercase();
    Some((tag_name, extract_attrs_from_tag(&tag)))
}

fn extract_attrs_from_tag(tag_node: &HtmlNode<'_>) -> Vec<HtmlAttr> {
    tag_node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?;
            Some((name.text().to_ascii_lowercase(), attribute_value_text(&attr)))
        })
        .collect()
}

/// Decoded value of an attribute node; `None` for a bare attribute.
fn attribute_value_text(attr: &HtmlNode<'_>) -> Option<String> {
    for child in attr.children() {
        match child.kind().as_ref() {
            "attribute_value" => return Some(decode_entities(&child.text())),
            "quoted_attribute_value" => {
                let inner = child
                    .children()
                    .find(|v| v.kind().as_ref() == "attribute_value");
                return Some(inner.map(|v| decode_entities(&v.text())).unwrap_or_default());
            }
            _ => {}
        }
    }
    None
}

/// Byte range covering an attribute's value including any quotes.
///
/// Returns `None` when the element has no attribute with that name.
pub(crate) fn attribute_value_range(node: &HtmlNode<'_>, name: &str) -> Option<AttrSpan> {
    let tag = start_tag(node)?;
    let attr = tag.children().find(|c| {
        c.kind().as_ref() == "attribute"
            && c.children().any(|n| {
                n.kind().as_ref() == "attribute_name" && n.text().eq_ignore_ascii_case(name)
            })
    })?;
    let value = attr.children().find(|c| {
        matches!(c.kind().as_ref(), "attribute_value" | "quoted_attribute_value")
    });
    Some(match value {
        Some(value) => AttrSpan::Value(value.range()),
        None => AttrSpan::Bare(attr.range().end),
    })
}

/// Location of an attribute value in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttrSpan {
    /// `name="value"`: range of the value, quotes included.
    Value(Range<usize>),
    /// `name` without a value: offset right after the name.
    Bare(usize),
}

pub(crate) fn attr_value(attrs: &[HtmlAttr], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|(n, _)| n == name)
        .and_then(|(_, v)| v.clone())
}

/// Depth-first search for the first element whose tag and attributes match.
pub(crate) fn find_element<'r, F>(node: &HtmlNode<'r>, pred: &F) -> Option<HtmlNode<'r>>
where
    F: Fn(&str, &[HtmlAttr]) -> bool,
{
    if node.kind().as_ref() == "element" {
        if let Some((tag, attrs)) = tag_info(node) {
            if pred(&tag, &attrs) {
                return Some(node.clone());
            }
        }
    }
    node.children().find_map(|child| find_element(&child, pred))
}

/// Like [`find_element`] but never descends into elements tagged `skip`.
pub(crate) fn find_element_outside<'r, F>(
    node: &HtmlNode<'r>,
    skip: &str,
    pred: &F,
) -> Option<HtmlNode<'r>>
where
    F: Fn(&str, &[HtmlAttr]) -> bool,
{
    node.children().find_map(|child| {
        if child.kind().as_ref() == "element" {
            if let Some((tag, attrs)) = tag_info(&child) {
                if pred(&tag, &attrs) {
                    return Some(child.clone());
                }
                if tag == skip {
                    return None;
                }
            }
        }
        find_element_outside(&child, skip, pred)
    })
}

/// Direct child elements with the given tag.
pub(crate) fn child_elements<'r>(node: &HtmlNode<'r>, tag: &str) -> Vec<HtmlNode<'r>> {
    node.children()
        .filter(|c| c.kind().as_ref() == "element")
        .filter(|c| tag_info(c).is_some_and(|(name, _)| name == tag))
        .collect()
}

/// Byte range between the end of the start tag and the start of the end tag.
pub(crate) fn inner_range(node: &HtmlNode<'_>) -> Option<Range<usize>> {
    let start = start_tag(node)?.range().end;
    let end = node
        .children()
        .find(|c| c.kind().as_ref() == "end_tag")?
        .range()
        .start;
    Some(start..end)
}

/// Visible text of an element: entities decoded, whitespace collapsed.
///
/// Adjacent text pieces are joined with a space only when the source between
/// them (ignoring markup) contains whitespace, so `AT&amp;T` stays `AT&T`.
pub(crate) fn text_content(node: &HtmlNode<'_>, source: &str) -> String {
    let mut pieces = Vec::new();
    collect_text(node, &mut pieces);

    let mut out = String::new();
    let mut prev_end: Option<usize> = None;
    for (range, piece) in pieces {
        if let Some(end) = prev_end {
            let gap = source.get(end..range.start).unwrap_or_default();
            if gap_has_whitespace(gap) {
                out.push(' ');
            }
        }
        out.push_str(&piece);
        prev_end = Some(range.end);
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: &HtmlNode<'_>, pieces: &mut Vec<(Range<usize>, String)>) {
    match node.kind().as_ref() {
        "text" => pieces.push((node.range(), node.text().to_string())),
        "entity" => pieces.push((node.range(), decode_entities(&node.text()))),
        "script_element" | "style_element" | "comment" | "start_tag" | "end_tag" => {}
        _ => {
            for child in node.children() {
                collect_text(&child, pieces);
            }
        }
    }
}

fn gap_has_whitespace(gap: &str) -> bool {
    let mut in_tag = false;
    for ch in gap.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag && c.is_whitespace() => return true,
            _ => {}
        }
    }
    false
}

/// Decode the character references that appear in hand-written site markup.
///
/// Unknown references are kept verbatim.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let end = candidate
            .char_indices()
            .take(34)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);
        let decoded = end.and_then(|end| decode_reference(&candidate[1..end]).map(|c| (c, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "copy" => Some('\u{a9}'),
        "rlm" => Some('\u{200f}'),
        "lrm" => Some('\u{200e}'),
        _ => None,
    }
}

/// Escape text for use as element content.
#[must_use]
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}

/// Replace `range` of `source` with `replacement`.
pub(crate) fn splice(source: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(source.len() + replacement.len());
    out.push_str(&source[..range.start]);
    out.push_str(replacement);
    out.push_str(&source[range.end..]);
    out
}

/// Leading whitespace of the line containing `offset`.
pub(crate) fn line_indent(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..offset];
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}
