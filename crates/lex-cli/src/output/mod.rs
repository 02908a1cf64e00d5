use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown first, in this order; the rest follow alphabetically.
const LEADING_COLUMNS: [&str; 8] = [
    "type", "id", "name", "title", "severity", "url", "order", "present",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print text as-is (HTML fragments), regardless of format, unless JSON
/// was asked for explicitly.
pub fn output_text(text: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => output(&text, format),
        OutputFormat::Table | OutputFormat::Raw => {
            println!("{}", text.trim_end());
            Ok(())
        }
    }
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_rows(items),
        Value::Object(map) => {
            // A document with one list-valued field (menus, reports, section
            // lists) renders that list; scalar fields go above it.
            let lists: Vec<(&String, &Vec<Value>)> = map
                .iter()
                .filter_map(|(key, value)| value.as_array().map(|items| (key, items)))
                .collect();
            match lists.as_slice() {
                [(key, items)] => {
                    let scalars = render_key_values(map, Some(key.as_str()));
                    format!("{scalars}\n\n{}", render_rows(items))
                }
                _ => render_key_values(map, None),
            }
        }
        scalar => value_to_cell(scalar),
    }
}

fn render_key_values(map: &Map<String, Value>, skip: Option<&str>) -> String {
    let rows: Vec<Vec<String>> = map
        .iter()
        .filter(|(key, _)| Some(key.as_str()) != skip)
        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
        .collect();
    table::render_table(&["key", "value"], &rows, options())
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![value_to_cell(item)]).collect();
        return table::render_table(&["value"], &rows, options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    headers.sort_by_key(|header| {
        LEADING_COLUMNS
            .iter()
            .position(|leading| *leading == header.as_str())
            .unwrap_or(LEADING_COLUMNS.len())
    });

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect()
        })
        .collect();
    table::render_table(&header_refs, &rows, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        // Nested menus show as a count rather than inline JSON.
        Value::Array(items) => format!("[{}]", items.len()),
        Value::Object(map) => serde_json::to_string(map).unwrap_or_else(|_| String::from("{…}")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        order: u32,
    }

    #[test]
    fn json_render_is_pretty_json() {
        let out = render(&Example { id: "home", order: 1 }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "home");
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "home", order: 1 }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_expands_single_list_field() {
        let menu = json!({
            "lastUpdated": "2026-01-01T00:00:00Z",
            "mainMenu": [
                { "id": "home", "title": "Home", "url": "/", "order": 1, "children": [] },
                { "id": "services", "title": "Services", "url": "/services/", "order": 2,
                  "children": [{ "id": "wills" }] }
            ]
        });
        let out = render(&menu, OutputFormat::Table).unwrap();
        assert!(out.contains("lastUpdated"));
        let header = out
            .lines()
            .find(|line| line.starts_with("id"))
            .expect("row header");
        assert!(header.contains("title"));
        assert!(out.contains("[1]"));
    }

    #[test]
    fn table_render_of_empty_list() {
        let out = render(&Vec::<Example>::new(), OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }
}
