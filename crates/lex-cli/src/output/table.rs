//! Plain aligned tables for terminal output.
//!
//! Widths are measured in characters, not bytes, so Hebrew titles line up
//! with ASCII columns.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect();
    shrink_to(&mut widths, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let rule = "-".repeat(display_width(&header_line));

    let mut lines = vec![header_line, rule];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let clipped = clip(cell, *width);
                let right = is_numeric(&clipped);
                let padded = pad(&clipped, *width, right);
                if options.color {
                    colorize(&clipped, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest columns one character at a time until the row fits.
fn shrink_to(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn clip(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Color severities and sync states; `padded` is the already padded cell.
fn colorize(value: &str, padded: String) -> String {
    let code = match value {
        "true" | "ok" | "in_sync" => "32",
        "warning" | "missing_in_json" | "missing_in_html" | "children_count_mismatch" => "33",
        "false" | "error" | "title_mismatch" | "url_mismatch" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_hebrew_by_characters() {
        let rows = vec![
            vec!["home".to_string(), "דף הבית".to_string(), "1".to_string()],
            vec!["about".to_string(), "About".to_string(), "12".to_string()],
        ];
        let table = render_table(&["id", "title", "order"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id     title    order");
        assert_eq!(lines[2], "home   דף הבית      1");
        assert_eq!(lines[3], "about  About       12");
    }

    #[test]
    fn clips_to_terminal_width() {
        let rows = vec![vec!["x".to_string(), "a".repeat(50)]];
        let options = TableOptions {
            max_width: Some(20),
            color: false,
        };
        let table = render_table(&["id", "description"], &rows, options);
        let last = table.lines().last().unwrap();
        assert!(last.chars().count() <= 20);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn colors_severity_cells() {
        let rows = vec![vec!["error".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["severity"], &rows, options);
        assert!(table.contains("\u{1b}[31merror"));
    }
}
