#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    lines.extend(rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let right_align = is_numeric(&cell);
                match level_color(&cell).filter(|_| options.color) {
                    Some(code) => {
                        let visible = cell.chars().count();
                        let colored = format!("\u{1b}[{code}m{cell}\u{1b}[0m");
                        let hidden = colored.chars().count() - visible;
                        pad(&colored, *width, right_align, hidden)
                    }
                    None => pad(&cell, *width, right_align, 0),
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }));
    lines.join("\n")
}

const MIN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

/// `hidden` is the number of invisible escape characters in `value`.
fn pad(value: &str, width: usize, right_align: bool, hidden: usize) -> String {
    let visible = value.chars().count() - hidden;
    let fill = " ".repeat(width.saturating_sub(visible));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// ANSI color for severity, confidence and difficulty words.
fn level_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "verified" | "high" | "beginner" | "true" | "info" => Some("32"),
        "medium" | "intermediate" | "warning" | "draft" => Some("33"),
        "low" | "advanced" | "error" | "false" | "deprecated" => Some("31"),
        _ => None,
    }
}
