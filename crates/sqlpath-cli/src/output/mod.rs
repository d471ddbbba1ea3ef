use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

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

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> String {
    let options = table_options();
    match value {
        Value::Array(items) => render_rows(items),
        Value::Object(map) => {
            // Field order follows serialization order.
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            let mut rendered = table::render_table(&["field", "value"], &rows, options);

            // A nested list of records (e.g. a path's concepts) gets its own table.
            for (key, nested) in map {
                if let Value::Array(items) = nested {
                    if !items.is_empty() && items.iter().all(Value::is_object) {
                        rendered.push_str(&format!("\n\n{key}:\n{}", render_rows(items)));
                    }
                }
            }
            rendered
        }
        Value::Null => String::from("(none)"),
        scalar => table::render_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    }
}

fn render_rows(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    // Columns in first-seen order.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(|item| !item.is_object() && !item.is_array()) => {
            items.iter().map(value_to_cell).collect::<Vec<_>>().join(", ")
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => format!("{{{} fields}}", map.len()),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Concept {
        id: &'static str,
        minutes: u32,
    }

    #[derive(Serialize)]
    struct Path {
        key: &'static str,
        steps: Vec<&'static str>,
        concepts: Vec<Concept>,
    }

    fn sample() -> Path {
        Path {
            key: "missing_comma_in_select",
            steps: vec!["syntax-error", "select-basic"],
            concepts: vec![
                Concept {
                    id: "syntax-error",
                    minutes: 3,
                },
                Concept {
                    id: "select-basic",
                    minutes: 5,
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&sample(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["key"], "missing_comma_in_select");
        assert_eq!(parsed["concepts"][1]["minutes"], 5);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with("{\"key\":"));
    }

    #[test]
    fn table_render_keeps_field_order_and_expands_records() {
        let out = render(&sample(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("field"));
        assert!(lines[2].starts_with("key"));
        assert!(lines[3].contains("syntax-error, select-basic"));
        assert!(lines[4].contains("[2 items]"));
        assert!(out.contains("concepts:"));
        assert!(out.lines().any(|line| line.starts_with("id") && line.contains("minutes")));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty: Vec<Concept> = Vec::new();
        let out = render(&empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn absent_value_renders_placeholder() {
        let out = render(&Option::<Concept>::None, OutputFormat::Table).unwrap();
        assert_eq!(out, "(none)");
    }
}
