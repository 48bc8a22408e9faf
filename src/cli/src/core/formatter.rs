use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    let mut out = String::new();
    render_value(&value, 0, &mut out);
    out
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// YAML-like rendering: objects as `key: value`, arrays as `- item`.
fn render_value(value: &Value, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    match value {
        Value::Array(items) => {
            for item in items {
                if item.is_array() || item.is_object() {
                    out.push_str(&format!("{pad}-\n"));
                    render_value(item, indent + 2, out);
                } else {
                    out.push_str(&format!("{pad}- {}\n", scalar(item)));
                }
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                if item.is_array() || item.is_object() {
                    out.push_str(&format!("{pad}{key}:\n"));
                    render_value(item, indent + 2, out);
                } else {
                    out.push_str(&format!("{pad}{key}: {}\n", scalar(item)));
                }
            }
        }
        Value::Null => {}
        other => {
            for line in scalar(other).lines() {
                out.push_str(&format!("{pad}{line}\n"));
            }
        }
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => serde_json::to_string_pretty(model).unwrap_or_default(),
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    format!("{empty_msg}\n")
                } else if title.is_empty() {
                    render_text_from_model(list)
                } else {
                    format!("{title}\n{}", render_text_from_model(list))
                }
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string()) + "\n"
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
