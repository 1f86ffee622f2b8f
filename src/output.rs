//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde_json::Value;

use crate::ShortenedLink;

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for ShortenedLink {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.url.len().max(30));

        let lines = vec![
            format!("Link: {}", self.url),
            divider,
            format!("Long URL:       {}", self.long_url),
            format!("Hash:           {}", self.hash),
            format!("Global Hash:    {}", self.global_hash),
            format!("New:            {}", if self.new_hash { "yes" } else { "no" }),
        ];

        lines.join("\n")
    }
}

/// Flattens the top level of a JSON object into aligned `key: value` lines.
/// Nested values are printed as compact JSON.
impl PrettyPrint for Value {
    fn pretty_print(&self) -> String {
        match self {
            Value::Object(map) => {
                let width = map.keys().map(String::len).max().unwrap_or(0) + 1;
                map.iter()
                    .map(|(key, value)| {
                        format!("{:<width$} {}", format!("{key}:"), scalar_text(value))
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Value::Array(items) => items
                .iter()
                .map(PrettyPrint::pretty_print)
                .collect::<Vec<_>>()
                .join("\n\n"),
            other => scalar_text(other),
        }
    }
}

/// Strings without quotes, everything else as compact JSON.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shortened_link_pretty_print_format() {
        let link = ShortenedLink {
            url: "http://bit.ly/ze6poY".into(),
            hash: "ze6poY".into(),
            global_hash: "2V6CFi".into(),
            long_url: "http://example.com/".into(),
            new_hash: true,
        };

        let output = link.pretty_print();
        assert!(output.starts_with("Link: http://bit.ly/ze6poY"));
        assert!(output.contains("New:            yes"));
    }

    #[test]
    fn test_value_pretty_print_aligns_keys() {
        let value = json!({"long_url": "http://example.com", "id": 7});
        let output = value.pretty_print();
        assert!(output.contains("long_url: http://example.com"));
        assert!(output.contains("id:       7"));
    }

    #[test]
    fn test_value_pretty_print_is_not_json() {
        let value = json!({"a": "b"});
        assert!(serde_json::from_str::<Value>(&value.pretty_print()).is_err());
    }
}
