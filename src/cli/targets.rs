//! Targets command implementation.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::{Map, Value as JsonValue};

use crate::share::ShareTarget;

/// Execute targets command
pub fn list_targets(json: bool) -> Result<()> {
    let output = if json {
        serde_json::to_string_pretty(&targets_json())?
    } else {
        targets_table()
    };
    println!("{output}");
    Ok(())
}

/// One object per target with name, label, endpoint and parameters
fn targets_json() -> JsonValue {
    let targets = ShareTarget::ALL
        .iter()
        .map(|target| {
            let endpoint = target.endpoint();
            let params: Map<String, JsonValue> = endpoint
                .params
                .iter()
                .map(|&(name, field)| {
                    (
                        name.to_string(),
                        serde_json::to_value(field).unwrap_or_default(),
                    )
                })
                .collect();

            let mut obj = Map::new();
            obj.insert("name".to_string(), JsonValue::from(target.name()));
            obj.insert("label".to_string(), JsonValue::from(target.label()));
            obj.insert("endpoint".to_string(), JsonValue::from(endpoint.base));
            obj.insert("params".to_string(), JsonValue::Object(params));
            JsonValue::Object(obj)
        })
        .collect();

    JsonValue::Array(targets)
}

/// Aligned plain-text table
fn targets_table() -> String {
    let name_width = ShareTarget::ALL
        .iter()
        .map(|t| t.name().len())
        .max()
        .unwrap_or_default();
    let base_width = ShareTarget::ALL
        .iter()
        .map(|t| t.endpoint().base.len())
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(ShareTarget::COUNT);
    for target in ShareTarget::ALL {
        let endpoint = target.endpoint();
        let params = endpoint
            .params
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{}  {:<base_width$}  {}",
            format!("{:<name_width$}", target.name()).bold(),
            endpoint.base,
            params.dimmed(),
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_json() {
        let value = targets_json();
        let targets = value.as_array().unwrap();
        assert_eq!(targets.len(), ShareTarget::COUNT);

        let reddit = &targets[0];
        assert_eq!(reddit["name"], "reddit");
        assert_eq!(reddit["endpoint"], "https://www.reddit.com/submit");
        assert_eq!(reddit["params"]["url"], "url");
        assert_eq!(reddit["params"]["title"], "text");

        let whatsapp = targets.iter().find(|t| t["name"] == "whatsapp").unwrap();
        assert_eq!(whatsapp["params"]["text"], "text_with_url");
    }

    #[test]
    fn test_targets_json_key_order() {
        let value = targets_json();
        let keys: Vec<_> = value[0].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["name", "label", "endpoint", "params"]);
    }

    #[test]
    fn test_targets_table_lists_all() {
        owo_colors::set_override(false);
        let table = targets_table();
        assert_eq!(table.lines().count(), ShareTarget::COUNT);
        for target in ShareTarget::ALL {
            assert!(table.contains(target.endpoint().base));
        }
        assert!(table.contains("url, text, hashtags"));
    }
}
