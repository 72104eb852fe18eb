use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_schema(data: &Value) -> io::Result<String> {
    let columns = data
        .get("columns")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("schema output requires columns"))?;

    let mut lines = vec![
        "FinScore scores a cleaned statement table, not raw provider exports.".to_string(),
        "Accepted sources: CSV with a header row, or a JSON array of row objects.".to_string(),
        String::new(),
        "Columns:".to_string(),
    ];

    let column_entries = columns
        .iter()
        .map(|column| {
            let name = column.get("name").and_then(Value::as_str).unwrap_or("?");
            let column_type = column.get("type").and_then(Value::as_str).unwrap_or("?");
            let required = column
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let requirement = if required { "required" } else { "optional" };
            (name, format!("{column_type} ({requirement})"))
        })
        .collect::<Vec<(&str, String)>>();
    lines.extend(key_value_rows(&column_entries, 2));

    lines.push(String::new());
    lines.push("Money cleanup:".to_string());
    lines.push(
        "  `KSh` markers, commas, and spacing are stripped from amount and balance".to_string(),
    );
    lines.push("  before parsing; values that still fail to parse count as missing.".to_string());

    if let Some(rules) = data.get("category_rules").and_then(Value::as_array) {
        lines.push(String::new());
        lines.push("Category inference (first matching keyword wins, in order):".to_string());
        let rule_entries = rules
            .iter()
            .map(|rule| {
                let category = rule.get("category").and_then(Value::as_str).unwrap_or("?");
                let keywords = rule
                    .get("keywords")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<&str>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                (category, keywords)
            })
            .collect::<Vec<(&str, String)>>();
        lines.extend(key_value_rows(&rule_entries, 2));
        lines.push("  Anything unmatched counts as Unknown.".to_string());
    }

    if let Some(bands) = data.get("decision_bands").and_then(Value::as_array) {
        lines.push(String::new());
        lines.push("Decision bands (first matching band, highest first):".to_string());
        for band in bands {
            let decision = band.get("decision").and_then(Value::as_str).unwrap_or("?");
            let amount = band.get("amount").and_then(Value::as_str).unwrap_or("?");
            let interest = band.get("interest").and_then(Value::as_str).unwrap_or("?");
            let label = match band.get("min_score").and_then(Value::as_f64) {
                Some(threshold) => format!("score >= {threshold}"),
                None => "below every band".to_string(),
            };
            lines.push(format!(
                "  {label:<18} {decision:<12} {amount} at {interest}"
            ));
        }
    }

    lines.push(String::new());
    lines.push("Score a statement:".to_string());
    lines.push("  finscore score <path>".to_string());
    lines.push("  cat statement.csv | finscore score -".to_string());

    Ok(lines.join("\n"))
}
