use std::io;

use serde_json::Value;

use super::format::{format_feature, format_kes, key_value_rows};

const FEATURE_ORDER: [&str; 7] = [
    "avg_daily_balance",
    "income_regularity",
    "night_ratio",
    "airtime_ratio",
    "rounded_ratio",
    "txns_per_day",
    "low_balance_ratio",
];

pub fn render_score_report(command: &str, data: &Value) -> io::Result<String> {
    let analysis = data
        .get("analysis")
        .ok_or_else(|| io::Error::other("score output requires an analysis block"))?;
    let recommendation = analysis
        .get("recommendation")
        .ok_or_else(|| io::Error::other("score output requires a recommendation block"))?;

    let mut lines = vec![heading(command, data)];

    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.extend(summary_rows(data));

    lines.push(String::new());
    lines.push("Credit analysis:".to_string());
    let score = analysis.get("score").and_then(Value::as_f64).unwrap_or(0.0);
    lines.extend(key_value_rows(
        &[
            ("Credit score:", format!("{score} / 100")),
            (
                "Decision:",
                string_field(recommendation, "decision"),
            ),
            ("Loan amount:", string_field(recommendation, "amount")),
            ("Interest rate:", string_field(recommendation, "interest")),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push(format!("  {}", string_field(recommendation, "message")));

    let reasons = analysis
        .get("reasons")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !reasons.is_empty() {
        lines.push(String::new());
        lines.push("Scoring factors:".to_string());
        for (index, reason) in reasons.iter().enumerate() {
            let text = reason.as_str().unwrap_or("unknown");
            lines.push(format!("  {}. {text}", index + 1));
        }
    }

    lines.push(String::new());
    lines.push("Features:".to_string());
    lines.extend(feature_rows(analysis));

    Ok(lines.join("\n"))
}

fn heading(command: &str, data: &Value) -> String {
    if command == "demo" {
        return "Demo: credit analysis of a bundled sample statement.".to_string();
    }
    match data.get("source").and_then(Value::as_str) {
        Some("stdin") => "Credit analysis completed for piped statement input.".to_string(),
        Some(path) => format!("Credit analysis completed for `{path}`."),
        None => "Credit analysis completed.".to_string(),
    }
}

fn summary_rows(data: &Value) -> Vec<String> {
    let summary = data.get("summary").cloned().unwrap_or(Value::Null);
    let rows_scored = summary
        .get("rows_scored")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let mut entries = vec![("Rows scored:", rows_scored.to_string())];

    let earliest = summary.get("earliest").and_then(Value::as_str);
    let latest = summary.get("latest").and_then(Value::as_str);
    if earliest.is_some() || latest.is_some() {
        entries.push((
            "Data covers:",
            format!(
                "{} to {}",
                earliest.unwrap_or("unknown"),
                latest.unwrap_or("unknown")
            ),
        ));
    }

    for (label, key) in [
        ("Total in:", "total_inflow"),
        ("Total out:", "total_outflow"),
        ("Net flow:", "net_flow"),
    ] {
        if let Some(value) = summary.get(key).and_then(Value::as_f64) {
            entries.push((label, format_kes(value)));
        }
    }

    key_value_rows(&entries, 2)
}

fn feature_rows(analysis: &Value) -> Vec<String> {
    let features = analysis.get("features").cloned().unwrap_or(Value::Null);
    let entries = FEATURE_ORDER
        .iter()
        .filter_map(|name| {
            features
                .get(name)
                .and_then(Value::as_f64)
                .map(|value| (*name, format_feature(value)))
        })
        .collect::<Vec<(&str, String)>>();
    key_value_rows(&entries, 2)
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}
