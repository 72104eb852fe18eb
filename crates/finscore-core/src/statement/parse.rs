use std::collections::HashMap;

use serde_json::Value;

use crate::commands::common::{optional_statement_field_names, required_statement_field_names};
use crate::statement::invalid_input_error;
use crate::{ScoreError, ScoreResult};

#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    pub(crate) date: Option<String>,
    pub(crate) time: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) balance: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) description: Option<String>,
}

pub(crate) fn parse_source(content: &str) -> ScoreResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(invalid_input_error("Statement source is empty."));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ScoreError::invalid_statement_format(
            "NDJSON is not supported. Provide a JSON array or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ScoreError::invalid_statement_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(ScoreError::invalid_statement_format(
        "Unsupported statement format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ScoreResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| invalid_input_error("Invalid JSON input. Provide a valid JSON array."))?;

    let Some(items) = parsed.as_array() else {
        return Err(invalid_input_error(
            "JSON input must be a top-level array of transaction objects.",
        ));
    };

    let mut rows = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(invalid_input_error(
                "JSON array entries must all be objects with transaction fields.",
            ));
        };

        rows.push(ParsedRow {
            row: (index as i64) + 1,
            date: read_field(object, "date"),
            time: read_field(object, "time"),
            amount: read_field(object, "amount"),
            balance: read_field(object, "balance"),
            category: read_field(object, "category"),
            description: read_field(object, "description"),
        });
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> ScoreResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    // Statement exports disagree on header casing (`Date` vs `date`), so
    // headers are matched lowercased.
    let headers = reader
        .headers()
        .map_err(|_| invalid_input_error("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_lowercase())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ScoreError::statement_schema_mismatch(
            required_statement_field_names()
                .iter()
                .map(|value| value.to_string())
                .collect(),
            optional_statement_field_names()
                .iter()
                .map(|value| value.to_string())
                .collect(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record =
            result_row.map_err(|_| invalid_input_error("CSV rows are malformed or not UTF-8."))?;

        rows.push(ParsedRow {
            row: (row_index as i64) + 1,
            date: value_for(&record, &index_by_name, "date"),
            time: value_for(&record, &index_by_name, "time"),
            amount: value_for(&record, &index_by_name, "amount"),
            balance: value_for(&record, &index_by_name, "balance"),
            category: value_for(&record, &index_by_name, "category"),
            description: value_for(&record, &index_by_name, "description"),
        });
    }

    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value.to_string())
}

fn read_field(object: &serde_json::Map<String, Value>, field_name: &str) -> Option<String> {
    let value = object
        .iter()
        .find(|(key, _)| key.trim().to_lowercase() == field_name)
        .map(|(_, value)| value)?;

    if value.is_null() {
        return None;
    }

    if let Some(string_value) = value.as_str() {
        if string_value.trim().is_empty() {
            return None;
        }
        return Some(string_value.to_string());
    }

    if let Some(number_value) = value.as_f64() {
        return Some(number_value.to_string());
    }

    Some(value.to_string())
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        let parsed = serde_json::from_str::<Value>(line.trim());
        if let Ok(value) = parsed {
            return value.is_object();
        }
        false
    })
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    if first_line.contains(',') {
        return true;
    }

    // A date-only statement has no comma in its header row but is still CSV.
    let header = first_line.trim().to_lowercase();
    required_statement_field_names()
        .iter()
        .chain(optional_statement_field_names().iter())
        .any(|name| *name == header)
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    let required_fields = required_statement_field_names();
    let optional_fields = optional_statement_field_names();

    for required in &required_fields {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    for header in actual_headers {
        let allowed = required_fields
            .iter()
            .any(|value| value == &header.as_str())
            || optional_fields
                .iter()
                .any(|value| value == &header.as_str());
        if !allowed {
            return false;
        }
    }

    true
}
