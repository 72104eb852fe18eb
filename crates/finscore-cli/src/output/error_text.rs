use finscore_core::ScoreError;
use serde_json::Value;

pub fn render_error(error: &ScoreError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    lines.extend(header_guidance(error));

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

/// Schema mismatches carry the expected and received headers in the error
/// data; surfacing them inline saves a round-trip through `finscore schema`.
fn header_guidance(error: &ScoreError) -> Vec<String> {
    let Some(data) = error.data.as_ref() else {
        return Vec::new();
    };
    let required = header_list(data, "required_headers");
    let optional = header_list(data, "optional_headers");
    let actual = header_list(data, "actual_headers");
    if required.is_none() && actual.is_none() {
        return Vec::new();
    }

    let mut lines = vec![String::new()];
    if let Some(value) = required {
        lines.push(format!("  Required headers:  {value}"));
    }
    if let Some(value) = optional {
        lines.push(format!("  Optional headers:  {value}"));
    }
    if let Some(value) = actual {
        lines.push(format!("  Your headers:      {value}"));
    }
    lines
}

fn header_list(data: &Value, key: &str) -> Option<String> {
    let items = data.get(key)?.as_array()?;
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<&str>>()
            .join(", "),
    )
}
