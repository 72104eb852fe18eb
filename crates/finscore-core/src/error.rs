use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const STATEMENT_HELP_COMMAND: &str = "finscore score --help";
pub(crate) const STATEMENT_HELP_SECTION_TITLE: &str = "Statement Troubleshooting";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ScoreError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ScoreError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_statement_help(self) -> Self {
        self.with_statement_help_data(json!({}))
    }

    pub fn with_statement_help_data(self, data: Value) -> Self {
        self.with_data(merge_statement_help_data(data))
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `finscore {cmd} --help` for usage."),
            None => "Run `finscore --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_statement_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported statement format (JSON array or CSV).".to_string(),
                "Run `finscore schema` to review the accepted columns.".to_string(),
            ],
        )
        .with_statement_help_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn statement_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        let mut expected_headers = required_headers.clone();
        expected_headers.extend(optional_headers.clone());

        Self::new(
            "statement_schema_mismatch",
            "Statement headers do not satisfy the statement schema.",
            vec![
                "Include the required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                "Run `finscore schema` to review required and optional columns.".to_string(),
                "Rerun `finscore score <path>`.".to_string(),
            ],
        )
        .with_statement_help_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "expected_headers": expected_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn statement_date_invalid(row: i64, received: &str) -> Self {
        Self::new(
            "statement_date_invalid",
            &format!(
                "Row {row} has an unparseable date `{received}`. Dates anchor every time-based feature, so the analysis cannot continue."
            ),
            vec![
                "Use YYYY-MM-DD (or DD/MM/YYYY) values in the date column of every row.".to_string(),
                "Fix the listed row in your source file, then rerun `finscore score <path>`."
                    .to_string(),
            ],
        )
        .with_statement_help_data(json!({
            "row": row,
            "received": received,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

fn merge_statement_help_data(mut data: Value) -> Value {
    if !data.is_object() {
        data = json!({});
    }

    if let Some(object) = data.as_object_mut() {
        object.insert(
            "help_command".to_string(),
            Value::String(STATEMENT_HELP_COMMAND.to_string()),
        );
        object.insert(
            "help_section_title".to_string(),
            Value::String(STATEMENT_HELP_SECTION_TITLE.to_string()),
        );
    }

    data
}

pub type ScoreResult<T> = Result<T, ScoreError>;
