pub mod date;
pub(crate) mod input;
pub mod normalize;
pub(crate) mod parse;
pub mod types;

use crate::ScoreError;

pub(crate) fn invalid_input_error(message: &str) -> ScoreError {
    ScoreError::invalid_argument_with_recovery(
        message,
        vec![
            "Provide a CSV statement with headers, or a JSON array of row objects.".to_string(),
            "Run `finscore schema` to review the accepted columns.".to_string(),
        ],
    )
}
