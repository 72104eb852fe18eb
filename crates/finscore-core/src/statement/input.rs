use std::fs;
use std::io::{IsTerminal, Read};

use crate::statement::invalid_input_error;
use crate::{ScoreError, ScoreResult};

#[derive(Debug, Clone)]
pub(crate) struct ResolvedSource {
    pub(crate) source_ref: Option<String>,
    pub(crate) content: String,
}

pub(crate) fn resolve_source(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ScoreResult<ResolvedSource> {
    let stdin_body = read_stdin(stdin_override)?;
    let has_stdin = stdin_body
        .as_ref()
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false);

    if let Some(path_value) = path {
        if path_value == "-" {
            if let Some(stdin_value) = stdin_body
                && !stdin_value.trim().is_empty()
            {
                return Ok(ResolvedSource {
                    source_ref: Some("stdin".to_string()),
                    content: stdin_value,
                });
            }

            return Err(invalid_input_error(
                "Path `-` means stdin input, but stdin was empty. Pipe CSV/JSON statement rows or pass a file path.",
            ));
        }

        let file_body = fs::read_to_string(&path_value).map_err(|error| {
            ScoreError::invalid_argument_with_recovery(
                &format!("Could not read statement file `{path_value}`: {error}"),
                vec![
                    "Verify the path exists and is readable.".to_string(),
                    "Rerun `finscore score <path>`.".to_string(),
                ],
            )
        })?;

        if has_stdin {
            return Err(invalid_input_error(
                "Both stdin and file input were provided. Pass exactly one source: either a file path or piped stdin.",
            ));
        }

        return Ok(ResolvedSource {
            source_ref: Some(path_value),
            content: file_body,
        });
    }

    if let Some(stdin_value) = stdin_body
        && !stdin_value.trim().is_empty()
    {
        return Ok(ResolvedSource {
            source_ref: Some("stdin".to_string()),
            content: stdin_value,
        });
    }

    Err(invalid_input_error(
        "No statement source provided. Pass a file path or pipe input via stdin.",
    ))
}

fn read_stdin(stdin_override: Option<String>) -> ScoreResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(Some(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| {
            ScoreError::invalid_argument_with_recovery(
                &format!("Could not read stdin: {error}"),
                vec![
                    "Retry with an explicit file path argument.".to_string(),
                    "Or rerun with valid stdin content.".to_string(),
                ],
            )
        })?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}

#[cfg(test)]
mod tests {
    use super::resolve_source;

    #[test]
    fn stdin_override_resolves_as_stdin_source() {
        let resolved = resolve_source(None, Some("date\n2026-01-01\n".to_string()));
        assert!(resolved.is_ok());
        if let Ok(source) = resolved {
            assert_eq!(source.source_ref.as_deref(), Some("stdin"));
            assert!(source.content.starts_with("date"));
        }
    }

    #[test]
    fn dash_path_with_empty_stdin_is_rejected() {
        let resolved = resolve_source(Some("-".to_string()), Some("   \n".to_string()));
        assert!(resolved.is_err());
    }

    #[test]
    fn file_plus_stdin_conflict_is_rejected() {
        let file = tempfile::NamedTempFile::new();
        assert!(file.is_ok());
        if let Ok(handle) = file {
            let write = std::fs::write(handle.path(), "date\n2026-01-01\n");
            assert!(write.is_ok());
            let path = handle.path().display().to_string();
            let resolved = resolve_source(Some(path), Some("date\n2026-02-01\n".to_string()));
            assert!(resolved.is_err());
        }
    }

    #[test]
    fn missing_file_produces_guided_error() {
        let resolved = resolve_source(
            Some("/nonexistent/statement.csv".to_string()),
            Some(String::new()),
        );
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.message.contains("statement.csv"));
        }
    }
}
